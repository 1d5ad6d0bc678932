use std::env;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use dotcfg::commands::{get, init, list_keys, replace, set, show, unset};
use dotcfg::{ConfigStore, Result, StoreSettings};

const USAGE: &str = "Usage: dotcfg [--home DIR] [--prefix P] [--file NAME] <app> [init|show|list|get|set|replace|unset|path|help]";

fn print_help() {
    println!("Usage:");
    println!("  dotcfg [--home DIR] [--prefix P] [--file NAME] <app> <command>");
    println!();
    println!("Commands:");
    println!("  init [JSON]          create ~/.<app>/config.json, seeded with JSON if new");
    println!("  show                 print the whole document");
    println!("  list [--filter TXT]  table of top-level keys");
    println!("  get <key>            print one value");
    println!("  set <key> <value>    merge one key (value parsed as JSON, else string)");
    println!("  replace <JSON>       overwrite the whole document");
    println!("  unset [key]          remove a key (interactive when omitted)");
    println!("  path                 print the config file path");
}

/// Global flags and the remaining positional arguments.
struct Cli {
    settings: StoreSettings,
    rest: Vec<String>,
}

fn parse_args(args: &[String]) -> Option<Cli> {
    let mut home = None;
    let mut prefix = None;
    let mut file = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--home" => { home = Some(args.get(i + 1)?.clone()); i += 2; }
            "--prefix" => { prefix = Some(args.get(i + 1)?.clone()); i += 2; }
            "--file" => { file = Some(args.get(i + 1)?.clone()); i += 2; }
            _ => break,
        }
    }

    let app = args.get(i)?.clone();
    let mut settings = StoreSettings::new(app);
    if let Some(h) = home {
        settings = settings.with_home(shellexpand::tilde(&h).to_string());
    }
    if let Some(p) = prefix {
        settings = settings.with_prefix(p);
    }
    if let Some(f) = file {
        settings = settings.with_config_file_name(f);
    }
    Some(Cli { settings, rest: args[i + 1..].to_vec() })
}

/// Commands that read or write the document and so need `setup` first.
fn is_store_command(command: Option<&str>) -> bool {
    matches!(
        command,
        None | Some("show" | "list" | "get" | "set" | "replace" | "unset" | "rm")
    )
}

fn run(cli: Cli) -> Result<()> {
    let mut store: ConfigStore = ConfigStore::new(cli.settings);
    let rest = cli.rest;

    if let Some("path") = rest.first().map(String::as_str) {
        println!("{}", store.config_path()?.display());
        return Ok(());
    }
    if let Some("init") = rest.first().map(String::as_str) {
        return init(&mut store, rest.get(1).map(String::as_str));
    }

    let command = rest.first().map(String::as_str);
    if !is_store_command(command) {
        if command == Some("help") { print_help() } else { println!("{USAGE}") }
        return Ok(());
    }

    // Every other command works on a ready store.
    store.setup(None)?;

    match rest.first().map(String::as_str) {
        Some("show") | None => show(&mut store)?,
        Some("list") => {
            let filter = if rest.get(1).map(String::as_str) == Some("--filter") {
                rest.get(2).map(String::as_str)
            } else {
                None
            };
            list_keys(store.get_config()?, filter);
        }
        Some("get") => match rest.get(1) {
            Some(key) => get(&store, key)?,
            None => println!("Usage: dotcfg <app> get <key>"),
        },
        Some("set") => match (rest.get(1), rest.get(2)) {
            (Some(key), Some(value)) => set(&mut store, key, value)?,
            _ => println!("Usage: dotcfg <app> set <key> <value>"),
        },
        Some("replace") => match rest.get(1) {
            Some(json) => replace(&mut store, json)?,
            None => println!("Usage: dotcfg <app> replace <JSON>"),
        },
        Some("unset") | Some("rm") => unset(&mut store, rest.get(1).cloned())?,
        Some(_) => println!("{USAGE}"),
    }
    Ok(())
}

fn main() -> ExitCode {
    // Logs go to stderr; level from RUST_LOG.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    if matches!(args.first().map(String::as_str), None | Some("help") | Some("--help") | Some("-h")) {
        print_help();
        return ExitCode::SUCCESS;
    }

    let Some(cli) = parse_args(&args) else {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("dotcfg: {e}");
            ExitCode::FAILURE
        }
    }
}
