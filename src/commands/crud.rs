use inquire::{Confirm, Select};
use serde_json::Map;
use tracing::info;

use crate::error::Result;
use crate::store::ConfigStore;
use crate::util::{parse_object, parse_value};

/// Set up the store, seeding a new file with `initial` when given.
pub fn init(store: &mut ConfigStore, initial: Option<&str>) -> Result<()> {
    let initial = initial.map(parse_object).transpose()?;
    store.setup(initial)?;
    println!("Config ready at {}", store.config_path()?.display());
    Ok(())
}

pub fn show(store: &mut ConfigStore) -> Result<()> {
    let doc = store.get_config()?;
    println!("{}", serde_json::to_string_pretty(doc)?);
    Ok(())
}

pub fn get(store: &ConfigStore, key: &str) -> Result<()> {
    match store.get_value(key)? {
        Some(v) => println!("{}", serde_json::to_string_pretty(&v)?),
        None => println!("Key '{}' not found.", key),
    }
    Ok(())
}

/// Merge-write a single key.
pub fn set(store: &mut ConfigStore, key: &str, raw: &str) -> Result<()> {
    let mut partial = Map::new();
    partial.insert(key.to_string(), parse_value(raw));
    store.write_config(&partial)?;
    info!(key, "value written");
    println!("Set '{}'.", key);
    Ok(())
}

/// Overwrite the whole document.
pub fn replace(store: &mut ConfigStore, raw: &str) -> Result<()> {
    let doc = parse_object(raw)?;
    store.write_config_with(&doc, false)?;
    println!("Replaced config ({} key(s)).", doc.len());
    Ok(())
}

/// Remove a key. Without one, pick it interactively and confirm.
pub fn unset(store: &mut ConfigStore, key: Option<String>) -> Result<()> {
    let key = match key {
        Some(k) => k,
        None => {
            let mut choices: Vec<String> = store.reload()?.keys().cloned().collect();
            if choices.is_empty() { println!("No keys to remove."); return Ok(()); }
            choices.sort();
            let Ok(choice) = Select::new("Choose key to remove:", choices).prompt() else { return Ok(()); };
            let confirmed = Confirm::new(&format!("Remove '{}'?", choice))
                .with_default(false)
                .prompt()
                .unwrap_or(false);
            if !confirmed { return Ok(()); }
            choice
        }
    };

    let existed = store.get_value(&key)?.is_some();
    store.remove_config_value(&key)?;
    if existed {
        println!("Removed '{}'.", key);
    } else {
        println!("Key '{}' was not set.", key);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StoreSettings;
    use serde_json::{json, Value};
    use tempfile::TempDir;

    fn ready_store(tmp: &TempDir) -> ConfigStore {
        let mut store: ConfigStore = ConfigStore::new(StoreSettings::new("cli-app").with_home(tmp.path()));
        init(&mut store, None).unwrap();
        store
    }

    #[test]
    fn init_seeds_from_json_argument() {
        let tmp = TempDir::new().unwrap();
        let mut store: ConfigStore = ConfigStore::new(StoreSettings::new("cli-app").with_home(tmp.path()));
        init(&mut store, Some(r#"{"port": 8080}"#)).unwrap();
        assert_eq!(store.get_value("port").unwrap(), Some(json!(8080)));
    }

    #[test]
    fn init_rejects_non_object_seed() {
        let tmp = TempDir::new().unwrap();
        let mut store: ConfigStore = ConfigStore::new(StoreSettings::new("cli-app").with_home(tmp.path()));
        assert!(init(&mut store, Some("[1]")).is_err());
        assert!(!store.config_dir().unwrap().exists());
    }

    #[test]
    fn set_parses_json_values() {
        let tmp = TempDir::new().unwrap();
        let mut store = ready_store(&tmp);
        set(&mut store, "count", "3").unwrap();
        set(&mut store, "name", "plain text").unwrap();
        let doc = store.get_config().unwrap();
        assert_eq!(doc.get("count"), Some(&json!(3)));
        assert_eq!(doc.get("name"), Some(&json!("plain text")));
    }

    #[test]
    fn replace_drops_old_keys() {
        let tmp = TempDir::new().unwrap();
        let mut store = ready_store(&tmp);
        set(&mut store, "old", "1").unwrap();
        replace(&mut store, r#"{"new": true}"#).unwrap();
        assert_eq!(Value::Object(store.get_config().unwrap().clone()), json!({"new": true}));
    }

    #[test]
    fn unset_with_key_removes_it() {
        let tmp = TempDir::new().unwrap();
        let mut store = ready_store(&tmp);
        set(&mut store, "gone", "1").unwrap();
        unset(&mut store, Some("gone".into())).unwrap();
        unset(&mut store, Some("never-there".into())).unwrap();
        assert!(store.get_config().unwrap().is_empty());
    }
}
