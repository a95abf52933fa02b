use crate::error::{PregrepError, Result};
use crate::options::SearchOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const STORE_VERSION: u32 = 1;

/// On-disk shape of the preset store. Presets are an array of tables so the
/// file round-trips insertion order.
#[derive(Debug, Serialize, Deserialize)]
struct StoreFile {
    version: u32,
    #[serde(default, rename = "preset")]
    presets: Vec<PresetEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
struct PresetEntry {
    key: String,
    options: SearchOptions,
}

/// Persisted key -> SearchOptions mapping backing `-S` and `-s`.
///
/// Single-writer by design: saves are a plain read-modify-write with
/// last-writer-wins semantics, which is acceptable for single-user
/// interactive use.
#[derive(Debug)]
pub struct OptionStore {
    path: PathBuf,
}

impl OptionStore {
    /// Opens the store at its fixed location under the user config
    /// directory. `PREGREP_CONFIG_DIR` overrides the directory.
    pub fn open_default() -> Result<Self> {
        let dir = match std::env::var_os("PREGREP_CONFIG_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => dirs::config_dir()
                .ok_or_else(|| PregrepError::Other("no user config directory found".to_string()))?
                .join("pregrep"),
        };
        Self::open(dir.join("presets.toml"))
    }

    /// Opens the store at `path`, initializing an empty store file on first
    /// use. Existing content is loaded once up front so a corrupt store
    /// fails the run before any scanning starts.
    pub fn open(path: PathBuf) -> Result<Self> {
        let store = Self { path };
        if store.path.exists() {
            store.load_all()?;
        } else {
            if let Some(parent) = store.path.parent() {
                fs::create_dir_all(parent)?;
            }
            store.write(&StoreFile {
                version: STORE_VERSION,
                presets: Vec::new(),
            })?;
        }
        Ok(store)
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn load_all(&self) -> Result<StoreFile> {
        let content = fs::read_to_string(&self.path)?;
        let store: StoreFile =
            toml::from_str(&content).map_err(|e| PregrepError::StorageCorrupt {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;
        if store.version > STORE_VERSION {
            return Err(PregrepError::StorageCorrupt {
                path: self.path.clone(),
                reason: format!("unsupported store version {}", store.version),
            });
        }
        Ok(store)
    }

    fn write(&self, store: &StoreFile) -> Result<()> {
        let content = toml::to_string_pretty(store)
            .map_err(|e| PregrepError::Other(format!("failed to serialize option store: {e}")))?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<SearchOptions> {
        self.load_all()?
            .presets
            .into_iter()
            .find(|p| p.key == key)
            .map(|p| p.options)
            .ok_or_else(|| PregrepError::PresetNotFound(key.to_string()))
    }

    /// Stores `options` under `key`, replacing any existing entry. The
    /// stored copy has `save_key` cleared so a save instruction never
    /// persists itself.
    pub fn save(&self, key: &str, options: &SearchOptions) -> Result<()> {
        let mut store = self.load_all()?;
        let mut stored = options.clone();
        stored.save_key = None;
        match store.presets.iter_mut().find(|p| p.key == key) {
            Some(entry) => entry.options = stored,
            None => store.presets.push(PresetEntry {
                key: key.to_string(),
                options: stored,
            }),
        }
        self.write(&store)
    }

    /// All presets in insertion order, for `--list`.
    pub fn list_all(&self) -> Result<Vec<(String, SearchOptions)>> {
        Ok(self
            .load_all()?
            .presets
            .into_iter()
            .map(|p| (p.key, p.options))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample(query: &str) -> SearchOptions {
        SearchOptions {
            query: query.to_string(),
            encoding: Some("utf-8".to_string()),
            target: "src/**/*.rs".to_string(),
            ignore_linehead_to: 4,
            show_only_filename: true,
            save_key: Some("self".to_string()),
        }
    }

    #[test]
    fn first_open_initializes_empty_store() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/presets.toml");
        let store = OptionStore::open(path.clone()).unwrap();
        assert!(path.exists());
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn save_then_get_round_trips_with_save_key_cleared() {
        let dir = tempdir().unwrap();
        let store = OptionStore::open(dir.path().join("presets.toml")).unwrap();
        store.save("k", &sample("ERROR")).unwrap();

        let got = store.get("k").unwrap();
        assert_eq!(got.query, "ERROR");
        assert_eq!(got.encoding.as_deref(), Some("utf-8"));
        assert_eq!(got.target, "src/**/*.rs");
        assert_eq!(got.ignore_linehead_to, 4);
        assert!(got.show_only_filename);
        assert_eq!(got.save_key, None);
    }

    #[test]
    fn get_unknown_key_is_preset_not_found() {
        let dir = tempdir().unwrap();
        let store = OptionStore::open(dir.path().join("presets.toml")).unwrap();
        let err = store.get("missing").unwrap_err();
        assert!(matches!(err, PregrepError::PresetNotFound(k) if k == "missing"));
    }

    #[test]
    fn save_replaces_existing_entry_in_place() {
        let dir = tempdir().unwrap();
        let store = OptionStore::open(dir.path().join("presets.toml")).unwrap();
        store.save("a", &sample("one")).unwrap();
        store.save("b", &sample("two")).unwrap();
        store.save("a", &sample("three")).unwrap();

        let all = store.list_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].0, "a");
        assert_eq!(all[0].1.query, "three");
        assert_eq!(all[1].0, "b");
    }

    #[test]
    fn list_preserves_insertion_order() {
        let dir = tempdir().unwrap();
        let store = OptionStore::open(dir.path().join("presets.toml")).unwrap();
        for key in ["zeta", "alpha", "mid"] {
            store.save(key, &sample(key)).unwrap();
        }
        let keys: Vec<_> = store.list_all().unwrap().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn corrupt_store_is_fatal_at_open() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("presets.toml");
        std::fs::write(&path, "not [ valid toml").unwrap();
        let err = OptionStore::open(path).unwrap_err();
        assert!(matches!(err, PregrepError::StorageCorrupt { .. }));
    }

    #[test]
    fn future_store_version_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("presets.toml");
        std::fs::write(&path, "version = 99\n").unwrap();
        let err = OptionStore::open(path).unwrap_err();
        assert!(matches!(err, PregrepError::StorageCorrupt { .. }));
    }
}
