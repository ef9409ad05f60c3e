// Durable storage for app state. Values are JSON documents stored under a handful of fixed keys.
//
// Loading never fails: missing or malformed data is logged and replaced with a default value,
// so a corrupted file costs the user their data but never the ability to use the app.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::{error, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;
use strum::{EnumIter, IntoStaticStr};


#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum StoreKey {
    Players,
    Teams,
    Scores,
}

impl StoreKey {
    pub fn name(self) -> &'static str { self.into() }
}

pub trait KeyValueStore {
    fn get(&self, key: StoreKey) -> anyhow::Result<Option<String>>;
    fn set(&mut self, key: StoreKey, value: &str) -> anyhow::Result<()>;
}

// One `<key>.json` file per key.
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self { FileStore { dir: dir.into() } }

    pub fn dir(&self) -> &Path { &self.dir }

    fn path(&self, key: StoreKey) -> PathBuf { self.dir.join(format!("{}.json", key.name())) }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: StoreKey) -> anyhow::Result<Option<String>> {
        let path = self.path(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err).context(format!("Failed to read '{}'.", path.display())),
        }
    }

    fn set(&mut self, key: StoreKey, value: &str) -> anyhow::Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create '{}'.", self.dir.display()))?;
        let path = self.path(key);
        // Write to a temporary file first so that a crash never leaves a truncated document.
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, value)
            .with_context(|| format!("Failed to write '{}'.", tmp_path.display()))?;
        fs::rename(&tmp_path, &path)
            .with_context(|| format!("Failed to replace '{}'.", path.display()))?;
        Ok(())
    }
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<StoreKey, String>,
}

impl MemoryStore {
    pub fn new() -> Self { Self::default() }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: StoreKey) -> anyhow::Result<Option<String>> {
        Ok(self.entries.get(&key).cloned())
    }

    fn set(&mut self, key: StoreKey, value: &str) -> anyhow::Result<()> {
        self.entries.insert(key, value.to_owned());
        Ok(())
    }
}

pub fn try_load<T: DeserializeOwned>(
    store: &impl KeyValueStore, key: StoreKey,
) -> anyhow::Result<Option<T>> {
    let Some(contents) = store.get(key)? else {
        return Ok(None);
    };
    let value = serde_json::from_str(&contents)
        .with_context(|| format!("Malformed '{}' data.", key.name()))?;
    Ok(Some(value))
}

pub fn load_or_default<T: DeserializeOwned + Default>(
    store: &impl KeyValueStore, key: StoreKey,
) -> T {
    match try_load(store, key) {
        Ok(Some(value)) => value,
        Ok(None) => T::default(),
        Err(err) => {
            warn!("Cannot load {}, starting from scratch: {:#}", key.name(), err);
            T::default()
        }
    }
}

pub fn try_save<T: Serialize>(
    store: &mut impl KeyValueStore, key: StoreKey, value: &T,
) -> anyhow::Result<()> {
    let contents = serde_json::to_string(value)
        .with_context(|| format!("Failed to serialize '{}'.", key.name()))?;
    store.set(key, &contents)
}

// Returns whether the value was saved. Failures are only logged: the next state change will
// write the value again.
pub fn save<T: Serialize>(store: &mut impl KeyValueStore, key: StoreKey, value: &T) -> bool {
    match try_save(store, key, value) {
        Ok(()) => true,
        Err(err) => {
            error!("Cannot save {}: {:#}", key.name(), err);
            false
        }
    }
}
