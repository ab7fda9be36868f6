use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::Context;
use gibm_tafel::{Key, SelectionStore};

/// Selection persisted as a flat json object, rewritten on every change.
pub struct FileStore {
  path: PathBuf,
  values: BTreeMap<String, String>,
}

impl FileStore {
  pub fn open(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
    let path = path.into();

    let values = match std::fs::read_to_string(&path) {
      Ok(text) => serde_json::from_str(&text)
        .with_context(|| format!("{} is not a valid state file", path.display()))?,
      Err(err) if err.kind() == ErrorKind::NotFound => BTreeMap::new(),
      Err(err) => return Err(err.into()),
    };

    Ok(Self { path, values })
  }

  fn flush(&self) -> anyhow::Result<()> {
    std::fs::write(&self.path, serde_json::to_string_pretty(&self.values)?)
      .with_context(|| format!("unable to write {}", self.path.display()))
  }
}

impl SelectionStore for FileStore {
  fn get(&self, key: Key) -> Option<String> {
    self.values.get(key.as_str()).cloned()
  }

  fn set(&mut self, key: Key, value: String) -> anyhow::Result<()> {
    self.values.insert(key.as_str().to_string(), value);
    self.flush()
  }

  fn remove(&mut self, key: Key) -> anyhow::Result<()> {
    if self.values.remove(key.as_str()).is_some() {
      self.flush()?;
    }
    Ok(())
  }
}

#[cfg(test)]
mod test {
  use gibm_tafel::{Key, SelectionStore};

  use crate::state::FileStore;

  #[test]
  fn survives_reopening() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("state.json");

    let mut store = FileStore::open(&path)?;
    assert_eq!(store.get(Key::Week), None);
    store.set(Key::Week, "42".to_string())?;
    store.set(Key::Class, "2559".to_string())?;
    store.remove(Key::Class)?;

    let store = FileStore::open(&path)?;
    assert_eq!(store.get(Key::Week).as_deref(), Some("42"));
    assert_eq!(store.get(Key::Class), None);

    let text = std::fs::read_to_string(&path)?;
    assert!(text.contains("\"selectedWeek\": \"42\""));

    Ok(())
  }

  #[test]
  fn rejects_broken_file() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("state.json");
    std::fs::write(&path, "{ not json")?;

    assert!(FileStore::open(&path).is_err());

    Ok(())
  }
}
