use std::collections::HashMap;

use crate::window::Persisted;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
  Job,
  Class,
  Week,
  Year,
  SelectionComplete,
}

impl Key {
  pub const fn as_str(self) -> &'static str {
    match self {
      Key::Job => "selectedJob",
      Key::Class => "selectedClass",
      Key::Week => "selectedWeek",
      Key::Year => "selectedYear",
      Key::SelectionComplete => "selectionComplete",
    }
  }
}

/// String key-value store holding the last selection between sessions.
pub trait SelectionStore {
  fn get(&self, key: Key) -> Option<String>;

  fn set(&mut self, key: Key, value: String) -> anyhow::Result<()>;

  fn remove(&mut self, key: Key) -> anyhow::Result<()>;
}

/// Reads the last viewed window. Values that do not parse, or are zero, count
/// as never stored.
pub fn persisted<S: SelectionStore + ?Sized>(store: &S) -> Persisted {
  Persisted {
    week: store
      .get(Key::Week)
      .and_then(|value| value.trim().parse::<u8>().ok())
      .filter(|week| *week != 0),
    year: store
      .get(Key::Year)
      .and_then(|value| value.trim().parse::<i32>().ok())
      .filter(|year| *year != 0),
  }
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
  values: HashMap<Key, String>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }
}

impl<const N: usize> From<[(Key, &str); N]> for MemoryStore {
  fn from(values: [(Key, &str); N]) -> Self {
    Self {
      values: values
        .into_iter()
        .map(|(key, value)| (key, value.to_string()))
        .collect(),
    }
  }
}

impl SelectionStore for MemoryStore {
  fn get(&self, key: Key) -> Option<String> {
    self.values.get(&key).cloned()
  }

  fn set(&mut self, key: Key, value: String) -> anyhow::Result<()> {
    self.values.insert(key, value);
    Ok(())
  }

  fn remove(&mut self, key: Key) -> anyhow::Result<()> {
    self.values.remove(&key);
    Ok(())
  }
}
