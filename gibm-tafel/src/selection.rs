//! Bookkeeping of the chosen job and class.

use crate::error::Error;
use crate::store::{Key, SelectionStore};

/// Picking a job invalidates the class chosen before.
pub fn choose_job<S: SelectionStore + ?Sized>(store: &mut S, job_id: &str) -> Result<(), Error> {
  store.set(Key::Job, job_id.to_string()).map_err(store_error)?;
  store.remove(Key::Class).map_err(store_error)?;
  store
    .set(Key::SelectionComplete, "0".to_string())
    .map_err(store_error)
}

pub fn choose_class<S: SelectionStore + ?Sized>(
  store: &mut S,
  class_id: &str,
) -> Result<(), Error> {
  store
    .set(Key::Class, class_id.to_string())
    .map_err(store_error)?;
  store
    .set(Key::SelectionComplete, "1".to_string())
    .map_err(store_error)
}

pub fn is_complete<S: SelectionStore + ?Sized>(store: &S) -> bool {
  store.get(Key::SelectionComplete).as_deref() == Some("1")
}

pub fn selected_job<S: SelectionStore + ?Sized>(store: &S) -> Option<String> {
  store.get(Key::Job).filter(|value| !value.is_empty())
}

pub fn selected_class<S: SelectionStore + ?Sized>(store: &S) -> Option<String> {
  store.get(Key::Class).filter(|value| !value.is_empty())
}

pub(crate) fn store_error(err: anyhow::Error) -> Error {
  Error::Store(err.into())
}
