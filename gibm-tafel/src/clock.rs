use time::{Date, OffsetDateTime};

/// Source of the current date used whenever nothing has been persisted yet.
pub trait Clock {
  fn today(&self) -> Date;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
  fn today(&self) -> Date {
    OffsetDateTime::now_utc().date()
  }
}

/// A fixed day, mostly useful in tests.
impl Clock for Date {
  fn today(&self) -> Date {
    *self
  }
}
