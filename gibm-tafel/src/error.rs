pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
  /// The event source did not answer successfully.
  #[error("unable to fetch events")]
  Fetch(#[source] BoxError),
  /// A window outside of 1..=53, a bug in the window arithmetic.
  #[error("week {week} is outside of 1..=53")]
  MalformedWindow { week: u8 },
  /// A lesson whose date or time does not parse.
  #[error("lesson on {date} at {time} has no valid date or time")]
  InvalidEvent { date: String, time: String },
  /// The selection store failed to write.
  #[error("unable to persist selection")]
  Store(#[source] BoxError),
}
