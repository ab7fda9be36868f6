use async_trait::async_trait;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use time::macros::format_description;
use time::{Date, PrimitiveDateTime, Time};

use crate::error::Error;

/// One lesson as delivered by the timetable endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEvent {
  #[serde(rename = "tafel_datum")]
  pub date: String,
  #[serde(rename = "tafel_von")]
  pub start: String,
  #[serde(rename = "tafel_bis")]
  pub end: String,
  #[serde(rename = "tafel_longfach", default, deserialize_with = "text")]
  pub subject: String,
  #[serde(rename = "tafel_lehrer", default, deserialize_with = "text")]
  pub teacher: String,
  #[serde(rename = "tafel_raum", default, deserialize_with = "text")]
  pub room: String,
  #[serde(rename = "tafel_kommentar", default, deserialize_with = "text")]
  pub comment: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayEvent {
  pub start: PrimitiveDateTime,
  pub end: PrimitiveDateTime,
  pub subject: String,
  pub teacher: String,
  pub room: String,
  pub comment: String,
}

pub type DaySchedule = Vec<DisplayEvent>;

/// Lessons per date (`YYYY-MM-DD`), dates in chronological order.
pub type WeekSchedule = IndexMap<String, DaySchedule>;

/// Remote source of the lessons of a class.
#[async_trait]
pub trait EventSource: Send + Sync {
  /// `week` is formatted as `<week>-<year>`.
  async fn fetch_events(&self, class_id: &str, week: &str) -> anyhow::Result<Vec<RawEvent>>;
}

impl TryFrom<RawEvent> for DisplayEvent {
  type Error = Error;

  fn try_from(event: RawEvent) -> Result<Self, Self::Error> {
    Ok(Self {
      start: combine(&event.date, &event.start)?,
      end: combine(&event.date, &event.end)?,
      subject: event.subject,
      teacher: event.teacher,
      room: event.room,
      comment: event.comment,
    })
  }
}

/// Sorts lessons by date and start, then groups them per date.
///
/// Both are compared as strings, the fixed width formats make this
/// chronological. The sort is stable so equal lessons keep their order.
pub fn group(mut events: Vec<RawEvent>) -> Result<WeekSchedule, Error> {
  events.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.start.cmp(&b.start)));

  let mut schedule = WeekSchedule::new();
  for event in events {
    let date = event.date.clone();
    let event = DisplayEvent::try_from(event)?;
    schedule.entry(date).or_default().push(event);
  }

  Ok(schedule)
}

/// Free text columns may be `null`, that is read as empty text.
fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
  Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn combine(date: &str, time: &str) -> Result<PrimitiveDateTime, Error> {
  let invalid = || Error::InvalidEvent {
    date: date.to_string(),
    time: time.to_string(),
  };

  let day = Date::parse(date.trim(), format_description!("[year]-[month]-[day]"))
    .map_err(|_| invalid())?;

  let time = time.trim();
  let clock = Time::parse(time, format_description!("[hour]:[minute]:[second]"))
    .or_else(|_| Time::parse(time, format_description!("[hour]:[minute]")))
    .map_err(|_| invalid())?;

  Ok(PrimitiveDateTime::new(day, clock))
}
