use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use time::Date;

use crate::error::Error;
use crate::week::iso_week;

/// A quartal is a fixed block of 52 / 4 weeks, not a calendar quarter.
pub const WEEKS_PER_QUARTAL: u8 = 52 / 4;
const QUARTALS: u8 = 4;

/// The week of a year whose lessons are displayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarWindow {
  week: u8,
  year: i32,
}

impl CalendarWindow {
  pub fn new(week: u8, year: i32) -> Result<Self, Error> {
    if !(1..=53).contains(&week) {
      return Err(Error::MalformedWindow { week });
    }

    Ok(Self { week, year })
  }

  /// The ISO week `date` falls into.
  pub fn containing(date: Date) -> Self {
    let (week, year) = iso_week(date);
    Self { week, year }
  }

  pub fn week(&self) -> u8 {
    self.week
  }

  pub fn year(&self) -> i32 {
    self.year
  }

  /// Re-runs the range check, windows are only built through this module so a
  /// failure here is a bug in the arithmetic below.
  pub(crate) fn check(self) -> Result<Self, Error> {
    Self::new(self.week, self.year)
  }

  /// 1-based quartal index, `round(week / 13)`. Weeks 1 to 6 yield 0.
  pub fn quartal(&self) -> u8 {
    (self.week + WEEKS_PER_QUARTAL / 2) / WEEKS_PER_QUARTAL
  }

  /// Key the event source expects, `<week>-<year>` without padding.
  pub fn key(&self) -> String {
    self.to_string()
  }
}

impl Display for CalendarWindow {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}-{}", self.week, self.year)
  }
}

/// Direction the view slides in from. Has no effect on the loaded data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavigationDirection {
  ForwardInTime,
  BackwardInTime,
}

/// Window stored by the previous session, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Persisted {
  pub week: Option<u8>,
  pub year: Option<i32>,
}

impl From<CalendarWindow> for Persisted {
  fn from(window: CalendarWindow) -> Self {
    Self {
      week: Some(window.week),
      year: Some(window.year),
    }
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Navigation {
  /// Show the last viewed window again.
  Reload,
  NextWeek,
  PreviousWeek,
  NextQuartal,
  PreviousQuartal,
  Today,
}

impl Navigation {
  pub fn resolve(self, persisted: Persisted, today: Date) -> (CalendarWindow, NavigationDirection) {
    use NavigationDirection::{BackwardInTime, ForwardInTime};

    match self {
      Navigation::Reload => (current(persisted, today), ForwardInTime),
      Navigation::NextWeek => (next_week(persisted, today), ForwardInTime),
      Navigation::PreviousWeek => (previous_week(persisted, today), BackwardInTime),
      Navigation::NextQuartal => (next_quartal(persisted, today), ForwardInTime),
      Navigation::PreviousQuartal => (previous_quartal(persisted, today), BackwardInTime),
      Navigation::Today => go_to_today(persisted, today),
    }
  }
}

/// The persisted window, falling back to the ISO week of `today` and its
/// calendar year.
///
/// A week above 52 is folded back by 52 while the year stays as it is. Quartal
/// navigation instead rolls the year over.
pub fn current(persisted: Persisted, today: Date) -> CalendarWindow {
  let mut week = persisted.week.unwrap_or_else(|| iso_week(today).0);
  if week > 52 {
    week = (week - 1) % 52 + 1;
  }

  CalendarWindow {
    week,
    year: persisted.year.unwrap_or(today.year()),
  }
}

pub fn next_week(persisted: Persisted, today: Date) -> CalendarWindow {
  let current = current(persisted, today);

  CalendarWindow {
    week: current.week + 1,
    ..current
  }
}

/// Stepping back from week 1 does not cross into the previous year, the
/// window stays where it is.
pub fn previous_week(persisted: Persisted, today: Date) -> CalendarWindow {
  let current = current(persisted, today);

  match current.week - 1 {
    0 => current,
    week => CalendarWindow { week, ..current },
  }
}

pub fn next_quartal(persisted: Persisted, today: Date) -> CalendarWindow {
  let current = current(persisted, today);
  let mut year = current.year;

  let mut quartal = current.quartal() + 1;
  if quartal > QUARTALS {
    quartal = 1;
    year += 1;
  }

  CalendarWindow {
    week: quartal * WEEKS_PER_QUARTAL,
    year,
  }
}

pub fn previous_quartal(persisted: Persisted, today: Date) -> CalendarWindow {
  let current = current(persisted, today);
  let mut year = current.year;

  let mut quartal = current.quartal().saturating_sub(1);
  if quartal < 1 {
    quartal = QUARTALS;
    year -= 1;
  }

  CalendarWindow {
    week: quartal * WEEKS_PER_QUARTAL,
    year,
  }
}

/// Jumps to the week containing `today`. The view moves backward in time when
/// the persisted window lies after today within the same or a later year.
pub fn go_to_today(persisted: Persisted, today: Date) -> (CalendarWindow, NavigationDirection) {
  let target = CalendarWindow::containing(today);

  let direction = match (persisted.week, persisted.year) {
    (Some(week), Some(year)) if year >= target.year && week > target.week => {
      NavigationDirection::BackwardInTime
    }
    _ => NavigationDirection::ForwardInTime,
  };

  (target, direction)
}
