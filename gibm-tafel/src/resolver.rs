use tracing::{debug, info};

use crate::clock::{Clock, SystemClock};
use crate::error::Error;
use crate::schedule::{group, EventSource, WeekSchedule};
use crate::selection::store_error;
use crate::store::{persisted, Key, SelectionStore};
use crate::window::{self, CalendarWindow, Navigation, NavigationDirection};

/// Everything the view needs to draw a week.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rendered {
  pub window: CalendarWindow,
  pub direction: NavigationDirection,
  pub schedule: WeekSchedule,
}

/// Turns navigation intents into loaded weeks and keeps the last viewed week
/// in the store.
pub struct Resolver<E, S, C = SystemClock> {
  source: E,
  store: S,
  clock: C,
}

impl<E, S> Resolver<E, S, SystemClock> {
  pub fn new(source: E, store: S) -> Self {
    Self::with_clock(source, store, SystemClock)
  }
}

impl<E, S, C> Resolver<E, S, C> {
  pub fn with_clock(source: E, store: S, clock: C) -> Self {
    Self {
      source,
      store,
      clock,
    }
  }

  pub fn source(&self) -> &E {
    &self.source
  }

  pub fn store(&self) -> &S {
    &self.store
  }
}

impl<E, S, C> Resolver<E, S, C>
where
  E: EventSource,
  S: SelectionStore,
  C: Clock,
{
  pub fn current_window(&self) -> CalendarWindow {
    window::current(persisted(&self.store), self.clock.today())
  }

  pub fn next_week(&self) -> CalendarWindow {
    window::next_week(persisted(&self.store), self.clock.today())
  }

  pub fn previous_week(&self) -> CalendarWindow {
    window::previous_week(persisted(&self.store), self.clock.today())
  }

  pub fn next_quartal(&self) -> CalendarWindow {
    window::next_quartal(persisted(&self.store), self.clock.today())
  }

  pub fn previous_quartal(&self) -> CalendarWindow {
    window::previous_quartal(persisted(&self.store), self.clock.today())
  }

  pub fn go_to_today(&self) -> (CalendarWindow, NavigationDirection) {
    window::go_to_today(persisted(&self.store), self.clock.today())
  }

  /// Fetches and groups the lessons of `class_id` in `window`.
  ///
  /// The window and class are only persisted once the lessons are loaded. An
  /// empty schedule means there are no lessons that week.
  pub async fn load_window(
    &mut self,
    class_id: &str,
    window: CalendarWindow,
  ) -> Result<WeekSchedule, Error> {
    let window = window.check()?;

    let events = self
      .source
      .fetch_events(class_id, &window.key())
      .await
      .map_err(|err| Error::Fetch(err.into()))?;
    let lessons = events.len();

    let schedule = group(events)?;

    self
      .store
      .set(Key::Week, window.week().to_string())
      .map_err(store_error)?;
    self
      .store
      .set(Key::Year, window.year().to_string())
      .map_err(store_error)?;
    self
      .store
      .set(Key::Class, class_id.to_string())
      .map_err(store_error)?;

    info!(
      "Loaded {} lessons on {} days for class {} in week {}",
      lessons,
      schedule.len(),
      class_id,
      window
    );

    Ok(schedule)
  }

  pub async fn navigate(
    &mut self,
    class_id: &str,
    navigation: Navigation,
  ) -> Result<Rendered, Error> {
    let (window, direction) = navigation.resolve(persisted(&self.store), self.clock.today());
    debug!("Resolved {:?} to week {} ({:?})", navigation, window, direction);

    let schedule = self.load_window(class_id, window).await?;

    Ok(Rendered {
      window,
      direction,
      schedule,
    })
  }
}
