pub use clock::{Clock, SystemClock};
pub use error::Error;
pub use resolver::{Rendered, Resolver};
pub use schedule::{DaySchedule, DisplayEvent, EventSource, RawEvent, WeekSchedule};
pub use store::{Key, MemoryStore, SelectionStore};
pub use window::{CalendarWindow, Navigation, NavigationDirection, Persisted};

mod clock;
mod error;
mod resolver;
pub mod schedule;
pub mod selection;
pub mod store;
pub mod week;
pub mod window;
