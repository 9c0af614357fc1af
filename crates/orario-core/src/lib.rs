pub mod clock;
pub mod config;
pub mod format;
pub mod locale;
pub mod log;
pub mod surface;

pub use clock::{Clock, DATE_SELECTOR, TIME_SELECTOR};
pub use locale::Locale;
pub use surface::{MemorySurface, Surface, TargetId};
