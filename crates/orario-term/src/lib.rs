pub mod runner;
pub mod term;

pub use runner::{ClockRunner, TICK_INTERVAL};
pub use term::TermSurface;
