//! Repeating tick schedule for the clock renderer.
//!
//! One background thread renders a frame per tick. The stop signal
//! travels over a channel, so `stop()` takes effect within one
//! `recv_timeout` rather than a full sleep period. A tick that is
//! already rendering always completes.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use orario_core::clock::Clock;
use orario_core::surface::Surface;

/// Period between renders.
pub const TICK_INTERVAL: Duration = Duration::from_millis(1000);

/// Owns the tick thread driving a [`Clock`].
///
/// Dropping the runner stops the schedule.
pub struct ClockRunner {
    stop_tx: Sender<()>,
    thread: Option<JoinHandle<()>>,
}

impl ClockRunner {
    /// Renders one frame immediately, then every [`TICK_INTERVAL`].
    pub fn start<S>(clock: Clock<S>) -> Self
    where
        S: Surface + Send + 'static,
    {
        Self::start_with_interval(clock, TICK_INTERVAL)
    }

    /// Like [`start`](Self::start) with a custom period.
    pub fn start_with_interval<S>(mut clock: Clock<S>, interval: Duration) -> Self
    where
        S: Surface + Send + 'static,
    {
        clock.render();

        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let thread = thread::spawn(move || {
            loop {
                match stop_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => clock.render(),
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
        });

        Self {
            stop_tx,
            thread: Some(thread),
        }
    }

    /// Cancels the schedule and waits for the tick thread to finish.
    ///
    /// Safe to call more than once; later calls are no-ops.
    pub fn stop(&mut self) {
        let Some(thread) = self.thread.take() else {
            return;
        };
        let _ = self.stop_tx.send(());
        let _ = thread.join();
    }

    /// Whether the tick thread is still scheduled.
    pub fn is_running(&self) -> bool {
        self.thread.is_some()
    }
}

impl Drop for ClockRunner {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use orario_core::clock::TIME_SELECTOR;
    use orario_core::config::ClockConfig;
    use orario_core::surface::MemorySurface;

    use super::*;

    fn shared_clock() -> (Clock<Arc<Mutex<MemorySurface>>>, Arc<Mutex<MemorySurface>>) {
        let surface = Arc::new(Mutex::new(MemorySurface::new()));
        let clock = Clock::new(ClockConfig::default(), surface.clone());
        (clock, surface)
    }

    #[test]
    fn start_renders_immediately() {
        // Arrange
        let (clock, surface) = shared_clock();

        // Act: a long interval, so only the immediate render can fire.
        let mut runner = ClockRunner::start_with_interval(clock, Duration::from_secs(60));

        // Assert
        {
            let s = surface.lock().unwrap();
            assert_eq!(s.write_count(), 1);
            assert!(s.text(TIME_SELECTOR).is_some());
        }
        runner.stop();
    }

    #[test]
    fn ticks_keep_rendering() {
        // Arrange
        let (clock, surface) = shared_clock();
        let mut runner = ClockRunner::start_with_interval(clock, Duration::from_millis(10));

        // Act
        thread::sleep(Duration::from_millis(80));
        runner.stop();

        // Assert: immediate render plus several ticks.
        assert!(surface.lock().unwrap().write_count() > 2);
    }

    #[test]
    fn no_writes_after_stop() {
        // Arrange
        let (clock, surface) = shared_clock();
        let mut runner = ClockRunner::start_with_interval(clock, Duration::from_millis(10));
        thread::sleep(Duration::from_millis(30));

        // Act
        runner.stop();
        let frozen = surface.lock().unwrap().write_count();
        thread::sleep(Duration::from_millis(50));

        // Assert: time advanced past several tick boundaries, no writes.
        assert_eq!(surface.lock().unwrap().write_count(), frozen);
        assert!(!runner.is_running());
    }

    #[test]
    fn stop_is_idempotent() {
        // Arrange
        let (clock, _surface) = shared_clock();
        let mut runner = ClockRunner::start_with_interval(clock, Duration::from_millis(10));

        // Act / Assert: second stop must not hang or panic.
        runner.stop();
        runner.stop();
    }

    #[test]
    fn drop_stops_the_schedule() {
        // Arrange
        let (clock, surface) = shared_clock();
        let runner = ClockRunner::start_with_interval(clock, Duration::from_millis(10));

        // Act
        drop(runner);
        let frozen = surface.lock().unwrap().write_count();
        thread::sleep(Duration::from_millis(50));

        // Assert
        assert_eq!(surface.lock().unwrap().write_count(), frozen);
    }
}
