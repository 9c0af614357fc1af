use std::sync::mpsc;

use orario_core::clock::{Clock, DATE_SELECTOR, TIME_SELECTOR};
use orario_core::{log, log_error, log_info};
use orario_term::{ClockRunner, TermSurface};

/// Runs the clock in the terminal until Ctrl+C.
pub fn execute(lang: Option<String>) {
    let config = super::load_config(lang);
    log::init(&config.logging);

    // Lay out the block up front: time line first, date line below it
    // when date display is on. The renderer finds both by selector.
    let mut surface = TermSurface::new();
    surface.add_line(TIME_SELECTOR);
    if config.clock.show_date {
        surface.add_line(DATE_SELECTOR);
    }

    log_info!(
        "starting clock: lang={}, time_format={:?}",
        config.clock.lang,
        config.clock.time_format
    );

    let clock = Clock::new(config.clock, surface);
    let mut runner = ClockRunner::start(clock);

    // Block until Ctrl+C, then cancel the schedule cleanly.
    let (tx, rx) = mpsc::channel::<()>();
    if let Err(e) = ctrlc::set_handler(move || {
        let _ = tx.send(());
    }) {
        log_error!("failed to register Ctrl+C handler: {e}");
        eprintln!("Error: failed to register Ctrl+C handler: {e}");
        return;
    }
    let _ = rx.recv();

    runner.stop();
    log_info!("clock stopped");
}
