use orario_core::clock::{Clock, DATE_SELECTOR, TIME_SELECTOR};
use orario_core::surface::MemorySurface;

/// Renders a single frame and prints it to stdout.
pub fn execute(lang: Option<String>) {
    let config = super::load_config(lang);

    let mut surface = MemorySurface::new();
    if config.clock.show_date {
        surface.insert(DATE_SELECTOR);
    }

    let mut clock = Clock::new(config.clock, surface);
    clock.render();

    let surface = clock.into_surface();
    if let Some(time) = surface.text(TIME_SELECTOR)
        && !time.is_empty()
    {
        println!("{time}");
    }
    if let Some(date) = surface.text(DATE_SELECTOR)
        && !date.is_empty()
    {
        println!("{date}");
    }
}
