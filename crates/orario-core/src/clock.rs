//! The clock renderer.
//!
//! Resolves its display targets once at construction, then produces
//! one localized time/date frame per [`render`](Clock::render) call.
//! Scheduling lives elsewhere — the renderer itself has no notion of
//! a timer.

use chrono::{Datelike, Local, Timelike};

use crate::config::{ClockConfig, TimeStyle};
use crate::format;
use crate::locale::{self, Locale};
use crate::surface::{Surface, TargetId};

/// Selector for the time display target. Created when absent.
pub const TIME_SELECTOR: &str = "clock--time";

/// Selector for the date display target. Never created; when the
/// surface has no such target, date rendering is skipped.
pub const DATE_SELECTOR: &str = "clock--date";

/// Renders the current time and date into a [`Surface`].
pub struct Clock<S: Surface> {
    config: ClockConfig,
    locale: &'static Locale,
    surface: S,
    time_target: TargetId,
    date_target: Option<TargetId>,
}

impl<S: Surface> Clock<S> {
    /// Creates a renderer over `surface`.
    ///
    /// Resolves the locale (unknown codes fall back to en-GB), ensures
    /// the time target exists, and looks up the optional date target.
    /// Never fails.
    pub fn new(config: ClockConfig, mut surface: S) -> Self {
        let locale = locale::lookup(&config.lang);
        let time_target = surface.find_or_create(TIME_SELECTOR);
        let date_target = surface.find(DATE_SELECTOR);
        Self {
            config,
            locale,
            surface,
            time_target,
            date_target,
        }
    }

    /// Renders one frame at the current wall-clock time.
    pub fn render(&mut self) {
        self.render_at(&Local::now().naive_local());
    }

    /// Renders one frame at a given instant.
    ///
    /// Split out from [`render`](Self::render) so tests can inject
    /// fixed instants instead of racing the real clock.
    pub fn render_at<T: Datelike + Timelike>(&mut self, now: &T) {
        if self.config.show_time {
            let text = self.time_text(now);
            self.surface.set_text(self.time_target, &text);
        }
        if self.config.show_date
            && let Some(target) = self.date_target
        {
            let text = format::format(now, &self.config.date_format, self.locale);
            self.surface.set_text(target, &text);
        }
    }

    fn time_text<T: Datelike + Timelike>(&self, now: &T) -> String {
        let pattern = match self.config.time_format {
            TimeStyle::Twelve => "%-I:%M:%S %p",
            TimeStyle::TwentyFour => "%H:%M:%S",
        };
        format::format(now, pattern, self.locale)
    }

    /// The locale the renderer resolved at construction.
    pub fn locale(&self) -> &'static Locale {
        self.locale
    }

    /// Read access to the underlying surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Consumes the renderer and returns its surface.
    pub fn into_surface(self) -> S {
        self.surface
    }
}
