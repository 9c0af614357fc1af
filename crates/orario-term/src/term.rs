//! Terminal implementation of the surface abstraction.
//!
//! Each target is one line of a block at the bottom of the terminal.
//! On every text change the whole block is redrawn in place with ANSI
//! cursor movement, so the clock updates without scrolling.

use std::io::{self, Stdout, Write};

use orario_core::surface::{Surface, TargetId};

const CURSOR_UP: &str = "\x1b[A";
const CLEAR_LINE: &str = "\x1b[2K";

/// A surface that renders its targets as terminal lines.
///
/// Generic over the output writer so tests can capture the escape
/// stream; production code uses [`TermSurface::new`] over stdout.
pub struct TermSurface<W: Write = Stdout> {
    out: W,
    lines: Vec<Line>,
    /// Number of lines currently on screen from the last redraw.
    painted: usize,
}

struct Line {
    selector: String,
    text: String,
}

impl TermSurface<Stdout> {
    /// Creates a surface writing to stdout.
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TermSurface<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TermSurface<W> {
    /// Creates a surface writing to an arbitrary writer.
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            lines: Vec::new(),
            painted: 0,
        }
    }

    /// Pre-registers a line, fixing its position in the block.
    ///
    /// Callers use this to lay out the block before handing the
    /// surface to the renderer (e.g. date line below the time line).
    pub fn add_line(&mut self, selector: &str) -> TargetId {
        self.lines.push(Line {
            selector: selector.to_string(),
            text: String::new(),
        });
        TargetId::new(self.lines.len() - 1)
    }

    /// Moves the cursor back over the block and rewrites every line.
    fn redraw(&mut self) {
        let mut frame = String::new();
        for _ in 0..self.painted {
            frame.push_str(CURSOR_UP);
        }
        for line in &self.lines {
            frame.push('\r');
            frame.push_str(CLEAR_LINE);
            frame.push_str(&line.text);
            frame.push('\n');
        }
        self.painted = self.lines.len();
        let _ = self.out.write_all(frame.as_bytes());
        let _ = self.out.flush();
    }
}

impl<W: Write> Surface for TermSurface<W> {
    fn find(&mut self, selector: &str) -> Option<TargetId> {
        self.lines
            .iter()
            .position(|l| l.selector == selector)
            .map(TargetId::new)
    }

    fn find_or_create(&mut self, selector: &str) -> TargetId {
        match self.find(selector) {
            Some(id) => id,
            None => self.add_line(selector),
        }
    }

    fn set_text(&mut self, target: TargetId, text: &str) {
        let Some(line) = self.lines.get_mut(target.index()) else {
            return;
        };
        if line.text == text {
            return; // nothing changed, skip the repaint
        }
        text.clone_into(&mut line.text);
        self.redraw();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_lines_with_clear_codes() {
        // Arrange
        let mut surface = TermSurface::with_writer(Vec::new());
        let id = surface.find_or_create("clock--time");

        // Act
        surface.set_text(id, "14:05:07");

        // Assert
        let out = String::from_utf8(surface.out.clone()).unwrap();
        assert!(out.contains("14:05:07"));
        assert!(out.contains(CLEAR_LINE));
        assert!(!out.contains(CURSOR_UP)); // first paint, nothing above to erase
    }

    #[test]
    fn second_write_moves_cursor_back_up() {
        // Arrange
        let mut surface = TermSurface::with_writer(Vec::new());
        let id = surface.find_or_create("clock--time");
        surface.set_text(id, "14:05:07");

        // Act
        surface.set_text(id, "14:05:08");

        // Assert
        let out = String::from_utf8(surface.out.clone()).unwrap();
        assert!(out.contains(CURSOR_UP));
        assert!(out.contains("14:05:08"));
    }

    #[test]
    fn unchanged_text_skips_repaint() {
        // Arrange
        let mut surface = TermSurface::with_writer(Vec::new());
        let id = surface.find_or_create("clock--time");
        surface.set_text(id, "14:05:07");
        let before = surface.out.len();

        // Act
        surface.set_text(id, "14:05:07");

        // Assert
        assert_eq!(surface.out.len(), before);
    }

    #[test]
    fn pre_registered_lines_keep_their_order() {
        // Arrange
        let mut surface = TermSurface::with_writer(Vec::new());
        let time = surface.add_line("clock--time");
        let date = surface.add_line("clock--date");

        // Act
        surface.set_text(time, "one");
        surface.set_text(date, "two");

        // Assert
        let out = String::from_utf8(surface.out.clone()).unwrap();
        let time_pos = out.rfind("one").unwrap();
        let date_pos = out.rfind("two").unwrap();
        assert!(time_pos < date_pos);
        assert_eq!(surface.find("clock--time"), Some(time));
        assert_eq!(surface.find("clock--date"), Some(date));
    }
}
