//! The UI surface abstraction the renderer writes through.
//!
//! A surface is a flat tree of text targets addressed by selector
//! strings. The renderer only ever resolves targets once and then
//! writes text into them, so the trait stays deliberately small.

use std::sync::{Arc, Mutex};

/// Opaque handle to a display target on a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetId(usize);

impl TargetId {
    /// Builds a handle from a surface-internal index.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// The surface-internal index this handle wraps.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A tree of text targets the clock can render into.
///
/// Implementations decide what a selector maps to — a terminal line,
/// an in-memory slot, a widget. The renderer never creates structure
/// after initialization; it only writes text.
pub trait Surface {
    /// Returns the target matching `selector`, if present.
    fn find(&mut self, selector: &str) -> Option<TargetId>;

    /// Returns the target matching `selector`, creating it if absent.
    fn find_or_create(&mut self, selector: &str) -> TargetId;

    /// Replaces the text content of `target`.
    fn set_text(&mut self, target: TargetId, text: &str);
}

/// Shared surfaces: lets a test (or another thread) keep a handle to
/// inspect what the renderer wrote.
impl<S: Surface> Surface for Arc<Mutex<S>> {
    fn find(&mut self, selector: &str) -> Option<TargetId> {
        self.lock().map(|mut s| s.find(selector)).unwrap_or(None)
    }

    fn find_or_create(&mut self, selector: &str) -> TargetId {
        match self.lock() {
            Ok(mut s) => s.find_or_create(selector),
            Err(_) => TargetId::new(0),
        }
    }

    fn set_text(&mut self, target: TargetId, text: &str) {
        if let Ok(mut s) = self.lock() {
            s.set_text(target, text);
        }
    }
}

/// In-memory surface.
///
/// Used by tests and by one-shot rendering, where the frame is read
/// back out instead of being drawn anywhere.
#[derive(Debug, Default)]
pub struct MemorySurface {
    targets: Vec<(String, String)>,
    writes: usize,
}

impl MemorySurface {
    /// Creates an empty surface with no targets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeds a target, as a host page would when it already
    /// contains the element.
    pub fn insert(&mut self, selector: &str) -> TargetId {
        self.targets.push((selector.to_string(), String::new()));
        TargetId::new(self.targets.len() - 1)
    }

    /// Returns the current text of the target matching `selector`.
    pub fn text(&self, selector: &str) -> Option<&str> {
        self.targets
            .iter()
            .find(|(s, _)| s == selector)
            .map(|(_, t)| t.as_str())
    }

    /// Total number of `set_text` calls observed.
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl Surface for MemorySurface {
    fn find(&mut self, selector: &str) -> Option<TargetId> {
        self.targets
            .iter()
            .position(|(s, _)| s == selector)
            .map(TargetId::new)
    }

    fn find_or_create(&mut self, selector: &str) -> TargetId {
        match self.find(selector) {
            Some(id) => id,
            None => self.insert(selector),
        }
    }

    fn set_text(&mut self, target: TargetId, text: &str) {
        if let Some((_, t)) = self.targets.get_mut(target.index()) {
            text.clone_into(t);
            self.writes += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_or_create_reuses_existing_target() {
        // Arrange
        let mut surface = MemorySurface::new();
        let first = surface.find_or_create("a");

        // Act
        let second = surface.find_or_create("a");

        // Assert
        assert_eq!(first, second);
    }

    #[test]
    fn find_does_not_create() {
        // Arrange
        let mut surface = MemorySurface::new();

        // Act / Assert
        assert!(surface.find("missing").is_none());
        assert!(surface.text("missing").is_none());
    }

    #[test]
    fn set_text_overwrites_and_counts() {
        // Arrange
        let mut surface = MemorySurface::new();
        let id = surface.find_or_create("a");

        // Act
        surface.set_text(id, "one");
        surface.set_text(id, "two");

        // Assert
        assert_eq!(surface.text("a"), Some("two"));
        assert_eq!(surface.write_count(), 2);
    }

    #[test]
    fn shared_surface_writes_through() {
        // Arrange
        let shared = Arc::new(Mutex::new(MemorySurface::new()));
        let mut handle = shared.clone();

        // Act
        let id = handle.find_or_create("a");
        handle.set_text(id, "hello");

        // Assert
        assert_eq!(shared.lock().unwrap().text("a"), Some("hello"));
    }
}
