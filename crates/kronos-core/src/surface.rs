//! Drawing interface for timer panels.
//!
//! Panels do not own a display. The caller hands a [`Surface`] to every
//! operation that draws, so two panels can share one canvas without any
//! global state.

use kronos_common::types::{Rect, Rgb};

/// A target that panels draw into.
pub trait Surface {
    /// Fills `rect` with a solid color, clearing any text inside it.
    fn fill_rect(&mut self, rect: Rect, color: Rgb);

    /// Draws a single line of text centered inside `rect`.
    ///
    /// Text wider than `rect` is clipped to it.
    fn draw_text_centered(&mut self, rect: Rect, text: &str, color: Rgb);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        (**self).fill_rect(rect, color);
    }

    fn draw_text_centered(&mut self, rect: Rect, text: &str, color: Rgb) {
        (**self).draw_text_centered(rect, text, color);
    }
}

/// A single recorded draw call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    /// A [`Surface::fill_rect`] call.
    Fill {
        /// Filled area.
        rect: Rect,
        /// Fill color.
        color: Rgb,
    },
    /// A [`Surface::draw_text_centered`] call.
    Text {
        /// Area the text was centered in.
        rect: Rect,
        /// Drawn text.
        text: String,
        /// Text color.
        color: Rgb,
    },
}

/// A surface that only records what was drawn on it.
///
/// Used for headless checks of panel rendering.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Creates an empty recorder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// All draw calls seen so far, oldest first.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// The color of the most recent fill, if any.
    #[must_use]
    pub fn last_fill(&self) -> Option<Rgb> {
        self.commands.iter().rev().find_map(|cmd| match cmd {
            DrawCommand::Fill { color, .. } => Some(*color),
            DrawCommand::Text { .. } => None,
        })
    }

    /// The most recent text drawn, if any.
    #[must_use]
    pub fn last_text(&self) -> Option<&str> {
        self.commands.iter().rev().find_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            DrawCommand::Fill { .. } => None,
        })
    }

    /// Forgets every recorded call.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Surface for RecordingSurface {
    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        self.commands.push(DrawCommand::Fill { rect, color });
    }

    fn draw_text_centered(&mut self, rect: Rect, text: &str, color: Rgb) {
        self.commands.push(DrawCommand::Text {
            rect,
            text: text.to_owned(),
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paint(mut surface: impl Surface) {
        surface.fill_rect(Rect::new(0, 0, 2, 2), Rgb::RED);
        surface.draw_text_centered(Rect::new(0, 0, 2, 2), "hi", Rgb::WHITE);
    }

    #[test]
    fn recorder_keeps_calls_in_order() {
        let mut rec = RecordingSurface::new();
        paint(&mut rec);
        assert_eq!(rec.commands().len(), 2);
        assert_eq!(rec.last_fill(), Some(Rgb::RED));
        assert_eq!(rec.last_text(), Some("hi"));
    }

    #[test]
    fn clear_forgets_calls() {
        let mut rec = RecordingSurface::new();
        paint(&mut rec);
        rec.clear();
        assert!(rec.commands().is_empty());
        assert_eq!(rec.last_fill(), None);
    }
}
