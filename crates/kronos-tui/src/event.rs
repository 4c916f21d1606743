//! Terminal event handling.
//!
//! Maps raw `crossterm` events onto the handful of actions the main loop
//! understands. Everything else is drained and discarded.

use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What the main loop should do in response to an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Terminate the process.
    Quit,
    /// Begin ticking the panels.
    Start,
    /// Present the current frame again (e.g. after a resize).
    Redraw,
    /// Discard the event.
    Ignore,
}

impl InputAction {
    /// Classifies a terminal event.
    #[must_use]
    pub fn from_event(event: &Event) -> Self {
        match event {
            Event::Key(key) => Self::from_key(key),
            Event::Resize(..) => Self::Redraw,
            _ => Self::Ignore,
        }
    }

    /// Classifies a key event.
    ///
    /// Ctrl+W and Ctrl+C quit, `s` starts. Key releases are ignored so
    /// platforms that report them do not double-fire.
    #[must_use]
    pub fn from_key(key: &KeyEvent) -> Self {
        if key.kind == KeyEventKind::Release {
            return Self::Ignore;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('w' | 'W' | 'c' | 'C') if ctrl => Self::Quit,
            KeyCode::Char('s' | 'S') => Self::Start,
            _ => Self::Ignore,
        }
    }
}

/// Where the main loop gets its input from.
pub trait EventSource {
    /// Returns every event already queued, without blocking.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read.
    fn drain_pending(&mut self) -> std::io::Result<Vec<Event>>;
}

/// Input read from the controlling terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn drain_pending(&mut self) -> std::io::Result<Vec<Event>> {
        let mut events = Vec::new();
        while crossterm::event::poll(Duration::ZERO)? {
            events.push(crossterm::event::read()?);
        }
        Ok(events)
    }
}
