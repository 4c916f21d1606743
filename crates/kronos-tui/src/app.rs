//! TUI application state machine.
//!
//! Owns the canvas and both timer panels, applies input actions, and
//! advances the panels once the run has started.

use std::time::Instant;

use kronos_common::config::KronosConfig;
use kronos_common::error::Result;
use kronos_core::panel::{PanelStyle, TimerPanel};

use crate::canvas::Canvas;
use crate::event::InputAction;

/// Which phase of the session the app is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Blank canvas, waiting for the start key.
    Waiting,
    /// Panels are ticking.
    Running,
}

/// Root application state for the TUI.
#[derive(Debug)]
pub struct App {
    /// Whether the main loop should keep iterating.
    pub running: bool,
    /// Current session phase.
    pub phase: Phase,
    canvas: Canvas,
    left: TimerPanel,
    right: TimerPanel,
}

impl App {
    /// Builds the canvas and lays out both panels side by side.
    ///
    /// # Errors
    ///
    /// Returns an error if the config fails validation.
    pub fn new(config: &KronosConfig) -> Result<Self> {
        config.validate()?;
        let canvas = Canvas::new(config.width, config.height, config.left.idle_color);
        let (left_rect, right_rect) = canvas.bounds().split_horizontally();
        let style = PanelStyle::from_config(config);
        tracing::debug!(%left_rect, %right_rect, "panel layout");

        Ok(Self {
            running: true,
            phase: Phase::Waiting,
            canvas,
            left: TimerPanel::new(left_rect, &config.left, &style),
            right: TimerPanel::new(right_rect, &config.right, &style),
        })
    }

    /// Signals the app to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Starts the run. Returns `false` if it was already started.
    pub fn start(&mut self) -> bool {
        if self.phase == Phase::Running {
            return false;
        }
        tracing::info!("Lets go");
        self.phase = Phase::Running;
        true
    }

    /// Applies an input action.
    ///
    /// Returns `true` when the current frame must be presented again.
    pub fn handle(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::Quit => {
                self.quit();
                false
            }
            InputAction::Start => {
                let _ = self.start();
                false
            }
            InputAction::Redraw => true,
            InputAction::Ignore => false,
        }
    }

    /// Polls both panels at `now` if the run has started.
    ///
    /// Both panels are always polled; returns `true` if either redrew.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        let left = self.left.poll(now, &mut self.canvas);
        let right = self.right.poll(now, &mut self.canvas);
        left || right
    }

    /// Whether the panels are ticking.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.phase == Phase::Running
    }

    /// The shared display surface.
    #[must_use]
    pub const fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// The left (decimal) and right (standard) panels.
    #[must_use]
    pub const fn panels(&self) -> (&TimerPanel, &TimerPanel) {
        (&self.left, &self.right)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use kronos_common::types::PanelState;

    use super::*;

    fn app() -> App {
        App::new(&KronosConfig::default()).unwrap()
    }

    #[test]
    fn new_app_waits_for_start() {
        let app = app();
        assert!(app.running);
        assert_eq!(app.phase, Phase::Waiting);
        let (left, right) = app.panels();
        assert_eq!(left.rect().width, right.rect().width);
        assert_eq!(left.rect().x + left.rect().width, right.rect().x);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = KronosConfig {
            frame_rate: 0,
            ..KronosConfig::default()
        };
        assert!(App::new(&config).is_err());
    }

    #[test]
    fn tick_before_start_does_nothing() {
        let mut app = app();
        assert!(!app.tick(Instant::now()));
        assert_eq!(app.panels().0.blinks(), 0);
    }

    #[test]
    fn start_is_idempotent() {
        let mut app = app();
        assert!(app.start());
        assert!(!app.start());
        assert!(app.is_started());
    }

    #[test]
    fn quit_works_before_start() {
        let mut app = app();
        assert!(!app.handle(InputAction::Quit));
        assert!(!app.running);
    }

    #[test]
    fn quit_works_after_start() {
        let mut app = app();
        let _ = app.handle(InputAction::Start);
        let _ = app.tick(Instant::now());
        let _ = app.handle(InputAction::Quit);
        assert!(!app.running);
    }

    #[test]
    fn resize_requests_a_present() {
        let mut app = app();
        assert!(app.handle(InputAction::Redraw));
        assert!(!app.handle(InputAction::Ignore));
        assert!(app.running);
    }

    #[test]
    fn both_panels_are_polled_on_the_same_tick() {
        let mut app = app();
        let _ = app.start();
        assert!(app.tick(Instant::now()));
        let (left, right) = app.panels();
        assert_eq!(left.state(), PanelState::Blink);
        assert_eq!(right.state(), PanelState::Blink);
    }

    #[test]
    fn panels_tick_independently() {
        let mut app = app();
        let _ = app.start();
        let t0 = Instant::now();
        for ms in (0..=2000).step_by(10) {
            let _ = app.tick(t0 + Duration::from_millis(ms));
        }
        let (left, right) = app.panels();
        assert!(left.blinks() > right.blinks());
        assert_eq!(right.blinks(), 3);
    }
}
