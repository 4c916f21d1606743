//! The paced main loop.
//!
//! Each iteration drains pending input, honours quit requests first,
//! ticks both panels once started, presents the frame if anything changed,
//! and then sleeps off the rest of the frame budget.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use kronos_common::config::KronosConfig;
use kronos_common::error::{KronosError, Result};
use kronos_core::pacing::FrameLimiter;
use ratatui::Terminal;
use ratatui::backend::Backend;

use crate::app::App;
use crate::event::{EventSource, InputAction, TerminalEvents};
use crate::ui;

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// A quit key combination was pressed.
    QuitKey,
    /// The process received a termination signal (window closed).
    Signal,
}

/// Outcome of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// Why the loop stopped.
    pub reason: ExitReason,
    /// Frames presented, including the initial blank one.
    pub frames: u64,
}

/// Runs a session on the terminal until the user quits.
///
/// `shutdown` is raised by the process signal handler. The terminal is
/// restored before returning, on success and on error.
///
/// # Errors
///
/// Returns an error if the config is invalid or the terminal fails.
pub fn run(config: &KronosConfig, shutdown: &AtomicBool) -> Result<SessionSummary> {
    let mut app = App::new(config)?;
    let mut terminal = ratatui::try_init().map_err(KronosError::io("initializing terminal"))?;
    tracing::info!(
        width = config.width,
        height = config.height,
        frame_rate = config.frame_rate,
        "terminal initialized"
    );

    let outcome = event_loop(
        &mut terminal,
        &mut app,
        &mut TerminalEvents,
        shutdown,
        config.frame_rate,
    );
    let restored = ratatui::try_restore().map_err(KronosError::io("restoring terminal"));
    let summary = outcome?;
    restored?;
    tracing::info!(reason = ?summary.reason, frames = summary.frames, "session ended");
    Ok(summary)
}

/// Drives `app` until it stops running.
///
/// Presents the blank canvas once before the first iteration.
///
/// # Errors
///
/// Returns an error if reading input or drawing a frame fails.
pub fn event_loop<B: Backend, E: EventSource>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &mut E,
    shutdown: &AtomicBool,
    frame_rate: u32,
) -> Result<SessionSummary> {
    present(terminal, app)?;
    let mut frames = 1;
    let mut reason = ExitReason::QuitKey;
    let mut limiter = FrameLimiter::new(frame_rate);

    while app.running {
        if shutdown.load(Ordering::SeqCst) {
            reason = ExitReason::Signal;
            app.quit();
            continue;
        }

        let actions: Vec<InputAction> = events
            .drain_pending()
            .map_err(KronosError::io("reading input"))?
            .iter()
            .map(InputAction::from_event)
            .collect();
        if let Some(quit) = apply_actions(app, &actions) {
            reason = quit;
            continue;
        }

        let resized = actions.contains(&InputAction::Redraw);
        if app.tick(Instant::now()) || resized {
            present(terminal, app)?;
            frames += 1;
        }

        limiter.tick();
    }

    Ok(SessionSummary { reason, frames })
}

/// Applies a batch of actions, quit first. Returns the exit reason if the
/// app should stop.
fn apply_actions(app: &mut App, actions: &[InputAction]) -> Option<ExitReason> {
    if actions.contains(&InputAction::Quit) {
        let _ = app.handle(InputAction::Quit);
        return Some(ExitReason::QuitKey);
    }
    for action in actions {
        let _ = app.handle(*action);
    }
    None
}

fn present<B: Backend>(terminal: &mut Terminal<B>, app: &App) -> Result<()> {
    let _ = terminal
        .draw(|frame| ui::render(frame, app))
        .map_err(|e| KronosError::io("drawing frame")(std::io::Error::other(e.to_string())))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Arc;

    use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;

    use super::*;

    fn app() -> App {
        App::new(&KronosConfig::default()).unwrap()
    }

    fn terminal() -> Terminal<TestBackend> {
        let config = KronosConfig::default();
        Terminal::new(TestBackend::new(config.width, config.height + 1)).unwrap()
    }

    fn key(c: char, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), modifiers))
    }

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    /// Hands out one scripted batch per drain; raises `shutdown` once the
    /// script runs out.
    struct Scripted {
        batches: VecDeque<Vec<Event>>,
        drains: usize,
        shutdown: Arc<AtomicBool>,
    }

    impl Scripted {
        fn new(batches: Vec<Vec<Event>>, shutdown: &Arc<AtomicBool>) -> Self {
            Self {
                batches: batches.into(),
                drains: 0,
                shutdown: Arc::clone(shutdown),
            }
        }
    }

    impl EventSource for Scripted {
        fn drain_pending(&mut self) -> std::io::Result<Vec<Event>> {
            self.drains += 1;
            let batch = self.batches.pop_front();
            if batch.is_none() {
                self.shutdown.store(true, Ordering::SeqCst);
            }
            Ok(batch.unwrap_or_default())
        }
    }

    #[test]
    fn quit_wins_over_start_in_the_same_batch() {
        let mut app = app();
        let reason = apply_actions(&mut app, &[InputAction::Start, InputAction::Quit]);
        assert_eq!(reason, Some(ExitReason::QuitKey));
        assert!(!app.running);
        assert!(!app.is_started());
    }

    #[test]
    fn start_batch_keeps_running() {
        let mut app = app();
        let reason = apply_actions(&mut app, &[InputAction::Ignore, InputAction::Start]);
        assert_eq!(reason, None);
        assert!(app.is_started());
    }

    #[test]
    fn raised_shutdown_flag_stops_after_the_blank_frame() {
        let shutdown = Arc::new(AtomicBool::new(true));
        let mut events = Scripted::new(Vec::new(), &shutdown);
        let mut terminal = terminal();
        let mut app = app();

        let summary = event_loop(&mut terminal, &mut app, &mut events, &shutdown, 1000).unwrap();

        assert_eq!(summary.reason, ExitReason::Signal);
        assert_eq!(summary.frames, 1);
        assert_eq!(events.drains, 0);
        assert!(!app.running);
        assert!(!app.is_started());
        let screen = screen(&terminal);
        assert!(!screen.contains("min"));
        assert!(screen.contains("press s to start"));
    }

    #[test]
    fn shutdown_flag_raised_after_start_stops_the_loop() {
        let shutdown = Arc::new(AtomicBool::new(false));
        let mut events = Scripted::new(vec![vec![key('s', KeyModifiers::NONE)]], &shutdown);
        let mut terminal = terminal();
        let mut app = app();

        let summary = event_loop(&mut terminal, &mut app, &mut events, &shutdown, 1000).unwrap();

        assert_eq!(summary.reason, ExitReason::Signal);
        assert!(summary.frames >= 2);
        assert!(app.is_started());
        assert_eq!(app.panels().0.blinks(), 1);
        assert!(screen(&terminal).contains("0min 1sec"));
    }

    #[test]
    fn quit_key_before_start_stops_the_loop() {
        let shutdown = Arc::new(AtomicBool::new(false));
        let mut events = Scripted::new(vec![vec![key('w', KeyModifiers::CONTROL)]], &shutdown);
        let mut app = app();

        let summary = event_loop(&mut terminal(), &mut app, &mut events, &shutdown, 1000).unwrap();

        assert_eq!(summary.reason, ExitReason::QuitKey);
        assert_eq!(summary.frames, 1);
        assert!(!app.is_started());
        assert!(!shutdown.load(Ordering::SeqCst));
    }

    #[test]
    fn quit_key_after_start_stops_the_loop() {
        let shutdown = Arc::new(AtomicBool::new(false));
        let mut events = Scripted::new(
            vec![
                vec![key('s', KeyModifiers::NONE)],
                Vec::new(),
                vec![key('c', KeyModifiers::CONTROL)],
            ],
            &shutdown,
        );
        let mut app = app();

        let summary = event_loop(&mut terminal(), &mut app, &mut events, &shutdown, 1000).unwrap();

        assert_eq!(summary.reason, ExitReason::QuitKey);
        assert!(app.is_started());
        assert_eq!(events.drains, 3);
    }
}
