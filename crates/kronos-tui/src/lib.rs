//! # kronos-tui
//!
//! Terminal front end for the kronos visualizer.
//!
//! Built with `ratatui` and `crossterm`, providing:
//! - A fixed-size [`canvas::Canvas`] that panels paint into.
//! - Key mapping for start and quit shortcuts.
//! - The paced main loop that polls both timer panels.

pub mod app;
pub mod canvas;
pub mod event;
pub mod runner;
pub mod ui;
