//! # kronos-core
//!
//! Backend-independent building blocks of the kronos visualizer.
//!
//! This crate provides:
//! - **Panel**: the two-state blink/idle timer that counts seconds and minutes.
//! - **Surface**: the drawing interface panels render through.
//! - **Readout**: the `"{min}min {sec}sec"` text overlay.
//! - **Pacing**: a frame limiter that caps the main loop rate.
//!
//! Nothing in here touches a terminal; the TUI crate supplies the real
//! [`surface::Surface`] implementation.

pub mod pacing;
pub mod panel;
pub mod readout;
pub mod surface;
