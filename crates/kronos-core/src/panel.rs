//! Blink/idle timer panel.
//!
//! A panel owns one rectangle of the display and flips between
//! [`PanelState::Idle`] and [`PanelState::Blink`] as wall-clock time passes.
//! Every blink is one "second" of the panel's time scale; every
//! `milestone` blinks make one "minute".
//!
//! The next interval is measured from the instant the previous blink was
//! drawn, not from its ideal schedule, so a late poll pushes every later
//! blink back by the same amount. Time slip accumulates over a long run.

use std::time::{Duration, Instant};

use kronos_common::config::{KronosConfig, PanelConfig};
use kronos_common::types::{PanelState, Rect, Rgb};

use crate::readout::Readout;
use crate::surface::Surface;

/// Rendering settings shared by every panel of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelStyle {
    /// Fill used for a blink that completes a milestone.
    pub milestone_color: Rgb,
    /// Color of the readout text.
    pub text_color: Rgb,
    /// How long a blink stays on screen at minimum.
    pub min_blink_visible: Duration,
}

impl PanelStyle {
    /// Extracts the shared panel style from a session config.
    #[must_use]
    pub const fn from_config(config: &KronosConfig) -> Self {
        Self {
            milestone_color: config.milestone_color,
            text_color: config.text_color,
            min_blink_visible: config.min_blink_visible,
        }
    }
}

impl Default for PanelStyle {
    fn default() -> Self {
        Self::from_config(&KronosConfig::default())
    }
}

/// One on-screen timer.
#[derive(Debug, Clone)]
pub struct TimerPanel {
    rect: Rect,
    label: &'static str,
    blink_color: Rgb,
    idle_color: Rgb,
    style: PanelStyle,
    state: PanelState,
    interval: Duration,
    last_blink: Option<Instant>,
    last_transition: Option<Instant>,
    blinks: u64,
    blinks_in_milestone: u64,
    milestones_reached: u64,
}

impl TimerPanel {
    /// Creates an idle panel covering `rect`.
    ///
    /// The config is expected to have passed [`PanelConfig::validate`]; a
    /// zero milestone is treated as one.
    #[must_use]
    pub fn new(rect: Rect, config: &PanelConfig, style: &PanelStyle) -> Self {
        Self {
            rect,
            label: config.label,
            blink_color: config.blink_color,
            idle_color: config.idle_color,
            style: *style,
            state: PanelState::Idle,
            interval: config.interval,
            last_blink: None,
            last_transition: None,
            blinks: 0,
            blinks_in_milestone: config.milestone.max(1),
            milestones_reached: 0,
        }
    }

    /// Advances the state machine to `now`, drawing on `surface` if the
    /// state changes.
    ///
    /// Returns `true` when a transition happened and the frame needs to be
    /// presented. A panel that has never blinked blinks on its first poll.
    pub fn poll<S: Surface + ?Sized>(&mut self, now: Instant, surface: &mut S) -> bool {
        match self.state {
            PanelState::Idle if self.interval_elapsed(now) => self.enter_blink(now, surface),
            PanelState::Blink if self.blink_shown_long_enough(now) => {
                self.enter_idle(now, surface);
            }
            PanelState::Idle | PanelState::Blink => return false,
        }
        true
    }

    /// Redraws the panel in its current state without changing it.
    pub fn repaint<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.fill_rect(self.rect, self.fill_color());
        self.draw_readout(surface);
    }

    fn interval_elapsed(&self, now: Instant) -> bool {
        self.last_blink
            .is_none_or(|last| now.saturating_duration_since(last) >= self.interval)
    }

    fn blink_shown_long_enough(&self, now: Instant) -> bool {
        self.last_transition.is_none_or(|last| {
            now.saturating_duration_since(last) >= self.style.min_blink_visible
        })
    }

    fn enter_blink<S: Surface + ?Sized>(&mut self, now: Instant, surface: &mut S) {
        self.blinks += 1;
        if self.blinks % self.blinks_in_milestone == 0 {
            self.milestones_reached += 1;
            tracing::debug!(
                panel = self.label,
                milestones = self.milestones_reached,
                "milestone reached"
            );
        }
        self.state = self.state.next();
        self.last_blink = Some(now);
        self.last_transition = Some(now);
        tracing::trace!(panel = self.label, state = %self.state, blinks = self.blinks, "transition");
        self.repaint(surface);
    }

    fn enter_idle<S: Surface + ?Sized>(&mut self, now: Instant, surface: &mut S) {
        self.state = self.state.next();
        self.last_transition = Some(now);
        tracing::trace!(panel = self.label, state = %self.state, "transition");
        self.repaint(surface);
    }

    fn fill_color(&self) -> Rgb {
        match self.state {
            PanelState::Idle => self.idle_color,
            PanelState::Blink if self.at_milestone() => self.style.milestone_color,
            PanelState::Blink => self.blink_color,
        }
    }

    const fn at_milestone(&self) -> bool {
        self.blinks > 0 && self.blinks % self.blinks_in_milestone == 0
    }

    fn draw_readout<S: Surface + ?Sized>(&self, surface: &mut S) {
        let text = self.readout().to_string();
        surface.draw_text_centered(self.rect, &text, self.style.text_color);
    }

    /// The current minutes/seconds readout.
    #[must_use]
    pub const fn readout(&self) -> Readout {
        Readout::new(
            self.milestones_reached,
            self.blinks,
            self.blinks_in_milestone,
        )
    }

    /// Current visual state.
    #[must_use]
    pub const fn state(&self) -> PanelState {
        self.state
    }

    /// Blinks since the panel was created.
    #[must_use]
    pub const fn blinks(&self) -> u64 {
        self.blinks
    }

    /// Completed milestones.
    #[must_use]
    pub const fn milestones_reached(&self) -> u64 {
        self.milestones_reached
    }

    /// Blinks into the current milestone.
    #[must_use]
    pub const fn seconds_in_milestone(&self) -> u64 {
        self.blinks % self.blinks_in_milestone
    }

    /// Area of the display this panel covers.
    #[must_use]
    pub const fn rect(&self) -> Rect {
        self.rect
    }

    /// Short name used in logs.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.label
    }

    /// When the panel last changed state, if ever.
    #[must_use]
    pub const fn last_transition(&self) -> Option<Instant> {
        self.last_transition
    }
}
