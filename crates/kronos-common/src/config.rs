//! Configuration model for the two timer panels and the display.
//!
//! Nothing here is user-editable; the model only gives the hardcoded
//! defaults from [`crate::constants`] a typed home that is validated once
//! at boot.

use std::time::Duration;

use crate::constants;
use crate::error::{KronosError, Result};
use crate::types::Rgb;

/// Definition of a single timer panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelConfig {
    /// Short name used in logs.
    pub label: &'static str,
    /// Fill color while blinking.
    pub blink_color: Rgb,
    /// Fill color while idle.
    pub idle_color: Rgb,
    /// Time between blinks.
    pub interval: Duration,
    /// Blinks that make up one milestone ("minute").
    pub milestone: u64,
}

impl PanelConfig {
    /// Decimal time: 100 seconds per minute, each lasting 0.36 real seconds.
    #[must_use]
    pub const fn decimal() -> Self {
        Self {
            label: "decimal",
            blink_color: Rgb::RED,
            idle_color: Rgb::BLACK,
            interval: constants::DECIMAL_SEC_DURATION,
            milestone: constants::DECIMAL_SEC_IN_MIN,
        }
    }

    /// Standard time: 60 seconds per minute.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            label: "standard",
            blink_color: Rgb::BLUE,
            idle_color: Rgb::BLACK,
            interval: constants::STANDARD_SEC_DURATION,
            milestone: constants::STANDARD_SEC_IN_MIN,
        }
    }

    /// Checks that the panel can tick.
    ///
    /// # Errors
    ///
    /// Returns [`KronosError::Config`] if the interval or milestone is zero.
    pub fn validate(&self) -> Result<()> {
        if self.interval.is_zero() {
            return Err(KronosError::Config {
                message: format!("panel `{}` has a zero blink interval", self.label),
            });
        }
        if self.milestone == 0 {
            return Err(KronosError::Config {
                message: format!("panel `{}` has a zero milestone size", self.label),
            });
        }
        Ok(())
    }
}

/// Root configuration for a kronos session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KronosConfig {
    /// Display surface width, in cells.
    pub width: u16,
    /// Display surface height, in cells.
    pub height: u16,
    /// Upper bound on loop iterations per second.
    pub frame_rate: u32,
    /// How long a blink stays visible at minimum.
    pub min_blink_visible: Duration,
    /// Fill color used when a blink completes a milestone.
    pub milestone_color: Rgb,
    /// Color of the minutes/seconds readout.
    pub text_color: Rgb,
    /// Panel on the left half.
    pub left: PanelConfig,
    /// Panel on the right half.
    pub right: PanelConfig,
}

impl KronosConfig {
    /// Checks every panel and the display settings.
    ///
    /// # Errors
    ///
    /// Returns [`KronosError::Config`] describing the first invalid value.
    pub fn validate(&self) -> Result<()> {
        if self.width < 2 || self.height == 0 {
            return Err(KronosError::Config {
                message: format!(
                    "display {}x{} cannot hold two panels",
                    self.width, self.height
                ),
            });
        }
        if self.frame_rate == 0 {
            return Err(KronosError::Config {
                message: "frame rate must be positive".into(),
            });
        }
        self.left.validate()?;
        self.right.validate()
    }
}

impl Default for KronosConfig {
    fn default() -> Self {
        Self {
            width: constants::DISPLAY_WIDTH,
            height: constants::DISPLAY_HEIGHT,
            frame_rate: constants::FRAME_RATE,
            min_blink_visible: constants::MIN_BLINK_VISIBLE,
            milestone_color: Rgb::GREEN,
            text_color: Rgb::WHITE,
            left: PanelConfig::decimal(),
            right: PanelConfig::standard(),
        }
    }
}
