//! Time-scale definitions and hardcoded display defaults.

use std::time::Duration;

/// Real seconds in one hour.
pub const SECS_IN_HOUR: u64 = 60 * 60;

/// Decimal minutes in one decimal hour.
pub const DECIMAL_MIN_IN_HOUR: u64 = 100;

/// Decimal seconds in one decimal minute.
pub const DECIMAL_SEC_IN_MIN: u64 = 100;

/// Standard seconds in one standard minute.
pub const STANDARD_SEC_IN_MIN: u64 = 60;

/// Real duration of one decimal second (0.36 s).
pub const DECIMAL_SEC_DURATION: Duration =
    Duration::from_millis(SECS_IN_HOUR * 1000 / (DECIMAL_MIN_IN_HOUR * DECIMAL_SEC_IN_MIN));

/// Real duration of one standard second.
pub const STANDARD_SEC_DURATION: Duration = Duration::from_secs(1);

/// Minimum time a blink stays visible before a panel returns to idle.
pub const MIN_BLINK_VISIBLE: Duration = Duration::from_millis(250);

/// Upper bound on main loop iterations per second.
pub const FRAME_RATE: u32 = 120;

/// Display surface width, in terminal cells.
pub const DISPLAY_WIDTH: u16 = 64;

/// Display surface height, in terminal cells.
///
/// Fits an 80x24 terminal together with the one-line footer.
pub const DISPLAY_HEIGHT: u16 = 22;

/// Binary name for the CLI.
pub const BIN_NAME: &str = "kronos";

/// Line printed on the way out.
pub const FAREWELL: &str = "Good luck on your current run.";
