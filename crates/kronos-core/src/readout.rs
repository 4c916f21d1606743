//! Minutes/seconds text overlay.

use std::fmt;

/// Elapsed time of a panel, split into milestones and leftover blinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Readout {
    /// Completed milestones ("minutes").
    pub minutes: u64,
    /// Blinks into the current milestone ("seconds").
    pub seconds: u64,
}

impl Readout {
    /// Builds a readout from a milestone counter and the total blink count.
    #[must_use]
    pub const fn new(milestones_reached: u64, blinks: u64, blinks_in_milestone: u64) -> Self {
        Self {
            minutes: milestones_reached,
            seconds: blinks - milestones_reached * blinks_in_milestone,
        }
    }
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}min {}sec", self.minutes, self.seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_panel_reads_zero() {
        assert_eq!(Readout::new(0, 0, 60).to_string(), "0min 0sec");
    }

    #[test]
    fn leftover_blinks_are_seconds() {
        let readout = Readout::new(2, 245, 100);
        assert_eq!(readout.minutes, 2);
        assert_eq!(readout.seconds, 45);
        assert_eq!(readout.to_string(), "2min 45sec");
    }
}
