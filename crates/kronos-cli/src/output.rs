//! Text printed outside the alternate screen.

/// Shortcut summary appended to `--help`.
pub const SHORTCUTS: &str = "Shortcuts:\n  \
    s - start\n  \
    ctrl+w - terminate\n  \
    ctrl+c - terminate";

/// Prints the farewell line once the terminal is restored.
#[allow(clippy::print_stdout)]
pub fn farewell() {
    println!("{}", kronos_common::constants::FAREWELL);
}
