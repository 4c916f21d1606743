//! Frame layout: the centered canvas above a one-line footer.

pub mod footer;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::app::App;

/// Renders the whole frame.
pub fn render(frame: &mut Frame, app: &App) {
    let [display, footer] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());
    frame.render_widget(app.canvas(), display);
    footer::render_footer(frame, footer, app);
}
