//! Key binding and status line.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{App, Phase};

/// Text shown in the footer once the run has started.
pub const STARTED_STATUS: &str = "Lets go";

/// Renders the footer with shortcuts and the run state.
pub fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let status = match app.phase {
        Phase::Waiting => Span::styled("press s to start", Style::default().fg(Color::Yellow)),
        Phase::Running => Span::styled(STARTED_STATUS, Style::default().fg(Color::Green)),
    };
    let line = Line::from(vec![
        Span::styled(" s", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" start  "),
        Span::styled("ctrl+w", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" quit  "),
        Span::raw("│ "),
        status,
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
