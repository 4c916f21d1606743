//! Fixed-size character-cell display surface.
//!
//! The canvas is a retained `ratatui` buffer that timer panels paint into
//! through the [`Surface`] trait. Presenting a frame copies it, centered,
//! into whatever area the terminal currently offers. When the terminal is
//! too small the edges are clipped evenly so the middle stays visible.

use kronos_common::types::{Rect, Rgb};
use kronos_core::surface::Surface;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect as Area;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Widget;

/// Converts a kronos color into a terminal true-color value.
#[must_use]
pub const fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

fn to_area(rect: Rect) -> Area {
    Area::new(rect.x, rect.y, rect.width, rect.height)
}

/// The display surface both panels share.
#[derive(Debug, Clone)]
pub struct Canvas {
    buffer: Buffer,
}

impl Canvas {
    /// Creates a blank canvas of `width` × `height` cells.
    #[must_use]
    pub fn new(width: u16, height: u16, background: Rgb) -> Self {
        let mut buffer = Buffer::empty(Area::new(0, 0, width, height));
        buffer.set_style(buffer.area, Style::default().bg(to_color(background)));
        Self { buffer }
    }

    /// Full extent of the canvas in its own coordinates.
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.buffer.area.width, self.buffer.area.height)
    }

    /// Background color of the cell at `(x, y)`, if it lies on the canvas.
    #[must_use]
    pub fn background_at(&self, x: u16, y: u16) -> Option<Color> {
        self.buffer.cell((x, y)).map(|cell| cell.bg)
    }

    /// The symbols of row `y` joined into a string.
    #[must_use]
    pub fn row_text(&self, y: u16) -> String {
        (0..self.buffer.area.width)
            .filter_map(|x| self.buffer.cell((x, y)))
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn clip(&self, rect: Rect) -> Area {
        to_area(rect).intersection(self.buffer.area)
    }
}

impl Surface for Canvas {
    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        let area = self.clip(rect);
        for position in area.positions() {
            if let Some(cell) = self.buffer.cell_mut(position) {
                cell.reset();
                cell.bg = to_color(color);
            }
        }
    }

    fn draw_text_centered(&mut self, rect: Rect, text: &str, color: Rgb) {
        let area = self.clip(rect);
        if area.is_empty() {
            return;
        }
        let text_width = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
        let (center_x, y) = Rect::new(area.x, area.y, area.width, area.height).center();
        let x = center_x.saturating_sub(text_width / 2).max(area.x);
        let style = Style::default()
            .fg(to_color(color))
            .add_modifier(Modifier::BOLD);
        let _ = self
            .buffer
            .set_stringn(x, y, text, usize::from(area.right() - x), style);
    }
}

/// Centers a `width` × `height` block inside `area`, clipped to it.
fn centered(area: Area, width: u16, height: u16) -> Area {
    Area::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(height) / 2,
        width.min(area.width),
        height.min(area.height),
    )
}

impl Widget for &Canvas {
    fn render(self, area: Area, buf: &mut Buffer) {
        let source = self.buffer.area;
        let target = centered(area, source.width, source.height);
        // Clipped columns and rows are split evenly between both edges.
        let skip_x = (source.width - target.width) / 2;
        let skip_y = (source.height - target.height) / 2;
        for y in 0..target.height {
            for x in 0..target.width {
                if let (Some(from), Some(to)) = (
                    self.buffer.cell((skip_x + x, skip_y + y)),
                    buf.cell_mut((target.x + x, target.y + y)),
                ) {
                    *to = from.clone();
                }
            }
        }
    }
}
