//! Dropdown panel anchored under a header button

use crate::theme::HeaderPalette;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

pub struct DropdownPanel<'a> {
    pub label: &'a str,
    pub lines: &'a [String],
    pub palette: HeaderPalette,
}

impl DropdownPanel<'_> {
    /// Panel rect: below the header at column `anchor_x`, clamped to `area`
    pub fn area(&self, area: Rect, anchor_x: u16) -> Rect {
        let content_width = self
            .lines
            .iter()
            .map(|l| l.chars().count())
            .chain(std::iter::once(self.label.chars().count() + 4))
            .max()
            .unwrap_or(0) as u16;
        let width = (content_width + 4).min(area.width);
        let height = (self.lines.len() as u16 + 2).min(area.height);
        let x = anchor_x.min(area.right().saturating_sub(width)).max(area.x);

        Rect {
            x,
            y: area.y,
            width,
            height,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, anchor_x: u16) {
        let panel = self.area(area, anchor_x);
        frame.render_widget(Clear, panel);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.palette.accent))
            .style(self.palette.base())
            .title(Span::styled(format!(" {} ", self.label), self.palette.open()))
            .title_bottom(Line::from(" × Esc ").right_aligned());

        let body: Vec<Line> = self
            .lines
            .iter()
            .map(|l| Line::from(format!(" {l}")))
            .collect();

        frame.render_widget(Paragraph::new(body).block(block), panel);
    }
}
