//! Mobile slide-in drawer: entry list, or the active sub-panel

use crate::theme::HeaderPalette;
use masthead_core::{NavCatalog, NavSnapshot};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

const DRAWER_WIDTH: u16 = 34;

pub struct MobileDrawer<'a> {
    pub catalog: &'a NavCatalog,
    pub snapshot: &'a NavSnapshot,
    pub focus: usize,
    pub palette: HeaderPalette,
}

impl MobileDrawer<'_> {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let [drawer, _] =
            Layout::horizontal([Constraint::Length(DRAWER_WIDTH), Constraint::Min(0)]).areas(area);
        frame.render_widget(Clear, drawer);

        let (title, lines) = match &self.snapshot.active_mobile_panel {
            Some(label) => (format!(" ‹ {label} "), self.panel_lines(label.as_str())),
            None => (" Menu ".to_string(), self.list_lines()),
        };

        let block = Block::default()
            .borders(Borders::RIGHT | Borders::TOP | Borders::BOTTOM)
            .border_style(Style::default().fg(self.palette.accent))
            .style(self.palette.base())
            .title(Span::styled(title, self.palette.open()));

        frame.render_widget(Paragraph::new(lines).block(block), drawer);
    }

    fn list_lines(&self) -> Vec<Line<'static>> {
        self.catalog
            .items()
            .enumerate()
            .map(|(index, item)| {
                let marker = if index == self.focus { "▸ " } else { "  " };
                let suffix = if item.has_submenu { "  ›" } else { "" };
                let style = if index == self.focus {
                    self.palette.focused()
                } else if item.has_submenu {
                    self.palette.base()
                } else {
                    self.palette.link()
                };
                Line::from(Span::styled(format!("{marker}{}{suffix}", item.label), style))
            })
            .collect()
    }

    fn panel_lines(&self, label: &str) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(Span::styled(
            "  ‹ Back (Esc)",
            self.palette.link().add_modifier(Modifier::ITALIC),
        ))];
        lines.extend(
            self.catalog
                .dropdown_content(label)
                .unwrap_or_default()
                .into_iter()
                .map(|l| Line::from(format!("  {l}"))),
        );
        lines
    }
}
