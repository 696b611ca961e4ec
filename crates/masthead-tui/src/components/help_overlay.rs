//! Help overlay listing keybindings

use crate::keybindings::{KeyAction, KeyBindings};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

pub struct HelpOverlay<'a> {
    pub keybindings: &'a KeyBindings,
}

impl HelpOverlay<'_> {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let height = KeyAction::all().len() as u16 + 2;
        let [row] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);
        let [modal] = Layout::horizontal([Constraint::Length(56)])
            .flex(Flex::Center)
            .areas(row);

        frame.render_widget(Clear, modal);

        let lines: Vec<Line> = KeyAction::all()
            .iter()
            .map(|action| {
                let keys = self.keybindings.keys_for(*action).join(" / ");
                Line::from(vec![
                    Span::styled(
                        format!(" {keys:<18}"),
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(action.description()),
                ])
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Keys ");

        frame.render_widget(Paragraph::new(lines).block(block), modal);
    }
}
