//! TUI rendering logic
//!
//! Reads one [`NavSnapshot`] per frame; never mutates navigation state.

use crate::app::App;
use crate::components::{DropdownPanel, HelpOverlay, MobileDrawer};
use crate::keybindings::KeyAction;
use crate::theme::HeaderPalette;
use masthead_core::{NavItem, NavSnapshot};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const HEADER_HEIGHT: u16 = 3;

/// Filler page so scrolling has something to move
const PAGE_PARAGRAPHS: &[&str] = &[
    "Find your perfect domain.",
    "Build a website in minutes with hosting that scales.",
    "Professional email that matches your domain.",
    "Keep your site safe with SSL and malware scanning.",
    "Grow with marketing tools built for small business.",
];

/// Draw the full preview
pub fn render(frame: &mut Frame, app: &App) {
    let snapshot = app.controller.snapshot();
    let palette = HeaderPalette::for_mode(snapshot.theme);

    let [header, body, footer] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let anchors = render_header(frame, header, app, &snapshot, palette);
    render_page(frame, body, app.scroll_offset);
    render_footer(frame, footer, app, &snapshot);

    if snapshot.mobile_menu_open {
        MobileDrawer {
            catalog: app.controller.catalog(),
            snapshot: &snapshot,
            focus: app.focus,
            palette,
        }
        .render(frame, body);
    } else if let Some((label, lines)) = app.controller.open_dropdown_content() {
        let anchor_x = anchors
            .iter()
            .find(|(l, _)| *l == label.as_str())
            .map(|(_, x)| *x)
            .unwrap_or(body.x);
        DropdownPanel {
            label: label.as_str(),
            lines: &lines,
            palette,
        }
        .render(frame, body, anchor_x);
    }

    if app.show_help {
        HelpOverlay {
            keybindings: &app.keybindings,
        }
        .render(frame, frame.area());
    }
}

/// Header bar. Returns the x column of each nav entry for dropdown anchoring.
fn render_header(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    snapshot: &NavSnapshot,
    palette: HeaderPalette,
) -> Vec<(String, u16)> {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .style(palette.base());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut spans = vec![
        Span::styled(if snapshot.mobile_menu_open { " ✕ " } else { " ☰ " }, palette.base()),
        Span::styled(format!(" {} ", app.config.brand), palette.focused()),
        Span::styled("│", palette.link()),
    ];
    let mut column = inner.x + spans.iter().map(|s| s.width() as u16).sum::<u16>();
    let mut anchors = Vec::new();

    let catalog = app.controller.catalog();
    let primary_len = catalog.primary().len();
    for (index, item) in catalog.items().enumerate() {
        if index == primary_len {
            spans.push(Span::styled("  ┆ ", palette.link()));
            column += 4;
        }
        let span = item_span(item, index == app.focus, snapshot, palette);
        anchors.push((item.label.to_string(), column));
        column += span.width() as u16;
        spans.push(span);
    }

    spans.push(Span::raw(" "));
    spans.push(Span::styled(format!(" Cart {} ", app.config.cart_count), palette.badge()));

    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
    anchors
}

fn item_span(
    item: &NavItem,
    focused: bool,
    snapshot: &NavSnapshot,
    palette: HeaderPalette,
) -> Span<'static> {
    let open = snapshot.is_dropdown_open(item.label.as_str());
    let arrow = match (item.has_submenu, open) {
        (false, _) => "",
        (true, false) => " ▾",
        (true, true) => " ▴",
    };
    let style = if open {
        palette.open()
    } else if focused {
        palette.focused()
    } else if item.has_submenu {
        palette.base()
    } else {
        palette.link()
    };
    Span::styled(format!(" {}{arrow} ", item.label), style)
}

fn render_page(frame: &mut Frame, area: Rect, scroll_offset: u16) {
    let lines: Vec<Line> = PAGE_PARAGRAPHS
        .iter()
        .cycle()
        .take(60)
        .enumerate()
        .map(|(i, text)| Line::from(format!("  {:>2}  {text}", i + 1)))
        .collect();
    frame.render_widget(Paragraph::new(lines).scroll((scroll_offset, 0)), area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App, snapshot: &NavSnapshot) {
    let text = match &app.status_message {
        Some(message) => message.clone(),
        None => {
            let hint = |action: KeyAction| {
                app.keybindings
                    .keys_for(action)
                    .first()
                    .cloned()
                    .unwrap_or_default()
            };
            format!(
                " theme: {}  │  {} menu  {} open  {} back  {} keys  {} quit",
                snapshot.theme,
                hint(KeyAction::ToggleMenu),
                hint(KeyAction::Activate),
                hint(KeyAction::Back),
                hint(KeyAction::ToggleHelp),
                hint(KeyAction::Quit),
            )
        }
    };
    frame.render_widget(Paragraph::new(text).style(Style::default()), area);
}
