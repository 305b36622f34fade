//! Screen frame shared by the arena view and the overlays.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Where each part of the match screen goes.
///
/// ```text
/// ┌─ Battle Snake ──────────────────┬─ Info ──────┐
/// │                                 │             │
/// │   arena                         │  side       │
/// │                                 │             │
/// │ status (message + key hints)    │             │
/// └─────────────────────────────────┴─────────────┘
/// ```
pub struct ScreenAreas {
    pub arena: Rect,
    pub status: Rect,
    pub side: Rect,
}

impl ScreenAreas {
    /// Clear `area`, draw the titled outer border and split its inside.
    pub fn frame(
        frame: &mut Frame,
        area: Rect,
        title: &str,
        accent: Color,
        side_width: u16,
    ) -> Self {
        frame.render_widget(Clear, area);
        let outer = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent));
        let inside = outer.inner(area);
        frame.render_widget(outer, area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(20), Constraint::Length(side_width)])
            .split(inside);
        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(2)])
            .split(columns[0]);

        Self {
            arena: left[0],
            status: left[1],
            side: columns[1],
        }
    }
}

/// A key and what it does, e.g. `KeyHint("[Space]", "Pause")`.
#[derive(Debug, Clone, Copy)]
pub struct KeyHint(pub &'static str, pub &'static str);

/// Centered message on the first line, key hints on the second.
pub fn draw_status(frame: &mut Frame, area: Rect, message: &str, color: Color, hints: &[KeyHint]) {
    if area.height == 0 {
        return;
    }
    let message_row = Rect { height: 1, ..area };
    frame.render_widget(
        Paragraph::new(message)
            .style(Style::default().fg(color))
            .alignment(Alignment::Center),
        message_row,
    );

    if area.height < 2 || hints.is_empty() {
        return;
    }
    let spans: Vec<Span> = hints
        .iter()
        .enumerate()
        .flat_map(|(i, KeyHint(key, action))| {
            let gap = if i == 0 { "" } else { "  " };
            [
                Span::raw(gap),
                Span::styled(*key, Style::default().fg(Color::White)),
                Span::styled(format!(" {action}"), Style::default().fg(Color::DarkGray)),
            ]
        })
        .collect();
    let hint_row = Rect {
        y: area.y + 1,
        height: 1,
        ..area
    };
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        hint_row,
    );
}

/// Bordered side panel; returns the area inside the border.
pub fn draw_side_panel(frame: &mut Frame, area: Rect) -> Rect {
    let panel = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inside = panel.inner(area);
    frame.render_widget(panel, area);
    inside
}

/// Centered box drawn over whatever is underneath: a bold title in
/// `color`, the `body` lines, then a dim hint.
pub fn draw_modal(
    frame: &mut Frame,
    area: Rect,
    color: Color,
    title: &str,
    body: &[String],
    hint: &str,
) {
    let widest = body
        .iter()
        .map(|l| l.chars().count())
        .chain([title.chars().count(), hint.chars().count()])
        .max()
        .unwrap_or(0);
    let width = (widest as u16 + 6).min(area.width);
    let height = (body.len() as u16 + 6).min(area.height);
    let modal = Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    );

    frame.render_widget(Clear, modal);
    let border = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inside = border.inner(modal);
    frame.render_widget(border, modal);

    let white = Style::default().fg(Color::White);
    let mut lines = Vec::with_capacity(body.len() + 4);
    lines.push(Line::styled(
        title,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ));
    lines.push(Line::default());
    lines.extend(body.iter().map(|text| Line::styled(text.as_str(), white)));
    lines.push(Line::default());
    lines.push(Line::styled(hint, Style::default().fg(Color::DarkGray)));

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inside);
}
