//! Arena rendering.
//!
//! Each arena cell is one pixel. Two pixel rows share a terminal row: the
//! upper half block `▀` takes the top pixel as its foreground and the
//! bottom pixel as its background.

use super::game_common::{draw_side_panel, draw_status, KeyHint, ScreenAreas};
use battle_snake::arena::{Arena, Body, Cell, Rect as ArenaRect};
use battle_snake::game::{MatchState, RenderFeed};
use battle_snake::hunter::TargetKind;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const PLAYER_HEAD: Color = Color::Rgb(100, 255, 100);
const PLAYER_BRIGHT: (f64, f64, f64) = (50.0, 220.0, 50.0);
const PLAYER_DIM: (f64, f64, f64) = (20.0, 80.0, 20.0);
const HUNTER_HEAD: Color = Color::Rgb(255, 90, 90);
const HUNTER_BRIGHT: (f64, f64, f64) = (220.0, 50.0, 50.0);
const HUNTER_DIM: (f64, f64, f64) = (90.0, 20.0, 20.0);
const BRICK: Color = Color::Rgb(170, 74, 44);
const EMPTY_BG: Color = Color::Rgb(12, 12, 18);
const BORDER_COLOR: Color = Color::Rgb(80, 80, 80);

/// Render a match in progress (also used under the pause overlay).
pub fn render_arena_scene(frame: &mut Frame, area: Rect, state: &MatchState) {
    let feed = state.render_feed();
    let areas = ScreenAreas::frame(frame, area, " Battle Snake ", Color::LightGreen, 24);

    render_play_field(frame, areas.arena, &feed, state.tick_count);
    render_status(frame, areas.status, &feed, state.hunter_active);
    render_side_panel(frame, areas.side, &feed);
}

/// One color per arena cell, row-major.
struct PixelGrid {
    arena: Arena,
    pixels: Vec<Vec<Color>>,
}

impl PixelGrid {
    fn new(arena: Arena) -> Self {
        let row = vec![EMPTY_BG; arena.columns() as usize];
        Self {
            arena,
            pixels: vec![row; arena.rows() as usize],
        }
    }

    fn set(&mut self, cell: Cell, color: Color) {
        if !self.arena.contains(cell) {
            return;
        }
        let col = (cell.x / self.arena.block) as usize;
        let row = (cell.y / self.arena.block) as usize;
        self.pixels[row][col] = color;
    }

    /// Every cell the wall touches, clipped to the arena.
    fn fill_wall(&mut self, wall: &ArenaRect) {
        let b = self.arena.block;
        let cols = 0..self.arena.columns();
        let rows = 0..self.arena.rows();
        for row in (wall.y / b)..(wall.bottom() + b - 1) / b {
            for col in (wall.x / b)..(wall.right() + b - 1) / b {
                if rows.contains(&row) && cols.contains(&col) {
                    self.pixels[row as usize][col as usize] = BRICK;
                }
            }
        }
    }

    /// Tail dim, head in its own color.
    fn paint_body(
        &mut self,
        body: &Body,
        head: Color,
        bright: (f64, f64, f64),
        dim: (f64, f64, f64),
    ) {
        let last = body.len() - 1;
        for (i, &segment) in body.iter().enumerate() {
            let color = if i == last {
                head
            } else {
                blend(dim, bright, i as f64 / last.max(1) as f64)
            };
            self.set(segment, color);
        }
    }

    /// Half-block lines, `ceil(rows / 2)` of them.
    fn to_lines(&self) -> Vec<Line<'static>> {
        self.pixels
            .chunks(2)
            .map(|pair| {
                let top = &pair[0];
                let bottom = pair.get(1).unwrap_or(top);
                half_block_line(top, bottom)
            })
            .collect()
    }
}

/// Join runs of identical (top, bottom) pairs into one span each.
fn half_block_line(top: &[Color], bottom: &[Color]) -> Line<'static> {
    let mut spans = Vec::new();
    let mut current: Option<(Color, Color)> = None;
    let mut text = String::new();

    for (&fg, &bg) in top.iter().zip(bottom) {
        if current != Some((fg, bg)) {
            if let Some((run_fg, run_bg)) = current {
                let style = Style::default().fg(run_fg).bg(run_bg);
                spans.push(Span::styled(std::mem::take(&mut text), style));
            }
            current = Some((fg, bg));
        }
        text.push(symbols::half_block::UPPER);
    }
    if let Some((fg, bg)) = current {
        spans.push(Span::styled(text, Style::default().fg(fg).bg(bg)));
    }
    Line::from(spans)
}

fn blend(from: (f64, f64, f64), to: (f64, f64, f64), t: f64) -> Color {
    let mix = |a: f64, b: f64| (a + (b - a) * t) as u8;
    Color::Rgb(mix(from.0, to.0), mix(from.1, to.1), mix(from.2, to.2))
}

fn food_color(tick: u64) -> Color {
    let phase = (tick % 20) as f64 / 20.0 * std::f64::consts::TAU;
    Color::Rgb(255, (190.0 + phase.sin() * 40.0) as u8, 40)
}

/// Arena pixels inside a thin border titled with both scores.
fn render_play_field(frame: &mut Frame, area: Rect, feed: &RenderFeed, tick: u64) {
    if area.height < 3 || area.width < 5 {
        return;
    }

    let mut grid = PixelGrid::new(*feed.arena);
    for wall in feed.obstacles {
        grid.fill_wall(wall);
    }
    for food in feed.foods {
        grid.set(food, food_color(tick));
    }
    grid.paint_body(feed.hunter, HUNTER_HEAD, HUNTER_BRIGHT, HUNTER_DIM);
    grid.paint_body(feed.player, PLAYER_HEAD, PLAYER_BRIGHT, PLAYER_DIM);
    let lines = grid.to_lines();

    // Centered box, clipped when the terminal is too small
    let width = (feed.arena.columns() as u16 + 2).min(area.width);
    let height = (lines.len() as u16 + 2).min(area.height);
    let field = Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y,
        width,
        height,
    );

    let border = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER_COLOR))
        .title(Span::styled(
            format!(" {} vs {} ", feed.player_score, feed.hunter_score),
            Style::default().fg(Color::White),
        ))
        .title_alignment(Alignment::Center);
    frame.render_widget(Paragraph::new(lines).block(border), field);
}

fn render_status(frame: &mut Frame, area: Rect, feed: &RenderFeed, hunter_active: bool) {
    if feed.paused {
        let hints = [KeyHint("[C]", "Resume"), KeyHint("[Q]", "Quit")];
        draw_status(frame, area, "Paused", Color::Yellow, &hints);
        return;
    }

    let status = if hunter_active {
        "Eat, grow, and stay out of its jaws"
    } else {
        "Move to wake the hunter"
    };
    let hints = [
        KeyHint("[Arrows/WASD]", "Move"),
        KeyHint("[Space]", "Pause"),
        KeyHint("[Q]", "Quit"),
    ];
    draw_status(frame, area, status, Color::Green, &hints);
}

fn render_side_panel(frame: &mut Frame, area: Rect, feed: &RenderFeed) {
    let inner = draw_side_panel(frame, area);
    let dim = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White);

    let target = match feed.hunter_target {
        Some((TargetKind::Player, _)) => "You".to_string(),
        Some((TargetKind::Food, cell)) => format!("Food {},{}", cell.x, cell.y),
        None => "-".to_string(),
    };

    let legend = |color: Color, label: &'static str| {
        Line::from(vec![
            Span::styled(format!(" {} ", symbols::block::FULL), Style::default().fg(color)),
            Span::styled(label, dim),
        ])
    };

    let lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("Score: ", dim),
            Span::styled(
                feed.player_score.to_string(),
                value.add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Hunter: ", dim),
            Span::styled(feed.hunter_score.to_string(), value),
        ]),
        Line::from(vec![
            Span::styled("Best: ", dim),
            Span::styled(
                feed.high_score.to_string(),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Length: ", dim),
            Span::styled(feed.player.len().to_string(), value),
        ]),
        Line::from(vec![
            Span::styled("Hunting: ", dim),
            Span::styled(target, Style::default().fg(Color::Cyan)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Legend:",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        legend(PLAYER_HEAD, "You"),
        legend(HUNTER_HEAD, "Hunter"),
        legend(food_color(0), "Food"),
        legend(BRICK, "Wall"),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
