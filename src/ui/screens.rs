//! Title, pause and game-over overlays.

use super::game_common::draw_modal;
use battle_snake::game::MatchState;
use ratatui::{layout::Rect, style::Color, Frame};

pub fn render_title(frame: &mut Frame, area: Rect, high_score: u32) {
    let body = vec![
        "Eat the food. Avoid the walls.".to_string(),
        "The red snake wakes up when you move".to_string(),
        "and it will come for you.".to_string(),
        String::new(),
        format!("Best score: {}", high_score),
    ];
    draw_modal(
        frame,
        area,
        Color::LightGreen,
        "BATTLE SNAKE",
        &body,
        "Press any key to start  [Q] Quit",
    );
}

pub fn render_pause(frame: &mut Frame, area: Rect) {
    draw_modal(
        frame,
        area,
        Color::Yellow,
        "PAUSED",
        &[],
        "[C] Resume  [Q] Quit",
    );
}

pub fn render_game_over(frame: &mut Frame, area: Rect, state: &MatchState) {
    let mut body = Vec::new();
    if let Some(cause) = state.game_over {
        body.push(cause.message().to_string());
        body.push(String::new());
    }
    body.push(format!("Score: {}", state.player.score));
    body.push(format!("Best:  {}", state.high_score));
    if state.player.score >= state.high_score && state.player.score > 1 {
        body.push("New high score!".to_string());
    }

    draw_modal(
        frame,
        area,
        Color::Red,
        "GAME OVER",
        &body,
        "[R] Restart  [Q] Quit",
    );
}
