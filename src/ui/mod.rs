pub mod arena_scene;
pub mod game_common;
mod screens;

use battle_snake::game::{Phase, Session};
use ratatui::Frame;

/// Main UI drawing function
pub fn draw(frame: &mut Frame, session: &Session) {
    let size = frame.size();

    match (session.phase(), session.current()) {
        (Phase::Title, _) | (_, None) => screens::render_title(frame, size, session.high_score()),
        (Phase::Playing, Some(state)) => arena_scene::render_arena_scene(frame, size, state),
        (Phase::Paused, Some(state)) => {
            arena_scene::render_arena_scene(frame, size, state);
            screens::render_pause(frame, size);
        }
        (Phase::GameOver, Some(state)) => {
            arena_scene::render_arena_scene(frame, size, state);
            screens::render_game_over(frame, size, state);
        }
    }
}
