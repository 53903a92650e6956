pub mod layout;
mod finished;
mod quiz;

use crate::app::App;
use crate::models::AppState;
use ratatui::Frame;

pub use finished::draw_finished;
pub use layout::{calculate_button_cells, calculate_finished_chunks, calculate_quiz_chunks};
pub use quiz::{draw_quit_confirmation, draw_quiz, TITLE};

/// Draws the whole screen from `app`.
pub fn draw(f: &mut Frame, app: &App) {
    if app.session.is_finished() {
        draw_finished(f, app);
    } else {
        draw_quiz(f, app);
    }

    if app.state == AppState::QuitConfirm {
        draw_quit_confirmation(f);
    }
}
