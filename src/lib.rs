pub mod app;
pub mod config;
pub mod logger;
pub mod models;
pub mod session;
pub mod ui;
pub mod utils;


// Re-exports for convenience
pub use app::App;
pub use config::Config;
pub use logger::SessionEvent;
pub use models::{AnswerOutcome, AppState, Digit, DigitError, Phase, QuestionRecord, QuizSession};
pub use session::pick_next;
pub use ui::draw;
pub use utils::Glyphs;
