use crate::config::Config;
use crate::logger;
use crate::models::{AnswerOutcome, AppState, Digit, Phase, QuizSession};
use crate::utils::Glyphs;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Everything the screen is drawn from: the session plus where the learner is
/// in the interface.
#[derive(Debug)]
pub struct App {
    pub session: QuizSession,
    pub state: AppState,
    /// Highlighted answer button.
    pub focused: Digit,
    pub glyphs: Glyphs,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self::with_session(QuizSession::new(config.seed), config.glyphs())
    }

    pub fn with_session(session: QuizSession, glyphs: Glyphs) -> Self {
        App {
            session,
            state: AppState::Quiz,
            focused: Digit::ALL[0],
            glyphs,
        }
    }

    pub fn should_exit(&self) -> bool {
        self.state == AppState::Exit
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.state = AppState::Exit;
            return;
        }

        match self.state {
            AppState::Quiz => self.handle_quiz_key(key.code),
            AppState::QuitConfirm => match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => self.state = AppState::Exit,
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    self.state = AppState::Quiz
                }
                _ => {}
            },
            AppState::Exit => {}
        }
    }

    fn handle_quiz_key(&mut self, code: KeyCode) {
        if matches!(code, KeyCode::Esc | KeyCode::Char('q')) {
            self.state = AppState::QuitConfirm;
            return;
        }

        match self.session.phase() {
            Phase::AwaitingAnswer => match code {
                KeyCode::Char(c) => {
                    if let Some(guess) = Digit::from_char(c) {
                        self.answer(guess);
                    } else if c == 'h' {
                        self.move_focus(-1);
                    } else if c == 'l' {
                        self.move_focus(1);
                    } else if c == ' ' {
                        self.answer(self.focused);
                    }
                }
                KeyCode::Left => self.move_focus(-1),
                KeyCode::Right => self.move_focus(1),
                KeyCode::Enter => self.answer(self.focused),
                _ => {}
            },
            Phase::Solved => {
                if matches!(
                    code,
                    KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('n')
                ) {
                    self.session.advance();
                    self.focused = Digit::ALL[0];
                }
            }
            Phase::Finished => {
                if matches!(code, KeyCode::Enter | KeyCode::Char('r')) {
                    self.session.reset_all();
                    self.focused = Digit::ALL[0];
                }
            }
        }
    }

    fn answer(&mut self, guess: Digit) {
        let outcome = self.session.submit_answer(guess);
        if outcome == AnswerOutcome::Ignored {
            logger::log(&format!("ignored guess {}", guess));
        }
        if outcome == AnswerOutcome::Wrong && guess == self.focused {
            self.move_focus(1);
        }
    }

    /// Moves the highlight to the nearest enabled button in `step` direction,
    /// wrapping around. Stays put when nothing else is enabled.
    fn move_focus(&mut self, step: isize) {
        let count = Digit::ALL.len() as isize;
        let start = self.focused.index() as isize;
        for offset in 1..count {
            let index = (start + step * offset).rem_euclid(count) as usize;
            let candidate = Digit::ALL[index];
            if !self.session.is_disabled(candidate) {
                self.focused = candidate;
                return;
            }
        }
    }
}
