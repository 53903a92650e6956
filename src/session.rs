use crate::logger::{self, SessionEvent};
use crate::models::{AnswerOutcome, Digit, Phase, QuestionRecord, QuizSession};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;

/// Picks a digit not yet in `used`, uniformly. `None` once all nine are used.
pub fn pick_next<R: Rng + ?Sized>(used: &BTreeSet<Digit>, rng: &mut R) -> Option<Digit> {
    let remaining: Vec<Digit> = Digit::ALL
        .iter()
        .copied()
        .filter(|d| !used.contains(d))
        .collect();
    remaining.choose(rng).copied()
}

impl QuizSession {
    /// Creates a session and draws its first question.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut session = QuizSession {
            current: None,
            used: BTreeSet::new(),
            wrong_guesses: BTreeSet::new(),
            solved: false,
            finished: false,
            history: Vec::new(),
            rng,
        };
        session.start();
        session
    }

    pub fn current(&self) -> Option<Digit> {
        self.current
    }

    pub fn used(&self) -> &BTreeSet<Digit> {
        &self.used
    }

    pub fn wrong_guesses(&self) -> &BTreeSet<Digit> {
        &self.wrong_guesses
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn history(&self) -> &[QuestionRecord] {
        &self.history
    }

    pub fn phase(&self) -> Phase {
        if self.finished {
            Phase::Finished
        } else if self.solved {
            Phase::Solved
        } else {
            Phase::AwaitingAnswer
        }
    }

    /// A button is disabled once it was guessed wrong or the question is solved.
    pub fn is_disabled(&self, digit: Digit) -> bool {
        self.solved || self.finished || self.wrong_guesses.contains(&digit)
    }

    /// Draws the next unused digit, or finishes the session if none is left.
    pub fn start(&mut self) {
        match pick_next(&self.used, &mut self.rng) {
            Some(digit) => self.present(digit),
            None => self.finish(),
        }
    }

    pub fn submit_answer(&mut self, guess: Digit) -> AnswerOutcome {
        let question = match self.current {
            Some(question) if !self.solved && !self.finished => question,
            _ => return AnswerOutcome::Ignored,
        };

        if question.makes_ten(guess) {
            self.solved = true;
            let record = QuestionRecord {
                question,
                misses: self.wrong_guesses.len(),
            };
            self.history.push(record);
            logger::log_event(&SessionEvent::Solved {
                question,
                misses: record.misses,
            });
            AnswerOutcome::Correct
        } else if self.wrong_guesses.insert(guess) {
            logger::log_event(&SessionEvent::Wrong { question, guess });
            AnswerOutcome::Wrong
        } else {
            AnswerOutcome::AlreadyWrong
        }
    }

    pub fn advance(&mut self) {
        if self.used.len() == Digit::ALL.len() {
            self.finish();
        } else {
            self.start();
        }
    }

    /// Starts over with an empty pool. The pool is full here, so the draw
    /// skips the exhaustion check.
    pub fn reset_all(&mut self) {
        self.used.clear();
        self.history.clear();
        self.finished = false;
        logger::log_event(&SessionEvent::Reset);

        let digit = Digit::ALL[self.rng.gen_range(0..Digit::ALL.len())];
        self.present(digit);
    }

    fn present(&mut self, digit: Digit) {
        self.current = Some(digit);
        self.used.insert(digit);
        self.wrong_guesses.clear();
        self.solved = false;
        logger::log_event(&SessionEvent::Drawn {
            question: digit,
            used: self.used.len(),
        });
    }

    fn finish(&mut self) {
        if !self.finished {
            self.finished = true;
            logger::log_event(&SessionEvent::Finished {
                questions: self.used.len(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digit(n: u8) -> Digit {
        Digit::new(n).unwrap()
    }

    /// Session positioned on a chosen question, as if it had just been drawn.
    fn session_on(question: u8) -> QuizSession {
        let mut session = QuizSession::new(Some(7));
        session.used.clear();
        session.present(digit(question));
        session
    }

    fn solve_current(session: &mut QuizSession) {
        let answer = session.current().unwrap().complement();
        assert_eq!(session.submit_answer(answer), AnswerOutcome::Correct);
    }

    #[test]
    fn test_new_session_draws_one_digit() {
        let session = QuizSession::new(Some(1));
        let current = session.current().unwrap();
        assert_eq!(session.used().len(), 1);
        assert!(session.used().contains(&current));
        assert!(session.wrong_guesses().is_empty());
        assert!(!session.is_solved());
        assert!(!session.is_finished());
        assert_eq!(session.phase(), Phase::AwaitingAnswer);
    }

    #[test]
    fn test_same_seed_same_order() {
        let order = |seed| {
            let mut session = QuizSession::new(Some(seed));
            let mut drawn = vec![session.current().unwrap()];
            for _ in 0..8 {
                solve_current(&mut session);
                session.advance();
                drawn.push(session.current().unwrap());
            }
            drawn
        };
        assert_eq!(order(42), order(42));
    }

    #[test]
    fn test_pick_next_skips_used() {
        let mut rng = StdRng::seed_from_u64(3);
        let used: BTreeSet<Digit> = Digit::ALL.iter().copied().filter(|d| d.get() != 6).collect();
        for _ in 0..20 {
            assert_eq!(pick_next(&used, &mut rng), Some(digit(6)));
        }
        let all: BTreeSet<Digit> = Digit::ALL.iter().copied().collect();
        assert_eq!(pick_next(&all, &mut rng), None);
    }

    #[test]
    fn test_pick_next_reaches_every_digit() {
        let mut rng = StdRng::seed_from_u64(11);
        let empty = BTreeSet::new();
        let mut seen = BTreeSet::new();
        for _ in 0..500 {
            seen.insert(pick_next(&empty, &mut rng).unwrap());
        }
        assert_eq!(seen.len(), 9);
    }

    #[test]
    fn test_solved_iff_sum_is_ten() {
        for q in 1..=9 {
            for g in 1..=9 {
                let mut session = session_on(q);
                let outcome = session.submit_answer(digit(g));
                assert_eq!(session.is_solved(), q + g == 10, "q={} g={}", q, g);
                if q + g == 10 {
                    assert_eq!(outcome, AnswerOutcome::Correct);
                } else {
                    assert_eq!(outcome, AnswerOutcome::Wrong);
                    assert!(session.wrong_guesses().contains(&digit(g)));
                }
            }
        }
    }

    #[test]
    fn test_wrong_guess_is_idempotent() {
        let mut session = session_on(3);
        assert_eq!(session.submit_answer(digit(2)), AnswerOutcome::Wrong);
        assert_eq!(session.submit_answer(digit(2)), AnswerOutcome::AlreadyWrong);
        assert_eq!(session.wrong_guesses().len(), 1);
        assert!(session.is_disabled(digit(2)));
        assert!(!session.is_disabled(digit(7)));
    }

    #[test]
    fn test_submit_after_solved_is_noop() {
        let mut session = session_on(8);
        session.submit_answer(digit(1));
        solve_current(&mut session);

        let wrong_before = session.wrong_guesses().clone();
        let used_before = session.used().clone();
        for g in Digit::ALL {
            assert_eq!(session.submit_answer(g), AnswerOutcome::Ignored);
        }
        assert_eq!(session.wrong_guesses(), &wrong_before);
        assert_eq!(session.used(), &used_before);
        assert_eq!(session.current(), Some(digit(8)));
        assert!(session.is_solved());
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_submit_without_question_is_ignored() {
        let mut session = session_on(5);
        session.current = None;
        assert_eq!(session.submit_answer(digit(5)), AnswerOutcome::Ignored);
        assert!(!session.is_solved());
        assert!(session.wrong_guesses().is_empty());
    }

    #[test]
    fn test_wrong_guesses_never_hold_complement() {
        let mut session = QuizSession::new(Some(99));
        while !session.is_finished() {
            let question = session.current().unwrap();
            for g in Digit::ALL {
                session.submit_answer(g);
                assert!(!session.wrong_guesses().contains(&question.complement()));
            }
            assert!(session.is_solved());
            session.advance();
        }
    }

    #[test]
    fn test_advance_draws_unused_digit() {
        let mut session = QuizSession::new(Some(5));
        while session.used().len() < 9 {
            let before = session.used().clone();
            solve_current(&mut session);
            session.advance();
            let current = session.current().unwrap();
            assert!(!before.contains(&current));
            assert_eq!(session.used().len(), before.len() + 1);
            assert!(session.wrong_guesses().is_empty());
            assert!(!session.is_solved());
        }
        assert!(!session.is_finished());
    }

    #[test]
    fn test_advance_after_ninth_finishes() {
        let mut session = QuizSession::new(Some(2024));
        for _ in 0..8 {
            solve_current(&mut session);
            session.advance();
        }
        assert_eq!(session.used().len(), 9);
        solve_current(&mut session);

        let last = session.current();
        session.advance();
        assert!(session.is_finished());
        assert_eq!(session.phase(), Phase::Finished);
        assert_eq!(session.current(), last);
        assert_eq!(session.used().len(), 9);
        assert_eq!(session.history().len(), 9);

        // Buttons stay dead once finished.
        assert_eq!(session.submit_answer(digit(1)), AnswerOutcome::Ignored);
        assert!(Digit::ALL.iter().all(|d| session.is_disabled(*d)));
    }

    #[test]
    fn test_start_with_empty_pool_finishes() {
        let mut session = QuizSession::new(Some(8));
        session.used = Digit::ALL.iter().copied().collect();
        let current = session.current();
        session.start();
        assert!(session.is_finished());
        assert_eq!(session.current(), current);
    }

    #[test]
    fn test_reset_all() {
        let mut session = QuizSession::new(Some(17));
        for _ in 0..8 {
            solve_current(&mut session);
            session.advance();
        }
        solve_current(&mut session);
        session.advance();
        assert!(session.is_finished());

        for _ in 0..5 {
            session.reset_all();
            assert_eq!(session.used().len(), 1);
            assert!(!session.is_finished());
            assert!(!session.is_solved());
            assert!(session.wrong_guesses().is_empty());
            assert!(session.history().is_empty());
            assert!(session.used().contains(&session.current().unwrap()));
        }
    }

    #[test]
    fn test_reset_mid_session_clears_wrong_guesses() {
        let mut session = session_on(2);
        session.submit_answer(digit(1));
        session.reset_all();
        assert!(session.wrong_guesses().is_empty());
        assert_eq!(session.used().len(), 1);
    }

    #[test]
    fn test_scenario_four_then_six() {
        let mut session = session_on(4);

        assert_eq!(session.submit_answer(digit(5)), AnswerOutcome::Wrong);
        assert_eq!(
            session.wrong_guesses().iter().copied().collect::<Vec<_>>(),
            vec![digit(5)]
        );
        assert!(!session.is_solved());

        assert_eq!(session.submit_answer(digit(6)), AnswerOutcome::Correct);
        assert!(session.is_solved());
        assert_eq!(
            session.history(),
            &[QuestionRecord {
                question: digit(4),
                misses: 1
            }]
        );

        session.advance();
        assert_ne!(session.current(), Some(digit(4)));
        assert!(session.wrong_guesses().is_empty());
        assert!(!session.is_solved());
        assert_eq!(session.used().len(), 2);
    }

    #[test]
    fn test_used_never_exceeds_nine() {
        for seed in 0..20 {
            let mut session = QuizSession::new(Some(seed));
            for _ in 0..15 {
                solve_current(&mut session);
                session.advance();
                assert!(session.used().len() <= 9);
                if session.is_finished() {
                    break;
                }
            }
            assert!(session.is_finished());
            assert_eq!(session.used().len(), 9);
        }
    }
}
