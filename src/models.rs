use rand::rngs::StdRng;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// Sum every question/answer pair has to reach.
pub const TARGET: u8 = 10;

/// A number from 1 to 9, the only values that appear as questions or answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Digit(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DigitError {
    #[error("{0} is not a digit between 1 and 9")]
    OutOfRange(u8),
}

impl Digit {
    pub const ALL: [Digit; 9] = [
        Digit(1),
        Digit(2),
        Digit(3),
        Digit(4),
        Digit(5),
        Digit(6),
        Digit(7),
        Digit(8),
        Digit(9),
    ];

    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value <= 9 {
            Some(Digit(value))
        } else {
            None
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// The digit that adds up to [`TARGET`] with this one. 1..=9 maps onto itself.
    pub const fn complement(self) -> Digit {
        Digit(TARGET - self.0)
    }

    pub const fn makes_ten(self, other: Digit) -> bool {
        self.0 + other.0 == TARGET
    }

    /// Parses a keyboard character such as `'7'`.
    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).and_then(|d| Digit::new(d as u8))
    }

    /// Zero-based position in [`Digit::ALL`], used for button layout.
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl TryFrom<u8> for Digit {
    type Error = DigitError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Digit::new(value).ok_or(DigitError::OutOfRange(value))
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One solved question, kept for the end-of-session summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuestionRecord {
    pub question: Digit,
    pub misses: usize,
}

/// What a submitted guess did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// No active question, or it is already solved.
    Ignored,
    Correct,
    Wrong,
    /// Wrong, and already marked wrong before.
    AlreadyWrong,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingAnswer,
    Solved,
    Finished,
}

#[derive(Debug)]
pub struct QuizSession {
    pub(crate) current: Option<Digit>,
    pub(crate) used: BTreeSet<Digit>,
    pub(crate) wrong_guesses: BTreeSet<Digit>,
    pub(crate) solved: bool,
    pub(crate) finished: bool,
    pub(crate) history: Vec<QuestionRecord>,
    pub(crate) rng: StdRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Quiz,
    QuitConfirm,
    Exit,
}
