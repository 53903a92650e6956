use crate::models::{Digit, TARGET};
use unicode_width::UnicodeWidthStr;

/// Dots shown under the question digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    /// One of the question's own dots.
    Question,
    /// A dot added once the complement is found.
    Complement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub question: &'static str,
    pub complement: &'static str,
    pub wrong: &'static str,
}

impl Glyphs {
    pub const UNICODE: Glyphs = Glyphs {
        question: "●",
        complement: "●",
        wrong: "✗",
    };

    pub const ASCII: Glyphs = Glyphs {
        question: "o",
        complement: "+",
        wrong: "x",
    };

    pub fn for_mark(&self, mark: Mark) -> &'static str {
        match mark {
            Mark::Question => self.question,
            Mark::Complement => self.complement,
        }
    }
}

/// Marks separator inside a row.
pub const MARK_GAP: &str = " ";

/// `question` question dots, followed by the complement dots when solved.
pub fn marks_for(question: Digit, solved: bool) -> Vec<Mark> {
    let mut marks = vec![Mark::Question; question.get() as usize];
    if solved {
        marks.extend(std::iter::repeat_n(
            Mark::Complement,
            question.complement().get() as usize,
        ));
    }
    marks
}

/// Display width of `count` marks joined by [`MARK_GAP`].
pub fn row_width(glyphs: &Glyphs, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let widest = glyphs.question.width().max(glyphs.complement.width());
    count * widest + (count - 1) * MARK_GAP.width()
}

/// Splits marks into one row of ten when it fits `max_width`, otherwise into
/// rows of five like a ten frame.
pub fn layout_marks(marks: &[Mark], glyphs: &Glyphs, max_width: usize) -> Vec<Vec<Mark>> {
    if marks.is_empty() {
        return Vec::new();
    }
    let full = TARGET as usize;
    let per_row = if row_width(glyphs, full) <= max_width {
        full
    } else {
        full / 2
    };
    marks.chunks(per_row).map(|row| row.to_vec()).collect()
}
