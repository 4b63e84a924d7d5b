//! Question bank: pools of question records keyed by quiz kind.
//!
//! The bank is static configuration, typically deserialized from JSON.
//! Malformed questions (no options, zero or several correct answers) and
//! missing scored pools are caught when the bank is built, never mid-game.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::DiceRng;

use super::gate::QuizKind;

/// One selectable answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub text: String,
    pub correct: bool,
}

/// A question record: prompt, options (exactly one correct), point value,
/// and an optional audio cue key for the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub options: Vec<AnswerOption>,
    pub points: u32,
    #[serde(default)]
    pub audio: Option<String>,
}

impl Question {
    /// Index of the correct option.
    ///
    /// Bank validation guarantees exactly one exists.
    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.options
            .iter()
            .position(|o| o.correct)
            .unwrap_or_default()
    }

    /// Is `choice` the correct option?
    #[must_use]
    pub fn grade(&self, choice: usize) -> bool {
        self.options.get(choice).is_some_and(|o| o.correct)
    }
}

/// A malformed question bank. Static-configuration errors, caught at load.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BankError {
    /// A scored kind has no questions to draw from.
    #[error("no questions for {0:?}")]
    EmptyPool(QuizKind),

    /// A question has no answer options.
    #[error("question {index} for {kind:?} has no options")]
    NoOptions { kind: QuizKind, index: usize },

    /// A question does not have exactly one correct option.
    #[error("question {index} for {kind:?} has {correct_count} correct options")]
    WrongCorrectCount {
        kind: QuizKind,
        index: usize,
        correct_count: usize,
    },
}

/// Fixed mapping from quiz kind to a pool of questions.
///
/// Scored kinds (shortcut, setback) must have a non-empty pool; the gate
/// kind's instruction path never draws, so its pool may be absent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FxHashMap<QuizKind, Vec<Question>>")]
#[serde(into = "FxHashMap<QuizKind, Vec<Question>>")]
pub struct QuestionBank {
    pools: FxHashMap<QuizKind, Vec<Question>>,
}

impl QuestionBank {
    /// Build a bank, validating every pool.
    pub fn new(pools: FxHashMap<QuizKind, Vec<Question>>) -> Result<Self, BankError> {
        for kind in [QuizKind::Shortcut, QuizKind::Setback] {
            if pools.get(&kind).map_or(true, |pool| pool.is_empty()) {
                return Err(BankError::EmptyPool(kind));
            }
        }

        for (&kind, pool) in &pools {
            for (index, question) in pool.iter().enumerate() {
                if question.options.is_empty() {
                    return Err(BankError::NoOptions { kind, index });
                }
                let correct_count = question.options.iter().filter(|o| o.correct).count();
                if correct_count != 1 {
                    return Err(BankError::WrongCorrectCount { kind, index, correct_count });
                }
            }
        }

        Ok(Self { pools })
    }

    /// Draw a question uniformly from `kind`'s pool.
    #[must_use]
    pub fn draw(&self, kind: QuizKind, rng: &mut DiceRng) -> Option<&Question> {
        self.pools.get(&kind).and_then(|pool| rng.choose(pool))
    }

    /// The pool for `kind`, if present.
    #[must_use]
    pub fn pool(&self, kind: QuizKind) -> Option<&[Question]> {
        self.pools.get(&kind).map(Vec::as_slice)
    }
}

impl TryFrom<FxHashMap<QuizKind, Vec<Question>>> for QuestionBank {
    type Error = BankError;

    fn try_from(pools: FxHashMap<QuizKind, Vec<Question>>) -> Result<Self, Self::Error> {
        Self::new(pools)
    }
}

impl From<QuestionBank> for FxHashMap<QuizKind, Vec<Question>> {
    fn from(bank: QuestionBank) -> Self {
        bank.pools
    }
}
