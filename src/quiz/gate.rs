//! The quiz gate: the single-flight question/answer capability.
//!
//! The turn manager asks the gate to present a question for an obstacle's
//! kind; the answer arrives later through `TurnManager::quiz_answered`.
//! [`QuizSession`] is the driver a gate implementation embeds: it draws the
//! question, enforces single-flight, and grades the chosen option.
//!
//! The gate kind is informational: it presents an instruction prompt and
//! acknowledges immediately as correct with zero points, through a call
//! path distinct from the scored kinds (any scoring for it happens outside
//! the engine).

use serde::{Deserialize, Serialize};

use crate::core::DiceRng;

use super::bank::QuestionBank;

/// Which kind of special square is asking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuizKind {
    Shortcut,
    Setback,
    Gate,
}

/// The graded result of a quiz presentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOutcome {
    pub correct: bool,
    /// The question's own points (0 when incorrect, and always 0 for the
    /// instruction path). Awarded in addition to the obstacle effect's.
    pub points: u32,
}

/// The capability the turn manager invokes. Implemented by the
/// presentation layer; the answer returns via `TurnManager::quiz_answered`.
pub trait QuizGate {
    /// Display a question (or instruction) for `kind`.
    fn present(&mut self, kind: QuizKind);
}

/// What the session hands the UI to display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Prompt {
    /// A scored question; answer by option index.
    Question {
        prompt: String,
        options: Vec<String>,
        points: u32,
        audio: Option<String>,
    },
    /// The informational gate path; acknowledge to continue.
    Instruction,
}

enum Active {
    Question { correct_index: usize, points: u32 },
    Instruction,
}

/// Single-flight quiz driver for gate implementations.
///
/// `open` draws and returns the prompt to display, or `None` while one is
/// already outstanding (the in-flight question stays authoritative).
/// Scored prompts are resolved with [`QuizSession::answer`]; the
/// instruction prompt with [`QuizSession::acknowledge`].
pub struct QuizSession {
    bank: QuestionBank,
    rng: DiceRng,
    active: Option<Active>,
}

impl QuizSession {
    /// Create a session over a validated bank.
    #[must_use]
    pub fn new(bank: QuestionBank, rng: DiceRng) -> Self {
        Self { bank, rng, active: None }
    }

    /// Is a prompt currently outstanding?
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Open a prompt for `kind`. No-op (returns `None`) while one is
    /// already showing.
    pub fn open(&mut self, kind: QuizKind) -> Option<Prompt> {
        if self.active.is_some() {
            log::warn!("quiz already showing, ignoring {:?}", kind);
            return None;
        }

        if kind == QuizKind::Gate {
            self.active = Some(Active::Instruction);
            return Some(Prompt::Instruction);
        }

        let question = self.bank.draw(kind, &mut self.rng)?.clone();
        self.active = Some(Active::Question {
            correct_index: question.correct_index(),
            points: question.points,
        });
        Some(Prompt::Question {
            prompt: question.prompt,
            options: question.options.into_iter().map(|o| o.text).collect(),
            points: question.points,
            audio: question.audio,
        })
    }

    /// Grade the chosen option of the outstanding question.
    ///
    /// Returns `None` if no scored question is outstanding.
    pub fn answer(&mut self, choice: usize) -> Option<QuizOutcome> {
        match self.active {
            Some(Active::Question { correct_index, points }) => {
                self.active = None;
                let correct = choice == correct_index;
                Some(QuizOutcome {
                    correct,
                    points: if correct { points } else { 0 },
                })
            }
            _ => {
                log::warn!("answer with no question outstanding");
                None
            }
        }
    }

    /// Acknowledge the outstanding instruction prompt.
    ///
    /// Always `correct = true, points = 0`; returns `None` if the
    /// outstanding prompt is not an instruction.
    pub fn acknowledge(&mut self) -> Option<QuizOutcome> {
        match self.active {
            Some(Active::Instruction) => {
                self.active = None;
                Some(QuizOutcome { correct: true, points: 0 })
            }
            _ => {
                log::warn!("acknowledge with no instruction outstanding");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::bank::tests::small_bank;

    fn session() -> QuizSession {
        QuizSession::new(small_bank(), DiceRng::new(42))
    }

    #[test]
    fn test_open_scored_question() {
        let mut s = session();
        match s.open(QuizKind::Shortcut) {
            Some(Prompt::Question { prompt, options, points, .. }) => {
                assert_eq!(prompt, "up?");
                assert_eq!(options.len(), 4);
                assert_eq!(points, 10);
            }
            other => panic!("expected question, got {:?}", other),
        }
        assert!(s.is_active());
    }

    #[test]
    fn test_second_open_is_rejected() {
        let mut s = session();
        assert!(s.open(QuizKind::Shortcut).is_some());
        assert!(s.open(QuizKind::Setback).is_none());
        assert!(s.open(QuizKind::Gate).is_none());
        assert!(s.is_active());
    }

    #[test]
    fn test_correct_answer_awards_question_points() {
        let mut s = session();
        s.open(QuizKind::Shortcut);
        // small_bank marks option 0 correct for the shortcut question.
        let outcome = s.answer(0).unwrap();
        assert_eq!(outcome, QuizOutcome { correct: true, points: 10 });
        assert!(!s.is_active());
    }

    #[test]
    fn test_wrong_answer_awards_nothing() {
        let mut s = session();
        s.open(QuizKind::Shortcut);
        let outcome = s.answer(3).unwrap();
        assert_eq!(outcome, QuizOutcome { correct: false, points: 0 });
    }

    #[test]
    fn test_gate_takes_instruction_path() {
        let mut s = session();
        assert_eq!(s.open(QuizKind::Gate), Some(Prompt::Instruction));
        // The scored resolution path does not apply to instructions.
        assert!(s.answer(0).is_none());
        let outcome = s.acknowledge().unwrap();
        assert_eq!(outcome, QuizOutcome { correct: true, points: 0 });
        assert!(!s.is_active());
    }

    #[test]
    fn test_acknowledge_requires_instruction() {
        let mut s = session();
        assert!(s.acknowledge().is_none());

        s.open(QuizKind::Setback);
        assert!(s.acknowledge().is_none());
        assert!(s.is_active());
    }

    #[test]
    fn test_session_reusable_after_resolution() {
        let mut s = session();
        s.open(QuizKind::Shortcut);
        s.answer(0);
        assert!(s.open(QuizKind::Setback).is_some());
    }
}
