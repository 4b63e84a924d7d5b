//! Quiz system: question bank and the single-flight gate protocol.
//!
//! Obstacle effects are gated behind a question; the presentation layer
//! owns the UI and timing, the engine owns selection, single-flight, and
//! grading.

pub mod bank;
pub mod gate;

pub use bank::{AnswerOption, BankError, Question, QuestionBank};
pub use gate::{Prompt, QuizGate, QuizKind, QuizOutcome, QuizSession};
