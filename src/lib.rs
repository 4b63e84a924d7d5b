//! # ladder-race
//!
//! The turn-progression and movement-resolution engine of a multi-player
//! race-to-100 board game with quiz-gated special squares.
//!
//! ## Design Principles
//!
//! 1. **Core only**: the crate owns whose turn it is, what a die roll does,
//!    how a token travels square by square, and how special squares score.
//!    Rendering, assets, sound, and menus live outside it.
//!
//! 2. **Injected capabilities**: presentation is consumed through three
//!    traits handed to the turn manager at construction — [`Presenter`]
//!    (animation), [`QuizGate`] (question display), [`FinishNotifier`]
//!    (completion events). The core has zero framework dependency.
//!
//! 3. **Event-driven, single-threaded**: work advances only on discrete
//!    entry points (roll request, step completion, quiz answer), one at a
//!    time. The `roll_in_flight` guard is the only concurrency primitive.
//!
//! 4. **Configuration over globals**: dice, scoring, and animation pacing
//!    are explicit values in [`MatchConfig`]; the board layout and question
//!    bank are validated static tables.
//!
//! ## Modules
//!
//! - `core`: squares, players, dice, configuration
//! - `board`: the obstacle table, effect rules, co-location layout
//! - `movement`: path planning, the overshoot bounce, the step drive
//! - `quiz`: question bank and the single-flight gate protocol
//! - `turn`: the turn and roll manager
//! - `finish`: finish order and final standings

pub mod board;
pub mod core;
pub mod finish;
pub mod movement;
pub mod quiz;
pub mod turn;

// Re-export commonly used types
pub use crate::core::{
    AnimationConfig, DiceRng, MatchConfig, Player, PlayerId, Square, SquareError, BOARD_SQUARES,
};

pub use crate::board::{
    assign_slots, players_by_square, slot_position, BoardError, EffectResult, Obstacle,
    ObstacleTable, SlotAssignment, SlotPosition,
};

pub use crate::movement::{plan, DriveStatus, MoveDrive, MovePath, Presenter};

pub use crate::quiz::{
    AnswerOption, BankError, Prompt, Question, QuestionBank, QuizGate, QuizKind, QuizOutcome,
    QuizSession,
};

pub use crate::turn::{MatchSnapshot, Phase, TurnManager};

pub use crate::finish::{FinishAggregator, FinishNotifier};
