//! Match configuration.
//!
//! No implicit global registry: dice parameters, the finish bonus, the RNG
//! seed, and the animation pacing are explicit values passed to the turn
//! manager at construction. The engine itself never sleeps or times
//! anything; `AnimationConfig` is plain data for presenter implementations.

use serde::{Deserialize, Serialize};

/// Pacing parameters for the presentation layer, in milliseconds.
///
/// Defaults: 200 ms per movement step, 800 ms for a direct obstacle
/// reposition, a 1000 ms dice spin with 200 ms fades and a new face every
/// 100 ms, 500 ms between the final face and the first movement step, and a
/// 400 ms hold at square 100 before a bounce descends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Duration of one square-to-square movement step.
    pub step_ms: u32,
    /// Duration of a direct (obstacle) reposition.
    pub reposition_ms: u32,
    /// Total duration of the dice spin.
    pub dice_roll_ms: u32,
    /// Dice fade-in before the spin.
    pub dice_fade_in_ms: u32,
    /// Dice fade-out after the spin.
    pub dice_fade_out_ms: u32,
    /// Interval between dice faces during the spin.
    pub dice_frame_interval_ms: u32,
    /// Delay between the final face and the first movement step.
    pub post_roll_delay_ms: u32,
    /// Hold at square 100 before the bounce descends.
    pub bounce_pause_ms: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            step_ms: 200,
            reposition_ms: 800,
            dice_roll_ms: 1000,
            dice_fade_in_ms: 200,
            dice_fade_out_ms: 200,
            dice_frame_interval_ms: 100,
            post_roll_delay_ms: 500,
            bounce_pause_ms: 400,
        }
    }
}

/// Complete match configuration.
///
/// ```
/// use ladder_race::core::MatchConfig;
///
/// let config = MatchConfig::new()
///     .with_seed(42)
///     .with_finish_bonus(100);
/// assert_eq!(config.die_sides, 6);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of die faces. Rolling the maximum grants another turn.
    pub die_sides: u8,

    /// Points awarded on reaching the winning square.
    pub finish_bonus: u32,

    /// RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Pacing parameters for presenter implementations.
    pub animation: AnimationConfig,
}

impl MatchConfig {
    /// Create a configuration with the standard rules: a d6 and a
    /// 100-point finish bonus.
    #[must_use]
    pub fn new() -> Self {
        Self {
            die_sides: 6,
            finish_bonus: 100,
            seed: None,
            animation: AnimationConfig::default(),
        }
    }

    /// Set the number of die faces.
    #[must_use]
    pub fn with_die_sides(mut self, sides: u8) -> Self {
        assert!(sides >= 1, "a die needs at least one side");
        self.die_sides = sides;
        self
    }

    /// Set the finish bonus.
    #[must_use]
    pub fn with_finish_bonus(mut self, bonus: u32) -> Self {
        self.finish_bonus = bonus;
        self
    }

    /// Pin the RNG seed (replays, tests).
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the animation pacing.
    #[must_use]
    pub fn with_animation(mut self, animation: AnimationConfig) -> Self {
        self.animation = animation;
        self
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new()
    }
}
