//! Finish order and final standings.
//!
//! The aggregator owns the append-only, duplicate-free finish order. The
//! turn manager records each player reaching the winning square and signals
//! the injected [`FinishNotifier`]: an individual event with the finisher's
//! rank while the race continues, or the completion event with both the
//! finish order and the score ranking once everyone is home.

use serde::{Deserialize, Serialize};

use crate::core::{Player, PlayerId};

/// Completion signals, implemented by the presentation layer.
pub trait FinishNotifier {
    /// A player reached the winning square; `rank` is 1-based.
    fn player_finished(&mut self, player: &Player, rank: usize);

    /// Every player has finished. `score_ranking` is ordered best-first.
    fn game_finished(&mut self, finish_order: &[PlayerId], score_ranking: &[PlayerId]);
}

/// Tracks the order players reach the winning square.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinishAggregator {
    order: Vec<PlayerId>,
}

impl FinishAggregator {
    /// Create an empty aggregator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finisher. Returns the 1-based rank for a first-time
    /// finisher, `None` for a duplicate.
    pub fn record(&mut self, player: PlayerId) -> Option<usize> {
        if self.order.contains(&player) {
            return None;
        }
        self.order.push(player);
        Some(self.order.len())
    }

    /// The finish order so far.
    #[must_use]
    pub fn order(&self) -> &[PlayerId] {
        &self.order
    }

    /// Has this player already finished?
    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        self.order.contains(&player)
    }

    /// Have all `roster_len` players finished?
    #[must_use]
    pub fn is_complete(&self, roster_len: usize) -> bool {
        self.order.len() == roster_len
    }

    /// Final standings: the finish-ordered roster stably sorted by score
    /// descending, so ties break by finish order.
    #[must_use]
    pub fn score_ranking(&self, roster: &[Player]) -> Vec<PlayerId> {
        let mut ranking: Vec<PlayerId> = self.order.clone();
        ranking.sort_by(|a, b| {
            let score = |id: &PlayerId| roster.get(id.index()).map_or(0, Player::score);
            score(b).cmp(&score(a))
        });
        ranking
    }

    /// Forget all finishers (full game reset).
    pub fn clear(&mut self) {
        self.order.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster_with_scores(scores: &[u32]) -> Vec<Player> {
        scores
            .iter()
            .enumerate()
            .map(|(i, &score)| {
                let mut player = Player::new(PlayerId::new(i as u8), format!("P{}", i));
                player.award(score);
                player
            })
            .collect()
    }

    #[test]
    fn test_record_assigns_ranks() {
        let mut agg = FinishAggregator::new();
        assert_eq!(agg.record(PlayerId::new(2)), Some(1));
        assert_eq!(agg.record(PlayerId::new(0)), Some(2));
        assert_eq!(agg.order(), &[PlayerId::new(2), PlayerId::new(0)]);
    }

    #[test]
    fn test_record_is_idempotent() {
        let mut agg = FinishAggregator::new();
        assert_eq!(agg.record(PlayerId::new(1)), Some(1));
        assert_eq!(agg.record(PlayerId::new(1)), None);
        assert_eq!(agg.order().len(), 1);
    }

    #[test]
    fn test_completion() {
        let mut agg = FinishAggregator::new();
        agg.record(PlayerId::new(0));
        assert!(!agg.is_complete(2));
        agg.record(PlayerId::new(1));
        assert!(agg.is_complete(2));
    }

    #[test]
    fn test_ranking_sorts_by_score_descending() {
        let roster = roster_with_scores(&[50, 200, 120]);
        let mut agg = FinishAggregator::new();
        agg.record(PlayerId::new(0));
        agg.record(PlayerId::new(1));
        agg.record(PlayerId::new(2));

        let ranking = agg.score_ranking(&roster);
        assert_eq!(ranking, vec![PlayerId::new(1), PlayerId::new(2), PlayerId::new(0)]);
    }

    #[test]
    fn test_ranking_breaks_ties_by_finish_order() {
        let roster = roster_with_scores(&[100, 100, 100]);
        let mut agg = FinishAggregator::new();
        agg.record(PlayerId::new(2));
        agg.record(PlayerId::new(0));
        agg.record(PlayerId::new(1));

        let ranking = agg.score_ranking(&roster);
        assert_eq!(ranking, vec![PlayerId::new(2), PlayerId::new(0), PlayerId::new(1)]);
    }

    #[test]
    fn test_ranking_is_a_permutation_of_the_roster() {
        let roster = roster_with_scores(&[10, 30, 20, 40]);
        let mut agg = FinishAggregator::new();
        for id in [3, 1, 0, 2] {
            agg.record(PlayerId::new(id));
        }

        let mut ranking = agg.score_ranking(&roster);
        ranking.sort_by_key(|id| id.index());
        assert_eq!(ranking, PlayerId::all(4).collect::<Vec<_>>());
    }

    #[test]
    fn test_clear() {
        let mut agg = FinishAggregator::new();
        agg.record(PlayerId::new(0));
        agg.clear();
        assert!(agg.order().is_empty());
        assert_eq!(agg.record(PlayerId::new(0)), Some(1));
    }
}
