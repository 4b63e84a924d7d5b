//! The turn and roll state machine.
//!
//! The manager owns all shared mutable state (roster, active index, finish
//! order) and composes the stateless services: path planning, the obstacle
//! table, the quiz gate, the finish aggregator. Everything else returns
//! effect descriptions for the manager to apply, in a fixed order:
//!
//! position -> obstacle-check -> quiz -> reposition -> score-update ->
//! finish-check -> turn-advance.
//!
//! ## Driving
//!
//! Work is driven by discrete external entry points, processed one at a
//! time: a roll request, a step or reposition completion, a quiz answer.
//! `roll_in_flight` is the only concurrency primitive: a roll request while
//! one is resolving is a silent no-op, and once begun a roll always runs to
//! completion. Completion signals that arrive in the wrong phase are logged
//! and ignored.
//!
//! ## Turn rotation
//!
//! Rolling the die maximum grants the same player another turn (unless the
//! move finished them). Otherwise the turn passes to the next non-finished
//! player, wrapping around the roster.

use serde::{Deserialize, Serialize};

use crate::board::{assign_slots, Obstacle, ObstacleTable};
use crate::core::{DiceRng, MatchConfig, Player, PlayerId, Square};
use crate::finish::{FinishAggregator, FinishNotifier};
use crate::movement::{plan, DriveStatus, MoveDrive, Presenter};
use crate::quiz::QuizGate;

/// Where the manager is in the current turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for a roll request.
    Idle,
    /// A token is stepping; awaiting `step_complete`.
    Moving,
    /// A question is showing; awaiting `quiz_answered`.
    AwaitingQuiz,
    /// An obstacle reposition is animating; awaiting `reposition_complete`.
    Repositioning,
}

enum TurnState {
    Idle,
    Moving { drive: MoveDrive },
    AwaitingQuiz { obstacle: Obstacle },
    Repositioning { target: Square, points: u32 },
}

/// Serializable summary of the match for display layers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub players: Vec<Player>,
    pub active: Option<PlayerId>,
    pub next: Option<PlayerId>,
    pub roll_in_flight: bool,
    pub finish_order: Vec<PlayerId>,
}

/// The turn and roll manager.
///
/// Constructed with explicit configuration and the three injected
/// capabilities; it has no framework dependency of its own.
pub struct TurnManager {
    config: MatchConfig,
    roster: Vec<Player>,
    active: usize,
    roll_in_flight: bool,
    last_roll: Option<u8>,
    state: TurnState,
    obstacles: ObstacleTable,
    dice: DiceRng,
    finish: FinishAggregator,
    presenter: Box<dyn Presenter>,
    quiz_gate: Box<dyn QuizGate>,
    notifier: Box<dyn FinishNotifier>,
}

impl TurnManager {
    /// Create a manager over an empty roster.
    #[must_use]
    pub fn new(
        config: MatchConfig,
        obstacles: ObstacleTable,
        presenter: Box<dyn Presenter>,
        quiz_gate: Box<dyn QuizGate>,
        notifier: Box<dyn FinishNotifier>,
    ) -> Self {
        let dice = match config.seed {
            Some(seed) => DiceRng::new(seed),
            None => DiceRng::from_entropy(),
        };

        Self {
            config,
            roster: Vec::new(),
            active: 0,
            roll_in_flight: false,
            last_roll: None,
            state: TurnState::Idle,
            obstacles,
            dice,
            finish: FinishAggregator::new(),
            presenter,
            quiz_gate,
            notifier,
        }
    }

    /// Add a player at the starting square. Ids are roster indices and stay
    /// stable for the session.
    pub fn add_player(&mut self, name: impl Into<String>) -> PlayerId {
        let id = PlayerId::new(self.roster.len() as u8);
        self.roster.push(Player::new(id, name));
        self.restack();
        id
    }

    /// The full roster, in join order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.roster
    }

    /// A player by id.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.roster.get(id.index())
    }

    /// The player whose turn it is, or `None` if the roster is empty or
    /// everyone has finished.
    #[must_use]
    pub fn active_player(&self) -> Option<&Player> {
        self.roster.get(self.active).filter(|p| !p.finished())
    }

    /// The player who would take the turn next (display hint).
    #[must_use]
    pub fn next_player(&self) -> Option<&Player> {
        let len = self.roster.len();
        if len == 0 {
            return None;
        }
        (1..=len)
            .map(|offset| (self.active + offset) % len)
            .find(|&idx| !self.roster[idx].finished())
            .map(|idx| &self.roster[idx])
    }

    /// Current phase of the turn state machine.
    #[must_use]
    pub fn phase(&self) -> Phase {
        match self.state {
            TurnState::Idle => Phase::Idle,
            TurnState::Moving { .. } => Phase::Moving,
            TurnState::AwaitingQuiz { .. } => Phase::AwaitingQuiz,
            TurnState::Repositioning { .. } => Phase::Repositioning,
        }
    }

    /// Is a roll currently resolving?
    #[must_use]
    pub fn roll_in_flight(&self) -> bool {
        self.roll_in_flight
    }

    /// The most recent die value.
    #[must_use]
    pub fn last_roll(&self) -> Option<u8> {
        self.last_roll
    }

    /// The finish order so far.
    #[must_use]
    pub fn finish_order(&self) -> &[PlayerId] {
        self.finish.order()
    }

    /// The obstacle table in play.
    #[must_use]
    pub fn obstacles(&self) -> &ObstacleTable {
        &self.obstacles
    }

    /// The configuration in play.
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Roll the die for the active player and drive the move.
    ///
    /// No-op while a roll is in flight or when no active player exists.
    pub fn roll_for_active_player(&mut self) {
        if self.roll_in_flight || self.active_player().is_none() {
            log::debug!("roll request ignored");
            return;
        }
        let value = self.dice.roll(self.config.die_sides);
        self.apply_roll(value);
    }

    /// Drive a turn with a predetermined die value (replays, external
    /// dice). Same guards as [`TurnManager::roll_for_active_player`].
    pub fn apply_roll(&mut self, value: u8) {
        if self.roll_in_flight {
            log::debug!("roll of {} ignored, one already in flight", value);
            return;
        }
        let Some(player) = self.active_player() else {
            log::debug!("roll of {} ignored, no active player", value);
            return;
        };
        if value == 0 || value > self.config.die_sides {
            log::error!("rejecting die value {} for a d{}", value, self.config.die_sides);
            return;
        }

        let id = player.id();
        let from = player.position();
        self.roll_in_flight = true;
        self.last_roll = Some(value);
        self.presenter
            .show_roll(id, value, value == self.config.die_sides);

        let mut drive = MoveDrive::new(id, plan(from, value));
        match drive.begin(self.presenter.as_mut()) {
            DriveStatus::InFlight => self.state = TurnState::Moving { drive },
            DriveStatus::Arrived(landing) => self.arrived(landing),
        }
    }

    /// A movement step's animation finished.
    pub fn step_complete(&mut self) {
        let status = match &mut self.state {
            TurnState::Moving { drive } => {
                let idx = self.active;
                drive.step_complete(&mut self.roster[idx], self.presenter.as_mut())
            }
            _ => {
                log::warn!("step completion outside of movement");
                return;
            }
        };

        if let DriveStatus::Arrived(landing) = status {
            self.arrived(landing);
        }
    }

    /// The quiz gate reported an answer. `points` are the question's own,
    /// awarded in addition to the obstacle effect's.
    pub fn quiz_answered(&mut self, correct: bool, points: u32) {
        let obstacle = match self.state {
            TurnState::AwaitingQuiz { obstacle } => obstacle,
            _ => {
                log::warn!("quiz answer with no question outstanding");
                return;
            }
        };

        let effect = obstacle.resolve(correct);
        let id = self.roster[self.active].id();
        let current = self.roster[self.active].position();
        let combined = effect.points_awarded + points;

        match effect.new_position {
            Some(target) if target != current => {
                // Scores apply only once the reposition lands.
                self.presenter.move_direct(id, target);
                self.state = TurnState::Repositioning { target, points: combined };
            }
            _ => {
                self.roster[self.active].award(combined);
                self.state = TurnState::Idle;
                self.end_turn();
            }
        }
    }

    /// An obstacle reposition's animation finished.
    pub fn reposition_complete(&mut self) {
        let (target, points) = match self.state {
            TurnState::Repositioning { target, points } => (target, points),
            _ => {
                log::warn!("reposition completion outside of repositioning");
                return;
            }
        };

        self.roster[self.active].set_position(target);
        self.state = TurnState::Idle;
        self.restack();
        self.roster[self.active].award(points);
        if target.is_last() {
            self.finish_active();
        }
        self.end_turn();
    }

    /// Full game reset: everyone back to square 1, scores and finish order
    /// cleared, first player active.
    pub fn reset(&mut self) {
        self.active = 0;
        self.roll_in_flight = false;
        self.last_roll = None;
        self.state = TurnState::Idle;
        self.finish.clear();
        for player in &mut self.roster {
            player.reset();
        }
        self.restack();
    }

    /// Serializable summary for display layers.
    #[must_use]
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            players: self.roster.clone(),
            active: self.active_player().map(Player::id),
            next: self.next_player().map(Player::id),
            roll_in_flight: self.roll_in_flight,
            finish_order: self.finish.order().to_vec(),
        }
    }

    fn arrived(&mut self, landing: Square) {
        self.state = TurnState::Idle;
        self.restack();

        if landing.is_last() {
            // The winning square is never obstacle-checked.
            self.finish_active();
            self.end_turn();
            return;
        }

        match self.obstacles.lookup(landing) {
            Some(&obstacle) => {
                self.quiz_gate.present(obstacle.quiz_kind());
                self.state = TurnState::AwaitingQuiz { obstacle };
            }
            None => self.end_turn(),
        }
    }

    fn finish_active(&mut self) {
        let idx = self.active;
        let id = self.roster[idx].id();
        let Some(rank) = self.finish.record(id) else {
            return;
        };

        self.roster[idx].award(self.config.finish_bonus);
        self.roster[idx].mark_finished();

        if self.finish.is_complete(self.roster.len()) {
            let ranking = self.finish.score_ranking(&self.roster);
            self.notifier.game_finished(self.finish.order(), &ranking);
        } else {
            self.notifier.player_finished(&self.roster[idx], rank);
        }
    }

    fn end_turn(&mut self) {
        self.roll_in_flight = false;

        let retains = self.last_roll == Some(self.config.die_sides)
            && !self.roster[self.active].finished();
        if !retains {
            self.advance_turn();
        }
    }

    fn advance_turn(&mut self) {
        let len = self.roster.len();
        for offset in 1..=len {
            let idx = (self.active + offset) % len;
            if !self.roster[idx].finished() {
                self.active = idx;
                return;
            }
        }
        // Everyone has finished; further rolls are no-ops.
    }

    fn restack(&mut self) {
        let slots = assign_slots(&self.roster);
        self.presenter.restack(&slots);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{SlotAssignment, SlotPosition};
    use crate::quiz::QuizKind;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn sq(v: u8) -> Square {
        Square::new(v).unwrap()
    }

    #[derive(Clone, Debug, PartialEq, Eq)]
    enum Event {
        Step { player: PlayerId, from: u8, to: u8 },
        Direct { player: PlayerId, to: u8 },
        Roll { player: PlayerId, value: u8, extra_turn: bool },
        Restack(Vec<(PlayerId, u8, SlotPosition)>),
        Quiz(QuizKind),
        PlayerFinished { player: PlayerId, rank: usize },
        GameFinished { order: Vec<PlayerId>, ranking: Vec<PlayerId> },
    }

    #[derive(Clone, Default)]
    struct Harness {
        events: Rc<RefCell<Vec<Event>>>,
    }

    impl Harness {
        fn take(&self) -> Vec<Event> {
            self.events.borrow_mut().drain(..).collect()
        }

        fn quizzes(&self) -> Vec<QuizKind> {
            self.events
                .borrow()
                .iter()
                .filter_map(|e| match e {
                    Event::Quiz(kind) => Some(*kind),
                    _ => None,
                })
                .collect()
        }

        fn finished_events(&self) -> Vec<Event> {
            self.events
                .borrow()
                .iter()
                .filter(|e| {
                    matches!(e, Event::PlayerFinished { .. } | Event::GameFinished { .. })
                })
                .cloned()
                .collect()
        }
    }

    impl Presenter for Harness {
        fn move_step(&mut self, player: PlayerId, from: Square, to: Square) {
            self.events.borrow_mut().push(Event::Step {
                player,
                from: from.get(),
                to: to.get(),
            });
        }
        fn move_direct(&mut self, player: PlayerId, to: Square) {
            self.events.borrow_mut().push(Event::Direct { player, to: to.get() });
        }
        fn show_roll(&mut self, player: PlayerId, value: u8, extra_turn: bool) {
            self.events.borrow_mut().push(Event::Roll { player, value, extra_turn });
        }
        fn restack(&mut self, slots: &[SlotAssignment]) {
            self.events.borrow_mut().push(Event::Restack(
                slots
                    .iter()
                    .map(|s| (s.player, s.square.get(), s.position))
                    .collect(),
            ));
        }
    }

    impl QuizGate for Harness {
        fn present(&mut self, kind: QuizKind) {
            self.events.borrow_mut().push(Event::Quiz(kind));
        }
    }

    impl FinishNotifier for Harness {
        fn player_finished(&mut self, player: &Player, rank: usize) {
            self.events.borrow_mut().push(Event::PlayerFinished {
                player: player.id(),
                rank,
            });
        }
        fn game_finished(&mut self, finish_order: &[PlayerId], score_ranking: &[PlayerId]) {
            self.events.borrow_mut().push(Event::GameFinished {
                order: finish_order.to_vec(),
                ranking: score_ranking.to_vec(),
            });
        }
    }

    fn manager_with(players: &[&str]) -> (TurnManager, Harness) {
        let harness = Harness::default();
        let mut mgr = TurnManager::new(
            MatchConfig::new().with_seed(42),
            ObstacleTable::standard(),
            Box::new(harness.clone()),
            Box::new(harness.clone()),
            Box::new(harness.clone()),
        );
        for name in players {
            mgr.add_player(*name);
        }
        (mgr, harness)
    }

    /// Ack movement steps until the manager leaves the Moving phase.
    fn pump(mgr: &mut TurnManager) {
        let mut guard = 0;
        while mgr.phase() == Phase::Moving {
            mgr.step_complete();
            guard += 1;
            assert!(guard < 32, "movement did not settle");
        }
    }

    fn place(mgr: &mut TurnManager, id: PlayerId, square: u8) {
        mgr.roster[id.index()].set_position(sq(square));
    }

    #[test]
    fn test_plain_roll_moves_and_advances() {
        let (mut mgr, harness) = manager_with(&["A", "B"]);

        mgr.apply_roll(4);
        pump(&mut mgr);

        let a = &mgr.players()[0];
        assert_eq!(a.position(), sq(5));
        assert_eq!(a.score(), 0);
        assert!(!mgr.roll_in_flight());
        assert_eq!(mgr.active_player().unwrap().id(), PlayerId::new(1));

        let events = harness.take();
        assert!(events.contains(&Event::Roll {
            player: PlayerId::new(0),
            value: 4,
            extra_turn: false
        }));
    }

    #[test]
    fn test_steps_issued_one_square_at_a_time() {
        let (mut mgr, harness) = manager_with(&["A"]);
        harness.take();

        mgr.apply_roll(3);
        pump(&mut mgr);

        let steps: Vec<Event> = harness
            .take()
            .into_iter()
            .filter(|e| matches!(e, Event::Step { .. }))
            .collect();
        assert_eq!(
            steps,
            vec![
                Event::Step { player: PlayerId::new(0), from: 1, to: 2 },
                Event::Step { player: PlayerId::new(0), from: 2, to: 3 },
                Event::Step { player: PlayerId::new(0), from: 3, to: 4 },
            ]
        );
    }

    #[test]
    fn test_max_roll_retains_turn() {
        let (mut mgr, harness) = manager_with(&["A", "B"]);

        mgr.apply_roll(6);
        pump(&mut mgr);

        assert_eq!(mgr.active_player().unwrap().id(), PlayerId::new(0));
        assert!(harness.take().contains(&Event::Roll {
            player: PlayerId::new(0),
            value: 6,
            extra_turn: true
        }));
    }

    #[test]
    fn test_reentrant_roll_is_ignored() {
        let (mut mgr, _harness) = manager_with(&["A", "B"]);

        mgr.apply_roll(4);
        let before = mgr.snapshot();

        // Mid-movement: a second roll must have no observable effect.
        mgr.apply_roll(3);
        assert_eq!(mgr.snapshot(), before);

        pump(&mut mgr);
        assert_eq!(mgr.players()[0].position(), sq(5));
    }

    #[test]
    fn test_roll_with_empty_roster_is_ignored() {
        let (mut mgr, harness) = manager_with(&[]);
        mgr.roll_for_active_player();
        assert!(harness.take().is_empty());
        assert!(!mgr.roll_in_flight());
    }

    #[test]
    fn test_out_of_range_die_rejected() {
        let (mut mgr, _harness) = manager_with(&["A"]);
        mgr.apply_roll(7);
        mgr.apply_roll(0);
        assert!(!mgr.roll_in_flight());
        assert_eq!(mgr.players()[0].position(), sq(1));
    }

    #[test]
    fn test_shortcut_correct_climbs_and_scores() {
        let (mut mgr, harness) = manager_with(&["A", "B"]);
        place(&mut mgr, PlayerId::new(0), 4);

        mgr.apply_roll(4); // lands on 8, the 8 -> 27 shortcut
        pump(&mut mgr);

        assert_eq!(mgr.phase(), Phase::AwaitingQuiz);
        assert_eq!(harness.quizzes(), vec![QuizKind::Shortcut]);
        assert!(mgr.roll_in_flight());

        mgr.quiz_answered(true, 10);
        assert_eq!(mgr.phase(), Phase::Repositioning);
        // Scores apply only after the reposition lands.
        assert_eq!(mgr.players()[0].score(), 0);

        mgr.reposition_complete();
        assert_eq!(mgr.players()[0].position(), sq(27));
        // 10 question points + 20 + (27 - 8) effect points.
        assert_eq!(mgr.players()[0].score(), 10 + 39);
        assert_eq!(mgr.active_player().unwrap().id(), PlayerId::new(1));
        assert!(harness.take().contains(&Event::Direct {
            player: PlayerId::new(0),
            to: 27
        }));
    }

    #[test]
    fn test_shortcut_wrong_stays_at_entry() {
        let (mut mgr, _harness) = manager_with(&["A", "B"]);
        place(&mut mgr, PlayerId::new(0), 4);

        mgr.apply_roll(4);
        pump(&mut mgr);
        mgr.quiz_answered(false, 0);

        assert_eq!(mgr.phase(), Phase::Idle);
        assert_eq!(mgr.players()[0].position(), sq(8));
        assert_eq!(mgr.players()[0].score(), 0);
        assert_eq!(mgr.active_player().unwrap().id(), PlayerId::new(1));
    }

    #[test]
    fn test_setback_correct_avoids_the_fall() {
        let (mut mgr, _harness) = manager_with(&["A", "B"]);
        place(&mut mgr, PlayerId::new(0), 55);

        mgr.apply_roll(5); // lands on 60, the 60 -> 38 setback
        pump(&mut mgr);
        mgr.quiz_answered(true, 15);

        // Stay at the head: no reposition phase.
        assert_eq!(mgr.phase(), Phase::Idle);
        assert_eq!(mgr.players()[0].position(), sq(60));
        // 15 question points + 15 + 2 * (60 - 38) effect points.
        assert_eq!(mgr.players()[0].score(), 15 + 15 + 44);
    }

    #[test]
    fn test_setback_wrong_falls_to_exit() {
        let (mut mgr, harness) = manager_with(&["A", "B"]);
        place(&mut mgr, PlayerId::new(0), 55);

        mgr.apply_roll(5);
        pump(&mut mgr);
        mgr.quiz_answered(false, 0);

        assert_eq!(mgr.phase(), Phase::Repositioning);
        mgr.reposition_complete();

        assert_eq!(mgr.players()[0].position(), sq(38));
        assert_eq!(mgr.players()[0].score(), 0);
        assert!(harness.take().contains(&Event::Direct {
            player: PlayerId::new(0),
            to: 38
        }));
    }

    #[test]
    fn test_gate_never_repositions() {
        let (mut mgr, harness) = manager_with(&["A", "B"]);
        place(&mut mgr, PlayerId::new(0), 20);

        mgr.apply_roll(4); // lands on 24, a gate
        pump(&mut mgr);

        assert_eq!(harness.quizzes(), vec![QuizKind::Gate]);
        mgr.quiz_answered(true, 0);

        assert_eq!(mgr.players()[0].position(), sq(24));
        assert_eq!(mgr.players()[0].score(), 25);
        assert_eq!(mgr.phase(), Phase::Idle);
    }

    #[test]
    fn test_overshoot_bounces_and_is_not_a_win() {
        let (mut mgr, _harness) = manager_with(&["A", "B"]);
        place(&mut mgr, PlayerId::new(0), 96);

        mgr.apply_roll(6); // 102: bounce to 98
        pump(&mut mgr);

        let a = &mgr.players()[0];
        assert_eq!(a.position(), sq(98));
        assert!(!a.finished());
        // Rolled the maximum, so the turn stays.
        assert_eq!(mgr.active_player().unwrap().id(), PlayerId::new(0));
    }

    #[test]
    fn test_exact_landing_finishes_with_bonus() {
        let (mut mgr, harness) = manager_with(&["A", "B"]);
        place(&mut mgr, PlayerId::new(0), 96);

        mgr.apply_roll(4);
        pump(&mut mgr);

        let a = &mgr.players()[0];
        assert!(a.finished());
        assert_eq!(a.position(), Square::LAST);
        assert_eq!(a.score(), 100);
        assert_eq!(mgr.finish_order(), &[PlayerId::new(0)]);
        assert_eq!(
            harness.finished_events(),
            vec![Event::PlayerFinished { player: PlayerId::new(0), rank: 1 }]
        );
        // A finished, so B takes over.
        assert_eq!(mgr.active_player().unwrap().id(), PlayerId::new(1));
    }

    #[test]
    fn test_finish_on_max_roll_does_not_retain_turn() {
        let (mut mgr, _harness) = manager_with(&["A", "B"]);
        place(&mut mgr, PlayerId::new(0), 94);

        mgr.apply_roll(6); // exact landing on 100
        pump(&mut mgr);

        assert!(mgr.players()[0].finished());
        assert_eq!(mgr.active_player().unwrap().id(), PlayerId::new(1));
    }

    #[test]
    fn test_finished_players_are_skipped_in_rotation() {
        let (mut mgr, _harness) = manager_with(&["A", "B", "C"]);
        place(&mut mgr, PlayerId::new(1), 96);

        // A passes to B.
        mgr.apply_roll(2);
        pump(&mut mgr);
        // B finishes; the turn should skip to C.
        mgr.apply_roll(4);
        pump(&mut mgr);
        assert_eq!(mgr.active_player().unwrap().id(), PlayerId::new(2));

        // C passes; B is finished, so A is next.
        mgr.apply_roll(2);
        pump(&mut mgr);
        assert_eq!(mgr.active_player().unwrap().id(), PlayerId::new(0));
    }

    #[test]
    fn test_game_finished_reports_order_and_ranking() {
        let (mut mgr, harness) = manager_with(&["A", "B"]);
        place(&mut mgr, PlayerId::new(0), 96);
        place(&mut mgr, PlayerId::new(1), 96);

        mgr.apply_roll(4); // A finishes, rank 1
        pump(&mut mgr);
        mgr.apply_roll(4); // B finishes, game over
        pump(&mut mgr);

        assert!(mgr.active_player().is_none());
        let events = harness.finished_events();
        assert_eq!(events.len(), 2);
        assert_eq!(
            events[1],
            Event::GameFinished {
                order: vec![PlayerId::new(0), PlayerId::new(1)],
                // Equal scores: finish order breaks the tie.
                ranking: vec![PlayerId::new(0), PlayerId::new(1)],
            }
        );

        // No more rolls resolve.
        mgr.apply_roll(3);
        assert!(!mgr.roll_in_flight());
    }

    #[test]
    fn test_wrong_phase_callbacks_are_no_ops() {
        let (mut mgr, _harness) = manager_with(&["A", "B"]);

        mgr.step_complete();
        mgr.reposition_complete();
        mgr.quiz_answered(true, 50);
        assert_eq!(mgr.players()[0].score(), 0);
        assert_eq!(mgr.phase(), Phase::Idle);

        mgr.apply_roll(4);
        let before = mgr.snapshot();
        mgr.quiz_answered(true, 50);
        mgr.reposition_complete();
        assert_eq!(mgr.snapshot(), before);
    }

    #[test]
    fn test_restack_after_each_completed_movement() {
        let (mut mgr, harness) = manager_with(&["A", "B"]);
        harness.take();

        mgr.apply_roll(4);
        pump(&mut mgr);

        let restacks: Vec<Event> = harness
            .take()
            .into_iter()
            .filter(|e| matches!(e, Event::Restack(_)))
            .collect();
        assert_eq!(restacks.len(), 1);
        assert_eq!(
            restacks[0],
            Event::Restack(vec![
                (PlayerId::new(0), 5, SlotPosition::Center),
                (PlayerId::new(1), 1, SlotPosition::Center),
            ])
        );
    }

    #[test]
    fn test_reset_restores_everything() {
        let (mut mgr, _harness) = manager_with(&["A", "B"]);
        place(&mut mgr, PlayerId::new(0), 96);
        mgr.apply_roll(4);
        pump(&mut mgr);

        mgr.reset();

        for player in mgr.players() {
            assert_eq!(player.position(), Square::FIRST);
            assert_eq!(player.score(), 0);
            assert!(!player.finished());
        }
        assert!(mgr.finish_order().is_empty());
        assert_eq!(mgr.active_player().unwrap().id(), PlayerId::new(0));
        assert!(!mgr.roll_in_flight());
    }

    #[test]
    fn test_seeded_dice_are_reproducible() {
        let (mut mgr1, _h1) = manager_with(&["A", "B"]);
        let (mut mgr2, _h2) = manager_with(&["A", "B"]);

        for _ in 0..5 {
            mgr1.roll_for_active_player();
            pump(&mut mgr1);
            if mgr1.phase() == Phase::AwaitingQuiz {
                mgr1.quiz_answered(false, 0);
                if mgr1.phase() == Phase::Repositioning {
                    mgr1.reposition_complete();
                }
            }

            mgr2.roll_for_active_player();
            pump(&mut mgr2);
            if mgr2.phase() == Phase::AwaitingQuiz {
                mgr2.quiz_answered(false, 0);
                if mgr2.phase() == Phase::Repositioning {
                    mgr2.reposition_complete();
                }
            }
        }

        assert_eq!(mgr1.snapshot(), mgr2.snapshot());
    }

    #[test]
    fn test_snapshot_serialization() {
        let (mut mgr, _harness) = manager_with(&["A", "B"]);
        mgr.apply_roll(4);
        pump(&mut mgr);

        let snapshot = mgr.snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: MatchSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, back);
        assert_eq!(back.active, Some(PlayerId::new(1)));
    }
}
