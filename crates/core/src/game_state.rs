//! Game state module - the phase state machine
//!
//! Ties the session, the spawner's random source and the configuration
//! together, and decides which per-frame work runs in each phase.
//!
//! Timestamps are milliseconds from any monotonic origin. Remaining time and
//! fall speed are derived from the session's start timestamp only, so the
//! clock keeps running while paused: a long pause eats into the countdown and
//! the next Playing update may end the session immediately.

use crate::config::GameConfig;
use crate::rng::{RandomSource, SimpleRng};
use crate::session::{FrameEvents, GameSession};
use crate::snapshot::{EntitySnapshot, GameSnapshot};
use crate::types::{GameAction, HeldInput, Phase};

#[derive(Debug, Clone)]
pub struct GameState<R: RandomSource = SimpleRng> {
    config: GameConfig,
    phase: Phase,
    /// Present in Playing, Paused and GameOver.
    session: Option<GameSession>,
    rng: R,
    /// Incremented every time a session starts.
    session_id: u32,
    /// Timestamp at which the countdown ended (frozen values for the game-over screen).
    ended_at_ms: Option<u64>,
    quit: bool,
}

impl GameState<SimpleRng> {
    /// Create a state machine in the menu with a seeded default RNG
    pub fn new(config: GameConfig, seed: u32) -> Self {
        Self::with_rng(config, SimpleRng::new(seed))
    }
}

impl<R: RandomSource> GameState<R> {
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        Self {
            config,
            phase: Phase::Menu,
            session: None,
            rng,
            session_id: 0,
            ended_at_ms: None,
            quit: false,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    pub fn session_id(&self) -> u32 {
        self.session_id
    }

    /// True once a quit action was applied. The loop must stop.
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn score(&self) -> u32 {
        self.session.as_ref().map_or(0, GameSession::score)
    }

    fn clamp_now(&self, now_ms: u64) -> u64 {
        match self.ended_at_ms {
            Some(end) => now_ms.min(end),
            None => now_ms,
        }
    }

    pub fn remaining_secs(&self, now_ms: u64) -> u32 {
        let now_ms = self.clamp_now(now_ms);
        self.session
            .as_ref()
            .map_or(0, |s| s.remaining_secs(&self.config, now_ms))
    }

    pub fn current_speed(&self, now_ms: u64) -> i32 {
        let now_ms = self.clamp_now(now_ms);
        self.session
            .as_ref()
            .map_or(self.config.base_fall_speed, |s| {
                s.current_speed(&self.config, now_ms)
            })
    }

    #[doc(hidden)]
    pub fn session_mut(&mut self) -> Option<&mut GameSession> {
        self.session.as_mut()
    }

    /// Apply a discrete input. Returns `true` if it changed anything.
    ///
    /// Inputs with no transition defined for the current phase are ignored.
    pub fn apply_action(&mut self, action: GameAction, now_ms: u64) -> bool {
        match (action, self.phase) {
            (GameAction::Quit, _) => {
                self.quit = true;
                true
            }
            (GameAction::Confirm, Phase::Menu) => {
                self.session = Some(GameSession::new(&self.config, now_ms));
                self.session_id = self.session_id.wrapping_add(1);
                self.ended_at_ms = None;
                self.phase = Phase::Playing;
                true
            }
            (GameAction::Confirm, Phase::GameOver) => {
                self.session = None;
                self.ended_at_ms = None;
                self.phase = Phase::Menu;
                true
            }
            (GameAction::Pause, Phase::Playing) => {
                self.phase = Phase::Paused;
                true
            }
            (GameAction::Pause, Phase::Paused) => {
                self.phase = Phase::Playing;
                true
            }
            _ => false,
        }
    }

    /// Per-frame logic. Only the Playing phase does any work.
    ///
    /// The countdown is checked first; when it has run out the phase moves to
    /// GameOver and nothing else happens this frame.
    pub fn update(&mut self, held: HeldInput, now_ms: u64) -> FrameEvents {
        if self.quit || self.phase != Phase::Playing {
            return FrameEvents::default();
        }
        let Some(session) = self.session.as_mut() else {
            return FrameEvents::default();
        };

        if session.is_expired(&self.config, now_ms) {
            self.phase = Phase::GameOver;
            self.ended_at_ms = Some(now_ms);
            return FrameEvents {
                game_over: true,
                ..FrameEvents::default()
            };
        }

        session.step(&self.config, held, &mut self.rng, now_ms)
    }

    pub fn snapshot_into(&self, now_ms: u64, out: &mut GameSnapshot) {
        out.clear();
        out.phase = self.phase;
        out.session_id = self.session_id;
        out.screen_width = self.config.screen_width;
        out.screen_height = self.config.screen_height;
        out.fall_speed = self.current_speed(now_ms);

        let Some(session) = self.session.as_ref() else {
            return;
        };

        let now_ms = self.clamp_now(now_ms);
        out.player = Some(EntitySnapshot::from(session.player()));
        out.objects
            .extend(session.objects().iter().map(EntitySnapshot::from));
        out.score = session.score();
        out.remaining_secs = session.remaining_secs(&self.config, now_ms);
        out.elapsed_ms = session.elapsed_ms(now_ms);
    }

    pub fn snapshot(&self, now_ms: u64) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(now_ms, &mut s);
        s
    }
}

impl Default for GameState<SimpleRng> {
    fn default() -> Self {
        Self::new(GameConfig::default(), 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> GameState {
        GameState::new(GameConfig::default(), 1)
    }

    fn state_in(phase: Phase) -> GameState {
        let mut gs = fresh();
        match phase {
            Phase::Menu => {}
            Phase::Playing => {
                gs.apply_action(GameAction::Confirm, 0);
            }
            Phase::Paused => {
                gs.apply_action(GameAction::Confirm, 0);
                gs.apply_action(GameAction::Pause, 0);
            }
            Phase::GameOver => {
                gs.apply_action(GameAction::Confirm, 0);
                gs.update(HeldInput::NONE, 60_000);
            }
        }
        assert_eq!(gs.phase(), phase);
        gs
    }

    #[test]
    fn test_new_state_is_menu() {
        let gs = fresh();
        assert_eq!(gs.phase(), Phase::Menu);
        assert!(gs.session().is_none());
        assert!(!gs.should_quit());
        assert_eq!(gs.session_id(), 0);
        assert_eq!(gs.score(), 0);
    }

    #[test]
    fn test_transition_table() {
        use GameAction::*;
        use Phase::*;

        let expected = [
            (Menu, Confirm, Playing),
            (Menu, Pause, Menu),
            (Playing, Confirm, Playing),
            (Playing, Pause, Paused),
            (Paused, Confirm, Paused),
            (Paused, Pause, Playing),
            (GameOver, Confirm, Menu),
            (GameOver, Pause, GameOver),
        ];
        for (from, action, to) in expected {
            let mut gs = state_in(from);
            let changed = gs.apply_action(action, 0);
            assert_eq!(gs.phase(), to, "{:?} + {:?}", from, action);
            assert_eq!(changed, from != to, "{:?} + {:?}", from, action);
        }
    }

    #[test]
    fn test_quit_from_every_phase() {
        for phase in [Phase::Menu, Phase::Playing, Phase::Paused, Phase::GameOver] {
            let mut gs = state_in(phase);
            assert!(gs.apply_action(GameAction::Quit, 0));
            assert!(gs.should_quit());
            assert_eq!(gs.phase(), phase);
        }
    }

    #[test]
    fn test_no_updates_after_quit() {
        let mut gs = state_in(Phase::Playing);
        gs.apply_action(GameAction::Quit, 0);
        assert!(gs.update(HeldInput::NONE, 16).is_empty());
        assert_eq!(gs.session().unwrap().stats().frames, 0);
    }

    #[test]
    fn test_start_creates_fresh_session() {
        let mut gs = fresh();
        gs.apply_action(GameAction::Confirm, 5_000);
        let s = gs.session().unwrap();
        assert_eq!(s.score(), 0);
        assert!(s.objects().is_empty());
        assert_eq!(s.clock().start_ms(), 5_000);
        assert_eq!(gs.session_id(), 1);
        assert_eq!(gs.remaining_secs(5_000), 60);
    }

    #[test]
    fn test_paused_does_not_update() {
        let mut gs = state_in(Phase::Paused);
        for f in 0..100u64 {
            assert!(gs.update(HeldInput::NONE, f * 16).is_empty());
        }
        assert_eq!(gs.session().unwrap().stats().frames, 0);
    }

    #[test]
    fn test_clock_keeps_running_while_paused() {
        let mut gs = state_in(Phase::Paused);
        assert_eq!(gs.remaining_secs(30_000), 30);
        gs.apply_action(GameAction::Pause, 61_000);
        let events = gs.update(HeldInput::NONE, 61_000);
        assert!(events.game_over);
        assert_eq!(gs.phase(), Phase::GameOver);
    }

    #[test]
    fn test_game_over_checked_before_frame_work() {
        let mut gs = state_in(Phase::Playing);
        let frames_before = gs.session().unwrap().stats().frames;
        gs.update(HeldInput::NONE, 60_000);
        assert_eq!(gs.phase(), Phase::GameOver);
        assert_eq!(gs.session().unwrap().stats().frames, frames_before);
    }

    #[test]
    fn test_game_over_freezes_hud_values() {
        let mut gs = state_in(Phase::Playing);
        gs.update(HeldInput::NONE, 65_000);
        let snap = gs.snapshot(90_000);
        assert_eq!(snap.phase, Phase::GameOver);
        assert_eq!(snap.remaining_secs, 0);
        assert_eq!(snap.fall_speed, 3 + 6);
        assert_eq!(snap.elapsed_ms, 65_000);
    }

    #[test]
    fn test_return_to_menu_discards_session() {
        let mut gs = state_in(Phase::GameOver);
        gs.apply_action(GameAction::Confirm, 70_000);
        assert!(gs.session().is_none());
        let snap = gs.snapshot(70_000);
        assert!(snap.player.is_none());
        assert_eq!(snap.score, 0);

        gs.apply_action(GameAction::Confirm, 80_000);
        assert_eq!(gs.session_id(), 2);
        assert_eq!(gs.remaining_secs(80_000), 60);
    }

    #[test]
    fn test_snapshot_reflects_session() {
        let mut gs = state_in(Phase::Playing);
        let snap = gs.snapshot(12_500);
        assert_eq!(snap.phase, Phase::Playing);
        assert!(snap.playable());
        assert_eq!(snap.remaining_secs, 48);
        assert_eq!(snap.fall_speed, 4);
        assert_eq!(snap.player.unwrap().rect.y, 536);

        gs.apply_action(GameAction::Pause, 12_500);
        assert!(!gs.snapshot(12_500).playable());
    }

    #[test]
    fn test_menu_ignores_update() {
        let mut gs = fresh();
        assert!(gs.update(HeldInput::NONE, 100).is_empty());
        assert!(!gs.apply_action(GameAction::Pause, 100));
        assert_eq!(gs.phase(), Phase::Menu);
    }
}
