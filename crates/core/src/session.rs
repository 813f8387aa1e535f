//! Game session - one play-through from entering Playing to GameOver.
//!
//! Owns the basket, the falling objects and the score, and runs the per-frame
//! pipeline: spawn, move, then resolve collisions.

use arrayvec::ArrayVec;
use serde::Serialize;

use crate::config::GameConfig;
use crate::entity::{FallingObject, Player};
use crate::rng::RandomSource;
use crate::scoring::apply_collision;
use crate::spawner::Spawner;
use crate::timer::{fall_speed, remaining_secs, SessionClock};
use crate::types::{AudioCue, HeldInput, ObjectKind};

/// What happened during one frame update.
///
/// Consumed by the presentation layer (sound cues) and the event log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameEvents {
    /// Each cue appears at most once per frame.
    pub cues: ArrayVec<AudioCue, 2>,
    pub spawned: Option<ObjectKind>,
    pub caught: u32,
    pub exploded: u32,
    pub missed: u32,
    /// Set on the frame the countdown ended the session.
    pub game_over: bool,
}

impl FrameEvents {
    fn push_cue(&mut self, cue: AudioCue) {
        if !self.cues.contains(&cue) {
            let _ = self.cues.try_push(cue);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
            && self.spawned.is_none()
            && self.caught == 0
            && self.exploded == 0
            && self.missed == 0
            && !self.game_over
    }
}

/// Running totals for a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    pub spawned: u32,
    pub fruits_spawned: u32,
    pub bombs_spawned: u32,
    pub caught: u32,
    pub exploded: u32,
    pub missed: u32,
    pub frames: u32,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    player: Player,
    objects: Vec<FallingObject>,
    score: u32,
    clock: SessionClock,
    stats: SessionStats,
}

impl GameSession {
    /// Fresh session: score 0, no objects, clock started at `now_ms`.
    pub fn new(config: &GameConfig, now_ms: u64) -> Self {
        Self {
            player: Player::new(config),
            objects: Vec::with_capacity(32),
            score: 0,
            clock: SessionClock::start(now_ms),
            stats: SessionStats::default(),
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn objects(&self) -> &[FallingObject] {
        &self.objects
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn clock(&self) -> SessionClock {
        self.clock
    }

    pub fn elapsed_ms(&self, now_ms: u64) -> u64 {
        self.clock.elapsed_ms(now_ms)
    }

    pub fn remaining_secs(&self, config: &GameConfig, now_ms: u64) -> u32 {
        remaining_secs(self.elapsed_ms(now_ms), config.game_time_secs)
    }

    pub fn current_speed(&self, config: &GameConfig, now_ms: u64) -> i32 {
        fall_speed(
            self.elapsed_ms(now_ms),
            config.base_fall_speed,
            config.speed_ramp_secs,
        )
    }

    pub fn is_expired(&self, config: &GameConfig, now_ms: u64) -> bool {
        self.remaining_secs(config, now_ms) == 0
    }

    #[doc(hidden)]
    pub fn insert_object(&mut self, obj: FallingObject) {
        self.objects.push(obj);
    }

    #[doc(hidden)]
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Advance one frame: spawn trial, basket movement, then each object
    /// falls and is either dropped (off screen) or checked against the basket.
    ///
    /// Removal is mark-and-compact: survivors are retained in place, so every
    /// object is visited exactly once per frame.
    pub fn step<R: RandomSource>(
        &mut self,
        config: &GameConfig,
        held: HeldInput,
        rng: &mut R,
        now_ms: u64,
    ) -> FrameEvents {
        let mut events = FrameEvents::default();
        self.stats.frames = self.stats.frames.wrapping_add(1);

        let speed = self.current_speed(config, now_ms);
        if let Some(obj) = Spawner::from_config(config).try_spawn(rng, speed) {
            events.spawned = Some(obj.kind);
            self.stats.spawned += 1;
            if obj.kind.is_bomb() {
                self.stats.bombs_spawned += 1;
            } else {
                self.stats.fruits_spawned += 1;
            }
            self.objects.push(obj);
        }

        self.player.step(held, config.screen_width);
        let basket = self.player.rect();

        let score = &mut self.score;
        self.objects.retain_mut(|obj| {
            obj.advance();

            if obj.is_off_screen(config.screen_height) {
                events.missed += 1;
                return false;
            }

            if !obj.rect().intersects(&basket) {
                return true;
            }

            let outcome = apply_collision(*score, obj.kind, config);
            *score = outcome.score;
            match obj.kind {
                ObjectKind::Fruit(_) => events.caught += 1,
                ObjectKind::Bomb => events.exploded += 1,
            }
            events.push_cue(outcome.cue);
            false
        });

        self.stats.caught += events.caught;
        self.stats.exploded += events.exploded;
        self.stats.missed += events.missed;
        events
    }
}
