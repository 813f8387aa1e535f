//! Collision scoring rule.
//!
//! Pure functions: given the current score and what hit the basket, produce
//! the new score and the sound cue to play.

use crate::config::GameConfig;
use crate::types::{AudioCue, ObjectKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionOutcome {
    pub score: u32,
    pub cue: AudioCue,
}

/// Signed score change for catching `kind`, before clamping.
pub fn score_delta(kind: ObjectKind, config: &GameConfig) -> i64 {
    match kind {
        ObjectKind::Fruit(_) => i64::from(config.fruit_points),
        ObjectKind::Bomb => -i64::from(config.bomb_penalty),
    }
}

/// Apply a basket collision. Bombs never push the score below zero.
pub fn apply_collision(score: u32, kind: ObjectKind, config: &GameConfig) -> CollisionOutcome {
    match kind {
        ObjectKind::Fruit(_) => CollisionOutcome {
            score: score.saturating_add(config.fruit_points),
            cue: AudioCue::Catch,
        },
        ObjectKind::Bomb => CollisionOutcome {
            score: score.saturating_sub(config.bomb_penalty),
            cue: AudioCue::Explosion,
        },
    }
}
