use std::hash::{Hash, Hasher};

use serde::Serialize;

use crate::entity::{FallingObject, Player};
use crate::types::{Phase, Rect, SpriteId};

/// Box and artwork handle of one drawable entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct EntitySnapshot {
    pub rect: Rect,
    pub sprite: SpriteId,
}

impl From<&Player> for EntitySnapshot {
    fn from(value: &Player) -> Self {
        Self {
            rect: value.rect(),
            sprite: value.sprite(),
        }
    }
}

impl From<&FallingObject> for EntitySnapshot {
    fn from(value: &FallingObject) -> Self {
        Self {
            rect: value.rect(),
            sprite: value.sprite(),
        }
    }
}

/// Read-only view of one frame, handed to the presentation layer.
///
/// Outside a session (`Phase::Menu`) `player` is `None` and the numbers are zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GameSnapshot {
    pub phase: Phase,
    pub player: Option<EntitySnapshot>,
    pub objects: Vec<EntitySnapshot>,
    pub score: u32,
    pub remaining_secs: u32,
    pub fall_speed: i32,
    pub elapsed_ms: u64,
    /// Monotonic session counter (increments each time Playing is entered from Menu).
    pub session_id: u32,
    pub screen_width: i32,
    pub screen_height: i32,
}

impl GameSnapshot {
    /// Reset to the menu view, keeping the object buffer's allocation.
    pub fn clear(&mut self) {
        self.phase = Phase::Menu;
        self.player = None;
        self.objects.clear();
        self.score = 0;
        self.remaining_secs = 0;
        self.fall_speed = 0;
        self.elapsed_ms = 0;
        self.session_id = 0;
    }

    pub fn playable(&self) -> bool {
        self.phase == Phase::Playing
    }

    /// Stable 64-bit fingerprint of what would be drawn.
    ///
    /// `elapsed_ms` is left out so that static screens only change
    /// fingerprint when something visible changes.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1aHasher::new();
        self.phase.hash(&mut h);
        self.player.hash(&mut h);
        self.objects.hash(&mut h);
        self.score.hash(&mut h);
        self.remaining_secs.hash(&mut h);
        self.fall_speed.hash(&mut h);
        self.session_id.hash(&mut h);
        h.finish()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            phase: Phase::Menu,
            player: None,
            objects: Vec::new(),
            score: 0,
            remaining_secs: 0,
            fall_speed: 0,
            elapsed_ms: 0,
            session_id: 0,
            screen_width: crate::types::SCREEN_WIDTH,
            screen_height: crate::types::SCREEN_HEIGHT,
        }
    }
}

/// Stable 64-bit FNV-1a hasher.
///
/// We avoid `DefaultHasher` here since its output is not guaranteed stable across
/// Rust versions/platforms.
#[derive(Debug, Clone)]
struct Fnv1aHasher {
    state: u64,
}

impl Fnv1aHasher {
    const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;

    fn new() -> Self {
        Self {
            state: Self::OFFSET_BASIS,
        }
    }
}

impl Hasher for Fnv1aHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.state ^= b as u64;
            self.state = self.state.wrapping_mul(Self::PRIME);
        }
    }
}
