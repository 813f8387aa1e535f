//! Entities: the player's basket and the objects falling toward it.

use crate::config::GameConfig;
use crate::types::{HeldInput, ObjectKind, Rect, Size, SpriteId};

/// The basket. Its `y` never changes during a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    pub size: Size,
    pub speed: i32,
}

impl Player {
    /// Basket centred horizontally, resting `player_bottom_margin` above the bottom edge.
    pub fn new(config: &GameConfig) -> Self {
        let size = config.sprites.basket;
        Self {
            x: config.screen_width / 2 - size.w / 2,
            y: config.screen_height - size.h - config.player_bottom_margin,
            size,
            speed: config.player_speed,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.size.w, self.size.h)
    }

    pub fn sprite(&self) -> SpriteId {
        SpriteId::Basket
    }

    /// Move by one frame of held input, keeping the box inside `[0, screen_width]`.
    pub fn step(&mut self, held: HeldInput, screen_width: i32) {
        let max_x = (screen_width - self.size.w).max(0);
        self.x = (self.x + held.direction() * self.speed).clamp(0, max_x);
    }
}

/// A fruit or bomb on its way down.
///
/// `speed` is sampled from the difficulty ramp when the object spawns and
/// stays fixed afterward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FallingObject {
    pub kind: ObjectKind,
    pub x: i32,
    pub y: i32,
    pub size: Size,
    pub speed: i32,
}

impl FallingObject {
    pub fn new(kind: ObjectKind, x: i32, y: i32, size: Size, speed: i32) -> Self {
        Self {
            kind,
            x,
            y,
            size,
            speed,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.size.w, self.size.h)
    }

    pub fn sprite(&self) -> SpriteId {
        self.kind.sprite()
    }

    pub fn advance(&mut self) {
        self.y += self.speed;
    }

    /// Past the bottom edge (top strictly below `screen_height`).
    pub fn is_off_screen(&self, screen_height: i32) -> bool {
        self.y > screen_height
    }
}
