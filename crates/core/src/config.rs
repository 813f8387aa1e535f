//! Immutable game configuration.
//!
//! Every tunable the rules depend on lives here and is handed to the state
//! machine once, at construction.

use crate::types::{
    ObjectKind, Size, BASE_FALL_SPEED, BASKET_HEIGHT, BASKET_WIDTH, BOMB_CHANCE, BOMB_PENALTY,
    FRUIT_POINTS, GAME_TIME_SECS, OBJECT_SIZE, PLAYER_BOTTOM_MARGIN, PLAYER_SPEED, SCREEN_HEIGHT,
    SCREEN_WIDTH, SPAWN_CHANCE, SPEED_RAMP_SECS, TARGET_FPS,
};

/// Bounding sizes of the sprites, supplied by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteSizes {
    pub basket: Size,
    pub fruit: Size,
    pub bomb: Size,
}

impl SpriteSizes {
    pub fn of(&self, kind: ObjectKind) -> Size {
        match kind {
            ObjectKind::Fruit(_) => self.fruit,
            ObjectKind::Bomb => self.bomb,
        }
    }
}

impl Default for SpriteSizes {
    fn default() -> Self {
        Self {
            basket: Size::new(BASKET_WIDTH, BASKET_HEIGHT),
            fruit: Size::new(OBJECT_SIZE, OBJECT_SIZE),
            bomb: Size::new(OBJECT_SIZE, OBJECT_SIZE),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub screen_width: i32,
    pub screen_height: i32,
    pub game_time_secs: u32,
    pub base_fall_speed: i32,
    pub speed_ramp_secs: u32,
    pub player_speed: i32,
    pub player_bottom_margin: i32,
    /// Per-frame spawn probability in `[0, 1]`.
    pub spawn_chance: f64,
    /// Probability in `[0, 1]` that a spawned object is a bomb.
    pub bomb_chance: f64,
    pub fruit_points: u32,
    pub bomb_penalty: u32,
    pub target_fps: u32,
    pub sprites: SpriteSizes,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            game_time_secs: GAME_TIME_SECS,
            base_fall_speed: BASE_FALL_SPEED,
            speed_ramp_secs: SPEED_RAMP_SECS,
            player_speed: PLAYER_SPEED,
            player_bottom_margin: PLAYER_BOTTOM_MARGIN,
            spawn_chance: SPAWN_CHANCE,
            bomb_chance: BOMB_CHANCE,
            fruit_points: FRUIT_POINTS,
            bomb_penalty: BOMB_PENALTY,
            target_fps: TARGET_FPS,
            sprites: SpriteSizes::default(),
        }
    }
}

impl GameConfig {
    pub fn with_game_time_secs(mut self, secs: u32) -> Self {
        self.game_time_secs = secs;
        self
    }

    pub fn with_sprites(mut self, sprites: SpriteSizes) -> Self {
        self.sprites = sprites;
        self
    }

    /// Duration of one frame at the target rate, in milliseconds (rounded down).
    pub fn frame_ms(&self) -> u64 {
        1000 / u64::from(self.target_fps.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FruitKind;

    #[test]
    fn sizes_resolve_by_kind() {
        let sizes = SpriteSizes {
            basket: Size::new(72, 54),
            fruit: Size::new(40, 40),
            bomb: Size::new(30, 30),
        };
        assert_eq!(sizes.of(ObjectKind::Fruit(FruitKind::Kiwi)), Size::new(40, 40));
        assert_eq!(sizes.of(ObjectKind::Bomb), Size::new(30, 30));
    }

    #[test]
    fn frame_ms_at_sixty_fps() {
        assert_eq!(GameConfig::default().frame_ms(), 16);
    }
}
