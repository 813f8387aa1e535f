//! Spawner - probabilistic generator of falling objects.

use crate::config::{GameConfig, SpriteSizes};
use crate::entity::FallingObject;
use crate::rng::RandomSource;
use crate::types::{FruitKind, ObjectKind};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spawner {
    spawn_chance: f64,
    bomb_chance: f64,
    screen_width: i32,
    sizes: SpriteSizes,
}

impl Spawner {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            spawn_chance: config.spawn_chance,
            bomb_chance: config.bomb_chance,
            screen_width: config.screen_width,
            sizes: config.sprites,
        }
    }

    /// Run this frame's spawn trial.
    ///
    /// Draw order: spawn trial, bomb-or-fruit, fruit variant (fruits only),
    /// horizontal position. The position is drawn last because its range
    /// depends on the chosen sprite's width.
    pub fn try_spawn<R: RandomSource>(&self, rng: &mut R, speed: i32) -> Option<FallingObject> {
        if !rng.chance(self.spawn_chance) {
            return None;
        }

        let kind = if rng.chance(self.bomb_chance) {
            ObjectKind::Bomb
        } else {
            let i = rng.next_below(FruitKind::ALL.len() as u32) as usize;
            ObjectKind::Fruit(FruitKind::ALL[i])
        };

        let size = self.sizes.of(kind);
        let x = rng.next_in_range(0, self.screen_width - size.w);
        Some(FallingObject::new(kind, x, 0, size, speed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SimpleRng;

    /// Replays a fixed list of raw values, then repeats the last one.
    struct Script {
        values: Vec<u32>,
        pos: usize,
    }

    impl RandomSource for Script {
        fn next_u32(&mut self) -> u32 {
            let v = self.values[self.pos.min(self.values.len() - 1)];
            self.pos += 1;
            v
        }
    }

    fn script(values: &[u32]) -> Script {
        Script {
            values: values.to_vec(),
            pos: 0,
        }
    }

    #[test]
    fn failed_trial_draws_once() {
        let spawner = Spawner::from_config(&GameConfig::default());
        let mut rng = script(&[u32::MAX, 0, 0, 0]);
        assert!(spawner.try_spawn(&mut rng, 3).is_none());
        assert_eq!(rng.pos, 1);
    }

    #[test]
    fn low_draws_spawn_a_bomb_at_left_edge() {
        let spawner = Spawner::from_config(&GameConfig::default());
        let mut rng = script(&[0, 0, 0]);
        let obj = spawner.try_spawn(&mut rng, 5).unwrap();
        assert_eq!(obj.kind, ObjectKind::Bomb);
        assert_eq!((obj.x, obj.y, obj.speed), (0, 0, 5));
        assert_eq!(rng.pos, 3);
    }

    #[test]
    fn high_type_draw_spawns_fruit_at_right_edge() {
        let spawner = Spawner::from_config(&GameConfig::default());
        // trial passes, not a bomb, last fruit variant, rightmost x.
        let mut rng = script(&[0, u32::MAX, u32::MAX, u32::MAX]);
        let obj = spawner.try_spawn(&mut rng, 3).unwrap();
        assert_eq!(obj.kind, ObjectKind::Fruit(FruitKind::Orange));
        assert_eq!(obj.x, 800 - 45);
        assert_eq!(obj.size.w, 45);
    }

    #[test]
    fn positions_stay_inside_playfield() {
        let cfg = GameConfig {
            spawn_chance: 1.0,
            ..GameConfig::default()
        };
        let spawner = Spawner::from_config(&cfg);
        let mut rng = SimpleRng::new(2024);
        for _ in 0..5_000 {
            let obj = spawner.try_spawn(&mut rng, 3).unwrap();
            assert!(obj.x >= 0);
            assert!(obj.rect().right() <= cfg.screen_width);
            assert_eq!(obj.y, 0);
        }
    }

    #[test]
    fn every_fruit_variant_appears() {
        let cfg = GameConfig {
            spawn_chance: 1.0,
            bomb_chance: 0.0,
            ..GameConfig::default()
        };
        let spawner = Spawner::from_config(&cfg);
        let mut rng = SimpleRng::new(8);
        let mut seen = [false; 4];
        for _ in 0..1_000 {
            if let ObjectKind::Fruit(kind) = spawner.try_spawn(&mut rng, 3).unwrap().kind {
                let i = FruitKind::ALL.iter().position(|k| *k == kind).unwrap();
                seen[i] = true;
            }
        }
        assert_eq!(seen, [true; 4]);
    }
}
