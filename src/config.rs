//! Application configuration from environment variables.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::{GameConfig, SpriteSizes};
use crate::types::GAME_TIME_SECS;

/// Runtime settings for the terminal app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: u32,
    pub game_time_secs: u32,
    /// Directory holding `<sprite>.txt` art files.
    pub asset_dir: Option<PathBuf>,
    /// JSONL event log destination.
    pub log_path: Option<PathBuf>,
    /// Ring the terminal bell on catches and explosions.
    pub bell: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            game_time_secs: GAME_TIME_SECS,
            asset_dir: None,
            log_path: None,
            bell: false,
        }
    }
}

impl AppConfig {
    /// Create from environment variables.
    ///
    /// - `FRUIT_SEED`: RNG seed (default: derived from the system clock)
    /// - `FRUIT_GAME_SECONDS`: session length, must be positive
    /// - `FRUIT_ASSET_DIR`: sprite art directory
    /// - `FRUIT_LOG_PATH`: JSONL event log file
    /// - `FRUIT_BELL`: `1`/`true`/`yes`/`on` enables the bell
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let seed = non_empty("FRUIT_SEED")
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(clock_seed);

        let game_time_secs = non_empty("FRUIT_GAME_SECONDS")
            .and_then(|s| s.parse::<u32>().ok())
            .filter(|&secs| secs > 0)
            .unwrap_or(GAME_TIME_SECS);

        let bell = non_empty("FRUIT_BELL")
            .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
            .unwrap_or(false);

        Self {
            seed,
            game_time_secs,
            asset_dir: non_empty("FRUIT_ASSET_DIR").map(PathBuf::from),
            log_path: non_empty("FRUIT_LOG_PATH").map(PathBuf::from),
            bell,
        }
    }

    pub fn game_config(&self, sprites: SpriteSizes) -> GameConfig {
        GameConfig::default()
            .with_game_time_secs(self.game_time_secs)
            .with_sprites(sprites)
    }
}

fn clock_seed() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1);
    (nanos ^ (nanos >> 32)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn reads_all_variables() {
        let cfg = AppConfig::from_lookup(lookup(&[
            ("FRUIT_SEED", "42"),
            ("FRUIT_GAME_SECONDS", "30"),
            ("FRUIT_ASSET_DIR", "/tmp/art"),
            ("FRUIT_LOG_PATH", " /tmp/fruit.jsonl "),
            ("FRUIT_BELL", "TRUE"),
        ]));
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.game_time_secs, 30);
        assert_eq!(cfg.asset_dir, Some(PathBuf::from("/tmp/art")));
        assert_eq!(cfg.log_path, Some(PathBuf::from("/tmp/fruit.jsonl")));
        assert!(cfg.bell);
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let cfg = AppConfig::from_lookup(lookup(&[
            ("FRUIT_GAME_SECONDS", "0"),
            ("FRUIT_ASSET_DIR", "   "),
            ("FRUIT_LOG_PATH", ""),
            ("FRUIT_BELL", "nope"),
        ]));
        assert_eq!(cfg.game_time_secs, GAME_TIME_SECS);
        assert_eq!(cfg.asset_dir, None);
        assert_eq!(cfg.log_path, None);
        assert!(!cfg.bell);

        let cfg = AppConfig::from_lookup(lookup(&[("FRUIT_GAME_SECONDS", "soon")]));
        assert_eq!(cfg.game_time_secs, GAME_TIME_SECS);
    }

    #[test]
    fn game_config_carries_session_length_and_sprites() {
        let app = AppConfig {
            game_time_secs: 5,
            ..AppConfig::default()
        };
        let game = app.game_config(SpriteSizes::default());
        assert_eq!(game.game_time_secs, 5);
        assert_eq!(game.sprites, SpriteSizes::default());
        assert_eq!(game.spawn_chance, GameConfig::default().spawn_chance);
    }
}
