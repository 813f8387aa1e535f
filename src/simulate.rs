//! Headless simulation: `fruit-catcher simulate [--seed N] [--seconds S] [--every F]`.
//!
//! Plays one full session at a simulated 60 fps with a simple autopilot and
//! writes JSON lines to the given writer: a snapshot every `F` frames
//! (`--every 0` disables them) followed by one summary object.

use std::io::Write;

use anyhow::{anyhow, Result};
use serde::Serialize;

use crate::core::{GameConfig, GameSnapshot, GameState};
use crate::types::{GameAction, HeldInput, Phase, SpriteId, GAME_TIME_SECS};

// Bombs closer than this above the basket are worth dodging.
const BOMB_ALERT_PX: i32 = 150;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulateConfig {
    pub seed: u32,
    pub seconds: u32,
    pub every: u32,
}

impl Default for SimulateConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            seconds: GAME_TIME_SECS,
            every: 60,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationSummary {
    pub seed: u32,
    pub frames: u32,
    pub elapsed_ms: u64,
    pub final_score: u32,
    pub spawned: u32,
    pub fruits_spawned: u32,
    pub bombs_spawned: u32,
    pub caught: u32,
    pub exploded: u32,
    pub missed: u32,
}

pub fn parse_simulate_args(args: &[String]) -> Result<Option<SimulateConfig>> {
    if args.is_empty() || args[0] != "simulate" {
        return Ok(None);
    }

    let mut cfg = SimulateConfig::default();
    let mut i = 1usize;
    while i < args.len() {
        let flag = args[i].as_str();
        let slot = match flag {
            "--seed" => &mut cfg.seed,
            "--seconds" => &mut cfg.seconds,
            "--every" => &mut cfg.every,
            other => return Err(anyhow!("simulate: unknown argument: {}", other)),
        };
        i += 1;
        let v = args
            .get(i)
            .ok_or_else(|| anyhow!("simulate: missing value for {}", flag))?;
        *slot = v
            .parse::<u32>()
            .map_err(|_| anyhow!("simulate: invalid {} value: {}", flag, v))?;
        i += 1;
    }

    if cfg.seconds == 0 {
        return Err(anyhow!("simulate: --seconds must be positive"));
    }
    Ok(Some(cfg))
}

/// Steer toward the lowest fruit still above the basket, unless a bomb is
/// about to land on it.
pub fn autopilot(snap: &GameSnapshot, player_speed: i32) -> HeldInput {
    let Some(player) = snap.player else {
        return HeldInput::NONE;
    };
    let basket = player.rect;
    let toward = |target_x: i32| {
        let dx = target_x - basket.center_x();
        HeldInput {
            left: dx < -player_speed,
            right: dx > player_speed,
        }
    };

    let threat = snap
        .objects
        .iter()
        .filter(|o| o.sprite == SpriteId::Bomb)
        .filter(|o| o.rect.bottom() <= basket.y && basket.y - o.rect.bottom() < BOMB_ALERT_PX)
        .find(|o| o.rect.x < basket.right() + player_speed && o.rect.right() > basket.x - player_speed);
    if let Some(bomb) = threat {
        let escape_left = bomb.rect.center_x() >= basket.center_x() && basket.x > bomb.rect.w;
        let escape_right = basket.right() < snap.screen_width - bomb.rect.w;
        return if escape_left || !escape_right {
            HeldInput { left: true, right: false }
        } else {
            HeldInput { left: false, right: true }
        };
    }

    snap.objects
        .iter()
        .filter(|o| matches!(o.sprite, SpriteId::Fruit(_)))
        .filter(|o| o.rect.y < basket.bottom())
        .max_by_key(|o| o.rect.y)
        .map_or(HeldInput::NONE, |fruit| toward(fruit.rect.center_x()))
}

/// Run one session to GameOver, writing JSON lines to `out`.
pub fn run_simulation(cfg: &SimulateConfig, out: &mut impl Write) -> Result<SimulationSummary> {
    let config = GameConfig::default().with_game_time_secs(cfg.seconds);
    let frame_ms = config.frame_ms();
    let player_speed = config.player_speed;

    let mut game = GameState::new(config, cfg.seed);
    game.apply_action(GameAction::Confirm, 0);

    let mut snap = GameSnapshot::default();
    let mut now_ms = 0u64;
    let mut frames = 0u32;
    while game.phase() == Phase::Playing {
        now_ms += frame_ms;
        game.snapshot_into(now_ms, &mut snap);
        let held = autopilot(&snap, player_speed);
        game.update(held, now_ms);
        frames += 1;

        if cfg.every > 0 && frames % cfg.every == 0 {
            game.snapshot_into(now_ms, &mut snap);
            serde_json::to_writer(&mut *out, &snap)
                .map_err(|e| anyhow!("simulate: encode snapshot: {}", e))?;
            out.write_all(b"\n")?;
        }
    }

    let stats = game.session().map(|s| s.stats()).unwrap_or_default();
    let summary = SimulationSummary {
        seed: cfg.seed,
        frames,
        elapsed_ms: now_ms,
        final_score: game.score(),
        spawned: stats.spawned,
        fruits_spawned: stats.fruits_spawned,
        bombs_spawned: stats.bombs_spawned,
        caught: stats.caught,
        exploded: stats.exploded,
        missed: stats.missed,
    };
    serde_json::to_writer(&mut *out, &summary)
        .map_err(|e| anyhow!("simulate: encode summary: {}", e))?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(summary)
}
