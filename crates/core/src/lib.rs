//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on terminals, files or audio devices, making it:
//!
//! - **Deterministic**: same seed and same timestamps produce identical sessions
//! - **Testable**: time is injected as millisecond timestamps, randomness via [`RandomSource`]
//! - **Portable**: runs under the terminal front-end or headless
//!
//! # Module Structure
//!
//! - [`config`]: immutable tuning (screen, speeds, probabilities, sprite sizes)
//! - [`entity`]: the basket and falling objects
//! - [`scoring`]: the collision scoring rule
//! - [`timer`]: countdown and fall-speed ramp
//! - [`spawner`]: per-frame probabilistic spawning
//! - [`session`]: one play-through and its per-frame pipeline
//! - [`game_state`]: Menu / Playing / Paused / GameOver state machine
//! - [`snapshot`]: read-only frame view for renderers
//! - [`rng`]: injectable pseudo-random source
//!
//! # Game Rules
//!
//! - A session lasts 60 seconds of wall-clock time; pausing does not stop it
//! - Each frame there is a 2% chance a new object appears at the top
//! - One object in five is a bomb; fruits come in four looks
//! - Objects fall at `3 + floor(elapsed / 10s)` px per frame, fixed at spawn
//! - Catching a fruit scores 10, a bomb costs 5 (never below zero)
//!
//! # Example
//!
//! ```
//! use fruit_catcher_core::{GameConfig, GameState};
//! use fruit_catcher_types::{GameAction, HeldInput, Phase};
//!
//! let mut game = GameState::new(GameConfig::default(), 12345);
//! game.apply_action(GameAction::Confirm, 0);
//! assert_eq!(game.phase(), Phase::Playing);
//!
//! // One frame at ~60 FPS with the left key held.
//! let events = game.update(HeldInput { left: true, right: false }, 16);
//! assert!(!events.game_over);
//!
//! // The countdown ends the session on the first update after 60 seconds.
//! game.update(HeldInput::NONE, 60_000);
//! assert_eq!(game.phase(), Phase::GameOver);
//! ```

pub mod config;
pub mod entity;
pub mod game_state;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;
pub mod spawner;
pub mod timer;

pub use fruit_catcher_types as types;

// Re-export commonly used types for convenience
pub use config::{GameConfig, SpriteSizes};
pub use entity::{FallingObject, Player};
pub use game_state::GameState;
pub use rng::{RandomSource, SimpleRng};
pub use scoring::{apply_collision, CollisionOutcome};
pub use session::{FrameEvents, GameSession, SessionStats};
pub use snapshot::{EntitySnapshot, GameSnapshot};
pub use spawner::Spawner;
pub use timer::{fall_speed, remaining_secs, SessionClock};
