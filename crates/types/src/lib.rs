//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! They are plain data with no behavior beyond small conversions, so they can
//! be shared by the core logic, the terminal presentation and the headless
//! simulator alike.
//!
//! # Playfield
//!
//! All positions are expressed in logical pixels of an 800x600 playfield with
//! the origin at the top-left corner and `y` growing downward. The terminal
//! presentation scales these into character cells.
//!
//! # Default Tuning
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GAME_TIME_SECS` | 60 | Session length |
//! | `BASE_FALL_SPEED` | 3 | Fall speed (px/frame) at session start |
//! | `SPEED_RAMP_SECS` | 10 | Fall speed grows by 1 every this many seconds |
//! | `PLAYER_SPEED` | 7 | Basket speed (px/frame) |
//! | `SPAWN_CHANCE` | 0.02 | Per-frame spawn probability |
//! | `BOMB_CHANCE` | 0.2 | Probability a spawned object is a bomb |
//! | `FRUIT_POINTS` | 10 | Score for catching a fruit |
//! | `BOMB_PENALTY` | 5 | Score lost when hitting a bomb |
//! | `TARGET_FPS` | 60 | Frame rate of the game loop |
//!
//! # Examples
//!
//! ```
//! use fruit_catcher_types::{GameAction, Phase, Rect};
//!
//! assert_eq!(GameAction::from_str("confirm"), Some(GameAction::Confirm));
//! assert_eq!(Phase::Menu.as_str(), "menu");
//!
//! let a = Rect::new(0, 0, 10, 10);
//! assert!(a.intersects(&Rect::new(5, 5, 10, 10)));
//! assert!(!a.intersects(&Rect::new(10, 0, 10, 10)));
//! ```

use serde::Serialize;

/// Playfield width in logical pixels
pub const SCREEN_WIDTH: i32 = 800;

/// Playfield height in logical pixels
pub const SCREEN_HEIGHT: i32 = 600;

/// Session length in seconds
pub const GAME_TIME_SECS: u32 = 60;

/// Fall speed at session start (pixels per frame)
pub const BASE_FALL_SPEED: i32 = 3;

/// Fall speed increases by one every `SPEED_RAMP_SECS` seconds
pub const SPEED_RAMP_SECS: u32 = 10;

/// Basket horizontal speed (pixels per frame)
pub const PLAYER_SPEED: i32 = 7;

/// Gap between the basket and the bottom edge
pub const PLAYER_BOTTOM_MARGIN: i32 = 10;

/// Probability that a falling object spawns on a given frame
pub const SPAWN_CHANCE: f64 = 0.02;

/// Probability that a spawned object is a bomb rather than a fruit
pub const BOMB_CHANCE: f64 = 0.2;

/// Points awarded for catching a fruit
pub const FRUIT_POINTS: u32 = 10;

/// Points removed when a bomb hits the basket (score floors at zero)
pub const BOMB_PENALTY: u32 = 5;

/// Game loop rate
pub const TARGET_FPS: u32 = 60;

/// Basket sprite bounds
pub const BASKET_WIDTH: i32 = 72;
pub const BASKET_HEIGHT: i32 = 54;

/// Fruit and bomb sprite bounds (square)
pub const OBJECT_SIZE: i32 = 45;


/// Game state machine phases
///
/// - **Menu**: title screen, initial phase
/// - **Playing**: session running, logic advances every frame
/// - **Paused**: session frozen (the clock is not, see `GameState`)
/// - **GameOver**: time ran out, final score on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Menu,
    Playing,
    Paused,
    GameOver,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Menu => "menu",
            Phase::Playing => "playing",
            Phase::Paused => "paused",
            Phase::GameOver => "game_over",
        }
    }

    /// Phases whose frame only changes on input (no per-frame animation).
    pub fn is_static(&self) -> bool {
        !matches!(self, Phase::Playing)
    }
}

/// Discrete key-down actions
///
/// Continuous movement is not an action; it is carried by [`HeldInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Start a session from the menu, or leave the game-over screen
    Confirm,
    /// Toggle between playing and paused
    Pause,
    /// Exit the game from any phase
    Quit,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use fruit_catcher_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("PAUSE"), Some(GameAction::Pause));
    /// assert_eq!(GameAction::from_str("resume"), Some(GameAction::Pause));
    /// assert_eq!(GameAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "confirm" | "start" | "restart" => Some(GameAction::Confirm),
            "pause" | "resume" => Some(GameAction::Pause),
            "quit" => Some(GameAction::Quit),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Confirm => "confirm",
            GameAction::Pause => "pause",
            GameAction::Quit => "quit",
        }
    }
}

/// Movement keys currently held down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeldInput {
    pub left: bool,
    pub right: bool,
}

impl HeldInput {
    pub const NONE: HeldInput = HeldInput {
        left: false,
        right: false,
    };

    /// Net horizontal direction: -1, 0 or 1. Both keys cancel out.
    pub fn direction(&self) -> i32 {
        (self.right as i32) - (self.left as i32)
    }
}

/// The four fruit variants. They only differ in how they are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FruitKind {
    Strawberry,
    Kiwi,
    Banana,
    Orange,
}

impl FruitKind {
    pub const ALL: [FruitKind; 4] = [
        FruitKind::Strawberry,
        FruitKind::Kiwi,
        FruitKind::Banana,
        FruitKind::Orange,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FruitKind::Strawberry => "strawberry",
            FruitKind::Kiwi => "kiwi",
            FruitKind::Banana => "banana",
            FruitKind::Orange => "orange",
        }
    }
}

/// Type of a falling object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    Fruit(FruitKind),
    Bomb,
}

impl ObjectKind {
    pub fn is_bomb(&self) -> bool {
        matches!(self, ObjectKind::Bomb)
    }

    pub fn sprite(&self) -> SpriteId {
        match *self {
            ObjectKind::Fruit(kind) => SpriteId::Fruit(kind),
            ObjectKind::Bomb => SpriteId::Bomb,
        }
    }
}

/// Opaque handle the presentation layer resolves into actual artwork.
///
/// Whether the artwork comes from a file or is drawn procedurally is never
/// visible through this handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpriteId {
    Basket,
    Fruit(FruitKind),
    Bomb,
}

impl SpriteId {
    /// Asset base name, e.g. `"kiwi"` or `"basket"`.
    pub fn name(&self) -> &'static str {
        match self {
            SpriteId::Basket => "basket",
            SpriteId::Fruit(kind) => kind.as_str(),
            SpriteId::Bomb => "bomb",
        }
    }
}

/// Sprite bounds in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Size {
    pub w: i32,
    pub h: i32,
}

impl Size {
    pub const fn new(w: i32, h: i32) -> Self {
        Self { w, h }
    }
}

/// Axis-aligned bounding box in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Strict overlap test: rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.w > 0
            && self.h > 0
            && other.w > 0
            && other.h > 0
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    pub fn center_x(&self) -> i32 {
        self.x + self.w / 2
    }
}

/// Fire-and-forget sound cues emitted by a frame update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AudioCue {
    /// A fruit landed in the basket
    Catch,
    /// A bomb hit the basket
    Explosion,
}
