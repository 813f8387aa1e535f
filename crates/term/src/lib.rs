//! Terminal presentation layer for Fruit Catcher.
//!
//! A small, game-oriented rendering layer: the game view draws a
//! [`core::GameSnapshot`] into a framebuffer of styled cells, and the
//! renderer flushes only the cells that changed since the previous frame.
//!
//! Also home to the pieces of the frame loop that touch the outside world:
//! sprite loading, audio cues, redraw throttling and frame pacing.

pub mod audio;
pub mod fb;
pub mod game_view;
pub mod pacer;
pub mod render_throttle;
pub mod renderer;
pub mod sprites;

pub use fruit_catcher_core as core;
pub use fruit_catcher_types as types;

pub use audio::{AudioSink, BellAudio, NullAudio, RecordingAudio};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{FieldLayout, GameView, Viewport};
pub use pacer::FramePacer;
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use sprites::{SpriteArt, SpriteSheet};
