//! Held-key tracker for terminal environments.
//!
//! Terminals that support the keyboard enhancement protocol report key
//! releases; most others only send presses plus auto-repeats. In the latter
//! mode a key counts as held until no press or repeat has been seen for a
//! short timeout.

use crossterm::event::KeyCode;

use crate::map::{movement_key, MoveKey};
use crate::types::HeldInput;

// Long enough to bridge the typical initial auto-repeat delay, short enough
// that a single tap does not turn into a long slide.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u64 = 300;

/// Tracks which movement keys are down.
#[derive(Debug, Clone)]
pub struct InputHandler {
    /// Last press/repeat timestamp of each key while held.
    left_seen_ms: Option<u64>,
    right_seen_ms: Option<u64>,
    release_events: bool,
    key_release_timeout_ms: u64,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            left_seen_ms: None,
            right_seen_ms: None,
            release_events: false,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    /// Declare whether the terminal reports key releases.
    pub fn with_release_events(mut self, enabled: bool) -> Self {
        self.release_events = enabled;
        self
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u64 {
        self.key_release_timeout_ms
    }

    pub fn release_events(&self) -> bool {
        self.release_events
    }

    /// Record a press or auto-repeat. Returns `true` for movement keys.
    ///
    /// Without release events, pressing one direction releases the other,
    /// since its release will never be reported.
    pub fn handle_key_press(&mut self, code: KeyCode, now_ms: u64) -> bool {
        match movement_key(code) {
            Some(MoveKey::Left) => {
                self.left_seen_ms = Some(now_ms);
                if !self.release_events {
                    self.right_seen_ms = None;
                }
                true
            }
            Some(MoveKey::Right) => {
                self.right_seen_ms = Some(now_ms);
                if !self.release_events {
                    self.left_seen_ms = None;
                }
                true
            }
            None => false,
        }
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        match movement_key(code) {
            Some(MoveKey::Left) => self.left_seen_ms = None,
            Some(MoveKey::Right) => self.right_seen_ms = None,
            None => {}
        }
    }

    /// Current held state, auto-releasing stale keys when releases are not reported.
    pub fn held(&mut self, now_ms: u64) -> HeldInput {
        if !self.release_events {
            let timeout = self.key_release_timeout_ms;
            let stale = |seen: Option<u64>| {
                seen.map_or(false, |t| now_ms.saturating_sub(t) > timeout)
            };
            if stale(self.left_seen_ms) {
                self.left_seen_ms = None;
            }
            if stale(self.right_seen_ms) {
                self.right_seen_ms = None;
            }
        }

        HeldInput {
            left: self.left_seen_ms.is_some(),
            right: self.right_seen_ms.is_some(),
        }
    }

    pub fn reset(&mut self) {
        self.left_seen_ms = None;
        self.right_seen_ms = None;
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_marks_key_held() {
        let mut ih = InputHandler::new();
        assert!(ih.handle_key_press(KeyCode::Left, 0));
        let held = ih.held(10);
        assert!(held.left);
        assert!(!held.right);
        assert_eq!(held.direction(), -1);
    }

    #[test]
    fn test_non_movement_key_is_ignored() {
        let mut ih = InputHandler::new();
        assert!(!ih.handle_key_press(KeyCode::Enter, 0));
        assert_eq!(ih.held(0), HeldInput::NONE);
    }

    #[test]
    fn test_auto_release_after_timeout_without_release_events() {
        let mut ih = InputHandler::new().with_key_release_timeout_ms(50);
        ih.handle_key_press(KeyCode::Right, 100);
        assert!(ih.held(150).right);
        assert!(!ih.held(151).right);
    }

    #[test]
    fn test_repeats_keep_key_held() {
        let mut ih = InputHandler::new().with_key_release_timeout_ms(50);
        ih.handle_key_press(KeyCode::Right, 0);
        for t in (40..400).step_by(40) {
            ih.handle_key_press(KeyCode::Right, t);
            assert!(ih.held(t + 10).right, "released at {}", t);
        }
    }

    #[test]
    fn test_opposite_press_replaces_direction_without_release_events() {
        let mut ih = InputHandler::new();
        ih.handle_key_press(KeyCode::Left, 0);
        ih.handle_key_press(KeyCode::Right, 5);
        let held = ih.held(10);
        assert!(!held.left);
        assert!(held.right);
    }

    #[test]
    fn test_release_events_mode_tracks_both_keys_until_release() {
        let mut ih = InputHandler::new().with_release_events(true);
        ih.handle_key_press(KeyCode::Left, 0);
        ih.handle_key_press(KeyCode::Right, 5);

        // No timeout in this mode.
        let held = ih.held(10_000);
        assert!(held.left && held.right);
        assert_eq!(held.direction(), 0);

        ih.handle_key_release(KeyCode::Left);
        assert_eq!(ih.held(10_001).direction(), 1);
    }

    #[test]
    fn test_reset_clears_held_state() {
        let mut ih = InputHandler::new();
        ih.handle_key_press(KeyCode::Left, 0);
        ih.reset();
        assert_eq!(ih.held(1), HeldInput::NONE);
    }

    #[test]
    fn test_default_key_release_timeout_is_non_zero() {
        let ih = InputHandler::new();
        assert!(ih.key_release_timeout_ms() > 0);
        assert!(!ih.release_events());
    }
}
