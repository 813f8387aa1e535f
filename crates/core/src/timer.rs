//! Timer / difficulty model.
//!
//! Both the countdown and the fall-speed ramp derive from wall-clock time
//! elapsed since the session started. Timestamps are plain milliseconds from
//! any monotonic origin chosen by the caller.

/// Seconds left: `max(0, game_time - floor(elapsed))`.
pub fn remaining_secs(elapsed_ms: u64, game_time_secs: u32) -> u32 {
    let elapsed_secs = elapsed_ms / 1000;
    u64::from(game_time_secs).saturating_sub(elapsed_secs) as u32
}

/// Fall speed for objects spawned now: `base + floor(elapsed / ramp)`.
///
/// A ramp of zero disables the increase.
pub fn fall_speed(elapsed_ms: u64, base_speed: i32, ramp_secs: u32) -> i32 {
    if ramp_secs == 0 {
        return base_speed;
    }
    let steps = elapsed_ms / 1000 / u64::from(ramp_secs);
    base_speed.saturating_add(i32::try_from(steps).unwrap_or(i32::MAX))
}

/// Start timestamp of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionClock {
    start_ms: u64,
}

impl SessionClock {
    pub fn start(now_ms: u64) -> Self {
        Self { start_ms: now_ms }
    }

    pub fn start_ms(&self) -> u64 {
        self.start_ms
    }

    /// Never negative, even if `now_ms` is earlier than the start.
    pub fn elapsed_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.start_ms)
    }
}
