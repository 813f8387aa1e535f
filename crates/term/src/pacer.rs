//! Fixed-rate frame pacing on injected millisecond timestamps.

/// Schedules frames at a fixed period.
///
/// The time left until the next frame is used as the input poll timeout, so
/// the loop sleeps in `poll` rather than spinning. If the loop falls more than
/// one period behind (terminal stall, suspended process) the schedule is
/// re-anchored instead of running a burst of catch-up frames.
#[derive(Debug, Clone)]
pub struct FramePacer {
    period_ms: u64,
    next_frame_ms: u64,
}

impl FramePacer {
    pub fn new(fps: u32, now_ms: u64) -> Self {
        let period_ms = (1000 / u64::from(fps.max(1))).max(1);
        Self {
            period_ms,
            next_frame_ms: now_ms,
        }
    }

    pub fn period_ms(&self) -> u64 {
        self.period_ms
    }

    /// Milliseconds to wait before the next frame is due.
    pub fn timeout_ms(&self, now_ms: u64) -> u64 {
        self.next_frame_ms.saturating_sub(now_ms)
    }

    /// If a frame is due, consume it and return `true`.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if now_ms < self.next_frame_ms {
            return false;
        }
        self.next_frame_ms += self.period_ms;
        if now_ms >= self.next_frame_ms {
            self.next_frame_ms = now_ms + self.period_ms;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixty_fps_period() {
        let p = FramePacer::new(60, 0);
        assert_eq!(p.period_ms(), 16);
    }

    #[test]
    fn first_frame_is_due_immediately() {
        let mut p = FramePacer::new(60, 100);
        assert_eq!(p.timeout_ms(100), 0);
        assert!(p.tick(100));
        assert_eq!(p.timeout_ms(100), 16);
        assert!(!p.tick(110));
        assert_eq!(p.timeout_ms(110), 6);
        assert!(p.tick(116));
    }

    #[test]
    fn small_lateness_keeps_schedule() {
        let mut p = FramePacer::new(60, 0);
        assert!(p.tick(0));
        assert!(p.tick(20));
        // Next frame stays on the 16 ms grid.
        assert_eq!(p.timeout_ms(20), 12);
    }

    #[test]
    fn long_stall_resyncs_without_burst() {
        let mut p = FramePacer::new(60, 0);
        assert!(p.tick(0));
        assert!(p.tick(1_000));
        assert!(!p.tick(1_001));
        assert_eq!(p.timeout_ms(1_000), 16);
    }

    #[test]
    fn zero_fps_is_clamped() {
        let p = FramePacer::new(0, 0);
        assert_eq!(p.period_ms(), 1000);
    }
}
