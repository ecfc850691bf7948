//! Frame clock - turns host timestamps into tick deltas
//!
//! The host loop samples a monotonic timestamp each frame and feeds the delta
//! to `GameSession::tick`. After a pause the clock is rebased so that the
//! time spent paused is never handed to the session as one large delta.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameClock {
    last_ms: Option<u64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds since the previous sample. The first sample yields 0.
    /// A timestamp older than the previous one also yields 0.
    pub fn delta(&mut self, now_ms: u64) -> u32 {
        let delta = match self.last_ms {
            Some(last) => now_ms.saturating_sub(last),
            None => 0,
        };
        self.last_ms = Some(now_ms);
        delta.min(u32::MAX as u64) as u32
    }

    /// Forget the previous sample; the next delta is measured from `now_ms`.
    pub fn rebase(&mut self, now_ms: u64) {
        self.last_ms = Some(now_ms);
    }

    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_has_no_delta() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.delta(5_000), 0);
        assert_eq!(clock.delta(5_016), 16);
        assert_eq!(clock.delta(5_040), 24);
    }

    #[test]
    fn rebase_skips_paused_time() {
        let mut clock = FrameClock::new();
        clock.delta(0);
        clock.delta(100);
        // Paused for ten seconds, then resumed.
        clock.rebase(10_100);
        assert_eq!(clock.delta(10_116), 16);
    }

    #[test]
    fn backwards_time_is_clamped() {
        let mut clock = FrameClock::new();
        clock.delta(200);
        assert_eq!(clock.delta(150), 0);
        assert_eq!(clock.delta(160), 10);
    }
}
