use std::time::Duration;

/// Single-shot delayed trigger polled against the frame clock.
///
/// Once armed it fires exactly once, on the first poll at or after its
/// deadline. There is no cancel; re-arming replaces the deadline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OneShot {
    fires_at: Option<Duration>,
}

impl OneShot {
    pub fn arm(&mut self, now: Duration, after: Duration) {
        self.fires_at = Some(now + after);
    }

    pub fn is_armed(&self) -> bool {
        self.fires_at.is_some()
    }

    pub fn deadline(&self) -> Option<Duration> {
        self.fires_at
    }

    /// Returns `true` once when the deadline has passed, disarming the timer.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.fires_at {
            Some(at) if now >= at => {
                self.fires_at = None;
                true
            }
            _ => false,
        }
    }
}
