// ── Frame pacing ────────────────────────────────────────────────────────────

use std::thread;
use std::time::{Duration, Instant};

/// Caps the loop at a fixed frequency by sleeping out whatever is left of
/// the current period, and reports the wall time since the previous tick.
/// The first tick never sleeps.
pub struct FramePacer {
    period: Duration,
    last: Option<Instant>,
}

impl FramePacer {
    pub fn new(fps: u32) -> FramePacer {
        FramePacer {
            period: Duration::from_secs_f64(1.0 / fps as f64),
            last: None,
        }
    }

    pub fn tick(&mut self) -> Duration {
        let now = Instant::now();
        let Some(last) = self.last else {
            self.last = Some(now);
            return Duration::ZERO;
        };
        let elapsed = now - last;
        if elapsed < self.period {
            thread::sleep(self.period - elapsed);
        }
        let end = Instant::now();
        self.last = Some(end);
        end - last
    }
}
