use std::time::{Duration, Instant};

/// Measures the time between frames. Feeds the scene clock, which the
/// settle timer runs on.
pub struct Delta {
    last_call: Instant,
}

impl Delta {
    pub fn new() -> Self {
        Self {
            last_call: Instant::now(),
        }
    }

    /// Capped at one second so a stalled frame doesn't fast-forward
    /// the settle clock.
    pub fn tick(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_call);
        self.last_call = now;
        elapsed.min(Duration::from_secs(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_is_monotonic_and_capped() {
        let mut delta = Delta::new();
        let a = delta.tick();
        let b = delta.tick();
        assert!(a <= Duration::from_secs(1));
        assert!(b <= Duration::from_secs(1));
    }
}
