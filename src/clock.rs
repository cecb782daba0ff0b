use std::time::Instant;

/// Per-frame delta timer over a monotonic clock.
#[derive(Debug)]
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Seconds elapsed since the previous tick (or construction).
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        delta
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn tick_is_non_negative_and_advances() {
        let mut clock = FrameClock::new();
        sleep(Duration::from_millis(5));
        let first = clock.tick();
        assert!(first >= 0.005);
        let second = clock.tick();
        assert!(second >= 0.0);
    }
}
