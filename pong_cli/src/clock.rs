use std::time::Instant;

/// Monotonic seconds fed to the simulation clock, one reading per frame
pub enum TimeSource {
    /// Simulated time advancing by `dt` each reading
    Fixed { dt: f32, readings: u64 },
    /// Wall-clock seconds since the source was created
    Realtime { start: Instant },
}

impl TimeSource {
    pub fn fixed(dt: f32) -> Self {
        TimeSource::Fixed { dt, readings: 0 }
    }

    pub fn realtime() -> Self {
        TimeSource::Realtime {
            start: Instant::now(),
        }
    }

    pub fn now(&mut self) -> f32 {
        match self {
            TimeSource::Fixed { dt, readings } => {
                *readings += 1;
                *readings as f32 * *dt
            }
            TimeSource::Realtime { start } => start.elapsed().as_secs_f32(),
        }
    }

    pub fn is_realtime(&self) -> bool {
        matches!(self, TimeSource::Realtime { .. })
    }
}
