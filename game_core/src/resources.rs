use crate::Side;

/// Turns a monotonic time source into per-frame delta times
#[derive(Debug, Clone, Copy, Default)]
pub struct Clock {
    previous: f32,
}

impl Clock {
    /// A clock whose previous reading is 0, so the first delta is the
    /// absolute time of the first reading
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds elapsed since the previous reading
    pub fn tick(&mut self, now: f32) -> f32 {
        let dt = now - self.previous;
        self.previous = now;
        dt
    }

    pub fn previous(&self) -> f32 {
        self.previous
    }
}

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub dt: f32,     // Delta time for this step
    pub now: f32,    // Total simulated time
    pub frame: u64,  // Steps taken
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now, frame: 0 }
    }
}

/// Make a raw delta usable for integration: NaN and negative become 0,
/// and the optional cap is applied
pub fn sanitize_dt(dt: f32, max_dt: Option<f32>) -> f32 {
    let dt = if dt.is_nan() { 0.0 } else { dt.max(0.0) };
    match max_dt {
        Some(cap) => dt.min(cap),
        None => dt,
    }
}

/// Lifecycle of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchState {
    #[default]
    Running,
    Terminated,
}

/// Points per side, used by scored rounds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u8,  // Left player score
    pub right: u8, // Right player score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn increment(&mut self, side: Side) {
        let points = match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        *points = points.saturating_add(1);
    }

    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.left >= win_score {
            Some(Side::Left)
        } else if self.right >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub ball_hit_wall: bool,
    pub ball_hit_paddle: Option<Side>,
    /// The side of the playfield the ball left through
    pub ball_exited: Option<Side>,
    pub scored: Option<Side>,
    pub terminated: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
