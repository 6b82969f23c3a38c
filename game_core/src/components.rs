use glam::Vec2;

/// Which end of the playfield a paddle guards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Kinematic state shared by paddles and the ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub pos: Vec2,
    /// Direction of travel; scaled by the owner's speed when integrated
    pub vel: Vec2,
    pub half_extent: Vec2,
}

impl Body {
    pub fn new(pos: Vec2, vel: Vec2, half_extent: Vec2) -> Self {
        Self {
            pos,
            vel,
            half_extent,
        }
    }

    /// Advance position by `vel * speed * dt`
    pub fn integrate(&mut self, speed: f32, dt: f32) {
        self.pos += self.vel * speed * dt;
    }
}

/// Paddle component - a player's paddle, pinned to its lane
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub lane_x: f32,
    pub speed: f32,
}

impl Paddle {
    pub fn new(side: Side, lane_x: f32, speed: f32) -> Self {
        Self {
            side,
            lane_x,
            speed,
        }
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub speed: f32,
}

impl Ball {
    pub fn new(speed: f32) -> Self {
        Self { speed }
    }

    /// Random launch direction: each component is a whole number in
    /// `-3..=1`. Not normalized here; the per-frame input pass clamps it.
    pub fn launch_velocity(rng: &mut crate::GameRng) -> Vec2 {
        use rand::Rng;
        let range = crate::Params::BALL_START_COMPONENT_MIN..=crate::Params::BALL_START_COMPONENT_MAX;
        let x = rng.0.gen_range(range.clone());
        let y = rng.0.gen_range(range);
        Vec2::new(x as f32, y as f32)
    }

    /// Launch direction after a scored point. Same draw as
    /// [`Ball::launch_velocity`], redrawn until it has a horizontal
    /// component so the next round can reach an edge.
    pub fn respawn_velocity(rng: &mut crate::GameRng) -> Vec2 {
        loop {
            let vel = Self::launch_velocity(rng);
            if vel.x != 0.0 {
                return vel;
            }
        }
    }
}
