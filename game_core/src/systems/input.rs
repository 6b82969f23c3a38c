use glam::Vec2;
use hecs::World;

use crate::components::*;

/// Held movement keys for one paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleKeys {
    pub up: bool,
    pub down: bool,
}

impl PaddleKeys {
    pub fn new(up: bool, down: bool) -> Self {
        Self { up, down }
    }
}

/// Snapshot of held keys for both paddles (W/S left, Up/Down right)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub left: PaddleKeys,
    pub right: PaddleKeys,
}

impl KeyState {
    pub fn paddle(&self, side: Side) -> PaddleKeys {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut PaddleKeys {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// Scale `v` down to unit length if it is longer than 1
pub fn clamp_magnitude(v: Vec2) -> Vec2 {
    if v.length() > 1.0 {
        v.normalize()
    } else {
        v
    }
}

/// Desired paddle velocity for the held keys. Down is applied after up,
/// so holding both moves down.
pub fn desired_velocity(keys: PaddleKeys) -> Vec2 {
    let mut vel = Vec2::ZERO;
    if keys.up {
        vel.y = 1.0;
    }
    if keys.down {
        vel.y = -1.0;
    }
    clamp_magnitude(vel)
}

/// Write paddle velocities from held keys and re-clamp the ball's velocity
pub fn apply_input(world: &mut World, keys: &KeyState) {
    for (_entity, (paddle, body)) in world.query_mut::<(&Paddle, &mut Body)>() {
        body.vel = desired_velocity(keys.paddle(paddle.side));
    }

    for (_entity, (_ball, body)) in world.query_mut::<(&Ball, &mut Body)>() {
        body.vel = clamp_magnitude(body.vel);
    }
}
