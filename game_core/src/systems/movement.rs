use crate::{Ball, Body, Paddle, Time};
use hecs::World;

/// Apply paddle movement, then consume the input (no momentum)
pub fn move_paddles(world: &mut World, time: &Time) {
    for (_entity, (paddle, body)) in world.query_mut::<(&Paddle, &mut Body)>() {
        body.integrate(paddle.speed, time.dt);
        body.pos.x = paddle.lane_x;
        body.vel = glam::Vec2::ZERO;
    }
}

/// Move ball based on velocity
pub fn move_ball(world: &mut World, time: &Time) {
    for (_entity, (ball, body)) in world.query_mut::<(&Ball, &mut Body)>() {
        body.integrate(ball.speed, time.dt);
    }
}
