//! Scripted paddle players
//!
//! Each autopilot decides which keys to hold this frame, so its moves go
//! through the same input mapping as a human player.

use clap::ValueEnum;
use game_core::{Body, Config, PaddleKeys, Side, Simulation};

/// Ignore small offsets so the paddle does not jitter around its target
const DEADZONE: f32 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Autopilot {
    /// Never press anything
    Idle,
    /// Hold up
    Up,
    /// Hold down
    Down,
    /// Chase the ball's predicted crossing point
    Track,
}

impl Autopilot {
    pub fn keys(self, side: Side, sim: &Simulation) -> PaddleKeys {
        match self {
            Autopilot::Idle => PaddleKeys::default(),
            Autopilot::Up => PaddleKeys::new(true, false),
            Autopilot::Down => PaddleKeys::new(false, true),
            Autopilot::Track => match (sim.paddle(side), sim.ball()) {
                (Some(paddle), Some(ball)) => track(side, &paddle, &ball, sim.config()),
                _ => PaddleKeys::default(),
            },
        }
    }
}

/// If the ball is heading our way, move toward where it will cross our lane;
/// otherwise drift back to the centre to cover the most ground.
fn track(side: Side, paddle: &Body, ball: &Body, config: &Config) -> PaddleKeys {
    let lane_x = config.paddle_lane(side);
    let incoming = match side {
        Side::Left => ball.vel.x < 0.0,
        Side::Right => ball.vel.x > 0.0,
    };

    let target_y = if incoming {
        let time_to_reach = (lane_x - ball.pos.x) / ball.vel.x;
        (ball.pos.y + ball.vel.y * time_to_reach).clamp(config.min_y, config.max_y)
    } else {
        config.paddle_start_y
    };

    let diff = target_y - paddle.pos.y;
    PaddleKeys::new(diff > DEADZONE, diff < -DEADZONE)
}
