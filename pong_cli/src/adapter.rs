use game_core::{Camera, RenderAdapter, Side, Simulation, TextureHandle};
use glam::{Mat4, Vec2};
use proto::{Frame, RunState};
use tracing::trace;

/// Render adapter for headless runs: logs each draw in clip space
pub struct TraceRenderer {
    camera: Camera,
    draws: u64,
}

impl TraceRenderer {
    pub fn new(camera: Camera) -> Self {
        Self { camera, draws: 0 }
    }

    pub fn draws(&self) -> u64 {
        self.draws
    }
}

impl RenderAdapter for TraceRenderer {
    fn draw(&mut self, transform: &Mat4, texture: TextureHandle) {
        self.draws += 1;
        let clip = self.camera.project(transform);
        trace!(texture = texture.0, x = clip.x, y = clip.y, "draw");
    }
}

/// Snapshot the simulation for the frame log
pub fn snapshot(sim: &Simulation) -> Frame {
    let time = sim.time();
    let (ball_pos, ball_vel) = sim
        .ball()
        .map_or((Vec2::ZERO, Vec2::ZERO), |b| (b.pos, b.vel));
    let paddle_y = |side| sim.paddle(side).map_or(0.0, |p| p.pos.y);

    Frame {
        frame: time.frame,
        now: time.now,
        dt: time.dt,
        paddle_left_y: paddle_y(Side::Left),
        paddle_right_y: paddle_y(Side::Right),
        ball_x: ball_pos.x,
        ball_y: ball_pos.y,
        ball_vx: ball_vel.x,
        ball_vy: ball_vel.y,
        score_left: sim.score().get(Side::Left),
        score_right: sim.score().get(Side::Right),
        state: if sim.is_terminated() {
            RunState::Terminated
        } else {
            RunState::Running
        },
    }
}
