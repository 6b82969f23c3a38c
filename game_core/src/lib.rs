pub mod components;
pub mod config;
pub mod error;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use error::*;
pub use params::*;
pub use render::*;
pub use resources::*;
pub use systems::*;

use hecs::{Entity, World};
use tracing::debug;

/// Run one deterministic Pong step of `time.dt` seconds.
///
/// Gaps are measured once from the positions at the start of the step, then
/// applied in order: paddle wall clamp, paddle integration, ball wall bounce,
/// ball paddle bounce, bounds check, ball integration.
pub fn step(
    world: &mut World,
    time: &mut Time,
    config: &Config,
    state: &mut MatchState,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // Clear events at start of frame
    events.clear();

    if *state == MatchState::Terminated {
        return;
    }

    let dt = sanitize_dt(time.dt, config.max_dt);
    let step_time = Time {
        dt,
        now: time.now + dt,
        frame: time.frame + 1,
    };

    let contacts = measure_contacts(world, config);

    // 1-2. Paddles
    clamp_paddles_at_walls(world, &contacts);
    move_paddles(world, &step_time);

    // 3-4. Ball reflections
    bounce_ball_off_walls(world, &contacts, config, events);
    bounce_ball_off_paddles(world, &contacts, config, events);

    // 5-6. Bounds, then ball integration
    match check_bounds(world, config, score, events, rng) {
        BoundsOutcome::InPlay => move_ball(world, &step_time),
        BoundsOutcome::Respawned => {}
        BoundsOutcome::MatchOver => {
            *state = MatchState::Terminated;
            events.terminated = true;
        }
    }

    *time = step_time;
}

/// Helper to create a paddle entity at its starting position
pub fn create_paddle(world: &mut World, config: &Config, side: Side) -> Entity {
    world.spawn((
        Paddle::new(side, config.paddle_lane(side), config.paddle_speed),
        Body::new(
            config.paddle_start(side),
            glam::Vec2::ZERO,
            config.paddle_half_extent,
        ),
    ))
}

/// Helper to create the ball entity
pub fn create_ball(
    world: &mut World,
    config: &Config,
    pos: glam::Vec2,
    vel: glam::Vec2,
) -> Entity {
    world.spawn((
        Ball::new(config.ball_speed),
        Body::new(pos, vel, config.ball_half_extent),
    ))
}

/// Everything one Pong run needs, owned by the frame loop
pub struct Simulation {
    world: World,
    config: Config,
    clock: Clock,
    time: Time,
    state: MatchState,
    score: Score,
    events: Events,
    rng: GameRng,
    left: Entity,
    right: Entity,
    ball: Entity,
}

impl Simulation {
    /// Set up both paddles and a ball launched in a direction drawn from `seed`
    pub fn new(config: Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        let left = create_paddle(&mut world, &config, Side::Left);
        let right = create_paddle(&mut world, &config, Side::Right);
        let launch = Ball::launch_velocity(&mut rng);
        let ball = create_ball(&mut world, &config, config.ball_start(), launch);
        debug!(seed, vx = launch.x, vy = launch.y, "simulation created");

        Ok(Self {
            world,
            config,
            clock: Clock::new(),
            time: Time::default(),
            state: MatchState::Running,
            score: Score::new(),
            events: Events::new(),
            rng,
            left,
            right,
            ball,
        })
    }

    /// One full frame: read the clock, map input, step
    pub fn frame(&mut self, now: f32, keys: &KeyState) -> &Events {
        let dt = self.clock.tick(now);
        self.apply_input(keys);
        self.advance(dt)
    }

    /// Input Mapper pass: paddle velocities from keys, ball velocity clamp
    pub fn apply_input(&mut self, keys: &KeyState) {
        if self.is_terminated() {
            return;
        }
        apply_input(&mut self.world, keys);
    }

    /// Collision & Motion Step for `dt` seconds
    pub fn advance(&mut self, dt: f32) -> &Events {
        self.time.dt = dt;
        step(
            &mut self.world,
            &mut self.time,
            &self.config,
            &mut self.state,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        );
        &self.events
    }

    /// Hand every body to the render adapter
    pub fn render(&self, sprites: &Sprites, adapter: &mut impl RenderAdapter) {
        draw_bodies(&self.world, sprites, adapter);
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn is_terminated(&self) -> bool {
        self.state == MatchState::Terminated
    }

    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn score(&self) -> &Score {
        &self.score
    }

    pub fn time(&self) -> &Time {
        &self.time
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    fn entity(&self, side: Side) -> Entity {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn paddle(&self, side: Side) -> Option<Body> {
        self.world.get::<&Body>(self.entity(side)).ok().map(|b| *b)
    }

    pub fn ball(&self) -> Option<Body> {
        self.world.get::<&Body>(self.ball).ok().map(|b| *b)
    }

    /// Overwrite a paddle's body; its lane is kept
    pub fn set_paddle(&mut self, side: Side, body: Body) {
        let lane_x = self.config.paddle_lane(side);
        if let Ok(mut current) = self.world.get::<&mut Body>(self.entity(side)) {
            *current = Body {
                pos: glam::Vec2::new(lane_x, body.pos.y),
                ..body
            };
        }
    }

    pub fn set_ball(&mut self, body: Body) {
        if let Ok(mut current) = self.world.get::<&mut Body>(self.ball) {
            *current = body;
        }
    }
}
