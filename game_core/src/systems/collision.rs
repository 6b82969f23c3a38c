use crate::{Ball, Body, Config, Events, Paddle, ReflectionRule, Side};
use hecs::World;
use tracing::debug;

/// Distances from a body to the top and bottom walls, minus a margin.
/// Negative means the body is inside the wall zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallGaps {
    pub top: f32,
    pub bottom: f32,
}

impl WallGaps {
    pub fn measure(y: f32, config: &Config, margin: f32) -> Self {
        Self {
            top: (y - config.max_y).abs() - margin,
            bottom: (y - config.min_y).abs() - margin,
        }
    }
}

/// Per-axis distance from the ball to a paddle, minus the ball-paddle margin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleGap {
    pub side: Side,
    pub dx: f32,
    pub dy: f32,
}

impl PaddleGap {
    pub fn overlapping(&self) -> bool {
        self.dx < 0.0 && self.dy < 0.0
    }
}

/// All gaps for one step, measured before anything moves
#[derive(Debug, Clone, Default)]
pub struct Contacts {
    pub paddle_walls: Vec<(Side, WallGaps)>,
    pub ball_walls: Option<WallGaps>,
    pub ball_paddles: Vec<PaddleGap>,
}

impl Contacts {
    pub fn paddle_walls(&self, side: Side) -> Option<WallGaps> {
        self.paddle_walls
            .iter()
            .find(|(s, _)| *s == side)
            .map(|(_, gaps)| *gaps)
    }
}

/// Snapshot every gap the step needs from the current positions
pub fn measure_contacts(world: &World, config: &Config) -> Contacts {
    let mut paddles: Vec<(Side, f32, f32)> = world
        .query::<(&Paddle, &Body)>()
        .iter()
        .map(|(_e, (paddle, body))| (paddle.side, paddle.lane_x, body.pos.y))
        .collect();
    // Left before right, matching the order the reflections are applied
    paddles.sort_by_key(|(side, _, _)| *side == Side::Right);

    let paddle_walls = paddles
        .iter()
        .map(|&(side, _, y)| (side, WallGaps::measure(y, config, config.paddle_wall_margin)))
        .collect();

    let ball_pos = {
        let mut ball_query = world.query::<(&Ball, &Body)>();
        ball_query.iter().next().map(|(_e, (_ball, body))| body.pos)
    };

    let (ball_walls, ball_paddles) = match ball_pos {
        Some(pos) => {
            let walls = WallGaps::measure(pos.y, config, config.ball_wall_margin);
            let gaps = paddles
                .iter()
                .map(|&(side, lane_x, y)| PaddleGap {
                    side,
                    dx: (pos.x - lane_x).abs() - config.ball_paddle_margin,
                    dy: (pos.y - y).abs() - config.ball_paddle_margin,
                })
                .collect();
            (Some(walls), gaps)
        }
        None => (None, Vec::new()),
    };

    Contacts {
        paddle_walls,
        ball_walls,
        ball_paddles,
    }
}

/// Zero any paddle velocity that would carry it further into a wall it is
/// already inside. Never pushes a paddle back out.
pub fn clamp_paddles_at_walls(world: &mut World, contacts: &Contacts) {
    for (_entity, (paddle, body)) in world.query_mut::<(&Paddle, &mut Body)>() {
        let Some(gaps) = contacts.paddle_walls(paddle.side) else {
            continue;
        };
        if gaps.top < 0.0 && body.vel.y > 0.0 {
            body.vel.y = 0.0;
        }
        if gaps.bottom < 0.0 && body.vel.y < 0.0 {
            body.vel.y = 0.0;
        }
    }
}

/// Flip the ball's Y velocity for each wall zone it is inside
pub fn bounce_ball_off_walls(
    world: &mut World,
    contacts: &Contacts,
    config: &Config,
    events: &mut Events,
) {
    let Some(gaps) = contacts.ball_walls else {
        return; // No ball in world
    };

    for (_entity, (_ball, body)) in world.query_mut::<(&Ball, &mut Body)>() {
        if gaps.top < 0.0 && should_flip(config.reflection, body.vel.y > 0.0) {
            body.vel.y = -body.vel.y;
            events.ball_hit_wall = true;
            debug!(y = body.pos.y, vy = body.vel.y, "ball bounced off top wall");
        }
        if gaps.bottom < 0.0 && should_flip(config.reflection, body.vel.y < 0.0) {
            body.vel.y = -body.vel.y;
            events.ball_hit_wall = true;
            debug!(y = body.pos.y, vy = body.vel.y, "ball bounced off bottom wall");
        }
    }
}

/// Flip the ball's X velocity for each paddle it overlaps on both axes.
/// Y velocity and position are left alone.
pub fn bounce_ball_off_paddles(
    world: &mut World,
    contacts: &Contacts,
    config: &Config,
    events: &mut Events,
) {
    for (_entity, (_ball, body)) in world.query_mut::<(&Ball, &mut Body)>() {
        for gap in contacts.ball_paddles.iter().filter(|g| g.overlapping()) {
            let approaching = match gap.side {
                Side::Left => body.vel.x < 0.0,
                Side::Right => body.vel.x > 0.0,
            };
            if should_flip(config.reflection, approaching) {
                body.vel.x = -body.vel.x;
                events.ball_hit_paddle = Some(gap.side);
                debug!(side = ?gap.side, vx = body.vel.x, "ball bounced off paddle");
            }
        }
    }
}

fn should_flip(rule: ReflectionRule, approaching: bool) -> bool {
    match rule {
        ReflectionRule::EveryFrame => true,
        ReflectionRule::Approaching => approaching,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Config, Events};
    use glam::Vec2;

    fn setup_world() -> (hecs::World, Config, Events) {
        (hecs::World::new(), Config::new(), Events::new())
    }

    fn ball_body(world: &hecs::World) -> Body {
        let mut query = world.query::<(&Ball, &Body)>();
        let (_e, (_ball, body)) = query.iter().next().expect("ball exists");
        *body
    }

    #[test]
    fn test_wall_gaps_arithmetic() {
        let config = Config::new();
        let gaps = WallGaps::measure(2.9, &config, 0.035);
        assert!((gaps.top - 0.065).abs() < 1e-5);
        assert!((gaps.bottom - 5.865).abs() < 1e-5);
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let (mut world, config, mut events) = setup_world();
        let ball_vel = Vec2::new(0.6, 0.8); // Moving up
        create_ball(&mut world, &config, Vec2::new(0.0, 2.95), ball_vel);

        let contacts = measure_contacts(&world, &config);
        bounce_ball_off_walls(&mut world, &contacts, &config, &mut events);

        let ball = ball_body(&world);
        assert_eq!(ball.vel.y, -0.8, "Y velocity should be negated");
        assert_eq!(ball.vel.x, ball_vel.x, "X velocity should be unchanged");
        assert_eq!(ball.pos.y, 2.95, "No push-out");
        assert!(events.ball_hit_wall, "Should trigger ball_hit_wall event");
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, &config, Vec2::new(1.0, -2.95), Vec2::new(0.6, -0.8));

        let contacts = measure_contacts(&world, &config);
        bounce_ball_off_walls(&mut world, &contacts, &config, &mut events);

        assert!(ball_body(&world).vel.y > 0.0, "Ball should bounce up");
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_ball_away_from_walls_keeps_velocity() {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, &config, Vec2::new(0.0, 2.85), Vec2::new(0.6, 0.8));

        let contacts = measure_contacts(&world, &config);
        bounce_ball_off_walls(&mut world, &contacts, &config, &mut events);

        assert_eq!(ball_body(&world).vel, Vec2::new(0.6, 0.8));
        assert!(!events.ball_hit_wall);
    }

    #[test]
    fn test_every_frame_rule_reflips_ball_leaving_wall_zone() {
        let (mut world, config, mut events) = setup_world();
        // Already moving away from the top wall but still inside the margin
        create_ball(&mut world, &config, Vec2::new(0.0, 2.95), Vec2::new(0.6, -0.8));

        let contacts = measure_contacts(&world, &config);
        bounce_ball_off_walls(&mut world, &contacts, &config, &mut events);

        assert_eq!(
            ball_body(&world).vel.y,
            0.8,
            "Sticky flip sends the ball back into the wall"
        );
    }

    #[test]
    fn test_approaching_rule_ignores_ball_leaving_wall_zone() {
        let (mut world, mut config, mut events) = setup_world();
        config.reflection = ReflectionRule::Approaching;
        create_ball(&mut world, &config, Vec2::new(0.0, 2.95), Vec2::new(0.6, -0.8));

        let contacts = measure_contacts(&world, &config);
        bounce_ball_off_walls(&mut world, &contacts, &config, &mut events);

        assert_eq!(ball_body(&world).vel.y, -0.8);
        assert!(!events.ball_hit_wall);
    }

    #[test]
    fn test_ball_collides_with_left_paddle() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, &config, Side::Left);
        let ball_vel = Vec2::new(-0.8, 0.6);
        create_ball(&mut world, &config, Vec2::new(-4.3, 0.4), ball_vel);

        let contacts = measure_contacts(&world, &config);
        bounce_ball_off_paddles(&mut world, &contacts, &config, &mut events);

        let ball = ball_body(&world);
        assert_eq!(ball.vel.x, 0.8, "X velocity should be negated");
        assert_eq!(ball.vel.y, ball_vel.y, "Y velocity should be unchanged");
        assert_eq!(ball.pos, Vec2::new(-4.3, 0.4), "No push-out");
        assert_eq!(events.ball_hit_paddle, Some(Side::Left));
    }

    #[test]
    fn test_ball_collides_with_right_paddle() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, &config, Side::Right);
        create_ball(&mut world, &config, Vec2::new(4.3, -0.4), Vec2::new(1.0, 0.0));

        let contacts = measure_contacts(&world, &config);
        bounce_ball_off_paddles(&mut world, &contacts, &config, &mut events);

        assert_eq!(ball_body(&world).vel.x, -1.0);
        assert_eq!(events.ball_hit_paddle, Some(Side::Right));
    }

    #[test]
    fn test_ball_needs_overlap_on_both_axes() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, &config, Side::Left);
        // Inside the x margin, outside the y margin
        create_ball(&mut world, &config, Vec2::new(-4.3, 0.7), Vec2::new(-1.0, 0.0));

        let contacts = measure_contacts(&world, &config);
        bounce_ball_off_paddles(&mut world, &contacts, &config, &mut events);

        assert_eq!(ball_body(&world).vel.x, -1.0);
        assert_eq!(events.ball_hit_paddle, None);
    }

    #[test]
    fn test_approaching_rule_ignores_ball_moving_away_from_paddle() {
        let (mut world, mut config, mut events) = setup_world();
        config.reflection = ReflectionRule::Approaching;
        create_paddle(&mut world, &config, Side::Left);
        create_ball(&mut world, &config, Vec2::new(-4.3, 0.0), Vec2::new(1.0, 0.0));

        let contacts = measure_contacts(&world, &config);
        bounce_ball_off_paddles(&mut world, &contacts, &config, &mut events);

        assert_eq!(ball_body(&world).vel.x, 1.0, "Ball should not bounce when moving away");
        assert_eq!(events.ball_hit_paddle, None);
    }

    #[test]
    fn test_paddle_clamp_is_ingress_only() {
        let (mut world, config, _events) = setup_world();
        let paddle = create_paddle(&mut world, &config, Side::Right);
        {
            let mut body = world.get::<&mut Body>(paddle).unwrap();
            body.pos.y = 2.98; // top gap = 0.02 - 0.035 < 0
            body.vel = Vec2::Y;
        }

        let contacts = measure_contacts(&world, &config);
        clamp_paddles_at_walls(&mut world, &contacts);
        assert_eq!(world.get::<&Body>(paddle).unwrap().vel.y, 0.0, "Ingress is stopped");

        world.get::<&mut Body>(paddle).unwrap().vel = -Vec2::Y;
        clamp_paddles_at_walls(&mut world, &contacts);
        assert_eq!(
            world.get::<&Body>(paddle).unwrap().vel.y,
            -1.0,
            "Moving away from the wall is allowed"
        );
    }

    #[test]
    fn test_paddle_past_wall_is_not_clamped() {
        let (mut world, config, _events) = setup_world();
        let paddle = create_paddle(&mut world, &config, Side::Left);
        {
            let mut body = world.get::<&mut Body>(paddle).unwrap();
            body.pos.y = 3.3; // past the wall, gap is positive again
            body.vel = Vec2::Y;
        }

        let contacts = measure_contacts(&world, &config);
        clamp_paddles_at_walls(&mut world, &contacts);

        assert_eq!(world.get::<&Body>(paddle).unwrap().vel.y, 1.0);
    }

    #[test]
    fn test_no_collision_when_no_ball() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, &config, Side::Left);

        let contacts = measure_contacts(&world, &config);
        bounce_ball_off_walls(&mut world, &contacts, &config, &mut events);
        bounce_ball_off_paddles(&mut world, &contacts, &config, &mut events);

        assert_eq!(events, Events::default());
    }
}
