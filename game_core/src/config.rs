use glam::Vec2;

use crate::{ConfigError, Params, Side};

/// When a ball inside a collision margin has its velocity flipped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReflectionRule {
    /// Flip on every frame the ball overlaps, regardless of direction
    #[default]
    EveryFrame,
    /// Flip only while the ball is still moving toward the wall or paddle
    Approaching,
}

/// What happens when the ball leaves the playfield
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EndRule {
    /// The first exit ends the run
    #[default]
    EndRun,
    /// The far side scores and the ball respawns until a side reaches `win_score`
    ScoredRounds { win_score: u8 },
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
    pub left_paddle_x: f32,
    pub right_paddle_x: f32,
    pub paddle_start_y: f32,
    pub paddle_speed: f32,
    pub paddle_half_extent: Vec2,
    pub ball_speed: f32,
    pub ball_half_extent: Vec2,
    pub paddle_wall_margin: f32,
    pub ball_wall_margin: f32,
    pub ball_paddle_margin: f32,
    pub reflection: ReflectionRule,
    pub end_rule: EndRule,
    /// Upper bound applied to each frame's delta time (none by default)
    pub max_dt: Option<f32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_x: Params::MIN_X,
            max_x: Params::MAX_X,
            min_y: Params::MIN_Y,
            max_y: Params::MAX_Y,
            left_paddle_x: Params::LEFT_PADDLE_X,
            right_paddle_x: Params::RIGHT_PADDLE_X,
            paddle_start_y: Params::PADDLE_START_Y,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_half_extent: Vec2::splat(Params::PADDLE_HALF_EXTENT),
            ball_speed: Params::BALL_SPEED,
            ball_half_extent: Vec2::splat(Params::BALL_HALF_EXTENT),
            paddle_wall_margin: Params::PADDLE_WALL_MARGIN,
            ball_wall_margin: Params::BALL_WALL_MARGIN,
            ball_paddle_margin: Params::BALL_PADDLE_MARGIN,
            reflection: ReflectionRule::default(),
            end_rule: EndRule::default(),
            max_dt: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixed X coordinate of a paddle's lane
    pub fn paddle_lane(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.left_paddle_x,
            Side::Right => self.right_paddle_x,
        }
    }

    /// Initial position of a paddle
    pub fn paddle_start(&self, side: Side) -> Vec2 {
        Vec2::new(self.paddle_lane(side), self.paddle_start_y)
    }

    /// Centre of the playfield, where the ball starts
    pub fn ball_start(&self) -> Vec2 {
        Vec2::ZERO
    }

    /// True if `x` lies outside the horizontal playfield bounds
    pub fn is_out_of_bounds_x(&self, x: f32) -> bool {
        x > self.max_x || x < self.min_x
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.min_x < self.max_x) || !(self.min_y < self.max_y) {
            return Err(ConfigError::InvertedBounds {
                min_x: self.min_x,
                max_x: self.max_x,
                min_y: self.min_y,
                max_y: self.max_y,
            });
        }
        for (name, speed) in [("paddle", self.paddle_speed), ("ball", self.ball_speed)] {
            if !(speed > 0.0) {
                return Err(ConfigError::NonPositiveSpeed { body: name, speed });
            }
        }
        for (name, margin) in [
            ("paddle-wall", self.paddle_wall_margin),
            ("ball-wall", self.ball_wall_margin),
            ("ball-paddle", self.ball_paddle_margin),
        ] {
            if !(margin >= 0.0) {
                return Err(ConfigError::NegativeMargin { pair: name, margin });
            }
        }
        if let EndRule::ScoredRounds { win_score: 0 } = self.end_rule {
            return Err(ConfigError::ZeroWinScore);
        }
        if let Some(max_dt) = self.max_dt {
            if !(max_dt > 0.0) {
                return Err(ConfigError::NonPositiveDtCap(max_dt));
            }
        }
        Ok(())
    }
}
