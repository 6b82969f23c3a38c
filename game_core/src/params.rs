/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Playfield
    pub const MIN_X: f32 = -5.0;
    pub const MAX_X: f32 = 5.0;
    pub const MIN_Y: f32 = -3.0;
    pub const MAX_Y: f32 = 3.0;

    // Paddles
    pub const LEFT_PADDLE_X: f32 = -4.74;
    pub const RIGHT_PADDLE_X: f32 = 4.78;
    pub const PADDLE_START_Y: f32 = 0.0;
    pub const PADDLE_SPEED: f32 = 4.0; // units per second
    pub const PADDLE_HALF_EXTENT: f32 = 0.5;

    // Ball
    pub const BALL_SPEED: f32 = 1.5;
    pub const BALL_HALF_EXTENT: f32 = 0.5;
    /// Inclusive range each initial velocity component is drawn from
    pub const BALL_START_COMPONENT_MIN: i32 = -3;
    pub const BALL_START_COMPONENT_MAX: i32 = 1;

    // Collision margins
    pub const PADDLE_WALL_MARGIN: f32 = 0.035;
    pub const BALL_WALL_MARGIN: f32 = 0.1;
    pub const BALL_PADDLE_MARGIN: f32 = (0.65 + 0.65) / 2.0;

    // Scored rounds
    pub const WIN_SCORE: u8 = 5;

    // Camera
    pub const VIEW_HALF_WIDTH: f32 = 5.0;
    pub const VIEW_HALF_HEIGHT: f32 = 3.75;
}
