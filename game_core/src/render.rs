//! Render adapter seam
//!
//! The simulation never draws anything itself. Each frame it hands a model
//! transform and an opaque texture handle per body to a [`RenderAdapter`].

use std::path::Path;

use glam::{Mat4, Vec2, Vec3};
use hecs::World;

use crate::{AssetError, Ball, Body, Paddle, Params, Side};

/// Opaque texture identifier issued by an [`AssetLoader`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

/// Draws a textured unit quad with the given model transform
pub trait RenderAdapter {
    fn draw(&mut self, transform: &Mat4, texture: TextureHandle);
}

/// Turns an image path into a texture handle
pub trait AssetLoader {
    fn load_texture(&mut self, path: &Path) -> Result<TextureHandle, AssetError>;
}

/// Texture handles for every body
#[derive(Debug, Clone, Copy)]
pub struct Sprites {
    pub left_paddle: TextureHandle,
    pub right_paddle: TextureHandle,
    pub ball: TextureHandle,
}

impl Sprites {
    pub const PADDLE_PATH: &'static str = "textures/paddle.png";
    pub const BALL_PATH: &'static str = "textures/ball.png";

    /// Load every sprite. The first failure is returned as-is.
    pub fn load(loader: &mut impl AssetLoader) -> Result<Self, AssetError> {
        Ok(Self {
            left_paddle: loader.load_texture(Path::new(Self::PADDLE_PATH))?,
            right_paddle: loader.load_texture(Path::new(Self::PADDLE_PATH))?,
            ball: loader.load_texture(Path::new(Self::BALL_PATH))?,
        })
    }

    pub fn paddle(&self, side: Side) -> TextureHandle {
        match side {
            Side::Left => self.left_paddle,
            Side::Right => self.right_paddle,
        }
    }
}

/// Model matrix placing a unit quad at `pos`
pub fn model_matrix(pos: Vec2) -> Mat4 {
    Mat4::from_translation(pos.extend(0.0))
}

/// Fixed 2D orthographic camera
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub view: Mat4,
    pub projection: Mat4,
}

impl Camera {
    /// Camera centred on the origin showing `[-half_width, half_width]` by
    /// `[-half_height, half_height]`
    pub fn orthographic(half_width: f32, half_height: f32) -> Self {
        Self {
            view: Mat4::IDENTITY,
            projection: Mat4::orthographic_rh_gl(
                -half_width,
                half_width,
                -half_height,
                half_height,
                -1.0,
                1.0,
            ),
        }
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view
    }

    /// Clip-space position of a model transform's origin
    pub fn project(&self, transform: &Mat4) -> Vec3 {
        self.view_projection()
            .mul_mat4(transform)
            .project_point3(Vec3::ZERO)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::orthographic(Params::VIEW_HALF_WIDTH, Params::VIEW_HALF_HEIGHT)
    }
}

/// Issue one draw per body: right paddle, left paddle, then ball
pub fn draw_bodies(world: &World, sprites: &Sprites, adapter: &mut impl RenderAdapter) {
    let mut paddles: Vec<(Side, Vec2)> = world
        .query::<(&Paddle, &Body)>()
        .iter()
        .map(|(_e, (paddle, body))| (paddle.side, body.pos))
        .collect();
    paddles.sort_by_key(|(side, _)| *side == Side::Left);

    for (side, pos) in paddles {
        adapter.draw(&model_matrix(pos), sprites.paddle(side));
    }

    for (_e, (_ball, body)) in world.query::<(&Ball, &Body)>().iter() {
        adapter.draw(&model_matrix(body.pos), sprites.ball);
    }
}
