use std::path::PathBuf;

use thiserror::Error;

/// Rejected simulation configuration
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("playfield bounds are inverted: x [{min_x}, {max_x}], y [{min_y}, {max_y}]")]
    InvertedBounds {
        min_x: f32,
        max_x: f32,
        min_y: f32,
        max_y: f32,
    },
    #[error("{body} speed must be positive, got {speed}")]
    NonPositiveSpeed { body: &'static str, speed: f32 },
    #[error("{pair} collision margin must be non-negative, got {margin}")]
    NegativeMargin { pair: &'static str, margin: f32 },
    #[error("scored rounds need a win score of at least 1")]
    ZeroWinScore,
    #[error("delta time cap must be positive, got {0}")]
    NonPositiveDtCap(f32),
}

/// Texture could not be turned into a handle
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("unable to load image {}: make sure the path is correct", path.display())]
    Missing { path: PathBuf },
    #[error("unable to read image {}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
