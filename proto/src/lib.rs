//! Frame snapshots for Pong runs
//!
//! Uses postcard for compact binary serialization. A frame log is a sequence
//! of COBS-encoded frames, each terminated by a zero byte.

use postcard::{from_bytes, from_bytes_cobs, to_allocvec, to_allocvec_cobs};
use serde::{Deserialize, Serialize};

/// Run state carried in a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    Running,
    Terminated,
}

/// One simulated frame, as handed to the renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub frame: u64,
    pub now: f32,
    pub dt: f32,
    pub paddle_left_y: f32,
    pub paddle_right_y: f32,
    pub ball_x: f32,
    pub ball_y: f32,
    pub ball_vx: f32,
    pub ball_vy: f32,
    pub score_left: u8,
    pub score_right: u8,
    pub state: RunState,
}

#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    #[error("frame codec error: {0}")]
    Codec(#[from] postcard::Error),
}

// ============================================================================
// Serialization Helpers
// ============================================================================

impl Frame {
    /// Serialize frame to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, FrameError> {
        Ok(to_allocvec(self)?)
    }

    /// Deserialize frame from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FrameError> {
        Ok(from_bytes(bytes)?)
    }
}

/// Encode frames as a zero-delimited log
pub fn encode_log(frames: &[Frame]) -> Result<Vec<u8>, FrameError> {
    let mut out = Vec::new();
    for frame in frames {
        out.extend(to_allocvec_cobs(frame)?);
    }
    Ok(out)
}

/// Decode a log written by [`encode_log`]. Trailing bytes without a
/// terminator are ignored.
pub fn decode_log(bytes: &[u8]) -> Result<Vec<Frame>, FrameError> {
    let mut frames = Vec::new();
    let mut rest = bytes;
    while let Some(end) = rest.iter().position(|b| *b == 0) {
        let mut chunk = rest[..=end].to_vec();
        frames.push(from_bytes_cobs(&mut chunk)?);
        rest = &rest[end + 1..];
    }
    Ok(frames)
}
