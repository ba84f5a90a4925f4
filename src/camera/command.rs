//! Discrete camera operations produced by an input layer.

use super::movement::Movement;

/// One camera mutation, as produced by
/// [`InputProcessor`](crate::input::InputProcessor) and applied with
/// [`Camera::execute`](super::Camera::execute).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraCommand {
    /// Translate along a camera axis for `delta_time` seconds.
    Move {
        /// Which way to move.
        movement: Movement,
        /// Frame time in seconds.
        delta_time: f32,
    },
    /// Rotate from raw mouse offsets (and optional roll).
    Rotate {
        /// Horizontal offset, drives yaw.
        xoffset: f32,
        /// Vertical offset, drives pitch.
        yoffset: f32,
        /// Roll offset; when non-zero it replaces yaw.
        zspin: f32,
        /// Clamp pitch short of straight up/down.
        constrain_pitch: bool,
    },
    /// Scroll-wheel delta (adjusts movement speed).
    Scroll {
        /// Signed wheel offset.
        delta: f32,
    },
}
