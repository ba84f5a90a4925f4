//! Free-flying camera.
//!
//! Provides a 6-DoF camera with keyboard translation, mouse pitch/yaw/roll,
//! scroll-driven speed and a look-at view matrix, over a pluggable
//! orientation representation.

/// Commands an input layer hands to the camera.
pub mod command;
/// Core camera struct and GPU uniform types.
pub mod core;
/// Movement directions along the camera axes.
pub mod movement;
/// Quaternion and matrix orientation strategies.
pub mod orientation;

pub use command::CameraCommand;
pub use self::core::{Camera, CameraUniform, MatrixCamera};
pub use movement::Movement;
pub use orientation::{Basis, MatrixOrientation, Orientation, QuatOrientation};
