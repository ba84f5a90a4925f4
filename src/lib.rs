// -- Lint policy ---------------------------------------------------------
// Crate-wide lints; Cargo.toml carries the matching workspace table.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
// Pixel coordinates (f64) and counters are narrowed to f32 on purpose
#![allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
// No panicking in library code
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]

//! Free-flying 6-degree-of-freedom camera.
//!
//! Flycam tracks a position and orientation, turns keyboard/mouse input
//! into translation and pitch/yaw/roll, and exposes a look-at view matrix
//! for rendering.
//!
//! # Key entry points
//!
//! - [`camera::Camera`] - the camera itself (quaternion orientation by
//!   default, [`camera::MatrixCamera`] for the matrix strategy)
//! - [`camera::Orientation`] - the rotation-composition interface
//! - [`options::Options`] - tuning values and key bindings, TOML presets
//! - [`input::InputProcessor`] - raw events to [`camera::CameraCommand`]s
//!
//! # Example
//!
//! ```
//! use flycam::camera::{Camera, Movement};
//! use flycam::options::CameraOptions;
//! use glam::Vec3;
//!
//! let options = CameraOptions::default();
//! let mut camera = Camera::new(Vec3::ZERO, Vec3::Y, &options);
//! camera.process_keyboard(Movement::Forward, 0.016);
//! camera.process_mouse_movement(120.0, -40.0, 0.0, true);
//! let view = camera.view_matrix();
//! # let _ = view;
//! ```

pub mod camera;
pub mod error;
pub mod input;
pub mod options;

pub use error::FlycamError;
