//! Input handling: event types, cursor tracking, and the input processor
//! that converts raw window events into camera commands.

use serde::{Deserialize, Serialize};

use crate::camera::Movement;

/// Platform-agnostic input events.
pub mod event;
/// Cursor position tracking.
pub(crate) mod mouse;
/// Converts raw events into camera commands.
pub mod processor;

pub use event::InputEvent;
pub use processor::InputProcessor;

/// Camera actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// move_forward = "KeyW"
/// roll_left = "KeyQ"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Hold to move forward.
    MoveForward,
    /// Hold to move backward.
    MoveBackward,
    /// Hold to strafe left.
    MoveLeft,
    /// Hold to strafe right.
    MoveRight,
    /// Hold to rise.
    MoveUp,
    /// Hold to sink.
    MoveDown,
    /// Hold to roll counter-clockwise.
    RollLeft,
    /// Hold to roll clockwise.
    RollRight,
}

impl KeyAction {
    /// The movement this action drives, if it is a movement action.
    #[must_use]
    pub const fn movement(self) -> Option<Movement> {
        match self {
            Self::MoveForward => Some(Movement::Forward),
            Self::MoveBackward => Some(Movement::Backward),
            Self::MoveLeft => Some(Movement::Left),
            Self::MoveRight => Some(Movement::Right),
            Self::MoveUp => Some(Movement::Up),
            Self::MoveDown => Some(Movement::Down),
            Self::RollLeft | Self::RollRight => None,
        }
    }
}

impl From<Movement> for KeyAction {
    fn from(movement: Movement) -> Self {
        match movement {
            Movement::Forward => Self::MoveForward,
            Movement::Backward => Self::MoveBackward,
            Movement::Left => Self::MoveLeft,
            Movement::Right => Self::MoveRight,
            Movement::Up => Self::MoveUp,
            Movement::Down => Self::MoveDown,
        }
    }
}
