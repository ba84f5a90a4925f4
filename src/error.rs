//! Crate-level error types.

use std::fmt;

use glam::Vec3;

/// Errors produced by the flycam crate.
#[derive(Debug)]
pub enum FlycamError {
    /// Rotation axis with zero length (or non-finite components), which has
    /// no direction to rotate about.
    DegenerateAxis(Vec3),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for FlycamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateAxis(axis) => {
                write!(f, "degenerate rotation axis: {axis}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for FlycamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FlycamError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
