//! Error types for building and persisting N-body systems.
//!
//! Only construction, configuration and snapshot I/O can fail. Stepping and
//! diagnostics assume a validated state and never return errors.

use thiserror::Error;

/// Errors raised while validating a body collection, a configuration or a
/// snapshot file.
#[derive(Debug, Error)]
pub enum NBodyError {
    /// A body was given a zero, negative or non-finite mass
    #[error("body '{name}' has invalid mass {mass} kg (must be positive and finite)")]
    InvalidMass { name: String, mass: f64 },

    /// Position or velocity contains NaN or infinity
    #[error("body '{0}' has non-finite position or velocity")]
    NonFiniteKinematics(String),

    /// Bodies are matched by name, so every body needs one
    #[error("body at index {0} has an empty name")]
    EmptyName(usize),

    /// Two bodies share a name
    #[error("body name '{0}' is used more than once")]
    DuplicateName(String),

    /// The anchor attached to a body cannot be enforced
    #[error("anchor on body '{name}' is malformed: {reason}")]
    InvalidAnchor { name: String, reason: String },

    /// Lookup by name failed
    #[error("no body named '{0}'")]
    UnknownBody(String),

    /// A configuration value is out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl NBodyError {
    /// Creates an anchor error for the named body.
    pub fn anchor(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidAnchor {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Creates a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, NBodyError>;
