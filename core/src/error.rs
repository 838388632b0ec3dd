use std::fmt;

use crate::types::{Key, Millis};

/// Rejected match configuration.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    ZeroCountdown,
    CountdownTooLong { secs: u32, max: u32 },
    ZeroFrameInterval,
    InvalidArena { width: f64, height: f64 },
    /// The same key is bound to more than one action.
    ConflictingBinding(Key),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroCountdown => write!(f, "countdown must be at least one second"),
            ConfigError::CountdownTooLong { secs, max } => {
                write!(f, "countdown of {secs} s exceeds the {max} s limit")
            }
            ConfigError::ZeroFrameInterval => write!(f, "frame interval must be at least 1 ms"),
            ConfigError::InvalidArena { width, height } => {
                write!(f, "arena must have a positive size, got {width}x{height}")
            }
            ConfigError::ConflictingBinding(key) => {
                write!(f, "key {:?} is bound to more than one action", key.event_key())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Rejected recorded session.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionError {
    Config(ConfigError),
    /// Event at `index` arrives before the one preceding it.
    OutOfOrder { index: usize, at_ms: Millis, previous_ms: Millis },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Config(e) => write!(f, "invalid session config: {e}"),
            SessionError::OutOfOrder {
                index,
                at_ms,
                previous_ms,
            } => write!(
                f,
                "event {index} at {at_ms} ms precedes previous event at {previous_ms} ms"
            ),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Config(e) => Some(e),
            SessionError::OutOfOrder { .. } => None,
        }
    }
}

impl From<ConfigError> for SessionError {
    fn from(e: ConfigError) -> Self {
        SessionError::Config(e)
    }
}
