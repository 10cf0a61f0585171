//! Handle lifecycle state machine

use crate::{Error, Result};

/// Handle lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleState {
    /// Constructed, options not loaded yet
    Uninitialized,

    /// Options loaded, no client held
    Configured,

    /// Client held and healthy as of the last check
    Connected,

    /// Last ping or connect failed, no client held
    Degraded,
}

impl HandleState {
    /// Check if transition is valid
    pub fn can_transition_to(&self, next: HandleState) -> bool {
        use HandleState::*;

        *self == next
            || matches!(
                (self, next),
                (Uninitialized, Configured)
                    | (Configured, Connected)
                    | (Configured, Degraded)
                    | (Connected, Degraded)
                    | (Connected, Configured)
                    | (Degraded, Connected)
                    | (Degraded, Configured)
            )
    }

    /// Transition to new state
    pub fn transition(&mut self, next: HandleState) -> Result<()> {
        if !self.can_transition_to(next) {
            return Err(Error::InvalidState {
                expected: format!("valid transition from {}", self),
                actual: next.to_string(),
            });
        }
        if *self != next {
            tracing::trace!(from = %self, to = %next, "handle state transition");
        }
        *self = next;
        Ok(())
    }

    /// Whether options have been loaded
    pub fn is_initialized(&self) -> bool {
        !matches!(self, Self::Uninitialized)
    }
}

impl std::fmt::Display for HandleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Uninitialized => write!(f, "uninitialized"),
            Self::Configured => write!(f, "configured"),
            Self::Connected => write!(f, "connected"),
            Self::Degraded => write!(f, "degraded"),
        }
    }
}
