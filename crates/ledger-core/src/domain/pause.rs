//! Pause Gate
//!
//! Two-state machine with no terminal state:
//!
//! ```text
//! [Running] ──pause──→ [Paused]
//!     ↑                    │
//!     └──────unpause───────┘
//! ```

use super::errors::LedgerError;
use super::value_objects::PauseState;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PauseGate {
    state: PauseState,
}

impl PauseGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PauseState {
        self.state
    }

    pub fn is_paused(&self) -> bool {
        self.state.is_paused()
    }

    /// Fails with `LedgerPaused` while the gate is engaged.
    pub fn ensure_running(&self) -> Result<(), LedgerError> {
        if self.is_paused() {
            return Err(LedgerError::LedgerPaused);
        }
        Ok(())
    }

    pub fn pause(&mut self) -> Result<(), LedgerError> {
        if self.is_paused() {
            return Err(LedgerError::AlreadyPaused);
        }
        self.state = PauseState::Paused;
        Ok(())
    }

    pub fn unpause(&mut self) -> Result<(), LedgerError> {
        if !self.is_paused() {
            return Err(LedgerError::NotPaused);
        }
        self.state = PauseState::Running;
        Ok(())
    }

    pub(crate) fn from_state(state: PauseState) -> Self {
        Self { state }
    }
}
