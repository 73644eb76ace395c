//! Turn-by-turn playback over the selected route's instructions
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ranking::RouteBoard;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum NavigationError {
    #[error("no routes available; find routes before starting navigation")]
    NoRoutes,
    #[error("the selected route has no instructions to follow")]
    NoSteps,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum NavigationState {
    #[default]
    Inactive,
    Active,
}

/// Inactive/active state machine with a cursor into the instruction list.
///
/// The cursor stays within `[0, steps - 1]` and is zero whenever inactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationStepper {
    state: NavigationState,
    cursor: usize,
}

impl NavigationStepper {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: NavigationState::Inactive,
            cursor: 0,
        }
    }

    #[must_use]
    pub const fn state(&self) -> NavigationState {
        self.state
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.state, NavigationState::Active)
    }

    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Begin navigating the selected route, selecting the first candidate if
    /// none was picked.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::NoRoutes`] when the board is empty and
    /// [`NavigationError::NoSteps`] when the route to follow has no
    /// instructions. Neither the board nor the stepper changes on error.
    pub fn start(&mut self, board: &mut RouteBoard) -> Result<usize, NavigationError> {
        let index = board.selected_index().unwrap_or(0);
        let route = board.routes().get(index).ok_or(NavigationError::NoRoutes)?;
        if route.steps.is_empty() {
            return Err(NavigationError::NoSteps);
        }
        let selected = board.select_default().ok_or(NavigationError::NoRoutes)?;
        self.state = NavigationState::Active;
        self.cursor = 0;
        Ok(selected)
    }

    /// Follow a different route from its first instruction.
    ///
    /// Navigation ends instead when the new route has no instructions, so the
    /// cursor always points at a real step while active.
    pub fn switch_route(&mut self, step_count: usize) {
        if !self.is_active() {
            return;
        }
        if step_count == 0 {
            self.stop();
        } else {
            self.cursor = 0;
        }
    }

    /// Move to the next instruction. No-op when inactive or on the last step.
    pub fn advance(&mut self, step_count: usize) -> bool {
        if !self.is_active() || self.cursor + 1 >= step_count {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn stop(&mut self) {
        self.state = NavigationState::Inactive;
        self.cursor = 0;
    }
}
