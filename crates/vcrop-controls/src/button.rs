//! Multi-state buttons.
//!
//! A button cycles through `1..=state_count` on each primary click. A
//! play/pause toggle is a two-state button starting at state 1.

use tracing::trace;
use vcrop_core::{PlaybackError, PointerButton, PointerEvent, PointerKind, Rect};

/// What a pointer event did to a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonResponse {
    HoverEntered,
    HoverLeft,
    /// Clicked; carries the new state.
    Clicked(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    bounds: Rect,
    state_count: usize,
    state: usize,
    hovered: bool,
    held: bool,
}

impl Button {
    pub fn new(bounds: Rect, state_count: usize, start_state: usize) -> Result<Self, PlaybackError> {
        if state_count == 0 {
            return Err(PlaybackError::NoStates { count: state_count });
        }
        if start_state == 0 || start_state > state_count {
            return Err(PlaybackError::InvalidStartState {
                state: start_state,
                count: state_count,
            });
        }
        Ok(Self {
            bounds,
            state_count,
            state: start_state,
            hovered: false,
            held: false,
        })
    }

    /// A two-state toggle starting at state 1.
    pub fn toggle(bounds: Rect) -> Self {
        Self {
            bounds,
            state_count: 2,
            state: 1,
            hovered: false,
            held: false,
        }
    }

    pub fn handle(&mut self, event: &PointerEvent) -> Option<ButtonResponse> {
        match event.kind {
            PointerKind::Motion => {
                let was_hovered = self.hovered;
                self.hovered = self.bounds.contains(event.position);
                match (was_hovered, self.hovered) {
                    (false, true) => Some(ButtonResponse::HoverEntered),
                    (true, false) => Some(ButtonResponse::HoverLeft),
                    _ => None,
                }
            }
            PointerKind::Down(PointerButton::Primary) if self.hovered => {
                self.held = true;
                let state = self.next_state();
                trace!(state, "button clicked");
                Some(ButtonResponse::Clicked(state))
            }
            PointerKind::Up(PointerButton::Primary) => {
                self.held = false;
                None
            }
            PointerKind::Down(_) | PointerKind::Up(_) => None,
        }
    }

    /// Move to the next state, wrapping to 1 after the last.
    pub fn next_state(&mut self) -> usize {
        self.state = if self.state >= self.state_count {
            1
        } else {
            self.state + 1
        };
        self.state
    }

    /// Set the state; returns false (and changes nothing) if out of range.
    pub fn set_state(&mut self, state: usize) -> bool {
        if state == 0 || state > self.state_count {
            return false;
        }
        self.state = state;
        true
    }

    pub fn state(&self) -> usize {
        self.state
    }

    pub fn state_count(&self) -> usize {
        self.state_count
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }
}
