//! Input events consumed by the layout and overlay state machines.
//!
//! Positions are in the coordinate space of the surface that receives the
//! event. `delta` is the motion since the previous pointer event, as reported
//! by the windowing layer.

use crate::geometry::{Point, Size};

/// An input event from the application loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A pointer event.
    Pointer(PointerEvent),

    /// The window or surface was resized.
    Resize(Size),
}

/// A pointer (mouse) event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub position: Point,
    pub delta: Point,
}

impl PointerEvent {
    pub const fn new(kind: PointerKind, position: Point) -> Self {
        Self {
            kind,
            position,
            delta: Point::ZERO,
        }
    }

    /// A button press at `position`.
    pub const fn down(button: PointerButton, position: Point) -> Self {
        Self::new(PointerKind::Down(button), position)
    }

    /// A button release at `position`.
    pub const fn up(button: PointerButton, position: Point) -> Self {
        Self::new(PointerKind::Up(button), position)
    }

    /// Motion to `position`, having moved by `delta`.
    pub const fn motion(position: Point, delta: Point) -> Self {
        Self {
            kind: PointerKind::Motion,
            position,
            delta,
        }
    }

    /// The button involved in a press or release.
    pub fn button(&self) -> Option<PointerButton> {
        match self.kind {
            PointerKind::Down(button) | PointerKind::Up(button) => Some(button),
            PointerKind::Motion => None,
        }
    }
}

/// The type of pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// Button pressed down.
    Down(PointerButton),

    /// Button released.
    Up(PointerButton),

    /// Pointer moved, with or without a button held.
    Motion,
}

/// Pointer button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Left mouse button.
    Primary,

    /// Middle mouse button (scroll wheel click).
    Middle,

    /// Right mouse button.
    Secondary,

    /// Any other numbered button.
    Other(u8),
}

impl PointerButton {
    /// Map a numeric button id (1 = left, 2 = middle, 3 = right).
    pub fn from_id(id: u8) -> Self {
        match id {
            1 => PointerButton::Primary,
            2 => PointerButton::Middle,
            3 => PointerButton::Secondary,
            other => PointerButton::Other(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_ids() {
        assert_eq!(PointerButton::from_id(1), PointerButton::Primary);
        assert_eq!(PointerButton::from_id(3), PointerButton::Secondary);
        assert_eq!(PointerButton::from_id(7), PointerButton::Other(7));
    }

    #[test]
    fn test_event_constructors() {
        let down = PointerEvent::down(PointerButton::Primary, Point::new(4, 5));
        assert_eq!(down.button(), Some(PointerButton::Primary));
        assert_eq!(down.delta, Point::ZERO);

        let motion = PointerEvent::motion(Point::new(10, 10), Point::new(2, -1));
        assert_eq!(motion.kind, PointerKind::Motion);
        assert_eq!(motion.button(), None);
        assert_eq!(motion.delta, Point::new(2, -1));
    }
}
