//! Crop selection rectangle.
//!
//! A selection is drawn as a handle frame (the grabbable border) around a
//! body (the region that is actually cropped). The body is always the handle
//! frame inset by the handle thickness on every side.
//!
//! Pressing inside the body starts a move; pressing on the ring between the
//! body and the handle frame starts a resize. Both end on release.

use tracing::{debug, trace};
use vcrop_core::{
    round_px, Axis, Event, OverlayError, Point, PointerButton, PointerEvent, PointerKind, Rect,
    Size,
};

/// What the pointer is currently doing to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,

    /// Dragging the whole selection. `offset` is the handle frame's top-left
    /// corner relative to the grab point.
    Moving { offset: Point },

    /// Dragging the handle ring.
    Resizing,
}

/// Absolute edges of a selection. `right` and `bottom` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CropBounds {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl CropBounds {
    pub const fn new(left: i32, right: i32, top: i32, bottom: i32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn to_rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.width(), self.height())
    }
}

impl From<Rect> for CropBounds {
    fn from(rect: Rect) -> Self {
        Self::new(rect.left(), rect.right(), rect.top(), rect.bottom())
    }
}

/// An interactive crop selection over a surface.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionRect {
    surface: Size,
    handle_frame: Rect,
    body: Rect,
    thickness: i32,
    min: Size,
    max: Size,
    aspect_ratio: Option<f64>,
    state: DragState,
}

impl SelectionRect {
    /// Create a selection centered on `surface`.
    ///
    /// `initial` is clamped into `[min, max]` and, when an aspect ratio
    /// (width / height) is given, adjusted to match it.
    pub fn new(
        surface: Size,
        initial: Size,
        thickness: i32,
        min: Size,
        max: Size,
        aspect_ratio: Option<f64>,
    ) -> Result<Self, OverlayError> {
        if surface.is_empty() {
            return Err(OverlayError::EmptySurface {
                width: surface.width,
                height: surface.height,
            });
        }
        if thickness <= 0 {
            return Err(OverlayError::InvalidHandleThickness { thickness });
        }
        for axis in [Axis::Horizontal, Axis::Vertical] {
            let (lo, hi) = (min.get(axis), max.get(axis));
            if lo > hi {
                return Err(OverlayError::MinExceedsMax {
                    axis,
                    min: lo,
                    max: hi,
                });
            }
            if i64::from(lo) <= 2 * i64::from(thickness) {
                return Err(OverlayError::MinTooSmall {
                    axis,
                    min: lo,
                    thickness,
                });
            }
        }
        if let Some(ratio) = aspect_ratio {
            if !ratio.is_finite() || ratio <= 0.0 {
                return Err(OverlayError::InvalidAspectRatio { ratio });
            }
        }

        let mut extent = initial.clamp(min, max);
        if let Some(ratio) = aspect_ratio {
            extent = lock_aspect(extent, Axis::Horizontal, ratio, min, max);
        }
        let origin = Point::new(
            (surface.width - extent.width) / 2,
            (surface.height - extent.height) / 2,
        );
        let handle_frame = Rect::at(origin, extent);

        debug!(%surface, frame = ?handle_frame, thickness, "selection created");

        Ok(Self {
            surface,
            handle_frame,
            body: handle_frame.inset(thickness),
            thickness,
            min,
            max,
            aspect_ratio,
            state: DragState::Idle,
        })
    }

    /// Route an event from the application loop.
    pub fn on_event(&mut self, event: &Event) -> Result<(), OverlayError> {
        match event {
            Event::Pointer(pointer) => {
                self.handle(pointer);
                Ok(())
            }
            Event::Resize(surface) => self.resize(*surface),
        }
    }

    /// Route a pointer event. Only the primary button drags.
    pub fn handle(&mut self, event: &PointerEvent) {
        match event.kind {
            PointerKind::Down(PointerButton::Primary) => self.on_pointer_down(event.position),
            PointerKind::Up(PointerButton::Primary) => self.on_pointer_up(),
            PointerKind::Motion => self.on_pointer_move(event.position, event.delta),
            PointerKind::Down(_) | PointerKind::Up(_) => {}
        }
    }

    /// Classify a press as a move, a resize, or nothing.
    pub fn on_pointer_down(&mut self, position: Point) {
        self.state = if self.body.contains(position) {
            DragState::Moving {
                offset: self.handle_frame.top_left() - position,
            }
        } else if self.handle_frame.contains(position) {
            DragState::Resizing
        } else {
            DragState::Idle
        };
        trace!(?position, state = ?self.state, "pointer down");
    }

    pub fn on_pointer_move(&mut self, position: Point, delta: Point) {
        match self.state {
            DragState::Idle => {}
            DragState::Moving { offset } => self.move_to(position.saturating_add(offset)),
            DragState::Resizing => self.resize_step(position, delta),
        }
    }

    pub fn on_pointer_up(&mut self) {
        if self.state != DragState::Idle {
            trace!(state = ?self.state, "pointer up");
        }
        self.state = DragState::Idle;
    }

    fn move_to(&mut self, top_left: Point) {
        let reach = Point::new(self.surface.width, self.surface.height);
        self.handle_frame.set_top_left(top_left.clamp(-reach, reach));
        self.handle_frame = self.handle_frame.clamp_into(&self.bounds());
        self.combine_rects();
    }

    /// Grow or shrink around the center following one pointer motion.
    fn resize_step(&mut self, position: Point, delta: Point) {
        let frame = self.handle_frame;

        // Moving away from the center grows the selection, toward it shrinks.
        let right_half = position.x as f64 - frame.left() as f64 > frame.width as f64 / 2.0;
        let lower_half = position.y as f64 - frame.top() as f64 > frame.height as f64 / 2.0;
        let mut change = [
            if right_half { delta.x as i64 } else { -(delta.x as i64) },
            if lower_half { delta.y as i64 } else { -(delta.y as i64) },
        ];
        if change == [0, 0] {
            return;
        }

        // The axis carrying more weight leads; the other follows its change.
        let trusted = if (change[0] as f64 * self.aspect_ratio.unwrap_or(1.0)).abs()
            >= (change[1] as f64).abs()
        {
            Axis::Horizontal
        } else {
            Axis::Vertical
        };
        if let Some(ratio) = self.aspect_ratio {
            match trusted {
                Axis::Horizontal => change[1] = (change[0] as f64 / ratio).round() as i64,
                Axis::Vertical => change[0] = (change[1] as f64 * ratio).round() as i64,
            }
        }

        let mut target = frame.size();
        let mut clamped = None;
        for (axis, change) in [(Axis::Horizontal, change[0]), (Axis::Vertical, change[1])] {
            let wanted = change.saturating_mul(2);
            let growth = clamp_growth(
                frame.size().get(axis),
                wanted,
                self.min.get(axis),
                self.max.get(axis),
            );
            if i64::from(growth) != wanted && clamped.is_none() {
                clamped = Some(axis);
            }
            target.set(axis, frame.size().get(axis) + growth);
        }

        if let Some(ratio) = self.aspect_ratio {
            // A limit on either axis breaks the lock; re-derive from the limited
            // axis. Rounded changes drift, so snap back once a pixel off.
            if let Some(axis) = clamped {
                target = lock_aspect(target, axis, ratio, self.min, self.max);
            } else if aspect_error(target, ratio) > ratio.max(1.0) {
                target = lock_aspect(target, trusted, ratio, self.min, self.max);
            }
        }

        self.handle_frame = frame.inflate(target.width - frame.width, target.height - frame.height);
        self.combine_rects();
        self.handle_frame = self.handle_frame.clamp_into(&self.bounds());
        self.combine_rects();

        trace!(?change, frame = ?self.handle_frame, "resize step");
    }

    /// Re-derive the body from the handle frame.
    pub fn combine_rects(&mut self) {
        self.body = self.handle_frame.inset(self.thickness);
    }

    /// Absolute edges of the body.
    pub fn selection(&self) -> CropBounds {
        CropBounds::from(self.body)
    }

    /// Rescale the selection for a new surface extent, keeping its position
    /// and size proportional.
    pub fn resize(&mut self, surface: Size) -> Result<(), OverlayError> {
        if surface.is_empty() {
            return Err(OverlayError::EmptySurface {
                width: surface.width,
                height: surface.height,
            });
        }

        let sx = surface.width as f64 / self.surface.width as f64;
        let sy = surface.height as f64 / self.surface.height as f64;
        let frame = self.handle_frame;

        let mut extent = Size::new(
            round_px(frame.width as f64 * sx),
            round_px(frame.height as f64 * sy),
        )
        .clamp(self.min, self.max);
        if let Some(ratio) = self.aspect_ratio {
            extent = lock_aspect(extent, Axis::Horizontal, ratio, self.min, self.max);
        }
        let origin = Point::new(round_px(frame.x as f64 * sx), round_px(frame.y as f64 * sy));

        self.surface = surface;
        self.handle_frame = Rect::at(origin, extent).clamp_into(&self.bounds());
        self.combine_rects();

        debug!(%surface, frame = ?self.handle_frame, "selection rescaled");
        Ok(())
    }

    pub fn handle_frame(&self) -> Rect {
        self.handle_frame
    }

    pub fn body(&self) -> Rect {
        self.body
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_moving(&self) -> bool {
        matches!(self.state, DragState::Moving { .. })
    }

    pub fn is_resizing(&self) -> bool {
        self.state == DragState::Resizing
    }

    pub fn surface(&self) -> Size {
        self.surface
    }

    pub fn thickness(&self) -> i32 {
        self.thickness
    }

    pub fn min_extent(&self) -> Size {
        self.min
    }

    pub fn max_extent(&self) -> Size {
        self.max
    }

    pub fn aspect_ratio(&self) -> Option<f64> {
        self.aspect_ratio
    }

    fn bounds(&self) -> Rect {
        Rect::from_size(self.surface)
    }
}

/// Limit a growth so `extent + growth` stays in `[min, max]`.
///
/// A growth that would overshoot snaps to the limit. An extent already at or
/// beyond the limit in the direction of travel does not move.
fn clamp_growth(extent: i32, growth: i64, min: i32, max: i32) -> i32 {
    let (extent, min, max) = (i64::from(extent), i64::from(min), i64::from(max));
    let target = extent.saturating_add(growth);
    let clamped = if growth > 0 {
        if target <= max {
            growth
        } else if extent < max {
            max - extent
        } else {
            0
        }
    } else if growth < 0 {
        if target >= min {
            growth
        } else if extent > min {
            min - extent
        } else {
            0
        }
    } else {
        0
    };
    // `extent + clamped` lies in `[min, max]` or equals `extent`.
    clamped as i32
}

/// How far the width is from matching the height at `ratio`, in pixels.
fn aspect_error(size: Size, ratio: f64) -> f64 {
    (size.width as f64 - size.height as f64 * ratio).abs()
}

/// Derive the untrusted axis from the trusted one so the size matches
/// `ratio`. If that axis hits a limit, the trusted axis is re-derived from it.
fn lock_aspect(size: Size, trusted: Axis, ratio: f64, min: Size, max: Size) -> Size {
    let derive = |axis: Axis, from: i32| {
        let value = match axis {
            Axis::Horizontal => from as f64 * ratio,
            Axis::Vertical => from as f64 / ratio,
        };
        round_px(value)
    };

    let other = trusted.other();
    let mut locked = size;
    let derived = derive(other, size.get(trusted));
    let clamped = derived.clamp(min.get(other), max.get(other));
    locked.set(other, clamped);
    if clamped != derived {
        let retrusted = derive(trusted, clamped).clamp(min.get(trusted), max.get(trusted));
        locked.set(trusted, retrusted);
    }
    locked
}
