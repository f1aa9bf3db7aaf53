//! Property tests for the crop selection.
//!
//! 1. The body stays inset by the handle thickness after any drag.
//! 2. The handle frame stays within [min, max] after any resize drag.
//! 3. An aspect-locked selection keeps its ratio within a pixel.
//! 4. Pointer handlers accept any coordinates without overflowing.
//! 5. Mapping a selection into source pixels and back is off by at most one.

use proptest::prelude::*;
use vcrop_core::{Point, Size};
use vcrop_overlay::{CropBounds, FrameFit, SelectionRect};

const SURFACE: Size = Size::new(640, 480);
const MIN: Size = Size::new(50, 50);
const MAX: Size = Size::new(300, 300);

/// One pointer motion: where it ended up and how far it moved.
fn motion() -> impl Strategy<Value = (Point, Point)> {
    (0i32..640, 0i32..480, -40i32..=40, -40i32..=40)
        .prop_map(|(x, y, dx, dy)| (Point::new(x, y), Point::new(dx, dy)))
}

/// Start a resize by pressing just inside the handle frame's right edge.
fn grab_handle(selection: &mut SelectionRect) {
    let frame = selection.handle_frame();
    selection.on_pointer_down(Point::new(frame.right() - 1, frame.top() + frame.height / 2));
}

proptest! {
    #[test]
    fn body_stays_inset(
        thickness in 1i32..20,
        motions in proptest::collection::vec(motion(), 1..40),
        moving in any::<bool>(),
    ) {
        let mut selection =
            SelectionRect::new(SURFACE, Size::new(150, 120), thickness, MIN, MAX, None).unwrap();
        if moving {
            let frame = selection.handle_frame();
            selection.on_pointer_down(Point::new(frame.x + frame.width / 2, frame.y + frame.height / 2));
        } else {
            grab_handle(&mut selection);
        }

        for (position, delta) in motions {
            selection.on_pointer_move(position, delta);
            let frame = selection.handle_frame();
            let body = selection.body();
            prop_assert_eq!(body.width, frame.width - 2 * thickness);
            prop_assert_eq!(body.height, frame.height - 2 * thickness);
            prop_assert_eq!(body.x, frame.x + thickness);
            prop_assert_eq!(body.y, frame.y + thickness);
        }
    }

    #[test]
    fn resize_respects_limits(motions in proptest::collection::vec(motion(), 1..40)) {
        let mut selection =
            SelectionRect::new(SURFACE, Size::new(150, 120), 10, MIN, MAX, None).unwrap();
        grab_handle(&mut selection);
        prop_assert!(selection.is_resizing());

        for (position, delta) in motions {
            selection.on_pointer_move(position, delta);
            let size = selection.handle_frame().size();
            prop_assert!(MIN.width <= size.width && size.width <= MAX.width, "width {}", size.width);
            prop_assert!(MIN.height <= size.height && size.height <= MAX.height, "height {}", size.height);
        }
    }

    #[test]
    fn aspect_lock_holds(
        ratio in 0.5f64..2.0,
        motions in proptest::collection::vec(motion(), 1..40),
    ) {
        let mut selection =
            SelectionRect::new(SURFACE, Size::new(150, 150), 10, MIN, MAX, Some(ratio)).unwrap();
        grab_handle(&mut selection);

        for (position, delta) in motions {
            selection.on_pointer_move(position, delta);
            let size = selection.handle_frame().size();
            let actual = size.width as f64 / size.height as f64;
            prop_assert!((actual - ratio).abs() <= 1.0, "{} vs {}", actual, ratio);
            // one rounded axis is at most half a pixel (scaled) off
            let error = (size.width as f64 - size.height as f64 * ratio).abs();
            prop_assert!(error <= ratio.max(1.0), "{:?} at ratio {}", size, ratio);
        }
    }

    #[test]
    fn extreme_motions_stay_in_limits(
        locked in any::<bool>(),
        motions in proptest::collection::vec(
            (any::<i32>(), any::<i32>(), any::<i32>(), any::<i32>()),
            1..20,
        ),
    ) {
        let ratio = locked.then_some(1.25);
        let mut selection =
            SelectionRect::new(SURFACE, Size::new(150, 120), 10, MIN, MAX, ratio).unwrap();
        grab_handle(&mut selection);

        for (x, y, dx, dy) in motions {
            selection.on_pointer_move(Point::new(x, y), Point::new(dx, dy));
            let size = selection.handle_frame().size();
            prop_assert!(MIN.width <= size.width && size.width <= MAX.width);
            prop_assert!(MIN.height <= size.height && size.height <= MAX.height);
        }
    }

    #[test]
    fn source_mapping_round_trips(
        source_w in 640i32..4000,
        source_h in 480i32..4000,
        left in 0i32..100,
        top in 0i32..100,
        w in 1i32..200,
        h in 1i32..200,
    ) {
        let fit = FrameFit::new(Size::new(640, 480), Size::new(source_w, source_h)).unwrap();
        let placement = fit.placement();
        let bounds = CropBounds::new(
            left.min(placement.width),
            (left + w).min(placement.width),
            top.min(placement.height),
            (top + h).min(placement.height),
        );

        let back = fit.to_overlay(fit.to_source(bounds));
        prop_assert!((back.left - bounds.left).abs() <= 1);
        prop_assert!((back.right - bounds.right).abs() <= 1);
        prop_assert!((back.top - bounds.top).abs() <= 1);
        prop_assert!((back.bottom - bounds.bottom).abs() <= 1);
    }
}
