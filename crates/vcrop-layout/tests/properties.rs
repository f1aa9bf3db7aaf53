//! Property tests for unit resolution and parent resizes.
//!
//! 1. Parent percentages without clamps resolve to the rounded product.
//! 2. Clamped percentages stay within [min, max].
//! 3. Resizing the parent twice to the same extent equals resizing once.
//! 4. Elements never leave the tracks they span when centered.

use proptest::prelude::*;
use vcrop_core::{round_px, Percentage, Size, Span, Unit};
use vcrop_layout::{share, Element, LayoutEngine};

fn ratio() -> impl Strategy<Value = f64> {
    (0u32..=1000).prop_map(|n| n as f64 / 1000.0)
}

fn engine(width: i32, height: i32, split: f64) -> LayoutEngine {
    LayoutEngine::new(
        Size::new(width, height),
        vec![share(split), share(1.0 - split)],
        vec![share(split), share(1.0 - split)],
        vec![
            Element::cell("fixed", 1, 1, 10, 10).unwrap(),
            Element::new(
                "wide",
                Span::new(0, 1).unwrap(),
                Span::single(0),
                Unit::percent_of_container(0.5),
                Unit::percent_of_parent(0.05),
            )
            .unwrap(),
            Element::cell(
                "video",
                1,
                0,
                Unit::aspect(16.0 / 9.0),
                Unit::percent_of_container(0.8),
            )
            .unwrap(),
        ],
    )
    .unwrap()
}

proptest! {
    #[test]
    fn parent_percentage_ignores_container(
        r in ratio(),
        parent in 0i32..10_000,
        container in 0i32..10_000,
    ) {
        let unit = Unit::percent_of_parent(r);
        prop_assert_eq!(unit.resolve(parent, container), Some(round_px(r * parent as f64)));
    }

    #[test]
    fn clamped_percentage_stays_in_range(
        r in ratio(),
        parent in 0i32..10_000,
        min in 0i32..500,
        extra in 0i32..500,
    ) {
        let max = min + extra;
        let resolved = Percentage::of_parent(r).with_min(min).with_max(max).resolve(parent, 0);
        prop_assert!(min <= resolved && resolved <= max, "{} not in [{}, {}]", resolved, min, max);
    }

    #[test]
    fn resize_is_idempotent(
        split in 1u32..10,
        width in 50i32..4000,
        height in 50i32..4000,
    ) {
        let split = split as f64 / 10.0;
        let mut once = engine(640, 480, split);
        let mut twice = engine(640, 480, split);

        once.resize_parent(Some(width), Some(height));
        twice.resize_parent(Some(width), Some(height));
        twice.resize_parent(Some(width), Some(height));

        for id in ["fixed", "wide", "video"] {
            prop_assert_eq!(once.position(id), twice.position(id));
            prop_assert_eq!(once.dimensions(id), twice.dimensions(id));
        }
    }

    #[test]
    fn centered_element_stays_in_its_cell(
        width in 100i32..4000,
        height in 100i32..4000,
    ) {
        let engine = engine(width, height, 0.5);
        let bounds = engine.bounds("fixed").unwrap();
        let column = engine.grid().offset_of(vcrop_core::Axis::Horizontal, 1);
        let row = engine.grid().offset_of(vcrop_core::Axis::Vertical, 1);
        prop_assert!(bounds.left() >= column);
        prop_assert!(bounds.top() >= row);
        prop_assert!(bounds.right() <= width);
        prop_assert!(bounds.bottom() <= height);
    }
}
