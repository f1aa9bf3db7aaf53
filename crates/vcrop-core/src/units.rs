//! Sizing units and grid spans.

use crate::errors::LayoutError;
use crate::geometry::Axis;

/// Round a fractional pixel value to the nearest whole pixel.
///
/// Halves round away from zero.
pub fn round_px(value: f64) -> i32 {
    value.round() as i32
}

/// What a percentage is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RelativeTo {
    /// The shared parent surface extent
    Parent,
    /// The combined extent of the tracks an element spans
    #[default]
    Container,
}

/// A relative size with optional clamping.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Percentage {
    /// Fraction of the reference extent (0.5 = half)
    pub ratio: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub relative_to: RelativeTo,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub min: Option<i32>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub max: Option<i32>,
}

impl Percentage {
    /// A percentage of the parent surface.
    pub fn of_parent(ratio: f64) -> Self {
        Self {
            ratio,
            relative_to: RelativeTo::Parent,
            min: None,
            max: None,
        }
    }

    /// A percentage of the spanned tracks.
    pub fn of_container(ratio: f64) -> Self {
        Self {
            ratio,
            relative_to: RelativeTo::Container,
            min: None,
            max: None,
        }
    }

    /// Set a lower bound.
    pub fn with_min(mut self, min: i32) -> Self {
        self.min = Some(min);
        self
    }

    /// Set an upper bound.
    pub fn with_max(mut self, max: i32) -> Self {
        self.max = Some(max);
        self
    }

    /// Resolve against the parent and container extents.
    ///
    /// The maximum is checked before the minimum, so with `min > max` the
    /// maximum wins for large values.
    pub fn resolve(&self, parent: i32, container: i32) -> i32 {
        let reference = match self.relative_to {
            RelativeTo::Parent => parent,
            RelativeTo::Container => container,
        };
        let raw = self.ratio * reference as f64;

        match (self.min, self.max) {
            (_, Some(max)) if raw > max as f64 => max,
            (Some(min), _) if raw < min as f64 => min,
            _ => round_px(raw),
        }
    }
}

/// A sizing rule for a track, an element dimension, or a margin.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "serde_repr::UnitRepr", into = "serde_repr::UnitRepr"))]
pub enum Unit {
    /// An exact size in pixels
    Absolute(i32),
    /// A fraction of the parent or container extent
    Percentage(Percentage),
    /// A multiple of the element's extent on the other axis
    AspectMultiplier(f64),
}

impl Unit {
    pub fn percent_of_parent(ratio: f64) -> Self {
        Unit::Percentage(Percentage::of_parent(ratio))
    }

    pub fn percent_of_container(ratio: f64) -> Self {
        Unit::Percentage(Percentage::of_container(ratio))
    }

    pub fn aspect(factor: f64) -> Self {
        Unit::AspectMultiplier(factor)
    }

    /// Resolve to whole pixels.
    ///
    /// Returns `None` for [`Unit::AspectMultiplier`], which can only be
    /// resolved by the element that owns it, once its other axis is known.
    pub fn resolve(&self, parent: i32, container: i32) -> Option<i32> {
        match self {
            Unit::Absolute(value) => Some(*value),
            Unit::Percentage(percentage) => Some(percentage.resolve(parent, container)),
            Unit::AspectMultiplier(_) => None,
        }
    }

    pub fn is_aspect(&self) -> bool {
        matches!(self, Unit::AspectMultiplier(_))
    }

    pub fn is_container_relative(&self) -> bool {
        matches!(
            self,
            Unit::Percentage(Percentage {
                relative_to: RelativeTo::Container,
                ..
            })
        )
    }
}

impl From<i32> for Unit {
    fn from(value: i32) -> Self {
        Unit::Absolute(value)
    }
}

impl From<Percentage> for Unit {
    fn from(percentage: Percentage) -> Self {
        Unit::Percentage(percentage)
    }
}

/// An inclusive range of track indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "serde_repr::SpanRepr"))]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Create a span covering `start..=end`.
    pub fn new(start: usize, end: usize) -> Result<Self, LayoutError> {
        if end < start {
            return Err(LayoutError::InvalidSpan { start, end });
        }
        Ok(Self { start, end })
    }

    /// A span covering a single track.
    pub const fn single(index: usize) -> Self {
        Self {
            start: index,
            end: index,
        }
    }

    /// A span covering `spread` tracks after `start` as well as `start` itself.
    pub const fn spread(start: usize, spread: usize) -> Self {
        Self {
            start,
            end: start.saturating_add(spread),
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index <= self.end
    }

    /// Number of tracks covered, saturating at `usize::MAX`.
    pub fn len(&self) -> usize {
        (self.end - self.start).saturating_add(1)
    }

    /// Always false; a span covers at least one track.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn indices(&self) -> std::ops::RangeInclusive<usize> {
        self.start..=self.end
    }
}

impl From<usize> for Span {
    fn from(index: usize) -> Self {
        Span::single(index)
    }
}

/// Per-side margins; unset sides do not participate in placement.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Margins {
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub left: Option<Unit>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub right: Option<Unit>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub top: Option<Unit>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub bottom: Option<Unit>,
}

impl Margins {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn left(mut self, unit: impl Into<Unit>) -> Self {
        self.left = Some(unit.into());
        self
    }

    pub fn right(mut self, unit: impl Into<Unit>) -> Self {
        self.right = Some(unit.into());
        self
    }

    pub fn top(mut self, unit: impl Into<Unit>) -> Self {
        self.top = Some(unit.into());
        self
    }

    pub fn bottom(mut self, unit: impl Into<Unit>) -> Self {
        self.bottom = Some(unit.into());
        self
    }

    /// The leading margin on an axis (left or top).
    pub fn start(&self, axis: Axis) -> Option<Unit> {
        match axis {
            Axis::Horizontal => self.left,
            Axis::Vertical => self.top,
        }
    }

    /// The trailing margin on an axis (right or bottom).
    pub fn end(&self, axis: Axis) -> Option<Unit> {
        match axis {
            Axis::Horizontal => self.right,
            Axis::Vertical => self.bottom,
        }
    }

    /// Whether either side of an axis has a margin.
    pub fn is_set(&self, axis: Axis) -> bool {
        self.start(axis).is_some() || self.end(axis).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Unit> {
        [&self.left, &self.right, &self.top, &self.bottom]
            .into_iter()
            .flatten()
    }
}

#[cfg(feature = "serde")]
mod serde_repr {
    use super::{Percentage, Span, Unit};

    /// Units are written as a bare integer or a single-key object.
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(untagged)]
    pub(super) enum UnitRepr {
        Absolute(i32),
        Tagged(TaggedUnit),
    }

    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub(super) enum TaggedUnit {
        Percent(Percentage),
        Aspect(f64),
    }

    impl From<UnitRepr> for Unit {
        fn from(repr: UnitRepr) -> Self {
            match repr {
                UnitRepr::Absolute(value) => Unit::Absolute(value),
                UnitRepr::Tagged(TaggedUnit::Percent(percentage)) => Unit::Percentage(percentage),
                UnitRepr::Tagged(TaggedUnit::Aspect(factor)) => Unit::AspectMultiplier(factor),
            }
        }
    }

    impl From<Unit> for UnitRepr {
        fn from(unit: Unit) -> Self {
            match unit {
                Unit::Absolute(value) => UnitRepr::Absolute(value),
                Unit::Percentage(percentage) => UnitRepr::Tagged(TaggedUnit::Percent(percentage)),
                Unit::AspectMultiplier(factor) => UnitRepr::Tagged(TaggedUnit::Aspect(factor)),
            }
        }
    }

    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    pub(super) enum SpanRepr {
        Single(usize),
        Range { start: usize, end: usize },
    }

    impl TryFrom<SpanRepr> for Span {
        type Error = String;

        fn try_from(repr: SpanRepr) -> Result<Self, Self::Error> {
            match repr {
                SpanRepr::Single(index) => Ok(Span::single(index)),
                SpanRepr::Range { start, end } => Span::new(start, end).map_err(|e| e.to_string()),
            }
        }
    }
}
