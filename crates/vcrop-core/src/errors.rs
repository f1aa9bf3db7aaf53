//! Error types for vcrop.

use crate::geometry::Axis;
use thiserror::Error;

/// Top-level error type for vcrop.
#[derive(Debug, Error)]
pub enum VcropError {
    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Overlay(#[from] OverlayError),

    #[error(transparent)]
    Playback(#[from] PlaybackError),
}

/// Broad classes of layout failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The layout description is invalid; construction is aborted.
    Construction,
    /// Geometry was queried before the element was bound.
    Unbound,
    /// No element with the requested id.
    NotFound,
    /// A track index outside the grid.
    Index,
}

/// What an element was missing when its geometry was queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    Parent,
    Columns,
    Rows,
}

impl std::fmt::Display for Binding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Binding::Parent => f.write_str("a parent"),
            Binding::Columns => f.write_str("at least one column"),
            Binding::Rows => f.write_str("at least one row"),
        }
    }
}

/// Errors during layout construction and queries.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LayoutError {
    #[error("element '{element}' cannot have both width and height as aspect multipliers")]
    BothAxesAspectLocked { element: String },

    #[error("element '{element}' has an aspect multiplier as a margin")]
    AspectMarginUnit { element: String },

    #[error("{axis} track {index} cannot be a percentage of its container, only of the parent")]
    ContainerRelativeTrack { axis: Axis, index: usize },

    #[error("{axis} track {index} cannot be an aspect multiplier")]
    AspectTrack { axis: Axis, index: usize },

    #[error("element '{element}' spans {axis} track {index}, but only {track_count} exist")]
    SpanOutOfRange {
        element: String,
        axis: Axis,
        index: usize,
        track_count: usize,
    },

    #[error("invalid span {start}..={end}: end must not precede start")]
    InvalidSpan { start: usize, end: usize },

    #[error("an element with id '{id}' is already defined")]
    DuplicateElement { id: String },

    #[error("element '{element}' must be bound to {missing} before its geometry can be read")]
    Unbound { element: String, missing: Binding },

    #[error("an element with id '{id}' does not exist")]
    NotFound { id: String },

    #[error("{axis} track index {index} out of range ({track_count} tracks)")]
    TrackIndex {
        axis: Axis,
        index: usize,
        track_count: usize,
    },
}

impl LayoutError {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            LayoutError::BothAxesAspectLocked { .. }
            | LayoutError::AspectMarginUnit { .. }
            | LayoutError::ContainerRelativeTrack { .. }
            | LayoutError::AspectTrack { .. }
            | LayoutError::SpanOutOfRange { .. }
            | LayoutError::InvalidSpan { .. }
            | LayoutError::DuplicateElement { .. } => ErrorKind::Construction,
            LayoutError::Unbound { .. } => ErrorKind::Unbound,
            LayoutError::NotFound { .. } => ErrorKind::NotFound,
            LayoutError::TrackIndex { .. } => ErrorKind::Index,
        }
    }
}

/// Errors when setting up a crop selection.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OverlayError {
    #[error("handle thickness must be positive, got {thickness}")]
    InvalidHandleThickness { thickness: i32 },

    #[error("minimum {axis} extent {min} exceeds maximum {max}")]
    MinExceedsMax { axis: Axis, min: i32, max: i32 },

    #[error("minimum {axis} extent {min} leaves no room inside a {thickness}px handle")]
    MinTooSmall { axis: Axis, min: i32, thickness: i32 },

    #[error("aspect ratio must be a positive finite number, got {ratio}")]
    InvalidAspectRatio { ratio: f64 },

    #[error("surface {width}x{height} has no area")]
    EmptySurface { width: i32, height: i32 },
}

/// Errors from the playback controls.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PlaybackError {
    #[error("frame rate must be a positive finite number, got {fps}")]
    InvalidFrameRate { fps: f64 },

    #[error("a video must have at least one frame")]
    NoFrames,

    #[error("frame {frame} is out of range (last frame is {last})")]
    FrameOutOfRange { frame: u64, last: u64 },

    #[error("invalid state count {count}, a button needs at least one state")]
    NoStates { count: usize },

    #[error("starting state {state} is outside 1..={count}")]
    InvalidStartState { state: usize, count: usize },
}
