//! Core types shared by every vcrop crate.
//!
//! This crate provides the foundational types used across the layout engine,
//! the crop overlay, and the playback controls:
//! - Integer geometry (`Rect`, `Size`, `Point`, `Axis`)
//! - Sizing units (`Unit`, `Percentage`, `Span`, `Margins`)
//! - Pointer and surface events
//! - Error types

pub mod errors;
pub mod event;
pub mod geometry;
pub mod units;

pub use errors::*;
pub use event::*;
pub use geometry::*;
pub use units::*;
