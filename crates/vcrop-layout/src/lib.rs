//! Grid layout for vcrop.
//!
//! Places named elements on a grid of row and column tracks whose extents are
//! derived from a shared parent surface.
//!
//! # Architecture
//!
//! 1. **Grid**: tracks resolve absolute or parent-relative units
//! 2. **Waterfall**: each element is bound to the parent and to every track its
//!    spans cover, once, at construction
//! 3. **Queries**: positions and dimensions are re-derived on every call, so a
//!    parent resize is visible immediately
//!
//! # Example
//!
//! ```
//! use vcrop_core::{Point, Size};
//! use vcrop_layout::{share, Element, LayoutEngine};
//!
//! let engine = LayoutEngine::new(
//!     Size::new(300, 100),
//!     vec![share(0.2), share(0.8)],
//!     vec![share(0.1), share(0.9)],
//!     vec![Element::cell("btn", 0, 1, 20, 20)?],
//! )?;
//! assert_eq!(engine.position("btn")?, Point::new(5, 50));
//! # Ok::<(), vcrop_core::LayoutError>(())
//! ```

mod config;
mod element;
mod engine;
mod grid;

pub use config::{ConfigError, ElementSpec, LayoutSpec};
pub use element::Element;
pub use engine::{LayoutEngine, Placement};
pub use grid::{share, Grid, Track};
