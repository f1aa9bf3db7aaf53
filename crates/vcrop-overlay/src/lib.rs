//! Crop selection overlay for vcrop.
//!
//! - [`SelectionRect`]: the draggable, resizable crop selection
//! - [`FrameFit`]: letterbox placement of the video frame and mapping of
//!   selections into source-frame pixels

mod frame;
mod selection;

pub use frame::{CropRegion, FrameFit};
pub use selection::{CropBounds, DragState, SelectionRect};
