//! Playback controls for vcrop.
//!
//! Pure state machines; drawing and decoding are left to the caller.

mod button;
mod timeline;

pub use button::{Button, ButtonResponse};
pub use timeline::{Tick, Timeline, Timestamp};
