//! Playback position, timestamps, and progress.

use std::fmt;
use std::time::Duration;

use tracing::trace;
use vcrop_core::PlaybackError;

/// A wall-clock position formatted as `HH:MM:SS:mmm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp {
    millis: u64,
}

impl Timestamp {
    /// Fractional milliseconds are truncated; negative values clamp to zero.
    pub fn from_millis(millis: f64) -> Self {
        Self {
            millis: millis.max(0.0).floor() as u64,
        }
    }

    pub fn as_millis(&self) -> u64 {
        self.millis
    }

    pub fn hours(&self) -> u64 {
        self.millis / 3_600_000
    }

    pub fn minutes(&self) -> u64 {
        self.millis % 3_600_000 / 60_000
    }

    pub fn seconds(&self) -> u64 {
        self.millis % 60_000 / 1_000
    }

    pub fn subsec_millis(&self) -> u64 {
        self.millis % 1_000
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}:{:03}",
            self.hours(),
            self.minutes(),
            self.seconds(),
            self.subsec_millis()
        )
    }
}

/// Result of one playback tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Paused; the position did not change.
    Paused,
    /// Moved to the given frame.
    Advanced(u64),
    /// Reached the end and wrapped back to frame 0.
    Wrapped,
}

/// Frame position within a video of known length and frame rate.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    fps: f64,
    frame_count: u64,
    current: u64,
    paused: bool,
}

impl Timeline {
    pub fn new(fps: f64, frame_count: u64) -> Result<Self, PlaybackError> {
        if !fps.is_finite() || fps <= 0.0 {
            return Err(PlaybackError::InvalidFrameRate { fps });
        }
        if frame_count == 0 {
            return Err(PlaybackError::NoFrames);
        }
        Ok(Self {
            fps,
            frame_count,
            current: 0,
            paused: false,
        })
    }

    pub fn fps(&self) -> f64 {
        self.fps
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn current_frame(&self) -> u64 {
        self.current
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// How long each frame is shown.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.fps)
    }

    /// Start time of a frame in milliseconds.
    pub fn millis_at_frame(&self, frame: u64) -> f64 {
        frame as f64 * 1000.0 / self.fps
    }

    /// The frame showing at a given time.
    pub fn frame_at_millis(&self, millis: f64) -> u64 {
        (millis / (1000.0 / self.fps)).floor() as u64
    }

    pub fn timestamp_at(&self, frame: u64) -> Timestamp {
        Timestamp::from_millis(self.millis_at_frame(frame))
    }

    /// Timestamp of the current frame.
    pub fn timestamp(&self) -> Timestamp {
        self.timestamp_at(self.current)
    }

    /// Total running time.
    pub fn duration(&self) -> Timestamp {
        self.timestamp_at(self.frame_count)
    }

    pub fn progress_percent(&self) -> f64 {
        self.current as f64 / self.frame_count as f64 * 100.0
    }

    /// Step to the next frame. At the last frame, wraps to 0 and returns
    /// false.
    pub fn advance(&mut self) -> bool {
        if self.current + 1 >= self.frame_count {
            self.current = 0;
            false
        } else {
            self.current += 1;
            true
        }
    }

    /// Jump to a frame.
    pub fn seek(&mut self, frame: u64) -> Result<(), PlaybackError> {
        if frame > self.frame_count {
            return Err(PlaybackError::FrameOutOfRange {
                frame,
                last: self.frame_count,
            });
        }
        trace!(from = self.current, to = frame, "seek");
        self.current = frame;
        Ok(())
    }

    /// Flip the paused flag and return the new value.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Advance once unless paused.
    pub fn tick(&mut self) -> Tick {
        if self.paused {
            Tick::Paused
        } else if self.advance() {
            Tick::Advanced(self.current)
        } else {
            trace!("end of video, wrapping");
            Tick::Wrapped
        }
    }
}
