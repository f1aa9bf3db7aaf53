//! Row and column tracks.
//!
//! A [`Grid`] owns the shared parent extent and one [`Track`] per declared
//! row and column. Tracks resolve their own extent from the parent only;
//! they never depend on the elements placed in them.

use vcrop_core::{Axis, LayoutError, Percentage, Size, Span, Unit};

/// A single row or column.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    axis: Axis,
    size: Unit,
    parent_extent: i32,
}

impl Track {
    /// Create a track, rejecting sizing rules that would make it depend on
    /// itself.
    ///
    /// `index` only feeds the error message.
    pub fn new(axis: Axis, index: usize, size: Unit, parent_extent: i32) -> Result<Self, LayoutError> {
        match size {
            Unit::AspectMultiplier(_) => Err(LayoutError::AspectTrack { axis, index }),
            unit if unit.is_container_relative() => {
                Err(LayoutError::ContainerRelativeTrack { axis, index })
            }
            _ => Ok(Self {
                axis,
                size,
                parent_extent,
            }),
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn size(&self) -> Unit {
        self.size
    }

    /// Resolved extent in pixels.
    pub fn extent(&self) -> i32 {
        match self.size {
            Unit::Absolute(value) => value,
            Unit::Percentage(percentage) => percentage.resolve(self.parent_extent, 0),
            // Rejected in `Track::new`.
            Unit::AspectMultiplier(_) => 0,
        }
    }

    /// Record a new parent extent along this track's axis.
    pub fn on_parent_resize(&mut self, parent_extent: i32) {
        self.parent_extent = parent_extent;
    }
}

/// The full set of tracks plus the parent extent they are measured against.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    parent: Size,
    rows: Vec<Track>,
    columns: Vec<Track>,
}

impl Grid {
    /// Build one track per row unit and one per column unit.
    pub fn new(
        parent: Size,
        rows: impl IntoIterator<Item = Unit>,
        columns: impl IntoIterator<Item = Unit>,
    ) -> Result<Self, LayoutError> {
        let rows = Self::build_tracks(Axis::Vertical, parent.height, rows)?;
        let columns = Self::build_tracks(Axis::Horizontal, parent.width, columns)?;
        Ok(Self {
            parent,
            rows,
            columns,
        })
    }

    fn build_tracks(
        axis: Axis,
        parent_extent: i32,
        units: impl IntoIterator<Item = Unit>,
    ) -> Result<Vec<Track>, LayoutError> {
        units
            .into_iter()
            .enumerate()
            .map(|(index, unit)| Track::new(axis, index, unit, parent_extent))
            .collect()
    }

    /// The shared parent extent.
    pub fn parent(&self) -> Size {
        self.parent
    }

    /// All tracks along an axis, in order.
    pub fn tracks(&self, axis: Axis) -> &[Track] {
        match axis {
            Axis::Horizontal => &self.columns,
            Axis::Vertical => &self.rows,
        }
    }

    fn tracks_mut(&mut self, axis: Axis) -> &mut [Track] {
        match axis {
            Axis::Horizontal => &mut self.columns,
            Axis::Vertical => &mut self.rows,
        }
    }

    /// Number of tracks along an axis.
    pub fn len(&self, axis: Axis) -> usize {
        self.tracks(axis).len()
    }

    /// Check if the grid has no tracks on either axis.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.columns.is_empty()
    }

    /// Look up a track by index.
    pub fn track(&self, axis: Axis, index: usize) -> Result<&Track, LayoutError> {
        let tracks = self.tracks(axis);
        tracks.get(index).ok_or(LayoutError::TrackIndex {
            axis,
            index,
            track_count: tracks.len(),
        })
    }

    /// Sum of the extents of every track strictly before `index`.
    ///
    /// Sums saturate at the `i32` range.
    pub fn offset_of(&self, axis: Axis, index: usize) -> i32 {
        self.tracks(axis)
            .iter()
            .take(index)
            .map(Track::extent)
            .fold(0, i32::saturating_add)
    }

    /// Combined extent of the tracks a span covers.
    pub fn span_extent(&self, axis: Axis, span: Span) -> Result<i32, LayoutError> {
        span.indices().try_fold(0i32, |total, index| {
            Ok(total.saturating_add(self.track(axis, index)?.extent()))
        })
    }

    /// Update the parent extent and propagate it to the tracks of each
    /// changed axis. Returns whether anything was updated.
    pub fn resize_parent(&mut self, width: Option<i32>, height: Option<i32>) -> bool {
        let mut changed = false;
        for (axis, extent) in [(Axis::Horizontal, width), (Axis::Vertical, height)] {
            let Some(extent) = extent else { continue };
            self.parent.set(axis, extent);
            for track in self.tracks_mut(axis) {
                track.on_parent_resize(extent);
            }
            changed = true;
        }
        changed
    }
}

/// Shorthand for a parent-relative percentage, the only relative unit a
/// track accepts.
pub fn share(ratio: f64) -> Unit {
    Unit::Percentage(Percentage::of_parent(ratio))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_grid() -> Grid {
        Grid::new(
            Size::new(300, 100),
            vec![share(0.2), share(0.8)],
            vec![share(0.1), share(0.9)],
        )
        .unwrap()
    }

    #[test]
    fn test_track_extents() {
        let grid = sample_grid();
        assert_eq!(grid.tracks(Axis::Vertical)[0].extent(), 20);
        assert_eq!(grid.tracks(Axis::Vertical)[1].extent(), 80);
        assert_eq!(grid.tracks(Axis::Horizontal)[0].extent(), 30);
        assert_eq!(grid.tracks(Axis::Horizontal)[1].extent(), 270);
    }

    #[test]
    fn test_absolute_track_ignores_parent() {
        let mut track = Track::new(Axis::Horizontal, 0, Unit::Absolute(64), 300).unwrap();
        track.on_parent_resize(1000);
        assert_eq!(track.extent(), 64);
    }

    #[test]
    fn test_track_rejects_container_relative() {
        let err = Track::new(Axis::Vertical, 2, Unit::percent_of_container(0.5), 100).unwrap_err();
        assert_eq!(
            err,
            LayoutError::ContainerRelativeTrack {
                axis: Axis::Vertical,
                index: 2
            }
        );
    }

    #[test]
    fn test_track_rejects_aspect() {
        assert!(matches!(
            Track::new(Axis::Horizontal, 0, Unit::aspect(2.0), 100),
            Err(LayoutError::AspectTrack { .. })
        ));
    }

    #[test]
    fn test_grid_reports_failing_track_index() {
        let err = Grid::new(
            Size::new(100, 100),
            vec![share(0.5), Unit::percent_of_container(0.5)],
            vec![],
        )
        .unwrap_err();
        assert_eq!(
            err,
            LayoutError::ContainerRelativeTrack {
                axis: Axis::Vertical,
                index: 1
            }
        );
    }

    #[test]
    fn test_offsets_and_span_extent() {
        let grid = sample_grid();
        assert_eq!(grid.offset_of(Axis::Horizontal, 0), 0);
        assert_eq!(grid.offset_of(Axis::Horizontal, 1), 30);
        assert_eq!(grid.offset_of(Axis::Vertical, 2), 100);
        assert_eq!(
            grid.span_extent(Axis::Horizontal, Span::new(0, 1).unwrap()),
            Ok(300)
        );
        assert!(matches!(
            grid.span_extent(Axis::Vertical, Span::new(1, 2).unwrap()),
            Err(LayoutError::TrackIndex { index: 2, .. })
        ));
    }

    #[test]
    fn test_huge_tracks_saturate() {
        let huge = Unit::Absolute(i32::MAX - 10);
        let grid = Grid::new(Size::new(100, 100), vec![huge, huge, huge], vec![huge]).unwrap();
        assert_eq!(grid.offset_of(Axis::Vertical, 3), i32::MAX);
        assert_eq!(
            grid.span_extent(Axis::Vertical, Span::new(0, 2).unwrap()),
            Ok(i32::MAX)
        );
        assert_eq!(grid.offset_of(Axis::Horizontal, 1), i32::MAX - 10);
    }

    #[test]
    fn test_track_lookup_out_of_range() {
        let grid = sample_grid();
        assert!(grid.track(Axis::Horizontal, 1).is_ok());
        assert_eq!(
            grid.track(Axis::Horizontal, 5),
            Err(LayoutError::TrackIndex {
                axis: Axis::Horizontal,
                index: 5,
                track_count: 2
            })
        );
    }

    #[test]
    fn test_resize_parent_propagates_per_axis() {
        let mut grid = sample_grid();
        assert!(grid.resize_parent(Some(600), None));
        assert_eq!(grid.parent(), Size::new(600, 100));
        assert_eq!(grid.tracks(Axis::Horizontal)[0].extent(), 60);
        assert_eq!(grid.tracks(Axis::Vertical)[0].extent(), 20);

        assert!(grid.resize_parent(None, Some(50)));
        assert_eq!(grid.tracks(Axis::Vertical)[1].extent(), 40);

        assert!(!grid.resize_parent(None, None));
    }
}
