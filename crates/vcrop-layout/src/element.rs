//! Layout elements.
//!
//! An element is declared with its spans and sizing rules, then bound to the
//! grid by the engine. Binding only records track indices; every geometry
//! query re-resolves against the grid, so results always reflect the latest
//! parent extent.

use smallvec::SmallVec;
use vcrop_core::{round_px, Axis, Binding, LayoutError, Margins, Size, Span, Unit};

use crate::grid::Grid;

/// A named entry in the layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    id: String,
    columns: Span,
    rows: Span,
    width: Unit,
    height: Unit,
    margins: Margins,
    center: bool,
    bound_columns: SmallVec<[usize; 4]>,
    bound_rows: SmallVec<[usize; 4]>,
    parent_bound: bool,
}

impl Element {
    /// Declare an element occupying `columns` x `rows`.
    ///
    /// Elements are centered in their cell by default.
    pub fn new(
        id: impl Into<String>,
        columns: Span,
        rows: Span,
        width: impl Into<Unit>,
        height: impl Into<Unit>,
    ) -> Result<Self, LayoutError> {
        let element = Self {
            id: id.into(),
            columns,
            rows,
            width: width.into(),
            height: height.into(),
            margins: Margins::default(),
            center: true,
            bound_columns: SmallVec::new(),
            bound_rows: SmallVec::new(),
            parent_bound: false,
        };
        element.validate()?;
        Ok(element)
    }

    /// Declare an element occupying a single grid cell.
    pub fn cell(
        id: impl Into<String>,
        column: usize,
        row: usize,
        width: impl Into<Unit>,
        height: impl Into<Unit>,
    ) -> Result<Self, LayoutError> {
        Self::new(id, Span::single(column), Span::single(row), width, height)
    }

    /// Set the margins.
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Enable or disable centering on axes without margins.
    pub fn with_center(mut self, center: bool) -> Self {
        self.center = center;
        self
    }

    /// Check the sizing rules for self-referential combinations.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.width.is_aspect() && self.height.is_aspect() {
            return Err(LayoutError::BothAxesAspectLocked {
                element: self.id.clone(),
            });
        }
        if self.margins.iter().any(Unit::is_aspect) {
            return Err(LayoutError::AspectMarginUnit {
                element: self.id.clone(),
            });
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The span on an axis (columns for horizontal, rows for vertical).
    pub fn span(&self, axis: Axis) -> Span {
        match axis {
            Axis::Horizontal => self.columns,
            Axis::Vertical => self.rows,
        }
    }

    /// The sizing rule on an axis (width for horizontal, height for vertical).
    pub fn unit(&self, axis: Axis) -> Unit {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    pub fn margins(&self) -> &Margins {
        &self.margins
    }

    pub fn center(&self) -> bool {
        self.center
    }

    // Binding

    pub fn bind_column(&mut self, index: usize) {
        self.bound_columns.push(index);
    }

    pub fn bind_row(&mut self, index: usize) {
        self.bound_rows.push(index);
    }

    pub fn bind_track(&mut self, axis: Axis, index: usize) {
        match axis {
            Axis::Horizontal => self.bind_column(index),
            Axis::Vertical => self.bind_row(index),
        }
    }

    pub fn bind_parent(&mut self) {
        self.parent_bound = true;
    }

    /// Indices of the tracks bound on an axis, in binding order.
    pub fn bound_tracks(&self, axis: Axis) -> &[usize] {
        match axis {
            Axis::Horizontal => &self.bound_columns,
            Axis::Vertical => &self.bound_rows,
        }
    }

    /// Whether the element is bound to a parent and to tracks on both axes.
    pub fn is_bound(&self) -> bool {
        self.parent_bound && !self.bound_columns.is_empty() && !self.bound_rows.is_empty()
    }

    fn unbound(&self, missing: Binding) -> LayoutError {
        LayoutError::Unbound {
            element: self.id.clone(),
            missing,
        }
    }

    // Resolution

    /// Parent extent on an axis.
    pub fn parent_extent(&self, grid: &Grid, axis: Axis) -> Result<i32, LayoutError> {
        if !self.parent_bound {
            return Err(self.unbound(Binding::Parent));
        }
        Ok(grid.parent().get(axis))
    }

    /// Combined extent of the bound tracks on an axis.
    pub fn container_extent(&self, grid: &Grid, axis: Axis) -> Result<i32, LayoutError> {
        let bound = self.bound_tracks(axis);
        if bound.is_empty() {
            let missing = match axis {
                Axis::Horizontal => Binding::Columns,
                Axis::Vertical => Binding::Rows,
            };
            return Err(self.unbound(missing));
        }
        bound.iter().try_fold(0i32, |total, &index| {
            Ok(total.saturating_add(grid.track(axis, index)?.extent()))
        })
    }

    fn resolve(&self, grid: &Grid, axis: Axis, unit: Unit) -> Result<i32, LayoutError> {
        let parent = self.parent_extent(grid, axis)?;
        let container = self.container_extent(grid, axis)?;
        Ok(match unit {
            Unit::Absolute(value) => value,
            Unit::Percentage(percentage) => percentage.resolve(parent, container),
            // Terminates: at most one axis is aspect-locked.
            Unit::AspectMultiplier(factor) => {
                round_px(factor * self.extent(grid, axis.other())? as f64)
            }
        })
    }

    /// Resolved extent on an axis.
    pub fn extent(&self, grid: &Grid, axis: Axis) -> Result<i32, LayoutError> {
        self.resolve(grid, axis, self.unit(axis))
    }

    pub fn width(&self, grid: &Grid) -> Result<i32, LayoutError> {
        self.extent(grid, Axis::Horizontal)
    }

    pub fn height(&self, grid: &Grid) -> Result<i32, LayoutError> {
        self.extent(grid, Axis::Vertical)
    }

    pub fn size(&self, grid: &Grid) -> Result<Size, LayoutError> {
        Ok(Size::new(self.width(grid)?, self.height(grid)?))
    }

    /// Resolved leading margin (left or top); zero when unset.
    pub fn margin_start(&self, grid: &Grid, axis: Axis) -> Result<i32, LayoutError> {
        match self.margins.start(axis) {
            Some(unit) => self.resolve(grid, axis, unit),
            None => Ok(0),
        }
    }

    /// Resolved trailing margin (right or bottom); zero when unset.
    pub fn margin_end(&self, grid: &Grid, axis: Axis) -> Result<i32, LayoutError> {
        match self.margins.end(axis) {
            Some(unit) => self.resolve(grid, axis, unit),
            None => Ok(0),
        }
    }
}
