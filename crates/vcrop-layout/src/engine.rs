//! The layout engine.
//!
//! Owns the grid and every element, binds elements to the tracks their spans
//! cover, and answers position/dimension queries by element id.

use indexmap::IndexMap;
use tracing::debug;
use vcrop_core::{round_px, Axis, LayoutError, Margins, Point, Rect, Size, Span, Unit};

use crate::element::Element;
use crate::grid::{Grid, Track};

/// Placement for an element that is not part of the declared layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub columns: Span,
    pub rows: Span,
    pub center: bool,
    pub margins: Margins,
}

impl Placement {
    /// Centered in a single cell.
    pub fn cell(column: usize, row: usize) -> Self {
        Self {
            columns: Span::single(column),
            rows: Span::single(row),
            center: true,
            margins: Margins::default(),
        }
    }

    /// Centered across the given spans.
    pub fn spanning(columns: Span, rows: Span) -> Self {
        Self {
            columns,
            rows,
            center: true,
            margins: Margins::default(),
        }
    }

    pub fn with_center(mut self, center: bool) -> Self {
        self.center = center;
        self
    }

    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }
}

/// Grid layout engine.
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    grid: Grid,
    elements: IndexMap<String, Element>,
}

impl LayoutEngine {
    /// Build the grid and bind every element to it.
    ///
    /// Fails if a track is container-relative, an element is invalid, an id
    /// repeats, or a span reaches past the last track.
    pub fn new(
        parent: Size,
        rows: impl IntoIterator<Item = Unit>,
        columns: impl IntoIterator<Item = Unit>,
        elements: impl IntoIterator<Item = Element>,
    ) -> Result<Self, LayoutError> {
        let grid = Grid::new(parent, rows, columns)?;

        let mut bound = IndexMap::new();
        for mut element in elements {
            element.validate()?;
            if bound.contains_key(element.id()) {
                return Err(LayoutError::DuplicateElement {
                    id: element.id().to_string(),
                });
            }
            Self::waterfall(&grid, &mut element)?;
            bound.insert(element.id().to_string(), element);
        }

        debug!(
            parent = %parent,
            rows = grid.len(Axis::Vertical),
            columns = grid.len(Axis::Horizontal),
            elements = bound.len(),
            "layout constructed"
        );

        Ok(Self {
            grid,
            elements: bound,
        })
    }

    /// Bind an element to the parent and to every track its spans cover.
    fn waterfall(grid: &Grid, element: &mut Element) -> Result<(), LayoutError> {
        for axis in [Axis::Horizontal, Axis::Vertical] {
            let span = element.span(axis);
            let track_count = grid.len(axis);
            if span.end() >= track_count {
                return Err(LayoutError::SpanOutOfRange {
                    element: element.id().to_string(),
                    axis,
                    index: span.end(),
                    track_count,
                });
            }
            for index in span.indices() {
                element.bind_track(axis, index);
            }
        }
        element.bind_parent();
        Ok(())
    }

    /// Top-left corner of an element, in parent coordinates.
    pub fn position(&self, id: &str) -> Result<Point, LayoutError> {
        let element = self.element(id)?;
        self.element_position(element)
    }

    /// Resolved width and height of an element.
    pub fn dimensions(&self, id: &str) -> Result<Size, LayoutError> {
        self.element(id)?.size(&self.grid)
    }

    /// Position and dimensions together.
    pub fn bounds(&self, id: &str) -> Result<Rect, LayoutError> {
        let element = self.element(id)?;
        let position = self.element_position(element)?;
        Ok(Rect::at(position, element.size(&self.grid)?))
    }

    /// Update the parent extent; `None` leaves that axis unchanged.
    pub fn resize_parent(&mut self, width: Option<i32>, height: Option<i32>) {
        if self.grid.resize_parent(width, height) {
            debug!(parent = %self.grid.parent(), "parent resized");
        }
    }

    /// Position a transient element of a fixed size within existing tracks.
    pub fn place(&self, size: Size, placement: Placement) -> Result<Point, LayoutError> {
        let mut element = Element::new(
            "_ad_hoc",
            placement.columns,
            placement.rows,
            size.width,
            size.height,
        )?
        .with_center(placement.center)
        .with_margins(placement.margins);
        element.validate()?;
        Self::waterfall(&self.grid, &mut element)?;
        self.element_position(&element)
    }

    /// Look up an element by id.
    pub fn element(&self, id: &str) -> Result<&Element, LayoutError> {
        self.elements
            .get(id)
            .ok_or_else(|| LayoutError::NotFound { id: id.to_string() })
    }

    /// All elements, in declaration order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.values()
    }

    /// Look up a track by axis and index.
    pub fn track(&self, axis: Axis, index: usize) -> Result<&Track, LayoutError> {
        self.grid.track(axis, index)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn parent(&self) -> Size {
        self.grid.parent()
    }

    fn element_position(&self, element: &Element) -> Result<Point, LayoutError> {
        Ok(Point::new(
            self.axis_offset(element, Axis::Horizontal)?,
            self.axis_offset(element, Axis::Vertical)?,
        ))
    }

    /// Offset on one axis: preceding tracks, then centering or margins.
    ///
    /// Centering applies only when neither margin on the axis is set. A
    /// leading margin beats a trailing one.
    fn axis_offset(&self, element: &Element, axis: Axis) -> Result<i32, LayoutError> {
        let base = self.grid.offset_of(axis, element.span(axis).start());
        let margins = element.margins();

        let adjust = if element.center() && !margins.is_set(axis) {
            let spanned = element.container_extent(&self.grid, axis)?;
            let extent = element.extent(&self.grid, axis)?;
            round_px((f64::from(spanned) - f64::from(extent)) / 2.0)
        } else if margins.start(axis).is_some() {
            element.margin_start(&self.grid, axis)?
        } else if margins.end(axis).is_some() {
            let spanned = element.container_extent(&self.grid, axis)?;
            let extent = element.extent(&self.grid, axis)?;
            spanned
                .saturating_sub(element.margin_end(&self.grid, axis)?)
                .saturating_sub(extent)
        } else {
            0
        };

        Ok(base.saturating_add(adjust))
    }
}
