//! Letterbox fitting and coordinate mapping.
//!
//! A source frame is drawn inside a display surface at the largest size that
//! keeps its aspect ratio, centered, with bars on the unused sides. The crop
//! overlay covers only that placement, so selections have to be scaled back
//! into source pixels before they are handed to an encoder.

use tracing::debug;
use vcrop_core::{round_px, Axis, OverlayError, Point, Rect, Size};

use crate::selection::CropBounds;

/// A crop in source-frame pixels, as an encoder expects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CropRegion {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl From<CropBounds> for CropRegion {
    fn from(bounds: CropBounds) -> Self {
        Self {
            x: bounds.left,
            y: bounds.top,
            width: bounds.width(),
            height: bounds.height(),
        }
    }
}

/// Where a source frame lands on a display surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameFit {
    surface: Size,
    source: Size,
    placement: Rect,
}

impl FrameFit {
    pub fn new(surface: Size, source: Size) -> Result<Self, OverlayError> {
        for size in [surface, source] {
            if size.is_empty() {
                return Err(OverlayError::EmptySurface {
                    width: size.width,
                    height: size.height,
                });
            }
        }
        Ok(Self {
            surface,
            source,
            placement: letterbox(surface, source),
        })
    }

    /// Refit for a new surface extent.
    pub fn resize(&mut self, surface: Size) -> Result<(), OverlayError> {
        *self = Self::new(surface, self.source)?;
        debug!(%surface, placement = ?self.placement, "frame refit");
        Ok(())
    }

    pub fn surface(&self) -> Size {
        self.surface
    }

    pub fn source(&self) -> Size {
        self.source
    }

    /// The frame's rectangle on the surface.
    pub fn placement(&self) -> Rect {
        self.placement
    }

    /// Source pixels per placement pixel along an axis.
    pub fn scale(&self, axis: Axis) -> f64 {
        self.source.get(axis) as f64 / self.placement.size().get(axis) as f64
    }

    /// Translate a surface position into placement coordinates.
    pub fn to_placement(&self, position: Point) -> Point {
        position - self.placement.top_left()
    }

    /// Map bounds in placement coordinates into source pixels.
    pub fn to_source(&self, bounds: CropBounds) -> CropBounds {
        let x = |v: i32| round_px(v as f64 * self.scale(Axis::Horizontal)).clamp(0, self.source.width);
        let y = |v: i32| round_px(v as f64 * self.scale(Axis::Vertical)).clamp(0, self.source.height);
        CropBounds::new(x(bounds.left), x(bounds.right), y(bounds.top), y(bounds.bottom))
    }

    /// Map source-pixel bounds back into placement coordinates.
    pub fn to_overlay(&self, bounds: CropBounds) -> CropBounds {
        let x = |v: i32| round_px(v as f64 / self.scale(Axis::Horizontal));
        let y = |v: i32| round_px(v as f64 / self.scale(Axis::Vertical));
        CropBounds::new(x(bounds.left), x(bounds.right), y(bounds.top), y(bounds.bottom))
    }

    /// The encoder-facing crop for a selection in placement coordinates.
    pub fn crop_region(&self, bounds: CropBounds) -> CropRegion {
        CropRegion::from(self.to_source(bounds))
    }
}

fn letterbox(surface: Size, source: Size) -> Rect {
    let aspect = source.width as f64 / source.height as f64;
    let (sw, sh) = (surface.width as f64, surface.height as f64);

    let extent = if sh * aspect > sw {
        // bars above and below
        Size::new(surface.width, round_px(sw / aspect))
    } else if sw / aspect > sh {
        // bars left and right
        Size::new(round_px(sh * aspect), surface.height)
    } else {
        surface
    };

    let origin = Point::new(
        round_px((surface.width - extent.width) as f64 / 2.0),
        round_px((surface.height - extent.height) as f64 / 2.0),
    );
    Rect::at(origin, extent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_fit_fills_surface() {
        let fit = FrameFit::new(Size::new(1280, 720), Size::new(1920, 1080)).unwrap();
        assert_eq!(fit.placement(), Rect::new(0, 0, 1280, 720));
    }

    #[test]
    fn test_wide_source_gets_bars_above_and_below() {
        let fit = FrameFit::new(Size::new(800, 800), Size::new(1600, 900)).unwrap();
        assert_eq!(fit.placement(), Rect::new(0, 175, 800, 450));
        assert_eq!(fit.scale(Axis::Horizontal), 2.0);
    }

    #[test]
    fn test_tall_source_gets_bars_left_and_right() {
        let fit = FrameFit::new(Size::new(1000, 500), Size::new(400, 400)).unwrap();
        assert_eq!(fit.placement(), Rect::new(250, 0, 500, 500));
        assert_eq!(fit.to_placement(Point::new(300, 20)), Point::new(50, 20));
    }

    #[test]
    fn test_resize_refits() {
        let mut fit = FrameFit::new(Size::new(1280, 720), Size::new(1920, 1080)).unwrap();
        fit.resize(Size::new(1280, 1000)).unwrap();
        assert_eq!(fit.placement(), Rect::new(0, 140, 1280, 720));
        assert!(fit.resize(Size::new(0, 100)).is_err());
        assert_eq!(fit.surface(), Size::new(1280, 1000));
    }

    #[test]
    fn test_to_source_and_back() {
        let fit = FrameFit::new(Size::new(800, 800), Size::new(1600, 900)).unwrap();
        let overlay = CropBounds::new(100, 300, 50, 150);
        let source = fit.to_source(overlay);
        assert_eq!(source, CropBounds::new(200, 600, 100, 300));
        assert_eq!(fit.to_overlay(source), overlay);
        assert_eq!(
            fit.crop_region(overlay),
            CropRegion {
                x: 200,
                y: 100,
                width: 400,
                height: 200
            }
        );
    }

    #[test]
    fn test_to_source_clamps_into_frame() {
        let fit = FrameFit::new(Size::new(800, 800), Size::new(1600, 900)).unwrap();
        let source = fit.to_source(CropBounds::new(-10, 900, -5, 500));
        assert_eq!(source, CropBounds::new(0, 1600, 0, 900));
    }

    #[test]
    fn test_empty_sizes_are_rejected() {
        assert!(matches!(
            FrameFit::new(Size::new(100, 100), Size::new(0, 0)),
            Err(OverlayError::EmptySurface { .. })
        ));
    }
}
