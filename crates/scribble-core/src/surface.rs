//! Render-target abstraction.
//!
//! On WASM the surface is an HTML `<canvas>`; in tests and headless use it
//! is the software [`Bitmap`](crate::raster::Bitmap).

use crate::model::Segment;

/// Pixel dimensions of a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// The surface fills the viewport except for the control bar strip.
    /// Fractional viewport sizes are truncated; a viewport shorter than
    /// the bar yields a zero-height surface.
    pub fn for_viewport(viewport_width: f64, viewport_height: f64, control_bar_height: u32) -> Self {
        let width = viewport_width.max(0.0) as u32;
        let height = (viewport_height.max(0.0) as u32).saturating_sub(control_bar_height);
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// A raster target that segments are stroked onto.
///
/// Strokes use round caps and round joins. The pixel buffer is the only
/// drawing state; nothing about past segments is retained elsewhere.
pub trait Surface {
    fn size(&self) -> SurfaceSize;

    /// Replace the backing buffer. Prior content is discarded.
    fn resize(&mut self, size: SurfaceSize);

    /// Erase the whole buffer to blank.
    fn clear(&mut self);

    fn stroke_segment(&mut self, segment: &Segment);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn viewport_minus_control_bar() {
        assert_eq!(
            SurfaceSize::for_viewport(1024.0, 768.0, 80),
            SurfaceSize::new(1024, 688)
        );
        assert_eq!(
            SurfaceSize::for_viewport(1280.6, 720.9, 80),
            SurfaceSize::new(1280, 640)
        );
    }

    #[test]
    fn short_viewport_saturates() {
        let size = SurfaceSize::for_viewport(300.0, 50.0, 80);
        assert_eq!(size, SurfaceSize::new(300, 0));
        assert!(size.is_empty());
    }
}
