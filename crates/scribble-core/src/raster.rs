//! Software raster surface.
//!
//! A segment is rasterized as a capsule: every pixel whose center lies
//! within half the stroke width of the segment is painted. That gives the
//! same round caps and joins the Canvas2D context uses, without
//! anti-aliasing.

use crate::model::{Color, Point, Segment};
use crate::surface::{Surface, SurfaceSize};
use kurbo::{Line, ParamCurveNearest};

/// In-memory RGBA pixel buffer, row-major.
#[derive(Debug, Clone)]
pub struct Bitmap {
    size: SurfaceSize,
    pixels: Vec<Color>,
}

impl Bitmap {
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            pixels: vec![Color::TRANSPARENT; size.width as usize * size.height as usize],
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.size.width as usize + x as usize)
            .copied()
    }

    /// True when every pixel is transparent. Eraser strokes paint opaque
    /// background, so an erased area looks blank but does not count.
    pub fn is_blank(&self) -> bool {
        self.pixels.iter().all(|p| p.a == 0)
    }

    /// Number of pixels that carry paint.
    pub fn painted_pixels(&self) -> usize {
        self.pixels.iter().filter(|p| p.a != 0).count()
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Pixel-space bounding box `(x0, y0, x1, y1)`, exclusive on the far
    /// edge, clipped to the buffer.
    fn clip_bounds(&self, from: Point, to: Point, radius: f64) -> Option<(u32, u32, u32, u32)> {
        let min_x = (from.x.min(to.x) - radius).floor().max(0.0);
        let min_y = (from.y.min(to.y) - radius).floor().max(0.0);
        let max_x = (from.x.max(to.x) + radius).ceil().min(self.size.width as f64);
        let max_y = (from.y.max(to.y) + radius).ceil().min(self.size.height as f64);
        if min_x >= max_x || min_y >= max_y {
            return None;
        }
        Some((min_x as u32, min_y as u32, max_x as u32, max_y as u32))
    }
}

impl Surface for Bitmap {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn resize(&mut self, size: SurfaceSize) {
        log::debug!("bitmap resize {}x{}", size.width, size.height);
        *self = Bitmap::new(size);
    }

    fn clear(&mut self) {
        self.pixels.fill(Color::TRANSPARENT);
    }

    fn stroke_segment(&mut self, segment: &Segment) {
        let radius = segment.style.width as f64 / 2.0;
        if radius <= 0.0 {
            return;
        }
        let Some((x0, y0, x1, y1)) = self.clip_bounds(segment.from, segment.to, radius) else {
            return;
        };

        let line = Line::new(segment.from, segment.to);
        let radius_sq = radius * radius;
        let stride = self.size.width as usize;
        for y in y0..y1 {
            for x in x0..x1 {
                let center = kurbo::Point::new(x as f64 + 0.5, y as f64 + 0.5);
                if line.nearest(center, 1e-6).distance_sq <= radius_sq {
                    self.pixels[y as usize * stride + x as usize] = segment.style.color;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StrokeStyle;
    use pretty_assertions::assert_eq;

    const RED: Color = Color::rgb(255, 0, 0);

    fn seg(x0: f64, y0: f64, x1: f64, y1: f64, color: Color, width: u8) -> Segment {
        Segment {
            from: Point::new(x0, y0),
            to: Point::new(x1, y1),
            style: StrokeStyle { color, width },
        }
    }

    #[test]
    fn diagonal_segment_paints_along_its_length() {
        let mut bmp = Bitmap::new(SurfaceSize::new(100, 100));
        bmp.stroke_segment(&seg(10.0, 10.0, 50.0, 50.0, RED, 10));

        assert_eq!(bmp.pixel(30, 30), Some(RED));
        assert_eq!(bmp.pixel(49, 49), Some(RED));
        assert_eq!(bmp.pixel(60, 60), Some(Color::TRANSPARENT));
        assert_eq!(bmp.pixel(2, 2), Some(Color::TRANSPARENT));
    }

    #[test]
    fn caps_are_round() {
        let mut bmp = Bitmap::new(SurfaceSize::new(100, 100));
        bmp.stroke_segment(&seg(20.0, 20.0, 60.0, 20.0, RED, 10));

        // Past the endpoint, on axis: inside the cap
        assert_eq!(bmp.pixel(16, 20), Some(RED));
        // Past the endpoint, at the corner a square cap would fill
        assert_eq!(bmp.pixel(15, 15), Some(Color::TRANSPARENT));
    }

    #[test]
    fn eraser_paint_is_not_blank() {
        let mut bmp = Bitmap::new(SurfaceSize::new(30, 30));
        bmp.stroke_segment(&seg(5.0, 5.0, 25.0, 5.0, Color::WHITE, 4));
        assert!(!bmp.is_blank());
        assert_eq!(bmp.pixel(15, 5), Some(Color::WHITE));
    }

    #[test]
    fn zero_width_paints_nothing() {
        let mut bmp = Bitmap::new(SurfaceSize::new(40, 40));
        bmp.stroke_segment(&seg(0.0, 0.0, 39.0, 39.0, RED, 0));
        assert!(bmp.is_blank());
    }

    #[test]
    fn segments_are_clipped_to_the_buffer() {
        let mut bmp = Bitmap::new(SurfaceSize::new(20, 20));
        bmp.stroke_segment(&seg(-50.0, 10.0, 70.0, 10.0, RED, 4));
        assert_eq!(bmp.pixel(0, 10), Some(RED));
        assert_eq!(bmp.pixel(19, 10), Some(RED));

        bmp.clear();
        bmp.stroke_segment(&seg(200.0, 200.0, 300.0, 300.0, RED, 4));
        assert!(bmp.is_blank());
    }

    #[test]
    fn single_point_segment_leaves_a_dot() {
        let mut bmp = Bitmap::new(SurfaceSize::new(20, 20));
        bmp.stroke_segment(&seg(10.0, 10.0, 10.0, 10.0, RED, 6));
        assert_eq!(bmp.pixel(10, 10), Some(RED));
        assert!(bmp.painted_pixels() > 1);
    }

    #[test]
    fn clear_and_resize_discard_content() {
        let mut bmp = Bitmap::new(SurfaceSize::new(50, 50));
        bmp.stroke_segment(&seg(5.0, 5.0, 45.0, 45.0, RED, 8));
        assert!(!bmp.is_blank());

        bmp.clear();
        assert!(bmp.is_blank());
        bmp.clear();
        assert!(bmp.is_blank());

        bmp.stroke_segment(&seg(5.0, 5.0, 45.0, 45.0, RED, 8));
        bmp.resize(SurfaceSize::new(60, 30));
        assert_eq!(bmp.size(), SurfaceSize::new(60, 30));
        assert_eq!(bmp.pixels().len(), 60 * 30);
        assert!(bmp.is_blank());
    }
}
