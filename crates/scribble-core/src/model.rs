//! Core drawing model.
//!
//! Nothing here describes a drawing: the surface bitmap is the only drawing
//! state. These types parameterize how the next segment is rendered.

use serde::{Deserialize, Serialize};

// ─── Color ───────────────────────────────────────────────────────────────

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Helper to parse a single hex digit.
pub fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#RGB` or `#RRGGBB`. The `#` is optional.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let bytes = hex.as_bytes();

        match bytes.len() {
            3 => {
                let r = hex_val(bytes[0])?;
                let g = hex_val(bytes[1])?;
                let b = hex_val(bytes[2])?;
                Some(Self::rgb(r * 17, g * 17, b * 17))
            }
            6 => {
                let r = hex_val(bytes[0])? << 4 | hex_val(bytes[1])?;
                let g = hex_val(bytes[2])? << 4 | hex_val(bytes[3])?;
                let b = hex_val(bytes[4])? << 4 | hex_val(bytes[5])?;
                Some(Self::rgb(r, g, b))
            }
            _ => None,
        }
    }

    /// Lowercase `#rrggbb`, the format a native color picker reports.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

// ─── Brush size ──────────────────────────────────────────────────────────

/// Stroke width in pixels, always within `[MIN, MAX]`. Deserializing goes
/// through the same clamp as [`BrushSize::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub struct BrushSize(u8);

impl BrushSize {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 25;
    pub const DEFAULT: BrushSize = BrushSize(10);

    /// Clamp any integer into range.
    pub fn new(value: i32) -> Self {
        Self(value.clamp(Self::MIN as i32, Self::MAX as i32) as u8)
    }

    /// Move by `delta` steps, clamping at either end.
    pub fn step(self, delta: i32) -> Self {
        Self::new(self.0 as i32 + delta)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Label shown next to the slider.
    pub fn label(self) -> String {
        format!("{}px", self.0)
    }
}

impl Default for BrushSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<i32> for BrushSize {
    fn from(value: i32) -> Self {
        Self::new(value)
    }
}

impl From<BrushSize> for i32 {
    fn from(size: BrushSize) -> Self {
        size.0 as i32
    }
}

// ─── Geometry ────────────────────────────────────────────────────────────

/// A position in surface-local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<Point> for kurbo::Point {
    fn from(p: Point) -> Self {
        kurbo::Point::new(p.x, p.y)
    }
}

/// Resolved paint for one segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: u8,
}

/// One straight line between two consecutive pointer positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    pub style: StrokeStyle,
}

// ─── Tool state ──────────────────────────────────────────────────────────

/// Parameters applied to newly rendered segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolState {
    pub color: Color,
    pub brush_size: BrushSize,
    pub eraser: bool,
}

impl Default for ToolState {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            brush_size: BrushSize::DEFAULT,
            eraser: false,
        }
    }
}

impl ToolState {
    /// The eraser paints `background` instead of the stored color;
    /// the stored color is left alone.
    pub fn stroke_style(&self, background: Color) -> StrokeStyle {
        StrokeStyle {
            color: if self.eraser { background } else { self.color },
            width: self.brush_size.get(),
        }
    }
}
