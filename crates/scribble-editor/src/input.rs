//! Input abstraction layer.
//!
//! Normalizes mouse, touch, window-resize, and keyboard events into a
//! unified `InputEvent` enum consumed by the pad. Pointer coordinates are
//! client (screen) space; the tracker maps them onto the surface.

use scribble_core::model::Point;
use smallvec::SmallVec;

/// One active touch contact, in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub x: f64,
    pub y: f64,
}

/// Touch lists rarely exceed two fingers.
pub type Touches = SmallVec<[TouchPoint; 2]>;

/// DOM event types on the surface element that feed the tracker.
pub const POINTER_EVENT_KINDS: [&str; 8] = [
    "mousedown",
    "mousemove",
    "mouseup",
    "mouseleave",
    "touchstart",
    "touchmove",
    "touchend",
    "touchcancel",
];

/// A normalized input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Mouse button pressed over the surface.
    PointerDown { x: f64, y: f64 },

    PointerMove { x: f64, y: f64 },

    /// Mouse button released.
    PointerUp,

    /// Pointer left the surface element.
    PointerLeave,

    /// Touch started. Only the first touch drives drawing.
    TouchStart { touches: Touches },

    TouchMove { touches: Touches },

    TouchEnd,

    /// Window viewport changed.
    Resize { width: f64, height: f64 },

    /// Keyboard shortcut.
    Key {
        key: String,
        ctrl: bool,
        shift: bool,
        alt: bool,
        meta: bool,
        /// Focus is in a text field or contenteditable element; the key
        /// belongs to it, not to the pad.
        text_entry: bool,
    },
}

impl InputEvent {
    pub fn touch_start(touches: impl IntoIterator<Item = (f64, f64)>) -> Self {
        Self::TouchStart {
            touches: touches.into_iter().map(|(x, y)| TouchPoint { x, y }).collect(),
        }
    }

    pub fn touch_move(touches: impl IntoIterator<Item = (f64, f64)>) -> Self {
        Self::TouchMove {
            touches: touches.into_iter().map(|(x, y)| TouchPoint { x, y }).collect(),
        }
    }

    /// A key press without modifiers.
    pub fn key(key: impl Into<String>) -> Self {
        Self::Key {
            key: key.into(),
            ctrl: false,
            shift: false,
            alt: false,
            meta: false,
            text_entry: false,
        }
    }

    /// Map a DOM event type and its extracted payload onto an input event.
    /// `client` is the mouse position for mouse events; `touches` is the
    /// event's active touch list for touch events.
    pub fn from_dom(kind: &str, client: Option<(f64, f64)>, touches: Touches) -> Option<Self> {
        match kind {
            "mousedown" => client.map(|(x, y)| Self::PointerDown { x, y }),
            "mousemove" => client.map(|(x, y)| Self::PointerMove { x, y }),
            "mouseup" => Some(Self::PointerUp),
            "mouseleave" => Some(Self::PointerLeave),
            "touchstart" => Some(Self::TouchStart { touches }),
            "touchmove" => Some(Self::TouchMove { touches }),
            "touchend" | "touchcancel" => Some(Self::TouchEnd),
            _ => None,
        }
    }

    /// Client-space pointer position: the mouse position, or the first
    /// touch point. `None` for touch events with no touches and for
    /// non-pointer events.
    pub fn position(&self) -> Option<(f64, f64)> {
        match self {
            Self::PointerDown { x, y } | Self::PointerMove { x, y } => Some((*x, *y)),
            Self::TouchStart { touches } | Self::TouchMove { touches } => {
                touches.first().map(|t| (t.x, t.y))
            }
            _ => None,
        }
    }

    /// Events that begin a stroke.
    pub fn is_press(&self) -> bool {
        matches!(self, Self::PointerDown { .. } | Self::TouchStart { .. })
    }

    /// Events that extend a stroke.
    pub fn is_move(&self) -> bool {
        matches!(self, Self::PointerMove { .. } | Self::TouchMove { .. })
    }

    /// Events that end a stroke.
    pub fn is_release(&self) -> bool {
        matches!(self, Self::PointerUp | Self::PointerLeave | Self::TouchEnd)
    }
}

/// Screen-space origin of the surface's bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceOrigin {
    pub left: f64,
    pub top: f64,
}

impl SurfaceOrigin {
    pub const ZERO: SurfaceOrigin = SurfaceOrigin { left: 0.0, top: 0.0 };

    pub const fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }

    /// Translate client coordinates to surface-local coordinates.
    pub fn to_local(&self, x: f64, y: f64) -> Point {
        Point::new(x - self.left, y - self.top)
    }
}
