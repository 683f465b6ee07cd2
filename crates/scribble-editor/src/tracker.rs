//! Input tracker: turns a pointer stream into line segments.
//!
//! ```text
//!   idle ──press──▶ drawing ──move──▶ drawing (emit segment)
//!     ▲                │
//!     └──release/leave─┘
//! ```
//!
//! Moves while idle are ignored. The last position is only meaningful
//! while drawing, so it lives inside the `Drawing` state.

use crate::input::{InputEvent, SurfaceOrigin};
use scribble_core::model::{Color, Point, Segment, ToolState};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TrackerState {
    #[default]
    Idle,
    Drawing {
        /// Surface-local position the next segment starts from.
        last: Point,
    },
}

#[derive(Debug, Default)]
pub struct InputTracker {
    state: TrackerState,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> TrackerState {
        self.state
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, TrackerState::Drawing { .. })
    }

    /// Feed one event. Returns the segment to render, if any, styled with
    /// the tool state at this moment.
    pub fn handle(
        &mut self,
        event: &InputEvent,
        origin: SurfaceOrigin,
        tools: &ToolState,
        background: Color,
    ) -> Option<Segment> {
        if event.is_press() {
            // A press without a position (touch-start with no touches)
            // leaves the state as it was.
            let (x, y) = event.position()?;
            let last = origin.to_local(x, y);
            log::debug!("stroke start at ({:.1}, {:.1})", last.x, last.y);
            self.state = TrackerState::Drawing { last };
            return None;
        }

        if event.is_move() {
            let TrackerState::Drawing { last } = self.state else {
                return None;
            };
            let (x, y) = event.position()?;
            let current = origin.to_local(x, y);
            let segment = Segment {
                from: last,
                to: current,
                style: tools.stroke_style(background),
            };
            self.state = TrackerState::Drawing { last: current };
            log::trace!(
                "segment ({:.1}, {:.1}) -> ({:.1}, {:.1}) w={}",
                segment.from.x,
                segment.from.y,
                segment.to.x,
                segment.to.y,
                segment.style.width
            );
            return Some(segment);
        }

        if event.is_release() && self.is_drawing() {
            log::debug!("stroke end");
            self.state = TrackerState::Idle;
        }
        None
    }
}
