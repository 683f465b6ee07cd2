//! Editor logic for the Scribble drawing pad.
//!
//! Platform-independent: the WASM bridge feeds browser events in as
//! `InputEvent`s and hands a canvas-backed `Surface` to `SketchPad`.

pub mod controls;
pub mod input;
pub mod pad;
pub mod shortcuts;
pub mod tracker;

pub use controls::{ControlAction, ControlBar, ControlEffect};
pub use input::{InputEvent, POINTER_EVENT_KINDS, SurfaceOrigin, TouchPoint, Touches};
pub use pad::SketchPad;
pub use shortcuts::ShortcutMap;
pub use tracker::{InputTracker, TrackerState};
