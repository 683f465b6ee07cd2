//! The drawing pad controller.
//!
//! Owns the surface, the tool state, and the input tracker. All
//! interaction (pointer, touch, resize, keyboard, control bar) goes
//! through this struct, one event at a time and to completion.

use crate::controls::{ControlAction, ControlBar, ControlEffect};
use crate::input::{InputEvent, SurfaceOrigin};
use crate::shortcuts::ShortcutMap;
use crate::tracker::{InputTracker, TrackerState};
use scribble_core::config::PadConfig;
use scribble_core::model::{Color, ToolState};
use scribble_core::surface::{Surface, SurfaceSize};

pub struct SketchPad<S: Surface> {
    surface: S,
    tools: ToolState,
    tracker: InputTracker,
    background: Color,
    control_bar_height: u32,
}

impl<S: Surface> SketchPad<S> {
    pub fn new(surface: S, config: &PadConfig) -> Self {
        Self {
            surface,
            tools: config.initial_tools(),
            tracker: InputTracker::new(),
            background: config.background_color(),
            control_bar_height: config.control_bar_height,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn tracker_state(&self) -> TrackerState {
        self.tracker.state()
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn control_bar_height(&self) -> u32 {
        self.control_bar_height
    }

    /// Size the surface to the viewport, minus the control bar. Content is
    /// discarded, as with a native canvas resize.
    pub fn fit_viewport(&mut self, viewport_width: f64, viewport_height: f64) {
        let size =
            SurfaceSize::for_viewport(viewport_width, viewport_height, self.control_bar_height);
        log::debug!(
            "viewport {viewport_width}x{viewport_height} -> surface {}x{}",
            size.width,
            size.height
        );
        self.surface.resize(size);
    }

    /// Handle one input event. Returns true if the surface changed.
    pub fn handle_input(&mut self, event: &InputEvent, origin: SurfaceOrigin) -> bool {
        match event {
            InputEvent::Resize { width, height } => {
                self.fit_viewport(*width, *height);
                true
            }
            InputEvent::Key { .. } => match ShortcutMap::resolve_event(event) {
                Some(action) => self.apply_control(action),
                None => false,
            },
            _ => match self
                .tracker
                .handle(event, origin, &self.tools, self.background)
            {
                Some(segment) => {
                    self.surface.stroke_segment(&segment);
                    true
                }
                None => false,
            },
        }
    }

    /// Apply a control bar action. Returns true if the surface changed.
    pub fn apply_control(&mut self, action: ControlAction) -> bool {
        match ControlBar::apply(action, &mut self.tools) {
            ControlEffect::ClearSurface => {
                self.clear();
                true
            }
            ControlEffect::ToolsChanged | ControlEffect::Ignored => false,
        }
    }

    pub fn clear(&mut self) {
        log::debug!("clear surface");
        self.surface.clear();
    }
}
