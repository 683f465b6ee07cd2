//! Control bar actions.
//!
//! Every control is a direct setter over the shared `ToolState`. The only
//! validation is what the native inputs already guarantee: the brush size
//! is clamped and a color must parse.

use scribble_core::model::{BrushSize, Color, ToolState};

/// A user interaction with the control bar (or its keyboard shortcut).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlAction {
    /// Color picker changed; carries the picker's hex string.
    SetColor(String),
    /// Slider moved to an absolute value.
    SetBrushSize(i32),
    /// Nudge the slider by a signed number of steps.
    StepBrushSize(i32),
    ToggleEraser,
    /// Wipe the surface. Irreversible.
    Clear,
}

/// What the caller must do after an action was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEffect {
    /// Tool state was updated; only the bar needs refreshing.
    ToolsChanged,
    /// The surface must be cleared.
    ClearSurface,
    /// Nothing happened.
    Ignored,
}

pub struct ControlBar;

impl ControlBar {
    pub fn apply(action: ControlAction, tools: &mut ToolState) -> ControlEffect {
        match action {
            ControlAction::SetColor(hex) => match Color::from_hex(&hex) {
                Some(color) => {
                    tools.color = color;
                    ControlEffect::ToolsChanged
                }
                None => {
                    log::warn!("ignoring unparseable color {hex:?}");
                    ControlEffect::Ignored
                }
            },
            ControlAction::SetBrushSize(value) => {
                tools.brush_size = BrushSize::new(value);
                ControlEffect::ToolsChanged
            }
            ControlAction::StepBrushSize(delta) => {
                let next = tools.brush_size.step(delta);
                if next == tools.brush_size {
                    return ControlEffect::Ignored;
                }
                tools.brush_size = next;
                ControlEffect::ToolsChanged
            }
            ControlAction::ToggleEraser => {
                tools.eraser = !tools.eraser;
                log::debug!("eraser {}", if tools.eraser { "on" } else { "off" });
                ControlEffect::ToolsChanged
            }
            ControlAction::Clear => ControlEffect::ClearSurface,
        }
    }
}
