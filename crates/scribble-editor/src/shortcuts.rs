//! Keyboard shortcut mapping.
//!
//! Maps key + modifier combos onto control bar actions, so the bar can be
//! driven without the mouse.
//!
//! | Key | Action |
//! |-----|--------|
//! | `E` | Toggle eraser |
//! | `[` / `]` | Brush size −1 / +1 |
//! | `⌘/Ctrl + Delete` or `⌘/Ctrl + Backspace` | Clear |

use crate::controls::ControlAction;
use crate::input::InputEvent;

pub struct ShortcutMap;

impl ShortcutMap {
    /// Resolve a key event. `meta` counts as the command modifier on
    /// macOS and `ctrl` everywhere else.
    pub fn resolve(
        key: &str,
        ctrl: bool,
        shift: bool,
        alt: bool,
        meta: bool,
    ) -> Option<ControlAction> {
        let cmd = ctrl || meta;
        if alt {
            return None;
        }

        match key {
            "Delete" | "Backspace" if cmd => Some(ControlAction::Clear),
            _ if cmd => None,
            "e" | "E" if !shift => Some(ControlAction::ToggleEraser),
            "[" => Some(ControlAction::StepBrushSize(-1)),
            "]" => Some(ControlAction::StepBrushSize(1)),
            _ => None,
        }
    }

    /// Resolve a `Key` event. Keys typed into a text field are never
    /// shortcuts; other event kinds resolve to `None`.
    pub fn resolve_event(event: &InputEvent) -> Option<ControlAction> {
        match event {
            InputEvent::Key {
                key,
                ctrl,
                shift,
                alt,
                meta,
                text_entry: false,
            } => Self::resolve(key, *ctrl, *shift, *alt, *meta),
            _ => None,
        }
    }
}
