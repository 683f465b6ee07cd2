//! Pad configuration.
//!
//! Every field has a default, so an empty JSON object (or no config at
//! all) gives the stock pad: white background, black ink, 10px brush,
//! 80px control bar.

use crate::model::{BrushSize, Color, ToolState};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONTROL_BAR_HEIGHT: u32 = 80;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct PadConfig {
    /// Height in pixels reserved below the surface for the control bar.
    pub control_bar_height: u32,
    /// Surface background; also the color the eraser paints with.
    pub background: String,
    pub default_color: String,
    /// Clamped into the brush range.
    pub default_brush_size: i32,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            control_bar_height: DEFAULT_CONTROL_BAR_HEIGHT,
            background: Color::WHITE.to_hex(),
            default_color: Color::BLACK.to_hex(),
            default_brush_size: BrushSize::DEFAULT.get() as i32,
        }
    }
}

impl PadConfig {
    /// Parse and validate a JSON config. Blank input yields the defaults.
    pub fn from_json(json: &str) -> Result<Self, String> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: PadConfig =
            serde_json::from_str(json).map_err(|e| format!("invalid pad config: {e}"))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if Color::from_hex(&self.background).is_none() {
            return Err(format!("invalid background color: {:?}", self.background));
        }
        if Color::from_hex(&self.default_color).is_none() {
            return Err(format!("invalid default color: {:?}", self.default_color));
        }
        Ok(())
    }

    pub fn background_color(&self) -> Color {
        Color::from_hex(&self.background).unwrap_or(Color::WHITE)
    }

    /// Tool state a freshly mounted pad starts with.
    pub fn initial_tools(&self) -> ToolState {
        ToolState {
            color: Color::from_hex(&self.default_color).unwrap_or(Color::BLACK),
            brush_size: BrushSize::new(self.default_brush_size),
            eraser: false,
        }
    }
}
