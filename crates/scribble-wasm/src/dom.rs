//! DOM construction for the canvas and the control bar.

use scribble_core::model::{BrushSize, ToolState};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, HtmlButtonElement, HtmlCanvasElement, HtmlElement, HtmlInputElement,
    HtmlSpanElement,
};

const ERASER_ON_BG: &str = "#ffffff";
const ERASER_OFF_BG: &str = "#374151";
const CLEAR_BG: &str = "#ef4444";

fn create<T: JsCast>(document: &Document, tag: &str) -> Result<T, JsValue> {
    document
        .create_element(tag)?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("<{tag}> has unexpected type")))
}

fn set_styles(el: &HtmlElement, styles: &[(&str, &str)]) -> Result<(), JsValue> {
    let style = el.style();
    for (name, value) in styles {
        style.set_property(name, value)?;
    }
    Ok(())
}

/// Full-width canvas with touch scrolling disabled. Cleared pixels are
/// transparent, so the CSS background is what a blank surface shows.
pub fn create_canvas(document: &Document, background: &str) -> Result<HtmlCanvasElement, JsValue> {
    let canvas: HtmlCanvasElement = create(document, "canvas")?;
    canvas.set_class_name("scribble-surface");
    set_styles(
        &canvas,
        &[
            ("display", "block"),
            ("touch-action", "none"),
            ("background", background),
            ("cursor", "crosshair"),
        ],
    )?;
    Ok(canvas)
}

/// The control strip under the canvas: color picker, brush slider with
/// its pixel label, eraser toggle, clear button.
pub struct ControlBarDom {
    pub root: HtmlElement,
    pub color: HtmlInputElement,
    pub size: HtmlInputElement,
    pub size_label: HtmlSpanElement,
    pub eraser: HtmlButtonElement,
    pub clear: HtmlButtonElement,
}

impl ControlBarDom {
    pub fn build(document: &Document, height: u32, tools: &ToolState) -> Result<Self, JsValue> {
        let root: HtmlElement = create(document, "div")?;
        root.set_class_name("scribble-controls");
        let height_px = format!("{height}px");
        set_styles(
            &root,
            &[
                ("height", height_px.as_str()),
                ("box-sizing", "border-box"),
                ("padding", "8px"),
                ("display", "flex"),
                ("align-items", "center"),
                ("justify-content", "space-between"),
                ("background", "rgba(0, 0, 0, 0.8)"),
            ],
        )?;

        let left: HtmlElement = create(document, "div")?;
        set_styles(&left, &[("display", "flex"), ("align-items", "center"), ("gap", "16px")])?;

        let color: HtmlInputElement = create(document, "input")?;
        color.set_type("color");
        color.set_title("Stroke color");
        set_styles(
            &color,
            &[
                ("width", "48px"),
                ("height", "48px"),
                ("border-radius", "50%"),
                ("border", "2px solid #ffffff"),
                ("cursor", "pointer"),
            ],
        )?;

        let size_group: HtmlElement = create(document, "div")?;
        set_styles(&size_group, &[("display", "flex"), ("flex-direction", "column")])?;

        let size: HtmlInputElement = create(document, "input")?;
        size.set_type("range");
        size.set_min(&BrushSize::MIN.to_string());
        size.set_max(&BrushSize::MAX.to_string());
        size.set_step("1");
        size.set_title("Brush size");
        set_styles(&size, &[("width", "192px"), ("accent-color", "#ffffff")])?;

        let size_label: HtmlSpanElement = create(document, "span")?;
        set_styles(&size_label, &[("color", "#ffffff"), ("font-size", "14px")])?;

        size_group.append_child(&size)?;
        size_group.append_child(&size_label)?;
        left.append_child(&color)?;
        left.append_child(&size_group)?;

        let right: HtmlElement = create(document, "div")?;
        set_styles(&right, &[("display", "flex"), ("align-items", "center"), ("gap", "16px")])?;

        let eraser: HtmlButtonElement = create(document, "button")?;
        eraser.set_type("button");
        eraser.set_text_content(Some("Eraser"));
        set_styles(&eraser, &round_button("#000000"))?;

        let clear: HtmlButtonElement = create(document, "button")?;
        clear.set_type("button");
        clear.set_text_content(Some("Clear"));
        set_styles(&clear, &round_button("#ffffff"))?;
        clear.style().set_property("background", CLEAR_BG)?;

        right.append_child(&eraser)?;
        right.append_child(&clear)?;
        root.append_child(&left)?;
        root.append_child(&right)?;

        let bar = Self {
            root,
            color,
            size,
            size_label,
            eraser,
            clear,
        };
        bar.sync(tools);
        Ok(bar)
    }

    /// Reflect tool state in the controls.
    pub fn sync(&self, tools: &ToolState) {
        self.color.set_value(&tools.color.to_hex());
        self.size.set_value(&tools.brush_size.get().to_string());
        self.size_label
            .set_text_content(Some(&tools.brush_size.label()));

        let bg = if tools.eraser { ERASER_ON_BG } else { ERASER_OFF_BG };
        if self.eraser.style().set_property("background", bg).is_err() {
            log::warn!("could not restyle eraser button");
        }
        let pressed = if tools.eraser { "true" } else { "false" };
        if self.eraser.set_attribute("aria-pressed", pressed).is_err() {
            log::warn!("could not set eraser aria-pressed");
        }
    }
}

fn round_button(text_color: &'static str) -> [(&'static str, &'static str); 6] {
    [
        ("padding", "12px"),
        ("border", "none"),
        ("border-radius", "9999px"),
        ("color", text_color),
        ("font-weight", "600"),
        ("cursor", "pointer"),
    ]
}
