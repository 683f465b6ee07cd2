//! WASM bridge for Scribble — mounts the drawing pad into a web page.
//!
//! Compiled via `wasm-pack build --target web`. JavaScript calls
//! `SketchApp.mount("app")` once; everything after that is driven by DOM
//! events routed into `SketchPad`.

mod dom;
mod listeners;
mod render2d;

use dom::ControlBarDom;
use listeners::Listeners;
use render2d::CanvasSurface;
use scribble_core::config::PadConfig;
use scribble_editor::{
    ControlAction, InputEvent, POINTER_EVENT_KINDS, ShortcutMap, SketchPad, SurfaceOrigin, Touches,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Event, HtmlElement, HtmlInputElement, HtmlTextAreaElement, KeyboardEvent, MouseEvent,
    TouchEvent, TouchList, Window,
};

/// Input types that take no typed text; keys over them stay shortcuts.
const NON_TEXT_INPUTS: [&str; 9] = [
    "button", "checkbox", "color", "file", "image", "radio", "range", "reset", "submit",
];

struct AppState {
    pad: SketchPad<CanvasSurface>,
    bar: ControlBarDom,
}

impl AppState {
    /// Current screen position of the canvas's bounding box.
    fn origin(&self) -> SurfaceOrigin {
        let rect = self.pad.surface().canvas().get_bounding_client_rect();
        SurfaceOrigin::new(rect.left(), rect.top())
    }

    fn control(&mut self, action: ControlAction) {
        self.pad.apply_control(action);
        self.bar.sync(self.pad.tools());
    }
}

type SharedState = Rc<RefCell<AppState>>;

/// A mounted drawing pad.
///
/// Owns every DOM listener it registered; `unmount()` or dropping the
/// handle removes them, including the window `resize` listener.
#[wasm_bindgen]
pub struct SketchApp {
    state: SharedState,
    listeners: Listeners,
    root: HtmlElement,
}

#[wasm_bindgen]
impl SketchApp {
    /// Build the canvas and control bar inside the element with id
    /// `container_id`. `config_json` is an optional `PadConfig` object.
    pub fn mount(container_id: &str, config_json: Option<String>) -> Result<SketchApp, JsValue> {
        init_logging();

        let config = PadConfig::from_json(config_json.as_deref().unwrap_or_default())
            .map_err(|e| JsValue::from_str(&e))?;

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("Missing window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("Missing document"))?;
        let container = document
            .get_element_by_id(container_id)
            .ok_or_else(|| JsValue::from_str(&format!("Missing container #{container_id}")))?;

        let root = document
            .create_element("div")?
            .dyn_into::<HtmlElement>()
            .map_err(|_| JsValue::from_str("<div> has unexpected type"))?;
        root.set_class_name("scribble");
        let style = root.style();
        style.set_property("display", "flex")?;
        style.set_property("flex-direction", "column")?;
        style.set_property("width", "100vw")?;
        style.set_property("height", "100vh")?;
        style.set_property("overflow", "hidden")?;
        style.set_property("background", &config.background)?;

        let canvas = dom::create_canvas(&document, &config.background)?;
        let surface = CanvasSurface::new(canvas.clone())
            .ok_or_else(|| JsValue::from_str("Missing canvas context"))?;
        let mut pad = SketchPad::new(surface, &config);
        let bar = ControlBarDom::build(&document, config.control_bar_height, pad.tools())?;

        root.append_child(&canvas)?;
        root.append_child(&bar.root)?;
        container.append_child(&root)?;

        if let Some((width, height)) = viewport_size(&window) {
            pad.fit_viewport(width, height);
        }

        let state = Rc::new(RefCell::new(AppState { pad, bar }));
        let mut listeners = Listeners::new();
        register_canvas(&mut listeners, &canvas, &state)?;
        register_controls(&mut listeners, &state)?;
        register_window(&mut listeners, &window, &state)?;

        log::info!(
            "scribble mounted in #{container_id} with {} listeners",
            listeners.len()
        );
        Ok(SketchApp {
            state,
            listeners,
            root,
        })
    }

    /// Remove listeners and the pad's DOM.
    pub fn unmount(mut self) {
        self.listeners.clear();
        self.root.remove();
        log::info!("scribble unmounted");
    }

    pub fn set_color(&self, hex: &str) {
        self.state
            .borrow_mut()
            .control(ControlAction::SetColor(hex.to_string()));
    }

    /// Stored stroke color as `#rrggbb`, regardless of the eraser.
    pub fn color(&self) -> String {
        self.state.borrow().pad.tools().color.to_hex()
    }

    pub fn set_brush_size(&self, size: i32) {
        self.state
            .borrow_mut()
            .control(ControlAction::SetBrushSize(size));
    }

    pub fn brush_size(&self) -> u8 {
        self.state.borrow().pad.tools().brush_size.get()
    }

    /// Flip the eraser; returns the new state.
    pub fn toggle_eraser(&self) -> bool {
        let mut state = self.state.borrow_mut();
        state.control(ControlAction::ToggleEraser);
        state.pad.tools().eraser
    }

    pub fn is_eraser(&self) -> bool {
        self.state.borrow().pad.tools().eraser
    }

    pub fn is_drawing(&self) -> bool {
        !matches!(
            self.state.borrow().pad.tracker_state(),
            scribble_editor::TrackerState::Idle
        )
    }

    pub fn clear(&self) {
        self.state.borrow_mut().control(ControlAction::Clear);
    }
}

// ─── Listener wiring ─────────────────────────────────────────────────────

fn register_canvas(
    listeners: &mut Listeners,
    canvas: &web_sys::HtmlCanvasElement,
    state: &SharedState,
) -> Result<(), JsValue> {
    for kind in POINTER_EVENT_KINDS {
        let state = Rc::clone(state);
        listeners.on(canvas, kind, move |event: Event| {
            let Some(input) = pointer_input(kind, &event) else {
                return;
            };
            // Keep touches from scrolling the page or synthesizing mouse events.
            if kind.starts_with("touch") {
                event.prevent_default();
            }
            let Ok(mut app) = state.try_borrow_mut() else {
                return;
            };
            let origin = app.origin();
            app.pad.handle_input(&input, origin);
        })?;
    }
    Ok(())
}

fn register_controls(listeners: &mut Listeners, state: &SharedState) -> Result<(), JsValue> {
    let (color, size, eraser, clear) = {
        let app = state.borrow();
        (
            app.bar.color.clone(),
            app.bar.size.clone(),
            app.bar.eraser.clone(),
            app.bar.clear.clone(),
        )
    };

    {
        let state = Rc::clone(state);
        listeners.on(&color, "input", move |event: Event| {
            let Some(value) = input_value(&event) else {
                return;
            };
            if let Ok(mut app) = state.try_borrow_mut() {
                app.control(ControlAction::SetColor(value));
            }
        })?;
    }

    {
        let state = Rc::clone(state);
        listeners.on(&size, "input", move |event: Event| {
            let Some(value) = input_value(&event) else {
                return;
            };
            let Ok(size) = value.parse::<i32>() else {
                log::warn!("ignoring brush size {value:?}");
                return;
            };
            if let Ok(mut app) = state.try_borrow_mut() {
                app.control(ControlAction::SetBrushSize(size));
            }
        })?;
    }

    {
        let state = Rc::clone(state);
        listeners.on(&eraser, "click", move |_| {
            if let Ok(mut app) = state.try_borrow_mut() {
                app.control(ControlAction::ToggleEraser);
            }
        })?;
    }

    {
        let state = Rc::clone(state);
        listeners.on(&clear, "click", move |_| {
            if let Ok(mut app) = state.try_borrow_mut() {
                app.control(ControlAction::Clear);
            }
        })?;
    }

    Ok(())
}

fn register_window(
    listeners: &mut Listeners,
    window: &Window,
    state: &SharedState,
) -> Result<(), JsValue> {
    {
        let state = Rc::clone(state);
        let window_cb = window.clone();
        listeners.on(window, "resize", move |_| {
            let Some((width, height)) = viewport_size(&window_cb) else {
                return;
            };
            if let Ok(mut app) = state.try_borrow_mut() {
                app.pad
                    .handle_input(&InputEvent::Resize { width, height }, SurfaceOrigin::ZERO);
            }
        })?;
    }

    {
        let state = Rc::clone(state);
        listeners.on(window, "keydown", move |event: Event| {
            let Some(key) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let input = InputEvent::Key {
                key: key.key(),
                ctrl: key.ctrl_key(),
                shift: key.shift_key(),
                alt: key.alt_key(),
                meta: key.meta_key(),
                text_entry: targets_text_entry(&event),
            };
            if ShortcutMap::resolve_event(&input).is_none() {
                return;
            }
            event.prevent_default();
            if let Ok(mut app) = state.try_borrow_mut() {
                app.pad.handle_input(&input, SurfaceOrigin::ZERO);
                app.bar.sync(app.pad.tools());
            }
        })?;
    }

    Ok(())
}

// ─── Event conversion ────────────────────────────────────────────────────

fn pointer_input(kind: &str, event: &Event) -> Option<InputEvent> {
    let client = event
        .dyn_ref::<MouseEvent>()
        .map(|m| (m.client_x() as f64, m.client_y() as f64));
    let touches = event
        .dyn_ref::<TouchEvent>()
        .map(|t| touch_points(&t.touches()))
        .unwrap_or_default();
    InputEvent::from_dom(kind, client, touches)
}

/// Whether a key event is aimed at something the user is typing into.
fn targets_text_entry(event: &Event) -> bool {
    let Some(target) = event.target() else {
        return false;
    };
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return !NON_TEXT_INPUTS.contains(&input.type_().as_str());
    }
    if target.dyn_ref::<HtmlTextAreaElement>().is_some() {
        return true;
    }
    target
        .dyn_ref::<HtmlElement>()
        .is_some_and(|el| el.is_content_editable())
}

fn touch_points(list: &TouchList) -> Touches {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|t| scribble_editor::TouchPoint {
            x: t.client_x() as f64,
            y: t.client_y() as f64,
        })
        .collect()
}

fn input_value(event: &Event) -> Option<String> {
    let input = event.target()?.dyn_into::<HtmlInputElement>().ok()?;
    Some(input.value())
}

fn viewport_size(window: &Window) -> Option<(f64, f64)> {
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width, height))
}

fn init_logging() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
        std::panic::set_hook(Box::new(|info| {
            let msg = format!("Scribble WASM panic: {info}");
            web_sys::console::error_1(&msg.into());
        }));
    });
}
