//! Integration tests: full pointer sessions through `SketchPad`.
//!
//! A recording surface captures every call the pad makes, so segment
//! counts and styles can be checked exactly; the software bitmap checks
//! what actually ends up on screen.

use pretty_assertions::assert_eq;
use scribble_core::config::PadConfig;
use scribble_core::model::{Color, Point, Segment};
use scribble_core::raster::Bitmap;
use scribble_core::surface::{Surface, SurfaceSize};
use scribble_editor::{ControlAction, InputEvent, SketchPad, SurfaceOrigin, TrackerState};

const RED: Color = Color::rgb(255, 0, 0);

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Resize(SurfaceSize),
    Clear,
    Stroke(Segment),
}

struct RecordingSurface {
    size: SurfaceSize,
    calls: Vec<Call>,
}

impl RecordingSurface {
    fn new() -> Self {
        Self {
            size: SurfaceSize::new(800, 520),
            calls: Vec::new(),
        }
    }

    fn segments(&self) -> Vec<Segment> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Stroke(s) => Some(*s),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn resize(&mut self, size: SurfaceSize) {
        self.size = size;
        self.calls.push(Call::Resize(size));
    }

    fn clear(&mut self) {
        self.calls.push(Call::Clear);
    }

    fn stroke_segment(&mut self, segment: &Segment) {
        self.calls.push(Call::Stroke(*segment));
    }
}

fn down(x: f64, y: f64) -> InputEvent {
    InputEvent::PointerDown { x, y }
}

fn mv(x: f64, y: f64) -> InputEvent {
    InputEvent::PointerMove { x, y }
}

fn feed<S: Surface>(pad: &mut SketchPad<S>, events: &[InputEvent]) {
    for event in events {
        pad.handle_input(event, SurfaceOrigin::ZERO);
    }
}

// ─── Segment sequencing ─────────────────────────────────────────────────

#[test]
fn n_moves_render_n_chained_segments() {
    let mut pad = SketchPad::new(RecordingSurface::new(), &PadConfig::default());
    let path = [(10.0, 10.0), (20.0, 15.0), (35.0, 40.0), (35.0, 41.0), (90.0, 12.0)];

    let mut events = vec![down(path[0].0, path[0].1)];
    events.extend(path[1..].iter().map(|&(x, y)| mv(x, y)));
    events.push(InputEvent::PointerUp);
    feed(&mut pad, &events);

    let segments = pad.surface().segments();
    assert_eq!(segments.len(), path.len() - 1);
    for (i, seg) in segments.iter().enumerate() {
        assert_eq!(seg.from, Point::new(path[i].0, path[i].1));
        assert_eq!(seg.to, Point::new(path[i + 1].0, path[i + 1].1));
    }
    assert_eq!(pad.tracker_state(), TrackerState::Idle);
}

#[test]
fn moves_after_release_render_nothing() {
    let mut pad = SketchPad::new(RecordingSurface::new(), &PadConfig::default());
    feed(
        &mut pad,
        &[
            mv(1.0, 1.0),
            down(5.0, 5.0),
            mv(6.0, 6.0),
            InputEvent::PointerLeave,
            mv(7.0, 7.0),
            mv(8.0, 8.0),
        ],
    );
    assert_eq!(pad.surface().segments().len(), 1);
}

#[test]
fn touch_stroke_uses_surface_offset() {
    let mut pad = SketchPad::new(RecordingSurface::new(), &PadConfig::default());
    let origin = SurfaceOrigin::new(8.0, 8.0);
    pad.handle_input(&InputEvent::touch_start([(18.0, 18.0)]), origin);
    pad.handle_input(&InputEvent::touch_move([(28.0, 58.0), (400.0, 400.0)]), origin);
    pad.handle_input(&InputEvent::TouchEnd, origin);
    pad.handle_input(&InputEvent::touch_move([(99.0, 99.0)]), origin);

    assert_eq!(
        pad.surface().segments(),
        vec![Segment {
            from: Point::new(10.0, 10.0),
            to: Point::new(20.0, 50.0),
            style: pad.tools().stroke_style(Color::WHITE),
        }]
    );
}

// ─── Tool state ─────────────────────────────────────────────────────────

#[test]
fn eraser_mid_stroke_switches_to_background() {
    let mut pad = SketchPad::new(RecordingSurface::new(), &PadConfig::default());
    pad.apply_control(ControlAction::SetColor("#ff0000".into()));

    feed(&mut pad, &[down(0.0, 0.0), mv(10.0, 0.0)]);
    pad.apply_control(ControlAction::ToggleEraser);
    feed(&mut pad, &[mv(20.0, 0.0), InputEvent::PointerUp]);

    let segments = pad.surface().segments();
    assert_eq!(segments[0].style.color, RED);
    assert_eq!(segments[1].style.color, Color::WHITE);
    assert_eq!(pad.tools().color, RED);
}

#[test]
fn width_follows_slider_at_render_time() {
    let mut pad = SketchPad::new(RecordingSurface::new(), &PadConfig::default());
    feed(&mut pad, &[down(0.0, 0.0), mv(1.0, 1.0)]);
    pad.apply_control(ControlAction::SetBrushSize(3));
    feed(&mut pad, &[mv(2.0, 2.0)]);
    pad.apply_control(ControlAction::SetBrushSize(40));
    feed(&mut pad, &[mv(3.0, 3.0)]);

    let widths: Vec<u8> = pad.surface().segments().iter().map(|s| s.style.width).collect();
    assert_eq!(widths, vec![10, 3, 25]);
}

// ─── Surface lifecycle ──────────────────────────────────────────────────

#[test]
fn red_stroke_then_clear() {
    let mut pad = SketchPad::new(Bitmap::new(SurfaceSize::new(100, 100)), &PadConfig::default());
    pad.apply_control(ControlAction::SetColor("#ff0000".into()));
    pad.apply_control(ControlAction::SetBrushSize(10));
    feed(&mut pad, &[down(10.0, 10.0), mv(50.0, 50.0), InputEvent::PointerUp]);

    assert_eq!(pad.surface().pixel(30, 30), Some(RED));
    assert_eq!(pad.surface().pixel(80, 20), Some(Color::TRANSPARENT));

    assert!(pad.apply_control(ControlAction::Clear));
    assert!(pad.surface().is_blank());

    // Clearing a blank surface is a visual no-op
    pad.apply_control(ControlAction::Clear);
    assert!(pad.surface().is_blank());
}

#[test]
fn resize_sets_dimensions_and_discards_strokes() {
    let mut pad = SketchPad::new(Bitmap::new(SurfaceSize::new(100, 100)), &PadConfig::default());
    feed(&mut pad, &[down(10.0, 10.0), mv(60.0, 60.0), InputEvent::PointerUp]);
    assert!(!pad.surface().is_blank());

    pad.handle_input(
        &InputEvent::Resize {
            width: 1280.0,
            height: 800.0,
        },
        SurfaceOrigin::ZERO,
    );
    assert_eq!(pad.surface().size(), SurfaceSize::new(1280, 720));
    assert!(pad.surface().is_blank());
}

#[test]
fn custom_control_bar_height() {
    let config = PadConfig::from_json(r#"{"controlBarHeight": 48}"#).unwrap();
    let mut pad = SketchPad::new(RecordingSurface::new(), &config);
    pad.fit_viewport(500.0, 300.0);
    assert_eq!(
        pad.surface().calls,
        vec![Call::Resize(SurfaceSize::new(500, 252))]
    );
}

#[test]
fn zero_brush_counts_segments_but_paints_nothing() {
    let mut pad = SketchPad::new(Bitmap::new(SurfaceSize::new(50, 50)), &PadConfig::default());
    pad.apply_control(ControlAction::SetBrushSize(0));
    let changed: Vec<bool> = [down(1.0, 1.0), mv(40.0, 40.0)]
        .iter()
        .map(|e| pad.handle_input(e, SurfaceOrigin::ZERO))
        .collect();
    assert_eq!(changed, vec![false, true]);
    assert!(pad.surface().is_blank());
}
