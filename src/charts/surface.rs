//! Drawing surfaces for the chart renderer

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Linear gradient between two points with `(offset, color)` stops
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Point,
    pub end: Point,
    pub stops: Vec<(f64, String)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub color: String,
    pub width: f64,
}

/// A rectangular 2D drawing target
pub trait DrawSurface {
    /// Width and height in pixels
    fn size(&self) -> (f64, f64);

    /// Erase the whole surface
    fn clear(&mut self);

    /// Fill the closed polygon through `points`
    fn fill_path(&mut self, points: &[Point], gradient: &LinearGradient);

    /// Stroke the open polyline through `points`
    fn stroke_path(&mut self, points: &[Point], stroke: &Stroke);
}

/// Surface over an HTML canvas 2D context
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Wrap a canvas; `None` when it has no 2D context
    pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;

        Some(Self { canvas, context })
    }

    fn trace(&self, points: &[Point]) {
        self.context.begin_path();
        for (i, point) in points.iter().enumerate() {
            if i == 0 {
                self.context.move_to(point.x, point.y);
            } else {
                self.context.line_to(point.x, point.y);
            }
        }
    }
}

impl DrawSurface for CanvasSurface {
    fn size(&self) -> (f64, f64) {
        (self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn clear(&mut self) {
        let (width, height) = self.size();
        self.context.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_path(&mut self, points: &[Point], gradient: &LinearGradient) {
        let fill = self.context.create_linear_gradient(
            gradient.start.x,
            gradient.start.y,
            gradient.end.x,
            gradient.end.y,
        );
        for (offset, color) in &gradient.stops {
            if let Err(e) = fill.add_color_stop(*offset as f32, color) {
                log::warn!("Invalid gradient stop {}: {:?}", color, e);
            }
        }

        self.trace(points);
        self.context.close_path();
        self.context.set_fill_style_canvas_gradient(&fill);
        self.context.fill();
    }

    fn stroke_path(&mut self, points: &[Point], stroke: &Stroke) {
        self.trace(points);
        self.context.set_stroke_style_str(&stroke.color);
        self.context.set_line_width(stroke.width);
        self.context.stroke();
    }
}

/// One recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear,
    Fill {
        points: Vec<Point>,
        gradient: LinearGradient,
    },
    Stroke {
        points: Vec<Point>,
        stroke: Stroke,
    },
}

/// Headless surface that records drawing calls.
///
/// Clones share the same log, so a clone can be handed to a chart board
/// while the original is inspected.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    ops: Rc<RefCell<Vec<DrawOp>>>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ops: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn ops(&self) -> Vec<DrawOp> {
        self.ops.borrow().clone()
    }

    /// Drawing calls since the last clear
    pub fn current_frame(&self) -> Vec<DrawOp> {
        let ops = self.ops.borrow();
        let start = ops
            .iter()
            .rposition(|op| matches!(op, DrawOp::Clear))
            .map(|i| i + 1)
            .unwrap_or(0);
        ops[start..].to_vec()
    }

    pub fn strokes(&self) -> Vec<(Vec<Point>, Stroke)> {
        self.current_frame()
            .into_iter()
            .filter_map(|op| match op {
                DrawOp::Stroke { points, stroke } => Some((points, stroke)),
                _ => None,
            })
            .collect()
    }

    pub fn fills(&self) -> Vec<(Vec<Point>, LinearGradient)> {
        self.current_frame()
            .into_iter()
            .filter_map(|op| match op {
                DrawOp::Fill { points, gradient } => Some((points, gradient)),
                _ => None,
            })
            .collect()
    }

    pub fn clear_count(&self) -> usize {
        self.ops
            .borrow()
            .iter()
            .filter(|op| matches!(op, DrawOp::Clear))
            .count()
    }
}

impl DrawSurface for RecordingSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.ops.borrow_mut().push(DrawOp::Clear);
    }

    fn fill_path(&mut self, points: &[Point], gradient: &LinearGradient) {
        self.ops.borrow_mut().push(DrawOp::Fill {
            points: points.to_vec(),
            gradient: gradient.clone(),
        });
    }

    fn stroke_path(&mut self, points: &[Point], stroke: &Stroke) {
        self.ops.borrow_mut().push(DrawOp::Stroke {
            points: points.to_vec(),
            stroke: stroke.clone(),
        });
    }
}
