//! Canvas 2D backend

use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::shapes::{PathOp, Shape};
use super::Surface;
use crate::error::{ChaseError, Result};

/// Draws shapes into a `<canvas>` 2D context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or(ChaseError::NoContext2d)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| ChaseError::NoContext2d)?;
        Ok(Self { ctx })
    }

    fn trace(&self, op: &PathOp) -> std::result::Result<(), JsValue> {
        let ctx = &self.ctx;
        match *op {
            PathOp::MoveTo(p) => ctx.move_to(p.x as f64, p.y as f64),
            PathOp::LineTo(p) => ctx.line_to(p.x as f64, p.y as f64),
            PathOp::Arc {
                center,
                radius,
                start,
                end,
            } => ctx.arc(
                center.x as f64,
                center.y as f64,
                radius as f64,
                start as f64,
                end as f64,
            )?,
            PathOp::QuadTo { ctrl, to } => {
                ctx.quadratic_curve_to(ctrl.x as f64, ctrl.y as f64, to.x as f64, to.y as f64)
            }
            PathOp::Ellipse { center, radii } => ctx.ellipse(
                center.x as f64,
                center.y as f64,
                radii.x as f64,
                radii.y as f64,
                0.0,
                0.0,
                TAU,
            )?,
            PathOp::Rect { min, size } => {
                ctx.rect(min.x as f64, min.y as f64, size.x as f64, size.y as f64)
            }
            PathOp::Close => ctx.close_path(),
        }
        Ok(())
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill(&mut self, shape: &Shape) {
        self.ctx.set_fill_style_str(&shape.fill.css());
        self.ctx.begin_path();
        for op in &shape.path {
            if let Err(e) = self.trace(op) {
                // IndexSizeError on a negative radius
                log::warn!("Canvas path error: {:?}", e);
                return;
            }
        }
        self.ctx.fill();
    }
}
