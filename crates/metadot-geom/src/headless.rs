#![forbid(unsafe_code)]

//! Recording surface for CI testing.
//!
//! [`RecordingSurface`] captures every op replayed into it, so render
//! pipelines can be verified without a real canvas:
//!
//! ```
//! use metadot_geom::headless::RecordingSurface;
//! use metadot_geom::{Rgba, RenderPlan, Vec2};
//!
//! let mut plan = RenderPlan::new();
//! plan.fill_circle(Vec2::new(4.0, 4.0), 2.0, Rgba::WHITE);
//!
//! let mut surface = RecordingSurface::new();
//! plan.replay(&mut surface);
//! assert_eq!(surface.circle_count(), 1);
//! ```

use crate::color::Rgba;
use crate::path::FillPath;
use crate::plan::DrawOp;
use crate::surface::Surface;
use crate::vec::Vec2;

/// A surface that records draw calls instead of rasterizing them.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every recorded op, in call order.
    #[must_use]
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    #[must_use]
    pub fn circle_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Circle { .. }))
            .count()
    }

    #[must_use]
    pub fn path_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Path { .. }))
            .count()
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl Surface for RecordingSurface {
    fn fill_circle(&mut self, center: Vec2, radius: f64, color: Rgba) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            color,
        });
    }

    fn fill_path(&mut self, path: &FillPath, color: Rgba) {
        self.ops.push(DrawOp::Path {
            path: path.clone(),
            color,
        });
    }
}
