#![forbid(unsafe_code)]

//! Render plans: the ordered draw operations handed to a host surface.

use crate::color::Rgba;
use crate::path::FillPath;
use crate::surface::Surface;
use crate::vec::Vec2;

/// A single draw primitive. Execution order is the emission order.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Fill a circle of `radius` centered at `center`.
    Circle {
        center: Vec2,
        radius: f64,
        color: Rgba,
    },
    /// Fill a closed path.
    Path { path: FillPath, color: Rgba },
}

/// An ordered sequence of draw operations for one frame.
///
/// Plans are reusable scratch buffers: [`clear`](Self::clear) at the start of
/// a frame keeps the allocation, so steady-state rendering does not allocate
/// and no state leaks across frames.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderPlan {
    ops: Vec<DrawOp>,
}

impl RenderPlan {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(ops: usize) -> Self {
        Self {
            ops: Vec::with_capacity(ops),
        }
    }

    /// Drop all ops, keeping capacity for the next frame.
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    #[inline]
    #[must_use]
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn fill_circle(&mut self, center: Vec2, radius: f64, color: Rgba) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            color,
        });
    }

    pub fn fill_path(&mut self, path: FillPath, color: Rgba) {
        self.ops.push(DrawOp::Path { path, color });
    }

    /// Number of circle ops in the plan.
    #[must_use]
    pub fn circle_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Circle { .. }))
            .count()
    }

    /// Number of path ops in the plan.
    #[must_use]
    pub fn path_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Path { .. }))
            .count()
    }

    /// Execute every op, in emitted order, against `surface`.
    pub fn replay<S: Surface>(&self, surface: &mut S) {
        for op in &self.ops {
            match op {
                DrawOp::Circle {
                    center,
                    radius,
                    color,
                } => surface.fill_circle(*center, *radius, *color),
                DrawOp::Path { path, color } => surface.fill_path(path, *color),
            }
        }
    }
}
