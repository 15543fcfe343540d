#![forbid(unsafe_code)]

//! The host drawing-surface boundary.

use crate::color::Rgba;
use crate::path::FillPath;
use crate::vec::Vec2;

/// Capability interface a host must provide to materialize a
/// [`RenderPlan`](crate::plan::RenderPlan).
///
/// The core only ever asks for solid fills. Stroking, anti-aliasing, clipping,
/// and pixel formats are host concerns; ops with a non-positive radius may be
/// ignored.
pub trait Surface {
    /// Fill a circle of `radius` centered at `center`.
    fn fill_circle(&mut self, center: Vec2, radius: f64, color: Rgba);

    /// Fill a closed path.
    fn fill_path(&mut self, path: &FillPath, color: Rgba);
}
