#![forbid(unsafe_code)]

//! The metaball blend: decide whether two circles fuse, and build the band.
//!
//! Given a moving circle (the cursor) and a fixed circle (a dot), the blend
//! emits an ordered [`RenderPlan`]:
//!
//! 1. the moving circle at its own radius,
//! 2. the fixed circle, grown smoothly as the moving circle approaches,
//! 3. a closed band path (cubic, line, cubic, line) connecting the two.
//!
//! Each later stage is skipped when geometry rules it out: nothing at all for
//! a non-positive radius, no fixed circle when one disk fully contains the
//! other, no band once the centers separate past `max_band_length`. The
//! emission order is load-bearing for visual layering — the band is filled on
//! top of both circles — and must not be rearranged.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::circle::Circle;
use crate::color::Rgba;
use crate::path::FillPath;
use crate::plan::RenderPlan;
use crate::vec::Vec2;

/// Tuning parameters for the blend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendParams {
    /// Maximum center distance at which the band still holds before snapping.
    /// Callers normally derive this from the dot spacing.
    pub max_band_length: f64,
    /// Growth applied to the fixed circle as the moving circle approaches:
    /// `1 + scale_rate` at zero distance, no growth at `max_band_length`.
    pub scale_rate: f64,
    /// Band thickness in `[0, 1]`: 0 hugs the outer tangents, 1 hugs the
    /// center line.
    pub band_thickness: f64,
    /// How much the band thins in the middle as the circles separate.
    pub band_thinning: f64,
}

impl Default for BlendParams {
    fn default() -> Self {
        Self {
            max_band_length: 1.0,
            scale_rate: 0.3,
            band_thickness: 0.5,
            band_thinning: 2.0,
        }
    }
}

/// Scale factor applied to the fixed circle at center distance `d`.
///
/// Strictly decreasing over `[0, max_band_length]`, from `1 + scale_rate`
/// down to exactly `1.0`; past the band range the fixed circle keeps its own
/// radius. A non-positive `max_band_length` disables growth entirely.
#[inline]
#[must_use]
pub fn growth_scale(d: f64, params: &BlendParams) -> f64 {
    if params.max_band_length <= 0.0 || d > params.max_band_length {
        1.0
    } else {
        1.0 + params.scale_rate * (1.0 - d / params.max_band_length)
    }
}

/// Blend `moving` against `fixed`, appending draw ops to `plan`.
///
/// `moving` is always drawn first at its own radius; `fixed` is drawn at its
/// grown radius; the band, when the circles are close enough, goes on top.
/// The blend is not symmetric in its arguments.
pub fn blend_into(
    plan: &mut RenderPlan,
    moving: Circle,
    fixed: Circle,
    params: &BlendParams,
    color: Rgba,
) {
    let d = moving.distance_to(fixed);
    let mut r1 = moving.radius;
    let mut r2 = fixed.radius;

    // Nothing to blend.
    if r1 <= 0.0 || r2 <= 0.0 {
        return;
    }

    let scale2 = growth_scale(d, params);
    r2 *= scale2;

    plan.fill_circle(moving.center, moving.radius, color);

    // One disk fully contains the other (growth included): the fixed circle
    // is entirely hidden and no band is needed.
    if d <= (r1 - r2).abs() {
        return;
    }

    plan.fill_circle(fixed.center, r2, color);

    // Too far apart: the band has snapped.
    if d > params.max_band_length {
        return;
    }

    // Tangent half-angles from the law of cosines on the triangle formed by
    // the two centers and a tangent point; zero once the circles separate
    // past true tangency. Arguments can drift just outside [-1, 1] near
    // tangency, so acos input is clamped.
    let (u1, u2) = if d < r1 + r2 {
        (
            acos_clamped((r1 * r1 + d * d - r2 * r2) / (2.0 * r1 * d)),
            acos_clamped((r2 * r2 + d * d - r1 * r1) / (2.0 * r2 * d)),
        )
    } else {
        (0.0, 0.0)
    };

    let base = (fixed.center - moving.center).angle();
    let spread = acos_clamped((r1 - r2) / d);
    let t = params.band_thickness;

    // Four anchor angles, interpolated between the tangent angle and the
    // spread angle by the band thickness.
    let angle1a = base + u1 + (spread - u1) * t;
    let angle1b = base - u1 - (spread - u1) * t;
    let angle2a = base + PI - u2 - (PI - u2 - spread) * t;
    let angle2b = base - PI + u2 + (PI - u2 - spread) * t;

    let p1a = moving.center + Vec2::polar(angle1a, r1);
    let p1b = moving.center + Vec2::polar(angle1b, r1);
    let p2a = fixed.center + Vec2::polar(angle2a, r2);
    let p2b = fixed.center + Vec2::polar(angle2b, r2);

    // Control-handle reach: capped by the anchor gap, and shrinking as the
    // circles separate so the band thins before it snaps.
    let total = r1 + r2;
    let mut reach = (t * params.band_thinning).min((p1a - p2a).length() / total);
    reach *= (d * 2.0 / total).min(1.0);
    let h1 = r1 * reach;
    let h2 = r2 * reach;

    // Control offsets sit at the anchor angles rotated by ±90°.
    let c1 = Vec2::polar(angle1a - FRAC_PI_2, h1);
    let c2 = Vec2::polar(angle2a + FRAC_PI_2, h2);
    let c3 = Vec2::polar(angle2b - FRAC_PI_2, h2);
    let c4 = Vec2::polar(angle1b + FRAC_PI_2, h1);

    let mut band = FillPath::new();
    band.move_to(p1a)
        .cubic_to(p1a + c1, p2a + c2, p2a)
        .line_to(p2b)
        .cubic_to(p2b + c3, p1b + c4, p1b)
        .line_to(p1a)
        .close();
    plan.fill_path(band, color);
}

/// One-shot convenience wrapper around [`blend_into`].
#[must_use]
pub fn blend(moving: Circle, fixed: Circle, params: &BlendParams, color: Rgba) -> RenderPlan {
    let mut plan = RenderPlan::with_capacity(3);
    blend_into(&mut plan, moving, fixed, params, color);
    plan
}

#[inline]
fn acos_clamped(x: f64) -> f64 {
    x.clamp(-1.0, 1.0).acos()
}
