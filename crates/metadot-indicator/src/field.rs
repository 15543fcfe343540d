#![forbid(unsafe_code)]

//! The dot field: stationary dots, the moving cursor, and frame rendering.

use metadot_geom::{BlendParams, Circle, RenderPlan, Vec2, blend_into};

use crate::config::{IndicatorConfig, IndicatorConfigError};

/// Edge padding applied when centering the dot row inside the viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Padding {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Padding {
    pub const ZERO: Self = Self {
        left: 0.0,
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
    };

    /// The same padding on every edge.
    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }
}

/// Host viewport bounds, in surface units.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub padding: Padding,
}

impl Viewport {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            padding: Padding::ZERO,
        }
    }

    #[must_use]
    pub const fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }
}

/// State machine over `{dot count, viewport, scroll fraction, connected index}`.
///
/// Owned exclusively by the widget and mutated only from its own callbacks.
/// Every mutation settles the layout invariants before returning — the dot
/// list always matches the configured count, dots share one radius and equal
/// spacing, and the cursor x always derives from the committed scroll
/// fraction — so [`render_into`](Self::render_into) is a pure read.
#[derive(Debug, Clone)]
pub struct DotField {
    config: IndicatorConfig,
    viewport: Viewport,
    dots: Vec<Circle>,
    cursor: Circle,
    connected: usize,
    scroll_fraction: f64,
}

impl DotField {
    /// Build a field from validated configuration.
    pub fn new(config: IndicatorConfig) -> Result<Self, Vec<IndicatorConfigError>> {
        config.validate()?;
        let mut field = Self {
            config,
            viewport: Viewport::default(),
            dots: Vec::new(),
            cursor: Circle::default(),
            connected: 0,
            scroll_fraction: 0.0,
        };
        field.layout();
        Ok(field)
    }

    #[must_use]
    pub fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    /// The stationary dots, left to right.
    #[must_use]
    pub fn dots(&self) -> &[Circle] {
        &self.dots
    }

    #[must_use]
    pub fn cursor(&self) -> Circle {
        self.cursor
    }

    #[must_use]
    pub fn scroll_fraction(&self) -> f64 {
        self.scroll_fraction
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The dot currently blended with the cursor; `None` while the field is
    /// empty.
    #[must_use]
    pub fn connected_index(&self) -> Option<usize> {
        if self.dots.is_empty() {
            None
        } else {
            Some(self.connected)
        }
    }

    /// Resize the dot row and re-layout from scratch. The connected index and
    /// scroll fraction are clamped into the new range.
    pub fn set_dot_count(&mut self, count: usize) {
        self.config.dot_count = count;
        self.connected = clamp_index(self.connected, count);
        self.scroll_fraction = clamp_fraction(self.scroll_fraction, count);
        self.layout();
    }

    /// Connect `index` to the cursor. Out-of-range values clamp to the last
    /// dot instead of going undefined.
    pub fn set_connected_index(&mut self, index: usize) {
        #[cfg(feature = "tracing")]
        if index >= self.config.dot_count && self.config.dot_count > 0 {
            tracing::debug!(index, dot_count = self.config.dot_count, "clamping connected index");
        }
        self.connected = clamp_index(index, self.config.dot_count);
    }

    /// Position the cursor: 0 = centered on the first dot, 1 = the second,
    /// fractional values interpolate linearly. Clamped to the dot row; with no
    /// dots the fraction settles at zero and the cursor stays put.
    pub fn set_scroll_fraction(&mut self, fraction: f64) {
        self.scroll_fraction = clamp_fraction(fraction, self.config.dot_count);
        self.place_cursor();
    }

    /// Full recompute of the cursor and every dot from the new bounds.
    pub fn on_viewport_changed(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.layout();
    }

    /// Preferred widget size `(width, height)` for the current dot count.
    /// Hosts are free to ignore it.
    #[must_use]
    pub fn preferred_size(&self) -> (f64, f64) {
        let cursor_radius = self.config.cursor_radius();
        (
            self.config.dot_count as f64 * (cursor_radius * 2.0 + self.config.spacing()),
            2.0 * cursor_radius * 1.4,
        )
    }

    /// Emit this frame's draw operations into `plan`.
    ///
    /// The plan is reset before use; unchanged state yields a bit-identical
    /// plan. The connected dot blends with the cursor in the selected color,
    /// every other dot is a plain circle in the unselected color.
    pub fn render_into(&self, plan: &mut RenderPlan) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "dot_field_render",
            dots = self.dots.len(),
            connected = self.connected,
        )
        .entered();

        plan.clear();
        let params = self.blend_params();
        let connected = self.connected_index();
        for (i, dot) in self.dots.iter().enumerate() {
            if connected == Some(i) {
                blend_into(plan, self.cursor, *dot, &params, self.config.selected_color);
            } else {
                plan.fill_circle(dot.center, dot.radius, self.config.unselected_color);
            }
        }
    }

    fn blend_params(&self) -> BlendParams {
        BlendParams {
            max_band_length: self.config.max_band_length(),
            scale_rate: self.config.scale_rate,
            band_thickness: self.config.band_thickness,
            band_thinning: self.config.band_thinning,
        }
    }

    // Layout is always recomputed from scratch, never patched: the dot row is
    // centered in the padded viewport and the cursor re-derived from the
    // committed scroll fraction.
    fn layout(&mut self) {
        let count = self.config.dot_count;
        let spacing = self.config.spacing();
        let vp = self.viewport;

        let base_x = (vp.width - vp.padding.right + vp.padding.left
            - spacing * count.saturating_sub(1) as f64)
            / 2.0;
        let center_y = (vp.height - vp.padding.bottom + vp.padding.top) / 2.0;

        while self.dots.len() < count {
            self.dots.push(Circle::default());
        }
        while self.dots.len() > count {
            self.dots.remove(0);
        }
        for (i, dot) in self.dots.iter_mut().enumerate() {
            dot.center = Vec2::new(base_x + spacing * i as f64, center_y);
            dot.radius = self.config.dot_radius;
        }

        self.cursor.center = Vec2::new(base_x, center_y);
        self.cursor.radius = self.config.cursor_radius();
        self.place_cursor();
    }

    fn place_cursor(&mut self) {
        if let Some(first) = self.dots.first() {
            self.cursor.center.x = first.center.x + self.config.spacing() * self.scroll_fraction;
        }
    }
}

fn clamp_index(index: usize, count: usize) -> usize {
    index.min(count.saturating_sub(1))
}

fn clamp_fraction(fraction: f64, count: usize) -> f64 {
    if count == 0 || !fraction.is_finite() {
        return 0.0;
    }
    fraction.clamp(0.0, (count - 1) as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use metadot_geom::DrawOp;

    fn field() -> DotField {
        let mut field = DotField::new(IndicatorConfig::default()).unwrap();
        field.on_viewport_changed(Viewport::new(400.0, 80.0));
        field
    }

    fn spacing() -> f64 {
        IndicatorConfig::default().spacing()
    }

    #[test]
    fn new_rejects_invalid_config() {
        let config = IndicatorConfig {
            dot_radius: -2.0,
            ..Default::default()
        };
        assert!(DotField::new(config).is_err());
    }

    #[test]
    fn layout_invariants_hold_after_set_dot_count() {
        let mut field = field();
        for count in [0, 1, 4, 9, 2] {
            field.set_dot_count(count);
            assert_eq!(field.dots().len(), count);
            for dot in field.dots() {
                assert_eq!(dot.radius, field.config().dot_radius);
            }
            for pair in field.dots().windows(2) {
                let gap = pair[1].center.x - pair[0].center.x;
                assert!((gap - spacing()).abs() < 1e-9, "unequal spacing: {gap}");
            }
        }
    }

    #[test]
    fn dots_are_colinear_and_centered_vertically() {
        let field = field();
        let expected_y = 40.0;
        for dot in field.dots() {
            assert!((dot.center.y - expected_y).abs() < 1e-9);
        }
        assert!((field.cursor().center.y - expected_y).abs() < 1e-9);
    }

    #[test]
    fn cursor_radius_is_derived_from_dot_radius() {
        let field = field();
        assert!((field.cursor().radius - field.config().dot_radius * 1.4).abs() < 1e-12);
    }

    #[test]
    fn cursor_tracks_scroll_fraction() {
        let mut field = field();
        field.set_scroll_fraction(1.5);
        let expected = field.dots()[0].center.x + spacing() * 1.5;
        assert!((field.cursor().center.x - expected).abs() < 1e-9);
    }

    #[test]
    fn scroll_fraction_clamps_to_dot_row() {
        let mut field = field();
        field.set_scroll_fraction(99.0);
        assert_eq!(field.scroll_fraction(), 2.0);
        field.set_scroll_fraction(-3.0);
        assert_eq!(field.scroll_fraction(), 0.0);
        field.set_scroll_fraction(f64::NAN);
        assert_eq!(field.scroll_fraction(), 0.0);
    }

    #[test]
    fn cursor_position_survives_viewport_change() {
        let mut field = field();
        field.set_scroll_fraction(2.0);
        field.on_viewport_changed(Viewport::new(800.0, 120.0));
        let expected = field.dots()[0].center.x + spacing() * 2.0;
        assert!(
            (field.cursor().center.x - expected).abs() < 1e-9,
            "layout must re-apply the committed scroll fraction"
        );
    }

    #[test]
    fn connected_index_clamps_out_of_range() {
        let mut field = field();
        field.set_connected_index(17);
        assert_eq!(field.connected_index(), Some(2));
    }

    #[test]
    fn connected_index_none_when_empty() {
        let mut field = field();
        field.set_dot_count(0);
        assert_eq!(field.connected_index(), None);
    }

    #[test]
    fn shrinking_keeps_connected_index_live() {
        let mut field = field();
        field.set_dot_count(8);
        field.set_connected_index(7);
        field.set_dot_count(3);
        assert_eq!(field.connected_index(), Some(2));
    }

    #[test]
    fn render_blends_connected_dot_and_fills_the_rest() {
        let mut field = field();
        field.set_connected_index(1);
        field.set_scroll_fraction(1.0);

        let mut plan = RenderPlan::new();
        field.render_into(&mut plan);

        // Cursor sits on the connected dot: the dot is contained by the
        // cursor, so the blend emits one circle; plus two unselected dots.
        assert_eq!(plan.len(), 3);
        let selected = field.config().selected_color;
        let unselected = field.config().unselected_color;
        let mut selected_ops = 0;
        let mut unselected_ops = 0;
        for op in plan.ops() {
            match op {
                DrawOp::Circle { color, .. } if *color == selected => selected_ops += 1,
                DrawOp::Circle { color, .. } if *color == unselected => unselected_ops += 1,
                other => panic!("unexpected op: {other:?}"),
            }
        }
        assert_eq!(selected_ops, 1);
        assert_eq!(unselected_ops, 2);
    }

    #[test]
    fn render_emits_band_at_half_step() {
        let mut field = field();
        field.set_connected_index(0);
        field.set_scroll_fraction(0.5);

        let mut plan = RenderPlan::new();
        field.render_into(&mut plan);

        // d = spacing/2 <= max band length: cursor, grown dot, band; plus two
        // unselected dots.
        assert_eq!(plan.circle_count(), 4);
        assert_eq!(plan.path_count(), 1);
    }

    #[test]
    fn render_snaps_band_when_cursor_is_far() {
        let mut field = field();
        field.set_connected_index(0);
        field.set_scroll_fraction(2.0);

        let mut plan = RenderPlan::new();
        field.render_into(&mut plan);

        // d = 2 * spacing > max band length: no band anywhere.
        assert_eq!(plan.path_count(), 0);
        assert_eq!(plan.circle_count(), 4);
    }

    #[test]
    fn render_is_idempotent_for_unchanged_state() {
        let mut field = field();
        field.set_connected_index(1);
        field.set_scroll_fraction(0.75);

        let mut first = RenderPlan::new();
        let mut second = RenderPlan::new();
        field.render_into(&mut first);
        field.render_into(&mut second);
        assert_eq!(first, second);
    }

    #[test]
    fn render_resets_the_plan_before_use() {
        let mut field = field();
        field.set_dot_count(2);

        let mut plan = RenderPlan::new();
        plan.fill_circle(Vec2::ZERO, 99.0, metadot_geom::Rgba::BLACK);
        field.render_into(&mut plan);
        assert!(
            plan.ops()
                .iter()
                .all(|op| !matches!(op, DrawOp::Circle { radius, .. } if *radius == 99.0)),
            "stale ops must not leak across frames"
        );
    }

    #[test]
    fn empty_field_renders_nothing() {
        let mut field = field();
        field.set_dot_count(0);
        let mut plan = RenderPlan::new();
        field.render_into(&mut plan);
        assert!(plan.is_empty());
    }

    #[test]
    fn preferred_size_scales_with_dot_count() {
        let mut field = field();
        field.set_dot_count(3);
        let (w3, h) = field.preferred_size();
        field.set_dot_count(6);
        let (w6, h6) = field.preferred_size();
        assert!((w6 - 2.0 * w3).abs() < 1e-9);
        assert_eq!(h, h6);
        assert!((h - 2.0 * field.config().cursor_radius() * 1.4).abs() < 1e-12);
    }

    #[test]
    fn padding_shifts_the_row() {
        let mut field = field();
        let unpadded_x = field.dots()[0].center.x;
        field.on_viewport_changed(Viewport::new(400.0, 80.0).with_padding(Padding {
            left: 20.0,
            top: 0.0,
            right: 0.0,
            bottom: 0.0,
        }));
        assert!((field.dots()[0].center.x - (unpadded_x + 10.0)).abs() < 1e-9);
    }
}
