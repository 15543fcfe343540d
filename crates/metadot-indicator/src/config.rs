#![forbid(unsafe_code)]

//! Indicator configuration with documented defaults.
//!
//! No ambient theme or resource lookup: every color and dimension arrives
//! through [`IndicatorConfig`], validated once at the construction boundary so
//! the geometry core never sees an invalid value.

use std::fmt;

use metadot_geom::Rgba;

/// Recognized configuration for a [`DotField`](crate::field::DotField).
///
/// Derived quantities (cursor radius, spacing, max band length) are computed,
/// not configurable.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorConfig {
    /// Radius of a stationary dot, in surface units. Must be positive.
    pub dot_radius: f64,
    /// Number of stationary dots (pages).
    pub dot_count: usize,
    /// Fill for the cursor, the connected dot, and the band.
    pub selected_color: Rgba,
    /// Fill for every other dot.
    pub unselected_color: Rgba,
    /// Band thickness in `[0, 1]`: 0 = taut tangent band, 1 = maximally thick.
    pub band_thickness: f64,
    /// Growth rate of the connected dot as the cursor approaches.
    pub scale_rate: f64,
    /// How much the band thins in the middle as the cursor pulls away.
    pub band_thinning: f64,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            dot_radius: 10.0,
            dot_count: 3,
            selected_color: Rgba::rgb(0x42, 0x85, 0xf4),
            unselected_color: Rgba::rgb(0x9e, 0x9e, 0x9e),
            band_thickness: 0.5,
            scale_rate: 0.3,
            band_thinning: 2.0,
        }
    }
}

impl IndicatorConfig {
    /// Radius of the moving cursor dot: `dot_radius * 1.4`.
    #[inline]
    #[must_use]
    pub fn cursor_radius(&self) -> f64 {
        self.dot_radius * 1.4
    }

    /// Center-to-center dot spacing: `cursor_radius * 4`.
    #[inline]
    #[must_use]
    pub fn spacing(&self) -> f64 {
        self.cursor_radius() * 4.0
    }

    /// Maximum band length before the band snaps. Equal to the dot spacing.
    #[inline]
    #[must_use]
    pub fn max_band_length(&self) -> f64 {
        self.spacing()
    }

    /// Validate config constraints and return all violations.
    pub fn validate(&self) -> Result<(), Vec<IndicatorConfigError>> {
        let mut errors = Vec::new();
        if !(self.dot_radius.is_finite() && self.dot_radius > 0.0) {
            errors.push(IndicatorConfigError::new(
                "dot_radius",
                self.dot_radius,
                "must be a positive, finite number",
            ));
        }
        if !(0.0..=1.0).contains(&self.band_thickness) {
            errors.push(IndicatorConfigError::new(
                "band_thickness",
                self.band_thickness,
                "must be within [0, 1]",
            ));
        }
        if !(self.scale_rate.is_finite() && self.scale_rate >= 0.0) {
            errors.push(IndicatorConfigError::new(
                "scale_rate",
                self.scale_rate,
                "must be a non-negative, finite number",
            ));
        }
        if !(self.band_thinning.is_finite() && self.band_thinning >= 0.0) {
            errors.push(IndicatorConfigError::new(
                "band_thinning",
                self.band_thinning,
                "must be a non-negative, finite number",
            ));
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Configuration error with field context.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorConfigError {
    pub field: &'static str,
    pub value: f64,
    pub message: &'static str,
}

impl IndicatorConfigError {
    fn new(field: &'static str, value: f64, message: &'static str) -> Self {
        Self {
            field,
            value,
            message,
        }
    }
}

impl fmt::Display for IndicatorConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={} ({})", self.field, self.value, self.message)
    }
}

impl std::error::Error for IndicatorConfigError {}
