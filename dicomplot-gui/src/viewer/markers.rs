//! Spot markers: position, size and color of each drawn spot.

use dicomplot_core::{SpotMap, WeightScale};
use eframe::egui::Color32;

use crate::util::f64_to_f32;
use crate::viewer::Colormap;

/// Fill opacity of spot markers.
pub const MARKER_ALPHA: f32 = 0.7;
/// Smallest drawn radius, so zero-weight spots stay visible as dots.
pub const MIN_RADIUS: f32 = 1.0;

/// One spot ready for drawing, in plot coordinates (cm).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotMarker {
    pub x_cm: f64,
    pub y_cm: f64,
    pub weight: f64,
    pub radius: f32,
    pub color: Color32,
}

/// Radius (points) of a circular marker with the given area (square points).
#[must_use]
pub fn radius_for_area(area: f64) -> f32 {
    f64_to_f32(area.max(0.0).sqrt() / 2.0).max(MIN_RADIUS)
}

/// Builds the markers of a layer against the shared plan scale.
#[must_use]
pub fn layer_markers(layer: &SpotMap, scale: &WeightScale, colormap: Colormap) -> Vec<SpotMarker> {
    layer
        .spots()
        .map(|spot| SpotMarker {
            x_cm: spot.x_cm(),
            y_cm: spot.y_cm(),
            weight: spot.weight,
            radius: radius_for_area(scale.marker_area(spot.weight)),
            color: colormap.color(f64_to_f32(scale.normalize(spot.weight)), MARKER_ALPHA),
        })
        .collect()
}
