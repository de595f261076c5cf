//! Plan-wide weight normalization.
//!
//! Every layer is drawn against the same scale so that marker colors and
//! sizes are comparable across fields and layers.

use crate::PlanMaps;

/// Marker area (square points) given to a spot carrying the plan maximum.
pub const MAX_MARKER_AREA: f64 = 100.0;

/// Returns the largest meterset weight across all layers of all fields.
///
/// The scan starts from zero, so a plan whose layers are all empty (or
/// hold only non-positive weights) yields `0.0`.
#[must_use]
pub fn global_max_weight(plan: &PlanMaps) -> f64 {
    plan.all_layers()
        .filter_map(crate::SpotMap::max_weight)
        .fold(0.0, f64::max)
}

/// Shared color/size scale derived from the global maximum weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightScale {
    max: f64,
}

impl WeightScale {
    /// Creates a scale with an explicit maximum.
    #[must_use]
    pub fn new(max: f64) -> Self {
        Self { max }
    }

    /// Creates the scale for a whole plan.
    #[must_use]
    pub fn for_plan(plan: &PlanMaps) -> Self {
        Self::new(global_max_weight(plan))
    }

    /// Upper end of the scale.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Maps a weight onto `[0, 1]`.
    #[must_use]
    pub fn normalize(&self, weight: f64) -> f64 {
        if self.max <= 0.0 {
            return 0.0;
        }
        (weight / self.max).clamp(0.0, 1.0)
    }

    /// Marker area proportional to weight, `MAX_MARKER_AREA` at the maximum.
    #[must_use]
    pub fn marker_area(&self, weight: f64) -> f64 {
        if self.max <= 0.0 {
            return 0.0;
        }
        (weight * MAX_MARKER_AREA / self.max).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_normalize_and_area() {
        let scale = WeightScale::new(4.0);
        assert_relative_eq!(scale.normalize(1.0), 0.25);
        assert_relative_eq!(scale.normalize(8.0), 1.0);
        assert_relative_eq!(scale.normalize(-1.0), 0.0);
        assert_relative_eq!(scale.marker_area(2.0), 50.0);
        assert_relative_eq!(scale.marker_area(4.0), MAX_MARKER_AREA);
    }

    #[test]
    fn test_zero_scale() {
        let scale = WeightScale::new(0.0);
        assert_relative_eq!(scale.normalize(3.0), 0.0);
        assert_relative_eq!(scale.marker_area(3.0), 0.0);
    }
}
