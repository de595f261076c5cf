//! Centimetre grid for the spot map plot.
//!
//! Major lines every 1 cm, minor lines every 0.2 cm. Zoomed far out the
//! minor lines are dropped, and past that the majors thin out to 10 cm.

use eframe::egui::Rangef;
use egui_plot::{GridInput, GridMark};

use crate::util::f64_to_i64_checked;

/// Major grid spacing (cm).
pub const MAJOR_STEP_CM: f64 = 1.0;
/// Minor grid spacing (cm).
pub const MINOR_STEP_CM: f64 = 0.2;

/// Screen spacing (points) below which a grid line is hidden; 0.2 cm
/// lines on a 20 cm field are about 7 points apart.
const MIN_LINE_SPACING_PT: f32 = 2.0;
/// Screen spacing (points) at which a grid line is drawn at full strength.
const FULL_LINE_SPACING_PT: f32 = 40.0;

const MINOR_PER_MAJOR: i64 = 5;
const COARSE_STEP_CM: f64 = 10.0;
const MAX_MARKS: i64 = 2000;

/// Index range of multiples of `step` inside `[min, max]`.
fn multiples(min: f64, max: f64, step: f64) -> Option<(i64, i64)> {
    let first = f64_to_i64_checked((min / step).ceil())?;
    let last = f64_to_i64_checked((max / step).floor())?;
    (first <= last).then_some((first, last))
}

/// Grid positions in `[min, max]` as `(value, step_size)` pairs.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn grid_marks(min: f64, max: f64) -> Vec<(f64, f64)> {
    if let Some((first, last)) = multiples(min, max, MINOR_STEP_CM) {
        if last - first <= MAX_MARKS {
            return (first..=last)
                .map(|i| {
                    let step = if i % MINOR_PER_MAJOR == 0 {
                        MAJOR_STEP_CM
                    } else {
                        MINOR_STEP_CM
                    };
                    (i as f64 * MINOR_STEP_CM, step)
                })
                .collect();
        }
    }

    for step in [MAJOR_STEP_CM, COARSE_STEP_CM] {
        if let Some((first, last)) = multiples(min, max, step) {
            if last - first <= MAX_MARKS {
                return (first..=last).map(|i| (i as f64 * step, step)).collect();
            }
        }
    }
    Vec::new()
}

/// Line spacing range for `Plot::grid_spacing`.
#[must_use]
pub fn line_spacing() -> Rangef {
    Rangef::new(MIN_LINE_SPACING_PT, FULL_LINE_SPACING_PT)
}

/// Grid spacer for `egui_plot` axes.
pub fn centimeter_spacer(input: GridInput) -> Vec<GridMark> {
    let (min, max) = input.bounds;
    grid_marks(min, max)
        .into_iter()
        .map(|(value, step_size)| GridMark { value, step_size })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_minor_and_major_marks() {
        let marks = grid_marks(-0.5, 1.1);
        assert_eq!(marks.len(), 8);
        assert_relative_eq!(marks[0].0, -0.4);
        assert_relative_eq!(marks[7].0, 1.0);

        let majors: Vec<f64> = marks
            .iter()
            .filter(|(_, step)| *step == MAJOR_STEP_CM)
            .map(|(v, _)| *v)
            .collect();
        assert_eq!(majors.len(), 2);
        assert_relative_eq!(majors[0], 0.0);
        assert_relative_eq!(majors[1], 1.0);
    }

    #[test]
    fn test_wide_range_drops_minor_lines() {
        let marks = grid_marks(-300.0, 300.0);
        assert_eq!(marks.len(), 601);
        assert!(marks.iter().all(|(_, step)| *step == MAJOR_STEP_CM));
    }

    #[test]
    fn test_degenerate_ranges() {
        assert!(grid_marks(0.05, 0.1).is_empty());
        assert!(grid_marks(f64::NEG_INFINITY, f64::INFINITY).is_empty());
    }
}
