//! Weight color bar (right panel).

use eframe::egui::{self, Align2, FontId, Rect, Sense, Stroke};

use super::theme::Palette;
use crate::app::DicomplotApp;
use crate::util::{format_mu, usize_to_f32};
use crate::viewer::Colormap;

const COLORBAR_LABEL: &str = "Spot Weight [MU]";
const BAR_WIDTH: f32 = 22.0;
const GRADIENT_STEPS: usize = 64;
const TICK_COUNT: usize = 5;

/// Evenly spaced color bar ticks from 0 to `max`, as (fraction, value).
#[must_use]
pub fn colorbar_ticks(max: f64) -> Vec<(f32, f64)> {
    (0..=TICK_COUNT)
        .map(|i| {
            let frac = usize_to_f32(i) / usize_to_f32(TICK_COUNT);
            (frac, max * f64::from(frac))
        })
        .collect()
}

impl DicomplotApp {
    /// Render the color bar for the shared weight scale.
    pub(crate) fn render_colorbar(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("colorbar")
            .resizable(false)
            .exact_width(130.0)
            .show(ctx, |ui| {
                let colors = Palette::for_ui(ui);
                ui.add_space(8.0);
                ui.label(egui::RichText::new(COLORBAR_LABEL).strong());
                ui.add_space(8.0);

                let height = (ui.available_height() - 140.0).max(80.0);
                let (rect, _) = ui.allocate_exact_size(
                    egui::vec2(ui.available_width(), height),
                    Sense::hover(),
                );
                let bar = Rect::from_min_size(
                    rect.min + egui::vec2(4.0, 6.0),
                    egui::vec2(BAR_WIDTH, rect.height() - 12.0),
                );
                let painter = ui.painter_at(rect);

                // Gradient, low values at the bottom.
                let step_h = bar.height() / usize_to_f32(GRADIENT_STEPS);
                for i in 0..GRADIENT_STEPS {
                    let bottom = bar.bottom() - usize_to_f32(i) * step_h;
                    let strip = Rect::from_min_max(
                        egui::pos2(bar.left(), bottom - step_h),
                        egui::pos2(bar.right(), bottom),
                    );
                    let mid = (usize_to_f32(i) + 0.5) / usize_to_f32(GRADIENT_STEPS);
                    painter.rect_filled(strip, 0.0, self.colormap.color(mid, 1.0));
                }
                painter.rect_stroke(bar, 0.0, Stroke::new(1.0, colors.border));

                for (frac, value) in colorbar_ticks(self.scale.max()) {
                    let y = bar.bottom() - frac * bar.height();
                    painter.line_segment(
                        [egui::pos2(bar.right(), y), egui::pos2(bar.right() + 4.0, y)],
                        Stroke::new(1.0, colors.text_muted),
                    );
                    painter.text(
                        egui::pos2(bar.right() + 7.0, y),
                        Align2::LEFT_CENTER,
                        format_mu(value),
                        FontId::proportional(11.0),
                        colors.text,
                    );
                }

                ui.add_space(12.0);
                ui.label(egui::RichText::new("Colormap").size(11.0).weak());
                for map in Colormap::ALL {
                    ui.radio_value(&mut self.colormap, map, map.to_string());
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_colorbar_ticks_span_scale() {
        let ticks = colorbar_ticks(2.0);
        assert_eq!(ticks.len(), TICK_COUNT + 1);
        assert_relative_eq!(ticks[0].1, 0.0);
        assert_relative_eq!(ticks[TICK_COUNT].0, 1.0);
        assert_relative_eq!(ticks[TICK_COUNT].1, 2.0);
        assert!(ticks.windows(2).all(|w| w[0].1 < w[1].1));
    }

    #[test]
    fn test_ticks_for_zero_scale() {
        assert!(colorbar_ticks(0.0).iter().all(|(_, v)| *v == 0.0));
    }
}
