//! Info bar (top panel) with plan and layer details.

use eframe::egui::{self, Stroke};

use super::theme::{stat_label, stat_value, Palette, ACCENT};
use crate::app::DicomplotApp;
use crate::util::format_mu;

impl DicomplotApp {
    fn info_item(ui: &mut egui::Ui, label: &str, value: &str) {
        ui.label(stat_label(label));
        ui.label(stat_value(value));
    }

    /// Render the top bar with plan label, field description and layer statistics.
    pub(crate) fn render_info_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("info_bar")
            .frame(
                egui::Frame::none()
                    .fill(Palette::for_dark_mode(ctx.style().visuals.dark_mode).panel)
                    .inner_margin(egui::Margin::symmetric(16.0, 8.0)),
            )
            .show(ctx, |ui| {
                let colors = Palette::for_ui(ui);
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new("DICOMPLOT")
                            .size(14.0)
                            .strong()
                            .color(ACCENT),
                    );
                    ui.label(
                        egui::RichText::new(self.plan_name()).color(colors.text),
                    );

                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(1.0, 16.0), egui::Sense::hover());
                    ui.painter()
                        .vline(rect.center().x, rect.y_range(), Stroke::new(1.0, colors.border));

                    if let Some(field) = self.plan.field(self.view.field()) {
                        Self::info_item(ui, "Field", &field.describe());
                    }
                    if let Some(layer) = self.current_layer() {
                        Self::info_item(ui, "Spots", &layer.len().to_string());
                        Self::info_item(ui, "Layer MU", &format_mu(layer.total_weight()));
                    }
                    Self::info_item(ui, "Max MU", &format_mu(self.scale.max()));

                    if let Some(spot) = self.hovered_spot {
                        Self::info_item(
                            ui,
                            "Spot",
                            &format!(
                                "({:.2}, {:.2}) cm, {} MU",
                                spot.x_cm,
                                spot.y_cm,
                                format_mu(spot.weight)
                            ),
                        );
                    }
                });
            });
    }
}
