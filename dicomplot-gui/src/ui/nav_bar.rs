//! Navigation bar (bottom panel) with field and layer buttons.

use dicomplot_core::NavAction;
use eframe::egui;

use super::theme::{nav_button, Palette};
use crate::app::DicomplotApp;

impl DicomplotApp {
    /// Render the bottom bar: field buttons on the left, layer buttons on the right.
    pub(crate) fn render_nav_bar(&mut self, ctx: &egui::Context) {
        let mut requested = None;

        egui::TopBottomPanel::bottom("nav_bar")
            .min_height(52.0)
            .show(ctx, |ui| {
                let colors = Palette::for_ui(ui);
                ui.horizontal_centered(|ui| {
                    for action in [NavAction::PrevField, NavAction::NextField] {
                        if ui.add(nav_button(action.label())).clicked() {
                            requested = Some(action);
                        }
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        // Right-to-left: added in reverse visual order.
                        for action in [NavAction::NextLayer, NavAction::PrevLayer] {
                            if ui.add(nav_button(action.label())).clicked() {
                                requested = Some(action);
                            }
                        }

                        ui.centered_and_justified(|ui| {
                            ui.label(
                                egui::RichText::new(self.position_text())
                                    .color(colors.text_muted),
                            );
                        });
                    });
                });
            });

        if let Some(action) = requested {
            self.navigate(action);
        }
    }
}
