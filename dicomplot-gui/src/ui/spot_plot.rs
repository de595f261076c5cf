//! Spot map scatter plot (central panel).

use dicomplot_core::Energy;
use eframe::egui::{self, Color32};
use egui_plot::{MarkerShape, Plot, PlotPoint, Points};

use super::theme::Palette;
use crate::app::DicomplotApp;
use crate::viewer::{grid, layer_markers, SpotMarker};

const X_LABEL: &str = "X Position [cm]";
const Y_LABEL: &str = "Y Position [cm]";
/// Pointer distance (cm) within which a spot counts as hovered.
const HOVER_DISTANCE_CM: f64 = 0.25;

/// Plot heading for a layer, with 1-based field and layer numbers.
#[must_use]
pub fn layer_title(field: usize, layer: usize, energy: Energy) -> String {
    format!(
        "Field {}, Energy Layer {} - Beam Energy: {} MeV",
        field + 1,
        layer + 1,
        energy
    )
}

/// Nearest marker to `pos`, if within the hover distance.
fn nearest_marker(markers: &[SpotMarker], pos: PlotPoint) -> Option<SpotMarker> {
    markers
        .iter()
        .map(|m| (m, (m.x_cm - pos.x).hypot(m.y_cm - pos.y)))
        .filter(|(_, d)| *d <= HOVER_DISTANCE_CM)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(m, _)| *m)
}

/// Draws the markers on a centimetre plot and returns the spot under the pointer.
fn show_spot_map(
    ui: &mut egui::Ui,
    markers: &[SpotMarker],
    edge: Color32,
    reset: bool,
) -> Option<SpotMarker> {
    let mut plot = Plot::new("spot_map")
        .data_aspect(1.0)
        .x_axis_label(X_LABEL)
        .y_axis_label(Y_LABEL)
        .grid_spacing(grid::line_spacing())
        .x_grid_spacer(grid::centimeter_spacer)
        .y_grid_spacer(grid::centimeter_spacer)
        .label_formatter(|_, value| format!("x: {:.2} cm\ny: {:.2} cm", value.x, value.y));
    if reset {
        plot = plot.reset();
    }

    plot.show(ui, |plot_ui| {
        for marker in markers {
            let xy = [marker.x_cm, marker.y_cm];
            plot_ui.points(
                Points::new(vec![xy])
                    .shape(MarkerShape::Circle)
                    .radius(marker.radius)
                    .color(marker.color)
                    .filled(true),
            );
            plot_ui.points(
                Points::new(vec![xy])
                    .shape(MarkerShape::Circle)
                    .radius(marker.radius)
                    .color(edge)
                    .filled(false),
            );
        }
        plot_ui
            .pointer_coordinate()
            .and_then(|pos| nearest_marker(markers, pos))
    })
    .inner
}

impl DicomplotApp {
    /// Render the central panel with the current layer's spots.
    pub(crate) fn render_central_panel(&mut self, ctx: &egui::Context) {
        let reset = std::mem::take(&mut self.reset_bounds);

        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(layer) = self.current_layer() else {
                ui.centered_and_justified(|ui| ui.label("No Data"));
                return;
            };
            let title = layer_title(self.view.field(), self.view.layer(), layer.energy());
            let markers = layer_markers(layer, &self.scale, self.colormap);

            ui.vertical_centered(|ui| ui.heading(title));

            let edge = Palette::for_ui(ui).marker_edge;
            let hovered = show_spot_map(ui, &markers, edge, reset);
            // The info bar is drawn before this panel; redraw so it shows the new spot.
            if self.set_hovered_spot(hovered) {
                ctx.request_repaint();
            }
        });
    }
}
