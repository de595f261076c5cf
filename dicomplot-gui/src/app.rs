//! Main application state and logic.
//!
//! Contains the `DicomplotApp` struct which holds the loaded plan, the
//! shared weight scale and the current field/layer view.

use std::path::{Path, PathBuf};

use dicomplot_core::{NavAction, PlanMaps, PlanShape, SpotMap, ViewState, WeightScale};
use eframe::egui;
use log::debug;

use crate::ui::theme;
use crate::viewer::{Colormap, SpotMarker};

/// Navigation action bound to a key, if any.
#[must_use]
pub fn key_action(key: egui::Key) -> Option<NavAction> {
    match key {
        egui::Key::ArrowRight => Some(NavAction::NextLayer),
        egui::Key::ArrowLeft => Some(NavAction::PrevLayer),
        egui::Key::ArrowUp | egui::Key::PageUp => Some(NavAction::PrevField),
        egui::Key::ArrowDown | egui::Key::PageDown => Some(NavAction::NextField),
        _ => None,
    }
}

const NAV_KEYS: [egui::Key; 6] = [
    egui::Key::ArrowRight,
    egui::Key::ArrowLeft,
    egui::Key::ArrowUp,
    egui::Key::ArrowDown,
    egui::Key::PageUp,
    egui::Key::PageDown,
];

/// Main application state.
pub struct DicomplotApp {
    /// Plan file the maps were read from.
    pub(crate) source: PathBuf,
    /// Spot maps of every field and layer.
    pub(crate) plan: PlanMaps,
    /// Color/size scale shared by all layers.
    pub(crate) scale: WeightScale,
    /// Currently displayed field and layer.
    pub(crate) view: ViewState,
    /// Current colormap selection.
    pub(crate) colormap: Colormap,
    /// Spot under the pointer, if any.
    pub(crate) hovered_spot: Option<SpotMarker>,
    /// Refit the plot bounds on the next frame.
    pub(crate) reset_bounds: bool,
}

impl DicomplotApp {
    /// Create the viewer for a loaded plan, showing the first layer of the first field.
    pub fn new(plan: PlanMaps, source: &Path) -> Self {
        let scale = WeightScale::for_plan(&plan);
        Self {
            source: source.to_path_buf(),
            plan,
            scale,
            view: ViewState::default(),
            colormap: Colormap::NipySpectral,
            hovered_spot: None,
            reset_bounds: true,
        }
    }

    /// Layer currently on screen.
    pub fn current_layer(&self) -> Option<&SpotMap> {
        self.plan.layer(self.view.field(), self.view.layer())
    }

    /// Apply a navigation action and schedule a redraw of the new layer.
    pub fn navigate(&mut self, action: NavAction) {
        if self.view.apply(action, &self.plan) {
            debug!(
                "{:?}: field {}, layer {}",
                action,
                self.view.field(),
                self.view.layer()
            );
            self.hovered_spot = None;
            self.reset_bounds = true;
        }
    }

    /// Record the spot under the pointer. Returns `true` if it changed.
    pub fn set_hovered_spot(&mut self, spot: Option<SpotMarker>) -> bool {
        let changed = self.hovered_spot != spot;
        self.hovered_spot = spot;
        changed
    }

    /// Plan label, falling back to the file name.
    pub fn plan_name(&self) -> String {
        self.plan.label.clone().unwrap_or_else(|| {
            self.source
                .file_name()
                .map_or_else(|| self.source.display().to_string(), |n| {
                    n.to_string_lossy().into_owned()
                })
        })
    }

    /// Position summary such as `Layer 3/12 · Field 1/2`.
    pub fn position_text(&self) -> String {
        format!(
            "Layer {}/{} · Field {}/{}",
            self.view.layer() + 1,
            self.plan.layer_count(self.view.field()),
            self.view.field() + 1,
            self.plan.field_count()
        )
    }

    /// Handle navigation keys pressed this frame.
    fn handle_keys(&mut self, ctx: &egui::Context) {
        let pressed: Vec<NavAction> = ctx.input(|i| {
            NAV_KEYS
                .iter()
                .filter(|&&key| i.key_pressed(key))
                .filter_map(|&key| key_action(key))
                .collect()
        });
        for action in pressed {
            self.navigate(action);
        }
    }
}

impl eframe::App for DicomplotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        theme::apply_system_theme(ctx);
        self.handle_keys(ctx);
        self.render_info_bar(ctx);
        self.render_nav_bar(ctx);
        self.render_colorbar(ctx);
        self.render_central_panel(ctx);
    }
}
