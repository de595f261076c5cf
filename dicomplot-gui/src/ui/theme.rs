//! Light and dark palettes for the viewer, following the system theme.
//!
//! The plot background comes from `Visuals::extreme_bg_color`, so each
//! palette pairs that background with a marker edge color that stays
//! visible on it.

use eframe::egui::{self, Color32, Rounding, Stroke, TextStyle, Visuals};

/// Highlight for the app name and the active widget.
pub const ACCENT: Color32 = Color32::from_rgb(0x4a, 0x9e, 0xff);

/// Colors of one theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub panel: Color32,
    pub plot_bg: Color32,
    pub border: Color32,
    pub text: Color32,
    pub text_muted: Color32,
    /// Outline drawn around every spot marker.
    pub marker_edge: Color32,
}

impl Palette {
    pub const DARK: Self = Self {
        panel: Color32::from_rgb(0x1f, 0x1f, 0x1f),
        plot_bg: Color32::from_rgb(0x12, 0x12, 0x12),
        border: Color32::from_rgb(0x33, 0x33, 0x33),
        text: Color32::from_rgb(0xe0, 0xe0, 0xe0),
        text_muted: Color32::from_rgb(0x88, 0x88, 0x88),
        marker_edge: Color32::from_rgb(0xd8, 0xd8, 0xd8),
    };

    pub const LIGHT: Self = Self {
        panel: Color32::from_rgb(0xf5, 0xf5, 0xf5),
        plot_bg: Color32::WHITE,
        border: Color32::from_rgb(0xd0, 0xd0, 0xd0),
        text: Color32::from_rgb(0x1a, 0x1a, 0x1a),
        text_muted: Color32::from_rgb(0x66, 0x66, 0x66),
        marker_edge: Color32::BLACK,
    };

    #[must_use]
    pub fn for_dark_mode(is_dark: bool) -> Self {
        if is_dark {
            Self::DARK
        } else {
            Self::LIGHT
        }
    }

    #[must_use]
    pub fn for_ui(ui: &egui::Ui) -> Self {
        Self::for_dark_mode(ui.visuals().dark_mode)
    }

    fn visuals(self, mut visuals: Visuals) -> Visuals {
        visuals.panel_fill = self.panel;
        visuals.window_fill = self.panel;
        visuals.extreme_bg_color = self.plot_bg;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_muted);
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, ACCENT);
        visuals.widgets.active.bg_fill = ACCENT;
        visuals.selection.stroke = Stroke::new(1.0, ACCENT);
        visuals
    }
}

/// Sets visuals, heading size and button padding for the current mode.
pub fn configure_style(ctx: &egui::Context) {
    let is_dark = ctx.style().visuals.dark_mode;
    let base = if is_dark {
        Visuals::dark()
    } else {
        Visuals::light()
    };
    ctx.set_visuals(Palette::for_dark_mode(is_dark).visuals(base));

    ctx.style_mut(|style| {
        if let Some(font) = style.text_styles.get_mut(&TextStyle::Heading) {
            font.size = 16.0;
        }
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(10.0, 6.0);
    });
}

/// Fixed-width navigation button.
pub fn nav_button(text: &str) -> egui::Button<'_> {
    egui::Button::new(text)
        .rounding(Rounding::same(4.0))
        .min_size(egui::vec2(120.0, 28.0))
}

/// Caption in the info bar.
pub fn stat_label(text: &str) -> egui::RichText {
    egui::RichText::new(text).size(11.0).weak()
}

/// Value in the info bar.
pub fn stat_value(text: &str) -> egui::RichText {
    egui::RichText::new(text).size(11.0)
}

static LAST_DARK_MODE: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

/// Re-applies the palette when the system switches between light and dark.
pub fn apply_system_theme(ctx: &egui::Context) {
    use std::sync::atomic::Ordering;

    let is_dark = ctx.style().visuals.dark_mode;
    if LAST_DARK_MODE.swap(is_dark, Ordering::Relaxed) != is_dark {
        configure_style(ctx);
    }
}
