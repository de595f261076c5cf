//! Colormap definitions and application logic.

use eframe::egui::Color32;

use crate::util::f32_to_u8;

/// Control points of the `nipy_spectral` map, sampled every 0.05.
const NIPY_SPECTRAL: [[f32; 3]; 21] = [
    [0.0, 0.0, 0.0],
    [0.4667, 0.0, 0.5333],
    [0.5333, 0.0, 0.6],
    [0.0, 0.0, 0.6667],
    [0.0, 0.0, 0.8667],
    [0.0, 0.4667, 0.8667],
    [0.0, 0.6, 0.8667],
    [0.0, 0.6667, 0.6667],
    [0.0, 0.6667, 0.5333],
    [0.0, 0.6, 0.0],
    [0.0, 0.7333, 0.0],
    [0.0, 0.8667, 0.0],
    [0.0, 1.0, 0.0],
    [0.7333, 1.0, 0.0],
    [0.9333, 0.9333, 0.0],
    [1.0, 0.8, 0.0],
    [1.0, 0.6, 0.0],
    [1.0, 0.0, 0.0],
    [0.8667, 0.0, 0.0],
    [0.8, 0.0, 0.0],
    [0.8, 0.8, 0.8],
];

/// Available colormaps for spot weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colormap {
    /// Spectral - black through violet, blue, green, yellow, red to grey.
    NipySpectral,
    /// Viridis (approximate) - blue to teal to green to yellow.
    Viridis,
    /// Hot (Thermal) - red to yellow to white.
    Hot,
    /// Grayscale - black to white.
    Grayscale,
}

impl std::fmt::Display for Colormap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Colormap::NipySpectral => write!(f, "Spectral"),
            Colormap::Viridis => write!(f, "Viridis"),
            Colormap::Hot => write!(f, "Hot (Thermal)"),
            Colormap::Grayscale => write!(f, "Grayscale"),
        }
    }
}

/// Linear interpolation in a table of evenly spaced RGB control points.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn interpolate(table: &[[f32; 3]], val: f32) -> [f32; 3] {
    let last = table.len() - 1;
    let pos = val.clamp(0.0, 1.0) * last as f32;
    let lo = (pos.floor() as usize).min(last);
    let hi = (lo + 1).min(last);
    let t = pos - lo as f32;
    let (a, b) = (table[lo], table[hi]);
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}

impl Colormap {
    /// All colormaps, in selector order.
    pub const ALL: [Colormap; 4] = [
        Colormap::NipySpectral,
        Colormap::Viridis,
        Colormap::Hot,
        Colormap::Grayscale,
    ];

    /// Apply the colormap to a normalized value [0, 1] and return RGBA bytes.
    ///
    /// # Arguments
    /// * `val` - Normalized value between 0.0 and 1.0
    ///
    /// # Returns
    /// RGBA color as `[r, g, b, a]` bytes
    #[must_use]
    pub fn apply(self, val: f32) -> [u8; 4] {
        let val = val.clamp(0.0, 1.0);
        match self {
            Colormap::NipySpectral => {
                let [r, g, b] = interpolate(&NIPY_SPECTRAL, val);
                [
                    f32_to_u8(r * 255.0),
                    f32_to_u8(g * 255.0),
                    f32_to_u8(b * 255.0),
                    255,
                ]
            }
            Colormap::Grayscale => {
                let v = f32_to_u8(val * 255.0);
                [v, v, v, 255]
            }
            Colormap::Hot => {
                // Simple Red-Yellow-White heatmap
                if val < 0.5 {
                    let g = f32_to_u8(val * 2.0 * 255.0);
                    [255, g, 0, 255]
                } else {
                    let b = f32_to_u8((val - 0.5) * 2.0 * 255.0);
                    [255, 255, b, 255]
                }
            }
            Colormap::Viridis => {
                // Approximate Viridis (Blue -> Teal -> Green -> Yellow)
                let r = f32_to_u8(255.0 * val.powf(2.0));
                let g = f32_to_u8(255.0 * val);
                let b = f32_to_u8(255.0 * (1.0 - val));
                [r, g, b, 255]
            }
        }
    }

    /// Colormap value as an egui color with the given opacity.
    #[must_use]
    pub fn color(self, val: f32, alpha: f32) -> Color32 {
        let [r, g, b, _] = self.apply(val);
        Color32::from_rgba_unmultiplied(r, g, b, f32_to_u8(alpha * 255.0))
    }
}
