use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::state::Severity;

// ---------------------------------------------------------------------------
// HSL helpers
// ---------------------------------------------------------------------------

/// Convert an HSL triple (hue in degrees, saturation/lightness in 0..1).
pub fn hsl_color(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    let hsl = Hsl::new(hue, saturation, lightness);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0).round() as u8,
        (rgb.green * 255.0).round() as u8,
        (rgb.blue * 255.0).round() as u8,
    )
}

// ---------------------------------------------------------------------------
// Scatter series colours
// ---------------------------------------------------------------------------

/// Hue of the scatter series (a medium blue).
const SERIES_HUE: f32 = 204.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesColors {
    /// Point fill, 60 % opaque.
    pub fill: Color32,
    /// Point outline.
    pub stroke: Color32,
}

pub fn series_colors() -> SeriesColors {
    let stroke = hsl_color(SERIES_HUE, 0.82, 0.57);
    let [r, g, b, _] = stroke.to_array();
    SeriesColors {
        fill: Color32::from_rgba_unmultiplied(r, g, b, 153),
        stroke,
    }
}

// ---------------------------------------------------------------------------
// Status colours
// ---------------------------------------------------------------------------

pub fn severity_color(severity: Severity) -> Color32 {
    match severity {
        Severity::Info => Color32::GRAY,
        Severity::Success => hsl_color(130.0, 0.55, 0.42),
        Severity::Error => hsl_color(0.0, 0.75, 0.50),
    }
}
