use std::collections::BTreeMap;

use eframe::egui::Color32;
use nfhs_explorer::DependentVar;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.45);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Series colours: one per response variable, stable across selections
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct SeriesColors {
    mapping: BTreeMap<DependentVar, Color32>,
}

impl Default for SeriesColors {
    fn default() -> Self {
        let palette = generate_palette(DependentVar::ALL.len());
        SeriesColors {
            mapping: DependentVar::ALL.iter().copied().zip(palette).collect(),
        }
    }
}

impl SeriesColors {
    /// Colour for a response's scatter points and checklist label.
    pub fn color_for(&self, dep: DependentVar) -> Color32 {
        self.mapping.get(&dep).copied().unwrap_or(Color32::LIGHT_BLUE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_is_distinct() {
        let colors = generate_palette(8);
        assert_eq!(colors.len(), 8);
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn every_response_has_a_colour() {
        let colors = SeriesColors::default();
        let distinct: std::collections::BTreeSet<[u8; 4]> = DependentVar::ALL
            .iter()
            .map(|&d| colors.color_for(d).to_array())
            .collect();
        assert_eq!(distinct.len(), DependentVar::ALL.len());
    }
}
