pub mod boundary;
pub mod canvas;
pub mod curves;
pub mod scatter;

pub use boundary::decision_boundary;
pub use canvas::Canvas;
pub use curves::{accuracy_curves, loss_curve};
pub use scatter::scatter_plot;

use image::Rgb;

/// Fixed per-class colors, reused across the scatter and boundary plots so a
/// class keeps one identity everywhere. Repeats past six classes.
const PALETTE: [[u8; 3]; 6] = [
    [31, 119, 180],   // blue
    [255, 127, 14],   // orange
    [44, 160, 44],    // green
    [214, 39, 40],    // red
    [148, 103, 189],  // purple
    [140, 86, 75],    // brown
];

/// Solid color for data points of `label`.
pub fn class_color(label: usize) -> Rgb<u8> {
    Rgb(PALETTE[label % PALETTE.len()])
}

/// Washed-out variant used to fill decision regions, so the solid points
/// stay readable on top.
pub fn region_color(label: usize) -> Rgb<u8> {
    let [r, g, b] = PALETTE[label % PALETTE.len()];
    let lighten = |c: u8| (c as u16 + 3 * 255) / 4;
    Rgb([lighten(r) as u8, lighten(g) as u8, lighten(b) as u8])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_wraps_around() {
        assert_eq!(class_color(0), class_color(PALETTE.len()));
    }

    #[test]
    fn region_color_is_lighter_than_class_color() {
        let solid = class_color(1).0;
        let light = region_color(1).0;
        for (s, l) in solid.iter().zip(light.iter()) {
            assert!(l >= s);
        }
    }
}
