use crate::math::matrix::Matrix;
use crate::network::classifier::Classifier;
use crate::plot::canvas::Canvas;
use crate::plot::scatter::padded_bounds;
use crate::plot::{class_color, region_color};

/// Grid resolution in data units per cell, on both axes.
const GRID_STEP: f64 = 0.01;

const POINT_RADIUS: i64 = 4;

/// Renders a filled map of the model's decision regions with the dataset
/// overlaid on top.
///
/// `predict` is evaluated on a regular grid with step `GRID_STEP` spanning
/// the data's bounding box plus a margin; one grid cell maps to one pixel.
/// The model is read-only here — only `Classifier::predict` is consumed.
pub fn decision_boundary<C: Classifier>(
    classifier: &C,
    features: &Matrix,
    labels: &[usize],
    path: &str,
) -> std::io::Result<()> {
    assert_eq!(features.cols, 2, "decision boundary expects 2D features");
    assert_eq!(features.rows, labels.len(), "one label per feature row required");

    let (x_min, x_max, y_min, y_max) = padded_bounds(features);
    let grid_w = ((x_max - x_min) / GRID_STEP).ceil() as u32;
    let grid_h = ((y_max - y_min) / GRID_STEP).ceil() as u32;

    let mut canvas = Canvas::new(grid_w, grid_h, x_min, x_max, y_min, y_max);

    // Classify the grid one row at a time; the full mesh would be millions
    // of points in one matrix.
    for gy in 0..canvas.height() {
        let y = y_max - gy as f64 * GRID_STEP;
        let row_points: Vec<Vec<f64>> = (0..canvas.width())
            .map(|gx| vec![x_min + gx as f64 * GRID_STEP, y])
            .collect();

        let predictions = classifier.predict(&Matrix::from_data(row_points));
        for (gx, &label) in predictions.iter().enumerate() {
            canvas.set_pixel(gx as i64, gy as i64, region_color(label));
        }
    }

    for (row, &label) in features.data.iter().zip(labels.iter()) {
        canvas.point(row[0], row[1], POINT_RADIUS, class_color(label));
    }

    canvas.save(path)
}
