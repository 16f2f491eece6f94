use crate::math::matrix::Matrix;
use crate::plot::canvas::Canvas;
use crate::plot::class_color;

const WIDTH: u32 = 800;
const HEIGHT: u32 = 800;
const POINT_RADIUS: i64 = 4;

/// Margin added around the data's bounding box, in data units.
const MARGIN: f64 = 1.0;

/// Renders the raw dataset as a scatter plot, one color per label.
///
/// `features` must be n×2; `labels` is paired per row.
pub fn scatter_plot(features: &Matrix, labels: &[usize], path: &str) -> std::io::Result<()> {
    assert_eq!(features.cols, 2, "scatter plot expects 2D features");
    assert_eq!(features.rows, labels.len(), "one label per feature row required");

    let (x_min, x_max, y_min, y_max) = padded_bounds(features);
    let mut canvas = Canvas::new(WIDTH, HEIGHT, x_min, x_max, y_min, y_max);

    for (row, &label) in features.data.iter().zip(labels.iter()) {
        canvas.point(row[0], row[1], POINT_RADIUS, class_color(label));
    }

    canvas.save(path)
}

/// Data bounding box expanded by `MARGIN` on every side.
pub(crate) fn padded_bounds(features: &Matrix) -> (f64, f64, f64, f64) {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;

    for row in &features.data {
        x_min = x_min.min(row[0]);
        x_max = x_max.max(row[0]);
        y_min = y_min.min(row[1]);
        y_max = y_max.max(row[1]);
    }

    (x_min - MARGIN, x_max + MARGIN, y_min - MARGIN, y_max + MARGIN)
}
