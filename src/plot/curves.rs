use image::Rgb;

use crate::plot::canvas::Canvas;
use crate::plot::class_color;
use crate::train::history::TrainingHistory;

const WIDTH: u32 = 800;
const HEIGHT: u32 = 500;

const AXIS_COLOR: Rgb<u8> = Rgb([120, 120, 120]);
const LOSS_COLOR: Rgb<u8> = Rgb([214, 39, 40]);

/// Renders the per-epoch loss sequence as a line chart.
pub fn loss_curve(history: &TrainingHistory, path: &str) -> std::io::Result<()> {
    assert!(!history.loss.is_empty(), "cannot plot an empty loss history");

    let y_max = history.loss.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let y_min = history.loss.iter().copied().fold(f64::INFINITY, f64::min);
    // A flat loss still needs a non-empty y range to draw in.
    let pad = ((y_max - y_min) * 0.05).max(1e-9);

    let mut canvas = chart_canvas(history.epochs(), y_min - pad, y_max + pad);
    polyline(&mut canvas, &history.loss, LOSS_COLOR);
    canvas.save(path)
}

/// Renders train and test accuracy on one chart, colored like classes 0
/// and 1 of the scatter plot. The y axis is the full [0, 1] range.
pub fn accuracy_curves(history: &TrainingHistory, path: &str) -> std::io::Result<()> {
    assert!(!history.train_accuracy.is_empty(), "cannot plot an empty accuracy history");

    let mut canvas = chart_canvas(history.epochs(), -0.02, 1.02);
    polyline(&mut canvas, &history.train_accuracy, class_color(0));
    polyline(&mut canvas, &history.test_accuracy, class_color(1));
    canvas.save(path)
}

/// A white canvas with the x axis spanning the epoch range plus light
/// border axes.
fn chart_canvas(epochs: usize, y_min: f64, y_max: f64) -> Canvas {
    let x_max = (epochs.max(2) - 1) as f64;
    let mut canvas = Canvas::new(WIDTH, HEIGHT, 0.0, x_max, y_min, y_max);
    canvas.line(0.0, y_min, 0.0, y_max, AXIS_COLOR);
    canvas.line(0.0, y_min, x_max, y_min, AXIS_COLOR);
    canvas
}

/// Connects consecutive (epoch, value) points with segments.
fn polyline(canvas: &mut Canvas, values: &[f64], color: Rgb<u8>) {
    for (epoch, pair) in values.windows(2).enumerate() {
        canvas.line(epoch as f64, pair[0], (epoch + 1) as f64, pair[1], color);
    }
    if values.len() == 1 {
        canvas.point(0.0, values[0], 2, color);
    }
}
