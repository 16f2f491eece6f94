use rand::prelude::*;

use crate::math::matrix::{standard_normal, Matrix};

/// Bounding box the cluster centers are drawn from, per axis.
const CENTER_BOX: (f64, f64) = (-10.0, 10.0);

/// Generates `n_samples` labeled 2D points clustered around `centers`
/// distinct locations.
///
/// Centers are drawn uniformly from the [-10, 10]² box; samples are assigned
/// to centers round-robin and offset by isotropic unit-variance Gaussian
/// noise, then the sample order is shuffled. Labels are the 0-indexed center
/// ids, so label i always belongs to the i-th center.
///
/// Returns (features, labels) with `features` of shape n_samples × 2 and one
/// paired label per row.
pub fn make_blobs(n_samples: usize, centers: usize) -> (Matrix, Vec<usize>) {
    assert!(centers > 0, "at least one cluster center required");

    let mut rng = rand::thread_rng();
    let (lo, hi) = CENTER_BOX;

    let cluster_centers: Vec<(f64, f64)> = (0..centers)
        .map(|_| (rng.gen_range(lo..hi), rng.gen_range(lo..hi)))
        .collect();

    let mut samples: Vec<(Vec<f64>, usize)> = (0..n_samples)
        .map(|i| {
            let class = i % centers;
            let (cx, cy) = cluster_centers[class];
            let x = cx + standard_normal(&mut rng);
            let y = cy + standard_normal(&mut rng);
            (vec![x, y], class)
        })
        .collect();

    // Shuffle so classes are interleaved rather than blocked by index.
    samples.shuffle(&mut rng);

    let mut features = Vec::with_capacity(n_samples);
    let mut labels = Vec::with_capacity(n_samples);
    for (point, label) in samples {
        features.push(point);
        labels.push(label);
    }

    (Matrix::from_data(features), labels)
}
