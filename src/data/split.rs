use rand::prelude::*;

use crate::math::matrix::Matrix;

/// Fraction of samples held out for evaluation by default.
pub const DEFAULT_TEST_FRACTION: f64 = 0.25;

/// Randomly partitions a paired dataset into train and test subsets.
///
/// Each sample is assigned to the test split independently with probability
/// `test_fraction`, so the resulting proportions are approximate rather than
/// exact and no class balance is guaranteed. Feature/label pairing is
/// preserved and every sample lands in exactly one split.
///
/// Returns (train features, test features, train labels, test labels).
///
/// # Panics
/// Panics if the feature row count and label count differ, or if
/// `test_fraction` is outside [0, 1].
pub fn train_test_split(
    features: &Matrix,
    labels: &[usize],
    test_fraction: f64,
) -> (Matrix, Matrix, Vec<usize>, Vec<usize>) {
    assert_eq!(features.rows, labels.len(), "one label per feature row required");
    assert!((0.0..=1.0).contains(&test_fraction), "test_fraction must be in [0, 1]");

    let mut rng = rand::thread_rng();

    let mut train_features = Vec::new();
    let mut test_features = Vec::new();
    let mut train_labels = Vec::new();
    let mut test_labels = Vec::new();

    for (row, &label) in features.data.iter().zip(labels.iter()) {
        if rng.gen::<f64>() < test_fraction {
            test_features.push(row.clone());
            test_labels.push(label);
        } else {
            train_features.push(row.clone());
            train_labels.push(label);
        }
    }

    (
        rows_to_matrix(train_features, features.cols),
        rows_to_matrix(test_features, features.cols),
        train_labels,
        test_labels,
    )
}

/// An empty split still needs the right column count so it can flow through
/// `forward`/`predict` unharmed.
fn rows_to_matrix(rows: Vec<Vec<f64>>, cols: usize) -> Matrix {
    if rows.is_empty() {
        Matrix::zeros(0, cols)
    } else {
        Matrix::from_data(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::blobs::make_blobs;

    #[test]
    fn split_counts_sum_to_the_input_size() {
        let (features, labels) = make_blobs(200, 2);
        let (train_x, test_x, train_y, test_y) =
            train_test_split(&features, &labels, DEFAULT_TEST_FRACTION);

        assert_eq!(train_x.rows + test_x.rows, 200);
        assert_eq!(train_y.len() + test_y.len(), 200);
        assert_eq!(train_x.rows, train_y.len());
        assert_eq!(test_x.rows, test_y.len());
    }

    #[test]
    fn pairing_survives_the_split() {
        // Encode the label into the feature so mismatched pairs are visible.
        let features = Matrix::from_data(
            (0..100).map(|i| vec![(i % 5) as f64, 0.0]).collect(),
        );
        let labels: Vec<usize> = (0..100).map(|i| i % 5).collect();

        let (train_x, test_x, train_y, test_y) = train_test_split(&features, &labels, 0.3);
        for (row, &label) in train_x.data.iter().zip(&train_y) {
            assert_eq!(row[0] as usize, label);
        }
        for (row, &label) in test_x.data.iter().zip(&test_y) {
            assert_eq!(row[0] as usize, label);
        }
    }

    #[test]
    fn zero_fraction_keeps_everything_in_train() {
        let (features, labels) = make_blobs(50, 2);
        let (train_x, test_x, _, test_y) = train_test_split(&features, &labels, 0.0);
        assert_eq!(train_x.rows, 50);
        assert_eq!(test_x.rows, 0);
        assert!(test_y.is_empty());
    }
}
