pub mod blobs;
pub mod split;

pub use blobs::make_blobs;
pub use split::{train_test_split, DEFAULT_TEST_FRACTION};
