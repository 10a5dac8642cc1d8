//! Manifest generation for semi-supervised segmentation splits.
//!
//! Enumerates the `Train`/`Val`/`Test` image folders of a dataset, carves the
//! training images into labeled/unlabeled subsets at fixed ratios and writes
//! the plain-text manifests a UniMatch-style loader reads.

pub mod constants;
pub mod enumerate;
pub mod errors;
pub mod format;
pub mod partition;
pub mod pipeline;
pub mod summary;
pub mod writer;

pub use enumerate::list_partition_images;
pub use errors::SplitError;
pub use format::{split_line, Partition};
pub use partition::{partition, subsample, Ratio, SplitSet};
pub use pipeline::{run_splits, SplitPlan};
pub use summary::{ManifestCount, RunSummary};
pub use writer::write_manifest;
