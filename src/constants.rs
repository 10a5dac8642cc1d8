//! Fixed tunables of the split pipeline.

/// Dataset root holding `Train/`, `Val/` and `Test/`.
pub const DEFAULT_BASE_DIR: &str = "data/gf-7-building-4bands";

/// Root the manifests are written under.
pub const DEFAULT_OUTPUT_DIR: &str = "UniMatch-V2/splits/gf7-building";

/// Directory for the run log and run summary.
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Extension (without the dot) of the images that get enumerated.
pub const IMAGE_EXTENSION: &str = "tif";

/// Seed applied afresh to every labeled/unlabeled partition.
pub const SPLIT_SEED: u64 = 42;

/// Labeled-fraction denominators; ratio `r` keeps `1/r` of Train labeled.
pub const SPLIT_RATIOS: [u32; 5] = [4, 8, 16, 32, 64];

/// Ratios that also get a reduced `small_` variant.
pub const SMALL_RATIOS: [u32; 2] = [32, 64];

/// A small variant keeps `1/SMALL_DIVISOR` of each half (at least one entry).
pub const SMALL_DIVISOR: usize = 100;

pub mod files {
    pub const VAL_MANIFEST: &str = "val.txt";
    pub const TEST_MANIFEST: &str = "test.txt";
    pub const ALL_DIR: &str = "all";
    pub const LABELED_MANIFEST: &str = "labeled.txt";
    pub const UNLABELED_MANIFEST: &str = "unlabeled.txt";
    pub const SMALL_PREFIX: &str = "small_";
    pub const IMAGE_DIR: &str = "image";
    pub const LABEL_DIR: &str = "label";
}
