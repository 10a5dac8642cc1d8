//! The fixed split-generation run: val/test dumps, the fully supervised
//! `all` split, one labeled/unlabeled split per ratio and the `small_`
//! variants of the sparsest ratios.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};

use crate::constants::files::{
    ALL_DIR, LABELED_MANIFEST, TEST_MANIFEST, UNLABELED_MANIFEST, VAL_MANIFEST,
};
use crate::constants::{
    DEFAULT_BASE_DIR, DEFAULT_OUTPUT_DIR, SMALL_DIVISOR, SMALL_RATIOS, SPLIT_RATIOS, SPLIT_SEED,
};
use crate::enumerate::list_partition_images;
use crate::errors::SplitError;
use crate::format::{split_lines, Partition};
use crate::partition::{partition, Ratio, SplitSet};
use crate::summary::RunSummary;
use crate::writer::write_manifest;

/// Where to read the dataset from and where to put the manifests.
#[derive(Debug, Clone)]
pub struct SplitPlan {
    pub base_dir: PathBuf,
    pub output_dir: PathBuf,
    pub show_progress: bool,
}

impl Default for SplitPlan {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_DIR, DEFAULT_OUTPUT_DIR)
    }
}

impl SplitPlan {
    pub fn new(base_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            output_dir: output_dir.into(),
            show_progress: false,
        }
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }
}

/// Run every step in order, stopping at the first write failure.
pub fn run_splits(plan: &SplitPlan) -> Result<RunSummary, SplitError> {
    let base_dir = plan.base_dir.as_path();
    let output_dir = plan.output_dir.as_path();
    let mut summary = RunSummary::new(base_dir, output_dir, SPLIT_SEED);

    info!("Generating splits from {}", base_dir.display());
    let train_images = list_partition_images(base_dir, Partition::Train)?;
    let val_images = list_partition_images(base_dir, Partition::Val)?;
    let test_images = list_partition_images(base_dir, Partition::Test)?;
    summary.train_images = train_images.len();
    summary.val_images = val_images.len();
    summary.test_images = test_images.len();
    info!(
        "Images - Train: {}, Val: {}, Test: {}",
        train_images.len(),
        val_images.len(),
        test_images.len()
    );
    if train_images.is_empty() {
        warn!("No training images found; ratio splits will be empty");
    }

    info!("Generating validation and test splits...");
    write_partition(
        output_dir,
        VAL_MANIFEST,
        &val_images,
        Partition::Val,
        &mut summary,
    )?;
    write_partition(
        output_dir,
        TEST_MANIFEST,
        &test_images,
        Partition::Test,
        &mut summary,
    )?;

    info!("Generating 'all' split (fully supervised)...");
    write_partition(
        output_dir,
        &manifest_path(ALL_DIR, LABELED_MANIFEST),
        &train_images,
        Partition::Train,
        &mut summary,
    )?;

    let bar = progress_bar(SPLIT_RATIOS.len(), plan.show_progress);
    let mut splits: BTreeMap<Ratio, SplitSet> = BTreeMap::new();
    for r in SPLIT_RATIOS {
        let ratio = Ratio::new(r)?;
        bar.set_message(ratio.dir_name());
        info!(
            "Generating '{}' split ({} labeled)...",
            ratio.dir_name(),
            ratio
        );
        let split = partition(&train_images, ratio, SPLIT_SEED);
        write_split(output_dir, &ratio.dir_name(), &split, &mut summary)?;
        splits.insert(ratio, split);
        bar.inc(1);
    }
    bar.finish_and_clear();

    for r in SMALL_RATIOS {
        let ratio = Ratio::new(r)?;
        info!(
            "Generating '{}' split (1/{} of '{}')...",
            ratio.small_dir_name(),
            SMALL_DIVISOR,
            ratio.dir_name()
        );
        // partition is pure, so recomputing yields the same shuffle
        let small = match splits.get(&ratio) {
            Some(split) => split.small(SMALL_DIVISOR),
            None => partition(&train_images, ratio, SPLIT_SEED).small(SMALL_DIVISOR),
        };
        write_split(output_dir, &ratio.small_dir_name(), &small, &mut summary)?;
    }

    info!("All splits created in: {}", output_dir.display());
    Ok(summary)
}

fn write_partition(
    output_dir: &Path,
    manifest: &str,
    images: &[String],
    partition: Partition,
    summary: &mut RunSummary,
) -> Result<(), SplitError> {
    write_manifest(
        &output_dir.join(manifest),
        &split_lines(images, partition),
    )?;
    summary.record(manifest, images.len());
    Ok(())
}

fn write_split(
    output_dir: &Path,
    dir_name: &str,
    split: &SplitSet,
    summary: &mut RunSummary,
) -> Result<(), SplitError> {
    write_partition(
        output_dir,
        &manifest_path(dir_name, LABELED_MANIFEST),
        &split.labeled,
        Partition::Train,
        summary,
    )?;
    write_partition(
        output_dir,
        &manifest_path(dir_name, UNLABELED_MANIFEST),
        &split.unlabeled,
        Partition::Train,
        summary,
    )
}

fn manifest_path(dir_name: &str, file_name: &str) -> String {
    format!("{dir_name}/{file_name}")
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::with_template(
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
    ) {
        bar.set_style(style.progress_chars("=> "));
    }
    bar
}
