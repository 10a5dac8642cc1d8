use std::fs;
use std::path::Path;

use log::{debug, warn};

use crate::constants::files::IMAGE_DIR;
use crate::constants::IMAGE_EXTENSION;
use crate::errors::SplitError;
use crate::format::Partition;

/// Sorted image filenames under `<base_dir>/<partition>/image/`.
///
/// A missing directory is not an error: it is logged and yields an empty list.
pub fn list_partition_images(
    base_dir: &Path,
    partition: Partition,
) -> Result<Vec<String>, SplitError> {
    list_images_with_extension(base_dir, partition, IMAGE_EXTENSION)
}

pub fn list_images_with_extension(
    base_dir: &Path,
    partition: Partition,
    extension: &str,
) -> Result<Vec<String>, SplitError> {
    let image_dir = base_dir.join(partition.as_str()).join(IMAGE_DIR);
    if !image_dir.is_dir() {
        warn!("Warning: {} does not exist", image_dir.display());
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(&image_dir).map_err(|e| SplitError::io(&image_dir, e))?;
    let mut image_files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| SplitError::io(&image_dir, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|ext| ext.to_str()) != Some(extension) {
            continue;
        }
        // non-UTF-8 names cannot be rendered into a manifest line
        match entry.file_name().into_string() {
            Ok(name) => image_files.push(name),
            Err(name) => warn!("Skipping non UTF-8 filename {:?}", name),
        }
    }
    image_files.sort();

    debug!(
        "{}: {} .{} files in {}",
        partition,
        image_files.len(),
        extension,
        image_dir.display()
    );
    Ok(image_files)
}
