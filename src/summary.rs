use std::fmt::Write as _;
use std::fs::{create_dir_all, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use log::info;
use serde::Serialize;

use crate::errors::SplitError;

/// One written manifest and how many lines it holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestCount {
    /// Path relative to the output root, `/`-separated.
    pub manifest: String,
    pub entries: usize,
}

/// What a pipeline run produced.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub base_dir: PathBuf,
    pub output_dir: PathBuf,
    pub seed: u64,
    pub train_images: usize,
    pub val_images: usize,
    pub test_images: usize,
    pub manifests: Vec<ManifestCount>,
}

impl RunSummary {
    pub fn new(base_dir: &Path, output_dir: &Path, seed: u64) -> Self {
        Self {
            base_dir: base_dir.to_path_buf(),
            output_dir: output_dir.to_path_buf(),
            seed,
            train_images: 0,
            val_images: 0,
            test_images: 0,
            manifests: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, manifest: impl Into<String>, entries: usize) {
        let manifest = manifest.into();
        info!("  Created: {manifest} ({entries} entries)");
        self.manifests.push(ManifestCount { manifest, entries });
    }

    pub fn entries(&self, manifest: &str) -> Option<usize> {
        self.manifests
            .iter()
            .find(|m| m.manifest == manifest)
            .map(|m| m.entries)
    }

    /// Plain-text table of every manifest, for the terminal.
    pub fn render_table(&self) -> String {
        let width = self
            .manifests
            .iter()
            .map(|m| m.manifest.len())
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        let _ = writeln!(out, "Dataset statistics:");
        let _ = writeln!(out, "  Training images:   {}", self.train_images);
        let _ = writeln!(out, "  Validation images: {}", self.val_images);
        let _ = writeln!(out, "  Test images:       {}", self.test_images);
        let _ = writeln!(out);
        let _ = writeln!(out, "All splits created in: {}/", self.output_dir.display());
        for m in &self.manifests {
            let _ = writeln!(out, "  {:<width$} - {}", m.manifest, m.entries);
        }
        out
    }

    pub fn log(&self) {
        for line in self.render_table().lines() {
            info!("{line}");
        }
    }

    pub fn write_json(&self, path: &Path) -> Result<(), SplitError> {
        if let Some(parent) = path.parent() {
            create_dir_all(parent).map_err(|e| SplitError::io(parent, e))?;
        }
        let file = File::create(path).map_err(|e| SplitError::io(path, e))?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)
            .map_err(|e| SplitError::io(path, e.into()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RunSummary {
        let mut summary = RunSummary::new(Path::new("data"), Path::new("out"), 42);
        summary.train_images = 4;
        summary.record("val.txt", 0);
        summary.record("1_4/labeled.txt", 1);
        summary
    }

    #[test]
    fn looks_up_entries() {
        let summary = sample();
        assert_eq!(summary.entries("1_4/labeled.txt"), Some(1));
        assert_eq!(summary.entries("1_8/labeled.txt"), None);
    }

    #[test]
    fn table_lists_each_manifest() {
        let table = sample().render_table();
        assert!(table.contains("Training images:   4"));
        assert!(table.contains("  val.txt         - 0"));
        assert!(table.contains("  1_4/labeled.txt - 1"));
    }

    #[test]
    fn json_round_trips_through_serde_value() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("logs").join("summary.json");
        sample().write_json(&path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["seed"], 42);
        assert_eq!(value["manifests"][1]["manifest"], "1_4/labeled.txt");
        assert_eq!(value["manifests"][1]["entries"], 1);
    }
}
