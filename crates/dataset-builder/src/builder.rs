//! Dataset Builder Implementation

use crate::DatasetError;
use block_model::parse_block_collection;
use feature_engine::{column_names, extract_block_features, FEATURE_DIMENSION};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Builds a labeled feature dataset from a directory of block files.
///
/// Carries the source directory and output path explicitly; there is no
/// process-wide state. One builder corresponds to one category directory
/// and one output table.
pub struct DatasetBuilder {
    directory: PathBuf,
    output_path: PathBuf,
}

/// Outcome of a completed build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSummary {
    /// Number of block files processed
    pub files: usize,
    /// Number of rows written (one per block)
    pub rows: usize,
    /// Label applied to every row
    pub label: u8,
}

impl DatasetBuilder {
    /// Create a builder for one source directory and output path.
    pub fn new(directory: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            output_path: output_path.into(),
        }
    }

    /// The label applied to every row: 1 when the directory path contains
    /// "attack", 0 otherwise. Directory-level metadata, not per-block.
    pub fn label(&self) -> u8 {
        if self.directory.to_string_lossy().contains("attack") {
            1
        } else {
            0
        }
    }

    /// Run the build: parse every block file, extract every block, write the
    /// labeled CSV. Fail-fast: any unreadable file, malformed record or
    /// failed extraction aborts the whole build with no partial output.
    pub fn build(&self) -> Result<DatasetSummary, DatasetError> {
        let files = self.block_files()?;
        let label = self.label();

        if files.is_empty() {
            warn!(
                directory = %self.directory.display(),
                "no block files found, writing header-only dataset"
            );
        }

        let mut rows: Vec<[f64; FEATURE_DIMENSION]> = Vec::new();
        for path in &files {
            let blocks = parse_block_collection(path)?;
            debug!(
                file = %path.display(),
                blocks = blocks.len(),
                "extracting block features"
            );
            for block in &blocks {
                let features =
                    extract_block_features(block).map_err(|source| DatasetError::Feature {
                        path: path.clone(),
                        source,
                    })?;
                rows.push(features);
            }
        }

        self.write_csv(&rows, label)?;
        info!(
            output = %self.output_path.display(),
            files = files.len(),
            rows = rows.len(),
            label,
            "dataset written"
        );

        Ok(DatasetSummary {
            files: files.len(),
            rows: rows.len(),
            label,
        })
    }

    /// Non-recursive listing of `.json` files in the source directory, in
    /// OS listing order. Row order follows this order; it is stable but not
    /// contractual.
    fn block_files(&self) -> Result<Vec<PathBuf>, DatasetError> {
        let io_err = |source: std::io::Error| DatasetError::Io {
            path: self.directory.clone(),
            source,
        };

        let mut files = Vec::new();
        for entry in fs::read_dir(&self.directory).map_err(io_err)? {
            let entry = entry.map_err(io_err)?;
            let path = entry.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
                files.push(path);
            }
        }
        Ok(files)
    }

    fn write_csv(
        &self,
        rows: &[[f64; FEATURE_DIMENSION]],
        label: u8,
    ) -> Result<(), DatasetError> {
        let output_err = |source: csv::Error| DatasetError::Output {
            path: self.output_path.clone(),
            source,
        };

        if let Some(parent) = self.output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| DatasetError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let mut writer = csv::Writer::from_path(&self.output_path).map_err(output_err)?;
        writer.write_record(column_names()).map_err(output_err)?;

        let label_field = label.to_string();
        for row in rows {
            let record = row
                .iter()
                .map(|v| v.to_string())
                .chain(std::iter::once(label_field.clone()));
            writer.write_record(record).map_err(output_err)?;
        }

        writer.flush().map_err(|source| DatasetError::Io {
            path: self.output_path.clone(),
            source,
        })?;
        Ok(())
    }
}
