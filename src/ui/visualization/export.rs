//! Export of the current run: plot as SVG plus a JSON summary.

use super::svg::build_plot_document;
use crate::math::{region::Region, types::ClassifiedSample};
use crate::sim::{estimator::MonteCarloEstimator, resources::BatchSize};
use bevy::log::info;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const SVG_PIXEL_SIZE: f64 = 550.0;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize run summary: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type ExportResult<T> = Result<T, ExportError>;

/// Kennzahlen eines Laufs, wie sie in die JSON-Datei geschrieben werden.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub region: Region,
    pub seed: u64,
    pub batch_size: BatchSize,
    pub total_count: u64,
    pub hit_count: u64,
    pub miss_count: u64,
    pub pi_quarter_estimate: Option<f64>,
    pub pi_estimate: Option<f64>,
    pub absolute_error: Option<f64>,
}

impl RunSummary {
    pub fn capture(estimator: &MonteCarloEstimator, batch_size: BatchSize, seed: u64) -> Self {
        let estimate = estimator.current_estimate();
        Self {
            region: *estimator.region(),
            seed,
            batch_size,
            total_count: estimator.total_count(),
            hit_count: estimator.hit_count(),
            miss_count: estimator.miss_count(),
            pi_quarter_estimate: estimate.map(|e| e.pi_quarter),
            pi_estimate: estimate.map(|e| e.pi),
            absolute_error: estimate.map(|e| e.absolute_error()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportedFiles {
    pub svg: PathBuf,
    pub summary: PathBuf,
}

/// Schreibt `pi_run_<seed>_<total>.svg` und `.json` nach `dir`.
///
/// Existing files are never overwritten; a repeated export of the same state
/// gets a numeric suffix (`pi_run_<seed>_<total>_1`, ...).
pub fn export_run(
    dir: &Path,
    summary: &RunSummary,
    samples: &[ClassifiedSample],
) -> ExportResult<ExportedFiles> {
    fs::create_dir_all(dir).map_err(|source| ExportError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let (svg_path, summary_path) = free_paths(dir, summary);

    let document = build_plot_document(&summary.region, samples, SVG_PIXEL_SIZE);
    ::svg::save(&svg_path, &document).map_err(|source| ExportError::Io {
        path: svg_path.clone(),
        source,
    })?;

    let json = serde_json::to_string_pretty(summary)?;
    fs::write(&summary_path, json).map_err(|source| ExportError::Io {
        path: summary_path.clone(),
        source,
    })?;

    info!("Exported run to '{}' and '{}'", svg_path.display(), summary_path.display());
    Ok(ExportedFiles {
        svg: svg_path,
        summary: summary_path,
    })
}

fn free_paths(dir: &Path, summary: &RunSummary) -> (PathBuf, PathBuf) {
    let base = format!("pi_run_{}_{}", summary.seed, summary.total_count);
    let mut stem = base.clone();
    let mut suffix = 0u32;
    loop {
        let svg = dir.join(format!("{stem}.svg"));
        let json = dir.join(format!("{stem}.json"));
        if !svg.exists() && !json.exists() {
            return (svg, json);
        }
        suffix += 1;
        stem = format!("{base}_{suffix}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::types::Point2D;

    fn scratch_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("monte_carlo_pi_{name}_{}", std::process::id()))
    }

    #[test]
    fn test_summary_without_samples_has_no_estimate() {
        let summary = RunSummary::capture(&MonteCarloEstimator::default(), BatchSize::Dots64, 9);
        assert_eq!(summary.total_count, 0);
        assert_eq!(summary.pi_estimate, None);

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["batch_size"], "Dots64");
        assert!(json["pi_estimate"].is_null());
        assert_eq!(json["region"]["r"], 1.0);
    }

    #[test]
    fn test_export_writes_both_files() {
        let mut estimator = MonteCarloEstimator::default();
        let outcome = estimator.record_batch([Point2D::new(0.1, 0.1), Point2D::new(0.9, 0.9)]);
        let summary = RunSummary::capture(&estimator, BatchSize::Single, 1);
        let dir = scratch_dir("export");
        fs::remove_dir_all(&dir).ok();

        let files = export_run(&dir, &summary, &outcome.samples).unwrap();
        assert_eq!(files.svg, dir.join("pi_run_1_2.svg"));

        let svg_text = fs::read_to_string(&files.svg).unwrap();
        assert!(svg_text.contains("<svg"));
        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&files.summary).unwrap()).unwrap();
        assert_eq!(json["hit_count"], 1);
        assert_eq!(json["pi_estimate"], 2.0);

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_repeated_export_keeps_earlier_files() {
        let summary = RunSummary::capture(&MonteCarloEstimator::default(), BatchSize::Single, 5);
        let dir = scratch_dir("repeat");
        fs::remove_dir_all(&dir).ok();

        let first = export_run(&dir, &summary, &[]).unwrap();
        let second = export_run(&dir, &summary, &[]).unwrap();
        assert_eq!(first.summary, dir.join("pi_run_5_0.json"));
        assert_eq!(second.summary, dir.join("pi_run_5_0_1.json"));
        assert!(first.svg.exists() && second.svg.exists());

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_export_into_file_path_fails() {
        let blocker = scratch_dir("blocker");
        fs::write(&blocker, "not a directory").unwrap();
        let summary = RunSummary::capture(&MonteCarloEstimator::default(), BatchSize::Single, 1);

        let result = export_run(&blocker, &summary, &[]);
        assert!(matches!(result, Err(ExportError::Io { .. })));

        fs::remove_file(&blocker).ok();
    }
}
