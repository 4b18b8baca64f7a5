//! Batch conversion of a RaceMenu preset folder
//!
//! Walks `SKSE/Plugins/CharGen/Presets/*.jslot` and writes one BodySlide
//! preset per file into `CalienteTools/BodySlide/SliderPresets/`. Files that
//! already have a preset are left alone, so re-running is safe.

mod types;

pub use types::{
    BatchPhase, BatchProgress, BatchProgressCallback, BatchResult, FileOutcome, FileReport,
};

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::converter::{jslot_to_slider_presets, preset_base_name};
use crate::error::{Error, Result};
use crate::formats::jslot::read_jslot;
use crate::formats::slider_preset::write_slider_presets;

/// RaceMenu preset folder, relative to the game data root.
pub const INPUT_DIR: [&str; 4] = ["SKSE", "Plugins", "CharGen", "Presets"];

/// BodySlide preset folder, relative to the game data root.
pub const OUTPUT_DIR: [&str; 3] = ["CalienteTools", "BodySlide", "SliderPresets"];

/// Input extension (compared case-insensitively).
pub const JSLOT_EXTENSION: &str = "jslot";

/// Where to read presets from and write slider presets to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl BatchConfig {
    /// Standard layout below a game data root (e.g. Skyrim's `Data` folder).
    #[must_use]
    pub fn from_root<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref();
        Self {
            input_dir: INPUT_DIR.iter().fold(root.to_path_buf(), |p, seg| p.join(seg)),
            output_dir: OUTPUT_DIR.iter().fold(root.to_path_buf(), |p, seg| p.join(seg)),
        }
    }

    /// Slider preset path for a jslot base name.
    #[must_use]
    pub fn output_path_for(&self, base_name: &str) -> PathBuf {
        self.output_dir.join(format!("{base_name}.xml"))
    }
}

impl Default for BatchConfig {
    /// Standard layout relative to the working directory.
    fn default() -> Self {
        Self::from_root(PathBuf::new())
    }
}

/// Find all .jslot files directly inside a directory
///
/// # Returns
/// A sorted list of paths. A missing directory yields an empty list.
pub fn find_jslot_files<P: AsRef<Path>>(dir: P) -> Vec<PathBuf> {
    let mut files: Vec<_> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| {
            e.path().is_file()
                && e.path()
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case(JSLOT_EXTENSION))
        })
        .map(|e| e.path().to_path_buf())
        .collect();

    files.sort();
    files
}

/// Convert every .jslot file in the configured input directory
///
/// # Errors
/// Returns an error only if the output directory cannot be created.
/// Per-file problems are recorded in the returned [`BatchResult`].
pub fn convert_directory(config: &BatchConfig) -> Result<BatchResult> {
    convert_directory_with_progress(config, &|_| {})
}

/// Convert every .jslot file in the configured input directory with progress callback
///
/// # Errors
/// Returns an error only if the output directory cannot be created.
pub fn convert_directory_with_progress(
    config: &BatchConfig,
    progress: BatchProgressCallback,
) -> Result<BatchResult> {
    progress(&BatchProgress::new(BatchPhase::Scanning, 0, 0));

    fs::create_dir_all(&config.output_dir)?;

    if !config.input_dir.is_dir() {
        tracing::warn!(
            "Preset directory {} not found, nothing to convert",
            config.input_dir.display()
        );
    }

    let files = find_jslot_files(&config.input_dir);
    let total = files.len();
    tracing::debug!("Found {total} jslot files in {}", config.input_dir.display());

    let mut result = BatchResult::default();
    for (i, source) in files.into_iter().enumerate() {
        let base_name = match preset_base_name(&source) {
            Ok(name) => name,
            Err(e) => {
                tracing::warn!("Skipping {}: {e}", source.display());
                result.reports.push(FileReport {
                    base_name: source.display().to_string(),
                    source,
                    outcome: FileOutcome::Invalid,
                });
                continue;
            }
        };

        progress(&BatchProgress::with_file(
            BatchPhase::Converting,
            i + 1,
            total,
            &base_name,
        ));

        let outcome = convert_file(&source, &base_name, config);
        result.reports.push(FileReport {
            source,
            base_name,
            outcome,
        });
    }

    progress(&BatchProgress::new(BatchPhase::Complete, total, total));
    Ok(result)
}

/// Run the read → convert → write pipeline for one jslot file
///
/// Never returns an error: each failure mode maps to a [`FileOutcome`].
pub fn convert_file(source: &Path, base_name: &str, config: &BatchConfig) -> FileOutcome {
    let output = config.output_path_for(base_name);
    if output.exists() {
        tracing::info!("Found preset for {base_name}, skipping");
        return FileOutcome::Skipped;
    }

    let doc = match read_jslot(source) {
        Ok(Some(doc)) => doc,
        Ok(None) => {
            tracing::warn!("Invalid data found at {base_name}, skipping");
            return FileOutcome::Invalid;
        }
        Err(e) => {
            tracing::debug!("Failed to read {}: {e}", source.display());
            tracing::warn!("Invalid data found at {base_name}, skipping");
            return FileOutcome::Invalid;
        }
    };

    let presets = match jslot_to_slider_presets(&doc, base_name) {
        Ok(presets) => presets,
        Err(e) => {
            tracing::warn!("Invalid data found at {base_name}, skipping: {e}");
            return FileOutcome::Invalid;
        }
    };

    match write_slider_presets(&presets, &output) {
        Ok(()) => {
            tracing::info!("Created preset {}", output.display());
            FileOutcome::Created(output)
        }
        Err(Error::OutputExists { .. }) => {
            tracing::info!("Found preset for {base_name}, skipping");
            FileOutcome::Skipped
        }
        Err(e) => {
            tracing::error!("Failed to write {}: {e}", output.display());
            FileOutcome::Failed(e.to_string())
        }
    }
}
