//! Types for batch conversion results and progress tracking

use std::path::PathBuf;

/// Progress callback type for batch operations
pub type BatchProgressCallback<'a> = &'a (dyn Fn(&BatchProgress) + Sync + Send);

/// Progress information during a batch conversion
#[derive(Debug, Clone)]
pub struct BatchProgress {
    /// Current operation phase
    pub phase: BatchPhase,
    /// Current item number (1-indexed)
    pub current: usize,
    /// Total number of items
    pub total: usize,
    /// Current file being processed (if applicable)
    pub current_file: Option<String>,
}

impl BatchProgress {
    /// Create a new progress update
    #[must_use]
    pub fn new(phase: BatchPhase, current: usize, total: usize) -> Self {
        Self {
            phase,
            current,
            total,
            current_file: None,
        }
    }

    /// Create a progress update with a file/item name
    #[must_use]
    pub fn with_file(phase: BatchPhase, current: usize, total: usize, file: impl Into<String>) -> Self {
        Self {
            phase,
            current,
            total,
            current_file: Some(file.into()),
        }
    }
}

/// Phase of a batch conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchPhase {
    /// Looking for .jslot files
    Scanning,
    /// Converting one preset
    Converting,
    /// Operation complete
    Complete,
}

impl BatchPhase {
    /// Get a human-readable description of this phase
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scanning => "Scanning presets",
            Self::Converting => "Converting",
            Self::Complete => "Complete",
        }
    }
}

/// What happened to one input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// A new slider preset was written to this path.
    Created(PathBuf),
    /// A slider preset already existed; nothing was read or written.
    Skipped,
    /// The jslot file vanished or could not be parsed.
    Invalid,
    /// Writing the slider preset failed.
    Failed(String),
}

/// Per-file entry of a batch run
#[derive(Debug, Clone)]
pub struct FileReport {
    /// The .jslot file
    pub source: PathBuf,
    /// File name without extension
    pub base_name: String,
    pub outcome: FileOutcome,
}

/// Result of a batch conversion
#[derive(Debug, Clone, Default)]
pub struct BatchResult {
    /// One report per input file, in processing order
    pub reports: Vec<FileReport>,
}

impl BatchResult {
    fn count(&self, pred: impl Fn(&FileOutcome) -> bool) -> usize {
        self.reports.iter().filter(|r| pred(&r.outcome)).count()
    }

    #[must_use]
    pub fn created(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Created(_)))
    }

    #[must_use]
    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Skipped))
    }

    #[must_use]
    pub fn invalid(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Invalid))
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Failed(_)))
    }
}
