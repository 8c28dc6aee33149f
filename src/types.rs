use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Why a file was left out of the combined output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The basename is in the excluded-file set (this includes the output file).
    ExcludedName,
    /// The ignore matcher matched the path.
    Ignored,
    /// The name ends with none of the allowed suffixes.
    Extension,
}

/// What happened to a single visited file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Combine,
    Skip(SkipReason),
}

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResult {
    /// Absolute path of the combined output file.
    pub output: PathBuf,
    /// Files whose contents were written to the output.
    pub combined: usize,
    /// Files visited but left out.
    pub skipped: usize,
    /// Directories cut from the walk before being entered.
    pub pruned_dirs: usize,
}
