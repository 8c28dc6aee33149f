use crate::config::Config;
use crate::error::CombineError;
use crate::matcher::IgnoreMatcher;
use crate::options::CombineOptions;
use crate::output::{CombinedWriter, normalize_newlines};
use crate::types::{Action, RunResult, SkipReason};
use ignore::{DirEntry, WalkBuilder};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

struct Walker {
    inner: ignore::Walk,
    pruned: Arc<AtomicUsize>,
}
impl Walker {
    fn new(config: &Config) -> Self {
        let mut builder = WalkBuilder::new(&config.root);
        builder
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b));
        let pruned = Arc::new(AtomicUsize::new(0));
        let exclude_dirs = config.exclude_dirs.clone();
        let matcher = config.matcher.clone();
        let counter = Arc::clone(&pruned);
        builder.filter_entry(move |entry| {
            if !is_dir(entry) {
                return true;
            }
            if prune_dir(entry.path(), &exclude_dirs, matcher.as_deref()) {
                tracing::debug!("Pruning directory: {}", entry.path().display());
                counter.fetch_add(1, Ordering::Relaxed);
                return false;
            }
            true
        });
        Self {
            inner: builder.build(),
            pruned,
        }
    }
    fn pruned_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.pruned)
    }
    /// Yields every file-like entry below the root. Listing errors are logged
    /// and skipped.
    fn into_files(self) -> impl Iterator<Item = DirEntry> {
        self.inner.filter_map(|result| match result {
            Ok(entry) if entry.depth() > 0 && is_file_like(&entry) => Some(entry),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!("Error walking entry: {}", e);
                None
            }
        })
    }
}
fn is_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_some_and(|t| t.is_dir())
}
/// Symlinks to directories are listed but never entered, and never combined.
fn is_file_like(entry: &DirEntry) -> bool {
    if is_dir(entry) {
        return false;
    }
    !(entry.path_is_symlink() && entry.path().is_dir())
}
fn prune_dir(path: &Path, exclude_dirs: &[PathBuf], matcher: Option<&dyn IgnoreMatcher>) -> bool {
    exclude_dirs.iter().any(|dir| dir.as_path() == path)
        || matcher.is_some_and(|m| m.is_ignored(path, true))
}

/// Walks the configured root and writes every accepted file into the output.
#[derive(Debug, Clone)]
pub struct Collector {
    config: Config,
}
impl Collector {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
    pub fn config(&self) -> &Config {
        &self.config
    }
    /// Applies the file filter to `path`.
    ///
    /// Checks run in order: excluded basename, ignore matcher, extension. The
    /// first that rejects the file decides the reason.
    pub fn classify(&self, path: &Path) -> Action {
        let name = path.file_name().unwrap_or(OsStr::new(""));
        if self.config.is_excluded_file(name) {
            return Action::Skip(SkipReason::ExcludedName);
        }
        if let Some(matcher) = self.config.matcher.as_deref() {
            if matcher.is_ignored(path, false) {
                return Action::Skip(SkipReason::Ignored);
            }
        }
        if !self.config.has_allowed_extension(name) {
            return Action::Skip(SkipReason::Extension);
        }
        Action::Combine
    }
    /// Returns true when the walk would cut `path` instead of entering it.
    pub fn is_pruned_dir(&self, path: &Path) -> bool {
        prune_dir(
            path,
            &self.config.exclude_dirs,
            self.config.matcher.as_deref(),
        )
    }
    /// Runs the collection.
    ///
    /// The output file is truncated first. Any read or write failure aborts the
    /// run and leaves whatever was already written in place.
    pub fn run(&self) -> Result<RunResult, CombineError> {
        self.log_banner();
        let output = &self.config.output;
        let file = File::create(output).map_err(|source| CombineError::CreateOutput {
            path: output.clone(),
            source,
        })?;
        let mut writer = CombinedWriter::new(BufWriter::new(file));
        let walker = Walker::new(&self.config);
        let pruned = walker.pruned_counter();
        let mut skipped = 0;
        for entry in walker.into_files() {
            let path = entry.path();
            match self.classify(path) {
                Action::Skip(reason) => {
                    skipped += 1;
                    tracing::info!("Skipping: {}", path.display());
                    tracing::debug!(?reason, "skip reason for {}", path.display());
                }
                Action::Combine => {
                    tracing::info!("Combining: {}", path.display());
                    let contents =
                        fs::read_to_string(path).map_err(|e| CombineError::read(path, e))?;
                    let relative = path.strip_prefix(&self.config.root).unwrap_or(path);
                    writer
                        .write_entry(relative, &normalize_newlines(&contents))
                        .map_err(|e| CombineError::write(output, e))?;
                }
            }
        }
        let combined = writer.entries();
        writer.finish().map_err(|e| CombineError::write(output, e))?;
        Ok(RunResult {
            output: output.clone(),
            combined,
            skipped,
            pruned_dirs: pruned.load(Ordering::Relaxed),
        })
    }
    fn log_banner(&self) {
        let config = &self.config;
        tracing::info!(
            "Starting to combine files from `{}` into `{}`.",
            config.root.display(),
            config.output.display()
        );
        tracing::info!("Including extensions: {:?}", config.extensions);
        let names: Vec<_> = config.excluded_file_names().collect();
        tracing::info!("Excluding files: {:?}", names);
        if !config.exclude_dirs.is_empty() {
            tracing::info!("Excluding directories: {:?}", config.exclude_dirs);
        }
        if config.has_matcher() {
            tracing::info!("Using ignore patterns");
        }
    }
}

/// Resolves `options` and runs a [`Collector`] over them.
pub fn combine(options: CombineOptions) -> Result<RunResult, CombineError> {
    let config = Config::from_options(options)?;
    Collector::new(config).run()
}
