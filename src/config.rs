//! Resolution of [`CombineOptions`] into the immutable [`Config`] a run uses.

use crate::error::CombineError;
use crate::matcher::{GitignoreMatcher, IgnoreMatcher};
use crate::options::CombineOptions;
use std::collections::BTreeSet;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

/// Name of the pattern file read when gitignore handling is on.
pub const GITIGNORE_FILE: &str = ".gitignore";

/// Everything a [`Collector`](crate::Collector) needs, with every path absolute.
#[derive(Clone)]
pub struct Config {
    pub(crate) root: PathBuf,
    pub(crate) extensions: Vec<String>,
    pub(crate) exclude_files: BTreeSet<OsString>,
    pub(crate) exclude_dirs: Vec<PathBuf>,
    pub(crate) matcher: Option<Arc<dyn IgnoreMatcher>>,
    pub(crate) output: PathBuf,
}

impl Config {
    /// Resolves `options` against the current directory.
    ///
    /// The root becomes an absolute, lexically normalized path and must be an
    /// existing directory. Excluded directories are joined onto that root, the
    /// output file is placed inside it and its basename joins the excluded
    /// files. When `use_gitignore` is set the pattern file is loaded here; a
    /// missing file leaves the config without a matcher.
    pub fn from_options(options: CombineOptions) -> Result<Self, CombineError> {
        let absolute = std::path::absolute(&options.root).map_err(|e| {
            CombineError::InvalidPath(format!("{}: {}", options.root.display(), e))
        })?;
        let root = normalize_path(&absolute);
        if !root.is_dir() {
            return Err(CombineError::NotADirectory { path: root });
        }

        let output = normalize_path(&root.join(&options.output));
        let output_name = output
            .file_name()
            .ok_or_else(|| CombineError::InvalidPath(format!("output {:?}", options.output)))?
            .to_os_string();

        let mut exclude_files: BTreeSet<OsString> = options
            .exclude_files
            .into_iter()
            .map(OsString::from)
            .collect();
        exclude_files.insert(output_name);

        let exclude_dirs = options
            .exclude_dirs
            .iter()
            .map(|dir| normalize_path(&root.join(dir)))
            .collect();

        let matcher = if options.use_gitignore {
            GitignoreMatcher::from_file(&root, &root.join(GITIGNORE_FILE))
                .map(|m| Arc::new(m) as Arc<dyn IgnoreMatcher>)
        } else {
            None
        };

        Ok(Self {
            root,
            extensions: options.extensions,
            exclude_files,
            exclude_dirs,
            matcher,
            output,
        })
    }

    /// Replaces the ignore matcher, e.g. with one built from another source.
    pub fn with_matcher(mut self, matcher: impl IgnoreMatcher + 'static) -> Self {
        self.matcher = Some(Arc::new(matcher));
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    pub fn exclude_dirs(&self) -> &[PathBuf] {
        &self.exclude_dirs
    }

    pub fn has_matcher(&self) -> bool {
        self.matcher.is_some()
    }

    pub fn is_excluded_file(&self, name: &OsStr) -> bool {
        self.exclude_files.contains(name)
    }

    /// Plain suffix match, so `archive.tar.gz` passes for `.gz`.
    pub fn has_allowed_extension(&self, name: &OsStr) -> bool {
        let name = name.to_string_lossy();
        self.extensions.iter().any(|ext| name.ends_with(ext.as_str()))
    }

    pub(crate) fn excluded_file_names(&self) -> impl Iterator<Item = &OsString> {
        self.exclude_files.iter()
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("root", &self.root)
            .field("extensions", &self.extensions)
            .field("exclude_files", &self.exclude_files)
            .field("exclude_dirs", &self.exclude_dirs)
            .field("matcher", &self.matcher.is_some())
            .field("output", &self.output)
            .finish()
    }
}

/// Lexically drops `.` components and folds `..` into its parent.
///
/// Symlinks are not resolved; `a/link/..` becomes `a`.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }
    out
}
