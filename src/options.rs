use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Suffixes combined when the caller does not pick any.
pub const DEFAULT_EXTENSIONS: [&str; 5] = [".txt", ".py", ".java", ".js", ".md"];

/// Output file name used when none is given.
pub const DEFAULT_OUTPUT: &str = "combined.txt";

/// Run parameters as the user states them.
///
/// Paths here may be relative; [`Config::from_options`](crate::Config::from_options)
/// resolves them against the root once, before anything touches the disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombineOptions {
    pub root: PathBuf,
    pub extensions: Vec<String>,
    pub exclude_files: Vec<String>,
    /// Directory names relative to `root`.
    pub exclude_dirs: Vec<PathBuf>,
    /// Load `<root>/.gitignore` and skip whatever it matches.
    pub use_gitignore: bool,
    /// File name of the combined output, written inside `root`.
    pub output: String,
}
impl Default for CombineOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            exclude_files: Vec::new(),
            exclude_dirs: Vec::new(),
            use_gitignore: false,
            output: DEFAULT_OUTPUT.to_string(),
        }
    }
}
#[derive(Debug, Default)]
pub struct CombineBuilder {
    options: CombineOptions,
}
impl CombineBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: CombineOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }
    pub fn exclude_files<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.exclude_files = names.into_iter().map(Into::into).collect();
        self
    }
    pub fn exclude_dirs<I, P>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.options.exclude_dirs = dirs.into_iter().map(Into::into).collect();
        self
    }
    pub fn use_gitignore(mut self, yes: bool) -> Self {
        self.options.use_gitignore = yes;
        self
    }
    pub fn output(mut self, name: impl Into<String>) -> Self {
        self.options.output = name.into();
        self
    }
    pub fn build(self) -> CombineOptions {
        self.options
    }
}
