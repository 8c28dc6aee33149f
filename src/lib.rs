//! # combinefiles
//!
//! `combinefiles` walks a directory tree and concatenates the text of every file
//! that passes its filters into one output file, each file preceded by its path
//! relative to the scanned root.
//!
//! A file is left out when its basename is excluded (the output file itself
//! always is), when an ignore matcher matches it, or when its name ends with
//! none of the allowed suffixes. Excluded directories, and directories matched
//! by the ignore matcher, are cut from the walk before they are entered.
//!
//! # Example
//!
//! ```no_run
//! use combinefiles::{CombineBuilder, combine};
//!
//! let options = CombineBuilder::new("./project")
//!     .extensions([".rs", ".toml"])
//!     .exclude_dirs(["target"])
//!     .use_gitignore(true)
//!     .output("snapshot.txt")
//!     .build();
//!
//! let result = combine(options).expect("Failed to combine files");
//! println!(
//!     "{} combined, {} skipped, written to {}",
//!     result.combined,
//!     result.skipped,
//!     result.output.display()
//! );
//! ```
//!
//! The ignore capability is a trait, so a custom one can be injected:
//!
//! ```no_run
//! use combinefiles::{Collector, CombineOptions, Config};
//! use std::path::Path;
//!
//! let config = Config::from_options(CombineOptions::default())
//!     .unwrap()
//!     .with_matcher(|path: &Path, _is_dir: bool| path.ends_with("generated"));
//! Collector::new(config).run().unwrap();
//! ```

mod config;
mod engine;
mod error;
mod matcher;
mod options;
pub mod output;
mod types;

pub use config::{Config, GITIGNORE_FILE, normalize_path};
pub use engine::{Collector, combine};
pub use error::CombineError;
pub use matcher::{GitignoreMatcher, IgnoreMatcher};
pub use options::{CombineBuilder, CombineOptions, DEFAULT_EXTENSIONS, DEFAULT_OUTPUT};
pub use types::{Action, RunResult, SkipReason};
