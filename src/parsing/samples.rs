//! Sample enumeration.
//!
//! Samples come either from the subdirectories of a directory holding the
//! upstream pipeline's per-sample runs, or from a text file naming one sample
//! per line.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::parsing::ParseError;

/// Where the sample names were taken from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleSource {
    /// Subdirectories of this directory
    Directory(PathBuf),
    /// Lines of this file
    ListFile(PathBuf),
}

/// Sample names plus the directory their runs live under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleSet {
    pub source: SampleSource,
    /// Base directory for resolving per-sample paths
    pub base_dir: PathBuf,
    /// Sample names in enumeration order
    pub names: Vec<String>,
}

impl SampleSet {
    /// Enumerate samples from `sample_names`, which is either a directory of
    /// per-sample runs or a list file.
    ///
    /// For a directory, the directory itself is the base and `base_dir` is
    /// ignored. For a list file, `base_dir` is used, defaulting to `.`.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Io` if the directory or file cannot be read.
    pub fn resolve(sample_names: &Path, base_dir: Option<&Path>) -> Result<Self, ParseError> {
        if sample_names.is_dir() {
            if let Some(ignored) = base_dir {
                warn!(
                    "{} is a directory; ignoring --hybpiper-dir {}",
                    sample_names.display(),
                    ignored.display()
                );
            }

            Ok(Self {
                source: SampleSource::Directory(sample_names.to_path_buf()),
                base_dir: sample_names.to_path_buf(),
                names: list_sample_dirs(sample_names)?,
            })
        } else {
            Ok(Self {
                source: SampleSource::ListFile(sample_names.to_path_buf()),
                base_dir: base_dir.map_or_else(|| PathBuf::from("."), Path::to_path_buf),
                names: read_sample_list(sample_names)?,
            })
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// List the visible subdirectories of `dir`, sorted by name.
///
/// Hidden entries (leading `.`) and plain files are excluded. Symlinks to
/// directories count as directories.
///
/// # Errors
///
/// Returns `ParseError::Io` if the directory cannot be listed.
pub fn list_sample_dirs(dir: &Path) -> Result<Vec<String>, ParseError> {
    let mut names = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let file_name = entry.file_name();

        let Some(name) = file_name.to_str() else {
            warn!(
                "Skipping non-UTF-8 entry {} in {}",
                file_name.to_string_lossy(),
                dir.display()
            );
            continue;
        };

        if name.starts_with('.') || !entry.path().is_dir() {
            continue;
        }

        names.push(name.to_string());
    }

    names.sort_unstable();
    debug!("Found {} sample directories in {}", names.len(), dir.display());

    Ok(names)
}

/// Read sample names from a list file, one per line.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read.
pub fn read_sample_list(path: &Path) -> Result<Vec<String>, ParseError> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_sample_list_text(&content))
}

/// Parse sample names from list text.
///
/// Trailing whitespace is stripped; lines left empty are skipped. File order
/// is preserved.
#[must_use]
pub fn parse_sample_list_text(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect()
}
