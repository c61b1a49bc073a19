use std::path::{Path, PathBuf};

use crate::core::types::SequenceKind;

/// Per-sample sequence outputs live under `<sample>/<gene>/<sample>/SEQUENCES_DIR`.
pub const SEQUENCES_DIR: &str = "sequences";

/// Resolves where the upstream pipeline left a sample's sequence file for a gene.
///
/// The layout is fixed:
///
/// ```text
/// <base>/<sample>/<gene>/<sample>/sequences/<subdir>/<gene><suffix>
/// ```
///
/// where `<subdir>` and `<suffix>` come from [`SequenceKind::layout`].
#[derive(Debug, Clone)]
pub struct HybPiperLayout {
    base_dir: PathBuf,
    kind: SequenceKind,
}

impl HybPiperLayout {
    pub fn new(base_dir: impl Into<PathBuf>, kind: SequenceKind) -> Self {
        Self {
            base_dir: base_dir.into(),
            kind,
        }
    }

    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    #[must_use]
    pub fn kind(&self) -> SequenceKind {
        self.kind
    }

    /// Expected path of `sample`'s file for `gene`.
    #[must_use]
    pub fn sequence_path(&self, sample: &str, gene: &str) -> PathBuf {
        self.base_dir
            .join(sample)
            .join(gene)
            .join(sample)
            .join(SEQUENCES_DIR)
            .join(self.kind.layout().subdir)
            .join(self.kind.file_name(gene))
    }
}
