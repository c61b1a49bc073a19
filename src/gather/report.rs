use std::path::PathBuf;

use serde::Serialize;

use crate::core::types::SequenceKind;

/// Outcome of gathering one gene across all samples
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneReport {
    pub gene: String,

    /// Per-gene FASTA file that was written
    pub output: PathBuf,

    /// Samples whose record was copied to the output
    pub found: usize,

    /// Samples with no file for this gene
    pub missing: usize,

    /// Samples whose file could not be read (only under the skip policy)
    pub failed: usize,
}

impl GeneReport {
    pub fn new(gene: impl Into<String>, output: impl Into<PathBuf>) -> Self {
        Self {
            gene: gene.into(),
            output: output.into(),
            found: 0,
            missing: 0,
            failed: 0,
        }
    }

    #[must_use]
    pub fn samples_seen(&self) -> usize {
        self.found + self.missing + self.failed
    }
}

/// Per-gene reports for a whole run, in gene order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub sequence_type: SequenceKind,
    pub samples: usize,
    pub genes: Vec<GeneReport>,
}

impl RunSummary {
    #[must_use]
    pub fn total_found(&self) -> usize {
        self.genes.iter().map(|g| g.found).sum()
    }

    #[must_use]
    pub fn total_failed(&self) -> usize {
        self.genes.iter().map(|g| g.failed).sum()
    }

    /// Genes for which no sample had a sequence
    pub fn empty_genes(&self) -> impl Iterator<Item = &GeneReport> {
        self.genes.iter().filter(|g| g.found == 0)
    }
}
