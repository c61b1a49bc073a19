use serde::{Deserialize, Serialize};

/// Which per-gene output of the upstream pipeline a run gathers.
///
/// Selected once per run; every path and output name is derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SequenceKind {
    /// Translated exon sequences (`FAA`)
    Protein,
    /// Exon nucleotide sequences (`FNA`)
    Nucleotide,
    /// Intron-only sequences
    Intron,
    /// Exons plus introns
    Supercontig,
}

/// Directory and filename convention for one [`SequenceKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindLayout {
    /// Directory under `<sample>/sequences/` holding the per-gene files
    pub subdir: &'static str,
    /// Appended to the gene name to form both the input and output filename
    pub file_suffix: &'static str,
}

impl SequenceKind {
    pub const ALL: [SequenceKind; 4] = [
        SequenceKind::Protein,
        SequenceKind::Nucleotide,
        SequenceKind::Intron,
        SequenceKind::Supercontig,
    ];

    #[must_use]
    pub const fn layout(self) -> KindLayout {
        match self {
            Self::Protein => KindLayout {
                subdir: "FAA",
                file_suffix: ".FAA",
            },
            Self::Nucleotide => KindLayout {
                subdir: "FNA",
                file_suffix: ".FNA",
            },
            Self::Intron => KindLayout {
                subdir: "intron",
                file_suffix: "_introns.fasta",
            },
            Self::Supercontig => KindLayout {
                subdir: "intron",
                file_suffix: "_supercontig.fasta",
            },
        }
    }

    /// Name of the per-gene file, e.g. `gene001.FNA` or `gene001_introns.fasta`.
    ///
    /// The upstream pipeline and the gathered output use the same name.
    #[must_use]
    pub fn file_name(self, gene: &str) -> String {
        format!("{gene}{}", self.layout().file_suffix)
    }

    /// Command-line spelling of this kind
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Protein => "aa",
            Self::Nucleotide => "dna",
            Self::Intron => "intron",
            Self::Supercontig => "supercontig",
        }
    }
}

impl std::fmt::Display for SequenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
