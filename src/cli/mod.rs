//! Command-line interface for retrieve-sequences.
//!
//! ## Usage
//!
//! ```text
//! # Gather nucleotide sequences from a directory of sample runs
//! retrieve-sequences targets.fasta hybpiper_runs dna
//!
//! # Sample names from a list file, runs stored elsewhere, output to fasta/
//! retrieve-sequences targets.fasta namelist.txt aa --hybpiper-dir runs --fasta-dir fasta
//!
//! # Keep going past unreadable sample files and report counts as JSON
//! retrieve-sequences targets.fasta runs supercontig --skip-unreadable --format json
//! ```

use std::path::PathBuf;

use clap::{Args, Parser};

use crate::core::types::SequenceKind;

pub mod retrieve;

#[derive(Parser)]
#[command(name = "retrieve-sequences")]
#[command(version)]
#[command(arg_required_else_help = true)]
#[command(about = "Gather per-sample gene sequences into one FASTA file per gene")]
#[command(
    long_about = "retrieve-sequences collects the sequences recovered by multiple HybPiper runs into unaligned multi-sample FASTA files, one per gene.\n\nGene names are taken from the target file used for the runs: the part of each record name after the last '-'.\nSamples are either the subdirectories of SAMPLE_NAMES or the lines of a SAMPLE_NAMES file.\n\nChoose protein (aa) or nucleotide (dna) sequences, 'intron' for intron sequences, or 'supercontig' for introns plus exons."
)]
pub struct Cli {
    #[command(flatten)]
    pub args: RetrieveArgs,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Report format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Args)]
pub struct RetrieveArgs {
    /// FASTA file containing target sequences
    pub targetfile: PathBuf,

    /// Directory containing HybPiper output OR a file containing HybPiper output names, one per line
    pub sample_names: PathBuf,

    /// Type of sequence to extract
    #[arg(value_enum)]
    pub sequence_type: SequenceType,

    /// Directory containing HybPiper output (when SAMPLE_NAMES is a file)
    #[arg(long, alias = "hybpiper_dir")]
    pub hybpiper_dir: Option<PathBuf>,

    /// Directory for output FASTA files
    #[arg(long, alias = "fasta_dir", default_value = ".")]
    pub fasta_dir: PathBuf,

    /// Skip and count sample files that exist but cannot be read, instead of stopping
    #[arg(long)]
    pub skip_unreadable: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum SequenceType {
    /// Nucleotide exon sequences (.FNA)
    Dna,
    /// Protein sequences (.FAA)
    Aa,
    /// Intron sequences
    Intron,
    /// Introns and exons
    Supercontig,
}

impl From<SequenceType> for SequenceKind {
    fn from(value: SequenceType) -> Self {
        match value {
            SequenceType::Dna => SequenceKind::Nucleotide,
            SequenceType::Aa => SequenceKind::Protein,
            SequenceType::Intron => SequenceKind::Intron,
            SequenceType::Supercontig => SequenceKind::Supercontig,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
