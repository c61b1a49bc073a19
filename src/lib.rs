//! # retrieve-sequences
//!
//! Gathers the per-sample, per-gene sequence files left by multiple HybPiper
//! runs into one unaligned multi-sample FASTA file per gene, ready for alignment.
//!
//! A run works from three inputs:
//!
//! - a **target file**: the reference FASTA used for the runs, whose record names
//!   end in `-<gene>`; the unique gene names define the output files
//! - the **samples**: subdirectories of a run directory, or names listed in a file
//! - a **sequence kind**: protein, nucleotide, intron or supercontig, which fixes
//!   where each sample's file lives and how outputs are named
//!
//! For every gene, each sample's expected file is read and its first record is
//! copied to `<gene>.FNA`, `<gene>.FAA`, `<gene>_introns.fasta` or
//! `<gene>_supercontig.fasta`. Samples without a file are skipped.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use retrieve_sequences::gather::{GatherConfig, Gatherer};
//! use retrieve_sequences::parsing::fasta::read_target_genes;
//! use retrieve_sequences::parsing::samples::SampleSet;
//! use retrieve_sequences::SequenceKind;
//!
//! let target = read_target_genes(Path::new("targets.fasta")).unwrap();
//! let genes: Vec<String> = target.genes.into_iter().collect();
//! let samples = SampleSet::resolve(Path::new("hybpiper_runs"), None).unwrap();
//!
//! let gatherer = Gatherer::new(
//!     &samples.base_dir,
//!     GatherConfig::new(SequenceKind::Nucleotide, "fasta"),
//! );
//! let summary = gatherer.run(&genes, &samples.names, |_| {}).unwrap();
//! println!("{} sequences gathered", summary.total_found());
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Sequence kinds, gene names, and the per-sample path layout
//! - [`parsing`]: Target file, sample file and sample list readers
//! - [`gather`]: Per-gene aggregation engine and run reports
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod gather;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::layout::HybPiperLayout;
pub use crate::core::types::{KindLayout, SequenceKind};
pub use crate::gather::{GatherConfig, GatherError, Gatherer, GeneReport, ReadErrorPolicy, RunSummary};
