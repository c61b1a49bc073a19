//! Per-gene aggregation of sample sequences.
//!
//! For each gene, [`Gatherer`] opens one output file, walks the samples in
//! enumeration order, and copies the first record of each sample's expected
//! file into it. Samples without a file are counted as missing and skipped.
//! Other read failures either abort the run or are counted and skipped,
//! depending on [`ReadErrorPolicy`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use retrieve_sequences::gather::{GatherConfig, Gatherer};
//! use retrieve_sequences::SequenceKind;
//!
//! let config = GatherConfig::new(SequenceKind::Nucleotide, "fasta");
//! let gatherer = Gatherer::new("hybpiper_runs", config);
//! let samples = vec!["sampleX".to_string(), "sampleY".to_string()];
//!
//! let summary = gatherer
//!     .run(&["geneA", "geneB"], &samples, |report| {
//!         println!("Found {} sequences for {}.", report.found, report.gene);
//!     })
//!     .unwrap();
//! assert_eq!(summary.genes.len(), 2);
//! ```

pub mod engine;
pub mod report;

pub use engine::{GatherConfig, GatherError, Gatherer, ReadErrorPolicy};
pub use report::{GeneReport, RunSummary};
