//! Readers for the run's inputs.
//!
//! - **Target file**: reference FASTA whose record names encode gene identifiers
//! - **Sample sequence files**: one-record FASTA files written per sample and gene
//!   by the upstream pipeline
//! - **Sample lists**: a directory of per-sample run directories, or a text file
//!   with one sample name per line
//!
//! FASTA parsing uses `noodles`; gzip/bgzip input is decompressed with `flate2`.

use std::path::PathBuf;

use thiserror::Error;

pub mod fasta;
pub mod samples;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid FASTA in {}: {message}", .path.display())]
    Noodles { path: PathBuf, message: String },

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("No FASTA record found in {}", .0.display())]
    EmptyFile(PathBuf),
}
