//! Core domain types for gathering per-sample gene sequences.
//!
//! - [`SequenceKind`]: which upstream output is gathered (protein, nucleotide,
//!   intron, supercontig) and the [`KindLayout`] convention it implies
//! - [`gene`]: deriving gene identifiers from target record names
//! - [`HybPiperLayout`]: resolving a sample's per-gene file path
//!
//! ## Directory convention
//!
//! | Kind        | Subdirectory | Filename                 |
//! |-------------|--------------|--------------------------|
//! | protein     | `FAA`        | `<gene>.FAA`             |
//! | nucleotide  | `FNA`        | `<gene>.FNA`             |
//! | intron      | `intron`     | `<gene>_introns.fasta`   |
//! | supercontig | `intron`     | `<gene>_supercontig.fasta` |

pub mod gene;
pub mod layout;
pub mod types;

pub use layout::HybPiperLayout;
pub use types::{KindLayout, SequenceKind};
