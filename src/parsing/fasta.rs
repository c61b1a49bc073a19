//! FASTA input using noodles.
//!
//! Supported compression, detected by extension:
//! - uncompressed (`.fa`, `.fasta`, `.fna`, `.FNA`, `.FAA`, ...)
//! - gzip or bgzip (`.gz`, `.bgz`)

use std::collections::{BTreeSet, HashSet};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use noodles::fasta;
use tracing::{debug, warn};

use crate::core::gene::gene_id;
use crate::parsing::ParseError;

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Open a FASTA reader over a plain or gzip-compressed file.
///
/// # Errors
///
/// Returns the underlying `io::Error` if the file cannot be opened, so callers
/// can inspect its kind.
pub fn open_reader(path: &Path) -> io::Result<fasta::io::Reader<Box<dyn BufRead>>> {
    let file = File::open(path)?;

    let inner: Box<dyn BufRead> = if is_gzipped(path) {
        Box::new(BufReader::new(MultiGzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };

    Ok(fasta::io::Reader::new(inner))
}

/// Gene identifiers found in a target file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetGenes {
    /// Unique gene identifiers, sorted
    pub genes: BTreeSet<String>,
    /// Number of records read from the target file
    pub record_count: usize,
}

impl TargetGenes {
    #[must_use]
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }
}

/// Read a target FASTA file and collect its unique gene identifiers.
///
/// Each record name contributes the segment after its last `-`. Several
/// records (one per taxon) usually share a gene.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be opened, `ParseError::Noodles`
/// if a record fails to parse, or `ParseError::InvalidFormat` if the file holds
/// no records.
pub fn read_target_genes(path: &Path) -> Result<TargetGenes, ParseError> {
    let mut reader = open_reader(path)?;
    let target = collect_target_genes(&mut reader, path)?;

    debug!(
        "Read {} target records covering {} genes from {}",
        target.record_count,
        target.len(),
        path.display()
    );

    Ok(target)
}

fn collect_target_genes<R: BufRead>(
    reader: &mut fasta::io::Reader<R>,
    path: &Path,
) -> Result<TargetGenes, ParseError> {
    let mut target = TargetGenes::default();
    let mut seen_names = HashSet::new();

    for result in reader.records() {
        let record = result.map_err(|e| ParseError::Noodles {
            path: path.to_path_buf(),
            message: format!("Failed to parse FASTA record: {e}"),
        })?;
        target.record_count += 1;

        let name = String::from_utf8_lossy(record.name()).to_string();
        let gene = gene_id(&name);

        if gene.is_empty() {
            warn!("Target record '{name}' has no gene name after its last separator; skipping");
        } else {
            target.genes.insert(gene.to_string());
        }

        if !seen_names.insert(name.clone()) {
            warn!("Duplicate target record name '{name}' in {}", path.display());
        }
    }

    if target.record_count == 0 {
        return Err(ParseError::InvalidFormat(format!(
            "No sequences found in target file {}",
            path.display()
        )));
    }

    Ok(target)
}

/// Read the first record of a sample's sequence file.
///
/// Returns `Ok(None)` if the file does not exist; the upstream pipeline simply
/// leaves no file for genes it could not recover.
///
/// # Errors
///
/// Returns `ParseError::Io` for any other open failure (e.g. permissions),
/// `ParseError::Noodles` if the first record is malformed, or
/// `ParseError::EmptyFile` if the file holds no record.
pub fn read_first_record(path: &Path) -> Result<Option<fasta::Record>, ParseError> {
    let mut reader = match open_reader(path) {
        Ok(reader) => reader,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    match reader.records().next() {
        Some(Ok(record)) => Ok(Some(record)),
        Some(Err(e)) => Err(ParseError::Noodles {
            path: path.to_path_buf(),
            message: format!("Failed to parse FASTA record: {e}"),
        }),
        None => Err(ParseError::EmptyFile(path.to_path_buf())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn fasta_file(suffix: &str, content: &[u8]) -> NamedTempFile {
        let mut temp = NamedTempFile::with_suffix(suffix).unwrap();
        temp.write_all(content).unwrap();
        temp.flush().unwrap();
        temp
    }

    #[test]
    fn test_read_target_genes() {
        let temp = fasta_file(
            ".fasta",
            b">Artocarpus-gene001\nACGT\n>Morus-gene001\nACGA\n>Ficus-gene002 desc\nGG\n",
        );

        let target = read_target_genes(temp.path()).unwrap();
        assert_eq!(target.record_count, 3);
        assert_eq!(
            target.genes.into_iter().collect::<Vec<_>>(),
            vec!["gene001", "gene002"]
        );
    }

    #[test]
    fn test_read_target_genes_gzipped() {
        use flate2::write::GzEncoder;
        use flate2::Compression;

        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b">sp1-geneA\nACGT\n>sp1-geneB\nTTTT\n").unwrap();
        let compressed = encoder.finish().unwrap();
        let temp = fasta_file(".fasta.gz", &compressed);

        let target = read_target_genes(temp.path()).unwrap();
        assert_eq!(target.len(), 2);
        assert!(target.genes.contains("geneA"));
        assert!(target.genes.contains("geneB"));
    }

    #[test]
    fn test_read_target_genes_skips_empty_gene() {
        let temp = fasta_file(".fa", b">taxon-\nACGT\n>taxon-gene9\nACGT\n");

        let target = read_target_genes(temp.path()).unwrap();
        assert_eq!(target.record_count, 2);
        assert_eq!(target.len(), 1);
    }

    #[test]
    fn test_read_target_genes_empty_file() {
        let temp = fasta_file(".fa", b"");
        assert!(matches!(
            read_target_genes(temp.path()),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_read_target_genes_missing_file() {
        let result = read_target_genes(Path::new("/nonexistent/targets.fasta"));
        assert!(matches!(result, Err(ParseError::Io(_))));
    }

    #[test]
    fn test_read_first_record() {
        let temp = fasta_file(
            ".FNA",
            b">sampleX-geneA multi_hit_stitched_contig\nACGTAC\nGTAA\n>second\nTT\n",
        );

        let record = read_first_record(temp.path()).unwrap().unwrap();
        assert_eq!(String::from_utf8_lossy(record.name()), "sampleX-geneA");
        assert_eq!(
            record
                .description()
                .map(|d| String::from_utf8_lossy(d).to_string()),
            Some("multi_hit_stitched_contig".to_string())
        );
        let sequence: &[u8] = record.sequence().as_ref();
        assert_eq!(sequence, b"ACGTACGTAA");
    }

    #[test]
    fn test_read_first_record_missing_file() {
        let result = read_first_record(Path::new("/nonexistent/geneA.FNA")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_read_first_record_empty_file() {
        let temp = fasta_file(".FNA", b"");
        assert!(matches!(
            read_first_record(temp.path()),
            Err(ParseError::EmptyFile(_))
        ));
    }

    #[test]
    fn test_read_first_record_malformed() {
        let temp = fasta_file(".FNA", b"ACGT\nnot a header\n");
        assert!(matches!(
            read_first_record(temp.path()),
            Err(ParseError::Noodles { .. })
        ));
    }
}
