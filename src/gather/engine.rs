use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use noodles::fasta;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::core::layout::HybPiperLayout;
use crate::core::types::SequenceKind;
use crate::gather::report::{GeneReport, RunSummary};
use crate::parsing::fasta::read_first_record;
use crate::parsing::ParseError;
use crate::utils::validation::{validate_identifier, ValidationError};

#[derive(Error, Debug)]
pub enum GatherError {
    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {gene} sequence for sample {sample} from {}: {source}", .path.display())]
    Read {
        sample: String,
        gene: String,
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// What to do when a sample's file exists but cannot be read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadErrorPolicy {
    /// Stop the run with [`GatherError::Read`]
    #[default]
    Abort,
    /// Log a warning, count the sample as failed, and continue
    Skip,
}

/// Configuration for a gathering run
#[derive(Debug, Clone)]
pub struct GatherConfig {
    pub kind: SequenceKind,
    /// Directory receiving one FASTA file per gene
    pub output_dir: PathBuf,
    pub read_error_policy: ReadErrorPolicy,
}

impl GatherConfig {
    pub fn new(kind: SequenceKind, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            output_dir: output_dir.into(),
            read_error_policy: ReadErrorPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_read_error_policy(mut self, policy: ReadErrorPolicy) -> Self {
        self.read_error_policy = policy;
        self
    }

    /// Path of the per-gene output file
    #[must_use]
    pub fn output_path(&self, gene: &str) -> PathBuf {
        self.output_dir.join(self.kind.file_name(gene))
    }
}

/// Copies each sample's record for a gene into one multi-sample FASTA file per gene.
pub struct Gatherer {
    layout: HybPiperLayout,
    config: GatherConfig,
}

impl Gatherer {
    /// Create a gatherer reading sample runs under `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>, config: GatherConfig) -> Self {
        let layout = HybPiperLayout::new(base_dir, config.kind);
        Self { layout, config }
    }

    #[must_use]
    pub fn config(&self) -> &GatherConfig {
        &self.config
    }

    #[must_use]
    pub fn layout(&self) -> &HybPiperLayout {
        &self.layout
    }

    /// Gather every gene across every sample.
    ///
    /// Genes are processed one at a time; each output file is complete and
    /// closed before the next gene starts. `on_gene` is called after each gene.
    ///
    /// # Errors
    ///
    /// Returns `GatherError::Validation` before writing anything if a gene or
    /// sample name is not a valid path component, `GatherError::Io` if the
    /// output directory or a gene's file cannot be written, and
    /// `GatherError::Read` on an unreadable sample file under
    /// [`ReadErrorPolicy::Abort`].
    pub fn run<G, F>(
        &self,
        genes: &[G],
        samples: &[String],
        mut on_gene: F,
    ) -> Result<RunSummary, GatherError>
    where
        G: AsRef<str>,
        F: FnMut(&GeneReport),
    {
        for gene in genes {
            validate_identifier("gene", gene.as_ref())?;
        }
        validate_samples(samples)?;

        self.prepare_output_dir()?;

        info!(
            "Gathering {} {} sequences from {} samples into {}",
            genes.len(),
            self.config.kind,
            samples.len(),
            self.config.output_dir.display()
        );

        let mut reports = Vec::with_capacity(genes.len());
        for gene in genes {
            let report = self.gather_validated(gene.as_ref(), samples)?;
            on_gene(&report);
            reports.push(report);
        }

        Ok(RunSummary {
            sequence_type: self.config.kind,
            samples: samples.len(),
            genes: reports,
        })
    }

    /// Gather a single gene across `samples` into its output file.
    ///
    /// # Errors
    ///
    /// Same as [`Gatherer::run`], for one gene.
    pub fn gather_gene(&self, gene: &str, samples: &[String]) -> Result<GeneReport, GatherError> {
        validate_identifier("gene", gene)?;
        validate_samples(samples)?;
        self.prepare_output_dir()?;

        self.gather_validated(gene, samples)
    }

    fn prepare_output_dir(&self) -> Result<(), GatherError> {
        let dir = &self.config.output_dir;
        std::fs::create_dir_all(dir).map_err(|source| GatherError::Io {
            path: dir.clone(),
            source,
        })
    }

    fn gather_validated(&self, gene: &str, samples: &[String]) -> Result<GeneReport, GatherError> {
        let output = self.config.output_path(gene);
        let mut report = GeneReport::new(gene, &output);

        let file = File::create(&output).map_err(|source| write_error(&output, source))?;
        let mut out = BufWriter::new(file);

        {
            let mut writer = fasta::io::Writer::new(&mut out);

            for sample in samples {
                let path = self.layout.sequence_path(sample, gene);

                match read_first_record(&path) {
                    Ok(Some(record)) => {
                        writer
                            .write_record(&record)
                            .map_err(|source| write_error(&output, source))?;
                        report.found += 1;
                    }
                    Ok(None) => {
                        debug!("No {gene} file for sample {sample} at {}", path.display());
                        report.missing += 1;
                    }
                    Err(source) => match self.config.read_error_policy {
                        ReadErrorPolicy::Abort => {
                            return Err(GatherError::Read {
                                sample: sample.clone(),
                                gene: gene.to_string(),
                                path,
                                source,
                            });
                        }
                        ReadErrorPolicy::Skip => {
                            warn!("Skipping {gene} for sample {sample}: {source}");
                            report.failed += 1;
                        }
                    },
                }
            }
        }

        out.flush().map_err(|source| write_error(&output, source))?;

        debug!(
            "{gene}: {} found, {} missing, {} failed",
            report.found, report.missing, report.failed
        );

        Ok(report)
    }
}

fn validate_samples(samples: &[String]) -> Result<(), ValidationError> {
    samples
        .iter()
        .try_for_each(|sample| validate_identifier("sample", sample))
}

fn write_error(path: &Path, source: std::io::Error) -> GatherError {
    GatherError::Io {
        path: path.to_path_buf(),
        source,
    }
}
