use crate::cli::{OutputFormat, RetrieveArgs};
use crate::core::types::SequenceKind;
use crate::gather::{GatherConfig, Gatherer, GeneReport, ReadErrorPolicy, RunSummary};
use crate::parsing::fasta::read_target_genes;
use crate::parsing::samples::SampleSet;

pub fn run(args: RetrieveArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let kind = SequenceKind::from(args.sequence_type);

    let target = read_target_genes(&args.targetfile)?;
    let genes: Vec<String> = target.genes.into_iter().collect();

    let samples = SampleSet::resolve(&args.sample_names, args.hybpiper_dir.as_deref())?;

    if verbose {
        eprintln!(
            "Target file: {} records, {} genes",
            target.record_count,
            genes.len()
        );
        eprintln!(
            "Samples: {} (runs under {})",
            samples.len(),
            samples.base_dir.display()
        );
    }

    let policy = if args.skip_unreadable {
        ReadErrorPolicy::Skip
    } else {
        ReadErrorPolicy::Abort
    };
    let config = GatherConfig::new(kind, &args.fasta_dir).with_read_error_policy(policy);
    let gatherer = Gatherer::new(&samples.base_dir, config);

    let streaming = matches!(format, OutputFormat::Text);
    if streaming {
        println!(
            "Retrieving {} genes from {} samples",
            genes.len(),
            samples.len()
        );
    }

    let summary = gatherer.run(&genes, &samples.names, |report| {
        if streaming {
            print_text_gene(report);
        }
    })?;

    match format {
        OutputFormat::Text => print_text_summary(&summary),
        OutputFormat::Json => print_json_summary(&summary)?,
        OutputFormat::Tsv => print_tsv_summary(&summary),
    }

    Ok(())
}

fn print_text_gene(report: &GeneReport) {
    println!("Found {} sequences for {}.", report.found, report.gene);
}

fn print_text_summary(summary: &RunSummary) {
    let failed = summary.total_failed();
    if failed > 0 {
        println!("Skipped {failed} unreadable sample files.");
    }
}

fn print_json_summary(summary: &RunSummary) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "sequence_type": summary.sequence_type,
        "samples": summary.samples,
        "genes": summary.genes,
        "total_found": summary.total_found(),
        "total_failed": summary.total_failed(),
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_summary(summary: &RunSummary) {
    println!("gene\toutput\tfound\tmissing\tfailed");
    for gene in &summary.genes {
        println!(
            "{}\t{}\t{}\t{}\t{}",
            gene.gene,
            gene.output.display(),
            gene.found,
            gene.missing,
            gene.failed
        );
    }
}
