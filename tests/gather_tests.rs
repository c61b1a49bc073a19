//! Library-level scenarios: target parsing, sample enumeration and gathering
//! wired together the way the binary does it.

use std::fs;
use std::path::Path;

use retrieve_sequences::parsing::fasta::read_target_genes;
use retrieve_sequences::parsing::samples::SampleSet;
use retrieve_sequences::{GatherConfig, GatherError, Gatherer, HybPiperLayout, SequenceKind};
use tempfile::TempDir;

fn put(layout: &HybPiperLayout, sample: &str, gene: &str, content: &str) {
    let path = layout.sequence_path(sample, gene);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn gather_all(
    target: &Path,
    sample_names: &Path,
    kind: SequenceKind,
    out: &Path,
) -> Result<retrieve_sequences::RunSummary, GatherError> {
    let genes: Vec<String> = read_target_genes(target).unwrap().genes.into_iter().collect();
    let samples = SampleSet::resolve(sample_names, None).unwrap();
    Gatherer::new(&samples.base_dir, GatherConfig::new(kind, out)).run(
        &genes,
        &samples.names,
        |_| {},
    )
}

#[test]
fn test_one_output_per_unique_gene() {
    let root = TempDir::new().unwrap();
    let target = root.path().join("targets.fasta");
    fs::write(
        &target,
        ">Artocarpus-g1\nAC\n>Morus-g1\nAC\n>Ficus-g2\nAC\n>Ficus-carica-g3\nAC\n>Morus-g2\nAC\n",
    )
    .unwrap();
    let runs = root.path().join("runs");
    fs::create_dir_all(runs.join("s1")).unwrap();
    let out = root.path().join("out");

    let summary = gather_all(&target, &runs, SequenceKind::Protein, &out).unwrap();

    let mut written: Vec<String> = fs::read_dir(&out)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    written.sort();

    assert_eq!(written, vec!["g1.FAA", "g2.FAA", "g3.FAA"]);
    assert_eq!(summary.genes.len(), 3);
}

#[test]
fn test_records_copied_verbatim_in_sample_order() {
    let root = TempDir::new().unwrap();
    let target = root.path().join("targets.fasta");
    fs::write(&target, ">sp-gene7\nACGT\n").unwrap();

    let runs = root.path().join("runs");
    let layout = HybPiperLayout::new(&runs, SequenceKind::Nucleotide);
    put(&layout, "zeta", "gene7", ">zeta-gene7 single_hit\nAAAA\n");
    put(&layout, "alpha", "gene7", ">alpha-gene7 multi_hit_stitched_contig_comprising_2_hits\nCCCC\n");
    fs::create_dir_all(runs.join("mid")).unwrap();
    // Not samples: hidden directory and a plain file
    put(&HybPiperLayout::new(runs.join(".hidden"), SequenceKind::Nucleotide), "x", "gene7", ">x\nG\n");
    fs::write(runs.join("notes.txt"), "not a sample").unwrap();

    let out = root.path().join("out");
    let summary = gather_all(&target, &runs, SequenceKind::Nucleotide, &out).unwrap();

    assert_eq!(summary.samples, 3);
    assert_eq!(summary.genes[0].found, 2);
    assert_eq!(summary.genes[0].missing, 1);
    assert_eq!(
        fs::read_to_string(out.join("gene7.FNA")).unwrap(),
        ">alpha-gene7 multi_hit_stitched_contig_comprising_2_hits\nCCCC\n>zeta-gene7 single_hit\nAAAA\n"
    );
}

#[test]
fn test_only_first_record_is_taken() {
    let root = TempDir::new().unwrap();
    let target = root.path().join("targets.fasta");
    fs::write(&target, ">sp-g1\nACGT\n").unwrap();

    let runs = root.path().join("runs");
    let layout = HybPiperLayout::new(&runs, SequenceKind::Supercontig);
    put(&layout, "s1", "g1", ">s1-g1\nACGT\n>s1-g1-extra\nTTTT\n");

    let out = root.path().join("out");
    gather_all(&target, &runs, SequenceKind::Supercontig, &out).unwrap();

    assert_eq!(
        fs::read_to_string(out.join("g1_supercontig.fasta")).unwrap(),
        ">s1-g1\nACGT\n"
    );
}

#[test]
fn test_abort_leaves_earlier_genes_written() {
    let root = TempDir::new().unwrap();
    let target = root.path().join("targets.fasta");
    fs::write(&target, ">sp-a\nAC\n>sp-b\nAC\n").unwrap();

    let runs = root.path().join("runs");
    let layout = HybPiperLayout::new(&runs, SequenceKind::Nucleotide);
    put(&layout, "s1", "a", ">s1-a\nACGT\n");
    put(&layout, "s1", "b", "garbage without header\n");

    let out = root.path().join("out");
    let err = gather_all(&target, &runs, SequenceKind::Nucleotide, &out).unwrap_err();

    assert!(matches!(err, GatherError::Read { ref gene, .. } if gene == "b"));
    assert_eq!(
        fs::read_to_string(out.join("a.FNA")).unwrap(),
        ">s1-a\nACGT\n"
    );
}
