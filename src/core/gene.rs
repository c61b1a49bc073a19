/// Separator between the taxon prefix and the gene name in target record names
/// (e.g. `Artocarpus-gene001`).
pub const GENE_SEPARATOR: char = '-';

/// Derive the gene identifier from a target record name.
///
/// The gene is the segment after the last [`GENE_SEPARATOR`]; a name without a
/// separator is a gene name on its own.
///
/// # Examples
///
/// ```
/// use retrieve_sequences::core::gene::gene_id;
///
/// assert_eq!(gene_id("Artocarpus-gene001"), "gene001");
/// assert_eq!(gene_id("a-b-gene002"), "gene002");
/// assert_eq!(gene_id("gene003"), "gene003");
/// ```
#[must_use]
pub fn gene_id(record_name: &str) -> &str {
    record_name
        .rsplit_once(GENE_SEPARATOR)
        .map_or(record_name, |(_, gene)| gene)
}
