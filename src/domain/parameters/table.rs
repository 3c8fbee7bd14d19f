//! Declared parameters, in the order their flags are emitted.

use super::Literal;
use super::ParameterDescriptor as P;
use super::ParameterKind::{Bool, Dir, File, Int, Str};

/// Name of the parameter whose value receives the run-specific subpath.
pub const OUTDIR_PARAMETER: &str = "outdir";

pub static PARAMETERS: &[P] = &[
    P::optional("skip_qc", Bool, "Skip QC steps")
        .in_section("Skip steps"),
    P::optional("skip_vis", Bool, "Skip visualisation steps"),
    P::optional(
        "input",
        File,
        "Path to comma-separated file containing information about the samples in the experiment.",
    )
    .in_section("Input/output options"),
    P::optional(
        "outdir",
        Dir,
        "The output directory where the results will be saved. You have to use absolute paths to storage on Cloud infrastructure.",
    )
    .required()
    .output_dir(),
    P::optional("email", Str, "Email address for completion summary."),
    P::optional(
        "multiqc_title",
        Str,
        "MultiQC report title. Printed as page header, used for filename if not otherwise specified.",
    ),
    P::optional(
        "build_references",
        Bool,
        "Specifies which analysis type for the pipeline - either build references or analyse data",
    ),
    P::optional("cosmic_username", Str, "COSMIC username"),
    P::optional("cosmic_passwd", Str, "COSMIC password"),
    P::optional("genomes_base", Str, "Path to reference folder")
        .required(),
    P::optional("ensembl_version", Int, "ensembl version")
        .with_default(Literal::Int(102)),
    P::optional(
        "starfusion_build",
        Bool,
        "If set, starfusion references are built from scratch instead of downloaded (default)",
    ),
    P::optional("read_length", Int, "Read length")
        .with_default(Literal::Int(100)),
    P::optional("all", Bool, "Build or run all references/analyses"),
    P::optional("arriba", Bool, "Build or run arriba references/analyses"),
    P::optional("arriba_ref", Str, "Path to arriba references"),
    P::optional("arriba_ref_blacklist", Str, "Path to arriba reference blacklist"),
    P::optional("arriba_ref_cytobands", Str, "Path to arriba reference cytobands"),
    P::optional("arriba_ref_known_fusions", Str, "Path to arriba reference known fusions"),
    P::optional("arriba_ref_protein_domains", Str, "Path to arriba reference protein domain"),
    P::optional("arriba_fusions", Str, "Path to arriba output"),
    P::optional("ensembl_ref", Str, "Path to ensembl references"),
    P::optional("fusioncatcher", Bool, "Build or run fusioncatcher references/analyses"),
    P::optional("fusioncatcher_fusions", Str, "Path to fusioncatcher output"),
    P::optional(
        "fusioncatcher_limitSjdbInsertNsj",
        Int,
        "Use limitSjdbInsertNsj with int for fusioncatcher",
    ),
    P::optional("fusioncatcher_ref", Str, "Path to fusioncatcher references"),
    P::optional(
        "fusioninspector_limitSjdbInsertNsj",
        Int,
        "Use limitSjdbInsertNsj with int for fusioninspector STAR process",
    ),
    P::optional(
        "fusioninspector_only",
        Bool,
        "Skip fusion-report. --fusioninspector_fusions PATH needed to provide a fusion list as input",
    ),
    P::optional(
        "fusioninspector_fusions",
        Str,
        "Path to a fusion list file built with format GENE1--GENE2",
    ),
    P::optional("fusionreport", Bool, "Build fusionreport references"),
    P::optional("fusionreport_ref", Str, "Path to fusionreport references"),
    P::optional("hgnc_ref", Str, "Path to HGNC database file"),
    P::optional("hgnc_date", Str, "Path to HGNC timestamp file for database retrieval"),
    P::optional("qiagen", Bool, "Use QIAGEN instead of SANGER to download COSMIC database"),
    P::optional("starfusion", Bool, "Build or run starfusion references/analyses"),
    P::optional("starfusion_fusions", Str, "Path to starfusion output"),
    P::optional("starfusion_ref", Str, "Path to starfusion references"),
    P::optional("starindex", Bool, "Build or run starindex references/analyses"),
    P::optional("starindex_ref", Str, "Path to starindex references"),
    P::optional("stringtie", Bool, "Run stringtie analysis"),
    P::optional("tools_cutoff", Int, "Discard fusions identified by less than INT tools"),
    P::optional("whitelist", Str, "Path to fusions to add to the input of fusioninspector"),
    P::optional("fastp_trim", Bool, "Preform fastp trimming of reads, default: false")
        .in_section("Read trimming options"),
    P::optional("trim_tail", Int, "Preform tail trimming of reads, default: null"),
    P::optional("adapter_fasta", Str, "Path to adapter fasta file: default: []"),
    P::optional(
        "cram",
        Str,
        "List of tools for which to compress BAM file to CRAM,default: [], options: arriba, starfusion. Leave no space between options",
    )
    .in_section("Alignment compression options"),
    P::optional("genome", Str, "Name of iGenomes reference.")
        .in_section("Reference genome options"),
    P::optional("fasta", File, "Path to FASTA genome file."),
    P::optional("fai", File, "Path to FASTA genome index file."),
    P::optional("gtf", File, "Path to GTF genome file."),
    P::optional("chrgtf", File, "Path to GTF genome file."),
    P::optional("transcript", File, "Path to GTF genome file."),
    P::optional("refflat", File, "Path to GTF genome file."),
    P::optional("rrna_intervals", File, "Path to ribosomal interval list."),
    P::optional(
        "multiqc_methods_description",
        Str,
        "Custom MultiQC yaml file containing HTML including a methods description.",
    )
    .in_section("Generic options"),
];
