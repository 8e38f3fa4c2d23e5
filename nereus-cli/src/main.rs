//! `nereus` — pairwise sequence alignment at the command line.
//!
//! Reads two sequences from one or two FASTA files, aligns them with the
//! engine selected by the flags, and prints the aligned pair plus the score.
//!
//! ```bash
//! # Global DNA alignment with free end gaps (default policy)
//! nereus --mode dna pair.fa
//!
//! # Affine gaps: supplying --gap-extend selects the Gotoh engine
//! nereus --mode dna --gap-open -10 --gap-extend -1 --spen --epen a.fa b.fa
//!
//! # Long sequences: linear-space engine
//! nereus --mode dna --mem-save a.fa b.fa
//! ```

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};

use nereus_align::{
    GapPolicy, Gotoh, Hirschberg, NeedlemanWunsch, PairwiseAligner, ScoringScheme,
};
use nereus_core::Result;

mod output;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// ATGC alphabet, +5 match / -4 mismatch
    Dna,
    /// 20 standard amino acids, BLOSUM62
    Protein,
    /// Any symbol except `-`, +1 match / -1 mismatch
    Default,
}

#[derive(Parser)]
#[command(name = "nereus")]
#[command(about = "Optimal pairwise sequence alignment", long_about = None)]
#[command(version)]
struct Cli {
    /// One FASTA file with two sequences, or two FASTA files with one each
    #[arg(value_name = "FILE", required = true, num_args = 1..=2)]
    files: Vec<PathBuf>,

    /// Gap penalty (open penalty in affine mode)
    #[arg(long = "gap-open", visible_alias = "gap", default_value_t = -2, allow_hyphen_values = true)]
    gap_open: i32,

    /// Gap extension penalty; supplying this selects the affine engine
    #[arg(long = "gap-extend", allow_hyphen_values = true)]
    gap_extend: Option<i32>,

    /// Alphabet and score table
    #[arg(long, value_enum, default_value_t = Mode::Default)]
    mode: Mode,

    /// Charge gaps at sequence starts
    #[arg(long = "spen")]
    start_penalty: bool,

    /// Charge gaps at sequence ends
    #[arg(long = "epen")]
    end_penalty: bool,

    /// Local alignment (best-scoring region instead of end-to-end)
    #[arg(long)]
    local: bool,

    /// Linear-space engine (for long sequences; global, simple gaps only)
    #[arg(long = "mem-save")]
    mem_save: bool,

    /// Colorless pretty output with a match/mismatch marker line
    #[arg(long)]
    pretty: bool,

    /// Line length for the default output mode
    #[arg(long, default_value_t = 100)]
    line: usize,

    /// Output file (default: stdout)
    #[arg(long, value_name = "FILE")]
    out: Option<PathBuf>,
}

fn build_scheme(mode: Mode) -> ScoringScheme {
    match mode {
        Mode::Dna => ScoringScheme::dna(),
        Mode::Protein => ScoringScheme::blosum62(),
        Mode::Default => ScoringScheme::uniform(),
    }
}

fn build_aligner(cli: &Cli, scheme: ScoringScheme, policy: GapPolicy) -> Box<dyn PairwiseAligner> {
    if cli.mem_save {
        if cli.local {
            log::warn!("--local is not supported by --mem-save; running global");
        }
        if cli.gap_extend.is_some() {
            log::warn!("--gap-extend is not supported by --mem-save; using --gap-open only");
        }
        return Box::new(Hirschberg::new(scheme, policy));
    }
    if let Some(extend) = cli.gap_extend {
        if cli.local {
            log::warn!("--local is not supported with --gap-extend; running global");
        }
        return Box::new(Gotoh::new(scheme, policy, extend));
    }
    if cli.local {
        Box::new(NeedlemanWunsch::local(scheme, policy))
    } else {
        Box::new(NeedlemanWunsch::new(scheme, policy))
    }
}

fn run(cli: &Cli) -> Result<()> {
    let (query, target) = nereus_seq::load_pair(&cli.files)?;
    log::info!(
        "aligning {:?} ({} bp) against {:?} ({} bp)",
        query.description,
        query.sequence.len(),
        target.description,
        target.sequence.len()
    );

    let scheme = build_scheme(cli.mode);
    let policy = GapPolicy::new(cli.gap_open, cli.start_penalty, cli.end_penalty);
    let mut aligner = build_aligner(cli, scheme, policy);
    let alignment = aligner.align(&query.sequence, &target.sequence)?;

    let mut pretty = cli.pretty;
    let mut out: Box<dyn Write> = match &cli.out {
        Some(path) => {
            if pretty {
                log::warn!("--pretty is stdout-only; falling back to default output");
                pretty = false;
            }
            Box::new(File::create(path)?)
        }
        None => Box::new(io::stdout().lock()),
    };

    if pretty {
        output::write_pretty(&mut out, &alignment.aligned_query, &alignment.aligned_target)?;
    } else {
        output::write_default(
            &mut out,
            cli.line,
            &alignment.aligned_query,
            &alignment.aligned_target,
        )?;
    }
    writeln!(out, "Score: {}", alignment.score)?;

    Ok(())
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        log::error!("{e}");
        process::exit(1);
    }
}
