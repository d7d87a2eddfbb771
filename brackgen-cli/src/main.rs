use anyhow::{Context, Result};
use brackgen::{Alphabet, BracketGenerator, Corpus, GeneratorConfig, Mode};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

#[derive(Parser)]
#[command(name = "brackgen")]
#[command(about = "Generate labeled bracket strings for scoring bracket checkers", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    /// Stop once the string is at least --min-length long
    Length,
    /// Stop once nesting depth has reached --min-imbrication
    Imbrication,
}

impl From<ModeArg> for Mode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Length => Mode::Length,
            ModeArg::Imbrication => Mode::Imbrication,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate bracket strings with explicit parameters
    Gen {
        /// Threshold policy driving termination
        #[arg(short, long, value_enum, default_value = "length")]
        mode: ModeArg,

        /// Minimum emitted length (length mode)
        #[arg(long, default_value_t = 10)]
        min_length: i32,

        /// Minimum nesting depth (imbrication mode)
        #[arg(long, default_value_t = 3)]
        min_imbrication: i32,

        /// Generate unbalanced strings instead of balanced ones
        #[arg(long)]
        bad: bool,

        /// Draw from round, square and curly brackets
        #[arg(long)]
        multi: bool,

        /// Seed for reproducible output; line i uses seed + i
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of strings to generate
        #[arg(short, long, default_value_t = 1)]
        count: usize,

        /// Prefix each line with its expected label
        #[arg(short, long)]
        label: bool,
    },
    /// Build a labeled corpus and print label<TAB>string lines
    Corpus {
        /// Rounds of generation; each round yields one good and one bad case per mode
        #[arg(short, long, default_value_t = 5)]
        rounds: usize,

        /// Fixed minimum length (ignored with --random)
        #[arg(long, default_value_t = 10)]
        min_length: i32,

        /// Fixed minimum nesting depth (ignored with --random)
        #[arg(long, default_value_t = 3)]
        min_imbrication: i32,

        /// Draw each case's threshold from MIN..MAX instead of fixed values
        #[arg(long, num_args = 2, value_names = ["MIN", "MAX"])]
        random: Option<Vec<i32>>,

        /// Draw from round, square and curly brackets
        #[arg(long)]
        multi: bool,

        /// Seed reproducing the whole corpus
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Gen {
            mode,
            min_length,
            min_imbrication,
            bad,
            multi,
            seed,
            count,
            label,
        } => run_gen(
            mode.into(),
            min_length,
            min_imbrication,
            bad,
            alphabet(multi),
            seed,
            count,
            label,
        ),
        Commands::Corpus {
            rounds,
            min_length,
            min_imbrication,
            random,
            multi,
            seed,
        } => run_corpus(
            rounds,
            min_length,
            min_imbrication,
            random,
            alphabet(multi),
            seed,
        ),
    }
}

fn alphabet(multi: bool) -> Alphabet {
    if multi {
        Alphabet::MultiType
    } else {
        Alphabet::Simple
    }
}

#[allow(clippy::too_many_arguments)]
fn run_gen(
    mode: Mode,
    min_length: i32,
    min_imbrication: i32,
    bad: bool,
    alphabet: Alphabet,
    seed: Option<u64>,
    count: usize,
    label: bool,
) -> Result<()> {
    let mut generator = BracketGenerator::new(GeneratorConfig::new(min_length, min_imbrication));

    for i in 0..count {
        generator.set_seed(seed.map(|s| s.wrapping_add(i as u64)));
        let out = generator
            .generate(mode, alphabet, !bad)
            .context("Failed to generate bracket string")?;
        if label {
            println!("{}\t{}", label_for(!bad), out);
        } else {
            println!("{}", out);
        }
    }

    Ok(())
}

fn run_corpus(
    rounds: usize,
    min_length: i32,
    min_imbrication: i32,
    random: Option<Vec<i32>>,
    alphabet: Alphabet,
    seed: Option<u64>,
) -> Result<()> {
    let corpus = match random {
        Some(range) => Corpus::randomized(rounds, range[0]..range[1], alphabet, seed)
            .context("Failed to build randomized corpus")?,
        None => Corpus::with_thresholds(rounds, min_length, min_imbrication, alphabet, seed)
            .context("Failed to build corpus")?,
    };

    for case in corpus.iter() {
        println!("{}\t{}", label_for(case.expect_valid), case.input);
    }

    let valid = corpus.iter().filter(|c| c.expect_valid).count();
    let invalid = corpus.len() - valid;
    eprintln!(
        "{}",
        format!(
            "{} cases ({} valid, {} invalid)",
            corpus.len(),
            valid,
            invalid
        )
        .bright_black()
    );

    Ok(())
}

fn label_for(expect_valid: bool) -> &'static str {
    if expect_valid { "valid" } else { "invalid" }
}
