//! Word Stack - CLI
//!
//! Two-word letter stack puzzle with TUI and line-based play modes.

use anyhow::{Context, Result, ensure};
use clap::{ArgAction, Parser, Subcommand};
use std::io;
use wordstack::{
    commands::{GenerateConfig, generate_puzzles, run_simple},
    config::{GameConfig, WordlistSource},
    core::DEFAULT_WORD_LENGTH,
    game::GameSession,
    logging,
    output::print_generate_result,
    wordlists::WordBank,
};

#[derive(Parser)]
#[command(
    name = "wordstack",
    about = "Rebuild two dictionary words from one interleaved pile of letter tiles",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Letters per word
    #[arg(short = 'l', long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    word_length: usize,

    /// Seed for reproducible puzzles
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace); logs go to stderr
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode (no TUI)
    Simple,

    /// Print generated puzzles without playing
    Generate {
        /// Number of puzzles to generate
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,

        /// Show the target words under each scramble
        #[arg(short, long)]
        reveal: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    ensure!(cli.word_length > 0, "word length must be at least 1");
    let config = GameConfig {
        word_length: cli.word_length,
        wordlist: WordlistSource::from_arg(&cli.wordlist),
        seed: cli.seed,
    };
    let bank = config.load_bank();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&config, &bank),
        Commands::Simple => run_simple_command(&config, &bank),
        Commands::Generate { count, reveal } => {
            run_generate_command(&config, &bank, count, reveal)
        }
    }
}

fn run_play_command(config: &GameConfig, bank: &WordBank) -> Result<()> {
    use wordstack::interactive::{App, run_tui};

    let app = App::new(GameSession::new(bank, config.rng()));
    run_tui(app)
}

fn run_simple_command(config: &GameConfig, bank: &WordBank) -> Result<()> {
    let mut session = GameSession::new(bank, config.rng());
    let stdin = io::stdin();
    run_simple(&mut session, stdin.lock(), &mut io::stdout()).context("simple mode I/O failed")
}

fn run_generate_command(
    config: &GameConfig,
    bank: &WordBank,
    count: usize,
    reveal: bool,
) -> Result<()> {
    let mut rng = config.rng();
    let generate_config = GenerateConfig { count, reveal };
    let result = generate_puzzles(bank, &mut rng, &generate_config)
        .with_context(|| format!("cannot generate puzzles from {:?}", config.wordlist))?;
    print_generate_result(&result);
    Ok(())
}
