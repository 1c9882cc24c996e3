//! Wordle Board - CLI
//!
//! Play Wordle in a TUI or line by line, or score a single guess.

use anyhow::Result;
use clap::{Parser, Subcommand};
use wordle_board::{
    commands::{check_guess, run_simple},
    config::{GameConfig, WordlistSource},
    core::FeedbackRule,
    game::GameBoard,
    logging,
    output::print_check_result,
};

#[derive(Parser)]
#[command(
    name = "wordle_board",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Answer to play against (default: random word)
    #[arg(short, long, global = true)]
    answer: Option<String>,

    /// Wordlist: 'builtin' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Score repeated letters like standard Wordle (each answer letter counts once)
    #[arg(short, long, global = true)]
    budgeted: bool,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-by-line mode without the TUI
    Simple,

    /// Score one guess against an answer
    Check {
        /// The guessed word
        guess: String,

        /// The answer to score against
        answer: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = GameConfig {
        answer: cli.answer,
        wordlist: WordlistSource::from_arg(&cli.wordlist),
        rule: if cli.budgeted {
            FeedbackRule::Budgeted
        } else {
            FeedbackRule::Positional
        },
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple_command(&config),
        Commands::Check { guess, answer } => run_check_command(&guess, &answer, config.rule),
    }
}

fn run_play_command(config: &GameConfig) -> Result<()> {
    use wordle_board::interactive::{App, run_tui};

    let dictionary = config.load_dictionary()?;
    let answer = config.pick_answer(&dictionary)?;
    let board = GameBoard::with_rule(&answer, dictionary, config.rule);

    run_tui(App::new(board, config.answer.clone()))
}

fn run_simple_command(config: &GameConfig) -> Result<()> {
    let dictionary = config.load_dictionary()?;
    let answer = config.pick_answer(&dictionary)?;
    let mut board = GameBoard::with_rule(&answer, dictionary, config.rule);

    let stdin = std::io::stdin();
    run_simple(&mut board, stdin.lock(), std::io::stdout())?;
    Ok(())
}

fn run_check_command(guess: &str, answer: &str, rule: FeedbackRule) -> Result<()> {
    let result = check_guess(guess, answer, rule).map_err(|e| anyhow::anyhow!(e))?;
    print_check_result(&result.guess, &result.answer, result.feedback);
    Ok(())
}
