//! Balda Solver - CLI
//!
//! Lists available moves on a board, checks human moves and runs automated
//! self-play games.

use anyhow::{Context, Result, anyhow, bail};
use balda_solver::{
    commands::{
        CheckConfig, SelfPlayConfig, check_move, list_moves, load_board, parse_coord, parse_path,
        run_selfplay,
    },
    constants::FIELD_SIZE,
    core::{Alphabet, Grid},
    dictionary::{Dictionary, loader::load_from_file},
    output::{print_check_result, print_moves_result, print_selfplay_result},
    solver::{MoveGenerator, OpponentType},
};
use clap::{Parser, Subcommand};
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::borrow::Cow;

#[derive(Parser)]
#[command(
    name = "balda_solver",
    about = "Move generator for the Balda word game",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Dictionary: 'embedded' (default, built-in nouns) or path to file
    #[arg(short = 'd', long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Board letters: 'russian' (default), 'ukrainian', 'dictionary' (letters
    /// of the loaded word list) or the letters themselves
    #[arg(short = 'a', long, global = true, default_value = "russian")]
    alphabet: String,

    /// Board side length for generated boards
    #[arg(long, global = true, default_value_t = FIELD_SIZE)]
    size: usize,

    /// Seed for reproducible random choices
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// List every move available on a board
    Moves {
        /// Board file: one row per line, '.' for empty cells
        #[arg(short, long, conflicts_with = "word")]
        board: Option<String>,

        /// Start a fresh board from this seed word (random if neither is given)
        #[arg(short, long)]
        word: Option<String>,

        /// Words already played (comma separated)
        #[arg(short, long, value_delimiter = ',')]
        exclude: Vec<String>,

        /// Show the cell path of every move
        #[arg(short = 'p', long)]
        paths: bool,
    },

    /// Check a move made by a human player
    Check {
        /// Board file with the new letter already written
        #[arg(short, long)]
        board: String,

        /// Cell of the new letter as x,y
        #[arg(short, long)]
        entered: Option<String>,

        /// Selected cells in reading order, e.g. "1,0 1,1 2,1"
        #[arg(short, long)]
        path: String,

        /// Words already played (comma separated)
        #[arg(short, long, value_delimiter = ',')]
        used: Vec<String>,
    },

    /// Let two automated opponents play each other
    Selfplay {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "10")]
        games: usize,

        /// First player: longest (default) or random
        #[arg(long, default_value = "longest")]
        first: String,

        /// Second player: longest (default) or random
        #[arg(long, default_value = "random")]
        second: String,

        /// List the words of every game
        #[arg(short = 'l', long)]
        list: bool,
    },
}

/// Load the dictionary selected by the -d flag
///
/// The embedded list is borrowed from its process-wide instance.
fn load_dictionary(mode: &str) -> Result<Cow<'static, Dictionary>> {
    match mode {
        "embedded" => Ok(Cow::Borrowed(Dictionary::nouns())),
        path => {
            let words = load_from_file(path)
                .with_context(|| format!("Failed to load dictionary from {path}"))?;
            let dictionary = Dictionary::new(&words);
            if dictionary.is_empty() {
                bail!("Dictionary {path} contains no words");
            }
            info!("Loaded {} words from {path}", dictionary.len());
            Ok(Cow::Owned(dictionary))
        }
    }
}

/// Resolve the board alphabet selected by the -a flag
fn load_alphabet(mode: &str, dictionary: &Dictionary) -> Result<Alphabet> {
    let alphabet = match mode {
        "russian" => Alphabet::russian(),
        "ukrainian" => Alphabet::ukrainian(),
        "dictionary" => dictionary.letters(),
        letters => Alphabet::new(letters),
    };
    if alphabet.is_empty() {
        bail!("Alphabet '{mode}' has no letters");
    }
    Ok(alphabet)
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let dictionary = load_dictionary(&cli.dictionary)?;
    let alphabet = load_alphabet(&cli.alphabet, &dictionary)?;
    let generator = MoveGenerator::with_alphabet(&dictionary, alphabet);

    let unplayable = generator.unplayable_letters();
    if !unplayable.is_empty() {
        let letters: String = unplayable.into_iter().collect();
        warn!("Dictionary letters outside the board alphabet are never placed: {letters}");
    }

    let mut rng = cli
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    match cli.command {
        Commands::Moves {
            board,
            word,
            exclude,
            paths,
        } => run_moves_command(
            &generator,
            board.as_deref(),
            word,
            exclude,
            cli.size,
            paths,
            &mut rng,
        ),
        Commands::Check {
            board,
            entered,
            path,
            used,
        } => run_check_command(&generator, &board, entered.as_deref(), &path, used),
        Commands::Selfplay {
            games,
            first,
            second,
            list,
        } => run_selfplay_command(
            &generator,
            games,
            cli.size,
            [first.as_str(), second.as_str()],
            list,
            &mut rng,
        ),
    }
}

fn run_moves_command(
    generator: &MoveGenerator<'_>,
    board_path: Option<&str>,
    word: Option<String>,
    mut exclude: Vec<String>,
    size: usize,
    verbose: bool,
    rng: &mut StdRng,
) -> Result<()> {
    let board = if let Some(path) = board_path {
        load_board(path, generator.alphabet()).map_err(|e| anyhow!(e))?
    } else {
        let seed = match word {
            Some(word) => word.to_lowercase(),
            None => generator
                .dictionary()
                .random_word(size, rng)
                .ok_or_else(|| anyhow!("Dictionary has no {size}-letter word to start from"))?
                .to_string(),
        };
        let board = Grid::with_initial_word_in(size, &seed, generator.alphabet().clone())
            .with_context(|| format!("Cannot start a board from '{seed}'"))?;
        exclude.push(seed);
        board
    };

    let result = list_moves(generator, board, exclude, rng);
    print_moves_result(&result, verbose);
    Ok(())
}

fn run_check_command(
    generator: &MoveGenerator<'_>,
    board_path: &str,
    entered: Option<&str>,
    path: &str,
    used: Vec<String>,
) -> Result<()> {
    let board = load_board(board_path, generator.alphabet()).map_err(|e| anyhow!(e))?;
    let entered = entered
        .map(parse_coord)
        .transpose()
        .map_err(|e| anyhow!(e))?;
    let path = parse_path(path).map_err(|e| anyhow!(e))?;

    let mut config = CheckConfig::new(entered, path);
    config.used_words = used;

    let result = check_move(generator.dictionary(), board, &config);
    print_check_result(&result);
    Ok(())
}

fn run_selfplay_command(
    generator: &MoveGenerator<'_>,
    games: usize,
    size: usize,
    names: [&str; 2],
    verbose: bool,
    rng: &mut StdRng,
) -> Result<()> {
    let players = names.map(OpponentType::from_name);
    println!(
        "Running {games} games: {} vs {}...",
        players[0].name(),
        players[1].name()
    );

    let mut config = SelfPlayConfig::new(games);
    config.size = size;
    config.show_progress = true;

    let result = run_selfplay(generator, &players, &config, rng).map_err(|e| anyhow!(e))?;
    print_selfplay_result(&result, [players[0].name(), players[1].name()], verbose);
    Ok(())
}
