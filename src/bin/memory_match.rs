//! Terminal front end.
//!
//! Deals a board and reads one position per line from stdin, printing the
//! face-up cards after every reveal. Set `RUST_LOG=debug` (or pass `-v`)
//! to see each reveal outcome.

use std::io::{self, BufRead, Write};

use clap::Parser;
use memory_match::{Board, GameConfig, GameError, GameRng, Position, RevealOutcome};

#[derive(Parser)]
#[command(author, version, about = "Play a game of memory in the terminal", long_about = None)]
struct Args {
    /// Number of symbol pairs (defaults to MEMORY_MATCH_PAIR_COUNT, then 6)
    #[arg(short, long)]
    pairs: Option<usize>,

    /// Seed for a reproducible board
    #[arg(short, long)]
    seed: Option<u64>,

    /// Log every reveal outcome
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(args) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = match args.pairs {
        Some(pairs) => GameConfig::new(pairs),
        None => GameConfig::from_env()?,
    };
    let mut rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    log::info!("seed {}", rng.seed());

    let mut board = Board::build(&config, &mut rng)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    render(&board, &mut stdout)?;
    for line in stdin.lock().lines() {
        let line = line?;
        let Ok(raw) = line.trim().parse::<u32>() else {
            writeln!(stdout, "enter a position between 0 and {}", board.card_count() - 1)?;
            continue;
        };

        match board.reveal(Position(raw)) {
            Ok(RevealOutcome::Mismatched { retracted }) => {
                writeln!(
                    stdout,
                    "{} does not match {}",
                    board.symbol_at(Position(raw))?,
                    board.symbol_at(retracted)?
                )?;
            }
            Ok(outcome) if !outcome.has_update() => {
                writeln!(stdout, "position {raw} is already face-up")?;
                continue;
            }
            Ok(_) => {}
            Err(e @ GameError::InvalidPosition { .. }) => {
                writeln!(stdout, "{e}")?;
                continue;
            }
            Err(e) => return Err(e.into()),
        }

        render(&board, &mut stdout)?;
        if board.is_complete() {
            writeln!(stdout, "finished in {} reveals", board.open_count())?;
            break;
        }
    }
    Ok(())
}

fn render(board: &Board, out: &mut impl Write) -> io::Result<()> {
    let cells: Vec<String> = Position::all(board.card_count())
        .map(|pos| match board.face_up_symbol(pos) {
            Some(symbol) => format!("{:>2}:{:<3}", pos.raw(), symbol.as_str()),
            None => format!("{:>2}:?  ", pos.raw()),
        })
        .collect();
    writeln!(out, "{}", cells.join(" "))
}
