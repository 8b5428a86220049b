//! noughts - command-line front end for the move-selection engine.
//!
//! `noughts move` asks the engine for one move on a given board;
//! `noughts selfplay` runs engine-vs-engine rounds and tallies results.

use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use noughts_ai::{
    play_out, Board, Difficulty, DifficultyLevel, GameRng, Mark, MoveKind, MovePolicy, Outcome,
    Result, Sides,
};

/// Noughts-and-crosses engine
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Minimax noughts-and-crosses engine", long_about = None)]
#[command(version)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Command {
    /// Choose a move for one board
    Move {
        /// Board in row-major text form, e.g. "XX./OO./..."
        #[arg(short, long)]
        board: String,

        /// Mark the engine plays
        #[arg(short, long, default_value = "O")]
        mark: Mark,

        #[command(flatten)]
        strength: Strength,
    },

    /// Play engine-vs-engine rounds
    Selfplay {
        /// Number of rounds
        #[arg(short, long, default_value = "100")]
        games: u32,

        #[command(flatten)]
        strength: Strength,
    },
}

/// Engine strength: a star level, or explicit knobs
#[derive(Args, Debug)]
struct Strength {
    /// Difficulty level (1-5); overrides --depth and --random
    #[arg(short, long)]
    level: Option<u8>,

    /// Search depth (1-9)
    #[arg(short, long, default_value = "9")]
    depth: u8,

    /// Probability of a random move (0.0-1.0)
    #[arg(short, long, default_value = "0.0")]
    random: f64,

    /// RNG seed; drawn from OS entropy when omitted
    #[arg(long)]
    seed: Option<u64>,
}

impl Strength {
    fn difficulty(&self) -> Result<Difficulty> {
        match self.level {
            Some(level) => Ok(DifficultyLevel::new(level)?.to_difficulty()),
            None => Difficulty::new(self.depth, self.random),
        }
    }

    fn rng(&self) -> GameRng {
        self.seed.map_or_else(GameRng::from_entropy, GameRng::new)
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Move { board, mark, strength } => run_move(&board, mark, &strength),
        Command::Selfplay { games, strength } => run_selfplay(games, &strength),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_move(board: &str, mark: Mark, strength: &Strength) -> Result<()> {
    let board: Board = board.parse()?;
    let policy = MovePolicy::new(Sides::for_engine(mark), strength.difficulty()?);
    let mut rng = strength.rng();

    match policy.choose_move(&board, &mut rng) {
        Some(choice) => {
            match choice.kind {
                MoveKind::Random => println!("{} (random)", choice.coord),
                MoveKind::Searched { score, stats } => {
                    println!("{} (score {score}, {} nodes)", choice.coord, stats.nodes)
                }
            }
        }
        None => println!("no move"),
    }
    Ok(())
}

fn run_selfplay(games: u32, strength: &Strength) -> Result<()> {
    let difficulty = strength.difficulty()?;
    let mut rng = strength.rng();
    info!(games, seed = rng.seed(), ?difficulty, "starting self-play");

    let (mut x_wins, mut o_wins, mut draws) = (0u32, 0u32, 0u32);
    for _ in 0..games {
        let mut game_rng = rng.fork();
        let round = play_out(difficulty, difficulty, &mut game_rng)?;
        match round.outcome() {
            Outcome::Won(Mark::X) => x_wins += 1,
            Outcome::Won(Mark::O) => o_wins += 1,
            Outcome::Draw => draws += 1,
            Outcome::InProgress => {}
        }
    }

    println!("X wins: {x_wins}\nO wins: {o_wins}\ndraws:  {draws}");
    Ok(())
}
