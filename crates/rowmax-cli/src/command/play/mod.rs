use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use anyhow::Context;
use rand::Rng as _;
use rowmax_engine::GameSession;

use crate::{command::search_arg::SearchArg, schema::record::RecordedGame};

use self::{
    game_loop::{Tally, play_game},
    opponent::{HumanOpponent, Opponent as _, RandomOpponent},
    transcript::Transcript,
};

mod game_loop;
mod opponent;
mod transcript;

const DEFAULT_BOARD_SIZE: usize = 3;
const DEFAULT_RECORD_DIR: &str = "./data/recordings/";

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Side length of the square board
    #[clap(long, default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,
    /// Write a text transcript of the game to this file
    #[clap(long)]
    transcript: Option<PathBuf>,
    /// Save the game recording to a file when the game ends
    #[clap(long)]
    save_recording: bool,
    /// Directory to save recording files
    #[clap(long, default_value = DEFAULT_RECORD_DIR)]
    record_dir: PathBuf,
    #[clap(flatten)]
    search: SearchArg,
}

impl Default for PlayArg {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            transcript: None,
            save_recording: false,
            record_dir: PathBuf::from(DEFAULT_RECORD_DIR),
            search: SearchArg::default(),
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct AutoPlayArg {
    /// Side length of the square board
    #[clap(long, default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,
    /// Number of games to play
    #[clap(long, default_value_t = 1)]
    games: usize,
    /// Seed for the random opponent (drawn at random when omitted)
    #[clap(long)]
    seed: Option<u64>,
    /// Print every board to stdout
    #[clap(long)]
    show_boards: bool,
    /// Save a recording of every game
    #[clap(long)]
    save_recording: bool,
    /// Directory to save recording files
    #[clap(long, default_value = DEFAULT_RECORD_DIR)]
    record_dir: PathBuf,
    #[clap(flatten)]
    search: SearchArg,
}

pub(crate) fn run_manual(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        size,
        transcript: transcript_path,
        save_recording,
        record_dir,
        search,
    } = arg;

    let settings = search.to_settings();
    let engine = settings.build_engine();
    let session = GameSession::new(*size)?;

    let writer: Box<dyn Write> = match transcript_path {
        Some(path) => {
            let file = File::create(path).with_context(|| {
                format!("Failed to create transcript file: {}", path.display())
            })?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::sink()),
    };
    let mut transcript = Transcript::new(writer);

    let mut human = HumanOpponent::new(io::stdin().lock(), io::stdout());
    let outcome = play_game(
        session,
        &mut human,
        &engine,
        &mut io::stdout(),
        &mut transcript,
    )?;

    if let Some(path) = transcript_path {
        eprintln!("Transcript written to {}", path.display());
    }
    if *save_recording {
        let game = RecordedGame::from_session(&outcome.session, human.info(), settings);
        let path = game.save(record_dir)?;
        eprintln!("Recording saved to {}", path.display());
    }

    Ok(())
}

pub(crate) fn run_auto(arg: &AutoPlayArg) -> anyhow::Result<()> {
    let AutoPlayArg {
        size,
        games,
        seed,
        show_boards,
        save_recording,
        record_dir,
        search,
    } = arg;

    let settings = search.to_settings();
    let engine = settings.build_engine();
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    eprintln!("Random opponent seed: {seed}");

    let mut opponent = RandomOpponent::new(seed);
    let mut display: Box<dyn Write> = if *show_boards {
        Box::new(io::stdout())
    } else {
        Box::new(io::sink())
    };
    let mut tally = Tally::default();

    for game_index in 0..*games {
        opponent.start_game(game_index);
        let session = GameSession::new(*size)?;
        let outcome = play_game(
            session,
            &mut opponent,
            &engine,
            &mut display,
            &mut Transcript::disabled(),
        )?;
        tally.record(outcome.result.winner);
        eprintln!(
            "Game {}/{games}: {} ({})",
            game_index + 1,
            outcome.result.announcement(),
            outcome.result.score_line()
        );

        if *save_recording {
            let game =
                RecordedGame::from_session(&outcome.session, opponent.info(), settings.clone());
            let path = game.save(record_dir)?;
            eprintln!("Recording saved to {}", path.display());
        }
    }

    println!(
        "games: {}    player wins: {}    computer wins: {}    ties: {}",
        tally.games(),
        tally.player_wins,
        tally.computer_wins,
        tally.ties
    );

    Ok(())
}
