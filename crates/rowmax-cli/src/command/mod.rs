use clap::{Parser, Subcommand};

use self::{
    analyze::AnalyzeArg,
    play::{AutoPlayArg, PlayArg},
    replay::ReplayArg,
};

mod analyze;
mod play;
mod replay;
mod search_arg;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play against the computer in the terminal
    #[command(name = "play")]
    Play(#[clap(flatten)] PlayArg),
    /// Let a seeded random opponent play against the computer
    #[command(name = "auto-play")]
    AutoPlay(#[clap(flatten)] AutoPlayArg),
    /// Show scores and candidate move values for a board file
    Analyze(#[clap(flatten)] AnalyzeArg),
    /// Step through a recorded game
    Replay(#[clap(flatten)] ReplayArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Play(PlayArg::default())) {
        Mode::Play(arg) => play::run_manual(&arg)?,
        Mode::AutoPlay(arg) => play::run_auto(&arg)?,
        Mode::Analyze(arg) => analyze::run(&arg)?,
        Mode::Replay(arg) => replay::run(&arg)?,
    }
    Ok(())
}
