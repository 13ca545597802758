use std::path::PathBuf;

use rowmax_engine::{Board, Mark, Pos};
use rowmax_evaluator::{margin::Tier, run_score::Scores};
use rowmax_search::{
    CandidateValue, Level, NEG_INFINITY, POS_INFINITY, SearchEngine, best_candidate, full_width,
};
use serde::Serialize;

use crate::{
    command::search_arg::SearchArg,
    schema::record::SearchSettings,
    util::{self, Output},
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct AnalyzeArg {
    /// Board text file: one row per line (or rows separated by `/`), cells `X`, `O`, `.`
    board_file: PathBuf,
    /// Also compute every candidate's exact value with an unpruned search
    ///
    /// The unpruned search can take very long on boards with many empty cells.
    #[clap(long)]
    verify: bool,
    /// Print the analysis as JSON
    #[clap(long)]
    json: bool,
    /// Output file for the JSON report (defaults to stdout)
    #[clap(long, requires = "json")]
    output: Option<PathBuf>,
    #[clap(flatten)]
    search: SearchArg,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct AnalysisReport {
    board: Board,
    scores: Scores,
    /// Tier of the current margin, `None` when tied
    margin: Option<Tier>,
    search: SearchSettings,
    candidates: Vec<CandidateReport>,
    selected: Option<CandidateValue>,
    /// Best candidate by exact value, present with `--verify`
    exact_best: Option<CandidateValue>,
    nodes: u64,
    timed_out: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
struct CandidateReport {
    pos: Pos,
    value: i32,
    exact: Option<i32>,
}

pub(crate) fn run(arg: &AnalyzeArg) -> anyhow::Result<()> {
    let AnalyzeArg {
        board_file,
        verify,
        json,
        output,
        search,
    } = arg;

    let board = util::read_board_file(board_file)?;
    eprintln!(
        "Loaded {size}x{size} board from {}",
        board_file.display(),
        size = board.size()
    );

    let settings = search.to_settings();
    let report = analyze(&board, settings, *verify);

    if *json {
        Output::save_json(&report, output.clone())?;
    } else {
        print_report(&report);
    }
    Ok(())
}

fn analyze(board: &Board, settings: SearchSettings, verify: bool) -> AnalysisReport {
    let engine = settings.build_engine();
    let scores = Scores::from_board(board);
    let margin = scores
        .lead()
        .map(|(winner, loser)| Tier::classify(winner, loser));

    let exact_values = verify.then(|| exact_candidate_values(&engine, board));
    let (values, stats) = engine.candidate_values_with_stats(board);
    let selected = best_candidate(&values);
    let candidates = values
        .into_iter()
        .enumerate()
        .map(|(i, candidate)| CandidateReport {
            pos: candidate.pos,
            value: candidate.value,
            exact: exact_values.as_ref().map(|values| values[i].value),
        })
        .collect();
    let exact_best = verify
        .then(|| full_width::select_move(engine.cutoff_rule(), engine.config(), board))
        .flatten()
        .map(|(pos, value)| CandidateValue { pos, value });

    AnalysisReport {
        board: board.clone(),
        scores,
        margin,
        search: settings,
        candidates,
        selected,
        exact_best,
        nodes: stats.nodes,
        timed_out: stats.timed_out,
    }
}

fn exact_candidate_values(engine: &SearchEngine, board: &Board) -> Vec<CandidateValue> {
    board
        .children(Mark::Computer)
        .map(|child| CandidateValue {
            pos: child.pos,
            value: full_width::minimax(
                engine.cutoff_rule(),
                engine.config(),
                &child.board,
                Level::Minimizing,
                0,
            ),
        })
        .collect()
}

fn format_value(value: i32) -> String {
    match value {
        NEG_INFINITY => "-inf".to_owned(),
        POS_INFINITY => "+inf".to_owned(),
        _ => value.to_string(),
    }
}

fn print_report(report: &AnalysisReport) {
    println!("{}", report.board);
    println!();
    println!(
        "player: {}    computer: {}",
        report.scores.player, report.scores.computer
    );
    match report.margin {
        Some(tier) => println!("margin: {tier}"),
        None => println!("margin: tied"),
    }
    println!();

    if report.candidates.is_empty() {
        println!("Board is full, no move to analyze");
        return;
    }

    let verified = report.exact_best.is_some();
    if verified {
        println!("{:<8}{:>8}{:>8}", "move", "value", "exact");
    } else {
        println!("{:<8}{:>8}", "move", "value");
    }
    for candidate in &report.candidates {
        let pos = candidate.pos.to_string();
        let value = format_value(candidate.value);
        match candidate.exact {
            Some(exact) => {
                let marker = if exact == candidate.value { "" } else { "  *" };
                println!("{pos:<8}{value:>8}{:>8}{marker}", format_value(exact));
            }
            None => println!("{pos:<8}{value:>8}"),
        }
    }
    println!();

    if let Some(selected) = report.selected {
        println!(
            "selected: {} (value {}, {} nodes{})",
            selected.pos,
            format_value(selected.value),
            report.nodes,
            if report.timed_out { ", timed out" } else { "" }
        );
    }
    if let Some(best) = report.exact_best {
        println!(
            "exact best: {} (value {})",
            best.pos,
            format_value(best.value)
        );
        if report.candidates.iter().any(|c| c.exact != Some(c.value)) {
            println!("* pruned value differs from the exact value");
        }
    }
}
