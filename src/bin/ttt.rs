use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use rust_ttt::{CellIndex, EngineError, GameEngine, MoveReport, SharedEngine, Snapshot};

#[derive(Debug, Parser)]
#[command(name = "ttt", about = "Play tic-tac-toe against yourself in the terminal")]
struct Args {
    /// Print snapshots as JSON instead of a text grid
    #[arg(long, global = true)]
    json: bool,

    /// Log filter (overrides RUST_LOG), e.g. "debug" or "rust_ttt=info"
    #[arg(long, global = true)]
    log: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Apply a sequence of moves to a fresh board and print the result
    Play {
        /// Cell indices 0..=8, row-major
        #[arg(allow_negative_numbers = true)]
        cells: Vec<String>,
    },
    /// Read commands from stdin: a cell index, "reset", "reset-score", "show", "quit"
    Repl,
}

#[derive(Serialize)]
struct PlayOut<'a> {
    reports: &'a [MoveReport],
    state: Snapshot,
}

#[derive(Serialize)]
struct StepOut<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<MoveReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
    state: Snapshot,
}

fn init_logging(filter: Option<&str>) {
    let filter = match filter {
        Some(f) => EnvFilter::new(f),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn play(raw: &[String], json: bool) -> anyhow::Result<()> {
    // Validate everything before touching the board.
    let cells = raw
        .iter()
        .map(|s| CellIndex::parse(s))
        .collect::<Result<Vec<_>, EngineError>>()
        .context("invalid move")?;

    let mut engine = GameEngine::new();
    let reports: Vec<MoveReport> = cells.into_iter().map(|c| engine.apply_move(c).1).collect();
    let state = engine.state();

    let mut out = io::stdout().lock();
    if json {
        serde_json::to_writer(&mut out, &PlayOut { reports: &reports, state })?;
        writeln!(out)?;
    } else {
        for report in &reports {
            writeln!(out, "{report}")?;
        }
        writeln!(out, "{state}")?;
    }
    Ok(())
}

fn emit(
    out: &mut impl Write,
    json: bool,
    report: Option<MoveReport>,
    error: Option<&str>,
    state: Snapshot,
) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer(&mut *out, &StepOut { report, error, state })?;
        writeln!(out)?;
    } else {
        if let Some(error) = error {
            writeln!(out, "error: {error}")?;
        }
        if let Some(report) = report {
            writeln!(out, "{report}")?;
        }
        writeln!(out, "{state}")?;
        writeln!(out)?;
    }
    Ok(())
}

fn repl(json: bool) -> anyhow::Result<()> {
    let engine = SharedEngine::new();
    let stdin = io::stdin();
    let mut out = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        let cmd = line.trim();
        match cmd {
            "" => continue,
            "quit" | "exit" => break,
            "show" => emit(&mut out, json, None, None, engine.get_state())?,
            "reset" => emit(&mut out, json, None, None, engine.reset_board())?,
            "reset-score" => emit(&mut out, json, None, None, engine.reset_score())?,
            raw => match CellIndex::parse(raw) {
                Ok(cell) => {
                    let (state, report) = engine.apply_move(cell);
                    emit(&mut out, json, Some(report), None, state)?;
                }
                Err(e) => {
                    warn!(input = raw, error = %e, "rejected move");
                    let msg = e.to_string();
                    emit(&mut out, json, None, Some(&msg), engine.get_state())?;
                }
            },
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.log.as_deref());

    match &args.command {
        Command::Play { cells } => play(cells, args.json),
        Command::Repl => repl(args.json),
    }
}
