use anyhow::{bail, Context};
use chessboard_replay::{run, ReplayScript};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Replays a TOML move script and prints the resulting positions.
#[derive(Parser)]
#[command(name = "chessboard-replay")]
#[command(about = "Replays scripted chess moves")]
struct Cli {
    /// Path to the move script
    script: PathBuf,

    /// Print the final game snapshot as JSON
    #[arg(long)]
    json: bool,

    /// Continue past rejected moves
    #[arg(long)]
    keep_going: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let script = ReplayScript::load(&cli.script)
        .with_context(|| format!("loading {}", cli.script.display()))?;
    tracing::info!(moves = script.moves.len(), "replaying {:?}", cli.script);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let outcome = run(&script, cli.keep_going, &mut out)?;

    if cli.json {
        serde_json::to_writer_pretty(&mut out, &outcome.game.snapshot())?;
        writeln!(out)?;
    }

    tracing::info!(
        applied = outcome.applied,
        rejected = outcome.rejected.len(),
        "replay finished"
    );

    if outcome.aborted {
        if let Some(rejection) = outcome.rejected.last() {
            bail!("move {} rejected: {}", rejection.index + 1, rejection.error);
        }
    }
    Ok(())
}
