//! `drunken-bishop`: animate the randomart of the MD5 digest of stdin.

mod cli;
mod pacer;

use crate::{cli::Cli, pacer::Pacer};
use anyhow::{Context, Result};
use art::{Error, Fingerprint, Renderer, Terminal, Walker, animate, input};
use clap::Parser;
use std::{
    io::{self, Read},
    process::ExitCode,
};
use tracing::debug;

/// Exit status after an interrupt (128 + SIGINT).
const EXIT_INTERRUPTED: u8 = 130;

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if matches!(err.downcast_ref::<Error>(), Some(Error::Interrupted)) => {
            debug!("walk interrupted");
            ExitCode::from(EXIT_INTERRUPTED)
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr so stdout only carries the digest and frames.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();
}

fn run(cli: &Cli) -> Result<()> {
    let mut stdin = Vec::new();
    io::stdin()
        .lock()
        .read_to_end(&mut stdin)
        .context("failed to read stdin")?;

    let blob = input::decode(&stdin, cli.encoding())
        .with_context(|| format!("failed to decode {} input", cli.encoding()))?;

    let fingerprint = Fingerprint::new(&blob);
    debug!(
        %fingerprint,
        len = blob.len(),
        palette = %cli.palette(),
        sleep = cli.sleep,
        "fingerprinted input"
    );

    let mut renderer = Renderer::new(cli.palette());
    if let Some(color) = cli.color(fingerprint.color()) {
        renderer = renderer.with_color(color);
    }

    let pacer = Pacer::with_ctrlc(cli.pause());
    let mut terminal = Terminal::new(io::stdout().lock());
    terminal
        .write_digest(&fingerprint)
        .context("failed to write to stdout")?;

    let walker = animate(
        &mut terminal,
        &renderer,
        Walker::new(fingerprint.moves()),
        || pacer.pause(),
    )
    .context("failed to animate walk")?;

    debug!(end = ?walker.position(), "walk complete");
    Ok(())
}
