//! tictouch - touch-driven tic-tac-toe.
//!
//! Brings up the panel collaborators, draws the board, and idles while the
//! touch handler plays the game. Exits on Ctrl-C or when touch input closes.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use cli::Cli;
use std::io::BufReader;
use tictouch::{
    AppConfig, Backlight, BoardRenderer, FrameBuffer, GraphicsDisplay, LineTouchSource,
    SimulatedPin, TicTacToe, TouchInput, TouchSource,
};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let config = AppConfig::load_or_default(&cli.config)?.with_overrides(
        cli.width,
        cli.height,
        cli.show_readout,
    )?;

    run(config).await
}

/// Runs the game until interrupted.
#[instrument(
    skip_all,
    fields(width = *config.display().width(), height = *config.display().height())
)]
async fn run(config: AppConfig) -> Result<()> {
    info!("Initializing display");
    let display = GraphicsDisplay::new(FrameBuffer::new(
        *config.display().width(),
        *config.display().height(),
    )?);
    let mut backlight = Backlight::new(SimulatedPin::default());

    let renderer = BoardRenderer::new(display, *config.palette());
    let mut game = TicTacToe::new(renderer, *config.touch().show_readout());
    backlight.on()?;
    game.start()
        .map_err(|e| anyhow!("Failed to draw initial board: {:?}", e))?;

    let input = TouchInput::new(game);
    let mut touch = LineTouchSource::new(BufReader::new(std::io::stdin()));
    let closed = touch
        .closed()
        .context("Touch source close signal already taken")?;
    touch.register(input.callback())?;

    info!("Ready: enter presses as `x,y`, Ctrl-C to exit");
    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            result.context("Failed to listen for Ctrl-C")?;
            info!("Ctrl-C pressed, cleaning up");
        }
        _ = closed => {
            info!("Touch input closed, cleaning up");
        }
    }

    input
        .shutdown()
        .map_err(|e| anyhow!("Failed to clear display: {:?}", e))?;
    backlight.off()?;

    info!("Shutdown complete");
    Ok(())
}

fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tictouch=debug,tictouch_game=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
