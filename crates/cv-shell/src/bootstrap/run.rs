//! Application entry: config, wiring, then the stdin command loop.

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{info, warn};

use super::cli::Cli;
use super::config::resolve_config;
use super::wiring::build_app;
use crate::session::{Flow, Session};
use crate::view::Route;

const PROMPT: &str = "> ";

/// Run the viewer until `quit` or end of input.
///
/// Tracing must already be initialised by the caller.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = resolve_config(cli.config.clone())?;
    let app = build_app(&config)?;
    let mut session = Session::new(app);

    let start = match Route::parse(&cli.route) {
        Ok(route) => route,
        Err(err) => {
            warn!(error = %err, "Unknown start route, opening the list");
            Route::List
        }
    };
    session.navigate(start).await;

    let mut stdout = tokio::io::stdout();
    write_screen(&mut stdout, &session.render()).await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read input")? {
        match session.handle_line(&line).await {
            Flow::Render(screen) => write_screen(&mut stdout, &screen).await?,
            Flow::Exit => break,
        }
    }

    info!("Session ended");
    Ok(())
}

async fn write_screen(stdout: &mut tokio::io::Stdout, screen: &str) -> anyhow::Result<()> {
    stdout.write_all(screen.as_bytes()).await?;
    stdout.write_all(PROMPT.as_bytes()).await?;
    stdout.flush().await?;
    Ok(())
}
