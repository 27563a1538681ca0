//! NyayGuru CLI entry point.
//!
//! Binary name: `nyay`
//!
//! Parses CLI arguments, loads configuration, wires the HTTP client, then
//! dispatches to the appropriate command handler.

mod cli;
mod state;

use clap::Parser;
use clap_complete::generate;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,nyayguru=debug",
        _ => "trace",
    };
    nyayguru_observe::tracing_setup::init_tracing(filter, cli.otel)
        .map_err(|e| anyhow::anyhow!("tracing setup failed: {e}"))?;

    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "nyay", &mut std::io::stdout());
        return Ok(());
    }

    // Load config, wire the HTTP client, restore any saved login
    let state = AppState::init().await?;

    let outcome = match cli.command {
        Commands::Chat { category, language } => {
            cli::chat::run_chat_loop(&state, category.as_deref(), language.as_deref()).await
        }

        Commands::Login {
            email,
            google_token,
        } => cli::auth::login(&state, email.as_deref(), google_token.as_deref(), cli.json).await,

        Commands::Register => cli::auth::register(&state, cli.json).await,

        Commands::Logout => cli::auth::logout(&state, cli.json).await,

        Commands::Whoami => cli::auth::whoami(&state, cli.json).await,

        Commands::Categories => cli::catalog::list_categories(&state, cli.json).await,

        Commands::Upload { file } => cli::document::upload(&state, &file, cli.json).await,

        Commands::Completions { .. } => unreachable!("handled above"),
    };

    if cli.otel {
        nyayguru_observe::tracing_setup::shutdown_tracing();
    }

    outcome
}
