//! The interactive chat loop.

use std::time::Duration;

use anyhow::Result;
use console::style;
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};

use nyayguru_core::chat::ChatOrchestrator;
use nyayguru_core::retry::BackoffPolicy;
use nyayguru_infra::http::HttpApiClient;
use nyayguru_types::message::Sender;

use crate::state::AppState;

use super::commands::{self, ChatCommand};
use super::renderer;

/// Run the interactive chat session until `/quit` or EOF.
pub async fn run_chat_loop(
    state: &AppState,
    category: Option<&str>,
    language: Option<&str>,
) -> Result<()> {
    let backoff = BackoffPolicy::from(&state.config.retry);
    let mut orchestrator = ChatOrchestrator::new(state.client.clone(), backoff);

    let spinner = thinking_spinner("Connecting...");
    let init = orchestrator.initialize(category).await;
    spinner.finish_and_clear();
    init.map_err(|err| anyhow::anyhow!(err.user_message()))?;

    if let Some(language) = language {
        switch_language(&mut orchestrator, language);
    }

    for message in orchestrator.transcript().messages() {
        renderer::render(message);
    }

    loop {
        let prompt = format!(
            "{} ({})",
            style("you").green().bold(),
            orchestrator.active_category().unwrap_or("?")
        );
        let input: String = match Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
        {
            Ok(line) => line,
            // Ctrl+C / closed stdin ends the session.
            Err(_) => break,
        };

        if let Some(command) = commands::parse(&input) {
            match command {
                ChatCommand::Help => commands::print_help(),

                ChatCommand::Quit => break,

                ChatCommand::Clear => {
                    orchestrator.clear_transcript();
                    let _ = console::Term::stdout().clear_screen();
                    for message in orchestrator.transcript().messages() {
                        renderer::render(message);
                    }
                }

                ChatCommand::Category(None) => {
                    print_options(
                        "Categories",
                        orchestrator.categories(),
                        orchestrator.active_category().unwrap_or(""),
                    );
                }

                ChatCommand::Category(Some(name)) => {
                    match orchestrator.change_category(&name) {
                        Ok(()) => render_last(&orchestrator),
                        Err(err) => {
                            println!("  {} {}", style("✗").red().bold(), err.user_message());
                        }
                    }
                }

                ChatCommand::Language(None) => {
                    print_options(
                        "Languages",
                        orchestrator.languages(),
                        orchestrator.active_language(),
                    );
                }

                ChatCommand::Language(Some(name)) => {
                    switch_language(&mut orchestrator, &name);
                    render_last(&orchestrator);
                }

                ChatCommand::Unknown(cmd) => {
                    println!(
                        "  {} Unknown command '{}'. Try {}.",
                        style("✗").red().bold(),
                        cmd,
                        style("/help").cyan()
                    );
                }
            }
            continue;
        }

        if input.trim().is_empty() {
            continue;
        }

        let before = orchestrator.transcript().len();
        let spinner = thinking_spinner("Thinking...");
        orchestrator.send_message(&input).await;
        spinner.finish_and_clear();

        // The user's line is already on screen; render only what arrived.
        for message in &orchestrator.transcript().messages()[before..] {
            if message.sender == Sender::Bot {
                renderer::render(message);
            }
        }
    }

    println!("\n  Goodbye.");
    Ok(())
}

/// Resolve a language case-insensitively against the fetched set.
fn switch_language(orchestrator: &mut ChatOrchestrator<HttpApiClient>, language: &str) {
    match orchestrator
        .languages()
        .iter()
        .find(|l| l.eq_ignore_ascii_case(language))
        .cloned()
    {
        Some(canonical) => orchestrator.change_language(&canonical),
        None => {
            println!(
                "  {} Unknown language '{}'; staying with {}. See {}.",
                style("✗").red().bold(),
                language,
                orchestrator.active_language(),
                style("/language").cyan()
            );
        }
    }
}

fn render_last(orchestrator: &ChatOrchestrator<HttpApiClient>) {
    if let Some(message) = orchestrator.transcript().messages().last() {
        renderer::render(message);
    }
}

fn print_options(label: &str, options: &[String], active: &str) {
    println!();
    println!("  {}", style(format!("{label}:")).bold());
    for option in options {
        if option == active {
            println!("  {} {}", style("▸").cyan().bold(), style(option).bold());
        } else {
            println!("    {option}");
        }
    }
    println!();
}

fn thinking_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("  {spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}
