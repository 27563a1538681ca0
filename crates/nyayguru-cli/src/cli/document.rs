//! Document analysis upload command.

use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use nyayguru_core::client::DocumentApi;

use crate::state::AppState;

/// Upload a document and print the returned analysis.
pub async fn upload(state: &AppState, file: &Path, json: bool) -> Result<()> {
    let spinner = if json {
        ProgressBar::hidden()
    } else {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        spinner.set_message(format!("Analyzing {}...", file.display()));
        spinner.enable_steady_tick(Duration::from_millis(80));
        spinner
    };

    let result = state.client.upload_document(file).await;
    spinner.finish_and_clear();

    let analysis = result.map_err(|err| anyhow::anyhow!(err.user_message()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} Analysis of {}",
        style("📄").bold(),
        style(&analysis.document_name).cyan().bold()
    );
    println!();
    println!("  {}", analysis.summary);

    if !analysis.key_points.is_empty() {
        println!();
        println!("  {}", style("Key points:").bold());
        for point in &analysis.key_points {
            println!("  {} {}", style("•").cyan(), point);
        }
    }

    if !analysis.suggestions.is_empty() {
        println!();
        println!("  {}", style("Suggestions:").bold());
        for suggestion in &analysis.suggestions {
            println!("  {} {}", style("→").yellow(), suggestion);
        }
    }
    println!();

    Ok(())
}
