//! Category and language listing.

use anyhow::Result;
use console::style;

use nyayguru_core::client::ChatApi;
use nyayguru_types::chat::category_slug;

use crate::state::AppState;

/// List the legal categories and response languages the service offers.
pub async fn list_categories(state: &AppState, json: bool) -> Result<()> {
    let categories = state
        .client
        .fetch_categories()
        .await
        .map_err(|err| anyhow::anyhow!(err.user_message()))?;
    let languages = state
        .client
        .fetch_languages()
        .await
        .map_err(|err| anyhow::anyhow!(err.user_message()))?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "categories": categories,
                "languages": languages,
            }))?
        );
        return Ok(());
    }

    println!();
    println!("  {}", style("Legal categories:").bold());
    println!();
    for category in &categories {
        println!(
            "  {} {}  {}",
            style("•").cyan(),
            category,
            style(format!("({})", category_slug(category))).dim()
        );
    }

    println!();
    println!("  {}", style("Languages:").bold());
    println!();
    println!("  {}", languages.join(", "));
    println!();

    Ok(())
}
