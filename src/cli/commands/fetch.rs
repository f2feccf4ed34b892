//! Fetch command implementation.

use crate::cli::Output;
use crate::config::Settings;
use crate::orchestrator::Orchestrator;
use anyhow::Result;

/// Run the fetch command.
pub async fn run_fetch(url: Option<String>, settings: Settings) -> Result<()> {
    let url = url.unwrap_or_else(|| settings.menu.url.clone());
    let orchestrator = Orchestrator::new(settings)?;

    let spinner = Output::spinner("Fetching the latest menu...");
    let transcript = orchestrator.fetch_menu(&url).await;
    spinner.finish_and_clear();

    if transcript.is_empty() {
        Output::error("Could not fetch the menu. Check the URL and your connection.");
        return Ok(());
    }

    Output::success("Menu fetched successfully!");
    println!("\n{}", transcript);
    Ok(())
}
