//! Cache command - inspect or clear the display-name cache
//!
//! The cache file is plain JSON and documented as hand-editable; these
//! subcommands make the inspect/reset workflow first-class.

use crate::cache::{CacheEntry, NameCache};
use crate::cli::args::{CacheAction, CacheArgs, OutputFormat};
use crate::config::Config;
use crate::error::PkgsnapResult;
use crate::ui::{self, UiContext};
use console::style;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tokio::fs;

/// Execute the cache command
pub async fn execute(args: CacheArgs, config: &Config) -> PkgsnapResult<()> {
    match args.action {
        CacheAction::Show { output, format } => show(cache_for(output, config), format).await,
        CacheAction::Clear { output, yes } => clear(cache_for(output, config), yes).await,
        CacheAction::Path { output } => {
            println!("{}", cache_for(output, config).path().display());
            Ok(())
        }
    }
}

fn cache_for(output: Option<PathBuf>, config: &Config) -> NameCache {
    let dir = output.unwrap_or_else(|| config.output.dir.clone());
    NameCache::new(&dir)
}

async fn show(cache: NameCache, format: OutputFormat) -> PkgsnapResult<()> {
    let entries = cache.load_all().await;

    if entries.is_empty() {
        println!("Name cache is empty.");
        return Ok(());
    }

    match format {
        OutputFormat::Table => print_table(&entries),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
        OutputFormat::Plain => {
            for identifier in entries.keys() {
                println!("{}", identifier);
            }
        }
    }

    Ok(())
}

fn print_table(entries: &BTreeMap<String, CacheEntry>) {
    println!("{:<45} {:<35} {:<20}", "IDENTIFIER", "DISPLAY NAME", "CACHED");
    println!("{}", "-".repeat(100));

    for (identifier, entry) in entries {
        let cached = entry.cached_at.format("%Y-%m-%d %H:%M").to_string();
        println!("{:<45} {:<35} {:<20}", identifier, entry.display_name, cached);
    }

    println!();
    println!("Total: {} cached name(s)", entries.len());
}

async fn clear(cache: NameCache, yes: bool) -> PkgsnapResult<()> {
    let ctx = UiContext::detect(yes);

    if !cache.path().exists() {
        println!("No cache file to clear.");
        return Ok(());
    }

    let count = cache.load_all().await.len();
    let confirmed = ui::confirm(
        &ctx,
        &format!(
            "Delete {} cached name(s)? The next export re-resolves everything.",
            count
        ),
        false,
    )
    .await?;

    if !confirmed {
        println!("Aborted.");
        return Ok(());
    }

    fs::remove_file(cache.path())
        .await
        .map_err(|e| crate::error::PkgsnapError::io("deleting cache file", e))?;

    println!("{} cleared {} cached name(s)", style("✓").green(), count);
    Ok(())
}
