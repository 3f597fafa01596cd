//! winget-backed exporters (the winget and msstore sources)
//!
//! Both sources share one export mechanism: `winget export` scoped to a
//! single source repository, written to a scratch JSON file, followed by a
//! per-identifier display-name resolution through the shared cache.

use super::{ExportOutcome, PackageRecord, DEFAULT_VERSION};
use crate::cache::NameCache;
use crate::exec::CommandRunner;
use crate::resolve::NameResolver;
use crate::ui::{ResolveProgress, UiContext};
use serde::Deserialize;
use std::fmt;
use tracing::{debug, warn};

/// The two repositories winget can export from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WingetSource {
    Winget,
    Msstore,
}

impl WingetSource {
    /// Value passed to `winget export -s`
    pub fn flag(&self) -> &'static str {
        match self {
            Self::Winget => "winget",
            Self::Msstore => "msstore",
        }
    }
}

impl fmt::Display for WingetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.flag())
    }
}

#[derive(Deserialize)]
struct ExportFile {
    #[serde(rename = "Sources", default)]
    sources: Vec<SourceEntry>,
}

#[derive(Deserialize)]
struct SourceEntry {
    #[serde(rename = "Packages", default)]
    packages: Vec<PackageEntry>,
}

#[derive(Deserialize)]
struct PackageEntry {
    #[serde(rename = "PackageIdentifier", default)]
    package_identifier: String,

    #[serde(rename = "Version")]
    version: Option<String>,
}

/// Export one winget source and resolve a display name for every entry.
pub async fn export(
    runner: &dyn CommandRunner,
    source: WingetSource,
    cache: &NameCache,
    ctx: &UiContext,
) -> ExportOutcome {
    let entries = match bulk_export(runner, source).await {
        Ok(entries) => entries,
        Err(reason) => {
            warn!("winget export failed for {}: {}", source, reason);
            return ExportOutcome::Failed { reason };
        }
    };

    // Progress totals count only identifiers the cache has not seen yet;
    // a warm cache shows no lookups instead of a misleading full total.
    let cached = cache.load_all().await;
    let pending = entries
        .iter()
        .filter(|e| !cached.contains_key(&e.package_identifier))
        .count();
    debug!(
        "{}: {} package(s), {} needing resolution",
        source,
        entries.len(),
        pending
    );

    let resolver = NameResolver::new(runner);
    let mut progress = ResolveProgress::new(ctx, source.flag(), pending);
    let mut records = Vec::with_capacity(entries.len());

    for entry in entries {
        if !cached.contains_key(&entry.package_identifier) {
            progress.on_lookup(&entry.package_identifier);
        }
        let display_name = resolver.resolve(&entry.package_identifier, Some(cache)).await;
        records.push(PackageRecord {
            identifier: Some(entry.package_identifier),
            display_name,
            version: entry.version.unwrap_or_else(|| DEFAULT_VERSION.to_string()),
            source_bucket: None,
        });
    }

    progress.finish();
    ExportOutcome::Exported(records)
}

/// Run the bulk export into a scratch file and parse it.
///
/// The scratch file is removed on drop, success or failure.
async fn bulk_export(
    runner: &dyn CommandRunner,
    source: WingetSource,
) -> Result<Vec<PackageEntry>, String> {
    let scratch = tempfile::Builder::new()
        .prefix("pkgsnap-")
        .suffix(".json")
        .tempfile()
        .map_err(|e| format!("creating scratch file: {e}"))?;
    let path = scratch.path().to_string_lossy().into_owned();

    let output = runner
        .run(
            "winget",
            &[
                "export",
                "-s",
                source.flag(),
                "-o",
                &path,
                "--disable-interactivity",
                "--include-versions",
            ],
        )
        .await;

    if !output.success() {
        return Err(format!(
            "winget export exited with {}: {}",
            output.exit_code,
            output.stderr.trim()
        ));
    }

    let content = tokio::fs::read_to_string(scratch.path())
        .await
        .map_err(|e| format!("reading export file: {e}"))?;

    parse_export(&content)
}

/// Parse the `Sources[*].Packages[*]` export shape, taking the first source
/// entry that carries packages. Entries without an identifier are skipped.
fn parse_export(content: &str) -> Result<Vec<PackageEntry>, String> {
    let file: ExportFile =
        serde_json::from_str(content).map_err(|e| format!("parsing export JSON: {e}"))?;

    let packages = file
        .sources
        .into_iter()
        .map(|s| s.packages)
        .find(|p| !p.is_empty())
        .unwrap_or_default();

    Ok(packages
        .into_iter()
        .filter(|p| !p.package_identifier.is_empty())
        .collect())
}
