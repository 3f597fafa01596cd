//! Chocolatey exporter
//!
//! `choco export` writes a `packages.config` XML file with one `package`
//! element per entry. The export carries no display names beyond the id,
//! so the id doubles as the title. Chocolatey's own self-management
//! packages are excluded.

use super::{ExportOutcome, PackageRecord, DEFAULT_VERSION};
use crate::exec::CommandRunner;
use tracing::warn;

/// Ids under this namespace belong to Chocolatey itself
const INTERNAL_PREFIX: &str = "chocolatey";

/// Export installed Chocolatey packages.
pub async fn export(runner: &dyn CommandRunner) -> ExportOutcome {
    match bulk_export(runner).await {
        Ok(records) => ExportOutcome::Exported(records),
        Err(reason) => {
            warn!("choco export failed: {}", reason);
            ExportOutcome::Failed { reason }
        }
    }
}

/// Run the export into a scratch `.config` file and parse it.
///
/// The scratch file is removed on drop, success or failure.
async fn bulk_export(runner: &dyn CommandRunner) -> Result<Vec<PackageRecord>, String> {
    let scratch = tempfile::Builder::new()
        .prefix("pkgsnap-")
        .suffix(".config")
        .tempfile()
        .map_err(|e| format!("creating scratch file: {e}"))?;
    let path = scratch.path().to_string_lossy().into_owned();

    let output = runner
        .run("choco", &["export", &path, "--include-version-numbers"])
        .await;

    if !output.success() {
        return Err(format!(
            "choco export exited with {}: {}",
            output.exit_code,
            output.stderr.trim()
        ));
    }

    let content = tokio::fs::read_to_string(scratch.path())
        .await
        .map_err(|e| format!("reading export file: {e}"))?;

    parse_export(&content)
}

/// Parse `packages.config`: one record per `package` element with an `id`
/// attribute outside the manager-internal namespace.
fn parse_export(content: &str) -> Result<Vec<PackageRecord>, String> {
    let doc = roxmltree::Document::parse(content)
        .map_err(|e| format!("parsing packages.config: {e}"))?;

    Ok(doc
        .root_element()
        .children()
        .filter(|node| node.has_tag_name("package"))
        .filter_map(|node| {
            let id = node.attribute("id").unwrap_or_default();
            if id.is_empty() || id.starts_with(INTERNAL_PREFIX) {
                return None;
            }
            Some(PackageRecord {
                identifier: Some(id.to_string()),
                display_name: id.to_string(),
                version: node
                    .attribute("version")
                    .unwrap_or(DEFAULT_VERSION)
                    .to_string(),
                source_bucket: None,
            })
        })
        .collect())
}
