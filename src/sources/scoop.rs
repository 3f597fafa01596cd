//! Scoop exporter
//!
//! `scoop export` writes its JSON snapshot to stdout, and the app entries
//! already carry usable names, so there is no scratch file and no display
//! name resolution here. Scoop is invoked through PowerShell because its
//! CMD shim cannot reliably be spawned directly.

use super::{ExportOutcome, PackageRecord, DEFAULT_VERSION};
use crate::exec::CommandRunner;
use serde::Deserialize;
use tracing::warn;

#[derive(Deserialize)]
struct ScoopExport {
    #[serde(default)]
    apps: Vec<ScoopApp>,
}

#[derive(Deserialize)]
struct ScoopApp {
    #[serde(rename = "Name", default)]
    name: String,

    #[serde(rename = "Version")]
    version: Option<String>,

    #[serde(rename = "Source")]
    source: Option<String>,
}

/// Export installed Scoop apps with their bucket of origin.
pub async fn export(runner: &dyn CommandRunner) -> ExportOutcome {
    let output = runner.run("powershell", &["-Command", "scoop export"]).await;

    if !output.success() {
        let reason = format!(
            "scoop export exited with {}: {}",
            output.exit_code,
            output.stderr.trim()
        );
        warn!("{}", reason);
        return ExportOutcome::Failed { reason };
    }

    match parse_export(&output.stdout) {
        Ok(records) => ExportOutcome::Exported(records),
        Err(reason) => {
            warn!("scoop export unparsable: {}", reason);
            ExportOutcome::Failed { reason }
        }
    }
}

/// Parse the `apps` list; entries with an empty name are skipped.
fn parse_export(stdout: &str) -> Result<Vec<PackageRecord>, String> {
    let export: ScoopExport =
        serde_json::from_str(stdout).map_err(|e| format!("parsing scoop JSON: {e}"))?;

    Ok(export
        .apps
        .into_iter()
        .filter(|app| !app.name.is_empty())
        .map(|app| PackageRecord {
            identifier: None,
            display_name: app.name,
            version: app.version.unwrap_or_else(|| DEFAULT_VERSION.to_string()),
            source_bucket: Some(app.source.unwrap_or_else(|| "main".to_string())),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::testing::ScriptedRunner;
    use crate::exec::CommandOutput;

    const SCOOP_JSON: &str = r#"{
        "buckets": [{"Name": "main"}],
        "apps": [
            {"Name": "ripgrep", "Version": "14.1.0", "Source": "main"},
            {"Name": "neovim", "Version": "0.10.0", "Source": "extras"},
            {"Name": "", "Version": "1.0", "Source": "main"},
            {"Name": "mystery"}
        ]
    }"#;

    #[test]
    fn parse_skips_empty_names_and_defaults() {
        let records = parse_export(SCOOP_JSON).unwrap();
        assert_eq!(records.len(), 3);

        assert_eq!(records[0].display_name, "ripgrep");
        assert_eq!(records[0].version, "14.1.0");
        assert_eq!(records[0].source_bucket.as_deref(), Some("main"));
        assert!(records[0].identifier.is_none());

        assert_eq!(records[1].source_bucket.as_deref(), Some("extras"));

        assert_eq!(records[2].display_name, "mystery");
        assert_eq!(records[2].version, DEFAULT_VERSION);
        assert_eq!(records[2].source_bucket.as_deref(), Some("main"));
    }

    #[test]
    fn parse_rejects_malformed_json() {
        assert!(parse_export("not json").is_err());
    }

    #[tokio::test]
    async fn export_reads_stdout() {
        let runner = ScriptedRunner::new().on("powershell", |_| CommandOutput {
            stdout: SCOOP_JSON.to_string(),
            stderr: String::new(),
            exit_code: 0,
        });

        let outcome = export(&runner).await;
        assert_eq!(outcome.records().len(), 3);
        assert_eq!(runner.call_count("powershell -Command scoop export"), 1);
    }

    #[tokio::test]
    async fn export_failure_yields_failed_outcome() {
        let runner =
            ScriptedRunner::new().on("powershell", |_| CommandOutput::failure("shim broken"));

        let outcome = export(&runner).await;
        assert!(outcome.is_failed());
    }
}
