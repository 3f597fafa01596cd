//! Export command - snapshot installed packages to CSV
//!
//! The aggregator: for each enabled manager, probe availability, run the
//! exporter, and write the CSV. Every manager's pipeline is isolated; a
//! failure costs that manager's file and nothing else, so the run always
//! completes and reports whatever output actually exists.

use crate::cache::NameCache;
use crate::cli::args::ExportArgs;
use crate::config::Config;
use crate::error::{PkgsnapError, PkgsnapResult};
use crate::exec::{CommandRunner, SystemRunner};
use crate::probe;
use crate::report::{self, Manager};
use crate::sources::{self, ExportOutcome, WingetSource};
use crate::ui::{self, UiContext};
use std::path::Path;
use tokio::fs;
use tracing::{info, warn};

/// Execute the export command
pub async fn execute(args: ExportArgs, config: &Config) -> PkgsnapResult<()> {
    let ctx = UiContext::detect(false);
    let output_dir = args
        .output
        .clone()
        .unwrap_or_else(|| config.output.dir.clone());

    fs::create_dir_all(&output_dir)
        .await
        .map_err(|e| PkgsnapError::OutputDirCreate {
            path: output_dir.clone(),
            source: e,
        })?;

    ui::intro(&ctx, "pkgsnap export");
    let shown = output_dir
        .canonicalize()
        .unwrap_or_else(|_| output_dir.clone());
    ui::key_value(&ctx, "Output directory", &shown.display().to_string());

    let managers = selected_managers(&args, config);
    let runner = SystemRunner::new();
    let cache = NameCache::new(&output_dir);

    run_pipeline(&runner, &managers, &cache, &output_dir, &ctx).await;

    // Report what is actually on disk; partial output is acceptable.
    let produced: Vec<&str> = Manager::all()
        .iter()
        .filter(|m| m.output_path(&output_dir).exists())
        .map(|m| m.file_name())
        .collect();

    if produced.is_empty() {
        ui::outro_warn(&ctx, "No output files were produced");
    } else {
        ui::section(&ctx, "Output files");
        for name in &produced {
            ui::step_ok(&ctx, name);
        }
        ui::outro_success(&ctx, &format!("{} file(s) in place", produced.len()));
    }

    Ok(())
}

/// Managers to run: the --manager subset if given, otherwise everything
/// enabled in the config, in fixed pipeline order.
fn selected_managers(args: &ExportArgs, config: &Config) -> Vec<Manager> {
    Manager::all()
        .iter()
        .copied()
        .filter(|m| {
            if args.manager.is_empty() {
                config.managers.is_enabled(*m)
            } else {
                args.manager.iter().any(|a| Manager::from(*a) == *m)
            }
        })
        .collect()
}

/// Run each manager's pipeline sequentially: probe, export, write.
pub(crate) async fn run_pipeline(
    runner: &dyn CommandRunner,
    managers: &[Manager],
    cache: &NameCache,
    output_dir: &Path,
    ctx: &UiContext,
) {
    for manager in managers {
        ui::section(ctx, &format!("{} packages", manager));

        if !probe::is_tool_available(runner, manager.tool()).await {
            ui::step_blocked(ctx, &manager.to_string(), manager.tool());
            continue;
        }

        let outcome = match manager {
            Manager::Msstore => {
                sources::winget::export(runner, WingetSource::Msstore, cache, ctx).await
            }
            Manager::Winget => {
                sources::winget::export(runner, WingetSource::Winget, cache, ctx).await
            }
            Manager::Scoop => sources::scoop::export(runner).await,
            Manager::Choco => sources::choco::export(runner).await,
        };

        match outcome {
            ExportOutcome::Failed { reason } => {
                ui::step_warn_hint(ctx, &format!("{} export failed", manager), &reason);
            }
            ExportOutcome::Exported(records) if records.is_empty() => {
                ui::step_info(ctx, "No packages found");
            }
            ExportOutcome::Exported(records) => {
                info!("{}: {} package(s)", manager, records.len());
                match report::write_report(*manager, output_dir, &records) {
                    Ok(()) => ui::step_ok_detail(
                        ctx,
                        &format!("{} package(s)", records.len()),
                        manager.file_name(),
                    ),
                    Err(e) => {
                        // One lost file, not a lost run
                        warn!("{}", e);
                        ui::step_error_detail(
                            ctx,
                            &format!("Could not write {}", manager.file_name()),
                            &e.to_string(),
                        );
                    }
                }
            }
        }
    }
}
