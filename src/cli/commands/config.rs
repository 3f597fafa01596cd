//! Config command - show, locate, or initialize the configuration file

use crate::cli::args::{ConfigAction, ConfigArgs};
use crate::config::{Config, ConfigManager};
use crate::error::PkgsnapResult;
use crate::ui::{self, UiContext};

/// Execute the config command
pub async fn execute(
    args: ConfigArgs,
    manager: &ConfigManager,
    config: &Config,
) -> PkgsnapResult<()> {
    match args.action.unwrap_or(ConfigAction::Show) {
        ConfigAction::Show => show(manager, config),
        ConfigAction::Path => {
            println!("{}", manager.path().display());
            Ok(())
        }
        ConfigAction::Init { force } => init(manager, force).await,
    }
}

fn show(manager: &ConfigManager, config: &Config) -> PkgsnapResult<()> {
    if manager.path().exists() {
        println!("# {}", manager.path().display());
    } else {
        println!("# defaults (no config file at {})", manager.path().display());
    }
    println!();
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}

async fn init(manager: &ConfigManager, force: bool) -> PkgsnapResult<()> {
    let ctx = UiContext::detect(false);

    if manager.path().exists() && !force {
        ui::step_warn_hint(
            &ctx,
            &format!("Configuration already exists at {}", manager.path().display()),
            "Use --force to overwrite",
        );
        return Ok(());
    }

    manager.save(&Config::default()).await?;
    ui::step_ok_detail(
        &ctx,
        "Default configuration written",
        &manager.path().display().to_string(),
    );
    Ok(())
}
