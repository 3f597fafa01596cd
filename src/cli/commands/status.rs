//! Status command - report which package managers are usable

use crate::config::Config;
use crate::error::PkgsnapResult;
use crate::exec::SystemRunner;
use crate::probe;
use console::{style, Emoji};

static CHECK: Emoji<'_, '_> = Emoji("✓ ", "[OK] ");
static CROSS: Emoji<'_, '_> = Emoji("✗ ", "[--] ");

/// Tools probed, the sources they cover, and an install pointer
const TOOLS: [(&str, &str, &str); 3] = [
    (
        "winget",
        "Winget, Microsoft Store",
        "ships with Windows App Installer",
    ),
    ("scoop", "Scoop", "https://scoop.sh"),
    ("choco", "Chocolatey", "https://chocolatey.org/install"),
];

/// Execute the status command
pub async fn execute(config: &Config) -> PkgsnapResult<()> {
    println!("{}", style("Package manager status").bold().cyan());
    println!();

    let runner = SystemRunner::new();
    let mut available = 0;

    for (tool, covers, install_hint) in TOOLS {
        if probe::is_tool_available(&runner, tool).await {
            available += 1;
            println!("  {} {} - {}", CHECK, style(tool).green(), covers);
        } else {
            println!(
                "  {} {} - not usable. Install: {}",
                CROSS,
                style(tool).yellow(),
                install_hint
            );
        }
    }

    println!();
    println!(
        "Output directory: {}",
        style(config.output.dir.display()).dim()
    );

    if available == 0 {
        println!(
            "{}",
            style("No package managers found - an export would produce nothing")
                .yellow()
                .bold()
        );
    } else {
        println!(
            "{}",
            style(format!("{} of {} tool(s) usable", available, TOOLS.len()))
                .green()
                .bold()
        );
    }

    Ok(())
}
