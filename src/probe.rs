//! Package manager availability probing

use crate::exec::CommandRunner;
use std::time::Duration;
use tokio::time::timeout;
use tracing::debug;

/// Upper bound on the scoop shim probe; past this the tool is treated
/// as unavailable rather than blocking the whole run.
const SHIM_PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Check whether a package manager is usable on this host.
///
/// Base check is path resolution. Scoop gets a second look: its CMD shim
/// can resolve on the path yet fail direct invocation, so it is verified
/// through PowerShell before being trusted.
pub async fn is_tool_available(runner: &dyn CommandRunner, tool: &str) -> bool {
    if !runner.can_locate(tool) {
        debug!("{} not found on path", tool);
        return false;
    }

    if tool == "scoop" {
        return shim_responds(runner).await;
    }

    true
}

pub(crate) async fn shim_responds(runner: &dyn CommandRunner) -> bool {
    let probe = runner.run("powershell", &["-Command", "scoop --version"]);
    match timeout(SHIM_PROBE_TIMEOUT, probe).await {
        Ok(output) => output.success(),
        Err(_) => {
            debug!("scoop shim probe timed out");
            false
        }
    }
}
