//! Display-name resolution via `winget show`
//!
//! `winget export` emits machine identifiers only; the human-readable name
//! comes from a per-package `winget show` lookup. That lookup is expensive,
//! so results go through `NameCache` first.

use crate::cache::NameCache;
use crate::exec::CommandRunner;
use tracing::debug;

/// Localized prefixes `winget show` prints before the matched name.
/// Other locales fall through: the whole prefix text is used verbatim.
const FOUND_PREFIXES: [&str; 2] = ["見つかりました", "Found"];

/// Resolves package identifiers to display names
pub struct NameResolver<'a> {
    runner: &'a dyn CommandRunner,
}

impl<'a> NameResolver<'a> {
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        Self { runner }
    }

    /// Resolve a display name, cache first.
    ///
    /// A miss always ends in a cache write, including for derived
    /// fallbacks, so packages whose name can never be resolved are not
    /// looked up again on every run.
    pub async fn resolve(&self, identifier: &str, cache: Option<&NameCache>) -> String {
        if let Some(cache) = cache {
            if let Some(entry) = cache.lookup(identifier).await {
                debug!("Cache hit: {} -> {}", identifier, entry.display_name);
                return entry.display_name;
            }
        }

        let output = self
            .runner
            .run("winget", &["show", identifier, "--disable-interactivity"])
            .await;

        let name = if output.success() {
            parse_show_output(identifier, &output.stdout)
                .unwrap_or_else(|| derive_name(identifier).to_string())
        } else {
            debug!(
                "winget show failed for {} (exit {})",
                identifier, output.exit_code
            );
            derive_name(identifier).to_string()
        };

        if let Some(cache) = cache {
            cache.store(identifier, &name).await;
        }

        name
    }
}

/// Extract the display name from `winget show` output.
///
/// The match line looks like `Found Visual Studio Code [Microsoft.VisualStudioCode]`;
/// everything before the bracketed identifier, with a localized "found"
/// prefix stripped, is the name.
fn parse_show_output(identifier: &str, stdout: &str) -> Option<String> {
    let needle = format!("[{identifier}]");
    let (line, pos) = stdout
        .lines()
        .find_map(|line| line.find(&needle).map(|pos| (line, pos)))?;

    let before = line[..pos].trim();
    let name = FOUND_PREFIXES
        .iter()
        .find_map(|prefix| before.strip_prefix(prefix))
        .unwrap_or(before)
        .trim();

    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Fallback name: the segment after the last `.`, or the identifier itself
fn derive_name(identifier: &str) -> &str {
    match identifier.rsplit_once('.') {
        Some((_, last)) => last,
        None => identifier,
    }
}
