//! Terminal capability detection

use std::io::IsTerminal;

/// Decides how much terminal decoration command output gets and whether
/// prompts may be shown. pkgsnap asks exactly one question (cache clear),
/// so auto-approval is a construction-time fact, not mutable state.
#[derive(Debug, Clone, Copy)]
pub struct UiContext {
    interactive: bool,
    auto_yes: bool,
}

impl UiContext {
    /// Detect terminal capabilities. `auto_yes` answers the confirmation
    /// prompt without showing it.
    ///
    /// Interactive requires stdout and stdin on a terminal with `CI` unset;
    /// anything else (pipes, redirects, CI runners) gets plain output.
    pub fn detect(auto_yes: bool) -> Self {
        let interactive = std::io::stdout().is_terminal()
            && std::io::stdin().is_terminal()
            && std::env::var_os("CI").is_none();

        Self {
            interactive,
            auto_yes,
        }
    }

    /// Plain-output context with prompts falling back to their defaults
    pub fn non_interactive() -> Self {
        Self {
            interactive: false,
            auto_yes: false,
        }
    }

    /// Plain-output context that auto-approves prompts
    pub fn auto_approving() -> Self {
        Self {
            interactive: false,
            auto_yes: true,
        }
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    pub fn auto_yes(&self) -> bool {
        self.auto_yes
    }

    /// Fancy output means cliclack status lines and indicatif bars
    pub fn use_fancy_output(&self) -> bool {
        self.interactive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_interactive_disables_decoration_and_approval() {
        let ctx = UiContext::non_interactive();
        assert!(!ctx.is_interactive());
        assert!(!ctx.use_fancy_output());
        assert!(!ctx.auto_yes());
    }

    #[test]
    fn auto_approving_stays_plain() {
        let ctx = UiContext::auto_approving();
        assert!(ctx.auto_yes());
        assert!(!ctx.use_fancy_output());
    }

    #[test]
    fn detect_carries_auto_yes_through() {
        assert!(UiContext::detect(true).auto_yes());
        assert!(!UiContext::detect(false).auto_yes());
    }
}
