//! Progress indicators with CI fallback

use super::context::UiContext;
use indicatif::{ProgressBar, ProgressStyle};

/// Progress for display-name resolution.
///
/// Totals count only cache misses, so a warm cache shows nothing at all
/// rather than a bar that fills instantly. Interactive terminals get an
/// indicatif bar; CI gets one plain line per lookup.
pub struct ResolveProgress {
    bar: Option<ProgressBar>,
    total: usize,
    seen: usize,
}

impl ResolveProgress {
    /// Create a progress indicator for `pending` upcoming lookups
    pub fn new(ctx: &UiContext, label: &str, pending: usize) -> Self {
        if pending == 0 {
            return Self {
                bar: None,
                total: 0,
                seen: 0,
            };
        }

        let bar = if ctx.use_fancy_output() {
            let bar = ProgressBar::new(pending as u64);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template("  {spinner:.cyan} Resolving {prefix}  {bar:20.cyan/dim} {pos}/{len} {msg:.dim}")
                    .unwrap()
                    .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
                    .progress_chars("━╸─"),
            );
            bar.set_prefix(label.to_string());
            bar.enable_steady_tick(std::time::Duration::from_millis(120));
            Some(bar)
        } else {
            println!("Resolving {} new name(s) for {}...", pending, label);
            None
        };

        Self {
            bar,
            total: pending,
            seen: 0,
        }
    }

    /// Record one cache-miss lookup about to run
    pub fn on_lookup(&mut self, identifier: &str) {
        self.seen += 1;
        if let Some(ref bar) = self.bar {
            bar.set_position(self.seen as u64);
            bar.set_message(identifier.to_string());
        } else {
            println!("  [{}/{}] {}", self.seen, self.total, identifier);
        }
    }

    /// Finish and clear the progress bar
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.disable_steady_tick();
            bar.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_non_interactive() {
        let ctx = UiContext::non_interactive();
        let mut progress = ResolveProgress::new(&ctx, "winget", 2);
        progress.on_lookup("Foo.Bar");
        progress.on_lookup("Baz.Qux");
        progress.finish();
        // Should not panic
    }

    #[test]
    fn progress_with_nothing_pending() {
        let ctx = UiContext::non_interactive();
        let mut progress = ResolveProgress::new(&ctx, "msstore", 0);
        progress.on_lookup("unexpected");
        progress.finish();
    }
}
