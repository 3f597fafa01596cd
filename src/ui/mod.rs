//! UI module for consistent CLI output
//!
//! Uses `cliclack` for styled status lines and `indicatif` for resolution
//! progress, with automatic fallback to plain output in CI/non-interactive
//! environments.

mod context;
mod output;
mod progress;
mod prompts;

pub use context::UiContext;
pub use output::{
    intro, key_value, outro_success, outro_warn, section, step_blocked, step_error_detail,
    step_info, step_ok, step_ok_detail, step_warn_hint,
};
pub use progress::ResolveProgress;
pub use prompts::confirm;
