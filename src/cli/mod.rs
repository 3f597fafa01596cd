//! Command-line interface for pkgsnap

pub mod args;
pub mod commands;

pub use args::{Cli, Commands};
