//! Pkgsnap - Installed Package Snapshots
//!
//! Inventories packages installed through winget, the Microsoft Store,
//! Scoop, and Chocolatey into per-manager CSV files, with a JSON cache
//! for resolved display names.

pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod exec;
pub mod probe;
pub mod report;
pub mod resolve;
pub mod sources;
pub mod ui;

pub use error::{PkgsnapError, PkgsnapResult};
