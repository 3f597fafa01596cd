//! Package source exporters
//!
//! One exporter per package manager, each shelling out to the manager's own
//! bulk-export facility and normalizing the result into `PackageRecord`s.
//! Exporters never abort the run: any invocation or parse failure becomes
//! `ExportOutcome::Failed` and costs at most that one manager's output.

pub mod choco;
pub mod scoop;
pub mod winget;

pub use winget::WingetSource;

/// Version string used when a manager does not report a pinned version
pub const DEFAULT_VERSION: &str = "latest";

/// One discovered package from one manager.
///
/// Constructed once per export pass, never mutated, discarded after the
/// CSV row is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRecord {
    /// Manager-scoped unique identifier; `None` for managers whose export
    /// carries no stable ID (the name then serves as the identifier)
    pub identifier: Option<String>,

    /// Best-known human-readable name
    pub display_name: String,

    /// Installed version, or [`DEFAULT_VERSION`]
    pub version: String,

    /// Named repository bucket, for managers that partition packages
    pub source_bucket: Option<String>,
}

/// Result of one manager's export pass.
///
/// `Exported(vec![])` means the manager ran and reported nothing installed;
/// `Failed` means the export could not run or could not be parsed. The
/// aggregator treats both as "no output file" but can report them apart.
#[derive(Debug)]
pub enum ExportOutcome {
    Exported(Vec<PackageRecord>),
    Failed { reason: String },
}

impl ExportOutcome {
    pub fn records(&self) -> &[PackageRecord] {
        match self {
            Self::Exported(records) => records,
            Self::Failed { .. } => &[],
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}
