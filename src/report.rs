//! CSV output boundary
//!
//! Each manager gets its own file and column set, written only when the
//! manager produced at least one record.

use crate::error::{PkgsnapError, PkgsnapResult};
use crate::sources::PackageRecord;
use std::fmt;
use std::path::{Path, PathBuf};

/// The four package managers pkgsnap snapshots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Manager {
    Msstore,
    Winget,
    Scoop,
    Choco,
}

impl Manager {
    /// All managers in pipeline order
    pub fn all() -> &'static [Self] {
        &[Self::Msstore, Self::Winget, Self::Scoop, Self::Choco]
    }

    /// The executable whose presence gates this manager's pipeline.
    /// The Microsoft Store source rides on winget.
    pub fn tool(&self) -> &'static str {
        match self {
            Self::Msstore | Self::Winget => "winget",
            Self::Scoop => "scoop",
            Self::Choco => "choco",
        }
    }

    /// Output file name inside the output directory
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Msstore => "microsoft_store_apps.csv",
            Self::Winget => "winget_apps.csv",
            Self::Scoop => "scoop_apps.csv",
            Self::Choco => "chocolatey_apps.csv",
        }
    }

    /// CSV header row
    pub fn headers(&self) -> &'static [&'static str] {
        match self {
            Self::Msstore | Self::Winget => &["PackageId", "Name", "Version"],
            Self::Scoop => &["Name", "Version", "Source"],
            Self::Choco => &["PackageId", "Title", "Version"],
        }
    }

    /// Full output path for this manager's report
    pub fn output_path(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(self.file_name())
    }

    /// Project a record into this manager's column order
    fn row(&self, record: &PackageRecord) -> Vec<String> {
        let id = record.identifier.clone().unwrap_or_default();
        match self {
            Self::Msstore | Self::Winget | Self::Choco => {
                vec![id, record.display_name.clone(), record.version.clone()]
            }
            Self::Scoop => vec![
                record.display_name.clone(),
                record.version.clone(),
                record.source_bucket.clone().unwrap_or_default(),
            ],
        }
    }
}

impl fmt::Display for Manager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Msstore => "Microsoft Store",
            Self::Winget => "Winget",
            Self::Scoop => "Scoop",
            Self::Choco => "Chocolatey",
        };
        f.write_str(name)
    }
}

/// Write one manager's records to its CSV file.
///
/// Callers skip this entirely for empty record lists, so an empty file is
/// never produced.
pub fn write_report(
    manager: Manager,
    output_dir: &Path,
    records: &[PackageRecord],
) -> PkgsnapResult<()> {
    let path = manager.output_path(output_dir);
    let mut writer =
        csv::Writer::from_path(&path).map_err(|e| PkgsnapError::report_write(&path, e))?;

    writer
        .write_record(manager.headers())
        .map_err(|e| PkgsnapError::report_write(&path, e))?;

    for record in records {
        writer
            .write_record(manager.row(record))
            .map_err(|e| PkgsnapError::report_write(&path, e))?;
    }

    writer
        .flush()
        .map_err(|e| PkgsnapError::io(format!("flushing {}", path.display()), e))?;

    Ok(())
}
