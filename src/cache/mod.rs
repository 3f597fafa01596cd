//! Persistent display-name cache
//!
//! `winget show` lookups are slow (one process spawn and network round trip
//! per package), so resolved names are cached in a JSON file that lives next
//! to the CSV output. The file is plain serde JSON, stably ordered, and
//! hand-editable: deleting an entry forces re-resolution on the next run.

pub mod store;

pub use store::{CacheEntry, NameCache, CACHE_FILE_NAME};
