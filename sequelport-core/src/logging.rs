//! Tracing span names shared by the pipeline stages.
//!
//! Subscribers are installed by the binary; the library only emits events.

/// Span names used with `info_span!`
pub mod span_names {
    /// Whole migration run
    pub const MIGRATE_RUN: &str = "migrate.run";
    /// Copying existing destination files aside
    pub const STORAGE_BACKUP: &str = "storage.backup";
    /// Reading and classifying the source favorites
    pub const IMPORT_LOAD: &str = "import.load";
    /// Walking the favorites tree
    pub const IMPORT_FLATTEN: &str = "import.flatten";
    /// Collecting distinct group names
    pub const IMPORT_GROUPS: &str = "import.groups";
    /// Translating favorites into TablePlus connections
    pub const EXPORT_MAP: &str = "export.map";
    /// Writing destination property lists
    pub const STORAGE_WRITE: &str = "storage.write";
}
