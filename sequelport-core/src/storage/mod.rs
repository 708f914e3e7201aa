//! Filesystem side of a migration: backups and destination writes.

pub mod backup;
pub mod writer;

pub use backup::{backup_existing, backup_file, backup_path};
pub use writer::{write_outputs, write_plist};
