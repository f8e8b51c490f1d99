//! Command implementations for the two binaries.

pub mod copy_dashboard;
pub mod import_csv;
