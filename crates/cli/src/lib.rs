//! Command-line tools for moving Kibana 4 objects between clusters.
//!
//! Two binaries share this crate:
//! - `copy-kibana-dashboard`: copies a dashboard and its visualizations and
//!   saved searches from one cluster to another.
//! - `import-csv`: bulk-loads CSV rows into a document store as individual
//!   documents.
//!
//! Responsibilities:
//! - Parse command-line arguments and map errors to exit codes.
//! - Drive the shared client library and print per-object progress.
//!
//! Does NOT handle:
//! - REST API implementation or dependency resolution (see `kibana-client`).

pub mod args;
pub mod commands;
pub mod error;
