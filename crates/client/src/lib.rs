//! Elasticsearch document-store client for Kibana 4 saved objects.
//!
//! This crate provides a small typed client for reading and writing the
//! dashboard, visualization, and saved-search documents that Kibana 4 keeps
//! in an Elasticsearch index, plus the dependency resolution and copy
//! orchestration used to move a dashboard between clusters.

pub mod copy;
pub mod documents;
pub mod endpoint;
pub mod error;
pub mod map;
pub mod models;
pub mod resolve;
pub mod rewrite;
pub mod url_encoding;

pub use copy::{CopyOptions, CopyOutcome, CopyReport, copy_dashboard};
pub use documents::StoreClient;
pub use endpoint::ClusterEndpoint;
pub use error::{ClientError, Result};
pub use map::to_id_map;
pub use models::{ObjectType, StoredObject, WriteOutcome};
