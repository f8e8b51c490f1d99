//! Cluster endpoint identification.
//!
//! A [`ClusterEndpoint`] names one document-store deployment plus the
//! logical index holding the Kibana objects. Equality over all three fields
//! drives the same-cluster guard in the copy orchestrator.

use std::fmt;

/// Default host for a local Elasticsearch node.
pub const DEFAULT_HOST: &str = "localhost";
/// Default Elasticsearch HTTP port.
pub const DEFAULT_PORT: u16 = 9200;
/// Default index Kibana 4 stores its objects in.
pub const DEFAULT_INDEX: &str = ".kibana";

/// One document-store deployment + logical namespace.
///
/// Immutable once constructed; threaded explicitly through the client and
/// orchestrator rather than held in ambient state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterEndpoint {
    pub host: String,
    pub port: u16,
    pub index: String,
}

impl ClusterEndpoint {
    pub fn new(host: impl Into<String>, port: u16, index: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port,
            index: index.into(),
        }
    }

    /// HTTP origin for this endpoint, e.g. `http://localhost:9200`.
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

impl Default for ClusterEndpoint {
    fn default() -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_PORT, DEFAULT_INDEX)
    }
}

impl fmt::Display for ClusterEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}/{}", self.host, self.port, self.index)
    }
}
