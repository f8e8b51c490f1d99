//! Saved-object models and wire envelopes.
//!
//! The store wraps every document in an envelope (`_id`, `_type`, version
//! metadata). Only `_id` and `_source` are kept; everything else is
//! discarded at deserialization time.

use std::fmt;

use serde::Deserialize;
use serde_json::Value;

/// The three Kibana 4 saved-object types this tool copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectType {
    Dashboard,
    Visualization,
    Search,
}

impl ObjectType {
    /// The type path segment used by the store's REST API.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Visualization => "visualization",
            Self::Search => "search",
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A document fetched from the store, stripped down to its stable id and
/// opaque JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredObject {
    pub id: String,
    pub source: Value,
}

/// Outcome of a PUT-by-id write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// HTTP 201: the document did not exist before.
    Created,
    /// HTTP 200: an existing document was overwritten.
    Updated,
}

impl fmt::Display for WriteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => f.write_str("created"),
            Self::Updated => f.write_str("updated"),
        }
    }
}

/// Envelope of a GET `/{index}/{type}/{id}` response.
#[derive(Debug, Deserialize)]
pub(crate) struct GetDocResponse {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_source")]
    pub source: Value,
}

/// Envelope of a POST `/{index}/{type}/_search` response.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    pub hits: SearchHits,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchHits {
    pub hits: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchHit {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_source")]
    pub source: Value,
}

impl From<GetDocResponse> for StoredObject {
    fn from(doc: GetDocResponse) -> Self {
        Self {
            id: doc.id,
            source: doc.source,
        }
    }
}

impl From<SearchHit> for StoredObject {
    fn from(hit: SearchHit) -> Self {
        Self {
            id: hit.id,
            source: hit.source,
        }
    }
}

/// Read a visualization body's nullable `savedSearchId` field.
pub fn saved_search_id(body: &Value) -> Option<&str> {
    body.get("savedSearchId").and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_object_type_path_segments() {
        assert_eq!(ObjectType::Dashboard.as_str(), "dashboard");
        assert_eq!(ObjectType::Visualization.as_str(), "visualization");
        assert_eq!(ObjectType::Search.as_str(), "search");
    }

    #[test]
    fn test_get_doc_envelope_strips_metadata() {
        let raw = json!({
            "_index": ".kibana",
            "_type": "dashboard",
            "_id": "d1",
            "_version": 3,
            "found": true,
            "_source": {"title": "My Dashboard"}
        });
        let doc: GetDocResponse = serde_json::from_value(raw).unwrap();
        let obj = StoredObject::from(doc);
        assert_eq!(obj.id, "d1");
        assert_eq!(obj.source, json!({"title": "My Dashboard"}));
    }

    #[test]
    fn test_search_envelope_hits_in_order() {
        let raw = json!({
            "took": 2,
            "hits": {
                "total": 2,
                "hits": [
                    {"_id": "v1", "_source": {"title": "one"}},
                    {"_id": "v2", "_source": {"title": "two"}}
                ]
            }
        });
        let resp: SearchResponse = serde_json::from_value(raw).unwrap();
        let ids: Vec<_> = resp.hits.hits.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, ["v1", "v2"]);
    }

    #[test]
    fn test_saved_search_id_accessor() {
        assert_eq!(
            saved_search_id(&json!({"savedSearchId": "s1"})),
            Some("s1")
        );
        assert_eq!(saved_search_id(&json!({"savedSearchId": null})), None);
        assert_eq!(saved_search_id(&json!({"title": "no search"})), None);
    }
}
