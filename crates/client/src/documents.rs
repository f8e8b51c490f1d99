//! Document-store REST operations.
//!
//! Free async functions over a shared `reqwest::Client` and a
//! [`ClusterEndpoint`], plus the [`StoreClient`] wrapper that binds the two
//! together for one cluster.
//!
//! No operation retries. Each [`StoreClient`] owns one `reqwest::Client`
//! whose connection pool is reused for every call against that cluster and
//! released when the client value goes out of scope.

use reqwest::Client;
use serde_json::{Value, json};
use tracing::debug;

use crate::endpoint::ClusterEndpoint;
use crate::error::{ClientError, Result};
use crate::models::{GetDocResponse, ObjectType, SearchResponse, StoredObject, WriteOutcome};
use crate::url_encoding::encode_path_segment;

/// Page size for batched id lookups. Results past this cap are silently
/// dropped; there is no pagination.
pub const SEARCH_PAGE_SIZE: usize = 1000;

/// Fetch a single document by id.
///
/// 404 maps to [`ClientError::NotFound`]; any other non-2xx status maps to
/// [`ClientError::Api`] with the numeric code and response body.
pub async fn get_document(
    http: &Client,
    endpoint: &ClusterEndpoint,
    doc_type: &str,
    id: &str,
) -> Result<StoredObject> {
    let url = format!(
        "{}/{}/{}/{}",
        endpoint.base_url(),
        endpoint.index,
        doc_type,
        encode_path_segment(id)
    );
    debug!(%url, "GET document");

    let response = http.get(&url).send().await?;
    if response.status().as_u16() == 404 {
        return Err(ClientError::NotFound(format!("{doc_type} {id}")));
    }
    let response = check_status(response).await?;

    let doc: GetDocResponse = response.json().await?;
    Ok(doc.into())
}

/// Fetch all documents matching a list of ids in one batched query.
///
/// Empty `ids` short-circuits to an empty result without making a request;
/// the store rejects an empty id filter.
pub async fn search_by_ids(
    http: &Client,
    endpoint: &ClusterEndpoint,
    doc_type: &str,
    ids: &[String],
    limit: usize,
) -> Result<Vec<StoredObject>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let url = format!("{}/{}/{}/_search", endpoint.base_url(), endpoint.index, doc_type);
    let query = json!({
        "from": 0,
        "size": limit,
        "query": {"filtered": {"filter": {"ids": {"values": ids}}}}
    });
    debug!(%url, count = ids.len(), "searching by ids");

    let response = http.post(&url).json(&query).send().await?;
    let response = check_status(response).await?;

    let resp: SearchResponse = response.json().await?;
    Ok(resp.hits.hits.into_iter().map(StoredObject::from).collect())
}

/// Write a document under a caller-supplied id.
///
/// PUT-by-id semantics: 201 means the document was created, 200 means an
/// existing document was overwritten. Never merges.
pub async fn put_document(
    http: &Client,
    endpoint: &ClusterEndpoint,
    doc_type: &str,
    id: &str,
    body: &Value,
) -> Result<WriteOutcome> {
    let url = format!(
        "{}/{}/{}/{}",
        endpoint.base_url(),
        endpoint.index,
        doc_type,
        encode_path_segment(id)
    );
    debug!(%url, "PUT document");

    let response = http.put(&url).json(body).send().await?;
    match response.status().as_u16() {
        200 => Ok(WriteOutcome::Updated),
        201 => Ok(WriteOutcome::Created),
        _ => Err(api_error(response).await),
    }
}

/// Create a document without an id; the store assigns one.
///
/// Used by the CSV loader, which has no identity to preserve. Only 201
/// counts as success.
pub async fn create_document(
    http: &Client,
    endpoint: &ClusterEndpoint,
    doc_type: &str,
    body: &Value,
) -> Result<()> {
    let url = format!("{}/{}/{}/", endpoint.base_url(), endpoint.index, doc_type);

    let response = http.post(&url).json(body).send().await?;
    if response.status().as_u16() == 201 {
        Ok(())
    } else {
        Err(api_error(response).await)
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(api_error(response).await)
    }
}

async fn api_error(response: reqwest::Response) -> ClientError {
    let status = response.status().as_u16();
    let url = response.url().to_string();
    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "could not read error response body".to_string());
    ClientError::Api {
        status,
        url,
        message,
    }
}

/// REST client bound to one cluster endpoint.
#[derive(Debug, Clone)]
pub struct StoreClient {
    http: Client,
    endpoint: ClusterEndpoint,
}

impl StoreClient {
    pub fn new(endpoint: ClusterEndpoint) -> Self {
        Self {
            http: Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &ClusterEndpoint {
        &self.endpoint
    }

    /// Fetch one saved object by id.
    pub async fn get_document(&self, object_type: ObjectType, id: &str) -> Result<StoredObject> {
        get_document(&self.http, &self.endpoint, object_type.as_str(), id).await
    }

    /// Fetch all saved objects matching `ids` in one round trip.
    pub async fn search_by_ids(
        &self,
        object_type: ObjectType,
        ids: &[String],
    ) -> Result<Vec<StoredObject>> {
        search_by_ids(
            &self.http,
            &self.endpoint,
            object_type.as_str(),
            ids,
            SEARCH_PAGE_SIZE,
        )
        .await
    }

    /// Upsert one saved object under its original id.
    pub async fn put_document(
        &self,
        object_type: ObjectType,
        id: &str,
        body: &Value,
    ) -> Result<WriteOutcome> {
        put_document(&self.http, &self.endpoint, object_type.as_str(), id, body).await
    }

    /// Create a document of an arbitrary type with a store-assigned id.
    pub async fn create_document(&self, doc_type: &str, body: &Value) -> Result<()> {
        create_document(&self.http, &self.endpoint, doc_type, body).await
    }
}
