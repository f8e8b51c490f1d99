//! Dependency resolution: dashboard → visualizations → saved searches.
//!
//! A dashboard body embeds its panel layout as a JSON-encoded string in
//! `panelsJSON`; each panel names one visualization by id. A visualization
//! body may in turn name a saved search via `savedSearchId`.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{ClientError, Result};
use crate::models::{StoredObject, saved_search_id};

/// One entry in a dashboard's panel layout. Only the referenced
/// visualization id matters here; layout fields are ignored.
#[derive(Debug, Deserialize)]
struct Panel {
    id: String,
}

/// Extract the visualization ids a dashboard references, in document order,
/// duplicates preserved.
///
/// The dashboard is the root of the copy, so a missing `panelsJSON`, invalid
/// JSON, or a panel without an `id` is fatal for the whole run.
pub fn visualization_ids(dashboard_body: &Value) -> Result<Vec<String>> {
    let panels_json = dashboard_body
        .get("panelsJSON")
        .and_then(Value::as_str)
        .ok_or_else(|| ClientError::MalformedPanels("missing panelsJSON field".to_string()))?;

    let panels: Vec<Panel> = serde_json::from_str(panels_json)
        .map_err(|e| ClientError::MalformedPanels(e.to_string()))?;

    Ok(panels.into_iter().map(|panel| panel.id).collect())
}

/// Collect the non-null `savedSearchId`s of a batch of visualizations, in
/// fetch order. Deduplication is the caller's concern.
pub fn saved_search_ids(visualizations: &[StoredObject]) -> Vec<String> {
    visualizations
        .iter()
        .filter_map(|vis| saved_search_id(&vis.source))
        .map(str::to_string)
        .collect()
}
