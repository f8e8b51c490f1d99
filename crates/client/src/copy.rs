//! End-to-end dashboard copy orchestration.
//!
//! Drives the three phases — dashboard, visualizations, saved searches —
//! strictly sequentially against a source and destination cluster. Every
//! write outcome is recorded per object; only a missing/corrupt root
//! dashboard or a failed batched fetch aborts the run. Nothing is rolled
//! back on partial failure: the destination may hold a subset, and an
//! idempotent re-run completes it.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::documents::StoreClient;
use crate::error::{ClientError, Result};
use crate::map::to_id_map;
use crate::models::{ObjectType, WriteOutcome};
use crate::resolve;
use crate::rewrite::rewrite_search_index;

/// Options for a single copy run.
#[derive(Debug, Clone, Default)]
pub struct CopyOptions {
    /// When set, every copied saved search has its backing data index
    /// rewritten to this name in transit.
    pub saved_search_index: Option<String>,
}

/// The recorded result of one object's copy.
#[derive(Debug)]
pub struct CopyOutcome {
    pub object_type: ObjectType,
    pub id: String,
    pub result: Result<WriteOutcome>,
}

/// Per-object outcomes of a whole run, in write order.
#[derive(Debug, Default)]
pub struct CopyReport {
    pub outcomes: Vec<CopyOutcome>,
}

impl CopyReport {
    /// Number of objects written to the destination.
    pub fn written(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    /// Number of objects that failed or were skipped with an error.
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.written()
    }
}

/// Copy a dashboard and its dependency graph from `source` to `dest`,
/// preserving every object's original id.
///
/// `progress` is invoked once per recorded outcome, as it happens, so a
/// caller can report object-by-object.
pub async fn copy_dashboard(
    source: &StoreClient,
    dest: &StoreClient,
    dashboard_id: &str,
    options: &CopyOptions,
    mut progress: impl FnMut(&CopyOutcome),
) -> Result<CopyReport> {
    // Guard before any network I/O.
    if source.endpoint() == dest.endpoint() {
        return Err(ClientError::SameCluster);
    }

    let mut report = CopyReport::default();
    let mut record = |object_type, id: String, result| {
        let outcome = CopyOutcome {
            object_type,
            id,
            result,
        };
        if let Err(e) = &outcome.result {
            warn!(object_type = %outcome.object_type, id = %outcome.id, error = %e, "copy failed");
        }
        progress(&outcome);
        report.outcomes.push(outcome);
    };

    // Dashboard phase. No dashboard, nothing to copy.
    let dashboard = source
        .get_document(ObjectType::Dashboard, dashboard_id)
        .await?;
    let result = dest
        .put_document(ObjectType::Dashboard, &dashboard.id, &dashboard.source)
        .await;
    record(ObjectType::Dashboard, dashboard.id.clone(), result);

    // Visualization phase.
    let vis_ids = resolve::visualization_ids(&dashboard.source)?;
    debug!(count = vis_ids.len(), "resolved visualization ids");
    let visualizations = source
        .search_by_ids(ObjectType::Visualization, &vis_ids)
        .await?;
    let search_ids = resolve::saved_search_ids(&visualizations);
    let mut vis_map = to_id_map(visualizations);

    for id in dedup_in_order(&vis_ids) {
        match vis_map.remove(&id) {
            Some(body) => {
                let result = dest
                    .put_document(ObjectType::Visualization, &id, &body)
                    .await;
                record(ObjectType::Visualization, id, result);
            }
            // The panel references a visualization the source no longer
            // has. That id fails; the run continues.
            None => record(
                ObjectType::Visualization,
                id.clone(),
                Err(ClientError::NotFound(format!("visualization {id}"))),
            ),
        }
    }

    // Saved-search phase.
    debug!(count = search_ids.len(), "resolved saved-search ids");
    let searches = source.search_by_ids(ObjectType::Search, &search_ids).await?;
    let mut search_map = to_id_map(searches);

    for id in dedup_in_order(&search_ids) {
        // A saved search absent at the source is tolerated silently.
        let Some(mut body) = search_map.remove(&id) else {
            continue;
        };
        if let Some(new_index) = &options.saved_search_index {
            if let Err(e) = rewrite_search_index(&mut body, new_index) {
                record(ObjectType::Search, id, Err(e));
                continue;
            }
        }
        let result = dest.put_document(ObjectType::Search, &id, &body).await;
        record(ObjectType::Search, id, result);
    }

    Ok(report)
}

/// Deduplicate resolved ids, keeping first-occurrence order so writes are
/// deterministic.
fn dedup_in_order(ids: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    ids.iter()
        .filter(|id| seen.insert(id.as_str()))
        .cloned()
        .collect()
}
