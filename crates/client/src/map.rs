//! Object mapper: fetched envelopes to an id → body lookup table.

use std::collections::HashMap;

use serde_json::Value;

use crate::models::StoredObject;

/// Convert a batch of fetched objects into an id → body map.
///
/// Pure function, no I/O. Duplicate ids are last-write-wins; the store
/// should never return them, and nothing guards against it here.
pub fn to_id_map(objects: Vec<StoredObject>) -> HashMap<String, Value> {
    objects
        .into_iter()
        .map(|obj| (obj.id, obj.source))
        .collect()
}
