//! Targeted rewrite of a saved search's backing index.
//!
//! A saved-search body carries its query definition as a JSON-encoded
//! string under `kibanaSavedObjectMeta.searchSourceJSON`, whose `index` key
//! names the data index the search runs against. When copying to a cluster
//! whose data lives under a different index name, only that one value is
//! replaced; every other key, nested and outer, is left untouched.

use serde_json::Value;

use crate::error::{ClientError, Result};

/// Replace the `index` value inside `kibanaSavedObjectMeta.searchSourceJSON`
/// and re-serialize the field in place.
///
/// Fails with [`ClientError::MalformedSearchSource`] when the nested field
/// is absent or not valid JSON; the caller skips that one search and
/// continues.
pub fn rewrite_search_index(body: &mut Value, new_index: &str) -> Result<()> {
    let meta = body
        .get_mut("kibanaSavedObjectMeta")
        .and_then(Value::as_object_mut)
        .ok_or_else(|| malformed("missing kibanaSavedObjectMeta"))?;

    let raw = meta
        .get("searchSourceJSON")
        .and_then(Value::as_str)
        .ok_or_else(|| malformed("missing searchSourceJSON"))?;

    let mut search_source: Value =
        serde_json::from_str(raw).map_err(|e| malformed(&e.to_string()))?;
    let fields = search_source
        .as_object_mut()
        .ok_or_else(|| malformed("searchSourceJSON is not a JSON object"))?;
    fields.insert("index".to_string(), Value::String(new_index.to_string()));

    let serialized =
        serde_json::to_string(&search_source).map_err(|e| malformed(&e.to_string()))?;
    meta.insert("searchSourceJSON".to_string(), Value::String(serialized));
    Ok(())
}

fn malformed(message: &str) -> ClientError {
    ClientError::MalformedSearchSource(message.to_string())
}
