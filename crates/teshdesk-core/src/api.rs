//! Response decoding for the user record source
//!
//! The collection arrives wrapped as `{ "data": { "data": [ ... ] } }`. A
//! missing or malformed envelope decodes as an empty collection, and records
//! that fail to decode are skipped rather than failing the whole page.

use std::collections::HashSet;

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::types::UserRecord;

/// Decode a response body. Only invalid JSON is an error.
pub fn decode_users(body: &str) -> Result<Vec<UserRecord>> {
    let value: Value = serde_json::from_str(body).map_err(|e| Error::Decode(e.to_string()))?;
    Ok(decode_users_value(value))
}

/// Extract records from an already parsed body.
pub fn decode_users_value(mut value: Value) -> Vec<UserRecord> {
    let Some(Value::Array(items)) = value.pointer_mut("/data/data").map(Value::take) else {
        warn!("User response has no data.data array");
        return Vec::new();
    };

    let total = items.len();
    let mut seen = HashSet::new();
    let records: Vec<UserRecord> = items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<UserRecord>(item) {
            Ok(record) => Some(record),
            Err(e) => {
                debug!(error = %e, "Skipping malformed user record");
                None
            }
        })
        .filter(|record| seen.insert(record.id.clone()))
        .collect();

    if records.len() < total {
        warn!(kept = records.len(), total, "Dropped user records");
    }
    records
}
