//! Detail Projection
//!
//! The UI only ever sees these eight fields of an upstream record. Field
//! names are part of the gateway contract and must not drift.

use serde_json::{Map, Value};

use crate::upstream::UpstreamError;

pub const DETAIL_FIELDS: [&str; 8] = [
    "abilities", "moves", "forms", "id", "name", "sprites", "height", "weight",
];

/// Narrow an upstream record to `DETAIL_FIELDS`. A missing field means the
/// upstream answer is unusable.
pub fn project_detail(body: Value) -> Result<Value, UpstreamError> {
    let Value::Object(mut upstream) = body else {
        return Err(UpstreamError::Malformed("detail body is not an object".to_string()));
    };

    let mut projected = Map::with_capacity(DETAIL_FIELDS.len());
    for field in DETAIL_FIELDS {
        let value = upstream
            .remove(field)
            .ok_or_else(|| UpstreamError::Malformed(format!("detail body lacks `{field}`")))?;
        projected.insert(field.to_string(), value);
    }
    Ok(Value::Object(projected))
}
