//! Transform catalog: native field representations to the daemon's expected
//! wire forms. Exact output shapes are a compatibility contract with the
//! legacy consumer.

use routekv_model::{FieldValue, WireValue};

use crate::TransformError;

/// The v1 consumer expects the mesh flag wrapped in a JSON object literal.
pub const NODE_TO_NODE_MESH_ENABLED: &str = "{\"enabled\":true}";
pub const NODE_TO_NODE_MESH_DISABLED: &str = "{\"enabled\":false}";

/// The daemon's log level only has none/debug/info granularity. Debug and
/// info pass through lower-cased; everything else collapses to none.
pub fn log_level(value: FieldValue) -> Result<Option<WireValue>, TransformError> {
    let FieldValue::Str(level) = value else {
        return Err(TransformError::UnexpectedKind);
    };
    let level = level.to_lowercase();
    let level = match level.as_str() {
        "" | "debug" | "info" => level,
        _ => "none".to_string(),
    };
    Ok(Some(WireValue::Str(level)))
}

/// Wrap the mesh-enabled bool in the fixed JSON literal the v1 consumer
/// expects.
pub fn node_mesh(value: FieldValue) -> Result<Option<WireValue>, TransformError> {
    let FieldValue::Bool(enabled) = value else {
        return Err(TransformError::UnexpectedKind);
    };
    let literal = if enabled { NODE_TO_NODE_MESH_ENABLED } else { NODE_TO_NODE_MESH_DISABLED };
    Ok(Some(WireValue::Str(literal.to_string())))
}

/// Join a list of CIDR strings with commas, in input order. Empty lists are
/// suppressed.
pub fn join_cidrs(value: FieldValue) -> Result<Option<WireValue>, TransformError> {
    let FieldValue::StrList(cidrs) = value else {
        return Err(TransformError::UnexpectedKind);
    };
    if cidrs.is_empty() {
        return Ok(None);
    }
    Ok(Some(WireValue::Str(cidrs.join(","))))
}

/// JSON-encode the community name/value pairs. Empty lists are suppressed.
pub fn communities_json(value: FieldValue) -> Result<Option<WireValue>, TransformError> {
    let FieldValue::Communities(communities) = value else {
        return Err(TransformError::UnexpectedKind);
    };
    if communities.is_empty() {
        return Ok(None);
    }
    Ok(Some(WireValue::Str(serde_json::to_string(&communities)?)))
}

/// JSON-encode the per-prefix community advertisements. Empty lists are
/// suppressed.
pub fn prefix_advertisements_json(value: FieldValue) -> Result<Option<WireValue>, TransformError> {
    let FieldValue::PrefixAdvertisements(advertisements) = value else {
        return Err(TransformError::UnexpectedKind);
    };
    if advertisements.is_empty() {
        return Ok(None);
    }
    Ok(Some(WireValue::Str(serde_json::to_string(&advertisements)?)))
}

/// Pass the listen port through; an explicit zero means unset.
pub fn listen_port(value: FieldValue) -> Result<Option<WireValue>, TransformError> {
    let FieldValue::Int(port) = value else {
        return Err(TransformError::UnexpectedKind);
    };
    if port == 0 {
        return Ok(None);
    }
    Ok(Some(WireValue::Int(port)))
}
