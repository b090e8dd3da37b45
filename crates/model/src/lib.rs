//! routekv core types: backend keys, wire values, and the closed native-value
//! union crossing the field-mapping boundary.

#![forbid(unsafe_code)]

pub mod bgp;
pub mod ippool;

use serde::{Deserialize, Serialize};

pub use bgp::{
    BgpConfiguration, BgpConfigurationSpec, Community, PrefixAdvertisement,
    ServiceClusterIpBlock, ServiceExternalIpBlock,
};
pub use ippool::{IpIpMode, IpPool, IpPoolSpec};

/// Key in the routing daemon's flat config namespace. Exactly two shapes:
/// cluster-wide, or bound to a single node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BackendKey {
    Global { field: String },
    Node { nodename: String, field: String },
}

impl BackendKey {
    pub fn field(&self) -> &str {
        match self {
            BackendKey::Global { field } => field,
            BackendKey::Node { field, .. } => field,
        }
    }

    pub fn nodename(&self) -> Option<&str> {
        match self {
            BackendKey::Global { .. } => None,
            BackendKey::Node { nodename, .. } => Some(nodename),
        }
    }
}

/// Primitive value written downstream. The daemon-facing sync layer only
/// understands strings and numbers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum WireValue {
    Str(String),
    Int(u64),
}

impl WireValue {
    /// Default rendering for fields with no registered transform: scalars
    /// pass through, list kinds are JSON-encoded.
    pub fn from_native(value: FieldValue) -> Result<WireValue, serde_json::Error> {
        Ok(match value {
            FieldValue::Bool(b) => WireValue::Str(b.to_string()),
            FieldValue::Str(s) => WireValue::Str(s),
            FieldValue::Int(n) => WireValue::Int(n),
            FieldValue::StrList(l) => WireValue::Str(serde_json::to_string(&l)?),
            FieldValue::Communities(l) => WireValue::Str(serde_json::to_string(&l)?),
            FieldValue::PrefixAdvertisements(l) => WireValue::Str(serde_json::to_string(&l)?),
        })
    }
}

/// One key/value update for the downstream sync layer. `value: None` signals
/// deletion of that key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Update {
    pub key: BackendKey,
    pub value: Option<WireValue>,
}

/// Native value of a single spec field, as read by a field accessor. A closed
/// union rather than an open `Any`, so transforms match exhaustively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Bool(bool),
    Str(String),
    Int(u64),
    StrList(Vec<String>),
    Communities(Vec<Community>),
    PrefixAdvertisements(Vec<PrefixAdvertisement>),
}
