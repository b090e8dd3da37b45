//! Legacy v1 API types, kept only for the upgrade path.

use serde::{Deserialize, Serialize};

/// v1 IP pool resource. The pool is identified by its CIDR; there is no
/// separate name field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct IpPool {
    pub metadata: IpPoolMetadata,
    pub spec: IpPoolSpec,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct IpPoolMetadata {
    pub cidr: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct IpPoolSpec {
    /// IPIP tunneling configuration; absent means IPIP disabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipip: Option<IpIpConfiguration>,

    pub nat_outgoing: bool,

    pub disabled: bool,
}

/// v1 IPIP settings: an enabled flag plus a free-text mode string. The v3
/// API collapses this pair into a single tri-state mode.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct IpIpConfiguration {
    pub enabled: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub mode: String,
}

/// v1 cluster-wide BGP settings, stored as discrete per-field keys in the v1
/// backend. Aggregated here as read by the upgrade path.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct GlobalBgpConfig {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub log_level: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_to_node_mesh_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub as_number: Option<u32>,
}
