//! Current-version BGP configuration resource types.
//!
//! JSON field names and omit-empty behavior are part of the wire contract
//! with the legacy consumer and must not change.

use serde::{Deserialize, Serialize};

pub const KIND_BGP_CONFIGURATION: &str = "BGPConfiguration";

/// Well-known name of the cluster-wide BGP configuration instance.
pub const DEFAULT_BGP_CONFIG_NAME: &str = "default";

/// BGP configuration resource. `name` is `default` for the cluster-wide
/// instance, or `node.<nodename>` for a node-scoped override.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BgpConfiguration {
    pub name: String,
    pub spec: BgpConfigurationSpec,
}

impl BgpConfiguration {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), spec: BgpConfigurationSpec::default() }
    }
}

/// Declared fields of the BGP configuration, in schema order. Zero values and
/// empty collections mean "not set".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct BgpConfigurationSpec {
    /// Log severity above which logs go to stdout. [Default: INFO]
    #[serde(skip_serializing_if = "String::is_empty")]
    pub log_severity_screen: String,

    /// Whether the full node-to-node BGP mesh is enabled. [Default: true]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_to_node_mesh_enabled: Option<bool>,

    /// Default AS number used by a node. [Default: 64512]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub as_number: Option<u32>,

    /// CIDR blocks within which service external IPs are advertised.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub service_external_ips: Vec<ServiceExternalIpBlock>,

    /// CIDR blocks from which service cluster IPs are allocated.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub service_cluster_ips: Vec<ServiceClusterIpBlock>,

    /// Named BGP community values for tagging routes.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub communities: Vec<Community>,

    /// Communities to advertise per prefix.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub prefix_advertisements: Vec<PrefixAdvertisement>,

    /// Port the BGP protocol listens on. Defaults to 179.
    #[serde(skip_serializing_if = "is_zero_port")]
    pub listen_port: u16,
}

fn is_zero_port(p: &u16) -> bool {
    *p == 0
}

/// A single allowed CIDR block for service external IPs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceExternalIpBlock {
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub cidr: String,
}

/// A single allowed CIDR block for service cluster IPs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceClusterIpBlock {
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub cidr: String,
}

/// A BGP community value and its name. Values are `aa:nn` (standard) or
/// `aa:nn:mm` (large).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Community {
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub value: String,
}

/// Communities applied to routes belonging to a prefix. Entries may be names
/// declared in `communities` or literal community values.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PrefixAdvertisement {
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub cidr: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub communities: Vec<String>,
}
