//! Current-version IP pool resource types.

use serde::{Deserialize, Serialize};

pub const KIND_IP_POOL: &str = "IPPool";

/// IPIP tunneling mode for a pool.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum IpIpMode {
    #[default]
    Never,
    Always,
    CrossSubnet,
}

/// IP pool resource. `name` is derived from the pool CIDR at migration time.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct IpPool {
    pub name: String,
    pub spec: IpPoolSpec,
}

impl IpPool {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), spec: IpPoolSpec::default() }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct IpPoolSpec {
    /// Pool CIDR; also the source of the derived resource name.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub cidr: String,

    pub ipip_mode: IpIpMode,

    /// Whether outgoing traffic from this pool is NATed.
    pub nat_outgoing: bool,

    /// A disabled pool is kept but not used for new allocations.
    pub disabled: bool,
}
