//! One-time migration of legacy v1 resources to the current v3 API.
//!
//! Each converter lowers the v1 API form into its v1 backend store form and
//! raises that into the v3 API, or goes straight across where no intermediate
//! form exists. Conversion is pure: the v1 input is read-only and the v3
//! output is freshly constructed, so a failed migration never leaves partial
//! state.

#![forbid(unsafe_code)]

pub mod bgpconfig;
pub mod ippool;
pub mod v1;

pub use bgpconfig::BgpConfigConverter;
pub use ippool::{cidr_to_name, BackendIpPool, IpPoolConverter};

use routekv_model::bgp::KIND_BGP_CONFIGURATION;
use routekv_model::ippool::KIND_IP_POOL;
use routekv_model::{BgpConfiguration, IpPool};

/// v1 resource read through the version-agnostic path. The migrator checks
/// the dynamic kind; a converter handed the wrong variant reports
/// [`MigrateError::KindMismatch`].
#[derive(Debug, Clone, PartialEq)]
pub enum V1Resource {
    IpPool(v1::IpPool),
    GlobalBgpConfig(v1::GlobalBgpConfig),
}

impl V1Resource {
    pub fn kind(&self) -> &'static str {
        match self {
            V1Resource::IpPool(_) => KIND_IP_POOL,
            V1Resource::GlobalBgpConfig(_) => "GlobalBGPConfig",
        }
    }
}

/// Key of a v1 backend store entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreKey {
    IpPool { cidr: String },
    GlobalBgpConfig { name: String },
}

/// Value of a v1 backend store entry.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreValue {
    IpPool(BackendIpPool),
    GlobalBgpConfig(bgpconfig::BackendBgpConfig),
}

impl StoreValue {
    pub fn kind(&self) -> &'static str {
        match self {
            StoreValue::IpPool(_) => KIND_IP_POOL,
            StoreValue::GlobalBgpConfig(_) => "GlobalBGPConfig",
        }
    }
}

/// One v1 backend store entry.
#[derive(Debug, Clone, PartialEq)]
pub struct KvPair {
    pub key: StoreKey,
    pub value: StoreValue,
}

/// Current-version resource produced by migration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum V3Resource {
    IpPool(IpPool),
    BgpConfiguration(BgpConfiguration),
}

impl V3Resource {
    pub fn kind(&self) -> &'static str {
        match self {
            V3Resource::IpPool(_) => KIND_IP_POOL,
            V3Resource::BgpConfiguration(_) => KIND_BGP_CONFIGURATION,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MigrateError {
    /// The input's dynamic kind does not match the converter's resource kind.
    #[error("value is not a valid {expected} resource value")]
    KindMismatch { expected: &'static str },
}

/// Two-step conversion shape shared by every resource kind.
pub trait Converter {
    /// Lower a v1 API resource into its v1 backend store form.
    fn api_v1_to_backend(&self, resource: &V1Resource) -> Result<KvPair, MigrateError>;

    /// Raise a v1 backend store entry into the current v3 API.
    fn backend_to_api_v3(&self, kvp: &KvPair) -> Result<V3Resource, MigrateError>;

    /// Full v1 to v3 migration of one resource.
    fn migrate(&self, resource: &V1Resource) -> Result<V3Resource, MigrateError> {
        let kvp = self.api_v1_to_backend(resource)?;
        self.backend_to_api_v3(&kvp)
    }
}
