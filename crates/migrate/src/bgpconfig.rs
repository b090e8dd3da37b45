//! Global BGP config converter: collapses the v1 per-field settings into one
//! v3 BGPConfiguration named `default`.

use routekv_model::bgp::DEFAULT_BGP_CONFIG_NAME;
use routekv_model::{BgpConfiguration, BgpConfigurationSpec};

use crate::{Converter, KvPair, MigrateError, StoreKey, StoreValue, V1Resource, V3Resource};

/// v1 backend aggregate of the discrete global BGP config keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackendBgpConfig {
    pub log_level: String,
    pub node_to_node_mesh_enabled: Option<bool>,
    pub as_number: Option<u32>,
}

pub struct BgpConfigConverter;

impl Converter for BgpConfigConverter {
    fn api_v1_to_backend(&self, resource: &V1Resource) -> Result<KvPair, MigrateError> {
        let V1Resource::GlobalBgpConfig(config) = resource else {
            return Err(MigrateError::KindMismatch { expected: "GlobalBGPConfig" });
        };

        Ok(KvPair {
            key: StoreKey::GlobalBgpConfig { name: DEFAULT_BGP_CONFIG_NAME.to_string() },
            value: StoreValue::GlobalBgpConfig(BackendBgpConfig {
                log_level: config.log_level.clone(),
                node_to_node_mesh_enabled: config.node_to_node_mesh_enabled,
                as_number: config.as_number,
            }),
        })
    }

    fn backend_to_api_v3(&self, kvp: &KvPair) -> Result<V3Resource, MigrateError> {
        let StoreValue::GlobalBgpConfig(config) = &kvp.value else {
            return Err(MigrateError::KindMismatch { expected: "GlobalBGPConfig" });
        };

        let mut out = BgpConfiguration::new(DEFAULT_BGP_CONFIG_NAME);
        out.spec = BgpConfigurationSpec {
            // v3 uses upper-case severity names.
            log_severity_screen: config.log_level.to_uppercase(),
            node_to_node_mesh_enabled: config.node_to_node_mesh_enabled,
            as_number: config.as_number,
            ..Default::default()
        };

        Ok(V3Resource::BgpConfiguration(out))
    }
}
