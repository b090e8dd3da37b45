//! IP pool converter: v1 API -> v1 backend model -> v3 API.

use tracing::debug;

use routekv_model::ippool::KIND_IP_POOL;
use routekv_model::{IpIpMode, IpPool, IpPoolSpec};

use crate::{Converter, KvPair, MigrateError, StoreKey, StoreValue, V1Resource, V3Resource};

/// v1 backend store representation of an IP pool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackendIpPool {
    pub cidr: String,
    /// Tunnel device name; empty when IPIP is disabled.
    pub ipip_interface: String,
    /// Free-text mode string carried from the v1 API.
    pub ipip_mode: String,
    pub masquerade: bool,
    pub ipam: bool,
    pub disabled: bool,
}

pub struct IpPoolConverter;

impl Converter for IpPoolConverter {
    fn api_v1_to_backend(&self, resource: &V1Resource) -> Result<KvPair, MigrateError> {
        let V1Resource::IpPool(pool) = resource else {
            return Err(MigrateError::KindMismatch { expected: KIND_IP_POOL });
        };

        let (ipip_interface, ipip_mode) = match &pool.spec.ipip {
            Some(ipip) => {
                let iface = if ipip.enabled { "tunl0" } else { "" };
                (iface.to_string(), ipip.mode.clone())
            }
            None => (String::new(), String::new()),
        };

        Ok(KvPair {
            key: StoreKey::IpPool { cidr: pool.metadata.cidr.clone() },
            value: StoreValue::IpPool(BackendIpPool {
                cidr: pool.metadata.cidr.clone(),
                ipip_interface,
                ipip_mode,
                masquerade: pool.spec.nat_outgoing,
                ipam: !pool.spec.disabled,
                disabled: pool.spec.disabled,
            }),
        })
    }

    fn backend_to_api_v3(&self, kvp: &KvPair) -> Result<V3Resource, MigrateError> {
        let StoreValue::IpPool(pool) = &kvp.value else {
            return Err(MigrateError::KindMismatch { expected: KIND_IP_POOL });
        };

        let mut out = IpPool::new(cidr_to_name(&pool.cidr));
        out.spec = IpPoolSpec {
            cidr: pool.cidr.clone(),
            ipip_mode: convert_ipip_mode(&pool.ipip_mode, &pool.ipip_interface),
            nat_outgoing: pool.masquerade,
            disabled: pool.disabled,
        };

        Ok(V3Resource::IpPool(out))
    }
}

/// Collapse the v1 (interface, mode) pair into the v3 tri-state mode. Total
/// over all inputs: no interface means IPIP was disabled.
pub fn convert_ipip_mode(mode: &str, ipip_interface: &str) -> IpIpMode {
    if ipip_interface.is_empty() {
        IpIpMode::Never
    } else if mode.eq_ignore_ascii_case("cross-subnet") {
        IpIpMode::CrossSubnet
    } else {
        IpIpMode::Always
    }
}

/// Derive the stable v3 resource name from a pool CIDR: the first 3 dots,
/// first 7 colons, and first 1 slash become dashes. The positional limits are
/// the documented name rule for dual-stack CIDRs and must stay as-is.
pub fn cidr_to_name(cidr: &str) -> String {
    let name = cidr.replacen('.', "-", 3);
    let name = name.replacen(':', "-", 7);
    let name = name.replacen('/', "-", 1);

    debug!(name = %name, cidr = %cidr, "derived pool name from CIDR");

    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::v1;

    fn pool(cidr: &str, ipip: Option<v1::IpIpConfiguration>, nat: bool, disabled: bool) -> V1Resource {
        V1Resource::IpPool(v1::IpPool {
            metadata: v1::IpPoolMetadata { cidr: cidr.into() },
            spec: v1::IpPoolSpec { ipip, nat_outgoing: nat, disabled },
        })
    }

    #[test]
    fn migrates_cross_subnet_pool() {
        let old = pool(
            "10.0.0.0/24",
            Some(v1::IpIpConfiguration { enabled: true, mode: "cross-subnet".into() }),
            true,
            false,
        );
        let V3Resource::IpPool(new) = IpPoolConverter.migrate(&old).unwrap() else {
            panic!("expected an IPPool");
        };
        assert_eq!(new.name, "10-0-0-0-24");
        assert_eq!(new.spec.cidr, "10.0.0.0/24");
        assert_eq!(new.spec.ipip_mode, IpIpMode::CrossSubnet);
        assert!(new.spec.nat_outgoing);
        assert!(!new.spec.disabled);
    }

    #[test]
    fn disabled_ipip_migrates_to_never() {
        for ipip in [
            None,
            Some(v1::IpIpConfiguration { enabled: false, mode: "cross-subnet".into() }),
            Some(v1::IpIpConfiguration { enabled: false, mode: String::new() }),
        ] {
            let old = pool("192.168.0.0/16", ipip, false, true);
            let V3Resource::IpPool(new) = IpPoolConverter.migrate(&old).unwrap() else {
                panic!("expected an IPPool");
            };
            assert_eq!(new.spec.ipip_mode, IpIpMode::Never);
            assert!(new.spec.disabled);
        }
    }

    #[test]
    fn enabled_ipip_without_mode_migrates_to_always() {
        for mode in ["", "Always", "something-else"] {
            let old = pool(
                "10.1.0.0/16",
                Some(v1::IpIpConfiguration { enabled: true, mode: mode.into() }),
                false,
                false,
            );
            let V3Resource::IpPool(new) = IpPoolConverter.migrate(&old).unwrap() else {
                panic!("expected an IPPool");
            };
            assert_eq!(new.spec.ipip_mode, IpIpMode::Always, "mode {mode:?}");
        }
    }

    #[test]
    fn cross_subnet_match_is_case_insensitive() {
        assert_eq!(convert_ipip_mode("Cross-Subnet", "tunl0"), IpIpMode::CrossSubnet);
        assert_eq!(convert_ipip_mode("CROSS-SUBNET", "tunl0"), IpIpMode::CrossSubnet);
        assert_eq!(convert_ipip_mode("cross-subnet", ""), IpIpMode::Never);
    }

    #[test]
    fn backend_form_tracks_ipam_and_interface() {
        let old = pool(
            "10.0.1.0/24",
            Some(v1::IpIpConfiguration { enabled: true, mode: String::new() }),
            true,
            false,
        );
        let kvp = IpPoolConverter.api_v1_to_backend(&old).unwrap();
        let StoreValue::IpPool(backend) = &kvp.value else { panic!("expected a pool value") };
        assert_eq!(backend.ipip_interface, "tunl0");
        assert!(backend.ipam);
        assert!(backend.masquerade);

        let old = pool("10.0.2.0/24", None, false, true);
        let kvp = IpPoolConverter.api_v1_to_backend(&old).unwrap();
        let StoreValue::IpPool(backend) = &kvp.value else { panic!("expected a pool value") };
        assert_eq!(backend.ipip_interface, "");
        assert!(!backend.ipam);
    }

    #[test]
    fn ipv4_names_replace_all_separators() {
        assert_eq!(cidr_to_name("10.0.0.0/24"), "10-0-0-0-24");
        assert_eq!(cidr_to_name("192.168.128.0/17"), "192-168-128-0-17");
    }

    #[test]
    fn ipv6_names_honor_replacement_limits() {
        assert_eq!(cidr_to_name("fd5f:1234::/64"), "fd5f-1234---64");
        // Fully uncompressed address: all 7 colons are within the limit.
        assert_eq!(cidr_to_name("1:2:3:4:5:6:7:8/128"), "1-2-3-4-5-6-7-8-128");
        assert_eq!(cidr_to_name("::/0"), "---0");
    }

    #[test]
    fn wrong_kind_is_rejected() {
        let other = V1Resource::GlobalBgpConfig(v1::GlobalBgpConfig::default());
        assert_eq!(
            IpPoolConverter.migrate(&other),
            Err(MigrateError::KindMismatch { expected: KIND_IP_POOL })
        );
    }
}
