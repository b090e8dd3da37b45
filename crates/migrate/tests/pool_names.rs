#![forbid(unsafe_code)]

use std::collections::HashMap;
use std::net::{Ipv4Addr, Ipv6Addr};

use proptest::prelude::*;

use routekv_migrate::ippool::convert_ipip_mode;
use routekv_migrate::cidr_to_name;
use routekv_model::IpIpMode;

fn v4_cidr(ip: u32, len: u8) -> String {
    format!("{}/{}", Ipv4Addr::from(ip), len)
}

fn v6_cidr(ip: u128, len: u8) -> String {
    format!("{}/{}", Ipv6Addr::from(ip), len)
}

proptest! {
    // Two distinct canonical CIDR strings must never derive the same name.
    #[test]
    fn v4_names_are_injective(
        pools in prop::collection::hash_set((any::<u32>(), 0u8..=32), 1..64)
    ) {
        let mut seen: HashMap<String, String> = HashMap::new();
        for (ip, len) in pools {
            let cidr = v4_cidr(ip, len);
            let name = cidr_to_name(&cidr);
            if let Some(other) = seen.insert(name.clone(), cidr.clone()) {
                prop_assert_eq!(other, cidr, "name collision on {}", name);
            }
        }
    }

    #[test]
    fn dual_stack_names_are_injective(
        v4 in prop::collection::hash_set((any::<u32>(), 0u8..=32), 1..32),
        v6 in prop::collection::hash_set((any::<u128>(), 0u8..=128), 1..32)
    ) {
        let mut seen: HashMap<String, String> = HashMap::new();
        let cidrs = v4
            .into_iter()
            .map(|(ip, len)| v4_cidr(ip, len))
            .chain(v6.into_iter().map(|(ip, len)| v6_cidr(ip, len)));
        for cidr in cidrs {
            let name = cidr_to_name(&cidr);
            if let Some(other) = seen.insert(name.clone(), cidr.clone()) {
                prop_assert_eq!(other, cidr, "name collision on {}", name);
            }
        }
    }

    #[test]
    fn name_derivation_is_deterministic(ip in any::<u128>(), len in 0u8..=128) {
        let cidr = v6_cidr(ip, len);
        prop_assert_eq!(cidr_to_name(&cidr), cidr_to_name(&cidr));
    }

    // Mode derivation is total: every (enabled, mode) combination maps to
    // exactly one of the three modes, cross-subnet only when enabled and the
    // mode string matches case-insensitively.
    #[test]
    fn mode_derivation_is_total(enabled in any::<bool>(), mode in ".*") {
        let iface = if enabled { "tunl0" } else { "" };
        let derived = convert_ipip_mode(&mode, iface);
        let expected = if !enabled {
            IpIpMode::Never
        } else if mode.eq_ignore_ascii_case("cross-subnet") {
            IpIpMode::CrossSubnet
        } else {
            IpIpMode::Always
        };
        prop_assert_eq!(derived, expected);
    }
}
