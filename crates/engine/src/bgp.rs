//! Field table wiring BGPConfiguration specs to the daemon's v1 key
//! namespace. Wire tags here are the compatibility contract and must not be
//! renamed.

use routekv_model::{BackendKey, BgpConfigurationSpec, FieldValue};

use crate::{transforms, FieldRegistry, FieldSpec, KeyScheme};

/// Build the BGPConfiguration field registry, in schema declaration order.
/// Construct once at startup and share by reference.
pub fn registry() -> FieldRegistry<BgpConfigurationSpec> {
    FieldRegistry::new(vec![
        FieldSpec {
            tag: "loglevel",
            accessor: |s: &BgpConfigurationSpec| {
                (!s.log_severity_screen.is_empty())
                    .then(|| FieldValue::Str(s.log_severity_screen.clone()))
            },
            transform: Some(transforms::log_level),
        },
        FieldSpec {
            tag: "node_mesh",
            accessor: |s: &BgpConfigurationSpec| {
                s.node_to_node_mesh_enabled.map(FieldValue::Bool)
            },
            transform: Some(transforms::node_mesh),
        },
        FieldSpec {
            tag: "as_num",
            accessor: |s: &BgpConfigurationSpec| s.as_number.map(|n| FieldValue::Int(n as u64)),
            // No transform: the AS number passes through unchanged.
            transform: None,
        },
        FieldSpec {
            tag: "svc_external_ips",
            accessor: |s: &BgpConfigurationSpec| {
                if s.service_external_ips.is_empty() {
                    return None;
                }
                Some(FieldValue::StrList(
                    s.service_external_ips.iter().map(|b| b.cidr.clone()).collect(),
                ))
            },
            transform: Some(transforms::join_cidrs),
        },
        FieldSpec {
            tag: "svc_cluster_ips",
            accessor: |s: &BgpConfigurationSpec| {
                if s.service_cluster_ips.is_empty() {
                    return None;
                }
                Some(FieldValue::StrList(
                    s.service_cluster_ips.iter().map(|b| b.cidr.clone()).collect(),
                ))
            },
            transform: Some(transforms::join_cidrs),
        },
        FieldSpec {
            tag: "communities",
            accessor: |s: &BgpConfigurationSpec| {
                (!s.communities.is_empty())
                    .then(|| FieldValue::Communities(s.communities.clone()))
            },
            transform: Some(transforms::communities_json),
        },
        FieldSpec {
            tag: "prefix_advertisements",
            accessor: |s: &BgpConfigurationSpec| {
                (!s.prefix_advertisements.is_empty())
                    .then(|| FieldValue::PrefixAdvertisements(s.prefix_advertisements.clone()))
            },
            transform: Some(transforms::prefix_advertisements_json),
        },
        FieldSpec {
            tag: "listen_port",
            accessor: |s: &BgpConfigurationSpec| {
                (s.listen_port != 0).then_some(FieldValue::Int(s.listen_port as u64))
            },
            transform: Some(transforms::listen_port),
        },
    ])
}

/// Key constructors for the BGP config namespace.
pub fn key_scheme() -> KeyScheme {
    KeyScheme {
        node: |nodename, tag| BackendKey::Node {
            nodename: nodename.to_string(),
            field: tag.to_string(),
        },
        global: |tag| BackendKey::Global { field: tag.to_string() },
    }
}
