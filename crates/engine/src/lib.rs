//! Field-mapping synchronizer: projects a structured config spec into the
//! flat key/value updates the routing daemon consumes.
//!
//! The registry is an ordered list of `(wire tag, accessor, transform)`
//! triples declared once at startup and passed by reference; output order
//! follows declaration order, so repeated syncs of the same spec are
//! byte-identical.

#![forbid(unsafe_code)]

pub mod bgp;
pub mod transforms;

use smallvec::SmallVec;
use tracing::warn;

use routekv_model::{BackendKey, FieldValue, Update, WireValue};

/// Update list for one sync pass. Specs top out at eight declared fields.
pub type Updates = SmallVec<[Update; 8]>;

/// Recovered per-field failure. Never aborts the sync pass; the offending
/// field is suppressed and siblings still propagate.
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    #[error("encoding field value as JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The registry wired a transform to a field of a different native kind.
    #[error("native value kind does not match transform")]
    UnexpectedKind,
}

/// Converts a native field value into its wire form. `Ok(None)` suppresses
/// emission of the key (unset-after-transform).
pub type Transform = fn(FieldValue) -> Result<Option<WireValue>, TransformError>;

/// One declared field of a config spec `S`. The accessor returns `None` when
/// the field equals its empty sentinel.
pub struct FieldSpec<S> {
    pub tag: &'static str,
    pub accessor: fn(&S) -> Option<FieldValue>,
    pub transform: Option<Transform>,
}

/// Backend key constructors for one config kind. Whether the node or global
/// shape applies is decided per resource instance, not per field.
#[derive(Clone, Copy)]
pub struct KeyScheme {
    pub node: fn(nodename: &str, tag: &str) -> BackendKey,
    pub global: fn(tag: &str) -> BackendKey,
}

impl KeyScheme {
    fn key_for(&self, scope: Option<&str>, tag: &str) -> BackendKey {
        match scope {
            Some(node) => (self.node)(node, tag),
            None => (self.global)(tag),
        }
    }
}

/// Ordered field table for one config kind, built once at startup. Read-only
/// afterwards, so shared use across threads needs no synchronization.
pub struct FieldRegistry<S> {
    fields: Vec<FieldSpec<S>>,
}

impl<S> FieldRegistry<S> {
    pub fn new(fields: Vec<FieldSpec<S>>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[FieldSpec<S>] {
        &self.fields
    }

    /// Wire tags in declaration order.
    pub fn tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.tag)
    }
}

/// Produce the full update list for the current state of `spec`.
///
/// `scope` is `None` for the cluster-wide instance or the node name for a
/// node-scoped one. Fields at their empty sentinel emit nothing; a transform
/// returning `Ok(None)` suppresses its field; a transform error is logged and
/// suppresses only that field. Fields with no transform pass through via
/// [`WireValue::from_native`].
pub fn synchronize<S>(
    scope: Option<&str>,
    spec: &S,
    registry: &FieldRegistry<S>,
    keys: &KeyScheme,
) -> Updates {
    let mut out = Updates::new();
    for field in registry.fields() {
        let native = match (field.accessor)(spec) {
            Some(v) => v,
            None => continue,
        };
        let wire = match field.transform {
            Some(transform) => transform(native),
            None => WireValue::from_native(native).map(Some).map_err(TransformError::from),
        };
        let value = match wire {
            Ok(Some(v)) => v,
            Ok(None) => continue,
            Err(err) => {
                warn!(tag = field.tag, error = %err, "field transform failed; skipping field");
                continue;
            }
        };
        out.push(Update { key: keys.key_for(scope, field.tag), value: Some(value) });
    }
    out
}

/// Updates deleting every registered key. Callers translate a resource
/// delete into this list so absent keys are removed downstream rather than
/// left stale.
pub fn deletion_updates<S>(
    scope: Option<&str>,
    registry: &FieldRegistry<S>,
    keys: &KeyScheme,
) -> Updates {
    registry
        .tags()
        .map(|tag| Update { key: keys.key_for(scope, tag), value: None })
        .collect()
}
