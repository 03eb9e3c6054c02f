use serde_json::{Map, Value};
use tracing::trace;

/// Prefix stripped from `$ref` pointers before the table lookup.
///
/// Pointers are not parsed as JSON Pointers: the prefix is removed literally
/// and the remainder is used as the definition name.
pub const DEFINITIONS_PREFIX: &str = "#/definitions/";

/// Named schemas captured from the top-level `definitions` keyword.
///
/// Captured once per top-level generation call and borrowed by every nested
/// call; `definitions` keys on nested nodes are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Definitions {
    table: Option<Map<String, Value>>,
}

impl Definitions {
    /// Snapshot the `definitions` table of a root schema node.
    pub fn capture(root: &Value) -> Self {
        let table = root
            .get("definitions")
            .and_then(|value| value.as_object())
            .cloned();
        Self { table }
    }

    /// True when the root node carried a `definitions` object.
    pub fn is_captured(&self) -> bool {
        self.table.is_some()
    }

    pub fn len(&self) -> usize {
        self.table.as_ref().map_or(0, Map::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up a schema by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.table.as_ref().and_then(|table| table.get(name))
    }

    /// Resolve a `$ref` pointer against the table.
    pub fn resolve(&self, pointer: &str) -> Option<&Value> {
        let name = ref_name(pointer);
        let resolved = self.get(name);
        trace!(pointer, name, found = resolved.is_some(), "resolving reference");
        resolved
    }
}

/// Definition name referenced by a `$ref` pointer.
pub fn ref_name(pointer: &str) -> &str {
    pointer.strip_prefix(DEFINITIONS_PREFIX).unwrap_or(pointer)
}
