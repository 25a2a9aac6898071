//! Configuration key paths for logical identifiers.

use serde_json::Value;

/// The location of one identifier's entry in a version's mapping document.
///
/// A descriptor is the ordered key path from the document root to the
/// identifier's entry: a static section path (for example
/// `["registries", "entity_type"]`) followed by the member key (for
/// example `"creeper"`). Descriptors are process-lifetime constants owned
/// one-to-one by their identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeDescriptor {
    section: &'static [&'static str],
    key: &'static str,
}

impl TypeDescriptor {
    /// Creates a descriptor from a section path and a member key.
    #[must_use]
    pub const fn new(section: &'static [&'static str], key: &'static str) -> Self {
        Self { section, key }
    }

    /// Returns the section path leading to this identifier's entry.
    #[must_use]
    pub const fn section(&self) -> &'static [&'static str] {
        self.section
    }

    /// Returns the member key within the section.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        self.key
    }

    /// Resolves this descriptor against a configuration document.
    ///
    /// Returns `None` when any path component is absent. An unresolved
    /// path means the identifier has no mapping in that document's
    /// version; it is the normal "unsupported" case, not an error.
    #[must_use]
    pub fn resolve<'a>(&self, document: &'a Value) -> Option<&'a Value> {
        let mut node = document;
        for part in self.section {
            node = node.get(part)?;
        }
        node.get(self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resolve_walks_section_then_key() {
        let document = json!({
            "registries": {
                "entity_type": {
                    "creeper": { "id": 20 }
                }
            }
        });
        let descriptor = TypeDescriptor::new(&["registries", "entity_type"], "creeper");

        let entry = descriptor.resolve(&document).unwrap();
        assert_eq!(entry.get("id").and_then(Value::as_i64), Some(20));
    }

    #[test]
    fn resolve_missing_section_is_none() {
        let document = json!({ "packets": {} });
        let descriptor = TypeDescriptor::new(&["registries", "entity_type"], "creeper");

        assert!(descriptor.resolve(&document).is_none());
    }

    #[test]
    fn resolve_missing_key_is_none() {
        let document = json!({
            "registries": { "entity_type": {} }
        });
        let descriptor = TypeDescriptor::new(&["registries", "entity_type"], "creeper");

        assert!(descriptor.resolve(&document).is_none());
    }

    #[test]
    fn accessors_return_construction_inputs() {
        let descriptor = TypeDescriptor::new(&["packets", "play"], "block_action");
        assert_eq!(descriptor.section(), &["packets", "play"]);
        assert_eq!(descriptor.key(), "block_action");
    }

    #[test]
    fn descriptor_const_constructible() {
        const DESCRIPTOR: TypeDescriptor = TypeDescriptor::new(&["registries", "item"], "stick");
        assert_eq!(DESCRIPTOR.key(), "stick");
    }
}
