//! Bidirectional identifier ↔ wire id ↔ resource name tables.

use std::collections::HashMap;

use ident::LogicalId;
use serde_json::Value;

use crate::error::{MappingError, MappingResult};
use crate::table::DenseTable;
use crate::{field, UNSUPPORTED_ID};

/// The translation table for one identifier category in one protocol
/// version.
///
/// Built once from a configuration document; immutable afterwards. All
/// queries are total and never panic on out-of-range input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionMapper<T: LogicalId> {
    /// Wire id → identifier, default [`LogicalId::UNDEFINED`].
    by_id: DenseTable<T>,
    /// Identifier ordinal → wire id, default [`UNSUPPORTED_ID`].
    id_by_ordinal: Vec<i32>,
    /// Identifier ordinal → resource name, empty string for none.
    resource_by_ordinal: Vec<String>,
    /// Resource name → identifier.
    by_resource: HashMap<String, T>,
}

impl<T: LogicalId> VersionMapper<T> {
    /// Builds the table for `members` from a configuration document.
    ///
    /// A member whose descriptor does not resolve has no mapping in this
    /// version and is skipped; that is the normal "unsupported" case. A
    /// resolved entry must carry a well-formed `id` field, and duplicate
    /// id, identifier, or resource-name assignments are fatal
    /// configuration errors.
    pub fn build(members: &'static [T], document: &Value) -> MappingResult<Self> {
        let mut mapper = Self {
            by_id: DenseTable::new(members.len(), T::UNDEFINED),
            id_by_ordinal: vec![UNSUPPORTED_ID; T::COUNT],
            resource_by_ordinal: vec![String::new(); T::COUNT],
            by_resource: HashMap::new(),
        };

        for &member in members {
            let Some(entry) = member.descriptor().resolve(document) else {
                continue;
            };
            let id = read_id(entry, T::CATEGORY, member.descriptor().key())?;
            mapper.record(member, id)?;

            if let Some(value) = entry.get(field::RESOURCE) {
                let Some(name) = value.as_str() else {
                    return Err(MappingError::InvalidEntry {
                        category: T::CATEGORY,
                        key: member.descriptor().key(),
                        field: field::RESOURCE,
                        found: value.to_string(),
                    });
                };
                if !name.is_empty() {
                    mapper.record_resource(member, name)?;
                }
            }
        }

        Ok(mapper)
    }

    /// Returns the identifier mapped to `id`, or the `Undefined` sentinel
    /// for negative, out-of-range, or unmapped ids.
    #[must_use]
    pub fn identifier_of(&self, id: i32) -> T {
        self.by_id.get(id)
    }

    /// Returns the wire id of `identifier`, or [`UNSUPPORTED_ID`] when it
    /// has no mapping in this version (including the sentinel itself).
    #[must_use]
    pub fn id_of(&self, identifier: T) -> i32 {
        self.id_by_ordinal
            .get(identifier.ordinal())
            .copied()
            .unwrap_or(UNSUPPORTED_ID)
    }

    /// Returns the resource name of `identifier`, or the empty string when
    /// this version assigns none.
    #[must_use]
    pub fn resource_name_of(&self, identifier: T) -> &str {
        self.resource_by_ordinal
            .get(identifier.ordinal())
            .map_or("", String::as_str)
    }

    /// Returns the identifier claiming `resource`, or the `Undefined`
    /// sentinel for the empty string and unknown names.
    #[must_use]
    pub fn identifier_of_resource(&self, resource: &str) -> T {
        self.by_resource
            .get(resource)
            .copied()
            .unwrap_or(T::UNDEFINED)
    }

    /// Records a wire id assignment, both directions.
    ///
    /// `id` is non-negative; [`read_id`] has already validated it.
    fn record(&mut self, member: T, id: i32) -> MappingResult<()> {
        let existing = self.by_id.get(id);
        if existing != T::UNDEFINED {
            return Err(MappingError::DuplicateWireId {
                category: T::CATEGORY,
                id,
                existing: existing.descriptor().key(),
                duplicate: member.descriptor().key(),
            });
        }

        let assigned = self.id_of(member);
        if assigned != UNSUPPORTED_ID {
            return Err(MappingError::DuplicateIdentifier {
                category: T::CATEGORY,
                key: member.descriptor().key(),
                first_id: assigned,
                second_id: id,
            });
        }

        self.id_by_ordinal[member.ordinal()] = id;
        self.by_id.set(id as usize, member);
        Ok(())
    }

    /// Records a resource name assignment, both directions.
    fn record_resource(&mut self, member: T, name: &str) -> MappingResult<()> {
        if let Some(&existing) = self.by_resource.get(name) {
            return Err(MappingError::DuplicateResourceName {
                category: T::CATEGORY,
                resource: name.to_string(),
                existing: existing.descriptor().key(),
                duplicate: member.descriptor().key(),
            });
        }

        self.resource_by_ordinal[member.ordinal()] = name.to_string();
        self.by_resource.insert(name.to_string(), member);
        Ok(())
    }
}

/// Reads and validates the integer `id` field of a resolved entry.
fn read_id(entry: &Value, category: &'static str, key: &'static str) -> MappingResult<i32> {
    let found = entry.get(field::ID);
    match found.and_then(Value::as_i64) {
        Some(id) if (0..=i64::from(i32::MAX)).contains(&id) => Ok(id as i32),
        _ => Err(MappingError::InvalidEntry {
            category,
            key,
            field: field::ID,
            found: found.map_or_else(|| "nothing".to_string(), Value::to_string),
        }),
    }
}
