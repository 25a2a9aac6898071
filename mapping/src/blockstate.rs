//! Blockstate id → block type table.

use ident::{BlockType, LogicalId};
use serde_json::Value;

use crate::error::{MappingError, MappingResult};
use crate::field;
use crate::table::DenseTable;

/// The blockstate table for one protocol version.
///
/// Blockstates are a larger integer space than block ids: every block
/// entry lists the blockstates that resolve to it, and many blockstates
/// map onto one block. Each `blockstates` array belongs to exactly one
/// block in the document, so no conflict check applies here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockStateMapper {
    by_state: DenseTable<BlockType>,
}

impl BlockStateMapper {
    /// Builds the table from the block registry of a configuration
    /// document.
    ///
    /// Blocks without an entry or without a `blockstates` field are
    /// skipped; a present `blockstates` field must be an array of
    /// non-negative integers.
    pub fn build(document: &Value) -> MappingResult<Self> {
        let mut by_state = DenseTable::new(BlockType::MEMBERS.len(), BlockType::UNDEFINED);

        for &block in BlockType::MEMBERS {
            let Some(entry) = block.descriptor().resolve(document) else {
                continue;
            };
            let Some(value) = entry.get(field::BLOCKSTATES) else {
                continue;
            };
            let states = value.as_array().ok_or_else(|| invalid(block, value))?;
            for state in states {
                match state.as_i64() {
                    Some(id) if (0..=i64::from(i32::MAX)).contains(&id) => {
                        by_state.set(id as usize, block);
                    }
                    _ => return Err(invalid(block, state)),
                }
            }
        }

        Ok(Self { by_state })
    }

    /// Returns the block type of `blockstate_id`, or the `Undefined`
    /// sentinel for negative, out-of-range, or unmapped ids.
    #[must_use]
    pub fn block_of(&self, blockstate_id: i32) -> BlockType {
        self.by_state.get(blockstate_id)
    }
}

fn invalid(block: BlockType, found: &Value) -> MappingError {
    MappingError::InvalidEntry {
        category: BlockType::CATEGORY,
        key: block.key(),
        field: field::BLOCKSTATES,
        found: found.to_string(),
    }
}
