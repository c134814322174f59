//! The player's block hotbar.

use block_data::{BlockId, AIR};


pub const NUM_ITEM_SLOTS: usize = 8;

/// Most blocks one slot can hold.
pub const STACK_MAX: u8 = 64;

/// One hotbar slot. A count of zero means the slot is empty.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ItemSlot {
    pub block: BlockId,
    pub count: u8,
}

pub const EMPTY_SLOT: ItemSlot = ItemSlot { block: AIR, count: 0 };

/// The player's hotbar: a fixed row of block stacks plus the selected slot.
#[derive(Debug, Clone)]
pub struct Inventory {
    pub slots: [ItemSlot; NUM_ITEM_SLOTS],
    pub selection: usize,
}

impl Inventory {
    pub fn new() -> Self {
        Inventory {
            slots: [EMPTY_SLOT; NUM_ITEM_SLOTS],
            selection: 0,
        }
    }

    /// Credit one block, merging into an existing non-full stack of the same
    /// type if any, otherwise claiming the first empty slot. Silently drops
    /// the block if neither exists.
    pub fn add_block(&mut self, block: BlockId) {
        if block == AIR {
            return;
        }
        for slot in &mut self.slots {
            if slot.count > 0 && slot.block == block && slot.count < STACK_MAX {
                slot.count += 1;
                return;
            }
        }
        for slot in &mut self.slots {
            if slot.count == 0 {
                *slot = ItemSlot { block, count: 1 };
                return;
            }
        }
        debug!(?block, "inventory full, dropping block");
    }

    /// The selected slot.
    pub fn held(&self) -> ItemSlot {
        self.slots[self.selection]
    }

    /// Remove one block from the selected slot, if it holds any.
    pub fn take_held(&mut self) -> Option<BlockId> {
        let slot = &mut self.slots[self.selection];
        if slot.count == 0 {
            return None;
        }
        slot.count -= 1;
        let block = slot.block;
        if slot.count == 0 {
            *slot = EMPTY_SLOT;
        }
        Some(block)
    }

    /// Move the selection one slot left, wrapping around.
    pub fn cycle_left(&mut self) {
        self.selection = self.selection.checked_sub(1).unwrap_or(NUM_ITEM_SLOTS - 1);
    }

    /// Move the selection one slot right, wrapping around.
    pub fn cycle_right(&mut self) {
        self.selection = (self.selection + 1) % NUM_ITEM_SLOTS;
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
use crate::blocks;

#[test]
fn test_add_merges_then_claims_empty() {
    let mut inv = Inventory::new();
    inv.add_block(blocks::STONE);
    inv.add_block(blocks::STONE);
    inv.add_block(blocks::DIRT);
    assert_eq!(inv.slots[0], ItemSlot { block: blocks::STONE, count: 2 });
    assert_eq!(inv.slots[1], ItemSlot { block: blocks::DIRT, count: 1 });
}

#[test]
fn test_full_stack_spills_to_new_slot() {
    let mut inv = Inventory::new();
    for _ in 0..(STACK_MAX as usize + 1) {
        inv.add_block(blocks::STONE);
    }
    assert_eq!(inv.slots[0].count, STACK_MAX);
    assert_eq!(inv.slots[1], ItemSlot { block: blocks::STONE, count: 1 });
}

#[test]
fn test_take_held_empties_slot() {
    let mut inv = Inventory::new();
    inv.add_block(blocks::SAND);
    assert_eq!(inv.take_held(), Some(blocks::SAND));
    assert_eq!(inv.held(), EMPTY_SLOT);
    assert_eq!(inv.take_held(), None);
}

#[test]
fn test_selection_wraps_both_ways() {
    let mut inv = Inventory::new();
    inv.cycle_left();
    assert_eq!(inv.selection, NUM_ITEM_SLOTS - 1);
    inv.cycle_right();
    assert_eq!(inv.selection, 0);
    for _ in 0..NUM_ITEM_SLOTS {
        inv.cycle_right();
    }
    assert_eq!(inv.selection, 0);
}
