//! The game's block palette.
//!
//! Solidity is a property of the ID itself (see `BlockId::is_solid`): air is
//! the only non-solid block, so everything registered here blocks movement
//! and targeting.

use block_data::BlockId;

pub use block_data::AIR;


pub const STONE: BlockId = BlockId(1);
pub const DIRT: BlockId = BlockId(2);
pub const GRASS: BlockId = BlockId(3);
pub const SAND: BlockId = BlockId(4);
pub const WOOD: BlockId = BlockId(5);

/// Display name of a palette block, for the debug overlay.
pub fn block_name(block: BlockId) -> &'static str {
    match block {
        AIR => "air",
        STONE => "stone",
        DIRT => "dirt",
        GRASS => "grass",
        SAND => "sand",
        WOOD => "wood",
        _ => "unknown",
    }
}
