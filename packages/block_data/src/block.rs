//! Block identifiers.


/// Identifier of a block type, as stored per-tile in a chunk.
///
/// Which IDs are registered, and what they mean, is the game's concern; this
/// crate only hard-guarantees the air block.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct BlockId(pub u16);

/// The "air" block, which is hard-guaranteed to exist. Air is the value
/// unoccupied tiles hold, and the value block queries outside the generated
/// world report.
pub const AIR: BlockId = BlockId(0);

impl BlockId {
    /// Whether this block occludes movement and block targeting. Air is the
    /// only non-solid block.
    pub const fn is_solid(self) -> bool {
        self.0 != AIR.0
    }
}


#[test]
fn test_air_is_not_solid() {
    assert!(!AIR.is_solid());
    assert!(BlockId(1).is_solid());
}
