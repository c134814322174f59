//! Fixed-extent chunk storage of block IDs, and the coordinate conversions
//! around it.
//!
//! The world is divided into full-height chunk columns. A _gtc_ (global tile
//! coordinate) names a tile in the world, a _cc_ (chunk coordinate) names a
//! chunk column, and an _ltc_ (local tile coordinate) names a tile within a
//! chunk.

use crate::block::{BlockId, AIR};
use vek::*;


/// Extent of a chunk in tiles, per axis.
pub const CHUNK_EXTENT: Vec3<i64> = Vec3 { x: 16, y: 64, z: 16 };

/// Number of tiles in a chunk.
pub const NUM_LTIS: usize =
    (CHUNK_EXTENT.x * CHUNK_EXTENT.y * CHUNK_EXTENT.z) as usize;

/// Chunk coordinate containing the given gtc.
pub fn gtc_to_cc(gtc: Vec3<i64>) -> Vec2<i64> {
    Vec2 {
        x: gtc.x.div_euclid(CHUNK_EXTENT.x),
        y: gtc.z.div_euclid(CHUNK_EXTENT.z),
    }
}

/// Local tile coordinate of the given gtc within its chunk, or `None` if the
/// gtc is above or below the world's height range.
pub fn gtc_to_ltc(gtc: Vec3<i64>) -> Option<Vec3<i64>> {
    if gtc.y < 0 || gtc.y >= CHUNK_EXTENT.y {
        return None;
    }
    Some(Vec3 {
        x: gtc.x.rem_euclid(CHUNK_EXTENT.x),
        y: gtc.y,
        z: gtc.z.rem_euclid(CHUNK_EXTENT.z),
    })
}

/// Flat storage index of an ltc.
pub fn ltc_to_lti(ltc: Vec3<i64>) -> usize {
    debug_assert!(ltc.x >= 0 && ltc.x < CHUNK_EXTENT.x);
    debug_assert!(ltc.y >= 0 && ltc.y < CHUNK_EXTENT.y);
    debug_assert!(ltc.z >= 0 && ltc.z < CHUNK_EXTENT.z);
    ((ltc.y * CHUNK_EXTENT.z + ltc.z) * CHUNK_EXTENT.x + ltc.x) as usize
}

/// Per-tile block ID storage for one chunk.
#[derive(Debug, Clone)]
pub struct ChunkBlocks(Box<[BlockId; NUM_LTIS]>);

impl ChunkBlocks {
    /// Construct filled with air.
    pub fn new() -> Self {
        ChunkBlocks(
            vec![AIR; NUM_LTIS]
                .into_boxed_slice()
                .try_into()
                .unwrap_or_else(|_| unreachable!()),
        )
    }

    pub fn get(&self, ltc: Vec3<i64>) -> BlockId {
        self.0[ltc_to_lti(ltc)]
    }

    pub fn set(&mut self, ltc: Vec3<i64>, block: BlockId) {
        self.0[ltc_to_lti(ltc)] = block;
    }
}

impl Default for ChunkBlocks {
    fn default() -> Self {
        Self::new()
    }
}


#[test]
fn test_coord_splitting() {
    for x in -40..40 {
        for z in -40..40 {
            let gtc = Vec3 { x, y: 20, z };
            let cc = gtc_to_cc(gtc);
            let ltc = gtc_to_ltc(gtc).unwrap();
            assert_eq!(cc.x * CHUNK_EXTENT.x + ltc.x, gtc.x);
            assert_eq!(cc.y * CHUNK_EXTENT.z + ltc.z, gtc.z);
            assert!(ltc.x >= 0 && ltc.x < CHUNK_EXTENT.x);
            assert!(ltc.z >= 0 && ltc.z < CHUNK_EXTENT.z);
        }
    }
}

#[test]
fn test_height_range() {
    assert_eq!(gtc_to_ltc(Vec3::new(0, -1, 0)), None);
    assert_eq!(gtc_to_ltc(Vec3::new(0, CHUNK_EXTENT.y, 0)), None);
    assert!(gtc_to_ltc(Vec3::new(0, CHUNK_EXTENT.y - 1, 0)).is_some());
}

#[test]
fn test_lti_unique() {
    let mut seen = vec![false; NUM_LTIS];
    for y in 0..CHUNK_EXTENT.y {
        for z in 0..CHUNK_EXTENT.z {
            for x in 0..CHUNK_EXTENT.x {
                let lti = ltc_to_lti(Vec3 { x, y, z });
                assert!(!seen[lti]);
                seen[lti] = true;
            }
        }
    }
}

#[test]
fn test_chunk_get_set() {
    let mut chunk = ChunkBlocks::new();
    let ltc = Vec3::new(3, 50, 9);
    assert_eq!(chunk.get(ltc), AIR);
    chunk.set(ltc, BlockId(2));
    assert_eq!(chunk.get(ltc), BlockId(2));
    assert_eq!(chunk.get(Vec3::new(4, 50, 9)), AIR);
}
