//! The block grid as physics sees it.

use vek::*;


/// Solidity lookup over the infinite block grid.
///
/// Implementations must be total and deterministic: a query at any gtc
/// answers, and coordinates outside the generated world report non-solid.
/// Queries are side-effect-free from the physics' perspective.
pub trait BlockQuery {
    /// Whether the tile at `gtc` blocks movement and targeting.
    fn is_solid(&self, gtc: Vec3<i64>) -> bool;

    /// Whether the tile containing the point `pos` is solid.
    fn pos_is_solid(&self, pos: Vec3<f32>) -> bool {
        self.is_solid(pos.map(|n| n.floor() as i64))
    }
}

impl<'a, Q: BlockQuery> BlockQuery for &'a Q {
    fn is_solid(&self, gtc: Vec3<i64>) -> bool {
        (**self).is_solid(gtc)
    }
}
