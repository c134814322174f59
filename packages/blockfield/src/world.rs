//! The world store: chunked block grid plus terrain generation.

use crate::{
    blocks,
    physics::block_query::BlockQuery,
};
use block_data::{
    BlockId,
    ChunkBlocks,
    AIR,
    CHUNK_EXTENT,
    gtc_to_cc,
    gtc_to_ltc,
};
use std::collections::HashMap;
use vek::*;
use bracket_noise::prelude::FastNoise;
use rand::Rng;
use rand_pcg::Pcg64Mcg;
use rand::SeedableRng;


/// Chunk columns generated around the origin on world creation, per axis,
/// in each direction.
const GENERATE_RADIUS: i64 = 2;

/// An open world session's block grid.
///
/// A fixed square of chunk columns around the origin is generated up front;
/// block queries outside it (or outside the height range) are total and
/// report air, never an error.
#[derive(Debug)]
pub struct World {
    seed: u64,
    chunks: HashMap<Vec2<i64>, ChunkBlocks>,
}

impl World {
    /// Generate a fresh world from `seed`.
    pub fn generate(seed: u64) -> Self {
        let mut chunks = HashMap::new();
        for cx in -GENERATE_RADIUS..=GENERATE_RADIUS {
            for cz in -GENERATE_RADIUS..=GENERATE_RADIUS {
                let cc = Vec2 { x: cx, y: cz };
                chunks.insert(cc, generate_chunk(seed, cc));
            }
        }
        info!(seed, chunks = chunks.len(), "generated world");
        World { seed, chunks }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Block at `gtc`, air outside the generated world.
    pub fn get_block(&self, gtc: Vec3<i64>) -> BlockId {
        let Some(ltc) = gtc_to_ltc(gtc) else { return AIR };
        self.chunks
            .get(&gtc_to_cc(gtc))
            .map(|chunk| chunk.get(ltc))
            .unwrap_or(AIR)
    }

    /// Overwrite the block at `gtc`. A no-op outside the generated world.
    pub fn set_block(&mut self, gtc: Vec3<i64>, block: BlockId) {
        let Some(ltc) = gtc_to_ltc(gtc) else { return };
        if let Some(chunk) = self.chunks.get_mut(&gtc_to_cc(gtc)) {
            chunk.set(ltc, block);
        }
    }

    /// Feet position for a player spawning at the world origin: centered in
    /// the origin block column, standing on the topmost solid block.
    pub fn spawn_pos(&self) -> Vec3<f32> {
        let y = self.spawn_height(0, 0);
        Vec3 { x: 0.5, y: y as f32, z: 0.5 }
    }

    /// First y whose block is non-solid above the terrain in column (x, z),
    /// found by scanning the column top-down.
    pub fn spawn_height(&self, x: i64, z: i64) -> i64 {
        for y in (0..CHUNK_EXTENT.y).rev() {
            if self.get_block(Vec3 { x, y, z }).is_solid() {
                return y + 1;
            }
        }
        0
    }
}

impl BlockQuery for World {
    fn is_solid(&self, gtc: Vec3<i64>) -> bool {
        self.get_block(gtc).is_solid()
    }
}

/// Generate one chunk column: noise-heightmap terrain of stone under dirt
/// under grass, with occasional wood pillars for landmarks.
fn generate_chunk(seed: u64, cc: Vec2<i64>) -> ChunkBlocks {
    let mut chunk = ChunkBlocks::new();
    let mut noise = FastNoise::seeded(seed);
    noise.set_frequency(1.0 / 75.0);
    let mut rng = Pcg64Mcg::seed_from_u64(
        seed ^ (cc.x as u64).wrapping_mul(0x9e3779b9) ^ (cc.y as u64).rotate_left(32),
    );

    for x in 0..CHUNK_EXTENT.x {
        for z in 0..CHUNK_EXTENT.z {
            let height =
                noise.get_noise(
                    (x + cc.x * CHUNK_EXTENT.x) as f32,
                    (z + cc.y * CHUNK_EXTENT.z) as f32,
                )
                / 2.0
                * 20.0
                + 32.0;
            let height = (height.floor() as i64).clamp(1, CHUNK_EXTENT.y - 1);

            for y in 0..height {
                let block = if y >= height - 1 {
                    blocks::GRASS
                } else if y >= height - 4 {
                    blocks::DIRT
                } else {
                    blocks::STONE
                };
                chunk.set(Vec3 { x, y, z }, block);
            }

            if rng.gen_ratio(1, 256) && height + 4 < CHUNK_EXTENT.y {
                for y in height..height + 4 {
                    chunk.set(Vec3 { x, y, z }, blocks::WOOD);
                }
            }
        }
    }
    chunk
}


#[test]
fn test_out_of_world_queries_are_air() {
    let world = World::generate(1);
    assert_eq!(world.get_block(Vec3::new(0, -1, 0)), AIR);
    assert_eq!(world.get_block(Vec3::new(0, CHUNK_EXTENT.y, 0)), AIR);
    assert_eq!(world.get_block(Vec3::new(100_000, 10, 0)), AIR);
    assert!(!world.is_solid(Vec3::new(0, 200, 0)));
}

#[test]
fn test_set_block_round_trip() {
    let mut world = World::generate(2);
    let gtc = Vec3::new(3, 50, -7);
    world.set_block(gtc, blocks::STONE);
    assert_eq!(world.get_block(gtc), blocks::STONE);
    world.set_block(gtc, AIR);
    assert_eq!(world.get_block(gtc), AIR);
    // no-op outside the generated world
    world.set_block(Vec3::new(100_000, 10, 0), blocks::STONE);
    assert_eq!(world.get_block(Vec3::new(100_000, 10, 0)), AIR);
}

#[test]
fn test_spawn_stands_on_solid_ground() {
    let world = World::generate(3);
    let pos = world.spawn_pos();
    let feet = pos.map(|n| n.floor() as i64);
    assert!(!world.is_solid(feet));
    assert!(world.is_solid(feet - Vec3::new(0, 1, 0)));
}

#[test]
fn test_same_seed_same_terrain() {
    let a = World::generate(42);
    let b = World::generate(42);
    for gtc in [Vec3::new(0, 30, 0), Vec3::new(-20, 31, 14), Vec3::new(9, 33, -9)] {
        assert_eq!(a.get_block(gtc), b.get_block(gtc));
    }
}
