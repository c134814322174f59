//! Support types for an infinite grid of cubic blocks: axis/face vocabulary,
//! block identifiers, and fixed-extent chunk storage.

mod axis;
mod block;
mod chunk;


pub use crate::{
    axis::{
        Axis,
        Pole,
        Face,
        AXES,
        FACES,
        NUM_AXES,
        NUM_FACES,
    },
    block::{
        BlockId,
        AIR,
    },
    chunk::{
        ChunkBlocks,
        CHUNK_EXTENT,
        NUM_LTIS,
        gtc_to_cc,
        gtc_to_ltc,
        ltc_to_lti,
    },
};
