//! Player physics and block targeting.
//!
//! Everything here operates against an abstract block grid (the `BlockQuery`
//! trait) and owns no state of its own beyond what callers pass in:
//!
//! - `camera` maintains the yaw/pitch orientation and derives the view
//!   direction from it.
//! - `movement` advances the player's position under input and gravity, with
//!   per-axis collision against solid blocks, and drives the locomotion
//!   state machine.
//! - `looking_at` walks the grid along the view ray to find the targeted
//!   block and struck face.

pub mod block_query;
pub mod camera;
pub mod looking_at;
pub mod movement;


/// Physics system common re-exports.
pub mod prelude {
    pub use super::{
        block_query::BlockQuery,
        camera::Orientation,
        looking_at::{
            compute_looking_at,
            LookingAt,
            SELECT_RADIUS,
        },
        movement::{
            step_movement,
            Locomotion,
            MoveInput,
            EYE_LEVEL,
            PLAYER_RADIUS,
        },
    };
}
