//! Per-frame player motion: input-derived displacement, gravity, per-axis
//! collision against solid blocks, and the locomotion state machine.

use super::block_query::BlockQuery;
use vek::*;


/// Half-width of the player's bounding prism. The prism spans
/// `pos.x - PLAYER_RADIUS` to `pos.x + PLAYER_RADIUS` (likewise z) and
/// `pos.y` to `pos.y + PLAYER_HEIGHT`; `pos` is the feet.
pub const PLAYER_RADIUS: f32 = 0.5;

/// Height of the player's bounding prism above the feet.
pub const PLAYER_HEIGHT: f32 = 1.5;

/// How far the player's eyes are above where they are standing.
pub const EYE_LEVEL: f32 = 1.5;

/// Vertical velocity granted by a jump, in tiles per frame.
pub const JUMP_VELOCITY: f32 = 0.18;

/// Vertical velocity lost per airborne frame.
pub const GRAVITY: f32 = 0.01;

/// Locomotion state. Swimming is reserved: nothing transitions into or out
/// of it yet.
///
/// Invariant: vertical velocity is exactly 0 while Standing.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Locomotion {
    Standing,
    Airborne,
    Swimming,
}

impl Locomotion {
    /// Display name for the debug overlay.
    pub fn name(self) -> &'static str {
        match self {
            Locomotion::Standing => "standing",
            Locomotion::Airborne => "airborne",
            Locomotion::Swimming => "swimming",
        }
    }
}

/// The frame's movement input, already dead-zoned and scaled.
#[derive(Debug, Copy, Clone, Default)]
pub struct MoveInput {
    /// Rightward walk magnitude, in tiles per frame.
    pub strafe: f32,
    /// Forward walk magnitude, in tiles per frame.
    pub forward: f32,
    /// Whether the jump button was pressed this frame.
    pub jump: bool,
}

/// Advance the player by one frame of movement.
///
/// Applies jump and gravity to the vertical velocity, composes the frame's
/// displacement from the walk input rotated by `yaw` (degrees), resolves it
/// per-axis against solid blocks, and updates the locomotion state
/// (Airborne on ground loss or jump, Standing on downward collision).
pub fn step_movement(
    input: MoveInput,
    yaw: f32,
    pos: &mut Vec3<f32>,
    y_vel: &mut f32,
    loco: &mut Locomotion,
    world: &impl BlockQuery,
) {
    if *loco == Locomotion::Standing {
        debug_assert!(*y_vel == 0.0, "standing with nonzero vertical velocity");
        if input.jump {
            *loco = Locomotion::Airborne;
            *y_vel = JUMP_VELOCITY;
        }
    }

    match *loco {
        Locomotion::Airborne => *y_vel -= GRAVITY,
        // swimming physics not implemented yet
        Locomotion::Swimming => (),
        Locomotion::Standing => (),
    }

    let theta = (yaw + 90.0).to_radians();
    let motion = Vec3 {
        x: input.strafe * theta.sin() - input.forward * theta.cos(),
        y: *y_vel,
        z: -input.forward * theta.sin() - input.strafe * theta.cos(),
    };

    resolve_motion(motion, pos, y_vel, loco, world);

    // ground-loss check: free-fall begins next frame
    if *loco == Locomotion::Standing {
        if !world.pos_is_solid(*pos + Vec3::new(0.0, -1.0, 0.0)) {
            *loco = Locomotion::Airborne;
        }
    }
}

/// Resolve a candidate displacement against the world and apply it.
///
/// Each axis is tested independently with a single boundary probe: a point
/// offset from the candidate position by the player radius along the
/// movement direction (horizontal axes), or the candidate feet position
/// itself (vertical axis). A solid probe zeroes that axis's component. This
/// is not swept collision and can miss thin obstacles at high speed, which
/// is acceptable at the displacement magnitudes one frame produces.
fn resolve_motion(
    mut motion: Vec3<f32>,
    pos: &mut Vec3<f32>,
    y_vel: &mut f32,
    loco: &mut Locomotion,
    world: &impl BlockQuery,
) {
    // clamp fall speed to one tile per frame to avoid tunneling through the
    // floor on large falls
    if motion.y < -1.0 {
        motion.y = -1.0;
    }

    if motion.x != 0.0 {
        let probe = Vec3 {
            x: pos.x + motion.x + PLAYER_RADIUS.copysign(motion.x),
            y: pos.y,
            z: pos.z,
        };
        if world.pos_is_solid(probe) {
            motion.x = 0.0;
        }
    }

    if motion.y > 0.0 {
        // upward collision not handled yet; only reachable airborne
        debug_assert!(*loco == Locomotion::Airborne);
    } else if motion.y < 0.0 {
        debug_assert!(*loco == Locomotion::Airborne);
        let probe = Vec3 {
            x: pos.x,
            y: pos.y + motion.y,
            z: pos.z,
        };
        if world.pos_is_solid(probe) {
            // player hit the ground
            *loco = Locomotion::Standing;
            *y_vel = 0.0;
            motion.y = 0.0;
        }
    }

    if motion.z != 0.0 {
        let probe = Vec3 {
            x: pos.x,
            y: pos.y,
            z: pos.z + motion.z + PLAYER_RADIUS.copysign(motion.z),
        };
        if world.pos_is_solid(probe) {
            motion.z = 0.0;
        }
    }

    *pos += motion;
}


#[cfg(test)]
use std::collections::HashSet;

/// Test world: a set of solid gtcs.
#[cfg(test)]
#[derive(Debug, Default)]
struct SolidSet(HashSet<Vec3<i64>>);

#[cfg(test)]
impl SolidSet {
    fn floor_at(y: i64) -> Self {
        let mut set = HashSet::new();
        for x in -10..10 {
            for z in -10..10 {
                set.insert(Vec3 { x, y, z });
            }
        }
        SolidSet(set)
    }
}

#[cfg(test)]
impl BlockQuery for SolidSet {
    fn is_solid(&self, gtc: Vec3<i64>) -> bool {
        self.0.contains(&gtc)
    }
}

#[test]
fn test_walk_into_wall_zeroes_only_that_axis() {
    let mut world = SolidSet::floor_at(4);
    world.0.insert(Vec3::new(1, 5, 0));

    let mut pos = Vec3::new(0.5, 5.0, 0.5);
    let mut y_vel = 0.0;
    let mut loco = Locomotion::Standing;

    // walking +x and +z diagonally; x is blocked, z is free
    let motion = Vec3::new(0.1, 0.0, 0.1);
    resolve_motion(motion, &mut pos, &mut y_vel, &mut loco, &world);

    assert_eq!(pos.x, 0.5);
    assert_eq!(pos.y, 5.0);
    assert_eq!(pos.z, 0.6);
}

#[test]
fn test_free_walk_applies_both_axes() {
    let world = SolidSet::floor_at(4);
    let mut pos = Vec3::new(0.5, 5.0, 0.5);
    let mut y_vel = 0.0;
    let mut loco = Locomotion::Standing;

    resolve_motion(Vec3::new(0.1, 0.0, -0.1), &mut pos, &mut y_vel, &mut loco, &world);

    assert!((pos.x - 0.6).abs() < 1e-6);
    assert!((pos.z - 0.4).abs() < 1e-6);
}

#[test]
fn test_standing_velocity_stays_zero() {
    let world = SolidSet::floor_at(4);
    let mut pos = Vec3::new(0.5, 5.0, 0.5);
    let mut y_vel = 0.0;
    let mut loco = Locomotion::Standing;

    for _ in 0..100 {
        let input = MoveInput { strafe: 0.02, forward: 0.03, jump: false };
        step_movement(input, 30.0, &mut pos, &mut y_vel, &mut loco, &world);
        assert_eq!(loco, Locomotion::Standing);
        assert_eq!(y_vel, 0.0);
    }
}

#[test]
fn test_jump_arc_settles_back_on_floor() {
    let world = SolidSet::floor_at(4);
    let mut pos = Vec3::new(0.5, 5.0, 0.5);
    let mut y_vel = 0.0;
    let mut loco = Locomotion::Standing;

    let jump = MoveInput { jump: true, ..MoveInput::default() };
    step_movement(jump, 0.0, &mut pos, &mut y_vel, &mut loco, &world);
    assert_eq!(loco, Locomotion::Airborne);
    assert_eq!(y_vel, JUMP_VELOCITY - GRAVITY);

    let mut frames = 0;
    while loco == Locomotion::Airborne {
        step_movement(MoveInput::default(), 0.0, &mut pos, &mut y_vel, &mut loco, &world);
        frames += 1;
        assert!(frames < 100, "never landed");
    }
    assert_eq!(loco, Locomotion::Standing);
    assert_eq!(y_vel, 0.0);
    assert!((pos.y - 5.0).abs() < 1e-5, "settled at {}", pos.y);
}

#[test]
fn test_ground_loss_starts_free_fall() {
    let mut world = SolidSet::floor_at(4);
    let mut pos = Vec3::new(0.5, 5.0, 0.5);
    let mut y_vel = 0.0;
    let mut loco = Locomotion::Standing;

    step_movement(MoveInput::default(), 0.0, &mut pos, &mut y_vel, &mut loco, &world);
    assert_eq!(loco, Locomotion::Standing);

    world.0.remove(&Vec3::new(0, 4, 0));
    step_movement(MoveInput::default(), 0.0, &mut pos, &mut y_vel, &mut loco, &world);
    assert_eq!(loco, Locomotion::Airborne);
}

#[test]
fn test_fall_speed_clamped_to_one_tile_per_frame() {
    let world = SolidSet::floor_at(-8);
    let mut pos = Vec3::new(0.5, 60.0, 0.5);
    let mut y_vel = 0.0;
    let mut loco = Locomotion::Airborne;

    let mut prev_y = pos.y;
    while loco == Locomotion::Airborne {
        step_movement(MoveInput::default(), 0.0, &mut pos, &mut y_vel, &mut loco, &world);
        assert!(prev_y - pos.y <= 1.0 + 1e-6);
        prev_y = pos.y;
    }
    // landed on the floor rather than tunneling through it
    assert!(pos.y >= -7.0);
}
