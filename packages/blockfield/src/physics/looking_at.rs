//! Compute which block is being looked at from a given perspective.
//!
//! Incremental grid traversal after "A Fast Voxel Traversal Algorithm for
//! Ray Tracing" by John Amanatides and Andrew Woo: the ray is advanced one
//! block-boundary crossing at a time, always along the axis whose next
//! crossing is nearest, so each step moves exactly one axis by one block.
//! No allocation; at most `max_steps` iterations.

use super::block_query::BlockQuery;
use block_data::{Axis, Pole, Face, AXES};
use vek::*;


/// How far the block selection can reach, in traversal steps.
pub const SELECT_RADIUS: u32 = 5;

/// Information on which block is being looked at from some perspective.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct LookingAt {
    /// Coordinate of the first solid block the ray enters.
    pub block: Vec3<i64>,
    /// Which face of that block the ray struck: the face whose outward
    /// normal points back toward the ray origin along the stepped axis.
    pub face: Face,
}

// per-axis traversal state; an axis with a zero direction component has no
// walk at all and is never chosen
#[derive(Debug, Copy, Clone)]
struct AxisWalk {
    // direction the block coordinate moves on this axis
    step: Pole,
    // ray parameter to cross one full block on this axis
    t_delta: f32,
    // ray parameter at which the next boundary on this axis is crossed
    t_max: f32,
}

fn axis_walk(origin: f32, dir: f32) -> Option<AxisWalk> {
    let step = Pole::of_f32(dir)?;
    let t_delta = (1.0 / dir).abs();
    // fractional offset within the starting block. Exactly on a boundary
    // this is 0, so a negative-going axis steps immediately at t = 0.
    let frac = origin - origin.floor();
    let t_max = match step {
        Pole::Pos => (1.0 - frac) * t_delta,
        Pole::Neg => frac * t_delta,
    };
    Some(AxisWalk { step, t_delta, t_max })
}

/// Walk the grid from `eye` along `dir` for up to `max_steps` boundary
/// crossings and report the first solid block entered, with the struck face.
///
/// `dir` need not be normalized, but the reach is measured in traversal
/// steps, not distance, so callers wanting a distance bound should pass a
/// unit vector.
pub fn compute_looking_at(
    eye: Vec3<f32>,
    dir: Vec3<f32>,
    max_steps: u32,
    world: &impl BlockQuery,
) -> Option<LookingAt> {
    let mut block = eye.map(|n| n.floor() as i64);
    let mut walks = [
        axis_walk(eye.x, dir.x),
        axis_walk(eye.y, dir.y),
        axis_walk(eye.z, dir.z),
    ];

    for _ in 0..max_steps {
        // choose the enabled axis with the smallest t_max. Ties go to the
        // later axis in X, Y, Z order, which only matters for rays exactly
        // on grid diagonals.
        let mut chosen: Option<Axis> = None;
        for axis in AXES {
            if let Some(walk) = walks[axis as usize] {
                let better = match chosen {
                    Some(prev) => {
                        let prev_walk = walks[prev as usize]
                            .unwrap_or_else(|| unreachable!());
                        walk.t_max <= prev_walk.t_max
                    }
                    None => true,
                };
                if better {
                    chosen = Some(axis);
                }
            }
        }
        // no enabled axis means a zero direction vector
        let axis = chosen?;

        let walk = walks[axis as usize]
            .as_mut()
            .unwrap_or_else(|| unreachable!());
        *axis.of_mut(&mut block) += walk.step.to_int();
        walk.t_max += walk.t_delta;
        let face = Face::from_axis_pole(axis, walk.step.neg());

        if world.is_solid(block) {
            return Some(LookingAt { block, face });
        }
    }

    None
}


#[cfg(test)]
use std::collections::HashSet;

#[cfg(test)]
#[derive(Debug, Default)]
struct SolidSet(HashSet<Vec3<i64>>);

#[cfg(test)]
impl BlockQuery for SolidSet {
    fn is_solid(&self, gtc: Vec3<i64>) -> bool {
        self.0.contains(&gtc)
    }
}

#[cfg(test)]
fn solid(blocks: &[(i64, i64, i64)]) -> SolidSet {
    SolidSet(blocks.iter().map(|&(x, y, z)| Vec3 { x, y, z }).collect())
}

#[test]
fn test_straight_down_hits_floor() {
    // eye 2.5 above a floor block at y=4: blocks 6 -> 5 -> 4, two steps
    let world = solid(&[(0, 4, 0)]);
    let hit = compute_looking_at(
        Vec3::new(0.5, 6.5, 0.5),
        Vec3::new(0.0, -1.0, 0.0),
        SELECT_RADIUS,
        &world,
    );
    assert_eq!(
        hit,
        Some(LookingAt { block: Vec3::new(0, 4, 0), face: Face::PosY }),
    );
}

#[test]
fn test_north_wall_scenario() {
    // eye at (0.5, 1.5, 0.5) looking +z at a wall plane at z=3
    let mut world = SolidSet::default();
    for x in -2..3 {
        for y in 0..4 {
            world.0.insert(Vec3::new(x, y, 3));
        }
    }
    let hit = compute_looking_at(
        Vec3::new(0.5, 1.5, 0.5),
        Vec3::new(0.0, 0.0, 1.0),
        SELECT_RADIUS,
        &world,
    );
    assert_eq!(
        hit,
        Some(LookingAt { block: Vec3::new(0, 1, 3), face: Face::NegZ }),
    );
}

#[test]
fn test_empty_world_no_selection() {
    let world = SolidSet::default();
    for dir in [
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(-0.3, 0.8, 0.52),
        Vec3::new(0.0, -1.0, 0.0),
    ] {
        let hit = compute_looking_at(
            Vec3::new(0.2, 10.7, -3.4),
            dir.normalized(),
            SELECT_RADIUS,
            &world,
        );
        assert_eq!(hit, None);
    }
}

#[test]
fn test_out_of_reach_no_selection() {
    // solid block six steps away, one beyond the reach
    let world = solid(&[(6, 0, 0)]);
    let hit = compute_looking_at(
        Vec3::new(0.5, 0.5, 0.5),
        Vec3::new(1.0, 0.0, 0.0),
        SELECT_RADIUS,
        &world,
    );
    assert_eq!(hit, None);

    let world = solid(&[(5, 0, 0)]);
    let hit = compute_looking_at(
        Vec3::new(0.5, 0.5, 0.5),
        Vec3::new(1.0, 0.0, 0.0),
        SELECT_RADIUS,
        &world,
    );
    assert_eq!(
        hit,
        Some(LookingAt { block: Vec3::new(5, 0, 0), face: Face::NegX }),
    );
}

#[test]
fn test_boundary_aligned_eye_steps_immediately() {
    // eye exactly on the boundary y=6 going down: first step is at t=0,
    // entering block y=5 before any other axis moves
    let world = solid(&[(0, 5, 0)]);
    let hit = compute_looking_at(
        Vec3::new(0.5, 6.0, 0.5),
        Vec3::new(0.01, -1.0, 0.0).normalized(),
        1,
        &world,
    );
    assert_eq!(
        hit,
        Some(LookingAt { block: Vec3::new(0, 5, 0), face: Face::PosY }),
    );
}

#[test]
fn test_axis_aligned_ray_disables_other_axes() {
    // exactly level and axis-aligned: only z should ever advance
    let world = solid(&[(0, 0, -4)]);
    let hit = compute_looking_at(
        Vec3::new(0.5, 0.5, 0.5),
        Vec3::new(0.0, 0.0, -1.0),
        SELECT_RADIUS,
        &world,
    );
    assert_eq!(
        hit,
        Some(LookingAt { block: Vec3::new(0, 0, -4), face: Face::PosZ }),
    );
}

#[test]
fn test_diagonal_tie_break_is_deterministic() {
    // a perfect xz diagonal from the block center ties every crossing; the
    // later axis (z) must win each tie
    let world = solid(&[(1, 0, 1)]);
    let hit = compute_looking_at(
        Vec3::new(0.5, 0.5, 0.5),
        Vec3::new(1.0, 0.0, 1.0),
        SELECT_RADIUS,
        &world,
    )
    .unwrap();
    assert_eq!(hit.block, Vec3::new(1, 0, 1));
    // first crossing goes +z, second +x into the target
    assert_eq!(hit.face, Face::NegX);
}
