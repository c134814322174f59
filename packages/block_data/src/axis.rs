//! Axis-aligned direction vocabulary for the block grid.

use std::ops::Neg;
use vek::*;


/// One of the three grid axes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(u8)]
pub enum Axis {
    X,
    Y,
    Z,
}

pub const NUM_AXES: usize = 3;

/// All axes, in fixed X, Y, Z order.
pub const AXES: [Axis; NUM_AXES] = [Axis::X, Axis::Y, Axis::Z];

impl Axis {
    /// Component of `v` along self.
    pub fn of<T: Copy>(self, v: Vec3<T>) -> T {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
            Axis::Z => v.z,
        }
    }

    /// Mutable component of `v` along self.
    pub fn of_mut<T>(self, v: &mut Vec3<T>) -> &mut T {
        match self {
            Axis::X => &mut v.x,
            Axis::Y => &mut v.y,
            Axis::Z => &mut v.z,
        }
    }
}

/// Negative or positive direction along some axis.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(u8)]
pub enum Pole {
    Neg,
    Pos,
}

impl Pole {
    pub const fn to_int(self) -> i64 {
        match self {
            Pole::Neg => -1,
            Pole::Pos => 1,
        }
    }

    /// Pole matching the sign of `n`, or `None` if `n` is zero.
    pub fn of_f32(n: f32) -> Option<Self> {
        if n > 0.0 {
            Some(Pole::Pos)
        } else if n < 0.0 {
            Some(Pole::Neg)
        } else {
            None
        }
    }

    pub const fn neg(self) -> Self {
        match self {
            Pole::Neg => Pole::Pos,
            Pole::Pos => Pole::Neg,
        }
    }
}

impl Neg for Pole {
    type Output = Self;

    fn neg(self) -> Self {
        Pole::neg(self)
    }
}

/// One of the six faces of a grid cell, identified by its outward unit
/// normal.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(u8)]
pub enum Face {
    PosX,
    NegX,
    PosY,
    NegY,
    PosZ,
    NegZ,
}

pub const NUM_FACES: usize = 6;

pub const FACES: [Face; NUM_FACES] = [
    Face::PosX,
    Face::NegX,
    Face::PosY,
    Face::NegY,
    Face::PosZ,
    Face::NegZ,
];

impl Face {
    pub const fn to_axis_pole(self) -> (Axis, Pole) {
        match self {
            Face::PosX => (Axis::X, Pole::Pos),
            Face::NegX => (Axis::X, Pole::Neg),
            Face::PosY => (Axis::Y, Pole::Pos),
            Face::NegY => (Axis::Y, Pole::Neg),
            Face::PosZ => (Axis::Z, Pole::Pos),
            Face::NegZ => (Axis::Z, Pole::Neg),
        }
    }

    pub const fn from_axis_pole(axis: Axis, pole: Pole) -> Self {
        match (axis, pole) {
            (Axis::X, Pole::Pos) => Face::PosX,
            (Axis::X, Pole::Neg) => Face::NegX,
            (Axis::Y, Pole::Pos) => Face::PosY,
            (Axis::Y, Pole::Neg) => Face::NegY,
            (Axis::Z, Pole::Pos) => Face::PosZ,
            (Axis::Z, Pole::Neg) => Face::NegZ,
        }
    }

    pub const fn to_axis(self) -> Axis {
        self.to_axis_pole().0
    }

    pub const fn to_pole(self) -> Pole {
        self.to_axis_pole().1
    }

    /// Outward unit normal of self.
    pub fn to_vec(self) -> Vec3<i64> {
        let (axis, pole) = self.to_axis_pole();
        let mut v = Vec3::new(0, 0, 0);
        *axis.of_mut(&mut v) = pole.to_int();
        v
    }

    pub const fn neg(self) -> Self {
        let (axis, pole) = self.to_axis_pole();
        Self::from_axis_pole(axis, pole.neg())
    }
}

impl Neg for Face {
    type Output = Self;

    fn neg(self) -> Self {
        Face::neg(self)
    }
}

impl Into<Vec3<i64>> for Face {
    fn into(self) -> Vec3<i64> {
        self.to_vec()
    }
}


#[test]
fn test_face_vec_round_trip() {
    for face in FACES {
        let v = face.to_vec();
        assert_eq!(v.map(|n| n * n).sum(), 1);
        assert_eq!((-face).to_vec(), -v);
        assert_eq!(Face::from_axis_pole(face.to_axis(), face.to_pole()), face);
    }
}

#[test]
fn test_axis_component_access() {
    let mut v = Vec3::new(1, 2, 3);
    assert_eq!(Axis::X.of(v), 1);
    assert_eq!(Axis::Y.of(v), 2);
    assert_eq!(Axis::Z.of(v), 3);
    *Axis::Z.of_mut(&mut v) = 9;
    assert_eq!(v, Vec3::new(1, 2, 9));
}
