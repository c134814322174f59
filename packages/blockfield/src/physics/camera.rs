//! Player orientation: yaw and pitch angles, and the view direction derived
//! from them.

use vek::*;


/// Player look orientation, in degrees.
///
/// Invariants, re-established by `apply_look` every frame:
/// - yaw lies in (-180, 180], positive meaning looking right;
/// - pitch lies in [-90, 90], positive meaning looking up.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Orientation {
    pub yaw: f32,
    pub pitch: f32,
}

impl Orientation {
    pub fn new(yaw: f32, pitch: f32) -> Self {
        let mut o = Orientation { yaw, pitch };
        o.apply_look(Vec2::new(0.0, 0.0));
        o
    }

    /// Add the frame's look deltas (degrees), then wrap yaw into
    /// (-180, 180] and clamp pitch into [-90, 90].
    pub fn apply_look(&mut self, delta: Vec2<f32>) {
        self.yaw += delta.x;
        self.pitch += delta.y;

        self.yaw %= 360.0;
        if self.yaw > 180.0 {
            self.yaw -= 360.0;
        } else if self.yaw <= -180.0 {
            self.yaw += 360.0;
        }

        self.pitch = self.pitch.clamp(-90.0, 90.0);
    }

    /// Unit view direction.
    pub fn look_dir(&self) -> Vec3<f32> {
        let yaw = (90.0 - self.yaw).to_radians();
        let pitch = self.pitch.to_radians();
        Vec3 {
            x: yaw.cos() * pitch.cos(),
            y: pitch.sin(),
            z: -yaw.sin() * pitch.cos(),
        }
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Orientation { yaw: 0.0, pitch: 0.0 }
    }
}


#[test]
fn test_yaw_wraps_into_half_open_range() {
    let mut o = Orientation::default();
    for start in [-1000.0, -180.0, -179.9, 0.0, 179.9, 180.0, 1000.0] {
        o.yaw = 0.0;
        o.apply_look(Vec2::new(start, 0.0));
        assert!(o.yaw > -180.0 && o.yaw <= 180.0, "yaw {} from {}", o.yaw, start);
    }
}

#[test]
fn test_yaw_full_turn_idempotent() {
    let mut a = Orientation::default();
    let mut b = Orientation::default();
    a.apply_look(Vec2::new(37.5, 0.0));
    b.apply_look(Vec2::new(37.5, 0.0));
    for _ in 0..4 {
        b.apply_look(Vec2::new(360.0, 0.0));
    }
    assert!((a.yaw - b.yaw).abs() < 1e-3);
}

#[test]
fn test_yaw_boundary_values() {
    let mut o = Orientation::default();
    o.apply_look(Vec2::new(180.0, 0.0));
    assert_eq!(o.yaw, 180.0);
    o.yaw = 0.0;
    o.apply_look(Vec2::new(-180.0, 0.0));
    assert_eq!(o.yaw, 180.0);
}

#[test]
fn test_pitch_clamps_exactly() {
    let mut o = Orientation::default();
    o.apply_look(Vec2::new(0.0, 250.0));
    assert_eq!(o.pitch, 90.0);
    o.apply_look(Vec2::new(0.0, -300.0));
    assert_eq!(o.pitch, -90.0);
    o.apply_look(Vec2::new(0.0, 10.0));
    assert_eq!(o.pitch, -80.0);
}

#[test]
fn test_look_dir_cardinal() {
    // yaw 0 faces -z in this convention
    let o = Orientation::new(0.0, 0.0);
    let dir = o.look_dir();
    assert!(dir.x.abs() < 1e-6);
    assert!(dir.y.abs() < 1e-6);
    assert!((dir.z + 1.0).abs() < 1e-6);

    // straight up regardless of yaw
    let o = Orientation::new(45.0, 90.0);
    assert!((o.look_dir().y - 1.0).abs() < 1e-6);
}
