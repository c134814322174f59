//! Per-frame input snapshots.
//!
//! The input device layer is an external collaborator; it hands the game one
//! `InputFrame` per frame holding edge-triggered button presses and the raw
//! signed positions of the two analog sticks. Dead-zoning and scaling into
//! look/walk deltas happen here.

use crate::settings::Settings;
use std::collections::HashSet;
use vek::*;


/// Raw stick values this close to center are ignored.
const STICK_DEAD_ZONE: i32 = 10;

/// Degrees of look per raw look-stick unit per frame.
const LOOK_SCALE: f32 = 1.0 / 100.0;

/// Tiles of walk per raw move-stick unit per frame.
const MOVE_SCALE: f32 = 1.0 / 1000.0;

/// A named button, reported the frame it is pressed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Button {
    /// Advance the title screen, open or close the pause menu.
    Start,
    Jump,
    /// Break the selected block.
    Break,
    /// Place the held block against the selected face.
    Place,
    ToggleDebug,
    InventoryLeft,
    InventoryRight,
    MenuUp,
    MenuDown,
    MenuConfirm,
    MenuCancel,
}

/// Snapshot of one frame of input.
#[derive(Debug, Clone, Default)]
pub struct InputFrame {
    /// Buttons that went down this frame.
    pub pressed: HashSet<Button>,
    /// Raw look stick position, x right, y up.
    pub look_stick: Vec2<i32>,
    /// Raw move stick position, x right, y forward.
    pub move_stick: Vec2<i32>,
}

fn dead_zone(raw: i32) -> f32 {
    if raw.abs() > STICK_DEAD_ZONE {
        raw as f32
    } else {
        0.0
    }
}

impl InputFrame {
    pub fn pressed(&self, button: Button) -> bool {
        self.pressed.contains(&button)
    }

    /// Builder convenience for scripted input.
    pub fn with(mut self, button: Button) -> Self {
        self.pressed.insert(button);
        self
    }

    /// The frame's look delta in degrees, yaw then pitch.
    pub fn look_delta(&self, settings: &Settings) -> Vec2<f32> {
        let mut delta = self.look_stick.map(dead_zone)
            * LOOK_SCALE
            * settings.look_sensitivity;
        if settings.invert_look_y {
            delta.y = -delta.y;
        }
        delta
    }

    /// The frame's walk input in tiles, strafe then forward.
    pub fn walk_delta(&self) -> Vec2<f32> {
        self.move_stick.map(dead_zone) * MOVE_SCALE
    }
}


#[test]
fn test_dead_zone_swallows_small_values() {
    let frame = InputFrame {
        look_stick: Vec2::new(10, -10),
        move_stick: Vec2::new(-3, 7),
        ..InputFrame::default()
    };
    let settings = Settings::default();
    assert_eq!(frame.look_delta(&settings), Vec2::new(0.0, 0.0));
    assert_eq!(frame.walk_delta(), Vec2::new(0.0, 0.0));
}

#[test]
fn test_axes_scale_past_dead_zone() {
    let frame = InputFrame {
        look_stick: Vec2::new(50, -20),
        move_stick: Vec2::new(0, 100),
        ..InputFrame::default()
    };
    let settings = Settings::default();
    let look = frame.look_delta(&settings);
    assert!((look.x - 0.5).abs() < 1e-6);
    assert!((look.y + 0.2).abs() < 1e-6);
    let walk = frame.walk_delta();
    assert_eq!(walk.x, 0.0);
    assert!((walk.y - 0.1).abs() < 1e-6);
}

#[test]
fn test_invert_look_y() {
    let frame = InputFrame {
        look_stick: Vec2::new(0, 40),
        ..InputFrame::default()
    };
    let settings = Settings {
        invert_look_y: true,
        ..Settings::default()
    };
    assert!((frame.look_delta(&settings).y + 0.4).abs() < 1e-6);
}
