//! The field: an open world session with a player in it.
//!
//! Owns everything that lives for the duration of a play session: the world
//! store, the player's position, orientation, locomotion state, inventory,
//! and the frame's block-selection snapshot.

use crate::{
    blocks,
    input::{Button, InputFrame},
    inventory::Inventory,
    physics::prelude::*,
    scene::{DebugView, FieldView, HotbarView},
    settings::Settings,
    world::World,
};
use block_data::gtc_to_cc;
use vek::*;


/// An open world session.
#[derive(Debug)]
pub struct Field {
    pub world: World,
    pub inventory: Inventory,
    /// The player's feet.
    pub pos: Vec3<f32>,
    pub y_vel: f32,
    pub orientation: Orientation,
    pub loco: Locomotion,
    /// Selection snapshot from the most recent frame.
    pub looking_at: Option<LookingAt>,
    pub show_debug: bool,
}

impl Field {
    /// Generate a world from `seed` and spawn the player at the origin.
    pub fn new(seed: u64, settings: &Settings) -> Self {
        let world = World::generate(seed);
        let pos = world.spawn_pos();
        info!(?pos, "spawned player");
        Field {
            world,
            inventory: Inventory::new(),
            pos,
            y_vel: 0.0,
            orientation: Orientation::default(),
            loco: Locomotion::Standing,
            looking_at: None,
            show_debug: settings.show_debug,
        }
    }

    /// One frame of field logic: block interaction, inventory and debug
    /// toggles, look, movement, and finally the selection recompute.
    ///
    /// Block interaction runs against the previous frame's selection
    /// snapshot, which is what the player saw outlined when they pressed
    /// the button.
    pub fn update(&mut self, input: &InputFrame, settings: &Settings) {
        if input.pressed(Button::Break) {
            if let Some(looking_at) = self.looking_at {
                let block = self.world.get_block(looking_at.block);
                self.world.set_block(looking_at.block, blocks::AIR);
                self.inventory.add_block(block);
                debug!(gtc = ?looking_at.block, name = blocks::block_name(block), "broke block");
            }
        } else if input.pressed(Button::Place) {
            if let Some(looking_at) = self.looking_at {
                if self.inventory.held().count > 0 {
                    let gtc = looking_at.block + looking_at.face.to_vec();
                    let block = self.inventory.take_held()
                        .unwrap_or_else(|| unreachable!());
                    self.world.set_block(gtc, block);
                    debug!(?gtc, name = blocks::block_name(block), "placed block");
                }
            }
        }

        if input.pressed(Button::ToggleDebug) {
            self.show_debug = !self.show_debug;
        }

        if input.pressed(Button::InventoryLeft) {
            self.inventory.cycle_left();
        } else if input.pressed(Button::InventoryRight) {
            self.inventory.cycle_right();
        }

        self.orientation.apply_look(input.look_delta(settings));

        let walk = input.walk_delta();
        let move_input = MoveInput {
            strafe: walk.x,
            forward: walk.y,
            jump: input.pressed(Button::Jump),
        };
        step_movement(
            move_input,
            self.orientation.yaw,
            &mut self.pos,
            &mut self.y_vel,
            &mut self.loco,
            &self.world,
        );

        self.looking_at = compute_looking_at(
            self.eye(),
            self.orientation.look_dir(),
            SELECT_RADIUS,
            &self.world,
        );
    }

    /// Ray origin: feet plus eye level.
    pub fn eye(&self) -> Vec3<f32> {
        self.pos + Vec3::new(0.0, EYE_LEVEL, 0.0)
    }

    /// Describe this frame for the renderer.
    pub fn view(&self, pause_menu: Option<crate::scene::MenuView>) -> FieldView {
        FieldView {
            eye: self.eye(),
            yaw: self.orientation.yaw,
            pitch: self.orientation.pitch,
            selection: self.looking_at,
            hotbar: HotbarView {
                slots: self.inventory.slots,
                selection: self.inventory.selection,
            },
            debug: self.show_debug.then(|| DebugView {
                pos: self.pos,
                chunk: gtc_to_cc(self.pos.map(|n| n.floor() as i64)),
                yaw: self.orientation.yaw,
                pitch: self.orientation.pitch,
                selected: self.looking_at.map(|l| (l.block, l.face)),
                state: self.loco.name(),
            }),
            pause_menu,
        }
    }
}


#[cfg(test)]
fn field_on_flat_ground() -> Field {
    // build by hand instead of generating, so tests control the terrain
    let mut world = World::generate(0);
    for x in -8..8 {
        for y in 0..20 {
            for z in -8..8 {
                let block = if y < 10 { blocks::STONE } else { blocks::AIR };
                world.set_block(Vec3 { x, y, z }, block);
            }
        }
    }
    Field {
        pos: Vec3::new(0.5, 10.0, 0.5),
        y_vel: 0.0,
        orientation: Orientation::default(),
        loco: Locomotion::Standing,
        looking_at: None,
        inventory: Inventory::new(),
        show_debug: false,
        world,
    }
}

#[test]
fn test_break_then_place_round_trip() {
    use crate::physics::block_query::BlockQuery;

    let mut field = field_on_flat_ground();
    let settings = Settings::default();

    // a wood block at eye level two tiles ahead, with a wall block behind
    // it so the post-break selection faces back at the same gtc
    let target = Vec3::new(0, 11, -2);
    field.world.set_block(target, blocks::WOOD);
    field.world.set_block(Vec3::new(0, 11, -3), blocks::STONE);

    field.update(&InputFrame::default(), &settings);
    let looking_at = field.looking_at.expect("no selection");
    assert_eq!(looking_at.block, target);
    assert_eq!(looking_at.face, block_data::Face::PosZ);

    field.update(&InputFrame::default().with(Button::Break), &settings);
    assert!(!field.world.is_solid(target));
    assert_eq!(field.inventory.held().block, blocks::WOOD);
    assert_eq!(field.inventory.held().count, 1);

    // the ray now reaches the wall behind; placing against its front face
    // restores the broken block's gtc
    let looking_at = field.looking_at.expect("no selection after break");
    assert_eq!(looking_at.block + looking_at.face.to_vec(), target);

    field.update(&InputFrame::default().with(Button::Place), &settings);
    assert_eq!(field.world.get_block(target), blocks::WOOD);
    assert_eq!(field.inventory.held().count, 0);
}

#[test]
fn test_place_with_empty_hand_is_noop() {
    let mut field = field_on_flat_ground();
    let settings = Settings::default();
    field.orientation = Orientation::new(0.0, -60.0);
    field.update(&InputFrame::default(), &settings);
    let looking_at = field.looking_at.expect("no selection");
    let target = looking_at.block + looking_at.face.to_vec();

    field.update(&InputFrame::default().with(Button::Place), &settings);
    assert_eq!(field.world.get_block(target), blocks::AIR);
}

#[test]
fn test_debug_toggle() {
    let mut field = field_on_flat_ground();
    let settings = Settings::default();
    assert!(field.view(None).debug.is_none());
    field.update(&InputFrame::default().with(Button::ToggleDebug), &settings);
    assert!(field.view(None).debug.is_some());
    field.update(&InputFrame::default().with(Button::ToggleDebug), &settings);
    assert!(field.view(None).debug.is_none());
}
