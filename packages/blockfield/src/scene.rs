//! Plain-data description of what to draw this frame.
//!
//! The renderer is an external collaborator: every frame the game hands it
//! one `Scene` value and nothing else. Scenes have no persistent identity;
//! they are rebuilt from game state each frame and discarded.

use crate::physics::looking_at::LookingAt;
use crate::inventory::{ItemSlot, NUM_ITEM_SLOTS};
use block_data::Face;
use vek::*;


#[derive(Debug, Clone)]
pub enum Scene {
    /// The title banner, with the blinking press-start prompt.
    Title { show_press_start: bool },
    /// A full-screen menu under the title banner.
    MainMenu(MenuView),
    /// The 3D world from the player's eyes.
    Field(FieldView),
}

#[derive(Debug, Clone)]
pub struct MenuView {
    pub title: &'static str,
    pub items: &'static [&'static str],
    pub selection: usize,
}

#[derive(Debug, Clone)]
pub struct FieldView {
    /// Ray origin and camera position.
    pub eye: Vec3<f32>,
    pub yaw: f32,
    pub pitch: f32,
    /// Block to outline, with the face the outline highlights.
    pub selection: Option<LookingAt>,
    pub hotbar: HotbarView,
    pub debug: Option<DebugView>,
    /// Present while paused; drawn over the (frozen) world.
    pub pause_menu: Option<MenuView>,
}

#[derive(Debug, Clone)]
pub struct HotbarView {
    pub slots: [ItemSlot; NUM_ITEM_SLOTS],
    pub selection: usize,
}

/// Content of the debug overlay, mirroring the in-game F3-style readout.
#[derive(Debug, Clone)]
pub struct DebugView {
    pub pos: Vec3<f32>,
    pub chunk: Vec2<i64>,
    pub yaw: f32,
    pub pitch: f32,
    pub selected: Option<(Vec3<i64>, Face)>,
    pub state: &'static str,
}
