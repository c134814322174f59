//! Blockfield: a small open-world block game core.
//!
//! Covers the per-frame game logic from title screen to field session:
//! terrain generation, player movement and collision, block targeting,
//! breaking and placing, inventory, and menus. Rendering, audio, and input
//! devices are external collaborators fed through `scene` and `input`.

#[macro_use]
extern crate tracing;

pub mod app;
pub mod blocks;
pub mod field;
pub mod input;
pub mod inventory;
pub mod logging;
pub mod menu;
pub mod physics;
pub mod scene;
pub mod settings;
pub mod world;
