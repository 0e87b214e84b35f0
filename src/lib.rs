//! Tile-map raycasting renderer and the demos that show it off.

pub mod config;
pub mod core;
pub mod demos;
pub mod error;
pub mod render;
pub mod scheduler;

pub use crate::config::{AppConfig, MovementConfig, RenderConfig};
pub use crate::core::grid::{Item, TileGrid};
pub use crate::core::level::Level;
pub use crate::core::player::{InputState, Key, Pose};
pub use crate::core::tile::{Tile, TileDefinition, TileDefinitions};
pub use crate::render::casters::{RayCaster, RayHit};
pub use crate::render::render3d::FrameRenderer;
pub use crate::render::textures::TextureStore;
