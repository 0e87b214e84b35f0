//! Rendering utilities and 3D renderer.
//!
//! Re-exports:
//! - `framebuffer`: CPU framebuffer
//! - `textures`: Texture store with clamped sampling and fallbacks
//! - `casters`: Fixed-step ray caster
//! - `fog`: Distance fog blending
//! - `line`: Bresenham integer line drawing
//! - `render3d`: Column renderer for walls, ceiling and floor
//! - `minimap`: Top-down overlay

pub mod framebuffer;
pub mod textures;
pub mod casters;
pub mod fog;
pub mod line;
pub mod render3d;
pub mod minimap;
