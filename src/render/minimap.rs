//! Top-down minimap drawn over the 3D view.
use raylib::prelude::*;

use crate::core::grid::TileGrid;
use crate::core::player::Pose;
use crate::render::framebuffer::Framebuffer;
use crate::render::line::line;
use crate::render::render3d::FrameRenderer;
use crate::render::textures::TextureStore;

const FLOOR_COLOR: Color = Color::new(24, 24, 28, 255);
const DEBUG_RAYS: u32 = 25;

/// Draws the grid at `cell_px` pixels per tile with its top-left at `(ox, oy)`,
/// the viewer as a dot and a fan of debug rays.
pub fn render_minimap(
    fb: &mut Framebuffer,
    grid: &TileGrid,
    pose: &Pose,
    renderer: &FrameRenderer,
    textures: &TextureStore,
    (ox, oy): (i32, i32),
    cell_px: i32,
) {
    for (x, y, tile) in grid.cells() {
        let color = match (&tile.texture, tile.solid) {
            (Some(tex), true) => textures.reference_color(tex),
            (None, true) => Color::GRAY,
            _ => FLOOR_COLOR,
        };
        fb.fill_rect(ox + x * cell_px, oy + y * cell_px, cell_px, cell_px, color);
    }

    let scale = cell_px as f32 / renderer.config.tile_size;
    let to_px = |wx: f32, wy: f32| (ox + (wx * scale) as i32, oy + (wy * scale) as i32);
    let (px, py) = to_px(pose.x, pose.y);

    for i in 0..DEBUG_RAYS {
        let a = renderer.ray_angle(pose, i, DEBUG_RAYS);
        let hit = renderer.caster().cast(pose.x, pose.y, a, grid, renderer.config.max_ray_distance);
        let (hx, hy) = to_px(pose.x + a.cos() * hit.distance, pose.y + a.sin() * hit.distance);
        line(fb, px, py, hx, hy, Color::WHITE);
    }

    fb.fill_rect(px - 1, py - 1, 3, 3, Color::YELLOW);
}
