//! 3D renderer: flat ceiling/floor, textured wall columns, distance fog.
use raylib::prelude::*;

use crate::config::RenderConfig;
use crate::core::grid::TileGrid;
use crate::core::player::Pose;
use crate::render::casters::{RayCaster, RayHit};
use crate::render::fog::apply_fog;
use crate::render::framebuffer::Framebuffer;
use crate::render::textures::{FALLBACK_COLOR, TextureStore};

/// Keeps the projection finite when a wall is right in front of the viewer.
pub const PROJECTION_EPSILON: f32 = 0.0001;

/// Apparent slab height in pixels for a wall `distance` units away.
#[inline]
pub fn wall_height(tile_size: f32, projection_distance: f32, distance: f32) -> f32 {
    (tile_size * projection_distance) / (distance + PROJECTION_EPSILON)
}

/// Texture column for a hit in grid space.
///
/// Whichever coordinate lies closer to a grid line picks the face; the other
/// coordinate's fraction is the offset along it. Near corners this can pick
/// the wrong face, which shows up as thin seams.
#[inline]
pub fn texture_column(hit_x: f32, hit_y: f32, tile_size: f32) -> f32 {
    if (hit_x - hit_x.round()).abs() < (hit_y - hit_y.round()).abs() {
        hit_y.fract() * tile_size
    } else {
        hit_x.fract() * tile_size
    }
}

/// Stateless between frames; holds only configuration.
pub struct FrameRenderer {
    pub config: RenderConfig,
    caster: RayCaster,
}

impl FrameRenderer {
    pub fn new(config: RenderConfig) -> Self {
        let caster = RayCaster::new(config.tile_size);
        Self { config, caster }
    }

    pub fn caster(&self) -> &RayCaster {
        &self.caster
    }

    /// Angle of ray `column` out of `rays`, fanned evenly across the FOV.
    #[inline]
    pub fn ray_angle(&self, pose: &Pose, column: u32, rays: u32) -> f32 {
        pose.angle - self.config.fov / 2.0 + (column as f32 / rays as f32) * self.config.fov
    }

    /// Casts one ray per column without drawing.
    pub fn cast_columns<'a>(&self, pose: &Pose, grid: &'a TileGrid, rays: u32) -> Vec<RayHit<'a>> {
        (0..rays)
            .map(|i| {
                let a = self.ray_angle(pose, i, rays);
                self.caster.cast(pose.x, pose.y, a, grid, self.config.max_ray_distance)
            })
            .collect()
    }

    /// Overwrites `fb` with the view from `pose`.
    pub fn render(&self, fb: &mut Framebuffer, pose: &Pose, grid: &TileGrid, textures: &TextureStore) {
        let w = fb.width;
        let hh = fb.height as i32 / 2;
        fb.fill_rows(0, hh, textures.reference_color(grid.ceiling_texture_id()));
        fb.fill_rows(hh, fb.height as i32, textures.reference_color(grid.floor_texture_id()));

        let rays = self.config.rays_for(w);
        for (i, hit) in self.cast_columns(pose, grid, rays).iter().enumerate() {
            if !hit.struck {
                continue;
            }
            let x0 = (i as u64 * w as u64 / rays as u64) as i32;
            let x1 = ((i as u64 + 1) * w as u64 / rays as u64) as i32;
            self.draw_column(fb, x0, x1.max(x0 + 1), hit, textures);
        }
    }

    fn draw_column(&self, fb: &mut Framebuffer, x0: i32, x1: i32, hit: &RayHit, textures: &TextureStore) {
        let ts = self.config.tile_size;
        let fog = self.config.fog_color();
        let h = fb.height as f32;

        let wall_h = wall_height(ts, self.config.projection_distance, hit.distance);
        let draw_start = h / 2.0 - wall_h / 2.0;
        let draw_end = draw_start + wall_h;
        let tex_x = texture_column(hit.hit_x, hit.hit_y, ts).floor() as i32;
        // Unknown names resolve to None here and fall back like get_color does.
        let pixmap = hit
            .tile
            .and_then(|t| t.texture.as_deref())
            .and_then(|name| textures.pixmap(name));

        // Rows past the frame would be dropped by set_pixel anyway.
        let y0 = draw_start.floor().max(0.0) as i32;
        let y1 = draw_end.floor().min(h) as i32;
        for y in y0..y1 {
            let tex_y = ((y as f32 - draw_start) * (ts / wall_h)).floor() as i32;
            let sample = match pixmap {
                Some(pm) => pm.sample(tex_x, tex_y),
                None => FALLBACK_COLOR,
            };
            let color = apply_fog(sample, fog, hit.distance);
            for x in x0..x1 {
                fb.set_pixel(x, y, color);
            }
        }
    }
}
