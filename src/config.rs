//! Runtime configuration. Every field is optional in the JSON file.
use raylib::prelude::Color;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;
use crate::render::fog::FOG_END;

/// Tunables for [`crate::render::render3d::FrameRenderer`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub tile_size: f32,
    pub fov: f32,
    /// Columns cast per frame; `None` means one per pixel.
    pub ray_count: Option<u32>,
    pub projection_distance: f32,
    pub fog_color: [u8; 3],
    pub max_ray_distance: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            tile_size: 64.0,
            fov: std::f32::consts::FRAC_PI_3,
            ray_count: None,
            projection_distance: 256.0,
            fog_color: [7, 7, 7],
            max_ray_distance: 1000.0,
        }
    }
}

impl RenderConfig {
    pub fn fog_color(&self) -> Color {
        let [r, g, b] = self.fog_color;
        Color::new(r, g, b, 255)
    }

    pub fn rays_for(&self, frame_width: u32) -> u32 {
        self.ray_count.unwrap_or(frame_width).max(1)
    }

    /// Logs settings that render but look wrong. Returns `false` if any were found.
    pub fn check(&self) -> bool {
        let mut ok = true;
        if self.max_ray_distance < FOG_END {
            tracing::warn!(
                max_ray_distance = self.max_ray_distance,
                fog_end = FOG_END,
                "max ray distance is below fog end; distant walls will pop in unfogged"
            );
            ok = false;
        }
        ok
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    pub walk_speed: f32,
    pub sprint_speed: f32,
    /// Radians per second for the turn keys.
    pub turn_speed: f32,
    /// Radians per pixel of mouse motion.
    pub mouse_sensitivity: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            walk_speed: 200.0,
            sprint_speed: 340.0,
            turn_speed: 2.5,
            mouse_sensitivity: 0.0025,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window_width: u32,
    pub window_height: u32,
    pub target_fps: u32,
    pub render: RenderConfig,
    pub movement: MovementConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_width: 960,
            window_height: 600,
            target_fps: 60,
            render: RenderConfig::default(),
            movement: MovementConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg: Self = serde_json::from_str(&text).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "loaded config");
        cfg.render.check();
        Ok(cfg)
    }

    /// Minimum time between rendered frames.
    pub fn frame_interval(&self) -> std::time::Duration {
        std::time::Duration::from_nanos(1_000_000_000 / self.target_fps.max(1) as u64)
    }
}
