//! Level loading: JSON level files and plain-text maps.
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::grid::{Item, TileGrid};
use crate::core::player::Pose;
use crate::core::tile::{TileDefinition, TileDefinitions};
use crate::error::LevelError;

/// A playable map: the grid plus where the viewer starts.
#[derive(Debug, Clone)]
pub struct Level {
    pub name: String,
    pub grid: TileGrid,
    pub spawn: Pose,
}

impl Level {
    pub fn new(name: &str, grid: TileGrid, spawn: Pose) -> Self {
        Self { name: name.into(), grid, spawn }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelFile {
    pub name: String,
    pub tiles: Vec<Vec<u32>>,
    #[serde(default)]
    pub definitions: Vec<TileDefinition>,
    pub floor_texture: String,
    pub ceiling_texture: String,
    pub spawn: Pose,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl LevelFile {
    pub fn into_level(self) -> Result<Level, LevelError> {
        if self.tiles.iter().all(|r| r.is_empty()) {
            return Err(LevelError::Empty(self.name));
        }
        let defs: TileDefinitions = self.definitions.into_iter().collect();
        let mut grid = TileGrid::from_codes(&self.tiles, &defs, &self.floor_texture, &self.ceiling_texture);
        for item in self.items {
            grid.add_item(item);
        }
        Ok(Level::new(&self.name, grid, self.spawn))
    }
}

pub fn parse_level_json(text: &str) -> Result<Level, LevelError> {
    let file: LevelFile = serde_json::from_str(text)?;
    file.into_level()
}

/// Text map to type codes: digits are codes, space or '.' is floor, anything
/// else is code 1. Tabs count as floor.
pub fn parse_ascii(text: &str) -> Vec<Vec<u32>> {
    text.lines()
        .map(|line| {
            line.chars()
                .map(|ch| match ch {
                    ' ' | '.' | '\t' => 0,
                    d if d.is_ascii_digit() => d.to_digit(10).unwrap_or(0),
                    _ => 1,
                })
                .collect::<Vec<u32>>()
        })
        .filter(|row| !row.is_empty())
        .collect()
}

/// Loads `.json` levels directly; `.txt` maps take their definitions,
/// textures and spawn from `fallback`.
pub fn load_level(path: &Path, fallback: &LevelFile) -> Result<Level, LevelError> {
    let text = std::fs::read_to_string(path)?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
    let level = match ext {
        "json" => parse_level_json(&text)?,
        "txt" | "map" => LevelFile {
            name: path.file_stem().and_then(|s| s.to_str()).unwrap_or("map").to_owned(),
            tiles: parse_ascii(&text),
            items: Vec::new(),
            ..fallback.clone()
        }
        .into_level()?,
        _ => return Err(LevelError::UnknownFormat(path.to_path_buf())),
    };
    tracing::info!(
        name = %level.name,
        width = level.grid.width(),
        height = level.grid.height(),
        "level loaded"
    );
    Ok(level)
}
