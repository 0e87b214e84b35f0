//! Bundled demos: small levels that run without any asset files.
use rand::{Rng, SeedableRng, rngs::StdRng};
use raylib::prelude::Color;

use crate::core::grid::{Item, TileGrid};
use crate::core::level::{Level, LevelFile};
use crate::core::player::Pose;
use crate::core::tile::{TileDefinition, TileDefinitions};
use crate::render::textures::{Pixmap, TextureStore};

pub struct Demo {
    pub name: &'static str,
    pub description: &'static str,
    build: fn(u64, f32) -> Level,
}

impl Demo {
    /// Builds the level for `tile_size`; `seed` only matters for random demos.
    pub fn build(&self, seed: u64, tile_size: f32) -> Level {
        (self.build)(seed, tile_size)
    }
}

pub const DEMOS: &[Demo] = &[
    Demo { name: "box", description: "4x4 room, one wall texture", build: build_box },
    Demo { name: "courtyard", description: "hand-made level with several wall types and items", build: build_courtyard },
    Demo { name: "labyrinth", description: "random pillars inside a walled field (uses --seed)", build: build_labyrinth },
];

pub fn find(name: &str) -> Option<&'static Demo> {
    DEMOS.iter().find(|d| d.name.eq_ignore_ascii_case(name))
}

fn definitions() -> TileDefinitions {
    [
        TileDefinition::wall(1, "brick", "brick"),
        TileDefinition::wall(2, "stone", "stone"),
        TileDefinition::wall(3, "panel", "panel"),
        TileDefinition { height: Some(0.5), ..TileDefinition::wall(4, "hedge", "hedge") },
        TileDefinition::floor(5, "gravel"),
    ]
    .into_iter()
    .collect()
}

/// Procedural textures for every name the demos reference.
pub fn install_textures(store: &mut TextureStore) {
    let textures = [
        ("brick", Pixmap::brick(64, 64, Color::new(150, 60, 45, 255), Color::new(90, 85, 80, 255))),
        ("stone", Pixmap::checker(64, 64, 16, Color::new(110, 110, 120, 255), Color::new(80, 80, 92, 255))),
        ("panel", Pixmap::stripes(64, 64, 8, Color::new(40, 120, 200, 255), Color::new(20, 70, 140, 255))),
        ("hedge", Pixmap::checker(64, 64, 4, Color::new(40, 120, 50, 255), Color::new(25, 90, 35, 255))),
        ("floor", Pixmap::checker(32, 32, 8, Color::new(56, 58, 62, 255), Color::new(48, 48, 52, 255))),
        ("ceiling", Pixmap::solid(8, 8, Color::new(20, 24, 32, 255))),
    ];
    for (name, pm) in textures {
        if !store.contains(name) {
            store.insert(name, pm);
        }
    }
}

/// Defaults for text maps loaded from disk: demo tile types and textures,
/// spawn in cell (1, 1).
pub fn text_map_template(tile_size: f32) -> LevelFile {
    let (x, y) = center_of(1, 1, tile_size);
    let defs = definitions();
    LevelFile {
        name: "map".into(),
        tiles: Vec::new(),
        definitions: (1..=5).filter_map(|k| defs.get(k).cloned()).collect(),
        floor_texture: "floor".into(),
        ceiling_texture: "ceiling".into(),
        spawn: Pose::new(x, y, 0.0),
        items: Vec::new(),
    }
}

fn center_of(i: usize, j: usize, tile_size: f32) -> (f32, f32) {
    ((i as f32 + 0.5) * tile_size, (j as f32 + 0.5) * tile_size)
}

fn bordered(w: usize, h: usize, wall: u32) -> Vec<Vec<u32>> {
    (0..h)
        .map(|j| (0..w).map(|i| if i == 0 || j == 0 || i == w - 1 || j == h - 1 { wall } else { 0 }).collect())
        .collect()
}

fn build_box(_seed: u64, tile_size: f32) -> Level {
    let grid = TileGrid::from_codes(&bordered(4, 4, 1), &definitions(), "floor", "ceiling");
    Level::new("box", grid, Pose::new(2.0 * tile_size, 2.0 * tile_size, 0.0))
}

const COURTYARD: &str = "\
2222222222
2...3....2
2.1.3.44.2
2.1......2
2.1.5555.2
2...5..5.2
23335..5.2
2........2
2222222222";

fn build_courtyard(_seed: u64, tile_size: f32) -> Level {
    let codes = crate::core::level::parse_ascii(COURTYARD);
    let mut grid = TileGrid::from_codes(&codes, &definitions(), "floor", "ceiling");
    for (kind, i, j) in [("key", 6, 5), ("orb", 8, 1), ("orb", 1, 7)] {
        let (x, y) = center_of(i, j, tile_size);
        grid.add_item(Item { kind: kind.into(), x, y });
    }
    let (x, y) = center_of(1, 1, tile_size);
    Level::new("courtyard", grid, Pose::new(x, y, std::f32::consts::FRAC_PI_4))
}

const LABYRINTH_SIZE: usize = 24;

fn build_labyrinth(seed: u64, tile_size: f32) -> Level {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut codes = bordered(LABYRINTH_SIZE, LABYRINTH_SIZE, 2);
    for j in 2..LABYRINTH_SIZE - 2 {
        for i in 2..LABYRINTH_SIZE - 2 {
            // Keep the spawn corner clear.
            if i < 4 && j < 4 {
                continue;
            }
            if rng.gen_bool(0.18) {
                codes[j][i] = rng.gen_range(1..=4);
            }
        }
    }
    let grid = TileGrid::from_codes(&codes, &definitions(), "floor", "ceiling");
    let (x, y) = center_of(2, 2, tile_size);
    tracing::debug!(seed, "labyrinth generated");
    Level::new("labyrinth", grid, Pose::new(x, y, 0.0))
}
