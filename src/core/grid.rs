//! Tile grid: solidity and lookup queries the caster and movement share.
use serde::{Deserialize, Serialize};

use crate::core::tile::{EMPTY_TILE, Tile, TileDefinitions};

/// Something placed in the level. Stored only; nothing simulates items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub kind: String,
    pub x: f32,
    pub y: f32,
}

/// Row-major grid of tiles with fixed dimensions.
#[derive(Debug, Clone)]
pub struct TileGrid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
    floor_texture: String,
    ceiling_texture: String,
    items: Vec<Item>,
}

impl TileGrid {
    /// Builds one tile per code. Ragged rows are padded with empty floor up
    /// to the widest row; unregistered codes become empty tiles.
    pub fn from_codes(
        codes: &[Vec<u32>],
        defs: &TileDefinitions,
        floor_texture: &str,
        ceiling_texture: &str,
    ) -> Self {
        let height = codes.len();
        let width = codes.iter().map(|r| r.len()).max().unwrap_or(0);
        let mut tiles = Vec::with_capacity(width * height);
        for row in codes {
            for i in 0..width {
                let code = row.get(i).copied().unwrap_or(EMPTY_TILE);
                tiles.push(defs.tile_for(code));
            }
        }
        Self {
            width,
            height,
            tiles,
            floor_texture: floor_texture.into(),
            ceiling_texture: ceiling_texture.into(),
            items: Vec::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    /// Tile at integer grid coordinates, `None` outside the grid.
    pub fn tile_at(&self, x: i32, y: i32) -> Option<&Tile> {
        self.index(x, y).map(|i| &self.tiles[i])
    }

    /// Anything outside the grid counts as wall, so maps are closed implicitly.
    pub fn is_solid(&self, x: i32, y: i32) -> bool {
        self.tile_at(x, y).is_none_or(|t| t.solid)
    }

    /// `is_solid` for a world-space point.
    pub fn is_solid_at(&self, wx: f32, wy: f32, tile_size: f32) -> bool {
        let i = (wx / tile_size).floor() as i32;
        let j = (wy / tile_size).floor() as i32;
        self.is_solid(i, j)
    }

    pub fn floor_texture_id(&self) -> &str {
        &self.floor_texture
    }

    pub fn ceiling_texture_id(&self) -> &str {
        &self.ceiling_texture
    }

    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Iterates `(x, y, tile)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32, &Tile)> + '_ {
        let w = self.width.max(1);
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, t)| ((i % w) as i32, (i / w) as i32, t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tile::TileDefinition;

    fn defs() -> TileDefinitions {
        [
            TileDefinition::wall(1, "brick", "brick"),
            TileDefinition::floor(2, "rug"),
        ]
        .into_iter()
        .collect()
    }

    fn grid() -> TileGrid {
        let codes = vec![vec![1, 1, 1], vec![1, 0, 2], vec![1, 9, 1]];
        TileGrid::from_codes(&codes, &defs(), "floor", "sky")
    }

    #[test]
    fn out_of_bounds_is_solid() {
        let g = grid();
        for (x, y) in [(-1, 0), (0, -1), (3, 0), (0, 3), (-5, -5), (100, 1), (i32::MIN, 0)] {
            assert!(g.is_solid(x, y), "({x},{y}) should be solid");
            assert!(g.tile_at(x, y).is_none());
        }
    }

    #[test]
    fn lookup_matches_definitions() {
        let g = grid();
        let wall = g.tile_at(0, 0).unwrap();
        assert!(wall.solid);
        assert_eq!(wall.texture.as_deref(), Some("brick"));
        let rug = g.tile_at(2, 1).unwrap();
        assert!(!rug.solid);
        assert_eq!(rug.name, "rug");
        assert!(!g.is_solid(1, 1));
    }

    #[test]
    fn unregistered_code_is_empty_floor() {
        let g = grid();
        let t = g.tile_at(1, 2).unwrap();
        assert_eq!(*t, Tile::empty());
        assert!(!g.is_solid(1, 2));
    }

    #[test]
    fn ragged_rows_padded_with_floor() {
        let codes = vec![vec![1, 1, 1, 1], vec![1]];
        let g = TileGrid::from_codes(&codes, &defs(), "f", "c");
        assert_eq!((g.width(), g.height()), (4, 2));
        assert!(!g.is_solid(3, 1));
    }

    #[test]
    fn empty_grid_is_solid_everywhere() {
        let g = TileGrid::from_codes(&[], &defs(), "f", "c");
        assert_eq!((g.width(), g.height()), (0, 0));
        assert!(g.is_solid(0, 0));
        assert_eq!(g.cells().count(), 0);
    }

    #[test]
    fn world_point_lookup_floors_by_tile_size() {
        let g = grid();
        assert!(!g.is_solid_at(96.0, 96.0, 64.0));
        assert!(g.is_solid_at(63.9, 96.0, 64.0));
        assert!(g.is_solid_at(-0.1, 96.0, 64.0));
    }

    #[test]
    fn texture_ids_and_items() {
        let mut g = grid();
        assert_eq!(g.floor_texture_id(), "floor");
        assert_eq!(g.ceiling_texture_id(), "sky");
        g.add_item(Item { kind: "key".into(), x: 1.0, y: 2.0 });
        g.add_item(Item { kind: "orb".into(), x: 3.0, y: 4.0 });
        assert_eq!(g.items().len(), 2);
        assert_eq!(g.items()[1].kind, "orb");
    }

    #[test]
    fn cells_are_row_major() {
        let g = grid();
        let coords: Vec<(i32, i32)> = g.cells().map(|(x, y, _)| (x, y)).take(4).collect();
        assert_eq!(coords, vec![(0, 0), (1, 0), (2, 0), (0, 1)]);
    }
}
