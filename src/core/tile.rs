//! Tile types and the definition table levels register before building a grid.
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Type code reserved for open floor. Never needs a definition.
pub const EMPTY_TILE: u32 = 0;

/// One cell of a level grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub kind: u32,
    pub name: String,
    pub texture: Option<String>,
    pub solid: bool,
    pub height: Option<f32>,
}

impl Tile {
    /// Open floor: non-solid, untextured.
    pub fn empty() -> Self {
        Self {
            kind: EMPTY_TILE,
            name: "empty".into(),
            texture: None,
            solid: false,
            height: None,
        }
    }
}

/// Template for every cell carrying the same type code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileDefinition {
    #[serde(rename = "type")]
    pub kind: u32,
    pub name: String,
    #[serde(default)]
    pub texture: Option<String>,
    #[serde(default, rename = "isSolid", alias = "solid")]
    pub solid: bool,
    #[serde(default)]
    pub height: Option<f32>,
}

impl TileDefinition {
    pub fn wall(kind: u32, name: &str, texture: &str) -> Self {
        Self {
            kind,
            name: name.into(),
            texture: Some(texture.into()),
            solid: true,
            height: None,
        }
    }

    pub fn floor(kind: u32, name: &str) -> Self {
        Self {
            kind,
            name: name.into(),
            texture: None,
            solid: false,
            height: None,
        }
    }

    fn instantiate(&self) -> Tile {
        Tile {
            kind: self.kind,
            name: self.name.clone(),
            texture: self.texture.clone(),
            solid: self.solid,
            height: self.height,
        }
    }
}

/// Type code -> definition lookup used while building a grid.
#[derive(Debug, Clone, Default)]
pub struct TileDefinitions {
    defs: HashMap<u32, TileDefinition>,
}

impl TileDefinitions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a definition, replacing any earlier one with the same code.
    pub fn register(&mut self, def: TileDefinition) -> &mut Self {
        self.defs.insert(def.kind, def);
        self
    }

    pub fn get(&self, kind: u32) -> Option<&TileDefinition> {
        self.defs.get(&kind)
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Builds the tile for `kind`; unknown codes (and 0) become [`Tile::empty`].
    pub fn tile_for(&self, kind: u32) -> Tile {
        match self.defs.get(&kind) {
            Some(def) => def.instantiate(),
            None => {
                if kind != EMPTY_TILE {
                    tracing::debug!(kind, "no tile definition, using empty tile");
                }
                Tile::empty()
            }
        }
    }
}

impl FromIterator<TileDefinition> for TileDefinitions {
    fn from_iter<I: IntoIterator<Item = TileDefinition>>(iter: I) -> Self {
        let mut defs = Self::new();
        for def in iter {
            defs.register(def);
        }
        defs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registered_code_copies_definition() {
        let defs: TileDefinitions = [TileDefinition::wall(1, "brick", "brick")].into_iter().collect();
        let t = defs.tile_for(1);
        assert!(t.solid);
        assert_eq!(t.texture.as_deref(), Some("brick"));
        assert_eq!(t.name, "brick");
        assert_eq!(t.kind, 1);
    }

    #[test]
    fn unknown_code_falls_back_to_empty() {
        let defs = TileDefinitions::new();
        let t = defs.tile_for(42);
        assert_eq!(t, Tile::empty());
        assert!(!t.solid);
        assert!(t.texture.is_none());
    }

    #[test]
    fn later_registration_wins() {
        let mut defs = TileDefinitions::new();
        defs.register(TileDefinition::wall(2, "a", "a"))
            .register(TileDefinition::floor(2, "b"));
        assert_eq!(defs.len(), 1);
        assert!(!defs.tile_for(2).solid);
    }

    #[test]
    fn definition_json_field_names() {
        let def: TileDefinition = serde_json::from_str(
            r#"{"type": 3, "name": "stone", "texture": "stone", "isSolid": true, "height": 1.5}"#,
        )
        .unwrap();
        assert_eq!(def.kind, 3);
        assert!(def.solid);
        assert_eq!(def.height, Some(1.5));
    }
}
