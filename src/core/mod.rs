//! Core game types and logic (map, viewer, input, levels).
//!
//! Re-exports:
//! - `tile`: Tile types and definition table
//! - `grid`: Tile grid with solidity and lookup queries
//! - `player`: Viewer pose, input snapshot and pose update
//! - `process_events`: raylib window to input snapshot
//! - `level`: Level files and text maps

pub mod tile;
pub mod grid;
pub mod player;
pub mod process_events;
pub mod level;
