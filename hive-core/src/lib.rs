//! Hive Core - rules engine for the hive board game
//!
//! This crate provides the core game logic:
//! - Sparse unbounded hex board with axial coordinates and a
//!   connected-components query
//! - Tile kinds and movement legality (freedom-to-move crawls, unbounded
//!   crawl search, straight-line leaps)
//! - Match state: per-side racks, placement rules and the one-hive
//!   invariant
//!
//! Rendering, persistence and front ends live outside this crate; they
//! consume the read-only accessors on [`Game`] and [`Board`] and the
//! serde representations of the state types.

pub mod board;
pub mod error;
pub mod game;
pub mod tiles;

// Re-exports for convenient access
pub use board::{Board, Coord, DIRECTIONS};
pub use error::RuleError;
pub use game::{Game, Rack};
pub use tiles::{single_step_destinations, valid_moves, Color, Tile, TileKind, TILE_KINDS};
