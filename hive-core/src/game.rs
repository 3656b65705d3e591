//! Match state: racks, turn order, placement and movement rules

use crate::board::{Board, Coord};
use crate::error::RuleError;
use crate::tiles::{valid_moves, Color, Tile, TileKind, TILE_KINDS};
use serde::{Deserialize, Serialize};

/// 0-indexed per-side turn count at which placing anything but the queen
/// is rejected while the queen is still in the rack ("queen by your third
/// placement"). Kept as a named constant pending a check against the
/// official rule text.
const QUEEN_DEADLINE: u32 = 2;

/// One player's rack: unplaced tiles plus per-side turn bookkeeping
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rack {
    color: Color,
    remaining: [u8; 5],
    queen_placed: bool,
    turns_taken: u32,
}

impl Rack {
    fn new(color: Color) -> Self {
        let mut remaining = [0u8; 5];
        for kind in TILE_KINDS {
            remaining[kind.index()] = kind.initial_count();
        }
        Self {
            color,
            remaining,
            queen_placed: false,
            turns_taken: 0,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Unplaced copies of `kind`
    pub fn remaining(&self, kind: TileKind) -> u8 {
        self.remaining[kind.index()]
    }

    pub fn queen_placed(&self) -> bool {
        self.queen_placed
    }

    /// Completed placements and moves by this player, 0-indexed
    pub fn turns_taken(&self) -> u32 {
        self.turns_taken
    }
}

/// Full state of one match.
///
/// Invariant after every committed command: the occupied cells form at
/// most one connected component (zero only before the first placement).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    board: Board<Tile>,
    /// Indexed by side; `active` selects whose turn it is
    racks: [Rack; 2],
    active: usize,
    first_move: bool,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            racks: [Rack::new(Color::White), Rack::new(Color::Black)],
            active: 0,
            first_move: true,
        }
    }

    /// Read-only board view for rendering and persistence
    pub fn board(&self) -> &Board<Tile> {
        &self.board
    }

    pub fn active_color(&self) -> Color {
        self.racks[self.active].color
    }

    /// The active player's rack, for rendering unused-tile racks
    pub fn active_rack(&self) -> &Rack {
        &self.racks[self.active]
    }

    /// Place a tile of `kind` from the active player's rack at `coord`.
    ///
    /// On any rule violation the match is left untouched.
    pub fn place(&mut self, kind: TileKind, coord: Coord) -> Result<(), RuleError> {
        let rack = &self.racks[self.active];
        let color = rack.color;

        if rack.remaining(kind) == 0 {
            return Err(RuleError::InvalidMove);
        }
        if self.first_move && coord != Coord::new(0, 0) {
            return Err(RuleError::FirstMoveViolation);
        }
        if !rack.queen_placed && rack.turns_taken >= QUEEN_DEADLINE && kind != TileKind::Queen {
            return Err(RuleError::QueenRequired);
        }
        if self.board.is_occupied(coord) {
            return Err(RuleError::CellOccupied);
        }

        let neighbors = self.board.neighbors(coord);
        if !self.first_move && neighbors.is_empty() {
            return Err(RuleError::Disconnected);
        }
        // a player's very first tile may touch the opponent; later ones not
        if rack.turns_taken > 0 && neighbors.iter().any(|&(_, t)| t.color != color) {
            return Err(RuleError::ColorViolation);
        }

        self.board.set(coord, Tile { kind, color });
        let rack = &mut self.racks[self.active];
        rack.remaining[kind.index()] -= 1;
        if kind == TileKind::Queen {
            rack.queen_placed = true;
        }
        self.first_move = false;
        tracing::debug!(?color, ?kind, q = coord.q, r = coord.r, "tile placed");
        self.end_turn();
        Ok(())
    }

    /// Move the active player's tile at `from` to `to`.
    ///
    /// Connectivity is checked before destination geometry, with the tile
    /// physically lifted off the board: a hive that splits while the tile
    /// is in hand is illegal even when landing would rejoin it. The probe
    /// restores the board before either failing or committing.
    pub fn move_tile(&mut self, from: Coord, to: Coord) -> Result<(), RuleError> {
        if !self.racks[self.active].queen_placed {
            return Err(RuleError::QueenNotPlaced);
        }
        let tile = match self.board.get(from) {
            Some(&t) => t,
            None => return Err(RuleError::EmptySource),
        };
        if self.board.is_occupied(to) {
            return Err(RuleError::OccupiedDestination);
        }
        if tile.color != self.active_color() {
            return Err(RuleError::WrongOwner);
        }

        self.board.remove(from);
        let components = self.board.connected_components();
        self.board.set(from, tile);
        if components > 1 {
            return Err(RuleError::DisconnectedHive);
        }

        if !valid_moves(tile.kind, from, &mut self.board)?.contains(&to) {
            return Err(RuleError::InvalidDestination);
        }

        self.board.remove(from);
        self.board.set(to, tile);
        tracing::debug!(
            color = ?tile.color,
            kind = ?tile.kind,
            from_q = from.q,
            from_r = from.r,
            to_q = to.q,
            to_r = to.r,
            "tile moved"
        );
        self.end_turn();
        Ok(())
    }

    fn end_turn(&mut self) {
        self.racks[self.active].turns_taken += 1;
        self.active = 1 - self.active;
    }
}
