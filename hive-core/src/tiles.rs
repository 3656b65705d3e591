//! Tile kinds and per-kind movement legality
//!
//! All geometry here is colour-blind: ownership and turn rules are
//! enforced by the game layer. Algorithms that need the moving tile out
//! of the way lift it through a scoped probe that always puts it back.

use crate::board::{Board, Coord};
use crate::error::RuleError;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Tile colour / player identity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

/// The closed set of tile kinds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    Queen = 0,
    Climber = 1,
    Crawler = 2,
    Jumper = 3,
    Leaper = 4,
}

/// All kinds, in rack index order
pub const TILE_KINDS: [TileKind; 5] = [
    TileKind::Queen,
    TileKind::Climber,
    TileKind::Crawler,
    TileKind::Jumper,
    TileKind::Leaper,
];

impl TileKind {
    /// Copies of this kind in one player's starting rack
    pub const fn initial_count(self) -> u8 {
        match self {
            TileKind::Queen | TileKind::Climber => 1,
            TileKind::Crawler | TileKind::Jumper | TileKind::Leaper => 3,
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

/// A tile on the board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub kind: TileKind,
    pub color: Color,
}

/// Destinations reachable in exactly one crawl step from `coord`.
///
/// A crawl hugs an occupied neighbour: for each occupied direction d, the
/// clockwise flank step to d+1 is open only when the cells at d+1 and d+2
/// are both empty, and the counter-clockwise step to d-1 only when d-1
/// and d-2 are both empty. A gap narrower than one hex cannot be squeezed
/// through even where the adjacency graph stays connected.
pub fn single_step_destinations(coord: Coord, board: &Board<Tile>) -> FxHashSet<Coord> {
    let mut dests = FxHashSet::default();
    for d in 0..6u8 {
        if board.get(coord.neighbor(d)).is_none() {
            continue;
        }

        let cw = coord.neighbor(d + 1);
        if board.get(cw).is_none() && board.get(coord.neighbor(d + 2)).is_none() {
            dests.insert(cw);
        }

        let ccw = coord.neighbor(d + 5);
        if board.get(ccw).is_none() && board.get(coord.neighbor(d + 4)).is_none() {
            dests.insert(ccw);
        }
    }
    dests
}

/// All legal destinations for a tile of `kind` standing at `coord`.
///
/// Pure with respect to the final board state: any probe mutation is
/// reverted before returning. Climber movement is deliberately
/// unimplemented and reports [`RuleError::UnsupportedOperation`].
pub fn valid_moves(
    kind: TileKind,
    coord: Coord,
    board: &mut Board<Tile>,
) -> Result<FxHashSet<Coord>, RuleError> {
    match kind {
        TileKind::Queen => Ok(single_step_destinations(coord, board)),
        TileKind::Crawler => Ok(with_vacated(board, coord, |b| crawler_moves(coord, b))),
        TileKind::Jumper => Ok(with_vacated(board, coord, |b| jumper_moves(coord, b))),
        TileKind::Leaper => Ok(leaper_moves(coord, board)),
        TileKind::Climber => Err(RuleError::UnsupportedOperation),
    }
}

/// Run `probe` with `coord` temporarily vacated, restoring the occupant
/// on the way out.
fn with_vacated<R>(
    board: &mut Board<Tile>,
    coord: Coord,
    probe: impl FnOnce(&Board<Tile>) -> R,
) -> R {
    let lifted = board.remove(coord);
    let result = probe(board);
    if let Some(tile) = lifted {
        board.set(coord, tile);
    }
    result
}

/// Exactly three crawl steps, never landing where one or two steps could
fn crawler_moves(origin: Coord, board: &Board<Tile>) -> FxHashSet<Coord> {
    let step1 = single_step_destinations(origin, board);

    let mut step2 = FxHashSet::default();
    for &c in &step1 {
        step2.extend(single_step_destinations(c, board));
    }
    step2.remove(&origin);

    let mut step3 = FxHashSet::default();
    for &c in &step2 {
        step3.extend(single_step_destinations(c, board));
    }
    for c in &step1 {
        step3.remove(c);
    }
    step3
}

/// Unbounded crawl: everywhere reachable by repeated single steps
fn jumper_moves(origin: Coord, board: &Board<Tile>) -> FxHashSet<Coord> {
    let mut reached: FxHashSet<Coord> = FxHashSet::default();
    let mut frontier = vec![origin];

    while !frontier.is_empty() {
        let mut next = Vec::new();
        for &c in &frontier {
            for dest in single_step_destinations(c, board) {
                if dest != origin && reached.insert(dest) {
                    next.push(dest);
                }
            }
        }
        frontier = next;
    }

    reached
}

/// Straight-line jump over one or more contiguous occupied cells
fn leaper_moves(origin: Coord, board: &Board<Tile>) -> FxHashSet<Coord> {
    let mut dests = FxHashSet::default();
    for d in 0..6u8 {
        let mut cell = origin.neighbor(d);
        if board.get(cell).is_none() {
            // nothing to jump over in this direction
            continue;
        }
        while board.get(cell).is_some() {
            cell = cell.neighbor(d);
        }
        dests.insert(cell);
    }
    dests
}
