//! Sparse hex board with axial coordinates

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

/// Axial hex coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub q: i32,
    pub r: i32,
}

impl Coord {
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Componentwise addition of a direction vector
    pub const fn offset(self, dq: i32, dr: i32) -> Self {
        Self {
            q: self.q + dq,
            r: self.r + dr,
        }
    }

    /// Get neighbor in direction (0-5)
    pub fn neighbor(self, direction: u8) -> Coord {
        let (dq, dr) = DIRECTIONS[direction as usize % 6];
        self.offset(dq, dr)
    }
}

/// Direction vectors in axial coordinates (dq, dr), in fixed cyclic order.
/// Adjacent indices are the two flanking directions of a crawl step.
pub const DIRECTIONS: [(i32, i32); 6] = [
    (0, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, 0),
    (-1, 1),
];

/// Sparse, logically infinite hex board: coordinate -> occupant.
///
/// Generic over the occupant so the geometry carries no game knowledge.
/// A cell holds exactly one occupant or is empty. Keys are the logical
/// coordinates themselves, so writes anywhere never shift previously
/// stored cells.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>"))]
pub struct Board<T> {
    #[serde(with = "cells_as_pairs")]
    cells: FxHashMap<Coord, T>,
}

impl<T> Default for Board<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Board<T> {
    pub fn new() -> Self {
        Self {
            cells: FxHashMap::default(),
        }
    }

    /// Occupant at `coord`; `None` for any never-written cell, however far out
    pub fn get(&self, coord: Coord) -> Option<&T> {
        self.cells.get(&coord)
    }

    pub fn is_occupied(&self, coord: Coord) -> bool {
        self.cells.contains_key(&coord)
    }

    /// Write the occupant at `coord`; never fails
    pub fn set(&mut self, coord: Coord, occupant: T) {
        self.cells.insert(coord, occupant);
    }

    /// Vacate `coord`, returning the previous occupant if any
    pub fn remove(&mut self, coord: Coord) -> Option<T> {
        self.cells.remove(&coord)
    }

    /// Occupied cells among the 6 adjacent to `coord`; order unspecified.
    /// Well-defined whether or not `coord` itself is occupied.
    pub fn neighbors(&self, coord: Coord) -> Vec<(Coord, &T)> {
        (0..6u8)
            .map(|d| coord.neighbor(d))
            .filter_map(|n| self.cells.get(&n).map(|t| (n, t)))
            .collect()
    }

    /// Iterate all occupied cells
    pub fn occupied(&self) -> impl Iterator<Item = (Coord, &T)> + '_ {
        self.cells.iter().map(|(&c, t)| (c, t))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of connected components of the occupied-cell graph under
    /// hex adjacency; 0 for an empty board.
    ///
    /// Work-list flood fill: stack depth stays constant no matter how
    /// large the hive grows.
    pub fn connected_components(&self) -> usize {
        let mut unvisited: FxHashSet<Coord> = self.cells.keys().copied().collect();
        let mut components = 0;

        loop {
            let Some(&start) = unvisited.iter().next() else {
                break;
            };
            components += 1;
            unvisited.remove(&start);
            let mut work = vec![start];
            while let Some(cell) = work.pop() {
                for d in 0..6u8 {
                    let n = cell.neighbor(d);
                    if unvisited.remove(&n) {
                        work.push(n);
                    }
                }
            }
        }

        components
    }
}

/// Serializes the cell map as a sequence of (coord, occupant) pairs so the
/// state survives formats that require string map keys (JSON).
mod cells_as_pairs {
    use super::Coord;
    use rustc_hash::FxHashMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S, T>(cells: &FxHashMap<Coord, T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Serialize,
    {
        serializer.collect_seq(cells.iter())
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<FxHashMap<Coord, T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        let pairs = Vec::<(Coord, T)>::deserialize(deserializer)?;
        Ok(pairs.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_get_never_written_is_empty() {
        let board: Board<char> = Board::new();
        assert_eq!(board.get(Coord::new(0, 0)), None);
        assert_eq!(board.get(Coord::new(1_000_000, -1_000_000)), None);
    }

    #[test]
    fn test_set_and_get() {
        let mut board = Board::new();
        board.set(Coord::new(3, 2), 'a');
        board.set(Coord::new(1, -2), 'b');
        board.set(Coord::new(0, 0), 'c');
        board.set(Coord::new(-5, -9), 'd');
        board.set(Coord::new(-7, 1), 'e');

        assert_eq!(board.get(Coord::new(3, 2)), Some(&'a'));
        assert_eq!(board.get(Coord::new(1, -2)), Some(&'b'));
        assert_eq!(board.get(Coord::new(0, 0)), Some(&'c'));
        assert_eq!(board.get(Coord::new(-5, -9)), Some(&'d'));
        assert_eq!(board.get(Coord::new(-7, 1)), Some(&'e'));
    }

    #[test]
    fn test_growth_preserves_existing_cells() {
        let mut board = Board::new();
        board.set(Coord::new(0, 0), 0u32);
        for i in 1..100 {
            board.set(Coord::new(i * 17 - 800, -i * 13 + 600), i as u32);
        }
        // the very first write is still there with its original value
        assert_eq!(board.get(Coord::new(0, 0)), Some(&0));
        assert_eq!(board.len(), 100);
    }

    #[test]
    fn test_overwrite_keeps_last_value() {
        let mut board = Board::new();
        board.set(Coord::new(2, 2), 'x');
        board.set(Coord::new(2, 2), 'y');
        assert_eq!(board.get(Coord::new(2, 2)), Some(&'y'));
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut board = Board::new();
        board.set(Coord::new(1, 1), 'a');
        assert_eq!(board.remove(Coord::new(1, 1)), Some('a'));
        assert_eq!(board.remove(Coord::new(1, 1)), None);
        assert_eq!(board.remove(Coord::new(9, 9)), None);
        assert!(board.is_empty());
    }

    fn neighbor_coords(board: &Board<char>, coord: Coord) -> FxHashSet<Coord> {
        board.neighbors(coord).into_iter().map(|(c, _)| c).collect()
    }

    #[test]
    fn test_neighbors() {
        let mut board = Board::new();
        board.set(Coord::new(3, 3), 'a');
        board.set(Coord::new(3, 4), 'b');
        board.set(Coord::new(4, 3), 'c');
        board.set(Coord::new(4, 2), 'd');
        board.set(Coord::new(2, 3), 'e');
        board.set(Coord::new(4, 4), 'f');

        let expected: FxHashSet<Coord> = [
            Coord::new(3, 4),
            Coord::new(4, 3),
            Coord::new(4, 2),
            Coord::new(2, 3),
        ]
        .into_iter()
        .collect();
        assert_eq!(neighbor_coords(&board, Coord::new(3, 3)), expected);

        let expected: FxHashSet<Coord> = [
            Coord::new(3, 3),
            Coord::new(3, 4),
            Coord::new(4, 2),
            Coord::new(4, 4),
        ]
        .into_iter()
        .collect();
        assert_eq!(neighbor_coords(&board, Coord::new(4, 3)), expected);

        // neighbors of an empty cell are well-defined
        let expected: FxHashSet<Coord> = [Coord::new(2, 3)].into_iter().collect();
        assert_eq!(neighbor_coords(&board, Coord::new(1, 3)), expected);

        assert!(neighbor_coords(&board, Coord::new(1, 5)).is_empty());
    }

    #[test]
    fn test_connected_components_empty() {
        let board: Board<char> = Board::new();
        assert_eq!(board.connected_components(), 0);
    }

    #[test]
    fn test_connected_components_single() {
        let mut board = Board::new();
        board.set(Coord::new(0, 0), 'a');
        assert_eq!(board.connected_components(), 1);
    }

    #[test]
    fn test_connected_components_split_and_joined() {
        let mut board = Board::new();
        board.set(Coord::new(0, 0), 'a');
        board.set(Coord::new(1, 1), 'b');
        // (1, 1) is not hex-adjacent to the origin
        assert_eq!(board.connected_components(), 2);

        board.set(Coord::new(1, 0), 'c');
        assert_eq!(board.connected_components(), 1);
    }

    #[test]
    fn test_connected_components_ring() {
        let mut board = Board::new();
        board.set(Coord::new(0, 0), 'a');
        board.set(Coord::new(0, 1), 'b');
        board.set(Coord::new(1, 1), 'c');
        board.set(Coord::new(2, 0), 'd');
        board.set(Coord::new(2, -1), 'e');
        board.set(Coord::new(1, -1), 'f');
        assert_eq!(board.connected_components(), 1);
    }

    #[test]
    fn test_connected_components_idempotent() {
        let mut board = Board::new();
        board.set(Coord::new(0, 0), 'a');
        board.set(Coord::new(4, 4), 'b');
        let snapshot = board.clone();
        assert_eq!(board.connected_components(), 2);
        assert_eq!(board.connected_components(), 2);
        assert_eq!(board, snapshot);
    }
}
