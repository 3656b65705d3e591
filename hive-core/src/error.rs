//! Rule-violation taxonomy

use thiserror::Error;

/// Why a placement or move request was rejected.
///
/// Every variant is a local rule violation reported to the caller before
/// any committed mutation of the match; none is fatal. Probing checks
/// restore the board before returning one of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RuleError {
    /// No tile of the requested kind left in the active player's rack
    #[error("no tile of the requested kind left in the rack")]
    InvalidMove,
    /// The game's first tile must go at the origin
    #[error("the first tile of the game must be placed at the origin")]
    FirstMoveViolation,
    /// The queen must be placed by the player's third placement
    #[error("the queen must be placed by the third turn")]
    QueenRequired,
    #[error("cell is already occupied")]
    CellOccupied,
    /// Placement touching no existing tile
    #[error("placement must touch the hive")]
    Disconnected,
    /// Lifting the tile would split the hive, even transiently
    #[error("moving this tile would split the hive")]
    DisconnectedHive,
    /// Placement touching an opposing tile after the player's first turn
    #[error("placement may not touch an opposing tile")]
    ColorViolation,
    #[error("no moves are allowed until the queen is placed")]
    QueenNotPlaced,
    #[error("no tile at the source cell")]
    EmptySource,
    #[error("destination cell is already occupied")]
    OccupiedDestination,
    #[error("tile at the source belongs to the opponent")]
    WrongOwner,
    #[error("destination is not reachable by this tile")]
    InvalidDestination,
    /// Climber movement (stacking) is not implemented
    #[error("movement is not implemented for this tile kind")]
    UnsupportedOperation,
}
