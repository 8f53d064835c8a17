//! Common types: cells, edges, shot outcomes and board errors.

use crate::bitboard::BitBoardError;
use crate::config::{GRID_SIZE, INTERIOR_MAX, INTERIOR_MIN};

/// One key of the matrix. Coordinates are signed so that requests falling off
/// the grid can still be expressed and rejected by the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Inside the 12×12 key grid.
    pub fn on_grid(self) -> bool {
        (0..GRID_SIZE as i32).contains(&self.x) && (0..GRID_SIZE as i32).contains(&self.y)
    }

    /// Inside the 10×10 Battleships playfield.
    pub fn in_interior(self) -> bool {
        (INTERIOR_MIN..=INTERIOR_MAX).contains(&self.x)
            && (INTERIOR_MIN..=INTERIOR_MAX).contains(&self.y)
    }
}

impl core::fmt::Display for Cell {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Key edge reported by the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Edge {
    /// Key pressed.
    Rising,
    /// Key released.
    Falling,
}

/// A single edge notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeEvent {
    pub cell: Cell,
    pub edge: Edge,
}

impl EdgeEvent {
    pub const fn press(x: i32, y: i32) -> Self {
        Self { cell: Cell::new(x, y), edge: Edge::Rising }
    }

    pub const fn release(x: i32, y: i32) -> Self {
        Self { cell: Cell::new(x, y), edge: Edge::Falling }
    }
}

/// Result of a shot landing on the fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// No ship occupies the cell.
    Miss,
    /// A segment was hit and the ship still floats.
    Hit,
    /// The last intact segment was hit; carries the ship's class name.
    Sunk(&'static str),
}

/// Errors returned by fleet operations.
#[derive(Debug, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error (e.g., invalid size or index).
    BitBoardError(BitBoardError),
    /// Specified ship index is out of range.
    InvalidIndex,
    /// Attempted to place a ship that is already placed.
    ShipAlreadyPlaced,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Ship would leave the playfield.
    ShipOutOfBounds,
    /// Neither the random walk nor the fallback scan found room.
    UnableToPlaceShip,
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::InvalidIndex => write!(f, "Ship index is out of range"),
            BoardError::ShipAlreadyPlaced => write!(f, "Ship is already placed on the board"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
