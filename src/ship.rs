//! Ship classes and placed ships.

use alloc::vec::Vec;
use core::fmt;

use crate::common::{Cell, ShotOutcome};

/// Direction a ship extends from its first segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// The neighbouring cell one step in this direction.
    pub fn step(self, cell: Cell) -> Cell {
        match self {
            Direction::Up => Cell::new(cell.x, cell.y - 1),
            Direction::Right => Cell::new(cell.x + 1, cell.y),
            Direction::Down => Cell::new(cell.x, cell.y + 1),
            Direction::Left => Cell::new(cell.x - 1, cell.y),
        }
    }
}

/// Class of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipClass {
    name: &'static str,
    length: usize,
}

impl ShipClass {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// One cell of a ship and whether it has been hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub cell: Cell,
    pub hit: bool,
}

/// A ship laid out on the playfield. Segments are ordered from the starting
/// cell outwards, each orthogonally adjacent to the one before it.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    class: ShipClass,
    segments: Vec<Segment>,
}

impl Ship {
    /// Build a ship from already validated cells.
    pub(crate) fn from_cells(class: ShipClass, cells: impl IntoIterator<Item = Cell>) -> Self {
        let segments = cells
            .into_iter()
            .map(|cell| Segment { cell, hit: false })
            .collect();
        Ship { class, segments }
    }

    pub fn class(&self) -> ShipClass {
        self.class
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.segments.iter().map(|s| s.cell)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.segments.iter().any(|s| s.cell == cell)
    }

    /// Mark the segment at `cell` as hit and report the outcome for this ship.
    /// A repeated shot on a hit segment still reports a hit.
    pub fn fire(&mut self, cell: Cell) -> ShotOutcome {
        let Some(segment) = self.segments.iter_mut().find(|s| s.cell == cell) else {
            return ShotOutcome::Miss;
        };
        segment.hit = true;
        if self.is_sunk() {
            ShotOutcome::Sunk(self.class.name())
        } else {
            ShotOutcome::Hit
        }
    }

    /// All segments hit.
    pub fn is_sunk(&self) -> bool {
        self.segments.iter().all(|s| s.hit)
    }

    pub fn intact_segments(&self) -> usize {
        self.segments.iter().filter(|s| !s.hit).count()
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ship {{ name: \"{}\", cells: [", self.class.name())?;
        for (i, s) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}{}", s.cell, if s.hit { "*" } else { "" })?;
        }
        write!(f, "] }}")
    }
}
