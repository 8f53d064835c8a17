//! The hidden Battleships fleet: placement and shot resolution.

use alloc::vec::Vec;
use core::fmt;
use log::{debug, warn};
use rand::Rng;

use crate::bitboard::BitBoard;
use crate::common::{BoardError, Cell, ShotOutcome};
use crate::config::{
    INTERIOR_MAX, INTERIOR_MIN, MAX_PLACEMENT_ATTEMPTS, NUM_SHIPS, PLAYFIELD_SIZE, SHIPS,
};
use crate::ship::{Direction, Ship};

type BB = BitBoard<u128, PLAYFIELD_SIZE>;

/// Five ships in fixed precedence order (Carrier first) plus a mask of every
/// playfield cell they occupy.
#[derive(Clone, Default)]
pub struct Fleet {
    ships: [Option<Ship>; NUM_SHIPS],
    occupied: BB,
}

/// Bitboard coordinates for an interior cell.
fn slot(cell: Cell) -> (usize, usize) {
    ((cell.y - INTERIOR_MIN) as usize, (cell.x - INTERIOR_MIN) as usize)
}

impl Fleet {
    /// An empty fleet, no ships placed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Place all five ships in order using [`Fleet::random_placement`].
    pub fn random<R: Rng>(rng: &mut R) -> Result<Self, BoardError> {
        let mut fleet = Fleet::new();
        fleet.place_all(rng)?;
        Ok(fleet)
    }

    /// Place every ship not yet placed, in fleet order.
    pub fn place_all<R: Rng>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        for i in 0..NUM_SHIPS {
            if self.ships[i].is_some() {
                continue;
            }
            let (start, dir) = self.random_placement(rng, i)?;
            self.place(i, start, dir)?;
        }
        Ok(())
    }

    /// Place ship `index` starting at `start` and extending towards `dir`.
    pub fn place(&mut self, index: usize, start: Cell, dir: Direction) -> Result<(), BoardError> {
        if index >= NUM_SHIPS {
            return Err(BoardError::InvalidIndex);
        }
        if self.ships[index].is_some() {
            return Err(BoardError::ShipAlreadyPlaced);
        }
        let class = SHIPS[index];
        let cells = Self::line(start, dir, class.length());
        let mut mask = BB::new();
        for &cell in &cells {
            if !cell.in_interior() {
                return Err(BoardError::ShipOutOfBounds);
            }
            let (r, c) = slot(cell);
            mask.set(r, c)?;
        }
        if !(self.occupied & mask).is_empty() {
            return Err(BoardError::ShipOverlaps);
        }
        self.occupied |= mask;
        self.ships[index] = Some(Ship::from_cells(class, cells));
        debug!("Placed {} at {} heading {:?}", class.name(), start, dir);
        Ok(())
    }

    /// Find a free straight run for ship `index` by random walk.
    ///
    /// Each attempt draws a free starting cell, commits to one of the four
    /// directions and steps outwards. Any step that leaves the playfield or
    /// lands on an earlier ship abandons the whole attempt. After
    /// [`MAX_PLACEMENT_ATTEMPTS`] failures the playfield is scanned in raster
    /// order instead.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        index: usize,
    ) -> Result<(Cell, Direction), BoardError> {
        if index >= NUM_SHIPS {
            return Err(BoardError::InvalidIndex);
        }
        let length = SHIPS[index].length();
        'attempt: for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let start = Cell::new(
                rng.random_range(INTERIOR_MIN..=INTERIOR_MAX),
                rng.random_range(INTERIOR_MIN..=INTERIOR_MAX),
            );
            if !self.is_free(start) {
                continue;
            }
            let dir = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
            let mut pos = start;
            for _ in 1..length {
                pos = dir.step(pos);
                if !pos.in_interior() || !self.is_free(pos) {
                    continue 'attempt;
                }
            }
            return Ok((start, dir));
        }
        warn!(
            "Random placement of {} gave up after {} attempts, scanning",
            SHIPS[index].name(),
            MAX_PLACEMENT_ATTEMPTS
        );
        self.first_fit(length).ok_or(BoardError::UnableToPlaceShip)
    }

    /// First free straight run of `length` cells in raster order.
    fn first_fit(&self, length: usize) -> Option<(Cell, Direction)> {
        for y in INTERIOR_MIN..=INTERIOR_MAX {
            for x in INTERIOR_MIN..=INTERIOR_MAX {
                let start = Cell::new(x, y);
                for dir in Direction::ALL {
                    if Self::line(start, dir, length)
                        .iter()
                        .all(|&c| c.in_interior() && self.is_free(c))
                    {
                        return Some((start, dir));
                    }
                }
            }
        }
        None
    }

    fn line(start: Cell, dir: Direction, length: usize) -> Vec<Cell> {
        let mut cells = Vec::with_capacity(length);
        let mut pos = start;
        for i in 0..length {
            if i > 0 {
                pos = dir.step(pos);
            }
            cells.push(pos);
        }
        cells
    }

    /// No placed ship covers `cell`. Cells off the playfield are never free.
    pub fn is_free(&self, cell: Cell) -> bool {
        if !cell.in_interior() {
            return false;
        }
        let (r, c) = slot(cell);
        !self.occupied.get(r, c).unwrap_or(true)
    }

    /// Resolve a shot: ships are tested in fleet order and the first one
    /// owning `cell` decides the outcome.
    pub fn take_shot(&mut self, cell: Cell) -> ShotOutcome {
        for ship in self.ships.iter_mut().flatten() {
            if ship.contains(cell) {
                return ship.fire(cell);
            }
        }
        ShotOutcome::Miss
    }

    pub fn ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.iter().flatten()
    }

    pub fn ship(&self, index: usize) -> Option<&Ship> {
        self.ships.get(index).and_then(Option::as_ref)
    }

    /// Number of cells covered by placed ships.
    pub fn occupied_cells(&self) -> usize {
        self.occupied.count_ones()
    }

    pub fn ships_remaining(&self) -> usize {
        self.ships().filter(|s| !s.is_sunk()).count()
    }

    /// Every placed ship has been sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships().all(Ship::is_sunk)
    }
}

impl fmt::Debug for Fleet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Fleet {{")?;
        for ship in self.ships() {
            writeln!(f, "  {:?}", ship)?;
        }
        write!(f, "  occupied: {:?}}}", self.occupied)
    }
}
