//! Single-player Battleships against a hidden fleet on the 10×10 playfield.
//!
//! The border shows the miss count, the interior shows which cells have been
//! fired at. A shot is picked by pressing and releasing an untried cell; it
//! then flashes for [`TURN_TIME`] before landing, all driven from `animate`.

use core::time::Duration;
use log::{debug, info};
use rand::Rng;

use crate::board::Fleet;
use crate::colour::{Sentinel, CYAN, GREEN, MAGENTA, ORANGE, PURPLE, RED, WHITE, YELLOW};
use crate::common::{BoardError, Cell, ShotOutcome};
use crate::config::{ANIMATE_INTERVAL, GRID_SIZE, INTERIOR_MAX, INTERIOR_MIN, TURN_TIME};
use crate::module::{GameModule, ModuleKind};
use crate::surface::LedSurface;

/// Colour used for the playfield frame.
pub const FRAME: crate::colour::Colour = GREEN;
/// Colour of a border cell counting one miss.
pub const SCORE: crate::colour::Colour = YELLOW;
/// Colour of the selected cell while its key is held.
pub const SELECTED: crate::colour::Colour = WHITE;
/// Second phase of the incoming-shot flash.
pub const INCOMING: crate::colour::Colour = YELLOW;

/// Reveal colours per ship, in fleet order.
const SHIP_COLOURS: [crate::colour::Colour; 5] = [YELLOW, CYAN, PURPLE, MAGENTA, ORANGE];

/// Border cell lit by the `n`th miss.
///
/// Misses walk the frame clockwise starting at the top-left corner: along the
/// top row, down the right edge, back along the bottom and up the left edge.
/// There are 44 border cells; misses beyond that are not shown.
pub fn score_cell(n: u32) -> Option<Cell> {
    let n = n as i32;
    match n {
        1..=11 => Some(Cell::new(n - 1, 0)),
        12..=22 => Some(Cell::new(11, n - 12)),
        23..=33 => Some(Cell::new(34 - n, 11)),
        34..=44 => Some(Cell::new(0, 45 - n)),
        _ => None,
    }
}

/// Where a turn currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Turn {
    /// Waiting for a press.
    Idle,
    /// A valid cell is held down.
    Selected(Cell),
    /// Released; the shot is in flight.
    Armed {
        cell: Cell,
        armed_at: Duration,
        flashed_at: Option<Duration>,
    },
    /// Landed on a ship; painted on the next tick.
    Hit(Cell),
    /// Landed on the last intact segment of a ship.
    Sunk(Cell),
}

/// Public view of [`Turn`] without its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnStage {
    Idle,
    Selected,
    Armed,
    Hit,
    Sunk,
}

/// Running totals for a game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ShotTally {
    pub misses: u32,
    pub hits: u32,
    pub sunk: u32,
}

impl ShotTally {
    pub fn shots(&self) -> u32 {
        self.misses + self.hits + self.sunk
    }
}

pub struct Battleships {
    fleet: Fleet,
    turn: Turn,
    tally: ShotTally,
    last_outcome: Option<ShotOutcome>,
}

impl Battleships {
    /// Draw a fresh board and hide a randomly placed fleet.
    pub fn new<R: Rng>(surface: &mut LedSurface, rng: &mut R) -> Result<Self, BoardError> {
        let fleet = Fleet::random(rng)?;
        Ok(Self::with_fleet(surface, fleet))
    }

    /// Draw a fresh board over a given fleet.
    pub fn with_fleet(surface: &mut LedSurface, fleet: Fleet) -> Self {
        let last = GRID_SIZE as i32 - 1;
        for i in 0..GRID_SIZE as i32 {
            surface.set_colour(i, 0, FRAME, true);
            surface.set_colour(i, last, FRAME, true);
            surface.set_colour(0, i, FRAME, true);
            surface.set_colour(last, i, FRAME, true);
        }
        for y in INTERIOR_MIN..=INTERIOR_MAX {
            for x in INTERIOR_MIN..=INTERIOR_MAX {
                surface.set_colour(x, y, Sentinel::Untried.colour(), true);
            }
        }
        debug!("New game: {:?}", fleet);
        Self {
            fleet,
            turn: Turn::Idle,
            tally: ShotTally::default(),
            last_outcome: None,
        }
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn tally(&self) -> ShotTally {
        self.tally
    }

    /// Outcome of the most recently landed shot.
    pub fn last_outcome(&self) -> Option<ShotOutcome> {
        self.last_outcome
    }

    pub fn misses(&self) -> u32 {
        self.tally.misses
    }

    pub fn all_sunk(&self) -> bool {
        self.fleet.all_sunk()
    }

    pub fn stage(&self) -> TurnStage {
        match self.turn {
            Turn::Idle => TurnStage::Idle,
            Turn::Selected(_) => TurnStage::Selected,
            Turn::Armed { .. } => TurnStage::Armed,
            Turn::Hit(_) => TurnStage::Hit,
            Turn::Sunk(_) => TurnStage::Sunk,
        }
    }

    /// Cell the current turn is about, if any.
    pub fn active_cell(&self) -> Option<Cell> {
        match self.turn {
            Turn::Idle => None,
            Turn::Selected(cell) | Turn::Hit(cell) | Turn::Sunk(cell) => Some(cell),
            Turn::Armed { cell, .. } => Some(cell),
        }
    }

    /// Keys are only listened to between turns and while choosing a cell.
    fn input_enabled(&self) -> bool {
        matches!(self.turn, Turn::Idle | Turn::Selected(_))
    }

    fn land_shot(&mut self, surface: &mut LedSurface, cell: Cell) {
        let outcome = self.fleet.take_shot(cell);
        self.last_outcome = Some(outcome);
        match outcome {
            ShotOutcome::Miss => {
                self.tally.misses += 1;
                self.update_score(surface);
                surface.paint(cell, Sentinel::Miss.colour());
                self.end_turn();
            }
            ShotOutcome::Hit => {
                self.tally.hits += 1;
                self.turn = Turn::Hit(cell);
            }
            ShotOutcome::Sunk(name) => {
                self.tally.sunk += 1;
                info!("{} sunk at {}", name, cell);
                if self.fleet.all_sunk() {
                    info!("Fleet destroyed with {} misses", self.tally.misses);
                }
                self.turn = Turn::Sunk(cell);
            }
        }
        debug!("Shot at {} landed: {:?}", cell, outcome);
    }

    /// Light the border cell for the latest miss; past 44 nothing changes.
    fn update_score(&self, surface: &mut LedSurface) {
        if let Some(cell) = score_cell(self.tally.misses) {
            surface.paint(cell, SCORE);
        }
    }

    fn end_turn(&mut self) {
        self.turn = Turn::Idle;
    }
}

impl GameModule for Battleships {
    fn btn_event(&mut self, surface: &mut LedSurface, cell: Cell, pressed: bool, now: Duration) {
        if !self.input_enabled() {
            return;
        }
        match (self.turn, pressed) {
            (Turn::Idle, true) => {
                let untried = surface.colour_at(cell) == Sentinel::Untried.colour();
                if cell.in_interior() && untried {
                    self.turn = Turn::Selected(cell);
                    surface.highlight(cell, SELECTED);
                }
            }
            (Turn::Selected(active), false) if active == cell => {
                self.turn = Turn::Armed {
                    cell,
                    armed_at: now,
                    flashed_at: None,
                };
            }
            _ => {}
        }
    }

    fn animate(&mut self, surface: &mut LedSurface, now: Duration) {
        match self.turn {
            Turn::Armed {
                cell,
                armed_at,
                flashed_at,
            } => {
                if now.saturating_sub(armed_at) > TURN_TIME {
                    self.land_shot(surface, cell);
                } else if flashed_at.map_or(true, |t| now.saturating_sub(t) > ANIMATE_INTERVAL) {
                    let next = if surface.colour_at(cell) != INCOMING {
                        INCOMING
                    } else {
                        Sentinel::Untried.colour()
                    };
                    surface.paint(cell, next);
                    self.turn = Turn::Armed {
                        cell,
                        armed_at,
                        flashed_at: Some(now),
                    };
                }
            }
            Turn::Hit(cell) => {
                surface.paint(cell, Sentinel::Hit.colour());
                self.end_turn();
            }
            Turn::Sunk(cell) => {
                surface.paint(cell, Sentinel::Sunk.colour());
                self.end_turn();
            }
            Turn::Idle | Turn::Selected(_) => {}
        }
    }

    /// Show every ship without touching the stored board state.
    fn reveal(&self, surface: &mut LedSurface) {
        for (ship, colour) in self.fleet.ships().zip(SHIP_COLOURS) {
            for seg in ship.segments() {
                surface.highlight(seg.cell, if seg.hit { RED } else { colour });
            }
        }
    }

    fn kind(&self) -> ModuleKind {
        ModuleKind::Battleships
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_SCORE;

    #[test]
    fn score_walks_the_whole_border_once() {
        let cells: alloc::vec::Vec<Cell> = (1..=MAX_SCORE).filter_map(score_cell).collect();
        assert_eq!(cells.len(), 44);
        for (i, a) in cells.iter().enumerate() {
            assert!(a.on_grid() && !a.in_interior(), "{} is not a border cell", a);
            assert!(!cells[i + 1..].contains(a), "{} repeated", a);
        }
        assert_eq!(score_cell(0), None);
        assert_eq!(score_cell(45), None);
    }
}
