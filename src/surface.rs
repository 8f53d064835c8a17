//! The LED surface: the persisted colour buffer plus the panel it drives.

use alloc::boxed::Box;
use log::warn;

use crate::colour::{Colour, OFF};
use crate::common::Cell;
use crate::config::{DEFAULT_BRIGHTNESS, GRID_SIZE};

/// Sink for colour writes: the LED hardware, a terminal, or nothing.
pub trait Panel: Send {
    /// Light the LED at (`x`, `y`). Coordinates are already bounds checked.
    fn show(&mut self, x: usize, y: usize, colour: Colour);

    /// Apply a global brightness in `0.0..=1.0`.
    fn set_brightness(&mut self, level: f32);

    /// Push buffered writes out. Called once per host loop iteration.
    fn flush(&mut self) {}
}

/// Panel that discards everything. Used headless and in tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPanel;

impl Panel for NullPanel {
    fn show(&mut self, _x: usize, _y: usize, _colour: Colour) {}
    fn set_brightness(&mut self, _level: f32) {}
}

type Grid = [[Colour; GRID_SIZE]; GRID_SIZE];

/// Owns the stored colour of every key and mirrors what the panel shows.
///
/// A persisted write updates both. A transient write (`persist == false`)
/// only changes what is shown, so [`LedSurface::restore_colour`] can put the
/// stored colour back afterwards.
pub struct LedSurface {
    stored: Grid,
    shown: Grid,
    brightness: f32,
    panel: Box<dyn Panel>,
}

impl LedSurface {
    pub fn new(mut panel: Box<dyn Panel>) -> Self {
        panel.set_brightness(DEFAULT_BRIGHTNESS);
        Self {
            stored: [[OFF; GRID_SIZE]; GRID_SIZE],
            shown: [[OFF; GRID_SIZE]; GRID_SIZE],
            brightness: DEFAULT_BRIGHTNESS,
            panel,
        }
    }

    /// Surface backed by a [`NullPanel`].
    pub fn headless() -> Self {
        Self::new(Box::new(NullPanel))
    }

    fn index(x: i32, y: i32) -> Option<(usize, usize)> {
        Cell::new(x, y)
            .on_grid()
            .then_some((x as usize, y as usize))
    }

    /// Light (`x`, `y`) and, when `persist` is set, remember the colour.
    /// Requests outside the grid are dropped with a warning.
    pub fn set_colour(&mut self, x: i32, y: i32, colour: Colour, persist: bool) {
        let Some((cx, cy)) = Self::index(x, y) else {
            warn!("Request to set colour outside trellis at: {},{}", x, y);
            return;
        };
        if persist {
            self.stored[cy][cx] = colour;
        }
        self.shown[cy][cx] = colour;
        self.panel.show(cx, cy, colour);
    }

    /// Persisted write at `cell`.
    pub fn paint(&mut self, cell: Cell, colour: Colour) {
        self.set_colour(cell.x, cell.y, colour, true);
    }

    /// Transient write at `cell`; the stored colour is untouched.
    pub fn highlight(&mut self, cell: Cell, colour: Colour) {
        self.set_colour(cell.x, cell.y, colour, false);
    }

    /// Last persisted colour at (`x`, `y`); `OFF` outside the grid.
    pub fn colour(&self, x: i32, y: i32) -> Colour {
        Self::index(x, y).map_or(OFF, |(cx, cy)| self.stored[cy][cx])
    }

    pub fn colour_at(&self, cell: Cell) -> Colour {
        self.colour(cell.x, cell.y)
    }

    /// What the panel is currently showing at (`x`, `y`).
    pub fn displayed(&self, x: i32, y: i32) -> Colour {
        Self::index(x, y).map_or(OFF, |(cx, cy)| self.shown[cy][cx])
    }

    /// Show the stored colour again, undoing any transient write.
    pub fn restore_colour(&mut self, x: i32, y: i32) {
        let colour = self.colour(x, y);
        self.set_colour(x, y, colour, false);
    }

    /// Persist `colour` on every key.
    pub fn reset(&mut self, colour: Colour) {
        for y in 0..GRID_SIZE as i32 {
            for x in 0..GRID_SIZE as i32 {
                self.set_colour(x, y, colour, true);
            }
        }
    }

    pub fn brightness(&self) -> f32 {
        self.brightness
    }

    pub fn set_brightness(&mut self, level: f32) {
        self.brightness = level.clamp(0.0, 1.0);
        self.panel.set_brightness(self.brightness);
    }

    pub fn flush(&mut self) {
        self.panel.flush();
    }

    /// Snapshot of the stored colours, row-major (`[y][x]`).
    pub fn stored(&self) -> &[[Colour; GRID_SIZE]; GRID_SIZE] {
        &self.stored
    }
}

impl core::fmt::Debug for LedSurface {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LedSurface")
            .field("brightness", &self.brightness)
            .finish_non_exhaustive()
    }
}
