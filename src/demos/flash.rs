use core::time::Duration;

use crate::colour::{Colour, BLUE, CYAN, GREEN, MAGENTA, ORANGE, PURPLE, RED, WHITE, YELLOW};
use crate::common::Cell;
use crate::module::{GameModule, ModuleKind};
use crate::surface::LedSurface;

/// Colours a released key cycles through.
pub const RAINBOW: [Colour; 8] = [RED, ORANGE, YELLOW, GREEN, CYAN, BLUE, PURPLE, MAGENTA];

/// Press-reactive demo: a held key flashes white, and on release keeps the
/// next colour of [`RAINBOW`].
#[derive(Debug, Default)]
pub struct FlashDemo {
    next: usize,
}

impl FlashDemo {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameModule for FlashDemo {
    fn btn_event(&mut self, surface: &mut LedSurface, cell: Cell, pressed: bool, _now: Duration) {
        if pressed {
            surface.highlight(cell, WHITE);
        } else {
            surface.paint(cell, RAINBOW[self.next]);
            self.next = (self.next + 1) % RAINBOW.len();
        }
    }

    fn animate(&mut self, _surface: &mut LedSurface, _now: Duration) {}

    fn kind(&self) -> ModuleKind {
        ModuleKind::Flash
    }
}
