use alloc::vec::Vec;
use core::time::Duration;

use crate::colour::Colour;
use crate::common::Cell;
use crate::config::{GRID_SIZE, RAIN_INTERVAL};
use crate::module::{GameModule, ModuleKind};
use crate::surface::LedSurface;

/// Longest tail a drop grows to.
const MAX_LENGTH: i32 = 6;
/// Left behind once a drop has passed.
const TRAIL: Colour = Colour::new(10, 10, 10);
const BOTTOM: i32 = GRID_SIZE as i32 - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Drop {
    x: i32,
    /// Row of the head.
    y: i32,
    length: i32,
}

/// Passive animation: each press starts a green drop that falls to the
/// bottom row, growing a fading tail on the way, then drains away.
#[derive(Debug, Default)]
pub struct RainDemo {
    drops: Vec<Drop>,
    last_tick: Option<Duration>,
}

impl RainDemo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops still on screen.
    pub fn active_drops(&self) -> usize {
        self.drops.len()
    }

    fn tail_colour(i: i32) -> Colour {
        Colour::new(0, ((MAX_LENGTH - i) * 42) as u8, 0)
    }

    fn clear(surface: &mut LedSurface, x: i32, y: i32) {
        if Cell::new(x, y).on_grid() {
            surface.set_colour(x, y, TRAIL, true);
        }
    }

    /// Advance every drop by one frame, dropping the finished ones.
    fn step(&mut self, surface: &mut LedSurface) {
        self.drops.retain_mut(|drop| {
            if drop.length == 0 {
                Self::clear(surface, drop.x, drop.y);
                return false;
            }
            for i in 0..drop.length {
                surface.set_colour(drop.x, drop.y - i, Self::tail_colour(i), true);
            }
            if drop.y < BOTTOM {
                drop.y += 1;
                if drop.length < MAX_LENGTH {
                    drop.length += 1;
                } else {
                    Self::clear(surface, drop.x, drop.y - drop.length - 1);
                }
            } else {
                drop.length -= 1;
                Self::clear(surface, drop.x, drop.y - drop.length - 1);
            }
            true
        });
    }
}

impl GameModule for RainDemo {
    fn btn_event(&mut self, _surface: &mut LedSurface, cell: Cell, pressed: bool, _now: Duration) {
        if pressed {
            self.drops.push(Drop {
                x: cell.x,
                y: cell.y,
                length: 1,
            });
        }
    }

    fn animate(&mut self, surface: &mut LedSurface, now: Duration) {
        match self.last_tick {
            Some(t) if now.saturating_sub(t) <= RAIN_INTERVAL => return,
            _ => self.last_tick = Some(now),
        }
        self.step(surface);
    }

    fn kind(&self) -> ModuleKind {
        ModuleKind::Rain
    }
}
