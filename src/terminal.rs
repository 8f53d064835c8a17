#![cfg(feature = "std")]

//! A panel that draws the key matrix in a 24-bit colour terminal.

use std::io::{self, Write};

use log::warn;

use crate::colour::{Colour, OFF};
use crate::config::{DEFAULT_BRIGHTNESS, GRID_SIZE};
use crate::surface::Panel;

/// Redraws the whole grid on stdout whenever something changed since the
/// last flush. Colours are dimmed by the panel brightness like the LEDs are.
pub struct TerminalPanel {
    cells: [[Colour; GRID_SIZE]; GRID_SIZE],
    brightness: f32,
    dirty: bool,
}

impl TerminalPanel {
    pub fn new() -> Self {
        Self {
            cells: [[OFF; GRID_SIZE]; GRID_SIZE],
            brightness: DEFAULT_BRIGHTNESS,
            dirty: true,
        }
    }

    /// The frame as text, without the clear-screen prefix.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("   ");
        for x in 0..GRID_SIZE {
            out.push_str(&format!("{:>2}", x));
        }
        out.push('\n');
        for (y, row) in self.cells.iter().enumerate() {
            out.push_str(&format!("{:2} ", y));
            for colour in row {
                // Keep some minimum level so dim cells stay visible on screen.
                let c = colour.scaled(self.brightness.max(0.4));
                out.push_str(&format!("\x1b[38;2;{};{};{}m██", c.r, c.g, c.b));
            }
            out.push_str("\x1b[0m\n");
        }
        out.push_str(&format!("brightness {:.1}\n", self.brightness));
        out
    }
}

impl Default for TerminalPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Panel for TerminalPanel {
    fn show(&mut self, x: usize, y: usize, colour: Colour) {
        if self.cells[y][x] != colour {
            self.cells[y][x] = colour;
            self.dirty = true;
        }
    }

    fn set_brightness(&mut self, level: f32) {
        self.brightness = level;
        self.dirty = true;
    }

    fn flush(&mut self) {
        if !self.dirty {
            return;
        }
        self.dirty = false;
        let frame = self.render();
        let mut stdout = io::stdout().lock();
        if let Err(e) = write!(stdout, "\x1b[2J\x1b[H{}", frame).and_then(|()| stdout.flush()) {
            warn!("Terminal panel write failed: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_has_a_row_per_key_row() {
        let mut panel = TerminalPanel::new();
        panel.show(0, 0, Colour::new(255, 0, 0));
        let frame = panel.render();
        assert_eq!(frame.lines().count(), GRID_SIZE + 2);
        assert!(frame.contains("\x1b[38;2;102;0;0m"));
    }
}
