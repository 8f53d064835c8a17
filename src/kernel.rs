//! The resident kernel: routes key edges to the active module, detects long
//! presses and owns the reserved long-press gestures.

use alloc::boxed::Box;
use core::time::Duration;
use log::{debug, error, info};
use rand::rngs::SmallRng;

use crate::colour::OFF;
use crate::common::{BoardError, Cell, Edge};
use crate::config::{
    BRIGHTNESS_FIRST_COLUMN, BRIGHTNESS_LEVELS, BRIGHTNESS_ROW, FLASH_BACKDROP, LONG_PRESS,
    LONG_PRESS_PENDING, SWITCH_ROW,
};
use crate::module::{GameModule, ModuleKind};
use crate::surface::{LedSurface, Panel};

/// Runtime settings for a [`Console`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConsoleConfig {
    /// Hold time at or beyond which a release counts as a long press.
    pub long_press: Duration,
    /// Module running after power-on.
    pub initial: ModuleKind,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            long_press: LONG_PRESS,
            initial: ModuleKind::Battleships,
        }
    }
}

/// What a long press on a reserved cell does.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Set the global LED brightness.
    Brightness(f32),
    /// Replace the active module with a fresh one.
    Switch(ModuleKind),
}

/// Reserved gesture at `cell`, if any.
///
/// Row 0, columns 6..=11 pick a brightness level. Row 11 switches module:
/// column 0 the flash demo, column 1 Battleships, column 11 the rain demo.
pub fn gesture_at(cell: Cell) -> Option<Gesture> {
    match (cell.x, cell.y) {
        (x, BRIGHTNESS_ROW) if x >= BRIGHTNESS_FIRST_COLUMN => BRIGHTNESS_LEVELS
            .get((x - BRIGHTNESS_FIRST_COLUMN) as usize)
            .map(|&level| Gesture::Brightness(level)),
        (0, SWITCH_ROW) => Some(Gesture::Switch(ModuleKind::Flash)),
        (1, SWITCH_ROW) => Some(Gesture::Switch(ModuleKind::Battleships)),
        (11, SWITCH_ROW) => Some(Gesture::Switch(ModuleKind::Rain)),
        _ => None,
    }
}

/// Owns the LED surface and the active game module.
pub struct Console {
    surface: LedSurface,
    active: Box<dyn GameModule>,
    rng: SmallRng,
    long_press: Duration,
    held: Option<Cell>,
    last_event_at: Duration,
}

impl Console {
    /// Start the console with `config.initial` running.
    pub fn new(
        panel: Box<dyn Panel>,
        mut rng: SmallRng,
        config: ConsoleConfig,
    ) -> Result<Self, BoardError> {
        let mut surface = LedSurface::new(panel);
        Self::prepare(&mut surface, config.initial);
        let active = config.initial.build(&mut surface, &mut rng)?;
        info!("Console started with {}", config.initial.name());
        Ok(Self {
            surface,
            active,
            rng,
            long_press: config.long_press,
            held: None,
            last_event_at: Duration::ZERO,
        })
    }

    /// Backdrop painted before a module is built.
    fn prepare(surface: &mut LedSurface, kind: ModuleKind) {
        match kind {
            ModuleKind::Flash => surface.reset(FLASH_BACKDROP),
            ModuleKind::Rain => surface.reset(OFF),
            ModuleKind::Battleships => {}
        }
    }

    pub fn surface(&self) -> &LedSurface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut LedSurface {
        &mut self.surface
    }

    pub fn active_kind(&self) -> ModuleKind {
        self.active.kind()
    }

    /// Key currently held, as far as long-press tracking is concerned.
    pub fn held(&self) -> Option<Cell> {
        self.held
    }

    pub fn long_press_threshold(&self) -> Duration {
        self.long_press
    }

    /// Let the active module show its hidden state on the panel.
    pub fn reveal(&mut self) {
        self.active.reveal(&mut self.surface);
    }

    fn long_press_due(&self, now: Duration) -> bool {
        now.saturating_sub(self.last_event_at) >= self.long_press
    }

    /// Handle one key edge reported at `now`.
    pub fn on_edge(&mut self, cell: Cell, edge: Edge, now: Duration) {
        match edge {
            Edge::Rising => {
                self.held = Some(cell);
                self.active.btn_event(&mut self.surface, cell, true, now);
            }
            Edge::Falling => {
                if self.held == Some(cell) && self.long_press_due(now) {
                    self.surface.highlight(cell, OFF);
                    self.on_long_press(cell, now);
                }
                self.active.btn_event(&mut self.surface, cell, false, now);
                self.held = None;
            }
        }
        self.last_event_at = now;
    }

    fn on_long_press(&mut self, cell: Cell, now: Duration) {
        info!("Button long press at {}", cell);
        match gesture_at(cell) {
            Some(Gesture::Brightness(level)) => {
                debug!("Brightness set to {}", level);
                self.surface.set_brightness(level);
            }
            Some(Gesture::Switch(kind)) => self.switch_to(kind),
            None => self.active.long_press_event(&mut self.surface, cell, now),
        }
        self.surface.restore_colour(cell.x, cell.y);
    }

    /// Replace the active module with a fresh `kind`. The old module is
    /// dropped as is; a turn in flight is abandoned.
    pub fn switch_to(&mut self, kind: ModuleKind) {
        Self::prepare(&mut self.surface, kind);
        match kind.build(&mut self.surface, &mut self.rng) {
            Ok(module) => {
                info!("Switched to {}", kind.name());
                self.active = module;
            }
            Err(e) => error!("Could not start {}: {}", kind.name(), e),
        }
    }

    /// Per-poll work: animate the active module, then show long-press
    /// feedback on a key held past the threshold.
    pub fn tick(&mut self, now: Duration) {
        self.active.animate(&mut self.surface, now);
        if let Some(cell) = self.held {
            if self.long_press_due(now) {
                self.surface.highlight(cell, LONG_PRESS_PENDING);
            }
        }
    }
}
