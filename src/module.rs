//! Game module interface and registry.

use alloc::boxed::Box;
use core::time::Duration;
use rand::rngs::SmallRng;

use crate::battleships::Battleships;
use crate::common::{BoardError, Cell};
use crate::demos::{FlashDemo, RainDemo};
use crate::surface::LedSurface;

/// Interface implemented by every game the console can run.
///
/// The kernel owns the surface and lends it to the active module for the
/// duration of each call. `now` is the monotonic time since the host started.
pub trait GameModule: Send {
    /// A key was pressed (`pressed == true`) or released.
    fn btn_event(&mut self, surface: &mut LedSurface, cell: Cell, pressed: bool, now: Duration);

    /// Called once per poll. Must not block; effects slower than the poll
    /// rate are rate limited by the module itself.
    fn animate(&mut self, surface: &mut LedSurface, now: Duration);

    /// A long press the kernel does not reserve for itself.
    fn long_press_event(&mut self, _surface: &mut LedSurface, _cell: Cell, _now: Duration) {}

    /// Show hidden state with transient writes, for debugging.
    fn reveal(&self, _surface: &mut LedSurface) {}

    /// Which registry entry built this module.
    fn kind(&self) -> ModuleKind;
}

/// The modules the console knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(clap::ValueEnum, serde::Serialize))]
pub enum ModuleKind {
    Flash,
    Battleships,
    Rain,
}

impl ModuleKind {
    /// Construct a fresh instance. Modules paint their own starting state.
    pub fn build(
        self,
        surface: &mut LedSurface,
        rng: &mut SmallRng,
    ) -> Result<Box<dyn GameModule>, BoardError> {
        Ok(match self {
            ModuleKind::Flash => Box::new(FlashDemo::new()),
            ModuleKind::Battleships => Box::new(Battleships::new(surface, rng)?),
            ModuleKind::Rain => Box::new(RainDemo::new()),
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            ModuleKind::Flash => "flash",
            ModuleKind::Battleships => "battleships",
            ModuleKind::Rain => "rain",
        }
    }
}
