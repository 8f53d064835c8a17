#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
pub mod battleships;
mod bitboard;
mod board;
mod colour;
mod common;
mod config;
pub mod demos;
mod kernel;
mod module;
mod ship;
mod surface;
#[cfg(feature = "std")]
mod host;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod source;
#[cfg(feature = "std")]
mod terminal;

pub use battleships::{score_cell, Battleships, ShotTally, TurnStage};
pub use bitboard::{BitBoard, BitBoardError};
pub use board::*;
pub use colour::*;
pub use common::*;
pub use config::*;
pub use demos::{FlashDemo, RainDemo};
pub use kernel::{gesture_at, Console, ConsoleConfig, Gesture};
pub use module::{GameModule, ModuleKind};
pub use ship::*;
pub use surface::{LedSurface, NullPanel, Panel};
#[cfg(feature = "std")]
pub use host::run_host;
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use source::{EdgeSource, QueueHandle, QueueSource, ScriptSource};
#[cfg(feature = "std")]
pub use terminal::TerminalPanel;
