use core::time::Duration;

use crate::colour::Colour;
use crate::ship::ShipClass;

/// Width and height of the button matrix (3×3 tiles of 4×4 keys).
pub const GRID_SIZE: usize = 12;
/// Width and height of the Battleships playfield inside the border.
pub const PLAYFIELD_SIZE: usize = 10;
/// First and last interior coordinate on either axis.
pub const INTERIOR_MIN: i32 = 1;
pub const INTERIOR_MAX: i32 = PLAYFIELD_SIZE as i32;

pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipClass; NUM_SHIPS] = [
    ShipClass::new("Carrier", 5),
    ShipClass::new("Battleship", 4),
    ShipClass::new("Cruiser", 3),
    ShipClass::new("Submarine", 3),
    ShipClass::new("Destroyer", 2),
];

/// Total number of ship segments used in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Random walks tried per ship before falling back to a raster scan.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1_000;

/// Number of border cells available to the miss counter.
pub const MAX_SCORE: u32 = 44;

/// Delay between a shot being armed and it landing.
pub const TURN_TIME: Duration = Duration::from_secs(1);
/// Period of the incoming-shot flash.
pub const ANIMATE_INTERVAL: Duration = Duration::from_millis(500);
/// Period of the rain demo's drop animation.
pub const RAIN_INTERVAL: Duration = Duration::from_millis(200);

/// Hold time after which a release counts as a long press.
pub const LONG_PRESS: Duration = Duration::from_secs(1);
/// The key matrix cannot be read faster than this.
pub const MIN_POLL_INTERVAL: Duration = Duration::from_millis(17);
/// Poll period used by the host loop unless overridden.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Brightness applied at power-on.
pub const DEFAULT_BRIGHTNESS: f32 = 0.1;
/// Brightness levels selected by a long press on row 0, columns 6..=11.
pub const BRIGHTNESS_LEVELS: [f32; 6] = [0.1, 0.2, 0.4, 0.6, 0.8, 1.0];
pub const BRIGHTNESS_ROW: i32 = 0;
pub const BRIGHTNESS_FIRST_COLUMN: i32 = 6;

/// Row holding the module-switch gestures.
pub const SWITCH_ROW: i32 = 11;

/// Backdrop painted before the flash demo starts.
pub const FLASH_BACKDROP: Colour = Colour::new(50, 0, 50);
/// Shown on a held key once the hold has passed the long-press threshold.
pub const LONG_PRESS_PENDING: Colour = Colour::new(255, 80, 0);
