//! RGB colours, the decorative palette and the Battleships sentinels.

/// A 24-bit RGB colour as sent to a key's LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Scale every channel by `brightness` (clamped to `0.0..=1.0`), rounding
    /// to the nearest step the way the LED driver does.
    pub fn scaled(self, brightness: f32) -> Self {
        let k = brightness.clamp(0.0, 1.0);
        let ch = |v: u8| libm::roundf(v as f32 * k) as u8;
        Self::new(ch(self.r), ch(self.g), ch(self.b))
    }
}

pub const OFF: Colour = Colour::new(0, 0, 0);
pub const RED: Colour = Colour::new(255, 0, 0);
pub const ORANGE: Colour = Colour::new(255, 120, 0);
pub const YELLOW: Colour = Colour::new(255, 180, 0);
pub const GREEN: Colour = Colour::new(0, 255, 0);
pub const CYAN: Colour = Colour::new(0, 255, 255);
pub const BLUE: Colour = Colour::new(0, 0, 255);
pub const MAGENTA: Colour = Colour::new(255, 0, 255);
pub const PURPLE: Colour = Colour::new(100, 0, 255);
pub const WHITE: Colour = Colour::new(255, 255, 255);
pub const DIM_WHITE: Colour = Colour::new(20, 20, 20);

/// Colours that double as Battleships cell state.
///
/// The playfield keeps no hidden copy of which cells were fired at; it reads
/// the persisted LED colour back and classifies it with [`Sentinel::from_colour`].
/// None of these values may be reused for decoration inside the playfield.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentinel {
    Untried,
    Miss,
    Hit,
    Sunk,
}

impl Sentinel {
    pub const ALL: [Sentinel; 4] = [
        Sentinel::Untried,
        Sentinel::Miss,
        Sentinel::Hit,
        Sentinel::Sunk,
    ];

    pub const fn colour(self) -> Colour {
        match self {
            Sentinel::Untried => DIM_WHITE,
            Sentinel::Miss => BLUE,
            Sentinel::Hit => ORANGE,
            Sentinel::Sunk => RED,
        }
    }

    pub fn from_colour(colour: Colour) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.colour() == colour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels_are_distinct() {
        for a in Sentinel::ALL {
            assert_eq!(Sentinel::from_colour(a.colour()), Some(a));
        }
        assert_eq!(Sentinel::from_colour(YELLOW), None);
        assert_eq!(Sentinel::from_colour(WHITE), None);
    }

    #[test]
    fn scaling_rounds_and_clamps() {
        assert_eq!(WHITE.scaled(1.0), WHITE);
        assert_eq!(WHITE.scaled(2.0), WHITE);
        assert_eq!(WHITE.scaled(0.1), Colour::new(26, 26, 26));
        assert_eq!(PURPLE.scaled(0.0), OFF);
    }
}
