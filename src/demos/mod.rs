//! The two simple modules bundled with the console.
//!
//! - [`FlashDemo`]: lights keys as they are pressed
//! - [`RainDemo`]: drops fall from every pressed key

pub mod flash;
pub mod rain;

pub use flash::FlashDemo;
pub use rain::RainDemo;
