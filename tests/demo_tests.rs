use std::time::Duration;
use trellis_console::demos::flash::RAINBOW;
use trellis_console::{Cell, Colour, FlashDemo, GameModule, LedSurface, ModuleKind, RainDemo, WHITE};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn test_flash_cycles_the_rainbow() {
    let mut surface = LedSurface::headless();
    let mut demo = FlashDemo::new();
    assert_eq!(demo.kind(), ModuleKind::Flash);

    for (i, expected) in RAINBOW.iter().chain(RAINBOW.iter().take(1)).enumerate() {
        let cell = Cell::new(i as i32, 2);
        demo.btn_event(&mut surface, cell, true, ms(0));
        assert_eq!(surface.displayed(cell.x, cell.y), WHITE);
        demo.btn_event(&mut surface, cell, false, ms(10));
        assert_eq!(surface.colour_at(cell), *expected);
    }
}

#[test]
fn test_rain_is_rate_limited() {
    let mut surface = LedSurface::headless();
    let mut rain = RainDemo::new();
    rain.btn_event(&mut surface, Cell::new(5, 0), true, ms(0));
    // Releases start nothing.
    rain.btn_event(&mut surface, Cell::new(6, 0), false, ms(0));
    assert_eq!(rain.active_drops(), 1);

    rain.animate(&mut surface, ms(0));
    let head = Colour::new(0, 252, 0);
    assert_eq!(surface.colour(5, 0), head);

    // Within the frame interval nothing moves.
    rain.animate(&mut surface, ms(150));
    assert_eq!(surface.colour(5, 1), Colour::default());

    rain.animate(&mut surface, ms(201));
    assert_eq!(surface.colour(5, 1), head);
}

#[test]
fn test_rain_drains_completely() {
    let mut surface = LedSurface::headless();
    let mut rain = RainDemo::new();
    for x in [0, 11] {
        rain.btn_event(&mut surface, Cell::new(x, 0), true, ms(0));
    }
    let mut now = ms(0);
    for _ in 0..40 {
        rain.animate(&mut surface, now);
        now += ms(250);
    }
    assert_eq!(rain.active_drops(), 0);
    // Every cell the drops passed through is left on the trail colour.
    for y in 0..12 {
        assert_eq!(surface.colour(0, y), Colour::new(10, 10, 10));
        assert_eq!(surface.colour(11, y), Colour::new(10, 10, 10));
    }
}
