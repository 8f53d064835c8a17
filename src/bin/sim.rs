use std::time::Duration;

use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;
use trellis_console::battleships::SCORE;
use trellis_console::{
    score_cell, Battleships, Cell, GameModule, LedSurface, TurnStage, INTERIOR_MAX, INTERIOR_MIN,
    TURN_TIME,
};

/// Fire one shot through the key/animate cycle a player would drive.
fn fire(game: &mut Battleships, surface: &mut LedSurface, cell: Cell, now: &mut Duration) {
    game.btn_event(surface, cell, true, *now);
    game.btn_event(surface, cell, false, *now);
    let step = Duration::from_millis(100);
    while game.stage() != TurnStage::Idle {
        *now += step;
        game.animate(surface, *now);
    }
    *now += TURN_TIME;
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut surface = LedSurface::headless();
    let mut game = Battleships::new(&mut surface, &mut rng).map_err(|e| anyhow::anyhow!(e))?;
    let ships: Vec<_> = game
        .fleet()
        .ships()
        .map(|ship| {
            json!({
                "name": ship.class().name(),
                "cells": ship.cells().map(|c| [c.x, c.y]).collect::<Vec<_>>(),
            })
        })
        .collect();

    let mut now = Duration::ZERO;
    'raster: for y in INTERIOR_MIN..=INTERIOR_MAX {
        for x in INTERIOR_MIN..=INTERIOR_MAX {
            if game.all_sunk() {
                break 'raster;
            }
            fire(&mut game, &mut surface, Cell::new(x, y), &mut now);
        }
    }

    let score_lit = (1..=game.misses())
        .filter_map(score_cell)
        .filter(|&c| surface.colour_at(c) == SCORE)
        .count();
    let result = json!({
        "seed": seed,
        "ships": ships,
        "tally": game.tally(),
        "shots": game.tally().shots(),
        "score_cells_lit": score_lit,
        "all_sunk": game.all_sunk(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
