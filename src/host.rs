#![cfg(feature = "std")]

//! The cooperative host loop.

use std::time::Duration;

use log::{debug, info};
use tokio::time::{interval, Instant, MissedTickBehavior};

use crate::config::MIN_POLL_INTERVAL;
use crate::kernel::Console;
use crate::source::{activate_all, EdgeSource};

/// Run `console` against `source` until the source closes.
///
/// Every `poll` (never faster than the matrix allows) the loop drains queued
/// edges and dispatches them in order, then ticks the console and flushes the
/// panel. Everything runs on the calling task; nothing here is shared.
pub async fn run_host<S>(console: &mut Console, source: &mut S, poll: Duration) -> anyhow::Result<()>
where
    S: EdgeSource + ?Sized,
{
    activate_all(source);
    let period = poll.max(MIN_POLL_INTERVAL);
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let started = Instant::now();
    info!("Host loop polling every {:?}", period);

    loop {
        ticker.tick().await;
        for event in source.sync().await? {
            debug!("Edge {:?} at {}", event.edge, event.cell);
            console.on_edge(event.cell, event.edge, started.elapsed());
        }
        console.tick(started.elapsed());
        console.surface_mut().flush();
        if source.is_closed() {
            break;
        }
    }
    info!("Edge source closed, host loop stopping");
    Ok(())
}
