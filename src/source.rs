#![cfg(feature = "std")]

//! Sources of key edges for the host loop.
//!
//! The matrix reports edges only for keys whose rising or falling edge has
//! been activated, and is read in batches once per poll.

use std::collections::VecDeque;
use std::str::SplitWhitespace;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::anyhow;
use log::warn;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::common::{Cell, Edge, EdgeEvent};
use crate::config::GRID_SIZE;

#[async_trait::async_trait]
pub trait EdgeSource: Send {
    /// Ask to be told about `edge` on `cell`.
    fn activate(&mut self, cell: Cell, edge: Edge);

    /// Drain the edges queued since the last call.
    async fn sync(&mut self) -> anyhow::Result<Vec<EdgeEvent>>;

    /// No more edges will ever arrive.
    fn is_closed(&self) -> bool;
}

/// Activate both edges on every key.
pub fn activate_all<S: EdgeSource + ?Sized>(source: &mut S) {
    for y in 0..GRID_SIZE as i32 {
        for x in 0..GRID_SIZE as i32 {
            source.activate(Cell::new(x, y), Edge::Rising);
            source.activate(Cell::new(x, y), Edge::Falling);
        }
    }
}

const RISING: u8 = 0b01;
const FALLING: u8 = 0b10;

/// Per-key edge registrations.
#[derive(Debug, Clone, Default)]
pub struct Interest {
    flags: [[u8; GRID_SIZE]; GRID_SIZE],
}

impl Interest {
    fn bit(edge: Edge) -> u8 {
        match edge {
            Edge::Rising => RISING,
            Edge::Falling => FALLING,
        }
    }

    pub fn activate(&mut self, cell: Cell, edge: Edge) {
        if cell.on_grid() {
            self.flags[cell.y as usize][cell.x as usize] |= Self::bit(edge);
        } else {
            warn!("Cannot activate key outside trellis at: {}", cell);
        }
    }

    /// Keys off the grid are never registered.
    pub fn accepts(&self, event: &EdgeEvent) -> bool {
        event.cell.on_grid()
            && self.flags[event.cell.y as usize][event.cell.x as usize] & Self::bit(event.edge) != 0
    }
}

/// In-memory edge queue fed through a [`QueueHandle`].
pub struct QueueSource {
    queue: Arc<Mutex<VecDeque<EdgeEvent>>>,
    interest: Interest,
}

/// Producer side of a [`QueueSource`]. The source closes once every handle
/// has been dropped and the queue is drained.
#[derive(Clone)]
pub struct QueueHandle {
    queue: Arc<Mutex<VecDeque<EdgeEvent>>>,
}

impl QueueSource {
    pub fn new() -> (Self, QueueHandle) {
        let queue = Arc::new(Mutex::new(VecDeque::new()));
        (
            Self {
                queue: queue.clone(),
                interest: Interest::default(),
            },
            QueueHandle { queue },
        )
    }
}

impl QueueHandle {
    pub fn push(&self, event: EdgeEvent) {
        if let Ok(mut queue) = self.queue.lock() {
            queue.push_back(event);
        }
    }
}

#[async_trait::async_trait]
impl EdgeSource for QueueSource {
    fn activate(&mut self, cell: Cell, edge: Edge) {
        self.interest.activate(cell, edge);
    }

    async fn sync(&mut self) -> anyhow::Result<Vec<EdgeEvent>> {
        let mut queue = self
            .queue
            .lock()
            .map_err(|_| anyhow!("edge queue poisoned"))?;
        Ok(queue.drain(..).filter(|e| self.interest.accepts(e)).collect())
    }

    fn is_closed(&self) -> bool {
        Arc::strong_count(&self.queue) == 1
            && self.queue.lock().map(|q| q.is_empty()).unwrap_or(true)
    }
}

/// One line of an edge script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptCommand {
    Press(Cell),
    Release(Cell),
    /// Press and release in the same poll.
    Tap(Cell),
    /// Press, wait, release.
    Hold(Cell, Duration),
    Wait(Duration),
    Quit,
}

fn parse_number<T: std::str::FromStr>(word: Option<&str>, what: &str) -> Result<T, String> {
    let word = word.ok_or_else(|| format!("missing {}", what))?;
    word.parse()
        .map_err(|_| format!("invalid {} '{}'", what, word))
}

fn parse_cell(words: &mut SplitWhitespace<'_>) -> Result<Cell, String> {
    let x = parse_number(words.next(), "x")?;
    let y = parse_number(words.next(), "y")?;
    Ok(Cell::new(x, y))
}

/// Parse one script line. Blank lines and `#` comments yield `None`.
///
/// ```text
/// press X Y | release X Y | tap X Y | hold X Y MS | wait MS | quit
/// ```
pub fn parse_command(line: &str) -> Result<Option<ScriptCommand>, String> {
    let line = line.split('#').next().unwrap_or("").trim();
    if line.is_empty() {
        return Ok(None);
    }
    let mut words = line.split_whitespace();
    let verb = words.next().unwrap_or("").to_ascii_lowercase();
    let cmd = match verb.as_str() {
        "press" | "p" => ScriptCommand::Press(parse_cell(&mut words)?),
        "release" | "r" => ScriptCommand::Release(parse_cell(&mut words)?),
        "tap" | "t" => ScriptCommand::Tap(parse_cell(&mut words)?),
        "hold" | "h" => {
            let at = parse_cell(&mut words)?;
            let ms: u64 = parse_number(words.next(), "duration")?;
            ScriptCommand::Hold(at, Duration::from_millis(ms))
        }
        "wait" | "w" => {
            let ms: u64 = parse_number(words.next(), "duration")?;
            ScriptCommand::Wait(Duration::from_millis(ms))
        }
        "quit" | "q" => ScriptCommand::Quit,
        other => return Err(format!("unknown command '{}'", other)),
    };
    if words.next().is_some() {
        return Err("trailing input".to_string());
    }
    Ok(Some(cmd))
}

/// Edges read from a line script, e.g. typed on stdin.
pub struct ScriptSource {
    rx: mpsc::UnboundedReceiver<EdgeEvent>,
    interest: Interest,
    closed: bool,
}

impl ScriptSource {
    /// Read commands from `reader` on a background task. Must be called
    /// from within a tokio runtime.
    pub fn spawn<R>(reader: R) -> Self
    where
        R: AsyncBufRead + Unpin + Send + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(async move {
            if let Err(e) = feed(reader, tx).await {
                warn!("Edge script stopped: {}", e);
            }
        });
        Self {
            rx,
            interest: Interest::default(),
            closed: false,
        }
    }

    pub fn stdin() -> Self {
        Self::spawn(BufReader::new(tokio::io::stdin()))
    }
}

async fn feed<R>(reader: R, tx: mpsc::UnboundedSender<EdgeEvent>) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let send = |event: EdgeEvent| tx.send(event).map_err(|_| anyhow!("console stopped"));
    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        let cmd = match parse_command(&line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => continue,
            Err(msg) => {
                warn!("Ignoring script line {:?}: {}", line, msg);
                continue;
            }
        };
        match cmd {
            ScriptCommand::Press(c) => send(EdgeEvent::press(c.x, c.y))?,
            ScriptCommand::Release(c) => send(EdgeEvent::release(c.x, c.y))?,
            ScriptCommand::Tap(c) => {
                send(EdgeEvent::press(c.x, c.y))?;
                send(EdgeEvent::release(c.x, c.y))?;
            }
            ScriptCommand::Hold(c, hold) => {
                send(EdgeEvent::press(c.x, c.y))?;
                tokio::time::sleep(hold).await;
                send(EdgeEvent::release(c.x, c.y))?;
            }
            ScriptCommand::Wait(pause) => tokio::time::sleep(pause).await,
            ScriptCommand::Quit => break,
        }
    }
    Ok(())
}

#[async_trait::async_trait]
impl EdgeSource for ScriptSource {
    fn activate(&mut self, cell: Cell, edge: Edge) {
        self.interest.activate(cell, edge);
    }

    async fn sync(&mut self) -> anyhow::Result<Vec<EdgeEvent>> {
        let mut events = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(event) if self.interest.accepts(&event) => events.push(event),
                Ok(_) => {}
                Err(mpsc::error::TryRecvError::Empty) => break,
                Err(mpsc::error::TryRecvError::Disconnected) => {
                    self.closed = true;
                    break;
                }
            }
        }
        Ok(events)
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_script_lines() {
        assert_eq!(parse_command("  # just a note"), Ok(None));
        assert_eq!(
            parse_command("press 3 4"),
            Ok(Some(ScriptCommand::Press(Cell::new(3, 4))))
        );
        assert_eq!(
            parse_command("hold 11 0 1500"),
            Ok(Some(ScriptCommand::Hold(
                Cell::new(11, 0),
                Duration::from_millis(1500)
            )))
        );
        assert_eq!(parse_command("q"), Ok(Some(ScriptCommand::Quit)));
        assert!(parse_command("press 3").is_err());
        assert!(parse_command("jump 1 2").is_err());
        assert!(parse_command("tap 1 2 3").is_err());
    }

    #[test]
    fn interest_filters_edges() {
        let mut interest = Interest::default();
        interest.activate(Cell::new(2, 2), Edge::Rising);
        assert!(interest.accepts(&EdgeEvent::press(2, 2)));
        assert!(!interest.accepts(&EdgeEvent::release(2, 2)));
        assert!(!interest.accepts(&EdgeEvent::press(3, 2)));
        assert!(!interest.accepts(&EdgeEvent::press(-1, 2)));
    }
}
