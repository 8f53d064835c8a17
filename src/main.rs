#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use trellis_console::{
    init_logging, run_host, Console, ConsoleConfig, ModuleKind, ScriptSource, TerminalPanel,
    DEFAULT_POLL_INTERVAL, LONG_PRESS,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use log::info;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Run the console in this terminal, reading key edges from stdin.
    ///
    /// One command per line: `press X Y`, `release X Y`, `tap X Y`,
    /// `hold X Y MS`, `wait MS` or `quit`.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, value_enum, default_value_t = ModuleKind::Battleships)]
        game: ModuleKind,
        #[arg(long, default_value_t = LONG_PRESS.as_millis() as u64, help = "Hold time in ms that counts as a long press")]
        long_press_ms: u64,
        #[arg(long, default_value_t = DEFAULT_POLL_INTERVAL.as_millis() as u64, help = "Key matrix poll period in ms")]
        poll_ms: u64,
        #[arg(long, help = "Show the hidden fleet at start")]
        reveal: bool,
    },
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            seed,
            game,
            long_press_ms,
            poll_ms,
            reveal,
        } => {
            if let Some(s) = seed {
                info!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let rng = if let Some(s) = seed {
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };
            let config = ConsoleConfig {
                long_press: Duration::from_millis(long_press_ms),
                initial: game,
            };
            let mut console = Console::new(Box::new(TerminalPanel::new()), rng, config)
                .map_err(|e| anyhow::anyhow!(e))?;
            if reveal {
                console.reveal();
            }
            let mut source = ScriptSource::stdin();
            run_host(&mut console, &mut source, Duration::from_millis(poll_ms)).await?;
        }
    }
    Ok(())
}
