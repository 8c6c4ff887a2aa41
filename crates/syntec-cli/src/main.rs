//! Terminal frontend for the SYN-TEC remote link.

mod banner;
mod pause;

use std::io::{self, IsTerminal};
use std::process;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use syntec_story::{Narrator, NarratorConfig, Session, StoryConfig};

#[derive(Parser)]
#[command(
    name = "syntec",
    about = "SYN-TEC: a remote link to a newly conscious machine",
    version
)]
struct Cli {
    /// Hours on the clock when the link opens
    #[arg(long, default_value_t = syntec_story::config::DEFAULT_HOURS)]
    hours: u32,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,

    /// Delay between characters of prose, in milliseconds
    #[arg(long, value_name = "MS", default_value_t = 0)]
    typewriter: u64,

    /// Wrap prose at this many columns (default: terminal width)
    #[arg(long, value_name = "COLS")]
    width: Option<usize>,

    /// Clear the screen before each new scene
    #[arg(long)]
    clear: bool,

    /// Ring the terminal bell on connection, rejected input and the ending
    #[arg(long)]
    sound: bool,

    /// Exit straight after the ending instead of waiting for Enter
    #[arg(long)]
    no_pause: bool,
}

impl Cli {
    fn narrator_config(&self) -> NarratorConfig {
        let mut config = NarratorConfig::new()
            .with_color(!self.no_color)
            .with_typewriter(Duration::from_millis(self.typewriter))
            .with_clear(self.clear)
            .with_bell(self.sound);

        if let Some(width) = self.width.or_else(terminal_width) {
            config = config.with_width(width);
        }
        config
    }
}

/// Width of the attached terminal, leaving a small margin.
fn terminal_width() -> Option<usize> {
    if !io::stdout().is_terminal() {
        return None;
    }
    crossterm::terminal::size()
        .ok()
        .map(|(cols, _)| usize::from(cols).saturating_sub(2))
}

fn run(cli: &Cli) -> Result<(), String> {
    let stdout = io::stdout();
    let mut narrator = Narrator::new(stdout.lock(), cli.narrator_config());
    tracing::debug!(config = ?narrator.config(), "narrator ready");
    banner::print(&mut narrator).map_err(|e| e.to_string())?;

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let mut session = Session::new(StoryConfig::default().with_hours(cli.hours));
    let ending = session
        .play(&mut input, &mut narrator)
        .map_err(|e| e.to_string())?;
    tracing::info!(%ending, hours = session.state().hours, "session finished");

    if !cli.no_pause {
        pause::wait(&mut input, &mut narrator).map_err(|e| e.to_string())?;
    }
    Ok(())
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
