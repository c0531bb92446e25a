#[macro_use]
extern crate log;

use std::collections::HashSet;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use termion::input::TermRead;
use termion::raw::IntoRawMode;
use termion::screen::AlternateScreen;

use ncs_palette::explorer::{EdgeDetector, Explorer};
use ncs_palette::prelude::*;
use ncs_palette::terminal::{self, Layout};

/// Step through the Natural Color System one key press at a time.
#[derive(Parser, Debug)]
#[command(name = "ncs-palette")]
#[command(about = "Interactive NCS color explorer for 24-bit color terminals")]
struct Args {
    /// NCS notation of the color to start from
    #[arg(long, default_value = "1050-R90B")]
    seed: String,

    /// Swatches on each side of the center (0 shows a single swatch)
    #[arg(long, default_value = "4")]
    radius: u16,

    /// Milliseconds between input polls
    #[arg(long, default_value = "33")]
    tick_ms: u64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    // a bad seed is fatal, and is reported before the terminal is touched
    let seed: NCSColor = args
        .seed
        .parse()
        .with_context(|| format!("invalid seed color {:?}", args.seed))?;
    let layout = Layout {
        radius: args.radius,
        ..Layout::default()
    };
    info!("starting from {} ({})", seed, seed.hex());

    run(
        Explorer::new(seed),
        &layout,
        Duration::from_millis(args.tick_ms),
    )
}

fn run(mut explorer: Explorer, layout: &Layout, tick: Duration) -> Result<()> {
    let (width, height) = layout.size();
    match termion::terminal_size() {
        Ok((cols, rows)) if cols < width || rows < height => warn!(
            "terminal is {}x{} but the grid needs {}x{}",
            cols, rows, width, height
        ),
        Ok(_) => {}
        Err(e) => warn!("couldn't read the terminal size: {}", e),
    }

    let stdout = io::stdout()
        .into_raw_mode()
        .context("failed to switch the terminal to raw mode")?;
    let mut screen = AlternateScreen::from(stdout);
    let mut keys = termion::async_stdin().keys();
    let mut detector = EdgeDetector::new();

    write!(screen, "{}", termion::cursor::Hide)?;
    terminal::draw(&mut screen, &explorer, layout)?;

    'ticks: loop {
        // a terminal only reports presses, so a key counts as held for the tick it arrived in
        let mut held = HashSet::new();
        for key in keys.by_ref() {
            let key = key?;
            if terminal::is_quit(&key) {
                break 'ticks;
            }
            if let Some(trigger) = terminal::trigger_for(&key) {
                held.insert(trigger);
            }
        }

        let before = explorer.current();
        explorer = explorer.handle_input(&detector.edges(&held));
        if explorer.current() != before {
            terminal::draw(&mut screen, &explorer, layout)?;
        }
        thread::sleep(tick);
    }

    write!(
        screen,
        "{}{}",
        termion::style::Reset,
        termion::cursor::Show
    )?;
    screen.flush()?;
    info!("stopped at {}", explorer.current());
    Ok(())
}
