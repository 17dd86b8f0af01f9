//! Multicell runner (default binary).
//!
//! Loads a seed file, then alternates render -> wait -> step. By default the
//! board is drawn full-screen with crossterm and accepts pause/step/quit keys;
//! `--plain` prints framed text frames in place instead.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use multicell::core::{Alphabet, Grid, Seed, SeededTieBreaker};
use multicell::engine::Automaton;
use multicell::input::map_key;
use multicell::term::{
    render_text, FrameBuffer, GridView, PlainPrinter, Status, TerminalRenderer, Viewport,
};
use multicell::types::{
    parse_interval, DriverAction, SimConfig, DEFAULT_DEAD_CHAR, DEFAULT_FILL_CHAR,
    DEFAULT_INTERVAL_SECS, DEFAULT_PADDING, MAX_INTERVAL_SECS, MIN_INTERVAL_SECS, TITLE,
};

#[derive(Debug, Parser)]
#[command(name = "multicell", version, about = TITLE)]
struct Args {
    /// Seed file for the simulation.
    seed: PathBuf,

    /// Amount of padding outside of the visible area.
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_PADDING,
        allow_negative_numbers = true,
        env = "MULTICELL_PADDING"
    )]
    padding: usize,

    /// Time in seconds between each generation.
    #[arg(
        short = 't',
        long = "time-interval",
        default_value_t = DEFAULT_INTERVAL_SECS,
        allow_negative_numbers = true,
        value_parser = interval_secs,
        env = "MULTICELL_INTERVAL"
    )]
    interval: f64,

    /// Only accept these characters as live identities (e.g. "O" for plain Life).
    #[arg(long)]
    alphabet: Option<String>,

    /// Character marking dead cells in the seed file.
    #[arg(long, default_value_t = DEFAULT_DEAD_CHAR)]
    dead_char: char,

    /// Character drawn in place of dead cells.
    #[arg(long, default_value_t = DEFAULT_FILL_CHAR)]
    fill_char: char,

    /// Seed for the tie-break random source, for reproducible runs.
    #[arg(long, env = "MULTICELL_RNG_SEED")]
    rng_seed: Option<u64>,

    /// Start paused (step with `n`, resume with `p`). Not available with `--plain`.
    #[arg(long, conflicts_with = "plain")]
    paused: bool,

    /// Stop after this many generations.
    #[arg(short, long)]
    generations: Option<u64>,

    /// Print text frames instead of taking over the terminal.
    #[arg(long)]
    plain: bool,

    /// Write log output to this file instead of stderr.
    #[arg(long, env = "MULTICELL_LOG_FILE")]
    log_file: Option<PathBuf>,
}

impl Args {
    fn sim_config(&self) -> Result<SimConfig> {
        let config = SimConfig::new(self.padding, self.interval)?
            .with_glyphs(self.dead_char, self.fill_char)?;
        Ok(config)
    }

    fn alphabet(&self, config: &SimConfig) -> Alphabet {
        let alphabet = Alphabet::from_config(config);
        match &self.alphabet {
            Some(chars) => alphabet.restricted_to(chars),
            None => alphabet,
        }
    }
}

fn interval_secs(s: &str) -> Result<f64, String> {
    let secs: f64 = s
        .parse()
        .map_err(|_| format!("{s:?} is not a number of seconds"))?;
    parse_interval(secs).map_err(|e| e.to_string())?;
    Ok(secs)
}

fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;

    let config = args.sim_config()?;
    let alphabet = args.alphabet(&config);
    let seed = Seed::load(&args.seed, &alphabet)
        .with_context(|| format!("cannot start from seed {}", args.seed.display()))?;
    let grid = Grid::from_seed(&seed, config.padding);

    let tie_breaker = match args.rng_seed {
        Some(s) => SeededTieBreaker::new(s),
        None => SeededTieBreaker::from_entropy(),
    };
    let mut automaton = Automaton::new(grid, tie_breaker);

    if args.plain {
        return run_plain(&mut automaton, &config, args.generations);
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut automaton, &config, &args);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run_plain(
    automaton: &mut Automaton<SeededTieBreaker>,
    config: &SimConfig,
    generations: Option<u64>,
) -> Result<()> {
    let mut printer = PlainPrinter::new(io::stdout());
    loop {
        let frame = format!("{}\n{}", TITLE, render_text(automaton.grid(), config.fill_char));
        printer.print(&frame)?;
        if generations.is_some_and(|limit| automaton.generation() >= limit) {
            return Ok(());
        }
        automaton.step();
        thread::sleep(config.interval);
    }
}

fn run(
    term: &mut TerminalRenderer,
    automaton: &mut Automaton<SeededTieBreaker>,
    config: &SimConfig,
    args: &Args,
) -> Result<()> {
    let view = GridView::new(config.fill_char);
    let mut fb = FrameBuffer::new(0, 0);
    let mut paused = args.paused;
    let mut interval = config.interval;
    let mut last_step = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let status = Status {
            generation: automaton.generation(),
            paused,
            interval_ms: interval.as_millis() as u64,
        };
        view.render_into(automaton.grid(), &status, Viewport::new(w, h), &mut fb)?;
        term.draw_swap(&mut fb)?;

        if args
            .generations
            .is_some_and(|limit| automaton.generation() >= limit)
        {
            return Ok(());
        }

        // Input: block while paused, otherwise wait until the next generation is due.
        let event = if paused {
            Some(event::read()?)
        } else {
            let timeout = interval.saturating_sub(last_step.elapsed());
            if event::poll(timeout)? {
                Some(event::read()?)
            } else {
                None
            }
        };

        let mut advance = false;
        match event {
            Some(Event::Key(key)) if key.kind == KeyEventKind::Press => match map_key(key) {
                Some(DriverAction::Quit) => return Ok(()),
                Some(DriverAction::TogglePause) => {
                    paused = !paused;
                    last_step = Instant::now();
                }
                Some(DriverAction::Step) if paused => advance = true,
                Some(DriverAction::Restart) => automaton.restart(),
                Some(DriverAction::Faster) => interval = scale_interval(interval, 0.5),
                Some(DriverAction::Slower) => interval = scale_interval(interval, 2.0),
                _ => {}
            },
            Some(Event::Resize(..)) => term.invalidate(),
            _ => {}
        }

        if !paused && last_step.elapsed() >= interval {
            advance = true;
        }
        if advance {
            automaton.step();
            last_step = Instant::now();
        }
    }
}

fn scale_interval(interval: Duration, factor: f64) -> Duration {
    let secs = (interval.as_secs_f64() * factor).clamp(MIN_INTERVAL_SECS, MAX_INTERVAL_SECS);
    Duration::from_secs_f64(secs)
}
