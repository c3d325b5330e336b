use std::io;
use std::io::Write;
use std::time::Duration;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use crossterm::cursor;
use crossterm::event;
use crossterm::queue;
use crossterm::style;
use crossterm::terminal;
use tracing::debug;
use tracing::info;
use tracing_subscriber::EnvFilter;

use life::camera;
use life::camera::Camera;
use life::config::Config;
use life::engine::LifeEngine;
use life::events::convert_event;
use life::events::Event;
use life::grid::BoundedGrid;
use life::seed;
use life::terminal::TerminalGuard;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr, so they don't fight with the alternate screen when redirected
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = Config::parse();
    debug!(?config, "Parsed configuration");

    let start = seed::divisors(config.rows(), config.cols()).context("Failed to seed universe")?;
    let mut engine = LifeEngine::with_rules(start.clone(), config.rules)?;

    let res = {
        // restores the terminal when it goes out of scope, even on error
        let _guard = TerminalGuard::enter(io::stdout())?;
        run(&config, &start, &mut engine)
    };

    info!(
        generation = engine.generation(),
        population = engine.population(),
        "Exiting"
    );

    res
}

/// The main loop. Draws the current generation, waits for input, and advances the engine once
/// every `config.delay`. Returns once the user asks to leave.
fn run(
    config: &Config,
    start: &BoundedGrid<bool>,
    engine: &mut LifeEngine,
) -> anyhow::Result<()> {
    let mut stdout = io::stdout();

    // keep the last terminal line for the status bar
    let (cols, rows) = terminal::size()?;
    let mut cam = Camera::for_terminal(cols, rows.saturating_sub(1));

    let mut paused = false;

    // The first frame shows the initial generation
    let mut last_step = Instant::now();

    loop {
        cam.reset();
        cam.draw(engine, config.pixel_size())?;

        draw_frame(&mut stdout, &mut cam, engine, paused)?;

        let mut step = false;

        // Input only wakes the loop early, it doesn't speed up the simulation
        if event::poll(time_left(last_step.elapsed(), config.delay))? {
            match convert_event(event::read()?) {
                None => {}
                Some(Event::Exit) => break,
                Some(Event::TogglePause) => {
                    paused = !paused;
                    last_step = Instant::now();
                }
                Some(Event::Step) => step = true,
                Some(Event::Reseed) => {
                    *engine = LifeEngine::with_rules(start.clone(), config.rules)?;
                    last_step = Instant::now();
                    info!("Reseeded universe");
                }
                Some(Event::Pan { rows, cols }) => cam.pan(rows, cols),
                Some(Event::ResetView) => cam.reset_view(),
                Some(Event::Resize { cols, rows }) => {
                    cam.resize(2 * cols as usize, 4 * rows.saturating_sub(1) as usize);
                }
            }
        }

        if !paused && time_left(last_step.elapsed(), config.delay).is_zero() {
            step = true;
        }

        if step {
            engine.step()?;
            last_step = Instant::now();
        }
    }

    Ok(())
}

/// How long until the next generation is due
fn time_left(since_last_step: Duration, delay: Duration) -> Duration {
    delay.saturating_sub(since_last_step)
}

fn draw_frame(
    stdout: &mut impl Write,
    cam: &mut Camera,
    engine: &LifeEngine,
    paused: bool,
) -> io::Result<()> {
    queue!(
        stdout,
        style::SetForegroundColor(camera::ALIVE),
        style::SetBackgroundColor(camera::DEAD),
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0),
    )?;

    for line in cam.render().lines() {
        queue!(stdout, style::Print(line), cursor::MoveToNextLine(1))?;
    }

    let status = format!(
        "gen {} | pop {} | {}{}",
        engine.generation(),
        engine.population(),
        engine.rules(),
        if paused { " | paused" } else { "" }
    );

    queue!(stdout, style::Print(status), style::ResetColor)?;

    stdout.flush()
}
