use std::io;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use crossterm::cursor;
use crossterm::execute;
use crossterm::style;
use crossterm::terminal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use termlife::config;
use termlife::config::Config;
use termlife::world::World;

#[derive(Parser)]
#[command(name = "termlife", about = "Conway's Game of Life in the terminal")]
struct Args {
    /// Path to a plaintext pattern file (`#` alive, `.` dead)
    pattern: PathBuf,

    /// Grid height, in cells
    #[arg(long, default_value_t = config::DEFAULT_HEIGHT)]
    height: usize,

    /// Grid width, in cells
    #[arg(long, default_value_t = config::DEFAULT_WIDTH)]
    width: usize,

    /// How many generations to run
    #[arg(long, default_value_t = config::DEFAULT_GENERATIONS)]
    generations: u32,

    /// How long each generation stays on screen, in milliseconds
    #[arg(long, default_value_t = config::DEFAULT_FRAME_DELAY.as_millis() as u64)]
    delay_ms: u64,
}

fn main() -> anyhow::Result<()> {
    // Frames go to stdout, diagnostics to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = Config {
        height: args.height,
        width: args.width,
        generations: args.generations,
        frame_delay: Duration::from_millis(args.delay_ms),
    };

    let mut world = World::new(config.height, config.width)
        .with_context(|| format!("could not create a {}x{} world", config.height, config.width))?;

    world
        .load_from_file(&args.pattern)
        .with_context(|| format!("could not load pattern {}", args.pattern.display()))?;

    info!(
        height = config.height,
        width = config.width,
        live = world.population(),
        "starting simulation"
    );

    run(&mut world, &config)
}

/// Show `config.generations` frames, stepping the world between them.
fn run(world: &mut World, config: &Config) -> anyhow::Result<()> {
    let mut stdout = io::stdout();
    let mut fb = String::new();

    execute!(stdout, terminal::Clear(terminal::ClearType::All))?;

    for generation in 0..config.generations {
        if generation > 0 {
            world.step();
        }

        world.render_into(&mut fb);

        execute!(
            stdout,
            cursor::MoveTo(0, 0),
            style::Print(format!("Game of Life | generation {generation}")),
            cursor::MoveToNextLine(1),
        )?;

        for line in fb.lines() {
            execute!(stdout, style::Print(line), cursor::MoveToNextLine(1))?;
        }

        thread::sleep(config.frame_delay);
    }

    Ok(())
}
