use std::time::Duration;

/// Grid height of the reference simulation.
pub const DEFAULT_HEIGHT: usize = 20;

/// Grid width of the reference simulation.
pub const DEFAULT_WIDTH: usize = 20;

/// How many generations the reference simulation shows before exiting.
pub const DEFAULT_GENERATIONS: u32 = 50;

/// How long each generation stays on screen.
pub const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(300);

/// The knobs of a simulation run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub height: usize,
    pub width: usize,
    pub generations: u32,
    pub frame_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
            generations: DEFAULT_GENERATIONS,
            frame_delay: DEFAULT_FRAME_DELAY,
        }
    }
}
