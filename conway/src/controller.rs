// controller.rs - Simulation state and the commands that drive it

use std::time::Duration;

use log::{debug, info};

use crate::error::Result;
use crate::grid::Board;
use crate::patterns;

pub const MIN_SPEED: u32 = 1;
pub const MAX_SPEED: u32 = 60;
pub const DEFAULT_SPEED: u32 = 10;

/// Presets are anchored this far up and left of the board centre.
const PRESET_OFFSET: (i64, i64) = (5, 3);

/// Every action a control surface can trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    StartPause,
    Step,
    Clear,
    Soup,
    CustomMode,
    LoadPreset(&'static str),
    SpeedUp,
    SpeedDown,
}

impl Command {
    pub fn label(&self) -> &'static str {
        match *self {
            Command::StartPause       => "Start / Pause",
            Command::Step             => "Step",
            Command::Clear            => "Clear",
            Command::Soup             => "Soup",
            Command::CustomMode       => "Custom Mode",
            Command::LoadPreset(name) => name,
            Command::SpeedUp          => "Faster",
            Command::SpeedDown        => "Slower",
        }
    }

    /// The commands that get an on-screen button, in button order: the
    /// playback controls, then one preset per catalog entry.
    pub fn controls() -> Vec<Command> {
        let mut controls = vec![
            Command::StartPause,
            Command::Step,
            Command::Clear,
            Command::Soup,
            Command::CustomMode,
        ];
        controls.extend(patterns::names().map(Command::LoadPreset));
        controls
    }
}

pub struct Simulation {
    board       : Board,
    generation  : u64,
    running     : bool,
    speed       : u32,   // generations per second while running
    custom_mode : bool,  // allow edits while running
}

impl Simulation {
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_board(Board::new(width, height))
    }

    pub fn with_board(board: Board) -> Self {
        Self {
            board,
            generation: 0,
            running: false,
            speed: DEFAULT_SPEED,
            custom_mode: false,
        }
    }

    pub fn with_speed(mut self, speed: u32) -> Self {
        self.speed = speed.clamp(MIN_SPEED, MAX_SPEED);
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn custom_mode(&self) -> bool {
        self.custom_mode
    }

    /// Time between generations at the current speed.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.speed
    }

    pub fn step(&mut self) {
        self.board = self.board.next_generation();
        self.generation += 1;
    }

    /// Replaces the board with an empty or random one of the same size.
    pub fn reset(&mut self, randomize: bool) {
        self.replace_board(Board::create(self.board.width(), self.board.height(), randomize));
        info!(
            "{} {}x{} board",
            if randomize { "Randomized" } else { "Cleared" },
            self.board.width(),
            self.board.height()
        );
    }

    /// Clears the board and stamps the named preset near its middle. An
    /// unknown name leaves everything as it was.
    pub fn load_preset(&mut self, name: &str) -> Result<()> {
        let pattern = patterns::get(name)?;
        let (w, h) = (self.board.width(), self.board.height());
        let mut board = Board::new(w, h);
        board.stamp(
            pattern,
            w as i64 / 2 - PRESET_OFFSET.0,
            h as i64 / 2 - PRESET_OFFSET.1,
        );
        self.replace_board(board);
        info!("Loaded preset {:?} ({} live cells)", name, self.board.population());
        Ok(())
    }

    fn replace_board(&mut self, board: Board) {
        self.board = board;
        self.generation = 0;
        self.running = false;
    }

    pub fn set_speed(&mut self, delta: i32) {
        let speed = (self.speed as i64 + delta as i64).clamp(MIN_SPEED as i64, MAX_SPEED as i64);
        self.speed = speed as u32;
        debug!("Speed {} FPS", self.speed);
    }

    pub fn toggle_running(&mut self) {
        self.running = !self.running;
        info!("{} at generation {}", if self.running { "Running" } else { "Paused" }, self.generation);
    }

    pub fn toggle_custom_mode(&mut self) {
        self.custom_mode = !self.custom_mode;
        self.running = false;
        info!("Custom mode {}", if self.custom_mode { "on" } else { "off" });
    }

    /// Cells may be edited while paused, or at any time in custom mode.
    pub fn can_edit(&self) -> bool {
        self.custom_mode || !self.running
    }

    /// Flips a cell if editing is allowed and the cell is on the board.
    pub fn toggle_cell(&mut self, x: i64, y: i64) -> bool {
        if !self.can_edit() {
            return false;
        }
        let toggled = self.board.toggle(x, y);
        if toggled {
            debug!("Toggled ({x}, {y})");
        }
        toggled
    }

    pub fn apply(&mut self, command: Command) -> Result<()> {
        match command {
            Command::StartPause       => self.toggle_running(),
            Command::Step             => {
                self.step();
                debug!("Stepped to generation {}", self.generation);
            }
            Command::Clear            => self.reset(false),
            Command::Soup             => self.reset(true),
            Command::CustomMode       => self.toggle_custom_mode(),
            Command::LoadPreset(name) => self.load_preset(name)?,
            Command::SpeedUp          => self.set_speed(1),
            Command::SpeedDown        => self.set_speed(-1),
        }
        Ok(())
    }
}
