//! Configuration for the simulator.
//!
//! Stored as YAML; every section falls back to its defaults, so a file only
//! needs the values it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::controller::{DEFAULT_SPEED, MAX_SPEED, MIN_SPEED};
use crate::error::{Error, Result};
use crate::shell::Rgb;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub controls: ControlsConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub colors: ColorConfig,
}

/// Screen geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Side of one cell in pixels
    pub cell_size: f32,
    /// Height of the button strip under the grid
    pub control_strip_height: f32,
    pub fullscreen: bool,
    /// Window size when not fullscreen
    pub window_width: f32,
    pub window_height: f32,
    pub status_font_size: f32,
    pub button_font_size: f32,
}

/// Button grid in the control strip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    pub button_width: f32,
    pub button_height: f32,
    /// Gap between buttons and around the strip edge
    pub spacing: f32,
    pub buttons_per_row: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Generations per second while running
    pub initial_speed: u32,
    /// Start from a random soup instead of an empty board
    pub randomize_on_start: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub background: Rgb,
    pub grid_line: Rgb,
    pub live_cell: Rgb,
    pub button: Rgb,
    pub button_hover: Rgb,
    pub button_border: Rgb,
    pub text: Rgb,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            cell_size: 15.0,
            control_strip_height: 120.0,
            fullscreen: true,
            window_width: 1280.0,
            window_height: 800.0,
            status_font_size: 20.0,
            button_font_size: 16.0,
        }
    }
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            button_width: 130.0,
            button_height: 30.0,
            spacing: 10.0,
            buttons_per_row: 5,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            initial_speed: DEFAULT_SPEED,
            randomize_on_start: false,
        }
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            background: Rgb(0, 0, 0),
            grid_line: Rgb(40, 40, 40),
            live_cell: Rgb(0, 255, 0),
            button: Rgb(30, 30, 30),
            button_hover: Rgb(100, 100, 100),
            button_border: Rgb(255, 255, 255),
            text: Rgb(255, 255, 255),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: &str| -> Result<()> { Err(Error::InvalidConfig(msg.to_string())) };

        if !(self.display.cell_size > 0.0) {
            return invalid("display.cell_size must be > 0");
        }
        if !(self.display.control_strip_height >= 0.0) {
            return invalid("display.control_strip_height must be >= 0");
        }
        if !(self.display.window_width > 0.0 && self.display.window_height > 0.0) {
            return invalid("display.window_width and window_height must be > 0");
        }
        if !(self.controls.button_width > 0.0 && self.controls.button_height > 0.0) {
            return invalid("controls.button_width and button_height must be > 0");
        }
        if self.controls.buttons_per_row == 0 {
            return invalid("controls.buttons_per_row must be >= 1");
        }
        if !(MIN_SPEED..=MAX_SPEED).contains(&self.simulation.initial_speed) {
            return Err(Error::InvalidConfig(format!(
                "simulation.initial_speed must be between {MIN_SPEED} and {MAX_SPEED}"
            )));
        }
        Ok(())
    }
}
