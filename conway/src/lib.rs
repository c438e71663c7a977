// lib.rs - Conway's Game of Life core
//
// The automaton (`grid`, `patterns`), the playback controller and a
// toolkit-independent shell that any GUI can drive through `Renderer`.

pub mod config;
pub mod controller;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod shell;

pub use config::Config;
pub use controller::{Command, Simulation};
pub use error::{Error, Result};
pub use grid::Board;
pub use patterns::Pattern;
pub use shell::{Anchor, Flow, InputEvent, Key, Rect, Renderer, Rgb, Shell};
