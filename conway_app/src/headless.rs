// headless.rs - Run the controller without a window and print the result

use std::io::Write;

use anyhow::{Result, ensure};
use log::info;

use conway::{Board, Config, Simulation};

pub struct HeadlessRun<'a> {
    pub width: usize,
    pub height: usize,
    pub preset: Option<&'a str>,
    pub steps: u64,
}

/// Advances `run.steps` generations and writes the final board to `out`.
pub fn run(config: &Config, run: &HeadlessRun, out: &mut dyn Write) -> Result<Simulation> {
    ensure!(run.width > 0 && run.height > 0, "board must be at least 1x1");

    let board = Board::create(run.width, run.height, config.simulation.randomize_on_start);
    let mut sim = Simulation::with_board(board).with_speed(config.simulation.initial_speed);
    if let Some(name) = run.preset {
        sim.load_preset(name)?;
    }
    info!(
        "Headless {}x{} board, {} live cells, {} generations",
        run.width,
        run.height,
        sim.board().population(),
        run.steps
    );

    for _ in 0..run.steps {
        sim.step();
    }

    write!(out, "{}", sim.board())?;
    info!("Generation {}: {} live cells", sim.generation(), sim.board().population());
    Ok(sim)
}
