// shell.rs - Toolkit-independent front end
//
// Owns the simulation on behalf of a GUI: lays out the grid and the control
// strip, turns raw input into controller calls, paces auto-advance and draws
// everything through a `Renderer`. A toolkit only has to implement the four
// `Renderer` methods.

use std::time::{Duration, Instant};

use log::{error, info};
use serde::{Deserialize, Serialize};

use crate::config::{Config, ControlsConfig};
use crate::controller::{Command, Simulation};
use crate::grid::Board;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Axis-aligned rectangle in screen pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Half-open on the right and bottom edges.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Which point of the text `pos` refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    LeftTop,
    Center,
    RightTop,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Escape,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    PointerMoved { x: f32, y: f32 },
    PointerPressed { x: f32, y: f32 },
    Key(Key),
    /// Window closed
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Drawing and input capabilities a GUI toolkit provides to the shell.
pub trait Renderer {
    fn fill_rect(&mut self, rect: Rect, color: Rgb);
    fn line(&mut self, from: (f32, f32), to: (f32, f32), color: Rgb);
    fn text(&mut self, pos: (f32, f32), anchor: Anchor, text: &str, size: f32, color: Rgb);
    /// Input received since the last call, oldest first. Must not block.
    fn poll_input(&mut self) -> Vec<InputEvent>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct Button {
    pub rect: Rect,
    pub command: Command,
    pub hover: bool,
}

/// Screen geometry derived from the display size and the config.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub width       : f32,
    pub height      : f32,
    pub cell_size   : f32,
    pub grid_width  : usize,
    pub grid_height : usize,
    pub strip_top   : f32,   // first pixel row of the control strip
}

impl Layout {
    pub fn new(width: f32, height: f32, config: &Config) -> Self {
        let cell_size = config.display.cell_size;
        let strip_top = height - config.display.control_strip_height;
        let cells = |px: f32| ((px / cell_size).floor() as usize).max(1);

        Self {
            width,
            height,
            cell_size,
            grid_width: cells(width),
            grid_height: cells(strip_top),
            strip_top,
        }
    }

    /// Height in pixels of the grid region.
    pub fn grid_pixel_height(&self) -> f32 {
        self.grid_height as f32 * self.cell_size
    }

    pub fn cell_rect(&self, x: usize, y: usize) -> Rect {
        Rect::new(
            x as f32 * self.cell_size,
            y as f32 * self.cell_size,
            self.cell_size,
            self.cell_size,
        )
    }

    /// Grid cell under a screen point, if the point is in the grid region.
    pub fn cell_at(&self, x: f32, y: f32) -> Option<(i64, i64)> {
        if x < 0.0 || y < 0.0 || y >= self.grid_pixel_height() {
            return None;
        }
        Some(((x / self.cell_size) as i64, (y / self.cell_size) as i64))
    }

    /// One button per control, `buttons_per_row` to a row, starting at the
    /// top-left of the control strip.
    pub fn buttons(&self, controls: &ControlsConfig) -> Vec<Button> {
        let per_row = controls.buttons_per_row.max(1);
        Command::controls()
            .into_iter()
            .enumerate()
            .map(|(i, command)| {
                let (row, col) = ((i / per_row) as f32, (i % per_row) as f32);
                let x = controls.spacing + col * (controls.button_width + controls.spacing);
                let y = self.strip_top + controls.spacing + row * (controls.button_height + controls.spacing);
                Button {
                    rect: Rect::new(x, y, controls.button_width, controls.button_height),
                    command,
                    hover: false,
                }
            })
            .collect()
    }
}

pub struct Shell {
    sim          : Simulation,
    layout       : Layout,
    buttons      : Vec<Button>,
    config       : Config,
    last_advance : Option<Instant>,   // None while paused
}

impl Shell {
    /// Sizes the board to fit a `width` x `height` pixel surface.
    pub fn new(width: f32, height: f32, config: Config) -> Self {
        let layout = Layout::new(width, height, &config);
        let buttons = layout.buttons(&config.controls);
        let board = Board::create(
            layout.grid_width,
            layout.grid_height,
            config.simulation.randomize_on_start,
        );
        let sim = Simulation::with_board(board).with_speed(config.simulation.initial_speed);
        info!(
            "Grid {}x{} cells at {}px on a {}x{} surface",
            layout.grid_width, layout.grid_height, layout.cell_size, width, height
        );

        Self { sim, layout, buttons, config, last_advance: None }
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    pub fn simulation_mut(&mut self) -> &mut Simulation {
        &mut self.sim
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    pub fn status_line(&self) -> String {
        let mode = if self.sim.custom_mode() { "CUSTOM MODE ON" } else { "Simulation Mode" };
        format!("Gen: {} | Speed: {} FPS | {}", self.sim.generation(), self.sim.speed(), mode)
    }

    fn dispatch(&mut self, command: Command) {
        if let Err(e) = self.sim.apply(command) {
            error!("{} failed: {}", command.label(), e);
        }
    }

    fn update_hover(&mut self, x: f32, y: f32) {
        for button in self.buttons.iter_mut() {
            button.hover = button.rect.contains(x, y);
        }
    }

    pub fn handle(&mut self, event: InputEvent) -> Flow {
        match event {
            InputEvent::PointerMoved { x, y } => self.update_hover(x, y),
            InputEvent::PointerPressed { x, y } => {
                self.update_hover(x, y);
                if let Some((cx, cy)) = self.layout.cell_at(x, y) {
                    self.sim.toggle_cell(cx, cy);
                } else {
                    let pressed = self.buttons.iter().find(|b| b.hover).map(|b| b.command);
                    if let Some(command) = pressed {
                        self.dispatch(command);
                    }
                }
            }
            InputEvent::Key(Key::Up)     => self.dispatch(Command::SpeedUp),
            InputEvent::Key(Key::Down)   => self.dispatch(Command::SpeedDown),
            InputEvent::Key(Key::Escape) | InputEvent::Quit => {
                info!("Exit at generation {}", self.sim.generation());
                return Flow::Exit;
            }
        }
        Flow::Continue
    }

    /// Steps once if running and a full frame interval has passed since the
    /// previous step. The first frame after starting steps immediately.
    pub fn advance(&mut self, now: Instant) -> bool {
        if !self.sim.is_running() {
            self.last_advance = None;
            return false;
        }
        let due = match self.last_advance {
            Some(last) => now.saturating_duration_since(last) >= self.sim.frame_interval(),
            None => true,
        };
        if due {
            self.sim.step();
            self.last_advance = Some(now);
        }
        due
    }

    /// How long the host may wait before the next frame; `None` while paused.
    pub fn next_frame_in(&self, now: Instant) -> Option<Duration> {
        if !self.sim.is_running() {
            return None;
        }
        Some(match self.last_advance {
            Some(last) => self.sim.frame_interval().saturating_sub(now.saturating_duration_since(last)),
            None => Duration::ZERO,
        })
    }

    /// One pass of the frame loop: input, advance, redraw.
    pub fn frame<R: Renderer + ?Sized>(&mut self, renderer: &mut R, now: Instant) -> Flow {
        for event in renderer.poll_input() {
            if self.handle(event) == Flow::Exit {
                return Flow::Exit;
            }
        }
        self.advance(now);
        self.draw(renderer);
        Flow::Continue
    }

    pub fn draw<R: Renderer + ?Sized>(&self, r: &mut R) {
        let colors = &self.config.colors;
        let layout = &self.layout;

        r.fill_rect(Rect::new(0.0, 0.0, layout.width, layout.height), colors.background);

        for (x, y) in self.sim.board().live_cells() {
            r.fill_rect(layout.cell_rect(x, y), colors.live_cell);
        }

        // Grid lines
        let grid_bottom = layout.grid_pixel_height();
        let columns = (layout.width / layout.cell_size).ceil() as usize;
        for i in 0..columns {
            let x = i as f32 * layout.cell_size;
            r.line((x, 0.0), (x, grid_bottom), colors.grid_line);
        }
        for i in 0..layout.grid_height {
            let y = i as f32 * layout.cell_size;
            r.line((0.0, y), (layout.width, y), colors.grid_line);
        }

        for button in &self.buttons {
            self.draw_button(r, button);
        }

        r.text(
            (layout.width - 10.0, layout.height - 25.0),
            Anchor::RightTop,
            &self.status_line(),
            self.config.display.status_font_size,
            colors.text,
        );
    }

    fn draw_button<R: Renderer + ?Sized>(&self, r: &mut R, button: &Button) {
        let colors = &self.config.colors;
        let rect = button.rect;
        let fill = if button.hover { colors.button_hover } else { colors.button };
        r.fill_rect(rect, fill);

        let corners = [
            (rect.x, rect.y),
            (rect.right(), rect.y),
            (rect.right(), rect.bottom()),
            (rect.x, rect.bottom()),
        ];
        for i in 0..corners.len() {
            r.line(corners[i], corners[(i + 1) % corners.len()], colors.button_border);
        }

        r.text(
            rect.center(),
            Anchor::Center,
            button.command.label(),
            self.config.display.button_font_size,
            colors.text,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_from_screen() {
        let layout = Layout::new(1920.0, 1080.0, &Config::default());
        assert_eq!(layout.grid_width, 128);
        assert_eq!(layout.grid_height, 64);
        assert_eq!(layout.strip_top, 960.0);
        assert_eq!(layout.grid_pixel_height(), 960.0);
    }

    #[test]
    fn tiny_screen_still_has_one_cell() {
        let layout = Layout::new(5.0, 50.0, &Config::default());
        assert_eq!((layout.grid_width, layout.grid_height), (1, 1));
    }

    #[test]
    fn cell_at_maps_pixels() {
        let layout = Layout::new(600.0, 420.0, &Config::default());
        assert_eq!(layout.cell_at(0.0, 0.0), Some((0, 0)));
        assert_eq!(layout.cell_at(14.9, 15.0), Some((0, 1)));
        assert_eq!(layout.cell_at(599.0, 299.0), Some((39, 19)));
        assert_eq!(layout.cell_at(10.0, 300.0), None);
        assert_eq!(layout.cell_at(-1.0, 10.0), None);
    }

    #[test]
    fn buttons_wrap_after_five() {
        let layout = Layout::new(800.0, 600.0, &Config::default());
        let buttons = layout.buttons(&ControlsConfig::default());
        assert_eq!(buttons.len(), 15);
        assert_eq!(buttons[0].rect, Rect::new(10.0, 490.0, 130.0, 30.0));
        assert_eq!(buttons[1].rect, Rect::new(150.0, 490.0, 130.0, 30.0));
        assert_eq!(buttons[5].rect, Rect::new(10.0, 530.0, 130.0, 30.0));
        assert_eq!(buttons[5].command, Command::LoadPreset("Glider"));
        assert_eq!(buttons[14].rect, Rect::new(570.0, 570.0, 130.0, 30.0));
    }

    #[test]
    fn rect_contains_is_half_open() {
        let r = Rect::new(10.0, 10.0, 5.0, 5.0);
        assert!(r.contains(10.0, 10.0));
        assert!(r.contains(14.9, 14.9));
        assert!(!r.contains(15.0, 12.0));
        assert!(!r.contains(12.0, 15.0));
        assert_eq!(r.center(), (12.5, 12.5));
    }

    #[test]
    fn status_line_reports_mode() {
        let mut shell = Shell::new(600.0, 420.0, Config::default());
        assert_eq!(shell.status_line(), "Gen: 0 | Speed: 10 FPS | Simulation Mode");
        shell.simulation_mut().toggle_custom_mode();
        shell.simulation_mut().step();
        assert_eq!(shell.status_line(), "Gen: 1 | Speed: 10 FPS | CUSTOM MODE ON");
    }

    #[test]
    fn advance_paces_by_speed() {
        let mut shell = Shell::new(600.0, 420.0, Config::default());
        let t0 = Instant::now();
        assert!(!shell.advance(t0));
        assert_eq!(shell.next_frame_in(t0), None);

        shell.simulation_mut().toggle_running();
        assert_eq!(shell.next_frame_in(t0), Some(Duration::ZERO));
        assert!(shell.advance(t0));
        assert!(!shell.advance(t0 + Duration::from_millis(50)));
        assert_eq!(
            shell.next_frame_in(t0 + Duration::from_millis(40)),
            Some(Duration::from_millis(60))
        );
        assert!(shell.advance(t0 + Duration::from_millis(100)));
        assert_eq!(shell.simulation().generation(), 2);

        // pausing drops the timer, restarting steps right away
        shell.simulation_mut().toggle_running();
        assert!(!shell.advance(t0 + Duration::from_millis(110)));
        shell.simulation_mut().toggle_running();
        assert!(shell.advance(t0 + Duration::from_millis(120)));
        assert_eq!(shell.simulation().generation(), 3);
    }
}
