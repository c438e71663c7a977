// Driving the shell headlessly through a recording renderer.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use conway::shell::Layout;
use conway::{Anchor, Command, Config, Flow, InputEvent, Key, Rect, Renderer, Rgb, Shell};

#[derive(Debug, Clone, PartialEq)]
enum Op {
    Fill(Rect, Rgb),
    Line((f32, f32), (f32, f32), Rgb),
    Text((f32, f32), Anchor, String),
}

#[derive(Default)]
struct Recorder {
    input: VecDeque<Vec<InputEvent>>,
    ops: Vec<Op>,
}

impl Recorder {
    fn queue(&mut self, events: Vec<InputEvent>) {
        self.input.push_back(events);
    }

    fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text(_, _, t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for Recorder {
    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        self.ops.push(Op::Fill(rect, color));
    }

    fn line(&mut self, from: (f32, f32), to: (f32, f32), color: Rgb) {
        self.ops.push(Op::Line(from, to, color));
    }

    fn text(&mut self, pos: (f32, f32), anchor: Anchor, text: &str, _size: f32, _color: Rgb) {
        self.ops.push(Op::Text(pos, anchor, text.to_string()));
    }

    fn poll_input(&mut self) -> Vec<InputEvent> {
        self.input.pop_front().unwrap_or_default()
    }
}

// 600x420 with default config: 40x20 grid, strip from y = 300
fn shell() -> Shell {
    Shell::new(600.0, 420.0, Config::default())
}

fn button_center(shell: &Shell, command: Command) -> (f32, f32) {
    shell
        .buttons()
        .iter()
        .find(|b| b.command == command)
        .map(|b| b.rect.center())
        .unwrap()
}

fn press_at((x, y): (f32, f32)) -> InputEvent {
    InputEvent::PointerPressed { x, y }
}

#[test]
fn board_fills_the_grid_region() {
    let shell = shell();
    let board = shell.simulation().board();
    assert_eq!((board.width(), board.height()), (40, 20));
    assert_eq!(board.population(), 0);
}

#[test]
fn click_in_grid_toggles_cell() {
    let mut shell = shell();
    let mut r = Recorder::default();
    r.queue(vec![press_at((37.0, 22.0))]);
    assert_eq!(shell.frame(&mut r, Instant::now()), Flow::Continue);
    assert!(shell.simulation().board().is_alive(2, 1));

    r.queue(vec![press_at((31.0, 29.0))]);
    shell.frame(&mut r, Instant::now());
    assert!(!shell.simulation().board().is_alive(2, 1));
}

#[test]
fn grid_clicks_ignored_while_running_unless_custom() {
    let mut shell = shell();
    let mut r = Recorder::default();
    let start = button_center(&shell, Command::StartPause);
    let custom = button_center(&shell, Command::CustomMode);
    let now = Instant::now();

    r.queue(vec![press_at(start), press_at((5.0, 5.0))]);
    shell.frame(&mut r, now);
    assert!(shell.simulation().is_running());
    assert!(!shell.simulation().board().is_alive(0, 0));

    // custom mode pauses; start again and edit while running
    r.queue(vec![press_at(custom), press_at(start), press_at((5.0, 5.0))]);
    shell.frame(&mut r, now);
    assert!(shell.simulation().is_running());
    assert!(shell.simulation().custom_mode());
    assert!(shell.simulation().board().is_alive(0, 0));
}

#[test]
fn step_and_preset_buttons() {
    let mut shell = shell();
    let mut r = Recorder::default();
    let glider = button_center(&shell, Command::LoadPreset("Glider"));
    let step = button_center(&shell, Command::Step);

    r.queue(vec![press_at(glider)]);
    shell.frame(&mut r, Instant::now());
    assert_eq!(shell.simulation().board().population(), 5);

    r.queue(vec![press_at(step), press_at(step)]);
    shell.frame(&mut r, Instant::now());
    assert_eq!(shell.simulation().generation(), 2);
    assert!(!shell.simulation().is_running());
}

#[test]
fn clear_and_soup_reset_generation() {
    let mut shell = shell();
    let mut r = Recorder::default();
    let step = button_center(&shell, Command::Step);
    let soup = button_center(&shell, Command::Soup);
    let clear = button_center(&shell, Command::Clear);

    r.queue(vec![press_at(step), press_at(soup)]);
    shell.frame(&mut r, Instant::now());
    assert_eq!(shell.simulation().generation(), 0);
    assert!(shell.simulation().board().population() > 0);

    r.queue(vec![press_at(step), press_at(clear)]);
    shell.frame(&mut r, Instant::now());
    assert_eq!(shell.simulation().generation(), 0);
    assert_eq!(shell.simulation().board().population(), 0);
}

#[test]
fn press_in_strip_between_buttons_does_nothing() {
    let mut shell = shell();
    let mut r = Recorder::default();
    r.queue(vec![press_at((145.0, 325.0)), press_at((75.0, 345.0))]);
    shell.frame(&mut r, Instant::now());
    assert_eq!(shell.simulation().generation(), 0);
    assert!(!shell.simulation().is_running());
    assert_eq!(shell.simulation().board().population(), 0);
}

#[test]
fn arrow_keys_change_speed_within_limits() {
    let mut shell = shell();
    let mut r = Recorder::default();
    r.queue(vec![InputEvent::Key(Key::Up); 3]);
    shell.frame(&mut r, Instant::now());
    assert_eq!(shell.simulation().speed(), 13);

    r.queue(vec![InputEvent::Key(Key::Down); 40]);
    shell.frame(&mut r, Instant::now());
    assert_eq!(shell.simulation().speed(), 1);

    r.queue(vec![InputEvent::Key(Key::Up); 100]);
    shell.frame(&mut r, Instant::now());
    assert_eq!(shell.simulation().speed(), 60);
}

#[test]
fn escape_and_quit_exit_before_drawing() {
    let mut shell = shell();
    let mut r = Recorder::default();
    r.queue(vec![InputEvent::Key(Key::Escape)]);
    assert_eq!(shell.frame(&mut r, Instant::now()), Flow::Exit);
    assert!(r.ops.is_empty());

    r.queue(vec![InputEvent::Quit]);
    assert_eq!(shell.frame(&mut r, Instant::now()), Flow::Exit);
}

#[test]
fn running_advances_once_per_interval() {
    let mut shell = shell();
    let mut r = Recorder::default();
    let start = button_center(&shell, Command::StartPause);
    let t0 = Instant::now();

    r.queue(vec![press_at(start)]);
    shell.frame(&mut r, t0);
    assert_eq!(shell.simulation().generation(), 1);

    shell.frame(&mut r, t0 + Duration::from_millis(30));
    assert_eq!(shell.simulation().generation(), 1);
    shell.frame(&mut r, t0 + Duration::from_millis(100));
    assert_eq!(shell.simulation().generation(), 2);
}

#[test]
fn hover_follows_pointer() {
    let mut shell = shell();
    let step = button_center(&shell, Command::Step);
    shell.handle(InputEvent::PointerMoved { x: step.0, y: step.1 });
    let hovered: Vec<_> = shell.buttons().iter().filter(|b| b.hover).map(|b| b.command).collect();
    assert_eq!(hovered, vec![Command::Step]);

    shell.handle(InputEvent::PointerMoved { x: 1.0, y: 1.0 });
    assert!(shell.buttons().iter().all(|b| !b.hover));
}

#[test]
fn draw_paints_cells_buttons_and_status() {
    let mut shell = shell();
    let config = Config::default();
    shell.simulation_mut().toggle_cell(3, 4);
    let mut r = Recorder::default();
    shell.frame(&mut r, Instant::now());

    assert_eq!(r.ops[0], Op::Fill(Rect::new(0.0, 0.0, 600.0, 420.0), config.colors.background));
    assert!(r.ops.contains(&Op::Fill(Rect::new(45.0, 60.0, 15.0, 15.0), config.colors.live_cell)));

    let grid_lines = r
        .ops
        .iter()
        .filter(|op| matches!(op, Op::Line(_, _, c) if *c == config.colors.grid_line))
        .count();
    assert_eq!(grid_lines, 40 + 20);

    let texts = r.texts();
    assert_eq!(texts.len(), 16);
    assert_eq!(texts[0], "Start / Pause");
    assert_eq!(texts[15], "Gen: 0 | Speed: 10 FPS | Simulation Mode");
    assert_eq!(
        r.ops.last(),
        Some(&Op::Text(
            (590.0, 395.0),
            Anchor::RightTop,
            "Gen: 0 | Speed: 10 FPS | Simulation Mode".to_string()
        ))
    );
}

#[test]
fn layout_matches_shell() {
    let shell = shell();
    assert_eq!(shell.layout(), &Layout::new(600.0, 420.0, &Config::default()));
}
