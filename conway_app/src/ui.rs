// ui.rs - eframe/egui front end
//
// egui implementation of `Renderer`; the `Shell` does the rest.

use std::time::Instant;

use egui::{Align2, Color32, FontId, Pos2, Stroke};

use conway::{Anchor, Config, Flow, InputEvent, Key, Rect, Renderer, Rgb, Shell};

const TITLE: &str = "Conway's Game of Life";

fn color(c: Rgb) -> Color32 {
    Color32::from_rgb(c.0, c.1, c.2)
}

/// Paints with an `egui::Painter` in coordinates relative to `origin`.
pub struct EguiRenderer<'a> {
    painter : &'a egui::Painter,
    origin  : Pos2,
    events  : Vec<InputEvent>,
}

impl<'a> EguiRenderer<'a> {
    /// Collects this frame's input up front; egui hands it out per frame.
    pub fn new(ctx: &egui::Context, painter: &'a egui::Painter, origin: Pos2) -> Self {
        let events: Vec<InputEvent> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|e| translate(e, origin))
                .collect()
        });
        Self { painter, origin, events }
    }

    fn pos(&self, (x, y): (f32, f32)) -> Pos2 {
        Pos2::new(self.origin.x + x, self.origin.y + y)
    }
}

fn translate(event: &egui::Event, origin: Pos2) -> Option<InputEvent> {
    match event {
        egui::Event::PointerMoved(pos) => Some(InputEvent::PointerMoved {
            x: pos.x - origin.x,
            y: pos.y - origin.y,
        }),
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed: true,
            ..
        } => Some(InputEvent::PointerPressed {
            x: pos.x - origin.x,
            y: pos.y - origin.y,
        }),
        egui::Event::Key { key, pressed: true, .. } => match key {
            egui::Key::ArrowUp   => Some(InputEvent::Key(Key::Up)),
            egui::Key::ArrowDown => Some(InputEvent::Key(Key::Down)),
            egui::Key::Escape    => Some(InputEvent::Key(Key::Escape)),
            _ => None,
        },
        _ => None,
    }
}

impl Renderer for EguiRenderer<'_> {
    fn fill_rect(&mut self, rect: Rect, c: Rgb) {
        let min = self.pos((rect.x, rect.y));
        let r = egui::Rect::from_min_size(min, egui::vec2(rect.w, rect.h));
        self.painter.rect_filled(r, 0.0, color(c));
    }

    fn line(&mut self, from: (f32, f32), to: (f32, f32), c: Rgb) {
        self.painter
            .line_segment([self.pos(from), self.pos(to)], Stroke::new(1.0, color(c)));
    }

    fn text(&mut self, pos: (f32, f32), anchor: Anchor, text: &str, size: f32, c: Rgb) {
        let align = match anchor {
            Anchor::LeftTop  => Align2::LEFT_TOP,
            Anchor::Center   => Align2::CENTER_CENTER,
            Anchor::RightTop => Align2::RIGHT_TOP,
        };
        self.painter
            .text(self.pos(pos), align, text, FontId::proportional(size), color(c));
    }

    fn poll_input(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }
}

pub struct ConwayApp {
    config : Config,
    shell  : Option<Shell>,   // built on the first frame, once the screen size is known
}

impl ConwayApp {
    pub fn new(config: Config) -> Self {
        Self { config, shell: None }
    }
}

impl eframe::App for ConwayApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let Self { config, shell } = self;
        let now = Instant::now();

        let (flow, next_frame) = egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::hover());
                let area = response.rect;
                let shell = shell.get_or_insert_with(|| {
                    Shell::new(area.width(), area.height(), config.clone())
                });

                let mut renderer = EguiRenderer::new(ctx, &painter, area.min);
                let flow = shell.frame(&mut renderer, now);
                (flow, shell.next_frame_in(now))
            })
            .inner;

        if flow == Flow::Exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        } else if let Some(wait) = next_frame {
            // Keep animating while running; otherwise input drives repaints
            ctx.request_repaint_after(wait);
        }
    }
}

pub fn run_gui(config: Config) -> Result<(), eframe::Error> {
    let display = &config.display;
    let viewport = egui::ViewportBuilder::default()
        .with_title(TITLE)
        .with_inner_size([display.window_width, display.window_height])
        .with_fullscreen(display.fullscreen);

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        TITLE,
        options,
        Box::new(move |_cc| Box::new(ConwayApp::new(config))),
    )
}
