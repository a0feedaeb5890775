//! Window shell for the board: renders one pixel per cell, advances a
//! generation on a timer, and maps mouse and keyboard input to board
//! operations. All simulation logic lives in `life_board`.

use error_iter::ErrorIter as _;
use life_board::Board;
use log::{error, info, warn};
use pixels::wgpu::Color;
use pixels::{Pixels, PixelsBuilder, SurfaceTexture};
use rand::prelude::*;
use std::sync::Arc;
use std::time::{Duration, Instant};
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, KeyEvent, MouseButton, StartCause, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Cursor, CursorIcon, Window, WindowId};

const CELL_PIXEL_WIDTH: u32 = 8;
const DEFAULT_PERIOD: Duration = Duration::from_millis(100);
const MIN_PERIOD: Duration = Duration::from_millis(25);
const MAX_PERIOD: Duration = Duration::from_millis(1600);
const RANDOM_LIFE_FRACTION: f64 = 0.3;
const BACKGROUND_COLOR: Color = Color::WHITE;
const LIVE_RGBA: [u8; 4] = [0x20, 0x20, 0x20, 0xff];
const DEAD_RGBA: [u8; 4] = [0xff, 0xff, 0xff, 0xff];

pub fn run(board: Board) {
    let event_loop = EventLoop::new().unwrap();
    event_loop.set_control_flow(ControlFlow::Wait);
    event_loop
        .run_app(&mut AppEventHandler::new(board))
        .unwrap();
}

struct App {
    board: Board,
    shape_names: Vec<&'static str>,
    selected_shape: usize,
    window: Arc<Window>,
    pixels: Pixels<'static>,
    running: bool,
    period: Duration,
    next_update: Instant,
    cursor: Option<PhysicalPosition<f64>>,
}

impl App {
    fn new(event_loop: &ActiveEventLoop, board: Board) -> Self {
        let window = Arc::new(Self::build_window(event_loop, board.size() as u32));
        let pixels = Self::build_pixels(&window, board.size() as u32);
        let mut shape_names = board.shape_names();
        shape_names.sort_unstable();
        Self {
            board,
            shape_names,
            selected_shape: 0,
            window,
            pixels,
            running: false,
            period: DEFAULT_PERIOD,
            next_update: Instant::now(),
            cursor: None,
        }
    }

    fn build_window(event_loop: &ActiveEventLoop, board_size: u32) -> Window {
        let side = (board_size * CELL_PIXEL_WIDTH) as f64;
        let window_attributes = Window::default_attributes()
            .with_title("Conway's Game of Life")
            .with_cursor(Cursor::Icon(CursorIcon::Crosshair))
            .with_inner_size(LogicalSize::new(side, side))
            .with_visible(false);
        event_loop.create_window(window_attributes).unwrap()
    }

    fn build_pixels(window: &Arc<Window>, board_size: u32) -> Pixels<'static> {
        let window_size = window.inner_size();
        let surface_texture =
            SurfaceTexture::new(window_size.width, window_size.height, window.clone());
        PixelsBuilder::new(board_size, board_size, surface_texture)
            .clear_color(BACKGROUND_COLOR)
            .build()
            .unwrap()
    }

    fn on_create(&mut self) {
        info!(
            "space: run/pause, left click: flip cell, right click: stamp shape, \
             tab: next shape, -/=: speed, n: clear, r: randomize, q: quit"
        );
        info!("selected shape: {}", self.shape_names[self.selected_shape]);
        self.window.request_redraw();
        self.window.set_visible(true);
    }

    fn on_time_step(&mut self) {
        if !self.running {
            return;
        }
        self.board.update();
        self.window.request_redraw();

        while self.next_update < Instant::now() {
            self.next_update += self.period;
        }
    }

    fn on_redraw(&mut self, event_loop: &ActiveEventLoop) {
        let screen = self.pixels.frame_mut();
        debug_assert_eq!(screen.len(), 4 * self.board.size() * self.board.size());

        for (alive, pixel) in self
            .board
            .state()
            .iter()
            .flatten()
            .zip(screen.chunks_exact_mut(4))
        {
            pixel.copy_from_slice(if *alive { &LIVE_RGBA } else { &DEAD_RGBA });
        }
        if let Err(err) = self.pixels.render() {
            log_error("render", err);
            event_loop.exit();
        }
    }

    fn on_resize(&mut self, size: PhysicalSize<u32>) {
        if let Err(err) = self.pixels.resize_surface(size.width, size.height) {
            log_error("resize_surface", err);
        }
    }

    fn on_mouse_click(&mut self, button: MouseButton) {
        let Some((row, col)) = self.cell_under_cursor() else {
            return;
        };
        let result = match button {
            MouseButton::Left => self.board.flip_cell(row, col),
            MouseButton::Right => {
                let name = self.shape_names[self.selected_shape];
                self.board.add_shape(name, row, col)
            }
            _ => return,
        };
        match result {
            Ok(()) => self.window.request_redraw(),
            Err(err) => warn!("{err}"),
        }
    }

    fn cell_under_cursor(&self) -> Option<(usize, usize)> {
        let pos = self.cursor?;
        self.pixels
            .window_pos_to_pixel((pos.x as f32, pos.y as f32))
            .ok()
            .map(|(x, y)| (y, x))
    }

    fn on_key(&mut self, event_loop: &ActiveEventLoop, code: KeyCode) {
        match code {
            KeyCode::Escape | KeyCode::KeyQ | KeyCode::KeyX => {
                event_loop.exit();
            }
            KeyCode::Space => self.toggle_running(),
            KeyCode::Tab => self.select_next_shape(),
            KeyCode::Minus | KeyCode::NumpadSubtract => self.set_period(self.period * 2),
            KeyCode::Equal | KeyCode::NumpadAdd => self.set_period(self.period / 2),
            KeyCode::KeyN => self.clear_board(),
            KeyCode::KeyR => self.randomize_board(),
            _ => (),
        }
    }

    fn toggle_running(&mut self) {
        self.running = !self.running;
        if self.running {
            self.next_update = Instant::now();
        }
        info!("{}", if self.running { "running" } else { "paused" });
    }

    fn select_next_shape(&mut self) {
        self.selected_shape = (self.selected_shape + 1) % self.shape_names.len();
        info!("selected shape: {}", self.shape_names[self.selected_shape]);
    }

    fn set_period(&mut self, period: Duration) {
        self.period = period.clamp(MIN_PERIOD, MAX_PERIOD);
        info!("generation period: {:?}", self.period);
    }

    fn clear_board(&mut self) {
        self.board = Board::new(self.board.size() as i32).unwrap();
        self.window.request_redraw();
    }

    fn randomize_board(&mut self) {
        let size = self.board.size();
        let mut board = Board::new(size as i32).unwrap();
        let mut rng = rand::rng();
        for row in 0..size {
            for col in 0..size {
                if rng.random_bool(RANDOM_LIFE_FRACTION) {
                    board.flip_cell(row, col).unwrap();
                }
            }
        }
        self.board = board;
        self.window.request_redraw();
    }
}

struct AppEventHandler {
    board: Option<Board>,
    app: Option<App>,
}

impl AppEventHandler {
    fn new(board: Board) -> Self {
        Self {
            board: Some(board),
            app: None,
        }
    }

    fn app(&mut self) -> &mut App {
        self.app.as_mut().unwrap()
    }
}

impl ApplicationHandler for AppEventHandler {
    fn new_events(&mut self, _event_loop: &ActiveEventLoop, cause: StartCause) {
        if let StartCause::ResumeTimeReached { .. } = cause {
            self.app().on_time_step();
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.app.is_none() {
            let board = self.board.take().unwrap();
            self.app = Some(App::new(event_loop, board));
            self.app().on_create();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                self.app().on_resize(size);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.app().cursor = Some(position);
            }
            WindowEvent::CursorLeft { .. } => {
                self.app().cursor = None;
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button,
                ..
            } => {
                self.app().on_mouse_click(button);
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Released,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                self.app().on_key(event_loop, code);
            }
            WindowEvent::RedrawRequested => {
                self.app().on_redraw(event_loop);
            }
            _ => (),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let control_flow = match &self.app {
            Some(app) if app.running => ControlFlow::WaitUntil(app.next_update),
            _ => ControlFlow::Wait,
        };
        event_loop.set_control_flow(control_flow);
    }
}

fn log_error<E: std::error::Error + 'static>(method_name: &str, err: E) {
    error!("{method_name}() failed: {err}");
    for source in err.sources().skip(1) {
        error!("  Caused by: {source}");
    }
}
