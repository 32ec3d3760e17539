//! Windowed host: feeds window events into the pool and shows each frame.

use std::sync::Arc;
use std::time::Instant;

use log::{error, info, warn};
use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::config::FluidConfig;
use crate::error::ViewerError;
use crate::field::FluidField;
use crate::gpu::Presenter;
use crate::input::{Input, MouseButton, PointerEvent};
use crate::nav::NavBar;
use crate::raster::Canvas;
use crate::time::FrameTimer;

const TITLE: &str = "tidepool";

/// Open a window and run the pool until it is closed.
pub fn run(config: FluidConfig) -> Result<(), ViewerError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// Application state driven by the winit event loop.
pub struct App {
    window: Option<Arc<Window>>,
    presenter: Option<Presenter>,
    field: FluidField,
    canvas: Canvas,
    nav: NavBar,
    input: Input,
    timer: FrameTimer,
    /// First fatal error, reported after the loop exits.
    error: Option<ViewerError>,
}

impl App {
    pub fn new(config: FluidConfig) -> Self {
        Self {
            window: None,
            presenter: None,
            field: FluidField::new(config),
            canvas: Canvas::new(0, 0),
            nav: NavBar::new(),
            input: Input::new(),
            timer: FrameTimer::new(),
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: ViewerError) {
        error!("{}", err);
        self.error.get_or_insert(err);
        event_loop.exit();
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.resize(width, height);
        if self.field.resize(width, height) {
            info!("surface resized to {}x{}", width, height);
        }
        self.nav.layout(width, height, &mut self.field);
        if let Some(pos) = self.input.position() {
            self.nav.pointer_moved(pos, &mut self.field);
        }
        if let Some(presenter) = &mut self.presenter {
            presenter.resize(width, height);
        }
    }

    fn pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Moved(pos) => self.nav.pointer_moved(pos, &mut self.field),
            PointerEvent::Left => self.nav.pointer_left(&mut self.field),
            PointerEvent::Pressed(MouseButton::Left, pos) => {
                self.nav.click(pos, Instant::now(), &mut self.field);
            }
            PointerEvent::Pressed(..) => {}
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        if self.timer.update(now) {
            if let Some(window) = &self.window {
                window.set_title(&format!("{} - {:.0} fps", TITLE, self.timer.fps()));
            }
        }
        self.nav.poll(now);

        self.field.advance();
        self.field.render(&mut self.canvas);
        self.nav.draw(&mut self.canvas);

        if let Some(presenter) = &mut self.presenter {
            match presenter.present(&self.canvas) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    presenter.reconfigure()
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    error!("GPU out of memory");
                    event_loop.exit();
                }
                Err(e) => warn!("present error: {:?}", e),
            }
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title(TITLE)
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => return self.fail(event_loop, e.into()),
        };
        let presenter = match pollster::block_on(Presenter::new(window.clone())) {
            Ok(presenter) => presenter,
            Err(e) => return self.fail(event_loop, e.into()),
        };

        let size = window.inner_size();
        self.window = Some(window.clone());
        self.presenter = Some(presenter);
        self.resize(size.width, size.height);
        window.request_redraw();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { ref event, .. }
                if event.state == ElementState::Pressed
                    && event.physical_key == PhysicalKey::Code(KeyCode::Escape) =>
            {
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                self.resize(size.width, size.height);
            }
            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }
            ref other => {
                if let Some(pointer) = self.input.handle_event(other) {
                    self.pointer(pointer);
                }
            }
        }
    }
}
