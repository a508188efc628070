use crate::backend::{DisplayBackend, WindowOptions};
use crate::error::ViewError;
use crate::framebuffer::FrameBuffer;
use pixels::{Pixels, SurfaceTexture};
use std::sync::Arc;
use std::time::Duration;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, MouseButton, WindowEvent};
use winit::event_loop::EventLoop;
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Fullscreen, Window, WindowBuilder};

/// Desktop window backend: a winit window with a pixels surface the
/// framebuffer is blitted onto. Mouse input stands in for the touch panel.
pub(crate) struct WindowBackend {
    event_loop: EventLoop<()>,
    window: Arc<Window>,
    pixels: Pixels,
    cursor: (f32, f32),
    pressed: bool,
    closed: bool,
}

impl WindowBackend {
    pub(crate) fn new(options: &WindowOptions) -> Result<WindowBackend, ViewError> {
        let event_loop =
            EventLoop::new().map_err(|e| ViewError::BackendError(e.to_string()))?;

        let mut builder = WindowBuilder::new()
            .with_title(&options.title)
            .with_inner_size(LogicalSize::new(options.width as f64, options.height as f64))
            .with_resizable(false);
        if options.fullscreen {
            builder = builder.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }
        if options.maximize {
            builder = builder.with_maximized(true);
        }
        let window = Arc::new(
            builder
                .build(&event_loop)
                .map_err(|e| ViewError::BackendError(e.to_string()))?,
        );

        let surface_size = window.inner_size();
        let surface_texture =
            SurfaceTexture::new(surface_size.width, surface_size.height, &*window);
        let pixels = Pixels::new(options.width, options.height, surface_texture)
            .map_err(|e| ViewError::BackendError(e.to_string()))?;

        Ok(WindowBackend {
            event_loop,
            window,
            pixels,
            cursor: (0.0, 0.0),
            pressed: false,
            closed: false,
        })
    }
}

impl DisplayBackend for WindowBackend {
    fn pump(&mut self) -> Result<bool, ViewError> {
        let WindowBackend {
            event_loop,
            pixels,
            cursor,
            pressed,
            closed,
            ..
        } = self;

        let status = event_loop.pump_events(Some(Duration::ZERO), |event, target| {
            if let Event::WindowEvent { event, .. } = event {
                match event {
                    WindowEvent::CloseRequested => {
                        *closed = true;
                        target.exit();
                    }
                    WindowEvent::CursorMoved { position, .. } => {
                        *cursor = (position.x as f32, position.y as f32);
                    }
                    WindowEvent::MouseInput { state, button, .. } => {
                        if button == MouseButton::Left {
                            *pressed = state == ElementState::Pressed;
                        }
                    }
                    WindowEvent::Resized(new_size) => {
                        let _ = pixels.resize_surface(new_size.width, new_size.height);
                    }
                    _ => {}
                }
            }
        });
        if let PumpStatus::Exit(_) = status {
            *closed = true;
        }

        Ok(!*closed)
    }

    fn touch(&self) -> Option<(i32, i32)> {
        if !self.pressed {
            return None;
        }
        self.pixels
            .window_pos_to_pixel(self.cursor)
            .ok()
            .map(|(x, y)| (x as i32, y as i32))
    }

    fn present(&mut self, fb: &FrameBuffer) -> Result<(), ViewError> {
        self.pixels.frame_mut().copy_from_slice(fb.data());
        self.pixels
            .render()
            .map_err(|e| ViewError::BackendError(e.to_string()))?;
        self.window.request_redraw();
        Ok(())
    }
}
