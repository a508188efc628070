use crate::error::ViewError;
use crate::framebuffer::FrameBuffer;
use crate::window::WindowBackend;

/// Where the framebuffer ends up.
///
/// Selected at startup from configuration; rendering code never knows
/// which one it is talking to.
pub trait DisplayBackend {
    /// Processes pending windowing events. Returns false once the user
    /// closed the display.
    fn pump(&mut self) -> Result<bool, ViewError>;

    /// Pressed pointer position in framebuffer coordinates, if any.
    fn touch(&self) -> Option<(i32, i32)>;

    /// Blits the framebuffer out.
    fn present(&mut self, fb: &FrameBuffer) -> Result<(), ViewError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackendKind {
    Window,
    Headless,
}

impl BackendKind {
    pub fn from_name(name: &str) -> Option<BackendKind> {
        match name {
            "window" => Some(BackendKind::Window),
            "headless" => Some(BackendKind::Headless),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BackendKind::Window => "window",
            BackendKind::Headless => "headless",
        }
    }

    pub fn supports_fullscreen(self) -> bool {
        matches!(self, BackendKind::Window)
    }

    pub fn supports_maximize(self) -> bool {
        matches!(self, BackendKind::Window)
    }
}

pub struct WindowOptions {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub fullscreen: bool,
    pub maximize: bool,
}

pub fn create_backend(
    kind: BackendKind,
    options: &WindowOptions,
) -> Result<Box<dyn DisplayBackend>, ViewError> {
    if options.fullscreen && !kind.supports_fullscreen() {
        return Err(ViewError::UnsupportedDisplayMode("fullscreen", kind.name()));
    }
    if options.maximize && !kind.supports_maximize() {
        return Err(ViewError::UnsupportedDisplayMode("maximized", kind.name()));
    }

    match kind {
        BackendKind::Window => Ok(Box::new(WindowBackend::new(options)?)),
        BackendKind::Headless => Ok(Box::new(HeadlessBackend)),
    }
}

/// Keeps everything in memory; present and touch are no-ops. Used in CI
/// and wherever no display server is around.
pub struct HeadlessBackend;

impl DisplayBackend for HeadlessBackend {
    fn pump(&mut self) -> Result<bool, ViewError> {
        Ok(true)
    }

    fn touch(&self) -> Option<(i32, i32)> {
        None
    }

    fn present(&mut self, _fb: &FrameBuffer) -> Result<(), ViewError> {
        Ok(())
    }
}
