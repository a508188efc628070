use std::convert::Infallible;
use std::error::Error;
use std::fmt::Display;
use std::{fmt, io};

#[derive(Debug)]
pub enum ViewError {
    TimeoutError(),
    UnsupportedDisplayMode(&'static str, &'static str),
    BackendError(String),
    SerialError(serialport::Error),
    IoError(io::Error),
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ViewError::TimeoutError() => write!(f, "Operation timed out"),
            ViewError::UnsupportedDisplayMode(mode, backend) => {
                write!(f, "The {} backend doesn't support {} mode on start", backend, mode)
            }
            ViewError::BackendError(message) => write!(f, "Display backend error: {}", message),
            ViewError::SerialError(err) => Display::fmt(&err, f),
            ViewError::IoError(err) => Display::fmt(&err, f),
        }
    }
}

impl Error for ViewError {}

impl From<io::Error> for ViewError {
    fn from(err: io::Error) -> Self {
        ViewError::IoError(err)
    }
}

impl From<serialport::Error> for ViewError {
    fn from(err: serialport::Error) -> Self {
        ViewError::SerialError(err)
    }
}

// The in-memory framebuffer cannot fail to draw.
impl From<Infallible> for ViewError {
    fn from(err: Infallible) -> Self {
        match err {}
    }
}
