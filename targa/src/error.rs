use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Pixel buffer could not be allocated.
    #[error("failed to allocate {bytes} bytes for pixel data")]
    OutOfMemory { bytes: u64 },

    #[error("pixel ({x}, {y}) is outside of {width}x{height} image")]
    OutOfBounds {
        x: u16,
        y: u16,
        width: u16,
        height: u16,
    },

    /// Output file could not be opened for writing.
    #[error("failed to open {}: {source}", .path.display())]
    SinkUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid color: {0}")]
    InvalidColor(String),
}
