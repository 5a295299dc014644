use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Rejected render inputs. Raised at construction time so rendering itself never fails.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("degenerate camera: {0}")]
    DegenerateCamera(&'static str),

    #[error("field of view must be finite and within (0, 90) degrees, got {0}")]
    InvalidFieldOfView(f64),

    #[error("degenerate sphere: radius must be finite and positive, got {radius}")]
    DegenerateSphere { radius: f64 },

    #[error("viewport must be at least 1x1 pixels, got {width}x{height}")]
    EmptyViewport { width: u32, height: u32 },
}

/// Failures at the image output boundary.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("failed to write image data")]
    Write(#[from] io::Error),

    #[error("failed to write '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("row has {actual} pixels, image width is {expected}")]
    RowMismatch { expected: u32, actual: usize },

    #[error("image declares {expected} rows, got {actual}")]
    RowCount { expected: u32, actual: u32 },
}
