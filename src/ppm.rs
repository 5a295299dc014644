//! Plain-text P3 pixmap output.
//!
//! Layout: `P3`, a `# comment` line, `width height`, the max channel value, then one line per
//! image row holding whitespace-separated `r g b` triples.

use crate::color::Color;
use crate::error::OutputError;
use crate::render::{Frame, RowSink};
use log::{info, warn};
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const MAX_CHANNEL_VALUE: u8 = 255;

/// Streaming P3 encoder. Writes the header on construction and checks the image shape as rows
/// arrive.
pub struct PpmWriter<W: Write> {
    writer: W,
    width: u32,
    height: u32,
    rows_written: u32,
}

impl<W: Write> PpmWriter<W> {
    pub fn new(mut writer: W, width: u32, height: u32, comment: &str) -> Result<Self, OutputError> {
        // A line break in the comment would end the comment line early.
        let comment = comment.replace(|c: char| c == '\n' || c == '\r', " ");
        write!(
            writer,
            "P3\n# {}\n{} {}\n{}\n",
            comment, width, height, MAX_CHANNEL_VALUE
        )?;

        Ok(PpmWriter {
            writer,
            width,
            height,
            rows_written: 0,
        })
    }

    /// Checks that every declared row was written, flushes and hands back the writer.
    pub fn finish(mut self) -> Result<W, OutputError> {
        if self.rows_written != self.height {
            return Err(OutputError::RowCount {
                expected: self.height,
                actual: self.rows_written,
            });
        }
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> RowSink for PpmWriter<W> {
    fn write_row(&mut self, row: &[Color]) -> Result<(), OutputError> {
        if row.len() != self.width as usize {
            return Err(OutputError::RowMismatch {
                expected: self.width,
                actual: row.len(),
            });
        }
        if self.rows_written == self.height {
            return Err(OutputError::RowCount {
                expected: self.height,
                actual: self.rows_written + 1,
            });
        }

        for (index, color) in row.iter().enumerate() {
            if index > 0 {
                self.writer.write_all(b" ")?;
            }
            write!(self.writer, "{}", color)?;
        }
        self.writer.write_all(b"\n")?;

        self.rows_written += 1;
        Ok(())
    }
}

/// Encodes `frame` as P3 and stores it at `path`.
///
/// The image is written to a hidden temporary next to `path` and renamed into place, so `path`
/// either receives the complete image or is left as it was.
pub fn save_ppm(frame: &Frame, path: &Path) -> Result<(), OutputError> {
    // Roughly "255 255 255 " per pixel.
    let capacity = frame.pixels().len() * 12 + 64;
    let comment = path.display().to_string();

    let mut writer = PpmWriter::new(
        Vec::with_capacity(capacity),
        frame.width(),
        frame.height(),
        &comment,
    )?;
    frame.write_to(&mut writer)?;
    let ppm_data = writer.finish()?;

    let temp_path = temporary_path(path);
    let result = fs::write(&temp_path, &ppm_data).and_then(|_| fs::rename(&temp_path, path));

    if let Err(source) = result {
        if temp_path.exists() {
            if let Err(error) = fs::remove_file(&temp_path) {
                warn!(
                    "could not remove temporary file '{}': {}",
                    temp_path.display(),
                    error
                );
            }
        }
        return Err(OutputError::Io {
            path: path.to_path_buf(),
            source,
        });
    }

    info!("wrote {} bytes to '{}'", ppm_data.len(), path.display());
    Ok(())
}

fn temporary_path(path: &Path) -> PathBuf {
    let mut file_name = OsString::from(".");
    file_name.push(path.file_name().unwrap_or_else(|| OsStr::new("image")));
    file_name.push(".tmp");
    path.with_file_name(file_name)
}
