//! Raw RGBA frame files.
//!
//! The hand-off format between the renderer and whatever encodes images:
//!
//! ```text
//! [8-byte magic "PICTRGBA"][u32 BE width][u32 BE height][width * height * 4 bytes RGBA]
//! ```
//!
//! Pixels are row-major, top row first, one byte per channel.

use std::io::{self, Read, Write};
use thiserror::Error;

use pictor_core::{Color, PixelBuffer, PixelSource};

pub const MAGIC: &[u8; 8] = b"PICTRGBA";

/// Magic plus the two dimension words.
pub const HEADER_LEN: usize = 16;

// ── Errors ────────────────────────────────────────────────────────────

#[derive(Error, Debug)]
pub enum FrameError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Not a Pictor frame (bad magic)")]
    BadMagic,

    #[error("Frame truncated: expected {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },

    #[error("Frame dimensions {width}x{height} are not representable")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Byte length of the pixel payload, if the frame is representable at all.
fn payload_len(width: u32, height: u32) -> Result<usize, FrameError> {
    let invalid = FrameError::InvalidDimensions { width, height };
    if width > i32::MAX as u32 || height > i32::MAX as u32 {
        return Err(invalid);
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(4))
        .ok_or(invalid)
}

// ── Frame Writer ──────────────────────────────────────────────────────

pub struct FrameWriter<W: Write> {
    writer: W,
}

impl<W: Write> FrameWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write `source` as a single frame.
    pub fn write<S: PixelSource + ?Sized>(&mut self, source: &S) -> Result<(), FrameError> {
        let width = source.width();
        let height = source.height();
        payload_len(width, height)?;
        log::debug!("Writing {}x{} frame", width, height);

        self.writer.write_all(MAGIC)?;
        self.writer.write_all(&width.to_be_bytes())?;
        self.writer.write_all(&height.to_be_bytes())?;

        let mut row = Vec::with_capacity(width as usize * 4);
        for y in 0..height {
            row.clear();
            for x in 0..width {
                row.extend_from_slice(&source.pixel(x, y).to_array());
            }
            self.writer.write_all(&row)?;
        }
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

// ── Frame Reader ──────────────────────────────────────────────────────

pub struct FrameReader<R: Read> {
    reader: R,
}

impl<R: Read> FrameReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Read and validate one frame.
    pub fn read(&mut self) -> Result<PixelBuffer, FrameError> {
        let mut header = [0u8; HEADER_LEN];
        let got = self.fill(&mut header)?;
        if got < HEADER_LEN {
            return Err(FrameError::Truncated {
                expected: HEADER_LEN,
                actual: got,
            });
        }
        if &header[..8] != MAGIC {
            return Err(FrameError::BadMagic);
        }

        let width = u32::from_be_bytes([header[8], header[9], header[10], header[11]]);
        let height = u32::from_be_bytes([header[12], header[13], header[14], header[15]]);
        let len = payload_len(width, height)?;

        // The header is untrusted; the buffer only grows as bytes arrive.
        let mut data = Vec::new();
        self.reader.by_ref().take(len as u64).read_to_end(&mut data)?;
        if data.len() < len {
            return Err(FrameError::Truncated {
                expected: HEADER_LEN + len,
                actual: HEADER_LEN + data.len(),
            });
        }

        let pixels = data
            .chunks_exact(4)
            .map(|c| Color::rgba(c[0], c[1], c[2], c[3]))
            .collect();
        log::debug!("Read {}x{} frame", width, height);
        PixelBuffer::from_pixels(width, height, pixels)
            .ok_or(FrameError::InvalidDimensions { width, height })
    }

    /// Read until `buf` is full or the stream ends. Returns the bytes read.
    fn fill(&mut self, buf: &mut [u8]) -> Result<usize, FrameError> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.reader.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(FrameError::Io(e)),
            }
        }
        Ok(filled)
    }
}
