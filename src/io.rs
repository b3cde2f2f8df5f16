//! External row-source/row-sink interfaces (spec §6).
//!
//! These traits are the narrow seam between the core and the container
//! formats (PNG, JPEG, PPM, GIF) that are explicitly out of scope for the
//! core itself (spec §1). Only a minimal PPM adapter is implemented here,
//! since it needs no external codec and is useful as a CLI demonstrator and
//! as a test fixture for driving the scaler end to end through real bytes.

use std::io::{self, BufRead, Read, Write};

use crate::colorspace::Colorspace;

/// A streaming source of image rows.
pub trait RowSource {
    /// Dimensions and colorspace of the image this source will yield.
    fn header(&self) -> (usize, usize, Colorspace);

    /// Fill `buf` (length `width * colorspace.channels()`) with the next row.
    ///
    /// Must not be called more than `height` times.
    fn read_row(&mut self, buf: &mut [u8]) -> io::Result<()>;
}

/// A streaming sink of image rows.
pub trait RowSink {
    /// Accept one row of `width * colorspace.channels()` bytes.
    fn write_row(&mut self, row: &[u8]) -> io::Result<()>;
}

/// A [`RowSource`] backed by an in-memory plane, one row at a time.
///
/// Useful for tests and for embedding the core behind a container format
/// that has already decoded its rows into a flat buffer.
pub struct SliceRowSource<'a> {
    data: &'a [u8],
    width: usize,
    height: usize,
    cs: Colorspace,
    next_row: usize,
}

impl<'a> SliceRowSource<'a> {
    /// Wrap `data` (`width * height * cs.channels()` bytes, row-major) as a
    /// [`RowSource`].
    pub fn new(data: &'a [u8], width: usize, height: usize, cs: Colorspace) -> Self {
        debug_assert_eq!(data.len(), width * height * cs.channels());
        Self { data, width, height, cs, next_row: 0 }
    }
}

impl<'a> RowSource for SliceRowSource<'a> {
    fn header(&self) -> (usize, usize, Colorspace) {
        (self.width, self.height, self.cs)
    }

    fn read_row(&mut self, buf: &mut [u8]) -> io::Result<()> {
        assert!(self.next_row < self.height, "read_row called after all rows were read");
        let row_len = self.width * self.cs.channels();
        let start = self.next_row * row_len;
        buf.copy_from_slice(&self.data[start..start + row_len]);
        self.next_row += 1;
        Ok(())
    }
}

/// A [`RowSink`] that appends every row it receives into an in-memory plane.
pub struct SliceRowSink {
    data: Vec<u8>,
}

impl SliceRowSink {
    /// An empty sink ready to accumulate rows.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// The rows written so far, concatenated row-major.
    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }
}

impl Default for SliceRowSink {
    fn default() -> Self {
        Self::new()
    }
}

impl RowSink for SliceRowSink {
    fn write_row(&mut self, row: &[u8]) -> io::Result<()> {
        self.data.extend_from_slice(row);
        Ok(())
    }
}

/// Reads a binary (P6) PPM: `u8` RGB rows, no gamma metadata beyond the
/// implicit assumption that PPM data is already sRGB.
pub struct PpmReader<R> {
    reader: R,
    width: usize,
    height: usize,
}

impl<R: BufRead> PpmReader<R> {
    /// Parse a PPM header and return a reader positioned at the start of
    /// pixel data.
    pub fn new(mut reader: R) -> io::Result<Self> {
        let magic = read_token(&mut reader)?;
        if magic != "P6" {
            return Err(io::Error::new(io::ErrorKind::InvalidData, "not a binary PPM (P6) file"));
        }
        let width: usize = read_token(&mut reader)?
            .parse()
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidData, "bad PPM width"))?;
        let height: usize = read_token(&mut reader)?
            .parse()
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidData, "bad PPM height"))?;
        let maxval: usize = read_token(&mut reader)?
            .parse()
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidData, "bad PPM maxval"))?;
        if maxval != 255 {
            return Err(io::Error::new(io::ErrorKind::InvalidData, "only 8-bit PPM is supported"));
        }
        Ok(Self { reader, width, height })
    }
}

fn read_token<R: BufRead>(reader: &mut R) -> io::Result<String> {
    let mut token = String::new();
    loop {
        let mut byte = [0u8; 1];
        reader.read_exact(&mut byte)?;
        let ch = byte[0] as char;
        if ch == '#' {
            // Skip a comment to end of line.
            let mut line = String::new();
            reader.read_line(&mut line)?;
            continue;
        }
        if ch.is_whitespace() {
            if token.is_empty() {
                continue;
            }
            break;
        }
        token.push(ch);
    }
    Ok(token)
}

impl<R: BufRead> RowSource for PpmReader<R> {
    fn header(&self) -> (usize, usize, Colorspace) {
        (self.width, self.height, Colorspace::Rgb)
    }

    fn read_row(&mut self, buf: &mut [u8]) -> io::Result<()> {
        debug_assert_eq!(buf.len(), self.width * 3);
        self.reader.read_exact(buf)
    }
}

/// Writes a binary (P6) PPM.
pub struct PpmWriter<W> {
    writer: W,
}

impl<W: Write> PpmWriter<W> {
    /// Write the PPM header for an 8-bit RGB image of the given dimensions.
    pub fn new(mut writer: W, width: usize, height: usize) -> io::Result<Self> {
        write!(writer, "P6\n{width} {height}\n255\n")?;
        Ok(Self { writer })
    }
}

impl<W: Write> RowSink for PpmWriter<W> {
    fn write_row(&mut self, row: &[u8]) -> io::Result<()> {
        self.writer.write_all(row)
    }
}
