//! Binary sample input and grid output
//!
//! Both directions use raw 32-bit IEEE-754 floats in host byte order. A sample is three
//! consecutive floats (x, y, z); the grid is written as its cells in row-major order with
//! no header or trailer.

use std::io::{self, Read, Write};

use bytemuck::{Pod, Zeroable};
use toolplot_core::PlotResult;

use crate::grid::DepthGrid;

/// Encoded size of one [`ToolSample`] in bytes.
pub const SAMPLE_SIZE: usize = std::mem::size_of::<ToolSample>();

/// A tool-center position in physical units.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct ToolSample {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl ToolSample {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Reads [`ToolSample`]s from a byte stream until end-of-input.
///
/// Yields `None` once the input is exhausted and keeps yielding `None` afterwards. A
/// record cut short by end-of-input is dropped; its length is available from
/// [`SampleReader::discarded_bytes`]. Any other read failure is yielded once as an error
/// and ends the stream.
#[derive(Debug)]
pub struct SampleReader<R> {
    inner: R,
    samples_read: u64,
    discarded_bytes: usize,
    finished: bool,
}

impl<R: Read> SampleReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            samples_read: 0,
            discarded_bytes: 0,
            finished: false,
        }
    }

    /// Number of complete samples decoded so far
    pub fn samples_read(&self) -> u64 {
        self.samples_read
    }

    /// Bytes of a trailing partial record dropped at end-of-input
    pub fn discarded_bytes(&self) -> usize {
        self.discarded_bytes
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Fill `buf` as far as the input allows, returning the number of bytes read.
    fn fill(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(filled)
    }
}

impl<R: Read> Iterator for SampleReader<R> {
    type Item = PlotResult<ToolSample>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let mut buf = [0u8; SAMPLE_SIZE];
        let filled = match self.fill(&mut buf) {
            Ok(n) => n,
            Err(e) => {
                self.finished = true;
                return Some(Err(e.into()));
            }
        };

        if filled < SAMPLE_SIZE {
            self.finished = true;
            self.discarded_bytes = filled;
            if filled > 0 {
                tracing::debug!(bytes = filled, "Discarding partial sample at end of input");
            }
            return None;
        }

        self.samples_read += 1;
        Some(Ok(bytemuck::pod_read_unaligned(&buf)))
    }
}

impl<R: Read> std::iter::FusedIterator for SampleReader<R> {}

/// Write every grid cell in row-major order and flush. Returns the number of bytes written.
pub fn write_grid<W: Write>(grid: &DepthGrid, mut out: W) -> PlotResult<usize> {
    let bytes: &[u8] = bytemuck::cast_slice(grid.finalize());
    out.write_all(bytes)?;
    out.flush()?;
    Ok(bytes.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use toolplot_core::PlotError;

    use crate::grid::UNTOUCHED_DEPTH;

    fn encode(samples: &[ToolSample]) -> Vec<u8> {
        bytemuck::cast_slice(samples).to_vec()
    }

    /// Reader that hands out at most `chunk` bytes per call and is interrupted once.
    struct Trickle {
        data: Vec<u8>,
        pos: usize,
        chunk: usize,
        interrupted: bool,
    }

    impl Read for Trickle {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if !self.interrupted {
                self.interrupted = true;
                return Err(io::Error::new(io::ErrorKind::Interrupted, "signal"));
            }
            let n = self.chunk.min(buf.len()).min(self.data.len() - self.pos);
            buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
            self.pos += n;
            Ok(n)
        }
    }

    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::ConnectionReset, "gone"))
        }
    }

    #[test]
    fn test_sample_size() {
        assert_eq!(SAMPLE_SIZE, 12);
    }

    #[test]
    fn test_reads_native_endian_triples() {
        let mut bytes = Vec::new();
        for v in [1.5f32, -2.0, 0.25] {
            bytes.extend_from_slice(&v.to_ne_bytes());
        }
        let samples: Vec<_> = SampleReader::new(Cursor::new(bytes))
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(samples, vec![ToolSample::new(1.5, -2.0, 0.25)]);
    }

    #[test]
    fn test_empty_input_ends_immediately() {
        let mut reader = SampleReader::new(Cursor::new(Vec::new()));
        assert!(reader.next().is_none());
        assert!(reader.is_finished());
        assert_eq!(reader.discarded_bytes(), 0);
        assert_eq!(reader.samples_read(), 0);
    }

    #[test]
    fn test_partial_record_is_discarded() {
        let mut bytes = encode(&[ToolSample::new(1.0, 2.0, 3.0), ToolSample::new(4.0, 5.0, 6.0)]);
        bytes.truncate(SAMPLE_SIZE + 8);

        let mut reader = SampleReader::new(Cursor::new(bytes));
        assert_eq!(reader.next().unwrap().unwrap(), ToolSample::new(1.0, 2.0, 3.0));
        assert!(reader.next().is_none());
        assert_eq!(reader.discarded_bytes(), 8);
        assert_eq!(reader.samples_read(), 1);
        // fused
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_short_reads_are_reassembled() {
        let samples = [ToolSample::new(1.0, 2.0, 3.0), ToolSample::new(-1.0, -2.0, -3.0)];
        let reader = SampleReader::new(Trickle {
            data: encode(&samples),
            pos: 0,
            chunk: 5,
            interrupted: false,
        });
        let decoded: Vec<_> = reader.collect::<Result<_, _>>().unwrap();
        assert_eq!(decoded, samples);
    }

    #[test]
    fn test_read_error_is_yielded_once() {
        let mut reader = SampleReader::new(Broken);
        assert!(matches!(reader.next(), Some(Err(PlotError::Io(_)))));
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_write_grid_emits_every_cell() {
        let mut grid = DepthGrid::new(2, 3).unwrap();
        grid.merge(1, 2, -0.5);

        let mut out = Vec::new();
        let written = write_grid(&grid, &mut out).unwrap();

        assert_eq!(written, 24);
        assert_eq!(out.len(), 24);
        let cells: Vec<f32> = out
            .chunks_exact(4)
            .map(|c| f32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
            .collect();
        assert_eq!(cells[..5], [UNTOUCHED_DEPTH; 5]);
        assert_eq!(cells[5], -0.5);
    }
}
