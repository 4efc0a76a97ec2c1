//! # toolplot heightmap
//!
//! Turns a stream of tool-center samples into a heightmap holding, for every pixel, the
//! lowest depth the cutting surface reached over it.
//!
//! - [`DepthGrid`] accumulates minimum depths
//! - [`Rasterizer`] stamps one tool sample into the grid
//! - [`SampleReader`] decodes samples from a byte stream
//! - [`StreamDriver`] runs the read, stamp and write phases

pub mod driver;
pub mod grid;
pub mod rasterizer;
pub mod stream;

pub use driver::{plot_stream, DriverState, PlotStats, StreamDriver};
pub use grid::{DepthGrid, UNTOUCHED_DEPTH};
pub use rasterizer::Rasterizer;
pub use stream::{write_grid, SampleReader, ToolSample, SAMPLE_SIZE};
