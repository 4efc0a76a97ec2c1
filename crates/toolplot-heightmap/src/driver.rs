//! Stream driver
//!
//! Runs a plot end to end: stamp every sample from the input, then write the grid once the
//! input is exhausted. The driver moves `Reading -> Draining -> Done` and never goes back.

use std::io::{Read, Write};

use toolplot_core::{PlotResult, PlotterConfig};

use crate::grid::DepthGrid;
use crate::rasterizer::Rasterizer;
use crate::stream::{write_grid, SampleReader};

/// Phase of a [`StreamDriver`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    /// Consuming samples from the input
    Reading,
    /// Input exhausted, grid not yet written
    Draining,
    /// Grid written and flushed
    Done,
}

/// Summary of a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlotStats {
    /// Complete samples stamped
    pub samples: u64,
    /// Merges that lowered a cell
    pub cells_lowered: u64,
    /// Cells that ended below the untouched depth
    pub touched_cells: usize,
    /// Trailing bytes of a partial sample dropped at end-of-input
    pub discarded_bytes: usize,
    /// Bytes of grid data written
    pub bytes_written: usize,
}

/// Drives samples from a reader through a [`Rasterizer`] into a [`DepthGrid`].
pub struct StreamDriver {
    rasterizer: Rasterizer,
    grid: DepthGrid,
    state: DriverState,
    stats: PlotStats,
}

impl StreamDriver {
    /// Allocate the grid for `config`.
    pub fn new(config: &PlotterConfig) -> PlotResult<Self> {
        let grid = DepthGrid::new(config.width_px(), config.height_px())?;
        Ok(Self {
            rasterizer: Rasterizer::new(config),
            grid,
            state: DriverState::Reading,
            stats: PlotStats::default(),
        })
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn grid(&self) -> &DepthGrid {
        &self.grid
    }

    pub fn stats(&self) -> &PlotStats {
        &self.stats
    }

    /// Stamp every sample from `input` until end-of-input.
    ///
    /// A read error aborts the run and leaves the driver in `Reading`.
    pub fn read_samples<R: Read>(&mut self, input: R) -> PlotResult<()> {
        if self.state != DriverState::Reading {
            return Ok(());
        }

        let mut reader = SampleReader::new(input);
        for sample in reader.by_ref() {
            let sample = sample?;
            let lowered = self.rasterizer.stamp(&mut self.grid, sample);
            self.stats.cells_lowered += lowered as u64;
        }

        self.stats.samples = reader.samples_read();
        self.stats.discarded_bytes = reader.discarded_bytes();
        self.state = DriverState::Draining;
        tracing::debug!(
            samples = self.stats.samples,
            discarded_bytes = self.stats.discarded_bytes,
            "End of input"
        );
        Ok(())
    }

    /// Write the final grid. Only valid once the input has been drained.
    pub fn write_output<W: Write>(&mut self, output: W) -> PlotResult<()> {
        if self.state != DriverState::Draining {
            return Ok(());
        }

        self.stats.touched_cells = self.grid.touched_cells();
        self.stats.bytes_written = write_grid(&self.grid, output)?;
        self.state = DriverState::Done;
        Ok(())
    }

    /// Run both phases and return the run summary.
    pub fn run<R: Read, W: Write>(mut self, input: R, output: W) -> PlotResult<PlotStats> {
        self.read_samples(input)?;
        self.write_output(output)?;
        Ok(self.stats)
    }
}

/// Plot every sample from `input` and write the heightmap to `output`.
pub fn plot_stream<R: Read, W: Write>(
    config: &PlotterConfig,
    input: R,
    output: W,
) -> PlotResult<PlotStats> {
    let stats = StreamDriver::new(config)?.run(input, output)?;
    tracing::info!(
        samples = stats.samples,
        cells_lowered = stats.cells_lowered,
        touched_cells = stats.touched_cells,
        bytes_written = stats.bytes_written,
        "Heightmap written"
    );
    Ok(stats)
}
