use toolplot_core::{PlotError, PlotResult};

/// Depth of a cell no stamp has covered. Compares greater than any real depth.
pub const UNTOUCHED_DEPTH: f32 = f32::MAX;

/// A dense minimum-depth grid, stored row-major.
#[derive(Debug, Clone)]
pub struct DepthGrid {
    width: usize,
    height: usize,
    cells: Vec<f32>,
}

impl DepthGrid {
    /// Allocate a grid with every cell at [`UNTOUCHED_DEPTH`].
    ///
    /// Allocation failure and `width * height` overflow are reported as
    /// [`PlotError::GridAllocation`] rather than aborting the process.
    pub fn new(width: usize, height: usize) -> PlotResult<Self> {
        let alloc_error = || PlotError::GridAllocation { width, height };
        let total_cells = width.checked_mul(height).ok_or_else(alloc_error)?;

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(total_cells)
            .map_err(|_| alloc_error())?;
        cells.resize(total_cells, UNTOUCHED_DEPTH);

        tracing::debug!(
            width,
            height,
            bytes = total_cells * std::mem::size_of::<f32>(),
            "Allocated depth grid"
        );

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    /// Depth recorded at a pixel, `None` outside the grid.
    pub fn get(&self, x: i64, y: i64) -> Option<f32> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Record `z` at `(x, y)` if it is strictly below the current depth.
    ///
    /// Coordinates outside the grid are ignored. Returns `true` when the cell was lowered.
    pub fn merge(&mut self, x: i64, y: i64, z: f32) -> bool {
        let Some(i) = self.index(x, y) else {
            return false;
        };
        if z < self.cells[i] {
            self.cells[i] = z;
            true
        } else {
            false
        }
    }

    /// Number of cells lowered below [`UNTOUCHED_DEPTH`] by at least one stamp.
    pub fn touched_cells(&self) -> usize {
        self.cells.iter().filter(|&&z| z != UNTOUCHED_DEPTH).count()
    }

    /// Final grid contents, row 0 first and column 0 first within a row.
    pub fn finalize(&self) -> &[f32] {
        &self.cells
    }
}
