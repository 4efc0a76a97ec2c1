//! Toolpoint rasterization
//!
//! A stamp enumerates whole-pixel offsets around the sample's nearest pixel, keeps those
//! whose physical distance from the tool axis lies inside the tool radius, and merges the
//! sample depth plus the tool profile height at that distance into the grid.
//!
//! Offsets are applied to the rounded sample pixel instead of being re-derived from
//! physical coordinates, so every stamp has the same footprint shape wherever the sample
//! falls inside its pixel.

use toolplot_core::{PixelScale, PlotterConfig, Tool};

use crate::grid::DepthGrid;
use crate::stream::ToolSample;

/// Stamps tool samples into a [`DepthGrid`].
#[derive(Debug, Clone)]
pub struct Rasterizer {
    tool: Tool,
    scale: PixelScale,
    radius_px: (i64, i64),
}

impl Rasterizer {
    pub fn new(config: &PlotterConfig) -> Self {
        Self {
            tool: *config.tool(),
            scale: config.scale(),
            radius_px: config.tool_radius_px(),
        }
    }

    /// Pixel nearest to a physical position, `None` when the position is not finite.
    pub fn nearest_pixel(&self, x: f32, y: f32) -> Option<(i64, i64)> {
        let (xpx, ypx) = self.scale.mm_to_px(x, y);
        if !xpx.is_finite() || !ypx.is_finite() {
            return None;
        }
        // `as` saturates, so far-off samples clamp to an empty offset range below.
        Some((xpx.round() as i64, ypx.round() as i64))
    }

    /// Profile height for a whole-pixel offset from the tool axis, `None` outside the
    /// circular footprint.
    pub fn offset_height(&self, sx: i64, sy: i64) -> Option<f32> {
        let (sx_mm, sy_mm) = self.scale.px_to_mm(sx, sy);
        self.tool.height_at_radius_sqr(sx_mm * sx_mm + sy_mm * sy_mm)
    }

    /// Merge one tool sample into the grid. Returns the number of cells lowered.
    pub fn stamp(&self, grid: &mut DepthGrid, sample: ToolSample) -> usize {
        let Some((cx, cy)) = self.nearest_pixel(sample.x, sample.y) else {
            tracing::trace!(x = sample.x, y = sample.y, "Skipping sample off the plane");
            return 0;
        };
        let (rx, ry) = self.radius_px;

        // Offsets that land outside the grid are no-ops; skip them up front so a
        // far-off sample or a huge tool costs at most one pass over the grid.
        let (min_sx, max_sx) = clamp_offsets(cx, rx, grid.width());
        let (min_sy, max_sy) = clamp_offsets(cy, ry, grid.height());

        let mut lowered = 0;
        for sy in min_sy..=max_sy {
            for sx in min_sx..=max_sx {
                let Some(z_offset) = self.offset_height(sx, sy) else {
                    continue;
                };
                if grid.merge(cx + sx, cy + sy, sample.z + z_offset) {
                    lowered += 1;
                }
            }
        }

        tracing::trace!(
            x = sample.x,
            y = sample.y,
            z = sample.z,
            lowered,
            "Stamped tool sample"
        );
        lowered
    }
}

/// Intersect `[-radius, radius]` with the offsets that keep `center + offset` inside
/// `[0, len)`. Yields an empty range (`min > max`) when nothing overlaps.
fn clamp_offsets(center: i64, radius: i64, len: usize) -> (i64, i64) {
    let last = i64::try_from(len).unwrap_or(i64::MAX).saturating_sub(1);
    let min = (-radius).max(0i64.saturating_sub(center));
    let max = radius.min(last.saturating_sub(center));
    (min, max)
}
