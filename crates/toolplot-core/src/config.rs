//! Plotter configuration
//!
//! [`PlotterParameters`] holds the values exactly as they were supplied on the command line.
//! [`PlotterConfig::from_parameters`] validates them once and derives the pixel scale and
//! the tool; the resulting value is immutable for the rest of the run.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::tool::{Tool, ToolShape};

/// Raw plotter parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotterParameters {
    /// Workpiece width in mm
    pub width: f32,
    /// Workpiece height in mm
    pub height: f32,
    /// Workpiece depth in mm. Informational only, the plotter never clamps to it.
    pub depth: f32,
    /// Grid width in pixels
    pub width_px: usize,
    /// Grid height in pixels
    pub height_px: usize,
    /// Tool diameter in mm
    pub tool_diameter: f32,
    /// Cutter profile
    pub tool_shape: ToolShape,
}

/// Physical size of one pixel along each axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelScale {
    /// mm per pixel along X
    pub x_mm_per_px: f32,
    /// mm per pixel along Y
    pub y_mm_per_px: f32,
}

impl PixelScale {
    /// Convert a physical position to fractional pixel coordinates.
    pub fn mm_to_px(&self, x: f32, y: f32) -> (f32, f32) {
        (x / self.x_mm_per_px, y / self.y_mm_per_px)
    }

    /// Convert an integer pixel offset to a physical offset.
    pub fn px_to_mm(&self, sx: i64, sy: i64) -> (f32, f32) {
        (sx as f32 * self.x_mm_per_px, sy as f32 * self.y_mm_per_px)
    }
}

/// Validated, immutable plotter configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotterConfig {
    width: f32,
    height: f32,
    depth: f32,
    width_px: usize,
    height_px: usize,
    scale: PixelScale,
    tool: Tool,
}

impl PlotterConfig {
    /// Validate raw parameters and derive the pixel scale and tool.
    ///
    /// Physical width and height must be finite and positive, pixel dimensions non-zero,
    /// depth finite, and the tool diameter finite and not negative. A zero diameter is
    /// accepted and stamps a single pixel.
    pub fn from_parameters(params: &PlotterParameters) -> ConfigResult<Self> {
        require_positive("width", params.width)?;
        require_positive("height", params.height)?;
        require_finite("depth", params.depth)?;
        if params.width_px == 0 {
            return Err(ConfigError::ZeroPixels { name: "pxwidth" });
        }
        if params.height_px == 0 {
            return Err(ConfigError::ZeroPixels { name: "pxheight" });
        }
        require_finite("tooldiameter", params.tool_diameter)?;
        if params.tool_diameter < 0.0 {
            return Err(ConfigError::NegativeToolDiameter(params.tool_diameter));
        }

        let scale = PixelScale {
            x_mm_per_px: params.width / params.width_px as f32,
            y_mm_per_px: params.height / params.height_px as f32,
        };
        // Enormous grids over tiny workpieces can underflow the scale.
        require_positive("x_mm_per_px", scale.x_mm_per_px)?;
        require_positive("y_mm_per_px", scale.y_mm_per_px)?;

        let config = Self {
            width: params.width,
            height: params.height,
            depth: params.depth,
            width_px: params.width_px,
            height_px: params.height_px,
            scale,
            tool: Tool::new(params.tool_shape, params.tool_diameter),
        };

        tracing::debug!(
            config = %serde_json::to_string(&config).unwrap_or_default(),
            "Resolved plotter configuration"
        );

        Ok(config)
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn depth(&self) -> f32 {
        self.depth
    }

    pub fn width_px(&self) -> usize {
        self.width_px
    }

    pub fn height_px(&self) -> usize {
        self.height_px
    }

    pub fn scale(&self) -> PixelScale {
        self.scale
    }

    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    /// Tool radius in whole pixels along X and Y, with one pixel of margin.
    ///
    /// Candidates in the margin are trimmed by the circular footprint test. Saturates at
    /// `i64::MAX` for tools too large to count in pixels.
    pub fn tool_radius_px(&self) -> (i64, i64) {
        let r = self.tool.radius();
        (
            ((r / self.scale.x_mm_per_px) as i64).saturating_add(1),
            ((r / self.scale.y_mm_per_px) as i64).saturating_add(1),
        )
    }
}

fn require_finite(name: &'static str, value: f32) -> ConfigResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { name, value })
    }
}

fn require_positive(name: &'static str, value: f32) -> ConfigResult<()> {
    require_finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}
