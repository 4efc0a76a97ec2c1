//! Error types for toolplot.
//!
//! Configuration problems are reported as [`ConfigError`] and everything that can abort a
//! plotting run is folded into [`PlotError`].

use std::io;
use thiserror::Error;

/// Errors raised while validating plotter parameters.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A dimension that must be strictly positive was zero or negative.
    #[error("Parameter '{name}' must be positive, got {value}")]
    NonPositive {
        /// The parameter name.
        name: &'static str,
        /// The rejected value.
        value: f32,
    },

    /// A parameter was NaN or infinite.
    #[error("Parameter '{name}' must be finite, got {value}")]
    NonFinite {
        /// The parameter name.
        name: &'static str,
        /// The rejected value.
        value: f32,
    },

    /// Tool diameter below zero.
    #[error("Tool diameter must not be negative, got {0}")]
    NegativeToolDiameter(f32),

    /// A grid dimension of zero pixels.
    #[error("Grid dimension '{name}' must be at least one pixel")]
    ZeroPixels {
        /// The parameter name.
        name: &'static str,
    },
}

/// Errors that abort a plotting run.
#[derive(Error, Debug)]
pub enum PlotError {
    /// The plotter parameters were rejected.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The depth grid could not be allocated.
    #[error("Can't allocate depth grid of {width}x{height} pixels")]
    GridAllocation {
        /// Grid width in pixels.
        width: usize,
        /// Grid height in pixels.
        height: usize,
    },

    /// Reading samples or writing the grid failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for configuration validation.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type alias for plotting runs.
pub type PlotResult<T> = Result<T, PlotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::NonPositive {
            name: "width",
            value: -2.0,
        };
        assert_eq!(err.to_string(), "Parameter 'width' must be positive, got -2");

        let err = ConfigError::ZeroPixels { name: "pxheight" };
        assert_eq!(
            err.to_string(),
            "Grid dimension 'pxheight' must be at least one pixel"
        );

        let err = ConfigError::NegativeToolDiameter(-1.5);
        assert_eq!(err.to_string(), "Tool diameter must not be negative, got -1.5");
    }

    #[test]
    fn test_plot_error_display() {
        let err = PlotError::GridAllocation {
            width: 800,
            height: 400,
        };
        assert_eq!(
            err.to_string(),
            "Can't allocate depth grid of 800x400 pixels"
        );
    }

    #[test]
    fn test_error_conversion() {
        let cfg_err = ConfigError::ZeroPixels { name: "pxwidth" };
        let plot_err: PlotError = cfg_err.into();
        assert!(matches!(plot_err, PlotError::Config(_)));

        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        let plot_err: PlotError = io_err.into();
        assert!(matches!(plot_err, PlotError::Io(_)));
    }
}
