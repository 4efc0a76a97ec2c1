//! # toolplot core
//!
//! Core types shared by the toolplot crates:
//! - Plotter configuration (workpiece size, grid resolution, tool)
//! - Tool geometry and depth profiles
//! - Error types and result aliases

pub mod config;
pub mod error;
pub mod tool;

pub use config::{PixelScale, PlotterConfig, PlotterParameters};
pub use error::{ConfigError, ConfigResult, PlotError, PlotResult};
pub use tool::{Tool, ToolShape};
