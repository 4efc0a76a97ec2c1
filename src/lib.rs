//! # toolplot
//!
//! Plot the heightmap a CNC tool leaves behind. Tool-center samples are read from stdin as
//! native-endian `f32` triples (x, y, z); at end of input the minimum depth of every pixel
//! is written to stdout as native-endian `f32`s, row-major.
//!
//! ## Architecture
//!
//! 1. **toolplot-core** - Plotter configuration, tool geometry, errors
//! 2. **toolplot-heightmap** - Depth grid, toolpoint rasterizer, stream driver
//! 3. **toolplot** - Command line, logging, exit status

pub mod cli;

pub use cli::Cli;
pub use toolplot_core::{PlotterConfig, PlotterParameters, Tool, ToolShape};
pub use toolplot_heightmap::{plot_stream, PlotStats};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Environment variable selecting the log format (`json` or anything else for text)
pub const LOG_FORMAT_ENV: &str = "TOOLPLOT_LOG_FORMAT";

/// Log line layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

impl LogFormat {
    /// Read the format from [`LOG_FORMAT_ENV`].
    pub fn from_env() -> Self {
        match std::env::var(LOG_FORMAT_ENV) {
            Ok(v) if v.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Initialize logging
///
/// Sets up structured logging with:
/// - Output on stderr; stdout carries the heightmap
/// - RUST_LOG environment variable support, `warn` when unset
/// - Text or JSON lines depending on `format`
pub fn init_logging(format: LogFormat) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    let registry = tracing_subscriber::registry().with(env_filter);
    match format {
        LogFormat::Json => registry.with(fmt_layer.json()).try_init()?,
        LogFormat::Text => registry.with(fmt_layer).try_init()?,
    }

    Ok(())
}

/// Validate `params` and plot stdin into stdout.
pub fn run(params: &PlotterParameters) -> anyhow::Result<PlotStats> {
    use std::io::{self, BufReader, BufWriter};

    let config = PlotterConfig::from_parameters(params)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let input = BufReader::new(stdin.lock());
    let output = BufWriter::new(stdout.lock());

    Ok(plot_stream(&config, input, output)?)
}
