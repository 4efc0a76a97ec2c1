//! Command line interface
//!
//! Seven positional arguments, all required:
//!
//! ```text
//! toolplot mmwidth mmheight mmdepth pxwidth pxheight mmtooldiameter toolshape
//! ```

use clap::error::ErrorKind;
use clap::Parser;

use toolplot_core::{PlotterParameters, ToolShape};

/// Exit status for usage errors
pub const USAGE_EXIT_CODE: i32 = 1;

const AFTER_HELP: &str = "\
Reads tool-center samples from stdin as native-endian f32 triples (x, y, z) until end of \
input, then writes pxwidth*pxheight native-endian f32 depths to stdout, row-major. Pixels \
no tool sample covered hold the largest finite f32.

Example:
  toolplot 20.5 10.3 5 800 400 6 ball < toolpoints.bin > heightmap.bin";

/// Plot toolpath samples into a minimum-depth heightmap
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(
    name = "toolplot",
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")"),
    after_help = AFTER_HELP
)]
pub struct Cli {
    /// Workpiece width in mm
    #[arg(allow_negative_numbers = true)]
    pub mmwidth: f32,

    /// Workpiece height in mm
    #[arg(allow_negative_numbers = true)]
    pub mmheight: f32,

    /// Workpiece depth in mm (informational)
    #[arg(allow_negative_numbers = true)]
    pub mmdepth: f32,

    /// Heightmap width in pixels
    pub pxwidth: usize,

    /// Heightmap height in pixels
    pub pxheight: usize,

    /// Tool diameter in mm
    #[arg(allow_negative_numbers = true)]
    pub mmtooldiameter: f32,

    /// Tool shape: "ball" for a ball end mill, anything else plots a flat end mill
    pub toolshape: String,
}

impl Cli {
    /// Parse the process arguments.
    ///
    /// `--help` and `--version` print and exit 0. Any other parse failure, including a
    /// wrong argument count, prints the diagnostic to stderr and exits with
    /// [`USAGE_EXIT_CODE`].
    pub fn parse_args() -> Self {
        match Self::try_parse() {
            Ok(cli) => cli,
            Err(err) => match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
                _ => {
                    let _ = err.print();
                    std::process::exit(USAGE_EXIT_CODE);
                }
            },
        }
    }

    pub fn tool_shape(&self) -> ToolShape {
        ToolShape::from_name(&self.toolshape)
    }

    pub fn to_parameters(&self) -> PlotterParameters {
        PlotterParameters {
            width: self.mmwidth,
            height: self.mmheight,
            depth: self.mmdepth,
            width_px: self.pxwidth,
            height_px: self.pxheight,
            tool_diameter: self.mmtooldiameter,
            tool_shape: self.tool_shape(),
        }
    }
}
