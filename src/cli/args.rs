//! Command line argument parsing and validation.

use clap::Parser;
use std::path::PathBuf;

/// Minimum number of input images the CLI accepts (a 16px and a 32px variant).
pub const MIN_INPUTS: usize = 2;

/// Pack pre-rendered PNG images into a Windows .ico file
#[derive(Parser, Debug)]
#[command(
    name = "pack_ico",
    version,
    about = "Pack pre-rendered PNG images into a Windows .ico file",
    long_about = "Pack pre-rendered PNG images into a multi-resolution Windows .ico file.

Each image's size is taken from its filename (16x16.png, 32x32.png, ...).
Images are sorted smallest first and embedded as-is.

Usage:
  pack_ico app.ico icons/16x16.png icons/32x32.png
  pack_ico app.ico icons/*.png"
)]
pub struct Args {
    /// Output .ico path
    #[arg(index = 1, value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Input PNG images, named <size>x<size>.png
    #[arg(index = 2, value_name = "PNG", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Log each image as it is packed
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress the success message
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.inputs.len() < MIN_INPUTS {
            return Err(format!(
                "at least {} input images are required, got {}",
                MIN_INPUTS,
                self.inputs.len()
            ));
        }

        Ok(())
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    output: super::OutputManager,
}

impl RuntimeConfig {
    /// Get a reference to the output manager
    pub fn output(&self) -> &super::OutputManager {
        &self.output
    }
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        Self {
            output: super::OutputManager::new(args.verbose, args.quiet),
        }
    }
}
