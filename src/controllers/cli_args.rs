use clap::Parser;
use std::{error::Error, fmt};

#[derive(Parser, Debug)]
#[command(about = "Renders the Mandelbrot set with a pool of block-claiming worker threads")]
struct CliArgs {
    /// Number of render worker threads
    workers: usize,

    /// Number of vertical blocks the image is split into
    blocks: usize,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RenderConfigError {
    ZeroWorkers,
    ZeroBlocks,
}

impl fmt::Display for RenderConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWorkers => write!(f, "worker count must be at least 1"),
            Self::ZeroBlocks => write!(f, "block count must be at least 1"),
        }
    }
}

impl Error for RenderConfigError {}

/// Validated worker and block counts for one render run.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    workers: usize,
    blocks: usize,
}

impl RenderConfig {
    pub fn new(workers: usize, blocks: usize) -> Result<Self, RenderConfigError> {
        if workers == 0 {
            return Err(RenderConfigError::ZeroWorkers);
        }

        if blocks == 0 {
            return Err(RenderConfigError::ZeroBlocks);
        }

        Ok(Self { workers, blocks })
    }

    #[must_use]
    pub fn workers(&self) -> usize {
        self.workers
    }

    #[must_use]
    pub fn blocks(&self) -> usize {
        self.blocks
    }
}

/// Parses the command line, exiting with status 1 on any usage error.
pub fn parse_or_exit() -> RenderConfig {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // clap's own exit would use status 2; this program's contract is 1
            let _ = err.print();
            std::process::exit(1);
        }
    };

    match RenderConfig::new(args.workers, args.blocks) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
