//! Command-line entry point for embedding a font file as a C++ header.
//!
//! ```bash
//! # Embed the default font next to the executable
//! fontembed
//!
//! # Embed an explicit font into an explicit header
//! fontembed ./NanumGothic-Regular-subset.ttf ./include/font.hpp
//!
//! # Fail if the header is out of date
//! fontembed --check ./font.ttf ./font.hpp
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use fontembed::Freshness;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Embed a binary font file as a `font_data` array in a C++ header.
#[derive(Parser, Debug)]
#[command(name = "fontembed")]
#[command(author, version)]
struct Args {
    /// Font file to embed (default: NanumGothic-Regular-subset.ttf in the
    /// asset directory)
    input: Option<PathBuf>,

    /// Header file to write (default: font.hpp in the asset directory)
    output: Option<PathBuf>,

    /// Directory holding the default font and header (default: the
    /// directory of this executable)
    #[arg(long)]
    asset_dir: Option<PathBuf>,

    /// Only report whether the header is up to date; never write
    #[arg(long)]
    check: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    /// Resolve input and output paths, filling in defaults from the asset
    /// directory.
    fn paths(&self) -> Result<(PathBuf, PathBuf)> {
        if let (Some(input), Some(output)) = (&self.input, &self.output) {
            return Ok((input.clone(), output.clone()));
        }

        let asset_dir = match &self.asset_dir {
            Some(asset_dir) => asset_dir.clone(),
            None => executable_dir()?,
        };

        debug!("Using asset directory {:?}", asset_dir);

        let (default_input, default_output) = fontembed::default_paths(&asset_dir);

        Ok((
            self.input.clone().unwrap_or(default_input),
            self.output.clone().unwrap_or(default_output),
        ))
    }
}

fn executable_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()
        .context("Unable to locate the running executable")?;

    exe.parent()
        .map(|dir| dir.to_path_buf())
        .context("Executable has no parent directory")
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // RUST_LOG takes precedence over -v.
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(env_filter) => env_filter,
        Err(_) => EnvFilter::new(level),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.verbose);

    let (input, output) = args.paths()?;

    if args.check {
        let freshness = fontembed::check(&input, &output)
            .with_context(|| format!("Failed to check {}", output.display()))?;

        return Ok(match freshness {
            Freshness::UpToDate => ExitCode::SUCCESS,
            Freshness::Stale => {
                eprintln!(
                    "{} is out of date with {}",
                    output.display(),
                    input.display()
                );
                ExitCode::FAILURE
            }
            Freshness::Missing => {
                eprintln!("{} does not exist", output.display());
                ExitCode::FAILURE
            }
        });
    }

    fontembed::embed(&input, &output)
        .with_context(|| format!("Failed to embed {}", input.display()))?;

    Ok(ExitCode::SUCCESS)
}
