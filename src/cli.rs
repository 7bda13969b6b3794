use std::path::PathBuf;

use clap::Parser;

use license_normalizr::models::LicenseSource;

#[derive(Parser, Debug)]
#[command(
    name = "license-normalizr",
    about = "Resolve declared dependency licenses into SPDX identifiers",
    version
)]
pub struct Cli {
    /// Dependency metadata JSON file, or `-` for stdin
    #[arg(default_value = "-")]
    pub input: PathBuf,

    /// Config file [default: ./.license-normalizr/config.toml, fallback ~/.config/license-normalizr/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// License field to match, in priority order (repeatable; overrides the config)
    #[arg(long = "source", value_name = "SOURCE")]
    pub sources: Vec<SourceArg>,

    /// Write artifact details to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Emit single-line JSON
    #[arg(long)]
    pub compact: bool,

    /// Log each dependency as it is normalized
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress the summary line
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SourceArg {
    Name,
    Url,
}

impl From<SourceArg> for LicenseSource {
    fn from(arg: SourceArg) -> Self {
        match arg {
            SourceArg::Name => LicenseSource::Name,
            SourceArg::Url => LicenseSource::Url,
        }
    }
}
