//! Brandkit - design token build tool
//!
//! Builds CSS custom properties, nested JSON, Tailwind presets, and MUI theme
//! modules for every configured brand and mode.

use anyhow::Result;
use brandkit_cli::{build, create_project, render_one, BrandkitConfig};
use brandkit_tokens::{Brand, Format, Mode};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Design token build tool for the Runwell brand kit
#[derive(Parser, Debug)]
#[command(name = "brandkit")]
#[command(about = "Build brand/mode design token artifacts")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build every artifact into the output directory
    Build {
        /// Config file or directory containing brandkit.toml
        #[arg(short, long, default_value = ".")]
        config: PathBuf,

        /// Restrict the build to these brands
        #[arg(short, long, value_parser = parse_brand)]
        brand: Vec<Brand>,
    },

    /// Print one artifact to stdout
    Render {
        /// Config file or directory containing brandkit.toml
        #[arg(short, long, default_value = ".")]
        config: PathBuf,

        /// Output format (css/variables, json/nested, tailwind/preset, mui/theme)
        #[arg(short, long, value_parser = parse_format)]
        format: Format,

        #[arg(short, long, value_parser = parse_brand, default_value = "external")]
        brand: Brand,

        #[arg(short, long, value_parser = parse_mode, default_value = "light")]
        mode: Mode,
    },

    /// Scaffold a new token project
    Init {
        /// Project directory
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Project name (defaults to the directory name)
        #[arg(short, long)]
        name: Option<String>,
    },
}

fn parse_brand(s: &str) -> Result<Brand, String> {
    s.parse().map_err(|err: brandkit_tokens::TokenError| err.to_string())
}

fn parse_mode(s: &str) -> Result<Mode, String> {
    s.parse().map_err(|err: brandkit_tokens::TokenError| err.to_string())
}

fn parse_format(s: &str) -> Result<Format, String> {
    s.parse().map_err(|err: brandkit_tokens::TokenError| err.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Build { config, brand } => {
            let loaded = BrandkitConfig::load_from_dir(&config)?;
            let report = build(&loaded, &brand)?;
            for path in &report.written {
                tracing::debug!("  {}", path.display());
            }
        }
        Command::Render {
            config,
            format,
            brand,
            mode,
        } => {
            let loaded = BrandkitConfig::load_from_dir(&config)?;
            print!("{}", render_one(&loaded, format, brand, mode)?);
        }
        Command::Init { path, name } => {
            let name = name.unwrap_or_else(|| {
                path.canonicalize()
                    .ok()
                    .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
                    .unwrap_or_else(|| "brand-tokens".to_string())
            });
            create_project(&path, &name)?;
        }
    }

    Ok(())
}
