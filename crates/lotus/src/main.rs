//! Lotus CLI - brand asset generator for manual PNG export.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "lotus")]
#[command(about = "Generate the lotus logo and OGP image template")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to lotus.toml config file
    #[arg(short, long, default_value = "lotus.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default lotus.toml
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        yes: bool,
    },

    /// Generate logo.svg, logo.html and ogp-generator.html
    Generate {
        /// Output directory (defaults to config or "public/assets")
        #[arg(short, long, env = "LOTUS_OUTPUT_DIR")]
        output: Option<PathBuf>,

        /// OGP image title
        #[arg(long)]
        title: Option<String>,

        /// OGP image subtitle
        #[arg(long)]
        subtitle: Option<String>,

        /// Also write og-image.svg, a standalone OGP preview card
        #[arg(long)]
        svg_ogp: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes)?;
        }
        Commands::Generate {
            output,
            title,
            subtitle,
            svg_ogp,
        } => {
            let overrides = commands::generate::Overrides {
                output,
                title,
                subtitle,
                ogp_svg: svg_ogp,
            };
            commands::generate::run(&cli.config, overrides)?;
        }
    }

    Ok(())
}
