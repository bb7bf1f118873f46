//! markframe CLI — template-driven markdown styling and export.
//!
//! Usage:
//!   markframe templates               List available templates
//!   markframe export <INPUT.md>       Export a styled document

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use markframe::commands;

#[derive(Parser)]
#[command(
    name = "markframe",
    about = "Style markdown documents with templates and export them as SVG or JPEG",
    version
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available templates
    Templates,

    /// Export a markdown document as a styled image
    Export {
        /// Path to the markdown source
        input: PathBuf,

        /// Template id (unknown ids fall back to the first template)
        #[arg(short, long, default_value = "classic")]
        template: String,

        /// Output format: svg, jpg, or both
        #[arg(short, long, default_value = "svg")]
        format: String,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        out: PathBuf,

        /// JPEG quality factor [0.0, 1.0]
        #[arg(long, default_value = "0.95")]
        quality: f32,

        /// Override the base font size (12-24 px)
        #[arg(long)]
        font_size: Option<u32>,

        /// Override the font family stack
        #[arg(long)]
        font_family: Option<String>,

        /// Override the line height (1.0-2.5)
        #[arg(long)]
        line_height: Option<f32>,

        /// Override the text color (hex or named)
        #[arg(long)]
        text_color: Option<String>,

        /// Override the background color (hex or named)
        #[arg(long)]
        background_color: Option<String>,

        /// Override the container padding (0-50 px)
        #[arg(long)]
        padding: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    match cli.command {
        Commands::Templates => commands::templates::run(),
        Commands::Export {
            input,
            template,
            format,
            out,
            quality,
            font_size,
            font_family,
            line_height,
            text_color,
            background_color,
            padding,
        } => {
            let overrides = commands::export::Overrides {
                font_size,
                font_family,
                line_height,
                text_color,
                background_color,
                padding,
            };
            commands::export::run(input, template, format, out, quality, overrides).await
        }
    }
}
