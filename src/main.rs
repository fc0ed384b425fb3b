use clap::Parser;
use iv::config::{self, SheetConfig};
use iv::display::{self, Iterm2Display};
use iv::font;
use iv::imaging::RustBackend;
use iv::view::{self, ViewMode};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "iv")]
#[command(version)]
#[command(about = "Display images within an iTerm2 terminal")]
#[command(long_about = "\
Display images within an iTerm2 terminal

iv resizes images to reduce the time taken to display them over SSH
connections, and combines multiple images into a single image, with
filenames.

Usage:

  iv ./file.jpg   # Display a single file, resizing as appropriate.
  iv *.jpg        # Display a number of files combined into a single image, with filenames.

The IV_SIZE environment variable can be used to set the output image size
instead of the -s/--size option. The size limit applies to single images
only; contact sheets always span the terminal width.

Set RUST_LOG=debug to see layout and decoding details on stderr.")]
struct Cli {
    /// Maximum output image width in pixels
    #[arg(short, long, default_value_t = config::DEFAULT_SIZE, env = "IV_SIZE")]
    size: u32,

    /// Image files to display
    #[arg(required = true, value_name = "FILE", value_parser = existing_path)]
    files: Vec<PathBuf>,
}

/// Reject paths that do not exist before any decoding starts.
fn existing_path(value: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(value);
    if path.exists() {
        Ok(path)
    } else {
        Err(format!("Path '{value}' does not exist."))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let cli = Cli::parse();
    init_thread_pool();

    let config = SheetConfig::default();
    let terminal = display::terminal_size();
    let backend = RustBackend::new();
    let mut out = Iterm2Display::stdout();

    match ViewMode::select(cli.files.len(), cli.size, terminal.columns, &config) {
        ViewMode::Single { max_dim } => {
            view::show_single(&backend, &mut out, &cli.files[0], max_dim, &config)?;
        }
        ViewMode::Sheet { viewport_width } => {
            let font = font::resolve(config.fonts, config.caption_size);
            view::show_sheet(
                &backend,
                &mut out,
                font.as_ref(),
                &cli.files,
                viewport_width,
                &config,
            )?;
        }
    }

    Ok(())
}

/// Diagnostics go to stderr; stdout carries the image payload.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Initialize the rayon thread pool used for parallel decoding.
///
/// One worker per available CPU core.
fn init_thread_pool() {
    rayon::ThreadPoolBuilder::new()
        .num_threads(config::effective_threads())
        .build_global()
        .ok();
}
