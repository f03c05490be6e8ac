#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::too_many_lines,
    clippy::cast_precision_loss,
    clippy::struct_excessive_bools,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::cast_lossless
)]

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming};
use icy_runeset::{Runeset, RunesetError};
use std::path::{Path, PathBuf};

mod options;
mod render;

use options::Options;

#[derive(Parser)]
#[command(version, about = "Edit 8x8 bitmap runesets (256 glyphs, 2048 byte files).")]
pub struct Cli {
    #[arg(short, long, help = "The path to the file you want to create or edit.")]
    path: Option<PathBuf>,

    #[arg(short, long, help = "Log debug output.", default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Clone)]
enum Commands {
    #[command(about = "Show all glyph previews (default)")]
    Show,

    #[command(about = "Show the pixel grid of a glyph")]
    Glyph {
        #[arg(value_parser = parse_index)]
        index: i32,
    },

    #[command(about = "Toggle a single pixel")]
    Toggle {
        #[arg(value_parser = parse_index)]
        index: i32,
        x: i32,
        y: i32,
    },

    #[command(about = "Invert all pixels of a glyph")]
    Invert {
        #[arg(value_parser = parse_index)]
        index: i32,
    },

    #[command(about = "Mirror a glyph horizontally")]
    Reverse {
        #[arg(value_parser = parse_index)]
        index: i32,
    },

    #[command(about = "Clear a glyph")]
    Clear {
        #[arg(value_parser = parse_index)]
        index: i32,
    },

    #[command(about = "Copy a glyph over another one")]
    Copy {
        #[arg(value_parser = parse_index)]
        from: i32,
        #[arg(value_parser = parse_index)]
        to: i32,
    },

    #[command(about = "Replace the runeset with a 256x64 black/white image")]
    Import { image: PathBuf },

    #[command(about = "Write the runeset as a 256x64 image")]
    Export { image: PathBuf },
}

/// Accepts decimal or `0x` prefixed hexadecimal glyph indices.
fn parse_index(arg: &str) -> Result<i32, String> {
    let parsed = if let Some(hex) = arg.strip_prefix("0x").or_else(|| arg.strip_prefix("0X")) {
        i32::from_str_radix(hex, 16)
    } else {
        arg.parse::<i32>()
    };
    parsed.map_err(|err| format!("invalid glyph index '{arg}': {err}"))
}

fn start_logger(verbose: bool) -> Option<LoggerHandle> {
    let default_spec = if verbose { "debug" } else { "info" };
    let Some(log_dir) = Options::get_config_dir() else {
        eprintln!("Failed to create log file");
        return None;
    };
    let started = Logger::try_with_env_or_str(default_spec).and_then(|logger| {
        logger
            .log_to_file(FileSpec::default().directory(&log_dir).basename("icy_rune").suffix("log").suppress_timestamp())
            .rotate(Criterion::Size(64 * 1024), Naming::Numbers, Cleanup::KeepLogFiles(3))
            .duplicate_to_stderr(flexi_logger::Duplicate::Warn)
            .start()
    });
    match started {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("Failed to start logger: {err}");
            None
        }
    }
}

/// Load the runeset, creating a new file when there is none.
///
/// An unreadable or corrupt file is never overwritten.
fn open_runeset(path: &Path) -> anyhow::Result<Runeset> {
    println!("Reading file: {}", path.display());
    match icy_runeset::load(path) {
        Ok(Some(runeset)) => {
            println!("Successfully read file...");
            Ok(runeset)
        }
        Ok(None) => {
            println!("File not found, creating new runeset...");
            let runeset = Runeset::new();
            icy_runeset::save(&runeset, path).context("Failed to create new runeset file!")?;
            println!("Runeset created successfully...");
            Ok(runeset)
        }
        Err(err @ RunesetError::FileRead { .. }) => Err(anyhow::Error::new(err).context("Could not read file!")),
        Err(err @ RunesetError::BytesLength { .. }) => Err(anyhow::Error::new(err).context("Not a runeset file, leaving it untouched.")),
        Err(err) => Err(err.into()),
    }
}

fn run(args: Cli, options: Options) -> anyhow::Result<()> {
    let Some(path) = args.path.or(options.default_path.clone()) else {
        bail!("No runeset file given, use --path or set default_path in the options file.");
    };

    let mut runeset = open_runeset(&path)?;
    let command = args.command.unwrap_or(Commands::Show);

    match command {
        Commands::Show => {
            println!("{}", render::overview(&runeset, &options));
            println!("{}", render::overview_caption(&runeset));
            return Ok(());
        }
        Commands::Glyph { index } => {
            let glyph = runeset.read_at(index)?;
            println!("{}", render::edit_grid(&glyph, &options));
            println!("{}", render::glyph_caption(index, &glyph));
            return Ok(());
        }
        Commands::Export { image } => {
            icy_runeset::export_image(&runeset, &image).with_context(|| format!("Failed to export {}", image.display()))?;
            println!("Exported to {}", image.display());
            return Ok(());
        }
        Commands::Toggle { index, x, y } => runeset.toggle_pixel(index, x, y)?,
        Commands::Invert { index } => runeset.invert_glyph(index)?,
        Commands::Reverse { index } => runeset.reverse_glyph(index)?,
        Commands::Clear { index } => runeset.clear_glyph(index)?,
        Commands::Copy { from, to } => runeset.copy_glyph(from, to)?,
        Commands::Import { image } => {
            runeset = icy_runeset::import_image(&image).with_context(|| format!("Failed to import {}", image.display()))?;
        }
    }

    icy_runeset::save(&runeset, &path).with_context(|| format!("Failed to write {}", path.display()))?;
    log::info!("wrote {}", path.display());
    Ok(())
}

fn main() {
    let args = Cli::parse();
    let _logger = start_logger(args.verbose);

    let options = Options::load_options();
    log::info!("Starting icy_rune {}", env!("CARGO_PKG_VERSION"));

    if let Err(err) = run(args, options) {
        log::error!("{err:#}");
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}
