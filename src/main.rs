use clap::{Parser, Subcommand};
use instasquare::config::{self, AppConfig};
use instasquare::imaging;
use instasquare::library::DirectoryLibrary;
use instasquare::output;
use instasquare::picker::FilePicker;
use instasquare::studio::{SelectionReport, Studio};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "instasquare")]
#[command(about = "Pad a photo to a white square and save it to a library")]
#[command(long_about = "\
Pad a photo to a white square and save it to a library

The photo is placed unscaled at the top-left of a square canvas as wide as
its longer edge; the rest of the canvas is white. Already-square photos are
left untouched.

  300x150 landscape  →  300x300, white band along the bottom
  100x200 portrait   →  200x200, white band along the right

Supported inputs: JPEG, PNG, TIFF, WebP. EXIF rotation is applied first.

Run 'instasquare gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Config file (missing file = stock defaults)
    #[arg(long, default_value = "config.toml", global = true)]
    config: PathBuf,

    /// Library directory (overrides library.dir)
    #[arg(long, global = true)]
    library: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Square a photo and save it to the library
    Square {
        /// Photo to square
        input: PathBuf,
        /// Show the result without saving
        #[arg(long)]
        no_save: bool,
        /// Print a JSON report instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show the canvas a photo would get, without writing anything
    Check {
        /// Photo to inspect
        input: PathBuf,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

/// Machine-readable result of `square --json`.
#[derive(Serialize)]
struct SquareReport<'a> {
    selection: &'a SelectionReport,
    saved: Option<&'a instasquare::library::SavedAsset>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Command::Square {
            input,
            no_save,
            json,
        } => {
            let app_config = load_app_config(&cli.config, cli.library.as_deref())?;
            let library = DirectoryLibrary::from_config(&app_config.library);
            let mut studio = Studio::new(FilePicker::new(&input), library)
                .with_max_canvas_pixels(app_config.picker.max_canvas_pixels);

            let selection = studio.pick()?;
            if let SelectionReport::Failed { reason } = &selection {
                if json {
                    print_json(&SquareReport {
                        selection: &selection,
                        saved: None,
                    })?;
                } else {
                    output::print_selection(&selection);
                }
                return Err(format!("no image selected: {reason}").into());
            }

            let saved = if no_save { None } else { studio.save()? };
            if json {
                print_json(&SquareReport {
                    selection: &selection,
                    saved: saved.as_ref(),
                })?;
            } else {
                output::print_selection(&selection);
                if !no_save {
                    output::print_saved(saved.as_ref());
                }
            }
        }
        Command::Check { input } => {
            let app_config = load_app_config(&cli.config, cli.library.as_deref())?;
            let bytes = std::fs::read(&input)?;
            let image = imaging::decode(&bytes, app_config.picker.max_canvas_pixels)?;
            let name = input
                .file_name()
                .map(|f| f.to_string_lossy().into_owned())
                .unwrap_or_else(|| input.display().to_string());
            output::print_check(&name, image.dimensions());
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Load config and apply command-line overrides.
fn load_app_config(path: &Path, library: Option<&Path>) -> Result<AppConfig, config::ConfigError> {
    let mut app_config = config::load_config(path)?;
    if let Some(dir) = library {
        app_config.library.dir = dir.display().to_string();
        app_config.validate()?;
    }
    log::debug!("config: {app_config:?}");
    Ok(app_config)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
