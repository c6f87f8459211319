//! Room SVG CLI
//!
//! Usage:
//!   room-svg [OPTIONS] [FILE]
//!
//! Options:
//!   -r, --room <NAME>         Room to export (by name or number)
//!   -l, --loop <INDEX>        Boundary loop to export (0 = outer boundary)
//!   -c, --config <FILE>       Export configuration (TOML format)
//!   -s, --canvas-size <N>     Edge length of the square target canvas
//!       --viewer-url <URL>    Viewer base URL
//!       --local               Use the viewer on localhost
//!       --url                 Print the viewer URL instead of the path data
//!       --open                Open the viewer URL in the default browser
//!   -v, --verbose             Increase log verbosity
//!   -h, --help                Print help

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::{fmt, EnvFilter};

use room_svg::{export_model, viewer, ExportConfig, RoomModel, ViewerConfig};

#[derive(Parser)]
#[command(name = "room-svg")]
#[command(about = "Export a room boundary loop as normalized SVG path data")]
struct Cli {
    /// Room file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Room to export, by name or number (required when the file holds several rooms)
    #[arg(short, long)]
    room: Option<String>,

    /// Boundary loop to export (0 is the outer boundary)
    #[arg(short = 'l', long = "loop")]
    loop_index: Option<usize>,

    /// Export configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Edge length of the square target canvas
    #[arg(short = 's', long, value_parser = clap::value_parser!(u32).range(1..))]
    canvas_size: Option<u32>,

    /// Viewer base URL
    #[arg(long, conflicts_with = "local")]
    viewer_url: Option<String>,

    /// Use the viewer running on localhost
    #[arg(long)]
    local: bool,

    /// Print the viewer URL instead of the bare path data
    #[arg(long)]
    url: bool,

    /// Open the viewer URL with the platform's default opener
    #[arg(long)]
    open: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_configuration(&cli);

    let (source, filename) = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let model = match RoomModel::from_str(&source) {
        Ok(model) => model,
        Err(e) => {
            eprint!("{}", e.format(&source, &filename));
            if e.span().is_none() {
                eprintln!();
            }
            std::process::exit(1);
        }
    };

    let export = match export_model(&model, &config) {
        Ok(export) => export,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if cli.url {
        println!("{}", export.url);
    } else {
        println!("{}", export.path);
    }

    if cli.open {
        if let Err(e) = viewer::launch(&export.url) {
            error!(error = %e, "failed to open viewer");
            eprintln!("Error opening viewer: {}", e);
            std::process::exit(1);
        }
    }
}

/// Build the export configuration: file first, then command line overrides
fn load_configuration(cli: &Cli) -> ExportConfig {
    let mut config = match &cli.config {
        Some(path) => match ExportConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config: {}", e);
                std::process::exit(1);
            }
        },
        None => ExportConfig::default(),
    };

    if let Some(room) = &cli.room {
        config.room = Some(room.clone());
    }
    if let Some(index) = cli.loop_index {
        config.loop_index = index;
    }
    if let Some(size) = cli.canvas_size {
        config.svg.canvas_size = size;
    }
    if cli.local {
        config.viewer = ViewerConfig::local();
    }
    if let Some(url) = &cli.viewer_url {
        config.viewer = ViewerConfig::new().with_base_url(url.clone());
    }

    debug!(?config, "resolved export configuration");
    config
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
