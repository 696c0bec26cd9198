//! skyspotter: view FITS images and sky survey cutouts.
//!
//! Renders to PNG files: each redraw rewrites the output image and an
//! `<output>.axes.json` sidecar with the axis tick labels.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use display_session::{Notification, NotificationLevel};
use renderer::ColormapRegistry;
use sky_common::{ScalingMode, SurveyCatalog};
use std::io::Read;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use viewer::script::{parse_script, run_script};
use viewer::{build_controller, ViewerConfig};

#[derive(Parser, Debug)]
#[command(name = "skyspotter", version)]
#[command(about = "FITS image viewer with sky survey search")]
struct Args {
    /// YAML configuration file
    #[arg(long, env = "SKYSPOTTER_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (RUST_LOG overrides)
    #[arg(long, default_value = "info", env = "SKYSPOTTER_LOG_LEVEL")]
    log_level: String,

    /// Log as JSON lines
    #[arg(long)]
    log_json: bool,

    /// Initial colormap
    #[arg(long)]
    colormap: Option<String>,

    /// Initial scaling: Normal, Root or Logarithmic
    #[arg(long)]
    scaling: Option<ScalingMode>,

    /// Start with the colormap inverted
    #[arg(long)]
    invert: bool,

    /// Integer zoom factor for written images
    #[arg(long)]
    zoom: Option<u32>,

    /// Image file rewritten on every redraw
    #[arg(short, long, env = "SKYSPOTTER_OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a FITS file
    Open { file: PathBuf },
    /// Fetch and render a survey image of an object or position
    Search {
        /// Object name or coordinates
        object: String,
        /// Survey identifier (see `surveys`)
        #[arg(short, long, default_value = "DSS")]
        survey: String,
        /// Cutout width and height in pixels
        #[arg(long)]
        pixels: Option<u32>,
    },
    /// List the available colormaps
    Colormaps,
    /// List the available surveys
    Surveys,
    /// Run an event script ("-" reads standard input)
    Script { file: String },
}

fn init_tracing(level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Merge command-line overrides into the file configuration.
fn apply_overrides(args: &Args, config: &mut ViewerConfig) {
    if let Some(colormap) = &args.colormap {
        config.defaults.colormap = colormap.clone();
    }
    if let Some(scaling) = args.scaling {
        config.defaults.scaling = scaling;
    }
    if args.invert {
        config.defaults.inverted = true;
    }
    if let Some(zoom) = args.zoom {
        config.output.zoom = zoom;
    }
    if let Some(output) = &args.output {
        config.output.path = output.clone();
    }
    if let Command::Search {
        pixels: Some(pixels),
        ..
    } = args.command
    {
        config.survey.pixels = pixels;
    }
}

fn print_notification(line: Option<usize>, notification: &Notification) {
    let prefix = line.map(|l| format!("line {}: ", l)).unwrap_or_default();
    match notification.level {
        NotificationLevel::Info => println!("{}{}", prefix, notification),
        NotificationLevel::Warning => eprintln!("{}{}", prefix, notification),
    }
}

fn list_colormaps() {
    for (category, names) in ColormapRegistry::builtin().by_category() {
        println!("{}:", category);
        println!("  {}", names.join(" "));
    }
}

fn list_surveys() {
    for group in SurveyCatalog::skyview().groups() {
        println!("{}:", group.name);
        for id in group.surveys {
            println!("  {}", id);
        }
    }
}

fn read_script(file: &str) -> Result<String> {
    if file == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read script from standard input")?;
        Ok(text)
    } else {
        std::fs::read_to_string(file).with_context(|| format!("Failed to read script: {}", file))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_tracing(&args.log_level, args.log_json);

    let mut config = ViewerConfig::load_or_default(args.config.as_deref())?;
    apply_overrides(&args, &mut config);

    match &args.command {
        Command::Colormaps => list_colormaps(),
        Command::Surveys => list_surveys(),
        Command::Open { file } => {
            let mut controller = build_controller(&config, config.output.path.clone())?;
            controller.open(file)?;
            info!(output = %config.output.path.display(), "Image written");
        }
        Command::Search { object, survey, .. } => {
            let mut controller = build_controller(&config, config.output.path.clone())?;
            controller.search(object, survey).await?;
            info!(output = %config.output.path.display(), "Image written");
        }
        Command::Script { file } => {
            let events = parse_script(&read_script(file)?)?;
            let mut controller = build_controller(&config, config.output.path.clone())?;
            let notifications = run_script(&mut controller, events).await;

            let failures = notifications
                .iter()
                .filter(|(_, n)| n.level == NotificationLevel::Warning)
                .count();
            for (line, notification) in &notifications {
                print_notification(Some(*line), notification);
            }
            if failures > 0 {
                bail!("{} script event(s) failed", failures);
            }
        }
    }

    Ok(())
}
