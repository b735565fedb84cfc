//! rgbcal — map colors to calibrated LED duty cycles from the command line.
//!
//! Loads a calibration table (built-in or JSON), maps requested colors
//! through it, and exports or validates table files.

mod config;
mod sweep;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rgbcal_core::table::{POSITIONS_PER_RING, RING_COUNT};
use rgbcal_core::{
    CalibratedLight, CalibrationCircle, ColorMapper, GridLocation, RecordingDriver, Rgb, RgbwOutput,
};

use crate::config::CliConfig;

#[derive(Parser)]
#[command(name = "rgbcal")]
#[command(about = "Calibrated duty cycles for ring-calibrated RGB LED fixtures")]
struct Cli {
    /// JSON calibration table to use instead of the built-in one
    /// (falls back to the RGBCAL_TABLE environment variable)
    #[arg(long, global = true)]
    table: Option<PathBuf>,

    /// JSON file with mapper options (snap policy, brightness policy)
    #[arg(long, global = true)]
    options: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Map one color to calibrated duty cycles
    Map {
        red: f32,
        green: f32,
        blue: f32,

        /// Brightness, 0.01 (dimmest measured) to 1.0
        #[arg(short, long, default_value_t = 1.0)]
        brightness: f32,

        /// Scale of the color components
        #[arg(long, value_enum, default_value_t = Scale::Unit)]
        scale: Scale,

        /// Print a JSON report instead of plain duty cycles
        #[arg(long)]
        json: bool,
    },
    /// Walk the hue circle at a fixed saturation and print every output
    Sweep {
        /// Smallest 8-bit color component (0 = fully saturated)
        #[arg(long, default_value_t = 0)]
        min_component: u8,

        /// Brightness, 0.01 to 1.0
        #[arg(short, long, default_value_t = 1.0)]
        brightness: f32,

        /// Hue step in degrees
        #[arg(long, default_value_t = 15.0)]
        step: f32,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Write the active calibration table as JSON
    Export {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate a JSON calibration table
    Check { path: PathBuf },
}

/// How color components are given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Scale {
    /// Normalized, 0.0 to 1.0
    Unit,
    /// 8-bit, 0 to 255
    Byte,
}

impl Scale {
    fn color(self, red: f32, green: f32, blue: f32) -> Rgb {
        match self {
            Self::Unit => Rgb::new(red, green, blue),
            Self::Byte => Rgb::new(red / 255.0, green / 255.0, blue / 255.0),
        }
    }
}

#[derive(Serialize)]
struct MapReport {
    input: Rgb,
    brightness: f32,
    hue: f32,
    ring_level: f32,
    rings: [usize; 2],
    positions: [usize; 2],
    output: RgbwOutput,
}

impl MapReport {
    fn new(input: Rgb, brightness: f32, location: GridLocation, output: RgbwOutput) -> Self {
        Self {
            input,
            brightness,
            hue: location.hue,
            ring_level: location.ring_level,
            rings: [location.ring_low, location.ring_high],
            positions: [location.position_low, location.position_high],
            output,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rgbcal=warn,rgbcal_core=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let config = CliConfig::resolve(cli.table, cli.options.as_deref())?;

    match cli.command {
        Commands::Map {
            red,
            green,
            blue,
            brightness,
            scale,
            json,
        } => run_map_command(&config, scale.color(red, green, blue), brightness, json),
        Commands::Sweep {
            min_component,
            brightness,
            step,
            json,
        } => run_sweep_command(&config, min_component, brightness, step, json),
        Commands::Export { output } => run_export_command(&config, output),
        Commands::Check { path } => run_check_command(&path),
    }
}

fn run_map_command(
    config: &CliConfig,
    color: Rgb,
    brightness: f32,
    json: bool,
) -> anyhow::Result<()> {
    let circle = config.load_circle()?;
    let mapper = ColorMapper::with_options(&circle, config.options);
    let mut light = CalibratedLight::new(mapper);
    let mut driver = RecordingDriver::default();
    let output = light.apply(color, brightness, &mut driver);

    if json {
        let report = MapReport::new(color, brightness, mapper.locate(color), output);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{:.4} {:.4} {:.4} {:.4}",
            output.red, output.green, output.blue, output.white
        );
    }
    Ok(())
}

fn run_sweep_command(
    config: &CliConfig,
    min_component: u8,
    brightness: f32,
    step: f32,
    json: bool,
) -> anyhow::Result<()> {
    sweep::check_step(step)?;
    let circle = config.load_circle()?;
    let mapper = ColorMapper::with_options(&circle, config.options);
    let rows = sweep::sweep(&mapper, f32::from(min_component) / 255.0, brightness, step);

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }
    println!("{:>7}  {:<22}  output", "hue", "input");
    for row in rows {
        println!("{:>6.1}°  {:<22}  {}", row.hue, row.input.to_string(), row.output);
    }
    Ok(())
}

fn run_export_command(config: &CliConfig, output: Option<PathBuf>) -> anyhow::Result<()> {
    let circle = config.load_circle()?;
    match output {
        Some(path) => {
            circle
                .save(&path)
                .with_context(|| format!("exporting {}", config.table_label()))?;
            eprintln!("wrote {} to {}", config.table_label(), path.display());
        }
        None => println!("{}", circle.to_json_pretty()?),
    }
    Ok(())
}

fn run_check_command(path: &Path) -> anyhow::Result<()> {
    let circle = CalibrationCircle::load(path)
        .with_context(|| format!("checking {}", path.display()))?;
    println!(
        "{}: ok ({} rings × {} points, {} measurements)",
        path.display(),
        RING_COUNT,
        POSITIONS_PER_RING,
        circle.points().count() * 2
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_map_arguments_parse() {
        let cli = Cli::try_parse_from([
            "rgbcal", "map", "255", "0", "63", "--scale", "byte", "-b", "0.5",
        ])
        .expect("valid arguments");
        match cli.command {
            Commands::Map {
                red,
                blue,
                brightness,
                scale,
                ..
            } => {
                assert_eq!(scale, Scale::Byte);
                assert_eq!(brightness, 0.5);
                let color = scale.color(red, 0.0, blue);
                assert_eq!(color.red, 1.0);
                assert!((color.blue - 63.0 / 255.0).abs() < 1e-6);
            }
            _ => panic!("expected map command"),
        }
    }

    #[test]
    fn test_global_table_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["rgbcal", "export", "--table", "t.json"])
            .expect("global flag accepted after subcommand");
        assert_eq!(cli.table, Some(PathBuf::from("t.json")));
    }

    #[test]
    fn test_sweep_command_rejects_tiny_step() {
        let err = run_sweep_command(&CliConfig::default(), 0, 1.0, 1e-30, false).unwrap_err();
        assert!(err.to_string().contains("hue step"), "got {err}");
    }

    #[test]
    fn test_report_carries_grid_location() {
        let mapper = ColorMapper::default();
        let color = Rgb::new(1.0, 0.0, 0.0);
        let report = MapReport::new(color, 1.0, mapper.locate(color), mapper.map(color, 1.0));
        let value = serde_json::to_value(&report).expect("serializes");
        assert_eq!(value["rings"], serde_json::json!([0, 0]));
        assert_eq!(value["output"]["white"], 0.0);
    }
}
