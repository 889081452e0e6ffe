//! # Ride Designer CLI
//!
//! Terminal front end for ride_core: one-shot wind load profiles, tagged
//! JSON calculation requests, the interactive design wizard and the
//! equation reference.
//!
//! Set `RUST_LOG=debug` to see cache and wizard events on stderr.

mod render;
mod wizard;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ride_core::calculations::wind::{calculate_cached, WindLoadInput};
use ride_core::calculations::{CalculationItem, CalculationOutput};
use ride_core::equations::{angular_velocity_from_rpm, generate_equations_markdown};
use ride_core::ride::whole_meters;
use ride_core::{CalcError, CalcResult, Settings, WizardState};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ride_cli")]
#[command(about = "Amusement ride design calculations")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Wind load profile over the structure height (BS EN 1991-1-4)
    Wind {
        /// Total structure height (m), truncated to whole meters
        #[arg(long, default_value_t = 66.7)]
        height: f64,

        /// Wheel rotation speed (rpm)
        #[arg(long, default_value_t = 2.0)]
        rpm: f64,

        /// Angular velocity (rad/s), overrides --rpm
        #[arg(long)]
        omega: Option<f64>,

        /// Gravitational acceleration (m/s²)
        #[arg(long, default_value_t = 9.81)]
        gravity: f64,

        /// Air density (kg/m³)
        #[arg(long, default_value_t = 1.225)]
        air_density: f64,

        /// Settings file providing the wind code constants
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Step through a Ferris wheel design interactively
    Wizard {
        /// Settings file with initial parameters and wind constants
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Run a tagged JSON calculation request, e.g. {"type": "Motor", ...}
    Calc {
        /// Request file
        file: PathBuf,
    },

    /// Print the equation reference as Markdown
    Equations {
        /// Write the reference to a file instead of stdout
        #[arg(long, value_name = "PATH", num_args = 0..=1, default_missing_value = EQUATIONS_PATH)]
        write: Option<PathBuf>,
    },

    /// Print the default settings as JSON
    Settings,
}

/// Checked-in equation reference, relative to the workspace root
const EQUATIONS_PATH: &str = "ride_core/src/equations/EQUATIONS.md";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {:#}", e);
        if let Some(calc) = e.downcast_ref::<CalcError>() {
            if let Ok(json) = serde_json::to_string_pretty(calc) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Wind {
            height,
            rpm,
            omega,
            gravity,
            air_density,
            config,
            json,
        } => {
            let settings = Settings::load_or_default(config.as_deref())?;
            let omega = omega.unwrap_or_else(|| angular_velocity_from_rpm(rpm));
            let input = WindLoadInput::new(whole_meters(height), omega, gravity, air_density)
                .with_constants(settings.wind);
            debug!(height_m = input.height_m, omega, "wind command");

            let result = calculate_cached(&input)?;
            if json {
                let text = serde_json::to_string_pretty(result.as_ref()).context("serializing wind result")?;
                println!("{}", text);
            } else {
                print!("{}", render::wind_report(&result));
            }
        }

        Commands::Wizard { config } => {
            let settings = Settings::load_or_default(config.as_deref())?;
            println!("Ride Designer - Amusement Ride Design Wizard");
            let stdin = io::stdin();
            let state = wizard::run(WizardState::with_settings(settings), stdin.lock(), io::stdout())?;
            debug!(step = state.step_number(), "wizard session ended");
        }

        Commands::Calc { file } => {
            let request = fs::read_to_string(&file)
                .map_err(|e| CalcError::file_error("read", file.display().to_string(), e.to_string()))?;
            let output = run_request(&request)?;
            println!("{}", serde_json::to_string_pretty(&output)?);
        }

        Commands::Equations { write } => {
            let markdown = generate_equations_markdown();
            match write {
                Some(path) => write_equations(&path, &markdown)?,
                None => print!("{}", markdown),
            }
        }

        Commands::Settings => {
            println!("{}", Settings::default().to_json_pretty()?);
        }
    }
    Ok(())
}

/// Parse a tagged calculation request and run it.
fn run_request(json: &str) -> CalcResult<CalculationOutput> {
    let item: CalculationItem = serde_json::from_str(json)?;
    debug!(calc_type = item.calc_type(), "calculation request");
    item.run()
}

fn write_equations(path: &Path, markdown: &str) -> Result<()> {
    fs::write(path, markdown).with_context(|| format!("writing {}", path.display()))?;
    println!("Wrote {} bytes to {}", markdown.len(), path.display());
    Ok(())
}
