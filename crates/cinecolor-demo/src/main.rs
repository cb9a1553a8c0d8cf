//! CineColor Demo — command-line front end for the color temperature lab.
//!
//! Drives the same simulation state a UI would and prints the resulting
//! colors as text or as JSON messages for a renderer to consume.

mod commands;
mod config;
mod error;
mod ipc;
mod render;

use std::io::Write;
use std::process::ExitCode;

use cinecolor_core::{
    KELVIN_MAX, KELVIN_MIN, KELVIN_STEP, NEUTRAL_KELVIN, OverlayModel, ScenarioType,
};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::FrameRequest;
use crate::config::AppConfig;
use crate::error::DemoError;
use crate::ipc::DemoToUi;

#[derive(Parser)]
#[command(name = "cinecolor-demo")]
#[command(about = "See how light temperature and white balance color a scene")]
struct Cli {
    /// Print JSON messages instead of text (also CINECOLOR_JSON)
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate subject and background colors for one setting
    Frame {
        /// Scenario id: "sunset" or "blue_hour" (also CINECOLOR_SCENARIO)
        #[arg(short, long)]
        scenario: Option<ScenarioType>,

        /// Light temperature in Kelvin
        #[arg(short, long)]
        light: Option<f64>,

        /// Camera white balance in Kelvin
        #[arg(short, long)]
        wb: Option<f64>,

        /// Match white balance to the light
        #[arg(long)]
        auto_white: bool,

        /// Show the scenario's original temperatures
        #[arg(long)]
        compare: bool,

        /// Background overlay model
        #[arg(long, value_enum, default_value_t = OverlayArg::Anchored)]
        overlay: OverlayArg,
    },
    /// Tabulate colors across a range of white balance settings
    Sweep {
        /// First white balance setting in Kelvin
        #[arg(long, default_value_t = KELVIN_MIN)]
        from: f64,

        /// Last white balance setting in Kelvin
        #[arg(long, default_value_t = KELVIN_MAX)]
        to: f64,

        /// Increment in Kelvin
        #[arg(long, default_value_t = KELVIN_STEP)]
        step: f64,

        /// Light temperature held fixed during the sweep
        #[arg(short, long, default_value_t = NEUTRAL_KELVIN)]
        light: f64,

        /// Background overlay model
        #[arg(long, value_enum, default_value_t = OverlayArg::Anchored)]
        overlay: OverlayArg,
    },
    /// List the built-in scenarios
    Scenarios,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OverlayArg {
    /// Neutral-to-anchor interpolation
    Anchored,
    /// Earlier inverted-Kelvin model
    KelvinRemap,
}

impl From<OverlayArg> for OverlayModel {
    fn from(arg: OverlayArg) -> Self {
        match arg {
            OverlayArg::Anchored => Self::Anchored,
            OverlayArg::KelvinRemap => Self::KelvinRemap,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), DemoError> {
    let scenario_flag = match &cli.command {
        Commands::Frame { scenario, .. } => *scenario,
        _ => None,
    };
    let config = AppConfig::default().with_overrides(scenario_flag, cli.json);
    tracing::debug!(?config, "starting");

    let message = match cli.command {
        Commands::Frame {
            light,
            wb,
            auto_white,
            compare,
            overlay,
            ..
        } => commands::frame(&FrameRequest {
            scenario: config.scenario,
            light_kelvin: light,
            wb_kelvin: wb,
            auto_white,
            compare,
            overlay_model: overlay.into(),
        })?,
        Commands::Sweep {
            from,
            to,
            step,
            light,
            overlay,
        } => commands::sweep(from, to, step, light, overlay.into())?,
        Commands::Scenarios => commands::scenarios(),
    };

    let text = if config.json {
        serde_json::to_string_pretty(&message)?
    } else {
        to_text(&message)
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", text.trim_end())?;
    Ok(())
}

fn to_text(message: &DemoToUi) -> String {
    match message {
        DemoToUi::Frame {
            overlay_model,
            frame,
        } => render::frame_text(frame, *overlay_model),
        DemoToUi::Sweep {
            overlay_model,
            rows,
        } => render::sweep_text(rows, *overlay_model),
        DemoToUi::Scenarios { scenarios } => render::scenarios_text(scenarios),
    }
}
