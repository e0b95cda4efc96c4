//! Diagnostic CLI for the device catalog.
//!
//! Usage:
//!   xdevice-info classify lumi.sensor_ht --category zigbee
//!   xdevice-info buttons lumi.remote.b286acn01
//!
//! Prints the result as JSON. Exits with status 1 when the model is unknown.

use clap::{Parser, Subcommand};
use log::{info, warn};
use std::path::PathBuf;
use std::process::ExitCode;
use xdevice_info::config::Config;
use xdevice_info::{DeviceCatalog, DeviceCategory, DeviceInfoResolver};

#[derive(Debug, Parser)]
#[command(name = "xdevice-info", version, about)]
struct Cli {
    /// Extension spec file merged ahead of the built-in table
    #[arg(long, env = "XDEVICE_EXTENSION_PATH", global = true)]
    extension: Option<PathBuf>,

    /// Use the built-in table only
    #[arg(long, global = true)]
    no_extensions: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Resolve a model to manufacturer, market name, docs URL and converters
    Classify {
        model: String,
        /// gateway, zigbee, ble or mesh
        #[arg(short, long, value_parser = parse_category)]
        category: DeviceCategory,
    },
    /// List the button attributes of a model
    Buttons { model: String },
}

fn parse_category(s: &str) -> Result<DeviceCategory, String> {
    match DeviceCategory::from_marker(s) {
        DeviceCategory::Other(marker) => Err(format!("unsupported category: {}", marker)),
        category => Ok(category),
    }
}

fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

fn print_json<T: serde::Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Failed to serialize result: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    // Load .env file before reading configuration
    xdevice_info::config::load_dotenv();
    init_logger();

    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(path) = cli.extension {
        config.catalog.extension_path = Some(path);
    }
    if cli.no_extensions {
        config.catalog.extensions_enabled = false;
    }

    let catalog = DeviceCatalog::from_config(&config);
    info!("Device catalog ready with {} specs", catalog.len());
    let resolver = DeviceInfoResolver::new(&catalog);

    match cli.command {
        Command::Classify { model, category } => match resolver.classify(&model, &category) {
            Some(device) => print_json(&device),
            None => {
                warn!("No device spec for {} ({})", model, category);
                ExitCode::FAILURE
            }
        },
        Command::Buttons { model } => match resolver.button_attributes(&model) {
            Some(buttons) => print_json(&buttons),
            None => {
                warn!("No device spec lists model {}", model);
                ExitCode::FAILURE
            }
        },
    }
}
