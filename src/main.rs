#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use chainknight_core::config::CONFIG_FILE;
use chainknight_core::{logging, DashboardConfig, LayoutMode, LoadPolicy};
use clap::{Parser, ValueEnum};
use dioxus::desktop::{Config, WindowBuilder};

/// Global data directory, set from command line
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Dashboard configuration after command-line overrides
static CONFIG: OnceLock<DashboardConfig> = OnceLock::new();

/// Get the data directory (set from command line or default)
pub fn get_data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("chainknight")
    })
}

/// Get the effective dashboard configuration
pub fn get_config() -> DashboardConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PolicyArg {
    /// Switch to the tool after a fixed delay
    Fixed,
    /// Switch when the frame reports it has loaded
    Ready,
}

/// ChainKnight - Unified Protocol Dashboard
#[derive(Parser, Debug)]
#[command(name = "chainknight-desktop")]
#[command(about = "ChainKnight - Unified Protocol Dashboard")]
struct Args {
    /// Data directory for the key store and config.json
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Layout: grid, fullscreen or tabs
    #[arg(short, long)]
    layout: Option<LayoutMode>,

    /// When a loading tool becomes active
    #[arg(short, long, value_enum)]
    policy: Option<PolicyArg>,

    /// Tool to open at startup
    #[arg(short, long)]
    open: Option<String>,
}

/// Config file values with command-line flags applied on top.
///
/// An unreadable or invalid file is logged and replaced by defaults so the
/// window still opens.
fn resolve_config(args: &Args, data_dir: &std::path::Path) -> DashboardConfig {
    let mut config = DashboardConfig::load(data_dir.join(CONFIG_FILE)).unwrap_or_else(|e| {
        tracing::error!("Ignoring config file: {}", e);
        DashboardConfig::default()
    });

    if let Some(layout) = args.layout {
        config.layout = layout;
    }
    match args.policy {
        Some(PolicyArg::Fixed) => config.load_policy = LoadPolicy::fixed_delay(),
        Some(PolicyArg::Ready) => config.load_policy = LoadPolicy::ready_signal(),
        None => {}
    }
    if let Some(id) = &args.open {
        config.auto_open = Some(id.clone());
    }

    if let Err(e) = config.validate() {
        tracing::error!("Invalid configuration, using defaults: {}", e);
        return DashboardConfig::default();
    }
    config
}

fn main() {
    logging::init("info");

    let args = Args::parse();

    let data_dir = args.data_dir.clone().unwrap_or_else(get_data_dir);
    let config = resolve_config(&args, &data_dir);

    tracing::info!(
        layout = ?config.layout,
        policy = ?config.load_policy,
        "Starting with data dir: {:?}",
        data_dir
    );

    let _ = DATA_DIR.set(data_dir);
    let _ = CONFIG.set(config);

    let window_width = 1280.0;
    let window_height = 860.0;

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("ChainKnight")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
