//! ChainKnight CLI
//!
//! Headless access to the dashboard core: the catalog, the stored access
//! key, the gating flag and a simulated tool load.
//!
//! ## Usage
//!
//! ```bash
//! # List the catalog
//! chainknight catalog
//!
//! # Store an access key
//! chainknight key submit <KEY>
//!
//! # Show whether the gate is open
//! chainknight key status
//!
//! # Switch the gate off
//! chainknight gate off
//!
//! # Run the loading phase for a tool and print progress
//! chainknight load wayne
//!
//! # Open a tool in the system browser
//! chainknight open euler
//! ```

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use chainknight_core::config::CONFIG_FILE;
use chainknight_core::{
    logging, AccessGate, Catalog, ChainError, ChainResult, Command, Dashboard, DashboardConfig,
    DashboardDriver, ExternalLink, LayoutMode, LoadPolicy, Navigator, Phase, RedbStore, ToolId,
    STORE_FILE,
};
use clap::{Parser, Subcommand};

/// ChainKnight - Unified Protocol Dashboard
#[derive(Parser)]
#[command(name = "chainknight")]
#[command(version = "0.1.0")]
#[command(about = "ChainKnight - Unified Protocol Dashboard")]
#[command(
    long_about = "Command-line companion to the ChainKnight desktop dashboard. Shares its data directory, so keys and gating changes made here apply to the app."
)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Data directory (default: platform data dir + /chainknight)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the tool catalog
    Catalog,

    /// Access key management
    Key {
        #[command(subcommand)]
        action: KeyAction,
    },

    /// Access gate switch
    Gate {
        #[command(subcommand)]
        action: GateAction,
    },

    /// Dashboard configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Simulate loading a tool and print the progress bar values
    Load {
        /// Tool id (see `catalog`)
        id: String,

        /// Load delay in milliseconds (default: config value, else 1500)
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Open a tool in a new browser window
    Open {
        /// Tool id (see `catalog`)
        id: String,

        /// Print the link instead of launching the browser
        #[arg(long)]
        print: bool,
    },
}

#[derive(Subcommand)]
enum KeyAction {
    /// Check a key and store it if accepted
    Submit {
        /// The access key
        key: String,
    },
    /// Show whether a key is stored and the gate is open
    Status,
    /// Forget the stored key
    Clear,
}

#[derive(Subcommand)]
enum GateAction {
    /// Require an access key
    On,
    /// Skip the access key screen
    Off,
    /// Flip the current setting
    Toggle,
    /// Show the current setting
    Status,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Write a config file with default values if none exists
    Init,
    /// Print the config file location
    Path,
}

/// Launches links with the platform's default browser
struct SystemBrowser;

impl Navigator for SystemBrowser {
    fn open_external(&self, link: &ExternalLink) -> ChainResult<()> {
        webbrowser::open(&link.url).map_err(|e| ChainError::Browser(e.to_string()))
    }
}

/// Prints the link and its target attributes
struct PrintLink;

impl Navigator for PrintLink {
    fn open_external(&self, link: &ExternalLink) -> ChainResult<()> {
        println!("{}", link.url);
        println!("  target: {}", link.target);
        println!("  rel:    {}", link.rel);
        Ok(())
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("chainknight")
}

fn open_store(data_dir: &Path) -> Result<RedbStore> {
    Ok(RedbStore::open(data_dir.join(STORE_FILE))?)
}

/// Show only the first and last characters of a stored key
fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    format!(
        "{}{}{}",
        chars[0],
        "*".repeat(chars.len() - 2),
        chars[chars.len() - 1]
    )
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

fn print_gate(gate: &AccessGate<RedbStore>) {
    println!(
        "Gating:        {}",
        if gate.gating_enabled() { "enabled" } else { "disabled" }
    );
    println!("Authenticated: {}", yes_no(gate.is_authenticated()));
}

fn layout_name(layout: LayoutMode) -> &'static str {
    match layout {
        LayoutMode::Grid => "grid",
        LayoutMode::Fullscreen => "fullscreen",
        LayoutMode::Tabs => "tabs",
    }
}

/// Drive one load to completion on real timers.
///
/// A terminal has no frame to signal readiness, so the load always runs
/// under the fixed-delay policy.
async fn simulate_load(
    data_dir: &Path,
    config: DashboardConfig,
    id: &str,
    delay_ms: Option<u64>,
) -> Result<()> {
    let delay_ms = match (delay_ms, config.load_policy) {
        (Some(ms), _) => ms,
        (None, LoadPolicy::FixedDelay { delay_ms }) => delay_ms,
        (None, LoadPolicy::ReadySignal { .. }) => 1500,
    };
    let config = DashboardConfig {
        layout: LayoutMode::Fullscreen,
        load_policy: LoadPolicy::FixedDelay { delay_ms },
        auto_open: None,
        ..config
    };

    let dashboard = Dashboard::new(config, open_store(data_dir)?)?;
    let Some(tool) = dashboard.catalog().get(id).cloned() else {
        return Err(ChainError::UnknownTool(id.to_string()).into());
    };
    if !dashboard.is_unlocked() {
        return Err(ChainError::GateClosed.into());
    }

    let driver = DashboardDriver::new(dashboard);
    let mut updates = driver.subscribe();
    driver.dispatch(Command::Open(ToolId::new(id)))?;

    println!("Loading {} ({})", tool.name, tool.url);
    let mut last_progress = None;
    loop {
        let snapshot = updates.borrow_and_update().clone();
        if last_progress != Some(snapshot.progress) {
            println!("  {:>3}%", snapshot.progress);
            last_progress = Some(snapshot.progress);
        }
        match snapshot.phase {
            Phase::Active => break,
            Phase::Failed => bail!("Loading {} failed", tool.name),
            Phase::Idle | Phase::Loading => {}
        }
        updates.changed().await?;
    }

    println!("{} is active", tool.name);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(logging::verbosity_filter(cli.verbose));

    let data_dir = cli.data_dir.unwrap_or_else(default_data_dir);
    let config_path = data_dir.join(CONFIG_FILE);
    let config = DashboardConfig::load(&config_path)?;
    tracing::debug!(data_dir = %data_dir.display(), "Using data directory");

    match cli.command {
        Commands::Catalog => {
            let catalog = Catalog::builtin();
            println!("Tools ({}):", catalog.len());
            for tool in catalog.iter() {
                println!();
                println!("  {} [{}]", tool.name, tool.id);
                println!("    {}", tool.description);
                println!("    {}", tool.url);
            }
        }

        Commands::Key { action } => {
            let mut gate = AccessGate::load(open_store(&data_dir)?)?;
            match action {
                KeyAction::Submit { key } => {
                    gate.submit_key(&key)?;
                    println!("Access key accepted");
                }
                KeyAction::Status => {
                    match gate.stored_key() {
                        Some(key) => println!("Stored key:    {}", mask_key(key)),
                        None => println!("Stored key:    none"),
                    }
                    print_gate(&gate);
                }
                KeyAction::Clear => {
                    gate.sign_out()?;
                    println!("Access key cleared");
                }
            }
        }

        Commands::Gate { action } => {
            let mut gate = AccessGate::load(open_store(&data_dir)?)?;
            match action {
                GateAction::On => gate.set_gating(true)?,
                GateAction::Off => gate.set_gating(false)?,
                GateAction::Toggle => {
                    gate.toggle_gating()?;
                }
                GateAction::Status => {}
            }
            print_gate(&gate);
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                println!("Layout:        {}", layout_name(config.layout));
                match config.load_policy {
                    LoadPolicy::FixedDelay { delay_ms } => {
                        println!("Load policy:   fixed delay ({} ms)", delay_ms)
                    }
                    LoadPolicy::ReadySignal { grace_ms } => {
                        println!("Load policy:   ready signal ({} ms grace)", grace_ms)
                    }
                }
                println!("Load timeout:  {} ms", config.load_timeout_ms);
                println!(
                    "Progress:      every {} ms, up to {} per tick, capped at {}%",
                    config.progress_tick_ms, config.progress_max_step, config.progress_cap
                );
                println!("Gate required: {}", yes_no(config.gate_required));
                if let Some(id) = &config.auto_open {
                    println!("Auto open:     {}", id);
                }
            }
            ConfigAction::Init => {
                if config_path.exists() {
                    println!("Config already exists: {}", config_path.display());
                } else {
                    DashboardConfig::default().save(&config_path)?;
                    println!("Wrote {}", config_path.display());
                }
            }
            ConfigAction::Path => println!("{}", config_path.display()),
        },

        Commands::Load { id, delay_ms } => {
            simulate_load(&data_dir, config, &id, delay_ms).await?;
        }

        Commands::Open { id, print } => {
            let dashboard = Dashboard::new(config, open_store(&data_dir)?)?;
            if print {
                dashboard.open_external(&id, &PrintLink)?;
            } else {
                dashboard.open_external(&id, &SystemBrowser)?;
                println!("Opened {} in the browser", id);
            }
        }
    }

    Ok(())
}
