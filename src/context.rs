//! Dashboard context for ChainKnight.
//!
//! Provides the dashboard driver and its latest snapshot to all components
//! via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! let driver = use_driver();
//! let snapshot = use_snapshot();
//!
//! if snapshot.read().unlocked {
//!     dispatch(&driver, Command::Open(id));
//! }
//! ```

use std::path::{Path, PathBuf};

use chainknight_core::{
    ChainError, ChainResult, Command, Dashboard, DashboardConfig, DashboardDriver,
    DashboardSnapshot, ExternalLink, KeyValueStore, MemoryStore, Navigator, RedbStore, STORE_FILE,
};
use dioxus::prelude::*;

/// Store handed to the dashboard: redb on disk, or memory if that fails
pub type SharedStore = Box<dyn KeyValueStore>;

/// Driver type shared through context
pub type SharedDriver = DashboardDriver<SharedStore>;

/// Get the data directory for the application.
/// Uses the global data dir set from command line args.
pub fn get_data_dir() -> PathBuf {
    crate::get_data_dir()
}

/// Get the dashboard configuration resolved at startup.
pub fn get_config() -> DashboardConfig {
    crate::get_config()
}

/// Open the persistent store, falling back to a volatile one.
///
/// Without a store the gate still works for the session; the key just isn't
/// remembered.
pub fn open_store(data_dir: &Path) -> SharedStore {
    match RedbStore::open(data_dir.join(STORE_FILE)) {
        Ok(store) => Box::new(store),
        Err(e) => {
            tracing::error!("Failed to open local storage, keys won't persist: {}", e);
            Box::new(MemoryStore::new())
        }
    }
}

/// Build the driver from the startup config and the data directory.
pub fn build_driver() -> ChainResult<SharedDriver> {
    let dashboard = Dashboard::new(get_config(), open_store(&get_data_dir()))?;
    Ok(DashboardDriver::new(dashboard))
}

/// Hook to access the dashboard driver from context.
pub fn use_driver() -> SharedDriver {
    use_context::<SharedDriver>()
}

/// Hook to access the latest dashboard snapshot.
///
/// Returns a reactive signal that updates whenever the driver publishes.
pub fn use_snapshot() -> Signal<DashboardSnapshot> {
    use_context::<Signal<DashboardSnapshot>>()
}

/// Dispatch a command whose failure only needs logging.
pub fn dispatch(driver: &SharedDriver, command: Command) {
    if let Err(e) = driver.dispatch(command) {
        tracing::error!("Command failed: {}", e);
    }
}

/// "Open in New Tab" through the system browser.
pub fn open_in_browser(driver: &SharedDriver, id: &str) {
    if let Err(e) = driver.open_external(id, &SystemBrowser) {
        tracing::error!(tool = id, "Failed to open in browser: {}", e);
    }
}

/// Launches links with the platform's default browser.
///
/// A separate browser process is a new top-level context with no opener, so
/// `target` and `rel` are satisfied by construction.
pub struct SystemBrowser;

impl Navigator for SystemBrowser {
    fn open_external(&self, link: &ExternalLink) -> ChainResult<()> {
        webbrowser::open(&link.url).map_err(|e| ChainError::Browser(e.to_string()))
    }
}
