//! ChainKnight Core Library
//!
//! Tool catalog, view state machine and access gate for the ChainKnight
//! unified protocol dashboard.
//!
//! ## Overview
//!
//! ChainKnight shows a fixed catalog of three external web tools. The user
//! picks one and it is embedded in a sandboxed frame (or opened in the system
//! browser). Everything the UI renders is derived from a [`Dashboard`]:
//!
//! - **Catalog**: immutable, ordered list of [`ToolDescriptor`]s
//! - **View state machine**: `Idle → Loading → Active → Idle`
//! - **Tab set**: the multi-tab layout's open tools plus one active tab
//! - **Progress simulator**: cosmetic loading percentage
//! - **Access gate**: stored-key check, a UI gate and not access control
//!
//! ## Quick Start
//!
//! ```ignore
//! use chainknight_core::{Command, Dashboard, DashboardConfig, DashboardDriver, MemoryStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dashboard = Dashboard::new(DashboardConfig::default(), MemoryStore::new())?;
//!     let driver = DashboardDriver::new(dashboard);
//!
//!     driver.dispatch(Command::SubmitKey("0xGudman123".into()))?;
//!     driver.dispatch(Command::Open("wayne".into()))?;
//!
//!     let mut snapshots = driver.subscribe();
//!     snapshots.changed().await?;
//!     println!("{:?}", snapshots.borrow().phase);
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod driver;
pub mod embed;
pub mod error;
pub mod gate;
pub mod logging;
pub mod progress;
pub mod storage;
pub mod tabs;
pub mod types;
pub mod view;

// Re-exports
pub use catalog::Catalog;
pub use config::{DashboardConfig, LayoutMode, LoadPolicy};
pub use dashboard::{
    Command, Dashboard, DashboardSnapshot, FrameTicket, TabSnapshot, TimerKind, TimerRequest,
};
pub use driver::DashboardDriver;
pub use embed::{ExternalLink, FrameSpec, Navigator, SandboxPermission, SANDBOX_PERMISSIONS};
pub use error::{ChainError, ChainResult};
pub use gate::{AccessGate, ACCESS_KEYS};
pub use progress::ProgressSimulator;
pub use storage::{
    KeyValueStore, MemoryStore, RedbStore, ACCESS_KEY_ENTRY, GATE_ENABLED_ENTRY, STORE_FILE,
};
pub use tabs::{Tab, TabSet, TabTicket};
pub use types::*;
pub use view::{LoadTicket, OpenRejected, Phase, ViewMachine};
