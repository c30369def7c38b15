//! UI Components for ChainKnight.
//!
//! Dashboard-aware components; they read the driver from context. The
//! context-free building blocks live in `chainknight-ui`.

mod nav_header;
mod tab_bar;
mod tool_card;
mod tool_frame;

pub use nav_header::{Brand, NavHeader, NavLocation};
pub use tab_bar::{TabBar, TabFrames};
pub use tool_card::{CatalogGrid, SiteFooter};
pub use tool_frame::{FramePlaceholder, ToolPanel};
