//! Reusable UI components
//!
//! Class names match the global stylesheet shipped by the desktop app.

mod button;
mod gate_status;
mod input;
mod progress_bar;
mod tool_icon;

pub use button::*;
pub use gate_status::*;
pub use input::*;
pub use progress_bar::*;
pub use tool_icon::*;
