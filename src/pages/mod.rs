//! Page components for ChainKnight.

mod gate;
mod home;
mod settings;

pub use gate::Gate;
pub use home::Home;
pub use settings::Settings;
