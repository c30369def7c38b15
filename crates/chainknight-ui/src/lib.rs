//! ChainKnight UI Components
//!
//! Dioxus components for the ChainKnight dashboard: buttons, the access-key
//! input, the loading progress bar, tool icons and the gate status dot.
//!
//! ## Palette
//!
//! - **Night (#030712)**: Background
//! - **Blue (#3b82f6)**: Interactive elements, active selection
//! - **Purple (#9333ea)**: Gradient partner of blue, brand mark
//! - **Slate (#9ca3af)**: Secondary text

pub mod components;

pub use components::*;
