//! Gate Status Indicator Component
//!
//! Small dot + label in the header showing the access gate state:
//! - "gate sealed" - key required, none accepted yet
//! - "gate open" - a valid key is stored
//! - "gate disabled" - gating switched off by the user

use dioxus::prelude::*;

/// State of the access gate as shown in the header
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum GateState {
    #[default]
    Sealed,
    Open,
    Disabled,
}

impl GateState {
    /// Derive from the dashboard's gate flags
    pub fn from_flags(gating_enabled: bool, unlocked: bool) -> Self {
        match (gating_enabled, unlocked) {
            (false, _) => GateState::Disabled,
            (true, true) => GateState::Open,
            (true, false) => GateState::Sealed,
        }
    }

    /// Returns the display label for this state
    pub fn label(&self) -> &'static str {
        match self {
            GateState::Sealed => "gate sealed",
            GateState::Open => "gate open",
            GateState::Disabled => "gate disabled",
        }
    }

    /// Whether the catalog is reachable in this state
    pub fn is_open(&self) -> bool {
        matches!(self, GateState::Open | GateState::Disabled)
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct GateStatusProps {
    pub state: GateState,
}

/// # Example
///
/// ```rust,ignore
/// rsx! {
///     GateStatus { state: GateState::Open }
/// }
/// ```
#[component]
pub fn GateStatus(props: GateStatusProps) -> Element {
    let label = props.state.label();
    let is_open = props.state.is_open();

    rsx! {
        div { class: "gate-status",
            span {
                class: if is_open { "status-dot active" } else { "status-dot" },
                role: "img",
                "aria-label": if is_open { "Unlocked" } else { "Locked" },
            }
            span { class: "status-label", "{label}" }
        }
    }
}
