//! Navigation Header Component
//!
//! Sticky header with the ChainKnight brand on the left, page links and the
//! gate status on the right.

use chainknight_core::ToolIcon;
use chainknight_ui::{GateState, GateStatus, ToolGlyph};
use dioxus::prelude::*;

use crate::app::Route;
use crate::context::use_snapshot;

/// Navigation location within the application
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLocation {
    Dashboard,
    Settings,
}

impl NavLocation {
    /// Get the display name for this location
    pub fn display_name(&self) -> &'static str {
        match self {
            NavLocation::Dashboard => "Dashboard",
            NavLocation::Settings => "Settings",
        }
    }

    /// Get the route for this location
    pub fn route(&self) -> Route {
        match self {
            NavLocation::Dashboard => Route::Home {},
            NavLocation::Settings => Route::Settings {},
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NavHeaderProps {
    /// Current location in the app
    pub current: NavLocation,
}

#[component]
pub fn NavHeader(props: NavHeaderProps) -> Element {
    let snapshot = use_snapshot();
    let gate_state = {
        let snap = snapshot.read();
        GateState::from_flags(snap.gating_enabled, snap.unlocked)
    };

    let locations = [NavLocation::Dashboard, NavLocation::Settings];

    rsx! {
        header { class: "nav-header",
            Brand {}

            div { class: "nav-right",
                nav { class: "nav-links",
                    for location in locations {
                        Link {
                            to: location.route(),
                            class: if location == props.current { "nav-link active" } else { "nav-link" },
                            "{location.display_name()}"
                        }
                    }
                }
                GateStatus { state: gate_state }
            }
        }
    }
}

/// Logo mark, title and subtitle
#[component]
pub fn Brand() -> Element {
    rsx! {
        div { class: "brand",
            div { class: "brand-mark",
                ToolGlyph { icon: ToolIcon::Sword, size: 20 }
            }
            h1 { class: "brand-title", "ChainKnight" }
            span { class: "brand-subtitle", "Unified Protocol Dashboard" }
        }
    }
}
