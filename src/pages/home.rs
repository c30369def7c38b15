//! Home page: the access gate while locked, otherwise the dashboard in the
//! configured layout.
//!
//! - Grid: catalog cards above a frame panel, first tool pre-selected
//! - Fullscreen: catalog, then the selected tool edge to edge
//! - Tabs: tab bar with one frame per open tool

use chainknight_core::{DashboardSnapshot, LayoutMode, Phase};
use dioxus::prelude::*;

use crate::components::{
    CatalogGrid, FramePlaceholder, NavHeader, NavLocation, SiteFooter, TabBar, TabFrames,
    ToolPanel,
};
use crate::context::use_snapshot;
use crate::pages::Gate;

#[component]
pub fn Home() -> Element {
    let snapshot = use_snapshot();
    let snap = snapshot.read().clone();

    if !snap.unlocked {
        return rsx! { Gate {} };
    }

    let tool_open = snap.layout == LayoutMode::Fullscreen && snap.phase != Phase::Idle;

    rsx! {
        div { class: "app-shell",
            NavHeader { current: NavLocation::Dashboard }

            main { class: if tool_open { "dashboard fullscreen" } else { "dashboard" },
                {match snap.layout {
                    LayoutMode::Grid => rsx! { GridLayout { snapshot: snap.clone() } },
                    LayoutMode::Fullscreen => rsx! { FullscreenLayout { snapshot: snap.clone() } },
                    LayoutMode::Tabs => rsx! { TabsLayout { snapshot: snap.clone() } },
                }}
            }

            if !tool_open {
                SiteFooter { tools: snap.tools.clone() }
            }
        }
    }
}

/// Frame panel for the current selection, if there is one
fn single_panel(snap: &DashboardSnapshot, fullscreen: bool) -> Option<Element> {
    let tool = snap.selected.clone()?;
    let frame = snap.frame.clone()?;
    let ticket = snap.ticket.clone()?;

    Some(rsx! {
        ToolPanel {
            tool,
            frame,
            ticket,
            phase: snap.phase,
            progress: snap.progress,
            fullscreen,
        }
    })
}

#[component]
fn GridLayout(snapshot: DashboardSnapshot) -> Element {
    let selected = snapshot.selected.as_ref().map(|tool| tool.id.clone());

    rsx! {
        CatalogGrid { tools: snapshot.tools.clone(), selected }
        {single_panel(&snapshot, false).unwrap_or_else(|| rsx! { FramePlaceholder {} })}
    }
}

#[component]
fn FullscreenLayout(snapshot: DashboardSnapshot) -> Element {
    if let Some(panel) = single_panel(&snapshot, true) {
        return panel;
    }

    rsx! {
        div { class: "hero",
            h2 { "Choose a tool" }
            p { "Each tool opens inside the dashboard. Use \"Open in New Tab\" to run it in your browser instead." }
        }
        CatalogGrid { tools: snapshot.tools.clone() }
    }
}

#[component]
fn TabsLayout(snapshot: DashboardSnapshot) -> Element {
    rsx! {
        TabBar { tabs: snapshot.tabs.clone(), tools: snapshot.tools.clone() }

        if snapshot.tabs.is_empty() {
            div { class: "hero",
                h2 { "No tools open" }
                p { "Pick one to open it in a new tab. Open tabs keep their state while you switch." }
            }
            CatalogGrid { tools: snapshot.tools.clone() }
        } else {
            TabFrames { tabs: snapshot.tabs.clone() }
        }
    }
}
