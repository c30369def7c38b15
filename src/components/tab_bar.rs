//! Tabs layout: a bar of open tools plus one frame per tab.
//!
//! Every open tab keeps its frame mounted so switching tabs does not reload
//! the page; inactive frames are only hidden.

use chainknight_core::{Command, FrameTicket, TabSnapshot, ToolDescriptor, ToolId};
use chainknight_ui::{CloseButton, ToolGlyph};
use dioxus::prelude::*;

use super::tool_frame::FailedPanel;
use crate::context::{dispatch, use_driver};

#[derive(Props, Clone, PartialEq)]
pub struct TabBarProps {
    pub tabs: Vec<TabSnapshot>,
    /// Full catalog; entries without a tab get a quick-open chip
    pub tools: Vec<ToolDescriptor>,
}

#[component]
pub fn TabBar(props: TabBarProps) -> Element {
    let driver = use_driver();

    let closed: Vec<ToolDescriptor> = props
        .tools
        .iter()
        .filter(|tool| !props.tabs.iter().any(|tab| tab.tool.id == tool.id))
        .cloned()
        .collect();

    rsx! {
        div { class: "tab-bar",
            div { class: "tab-list", role: "tablist",
                for tab in props.tabs.iter() {
                    TabButton {
                        key: "{tab.tool.id}",
                        tab: tab.clone(),
                    }
                }
            }

            div { class: "tab-picker",
                for tool in closed.into_iter() {
                    button {
                        key: "{tool.id}",
                        r#type: "button",
                        class: "tab-chip",
                        onclick: {
                            let driver = driver.clone();
                            let id = tool.id.clone();
                            move |_| dispatch(&driver, Command::Open(id.clone()))
                        },
                        "+ {tool.name}"
                    }
                }
            }
        }
    }
}

#[component]
fn TabButton(tab: TabSnapshot) -> Element {
    let driver = use_driver();
    let id: ToolId = tab.tool.id.clone();

    let on_activate = {
        let driver = driver.clone();
        let id = id.clone();
        move |_: MouseEvent| dispatch(&driver, Command::ActivateTab(id.clone()))
    };
    let on_close = {
        let driver = driver.clone();
        let id = id.clone();
        move |_: ()| dispatch(&driver, Command::CloseTab(id.clone()))
    };

    rsx! {
        div {
            class: if tab.active { "tab active" } else { "tab" },
            role: "tab",
            "aria-selected": "{tab.active}",
            onclick: on_activate,

            ToolGlyph { icon: tab.tool.icon, size: 16 }
            span { class: "tab-label", "{tab.tool.name}" }
            if tab.failed {
                span { class: "tab-failed" }
            } else if !tab.ready {
                span { class: "tab-pending" }
            }
            CloseButton { onclick: on_close, aria_label: format!("Close {}", tab.tool.name) }
        }
    }
}

/// Frames for every open tab, only the active one visible
#[component]
pub fn TabFrames(tabs: Vec<TabSnapshot>) -> Element {
    rsx! {
        div { class: "tab-frames",
            for tab in tabs.into_iter() {
                TabFrame { key: "{tab.tool.id}", tab }
            }
        }
    }
}

#[component]
fn TabFrame(tab: TabSnapshot) -> Element {
    let driver = use_driver();

    let on_load = {
        let driver = driver.clone();
        let ticket = tab.ticket.clone();
        move |_: ImageEvent| {
            dispatch(&driver, Command::ContentReady(FrameTicket::Tab(ticket.clone())))
        }
    };
    let on_error = {
        let driver = driver.clone();
        let ticket = tab.ticket.clone();
        move |_: ImageEvent| {
            dispatch(&driver, Command::LoadFailed(FrameTicket::Tab(ticket.clone())))
        }
    };

    rsx! {
        div { class: if tab.active { "frame-container" } else { "frame-container hidden" },
            // Unmounted while failed so a retry mounts a fresh frame
            if tab.failed {
                FailedPanel {
                    name: tab.tool.name.clone(),
                    retry: Command::RetryTab(tab.tool.id.clone()),
                    show_back: false,
                }
            } else {
                iframe {
                    class: "tool-frame",
                    src: "{tab.frame.url}",
                    title: "{tab.frame.title}",
                    sandbox: "{tab.frame.sandbox}",
                    onload: on_load,
                    onerror: on_error,
                }
            }
            if !tab.ready && !tab.failed {
                div { class: "loading-overlay",
                    div { class: "loading-dots",
                        span {}
                        span {}
                        span {}
                    }
                    p { class: "loading-caption", "Loading {tab.tool.name}" }
                }
            }
        }
    }
}
