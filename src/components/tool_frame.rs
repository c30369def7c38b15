//! Embedded tool panel
//!
//! The frame is mounted as soon as loading starts so the page fetches behind
//! the overlay. Its load and error events go back to the dashboard tagged
//! with the ticket of the load that mounted it; a frame from an abandoned
//! load therefore cannot finish a newer one.

use chainknight_core::{Command, FrameSpec, FrameTicket, LoadTicket, Phase, ToolDescriptor};
use chainknight_ui::{Button, ButtonVariant, ProgressBar, ToolGlyph};
use dioxus::prelude::*;

use crate::context::{dispatch, open_in_browser, use_driver};

#[derive(Props, Clone, PartialEq)]
pub struct ToolPanelProps {
    pub tool: ToolDescriptor,
    pub frame: FrameSpec,
    pub ticket: LoadTicket,
    pub phase: Phase,
    pub progress: u8,
    /// Fullscreen layout: edge to edge with a Back button
    #[props(default = false)]
    pub fullscreen: bool,
}

#[component]
pub fn ToolPanel(props: ToolPanelProps) -> Element {
    let driver = use_driver();
    let tool = props.tool.clone();

    let on_back = {
        let driver = driver.clone();
        move |_: ()| dispatch(&driver, Command::Back)
    };
    let on_open_external = {
        let driver = driver.clone();
        let id = tool.id.clone();
        move |_: ()| open_in_browser(&driver, id.as_str())
    };

    rsx! {
        section { class: if props.fullscreen { "tool-panel fullscreen" } else { "tool-panel" },
            div { class: "tool-panel-header",
                div { class: "tool-panel-title",
                    if props.fullscreen {
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: on_back,
                            "\u{2190} Back"
                        }
                    }
                    ToolGlyph { icon: tool.icon, size: 20 }
                    h2 { "{tool.name}" }
                }
                div { class: "tool-panel-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: on_open_external,
                        "Open in New Tab"
                    }
                }
            }

            div { class: "frame-container",
                if matches!(props.phase, Phase::Loading | Phase::Active) {
                    EmbeddedFrame {
                        key: "{props.ticket.tool}-{props.ticket.generation}",
                        frame: props.frame.clone(),
                        ticket: props.ticket.clone(),
                        visible: props.phase == Phase::Active,
                    }
                }

                {match props.phase {
                    Phase::Loading => rsx! {
                        LoadingOverlay { name: tool.name.clone(), progress: props.progress }
                    },
                    Phase::Failed => rsx! {
                        FailedPanel {
                            name: tool.name.clone(),
                            retry: Command::Retry,
                            show_back: props.fullscreen,
                        }
                    },
                    Phase::Idle | Phase::Active => rsx! {},
                }}
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct EmbeddedFrameProps {
    frame: FrameSpec,
    ticket: LoadTicket,
    visible: bool,
}

/// The sandboxed iframe of the single-tool layouts
#[component]
fn EmbeddedFrame(props: EmbeddedFrameProps) -> Element {
    let driver = use_driver();

    let on_load = {
        let driver = driver.clone();
        let ticket = props.ticket.clone();
        move |_: ImageEvent| {
            dispatch(&driver, Command::ContentReady(FrameTicket::Single(ticket.clone())))
        }
    };
    let on_error = {
        let driver = driver.clone();
        let ticket = props.ticket.clone();
        move |_: ImageEvent| {
            dispatch(&driver, Command::LoadFailed(FrameTicket::Single(ticket.clone())))
        }
    };

    rsx! {
        iframe {
            class: if props.visible { "tool-frame" } else { "tool-frame behind" },
            src: "{props.frame.url}",
            title: "{props.frame.title}",
            sandbox: "{props.frame.sandbox}",
            onload: on_load,
            onerror: on_error,
        }
    }
}

/// Pulsing dots with the simulated progress
#[component]
pub fn LoadingOverlay(name: String, progress: u8) -> Element {
    rsx! {
        div { class: "loading-overlay",
            div { class: "loading-dots",
                span {}
                span {}
                span {}
            }
            ProgressBar { value: progress, label: format!("Loading {name}") }
        }
    }
}

/// Shown when the frame never reported ready. `retry` reloads it.
#[component]
pub fn FailedPanel(name: String, retry: Command, show_back: bool) -> Element {
    let driver = use_driver();

    let on_retry = {
        let driver = driver.clone();
        move |_: ()| dispatch(&driver, retry.clone())
    };
    let on_back = {
        let driver = driver.clone();
        move |_: ()| dispatch(&driver, Command::Back)
    };

    rsx! {
        div { class: "failed-panel", role: "alert",
            h3 { "{name} didn't load" }
            p { "The page took too long to respond or refused to be embedded. Try again, or open it in a new tab." }
            div { class: "failed-actions",
                Button { onclick: on_retry, "Retry" }
                if show_back {
                    Button { variant: ButtonVariant::Ghost, onclick: on_back, "Back" }
                }
            }
        }
    }
}

/// Grid layout before anything is selected
#[component]
pub fn FramePlaceholder() -> Element {
    rsx! {
        section { class: "tool-panel",
            div { class: "frame-container",
                div { class: "frame-placeholder",
                    p { "Select a tool above to load it here." }
                }
            }
        }
    }
}
