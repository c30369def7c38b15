//! Settings page: access gate switch, stored key and startup options.

use chainknight_core::{Command, LayoutMode, LoadPolicy};
use chainknight_ui::{Button, ButtonVariant, GateState, GateStatus};
use dioxus::prelude::*;

use crate::components::{NavHeader, NavLocation};
use crate::context::{dispatch, get_config, get_data_dir, use_driver, use_snapshot};
use crate::pages::Gate;

fn layout_label(layout: LayoutMode) -> &'static str {
    match layout {
        LayoutMode::Grid => "Grid",
        LayoutMode::Fullscreen => "Fullscreen",
        LayoutMode::Tabs => "Tabs",
    }
}

fn policy_label(policy: LoadPolicy) -> String {
    match policy {
        LoadPolicy::FixedDelay { delay_ms } => format!("Fixed delay ({delay_ms} ms)"),
        LoadPolicy::ReadySignal { grace_ms } => format!("When the page loads (+{grace_ms} ms)"),
    }
}

#[component]
pub fn Settings() -> Element {
    let driver = use_driver();
    let snapshot = use_snapshot();
    let snap = snapshot.read().clone();

    if !snap.unlocked {
        return rsx! { Gate {} };
    }

    let has_key = snap.key_stored;
    let config = get_config();
    let data_dir = get_data_dir();

    let on_toggle = {
        let driver = driver.clone();
        move |_: ()| dispatch(&driver, Command::ToggleGating)
    };
    let on_sign_out = {
        let driver = driver.clone();
        move |_: ()| dispatch(&driver, Command::SignOut)
    };

    rsx! {
        div { class: "app-shell",
            NavHeader { current: NavLocation::Settings }

            main { class: "settings-page",
                section { class: "settings-section",
                    h2 { class: "section-header", "Access gate" }
                    p { class: "body-text",
                        "The gate hides the catalog until a known key is entered. It is a UI gate, not access control."
                    }

                    div { class: "settings-row",
                        GateStatus { state: GateState::from_flags(snap.gating_enabled, snap.unlocked) }
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: on_toggle,
                            if snap.gating_enabled { "Disable gate" } else { "Enable gate" }
                        }
                    }

                    div { class: "settings-row",
                        span { class: "settings-value",
                            if has_key { "Access key stored" } else { "No access key stored" }
                        }
                        Button {
                            variant: ButtonVariant::Danger,
                            disabled: !has_key,
                            onclick: on_sign_out,
                            "Sign out"
                        }
                    }
                }

                section { class: "settings-section",
                    h2 { class: "section-header", "Startup" }
                    div { class: "settings-row",
                        span { "Layout" }
                        span { class: "settings-value", "{layout_label(config.layout)}" }
                    }
                    div { class: "settings-row",
                        span { "Switch to the tool" }
                        span { class: "settings-value", "{policy_label(config.load_policy)}" }
                    }
                    div { class: "settings-row",
                        span { "Data directory" }
                        span { class: "settings-value", "{data_dir.display()}" }
                    }
                    p { class: "body-text",
                        "Change these in config.json or with --layout, --policy and --open."
                    }
                }
            }
        }
    }
}
