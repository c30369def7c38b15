//! Loading progress bar
//!
//! Renders the simulated load percentage as a thin gradient bar with the
//! numeric value beside it.

use dioxus::prelude::*;

/// Properties for the ProgressBar component
#[derive(Clone, PartialEq, Props)]
pub struct ProgressBarProps {
    /// Percentage, clamped to 0..=100 when rendered
    pub value: u8,
    /// Text above the bar
    #[props(default)]
    pub label: Option<String>,
}

/// CSS width for a percentage
pub fn progress_width(value: u8) -> String {
    format!("{}%", value.min(100))
}

#[component]
pub fn ProgressBar(props: ProgressBarProps) -> Element {
    let width = progress_width(props.value);
    let value = props.value.min(100);

    rsx! {
        div { class: "progress",
            if let Some(label) = &props.label {
                div { class: "progress-label",
                    span { "{label}" }
                    span { class: "progress-value", "{value}%" }
                }
            }
            div {
                class: "progress-track",
                role: "progressbar",
                "aria-valuemin": "0",
                "aria-valuemax": "100",
                "aria-valuenow": "{value}",
                div { class: "progress-fill", style: "width: {width};" }
            }
        }
    }
}
