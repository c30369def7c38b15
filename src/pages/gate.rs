//! Access gate page.
//!
//! Asks for an access key before the catalog is shown. A rejected key
//! clears the field and shows an inline message. This is a UI gate, not
//! access control: the keys ship inside the binary.

use chainknight_core::{ChainError, ChainResult, Command};
use chainknight_ui::{Button, KeyInput};
use dioxus::prelude::*;

use crate::components::Brand;
use crate::context::use_driver;

/// Inline message for a submit result; the field is cleared either way
fn submit_feedback(result: &ChainResult<()>) -> Option<String> {
    match result {
        Ok(()) => None,
        Err(ChainError::InvalidKey) => Some("Invalid access key".to_string()),
        Err(e) => Some(format!("Couldn't save the key: {e}")),
    }
}

#[component]
pub fn Gate() -> Element {
    let driver = use_driver();
    let mut key = use_signal(String::new);
    let mut error: Signal<Option<String>> = use_signal(|| None);

    // Blank input goes through the same check as any other wrong key
    let submit = use_callback(move |candidate: String| {
        let result = driver.dispatch(Command::SubmitKey(candidate));
        if let Err(e) = &result {
            if !matches!(e, ChainError::InvalidKey) {
                tracing::error!("Failed to store access key: {}", e);
            }
        }
        key.set(String::new());
        error.set(submit_feedback(&result));
    });

    rsx! {
        main { class: "gate-page",
            div { class: "gate-card",
                Brand {}
                p { class: "body-text", "Enter your access key to open the dashboard." }

                KeyInput {
                    value: key(),
                    oninput: move |value: String| {
                        key.set(value);
                        error.set(None);
                    },
                    onsubmit: move |value: String| submit.call(value),
                    error: error(),
                }

                Button {
                    onclick: move |_| submit.call(key()),
                    "Unlock"
                }

                p { class: "gate-note",
                    "The key is remembered on this device until you sign out in Settings."
                }
            }
        }
    }
}
