//! Access key input
//!
//! Masked single-line input that submits on Enter and shows an inline error
//! underneath. Clearing the field after a rejected key is the caller's job.

use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct KeyInputProps {
    /// Current input value
    pub value: String,
    pub oninput: EventHandler<String>,
    /// Called on Enter with the current value
    pub onsubmit: EventHandler<String>,
    /// Inline error shown under the field
    #[props(default)]
    pub error: Option<String>,
    #[props(default = "Enter access key".to_string())]
    pub placeholder: String,
    #[props(default = false)]
    pub disabled: bool,
}

#[component]
pub fn KeyInput(props: KeyInputProps) -> Element {
    let input_class = if props.error.is_some() {
        "input-field key-input invalid"
    } else {
        "input-field key-input"
    };
    let value = props.value.clone();

    rsx! {
        div { class: "form-field",
            input {
                class: "{input_class}",
                r#type: "password",
                autocomplete: "off",
                value: "{props.value}",
                placeholder: "{props.placeholder}",
                disabled: props.disabled,
                oninput: move |e| props.oninput.call(e.value()),
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.key() == Key::Enter {
                        props.onsubmit.call(value.clone());
                    }
                },
            }
            if let Some(error) = &props.error {
                p { class: "input-error", role: "alert", "{error}" }
            }
        }
    }
}
