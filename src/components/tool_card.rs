//! Catalog card and the grid that lays them out.

use chainknight_core::{Command, ToolDescriptor, ToolId};
use chainknight_ui::ToolGlyph;
use dioxus::prelude::*;

use crate::context::{dispatch, use_driver};

#[derive(Props, Clone, PartialEq)]
pub struct ToolCardProps {
    pub tool: ToolDescriptor,
    #[props(default = false)]
    pub selected: bool,
    pub onselect: EventHandler<ToolId>,
}

/// One catalog entry: icon, name, description, category.
#[component]
pub fn ToolCard(props: ToolCardProps) -> Element {
    let tool = props.tool.clone();
    let id = tool.id.clone();

    rsx! {
        button {
            r#type: "button",
            class: if props.selected { "tool-card selected" } else { "tool-card" },
            "aria-pressed": "{props.selected}",
            onclick: move |_| props.onselect.call(id.clone()),

            div { class: "tool-card-row",
                div { class: "tool-card-icon",
                    ToolGlyph { icon: tool.icon }
                }
                div {
                    h3 { class: "tool-card-name", "{tool.name}" }
                    p { class: "tool-card-description", "{tool.description}" }
                }
            }

            div { class: "tool-card-footer",
                span { "{tool.category}" }
                if props.selected {
                    span { class: "selected-dot" }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct CatalogGridProps {
    pub tools: Vec<ToolDescriptor>,
    /// Highlighted entry
    #[props(default)]
    pub selected: Option<ToolId>,
}

/// All catalog entries; clicking one opens it.
#[component]
pub fn CatalogGrid(props: CatalogGridProps) -> Element {
    let driver = use_driver();

    rsx! {
        div { class: "catalog-grid",
            for tool in props.tools.iter() {
                ToolCard {
                    key: "{tool.id}",
                    tool: tool.clone(),
                    selected: props.selected.as_ref() == Some(&tool.id),
                    onselect: {
                        let driver = driver.clone();
                        move |id: ToolId| dispatch(&driver, Command::Open(id))
                    },
                }
            }
        }
    }
}

/// Footer listing every catalog entry
#[component]
pub fn SiteFooter(tools: Vec<ToolDescriptor>) -> Element {
    rsx! {
        footer { class: "site-footer",
            span { "ChainKnight - Unified Protocol Dashboard" }
            div { class: "footer-tools",
                for tool in tools.iter() {
                    span { key: "{tool.id}", "{tool.name}" }
                }
            }
        }
    }
}
