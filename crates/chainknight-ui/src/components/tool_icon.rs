//! Lucide icons for catalog entries and the brand mark

use chainknight_core::ToolIcon;
use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct ToolGlyphProps {
    pub icon: ToolIcon,
    /// Edge length in px
    #[props(default = 24)]
    pub size: u32,
}

/// Inline SVG for a [`ToolIcon`]
#[component]
pub fn ToolGlyph(props: ToolGlyphProps) -> Element {
    let size = props.size.to_string();
    let class = format!("tool-glyph glyph-{}", props.icon.name());

    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            {render_icon_paths(props.icon)}
        }
    }
}

fn render_icon_paths(icon: ToolIcon) -> Element {
    match icon {
        ToolIcon::Sword => rsx! {
            polyline { points: "14.5 17.5 3 6 3 3 6 3 17.5 14.5" }
            line { x1: "13", y1: "19", x2: "19", y2: "13" }
            line { x1: "16", y1: "16", x2: "20", y2: "20" }
            line { x1: "19", y1: "21", x2: "21", y2: "19" }
        },
        ToolIcon::Brain => rsx! {
            path { d: "M12 5a3 3 0 1 0-5.997.125 4 4 0 0 0-2.526 5.77 4 4 0 0 0 .556 6.588A4 4 0 1 0 12 18Z" }
            path { d: "M12 5a3 3 0 1 1 5.997.125 4 4 0 0 1 2.526 5.77 4 4 0 0 1-.556 6.588A4 4 0 1 1 12 18Z" }
            path { d: "M12 5v13" }
        },
        ToolIcon::Zap => rsx! {
            polygon { points: "13 2 3 14 12 14 11 22 21 10 12 10 13 2" }
        },
    }
}
