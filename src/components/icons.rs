use dioxus::prelude::*;

#[component]
pub fn Icon(name: String, class: String) -> Element {
    let svg_content = match name.as_str() {
        "image" => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "1.5",
                rect {
                    x: "3",
                    y: "3",
                    width: "18",
                    height: "18",
                    rx: "2",
                    ry: "2",
                }
                circle { cx: "8.5", cy: "8.5", r: "1.5" }
                polyline { points: "21 15 16 10 5 21" }
            }
        },
        "alert" => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                circle { cx: "12", cy: "12", r: "10" }
                path { d: "M12 8v4" }
                path { d: "M12 16h.01" }
            }
        },
        _ => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                circle { cx: "12", cy: "12", r: "10" }
            }
        },
    };

    svg_content
}
