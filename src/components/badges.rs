use dioxus::prelude::*;

use crate::components::css;

/// Rounded percentage off, if the selling price is actually below the list price.
pub fn discount_percent(list_price: Option<f64>, selling_price: Option<f64>) -> Option<u32> {
    let (list, selling) = (list_price?, selling_price?);
    if !list.is_finite() || !selling.is_finite() || list <= 0.0 || selling >= list {
        return None;
    }
    let percent = ((list - selling) / list * 100.0).round();
    (percent >= 1.0).then_some(percent as u32)
}

#[derive(Props, Clone, PartialEq)]
pub struct DiscountBadgeProps {
    #[props(!optional)]
    pub list_price: Option<f64>,
    #[props(!optional)]
    pub selling_price: Option<f64>,
    #[props(default)]
    pub label: String,
    pub children: Element,
}

#[component]
pub fn DiscountBadge(props: DiscountBadgeProps) -> Element {
    let percent = discount_percent(props.list_price, props.selling_price);
    let label = props.label.trim().to_string();
    let container_class = css::DISCOUNT_BADGE;

    rsx! {
        div { class: "{container_class} relative",
            {props.children}
            if let Some(percent) = percent {
                span { class: "absolute top-2 right-2 px-2 py-0.5 rounded-full bg-emerald-500 text-xs font-semibold text-white",
                    if label.is_empty() {
                        "-{percent}%"
                    } else {
                        "-{percent}% {label}"
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct CollectionBadgesProps {
    pub names: Vec<String>,
    pub children: Element,
}

#[component]
pub fn CollectionBadges(props: CollectionBadgesProps) -> Element {
    let container_class = css::COLLECTION_BADGES;

    rsx! {
        div { class: "{container_class} flex flex-col gap-2",
            {props.children}
            div { class: "flex flex-wrap gap-1",
                for name in props.names.iter() {
                    span { class: "px-2 py-0.5 rounded-md bg-zinc-800 text-[11px] uppercase tracking-wide text-zinc-300",
                        "{name}"
                    }
                }
            }
        }
    }
}
