use dioxus::prelude::*;
use tailblocks_engine::{Disclosure, PartialBasicNavConfig, Resolve};

use super::shared::LinkRow;

#[component]
pub fn NavFlowbiteBasic(#[props(default)] config: PartialBasicNavConfig) -> Element {
    let config = config.resolve_defaults();
    let mut collapse = use_signal(Disclosure::new);
    let expanded = collapse.read().is_open();

    rsx! {
        nav {
            class: "navbar nav-basic",
            a {
                class: "brand",
                href: "/",
                img { class: "brand-logo", src: "{config.logo_src}", alt: "{config.brand_name} Logo" }
                span { class: "brand-name", "{config.brand_name}" }
            }
            button {
                class: "collapse-toggle",
                r#type: "button",
                aria_expanded: "{expanded}",
                onclick: move |_| {
                    collapse.write().toggle();
                },
                span { class: "sr-only", "Open main menu" }
            }
            div {
                class: if expanded { "nav-collapse open" } else { "nav-collapse" },
                LinkRow { links: config.links.clone() }
            }
        }
    }
}
