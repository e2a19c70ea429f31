use dioxus::prelude::*;
use tailblocks_engine::{MegaMenuNav, PartialMegaMenuNavConfig, Resolve};

use super::shared::{CtaLink, Icon, navigate_with};
use crate::ui::live::use_live_block;

/// Header whose categories open a preview panel; one panel at a time
#[component]
pub fn NavPrelineMega(
    #[props(default)] config: PartialMegaMenuNavConfig,
    on_navigate: Option<EventHandler<String>>,
) -> Element {
    let mut nav = use_live_block::<MegaMenuNav>(config.resolve_defaults());
    let state = nav.read();
    let config = state.config();
    let expanded = state.is_collapse_open();

    rsx! {
        header {
            class: "navbar nav-mega",
            nav {
                class: "nav-mega-bar",
                a {
                    class: "brand",
                    href: "/",
                    img { class: "brand-logo", src: "{config.logo_src}", alt: "{config.brand_name}" }
                    span { class: "brand-name", "{config.brand_name}" }
                }
                button {
                    class: "collapse-toggle",
                    r#type: "button",
                    aria_expanded: "{expanded}",
                    onclick: move |_| {
                        nav.write().toggle_collapse();
                    },
                    span { class: "sr-only", "Toggle navigation" }
                }
                div {
                    class: if expanded { "nav-collapse open" } else { "nav-collapse" },
                    ul {
                        class: "mega-categories",
                        for (index, category) in config.categories.iter().enumerate() {
                            li {
                                key: "{index}",
                                button {
                                    class: if state.is_category_open(&category.name) { "category open" } else { "category" },
                                    r#type: "button",
                                    aria_expanded: "{state.is_category_open(&category.name)}",
                                    onclick: {
                                        let name = category.name.clone();
                                        move |_| {
                                            nav.write().toggle_category(&name);
                                        }
                                    },
                                    "{category.name}"
                                }
                            }
                        }
                    }
                    a { class: "nav-link", href: "/pricing", "Pricing" }
                    div {
                        class: "nav-account",
                        a { class: "nav-link", href: "/login", "Log in" }
                        CtaLink { cta: config.cta.clone() }
                    }
                }
            }
            if let Some(category) = state.open_category_entry() {
                div {
                    class: "mega-menu-panel",
                    aria_label: "{category.name}",
                    for (index, item) in category.items.iter().enumerate() {
                        a {
                            key: "{index}",
                            class: "mega-menu-item",
                            href: "{item.href}",
                            onclick: {
                                let item = item.clone();
                                move |evt: MouseEvent| {
                                    evt.prevent_default();
                                    nav.write().follow(&item, &mut navigate_with(on_navigate));
                                }
                            },
                            if let Some(ref icon) = item.icon {
                                Icon { handle: icon.clone() }
                            }
                            div {
                                p { class: "item-title", "{item.title}" }
                                p { class: "item-description", "{item.description}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
