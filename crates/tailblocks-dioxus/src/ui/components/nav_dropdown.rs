use dioxus::prelude::*;
use tailblocks_engine::{DropdownNav, PartialDropdownNavConfig, Resolve};

use super::shared::{LinkRow, navigate_with};
use crate::ui::live::use_live_block;

/// Navbar whose avatar opens an account menu
#[component]
pub fn NavFlowbiteDropdown(
    #[props(default)] config: PartialDropdownNavConfig,
    on_navigate: Option<EventHandler<String>>,
) -> Element {
    let mut nav = use_live_block::<DropdownNav>(config.resolve_defaults());
    let state = nav.read();
    let config = state.config();
    let menu_open = state.is_user_menu_open();
    let expanded = state.is_collapse_open();

    rsx! {
        nav {
            class: "navbar nav-dropdown",
            a {
                class: "brand",
                href: "/",
                img { class: "brand-logo", src: "{config.logo_src}", alt: "{config.brand_name} Logo" }
                span { class: "brand-name", "{config.brand_name}" }
            }
            div {
                class: "nav-actions",
                button {
                    class: "avatar-button",
                    r#type: "button",
                    aria_haspopup: "menu",
                    aria_expanded: "{menu_open}",
                    onclick: move |_| {
                        nav.write().toggle_user_menu();
                    },
                    img { class: "avatar", src: "{config.user_avatar}", alt: "User settings" }
                }
                if menu_open {
                    div {
                        class: "dropdown-menu",
                        role: "menu",
                        div {
                            class: "dropdown-header",
                            span { class: "user-name", "{config.user_name}" }
                            span { class: "user-email", "{config.user_email}" }
                        }
                        for (index, item) in config.dropdown_items.iter().enumerate() {
                            a {
                                key: "{index}",
                                class: "dropdown-item",
                                role: "menuitem",
                                href: "{item.href}",
                                onclick: {
                                    let item = item.clone();
                                    move |evt: MouseEvent| {
                                        evt.prevent_default();
                                        nav.write().follow(&item, &mut navigate_with(on_navigate));
                                    }
                                },
                                "{item.name}"
                            }
                        }
                        hr { class: "dropdown-divider" }
                        a { class: "dropdown-item", role: "menuitem", href: "/logout", "Sign out" }
                    }
                }
                button {
                    class: "collapse-toggle",
                    r#type: "button",
                    aria_expanded: "{expanded}",
                    onclick: move |_| {
                        nav.write().toggle_collapse();
                    },
                    span { class: "sr-only", "Open main menu" }
                }
            }
            div {
                class: if expanded { "nav-collapse open" } else { "nav-collapse" },
                LinkRow { links: config.links.clone() }
            }
        }
    }
}
