use dioxus::prelude::*;
use tailblocks_engine::{PartialSearchNavConfig, Resolve, SearchNav, Submission};

use super::shared::{navigate_with, submit_with};
use crate::ui::live::use_live_block;

#[component]
pub fn NavDaisyUiSearch(
    #[props(default)] config: PartialSearchNavConfig,
    on_search: Option<EventHandler<Submission>>,
    on_navigate: Option<EventHandler<String>>,
) -> Element {
    let mut nav = use_live_block::<SearchNav>(config.resolve_defaults());
    let state = nav.read();
    let config = state.config();
    let query = state.query();
    let menu_open = state.is_avatar_menu_open();

    rsx! {
        div {
            class: "navbar nav-search",
            div {
                class: "navbar-start",
                a { class: "brand-name", href: "/", "{config.brand_name}" }
            }
            div {
                class: "navbar-end",
                form {
                    class: "search-form",
                    role: "search",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        nav.read().search(&mut submit_with(on_search));
                    },
                    input {
                        class: "input search-input",
                        r#type: "search",
                        placeholder: "{config.search_placeholder}",
                        value: "{query}",
                        oninput: move |evt: FormEvent| {
                            nav.write().set_query(evt.value());
                        },
                    }
                }
                div {
                    class: "avatar-menu",
                    button {
                        class: "avatar-button",
                        r#type: "button",
                        aria_haspopup: "menu",
                        aria_expanded: "{menu_open}",
                        onclick: move |_| {
                            nav.write().toggle_avatar_menu();
                        },
                        img { class: "avatar", src: "{config.avatar_src}", alt: "Avatar" }
                    }
                    if menu_open {
                        ul {
                            class: "menu dropdown-content",
                            role: "menu",
                            for (index, item) in config.menu_items.iter().enumerate() {
                                li {
                                    key: "{index}",
                                    a {
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
                                        if let Some(ref badge) = item.badge {
                                            span { class: "badge", "{badge}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
