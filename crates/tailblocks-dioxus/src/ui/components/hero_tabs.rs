use dioxus::prelude::*;
use tailblocks_engine::{PartialTabsHeroConfig, Resolve, TabbedHero, TabsHeroConfig};

use super::shared::CtaLink;

/// Hero with a tab list; only the selected tab's panel is shown
#[component]
pub fn HeroHeadlessUiTabs(#[props(default)] config: PartialTabsHeroConfig) -> Element {
    let config = config.resolve_defaults();
    let mut hero = use_signal(|| TabbedHero::new(config.clone()).ok());
    sync_tabs(hero, &config);
    let active = hero.read().as_ref().map(|tabbed| tabbed.tabs().current());

    rsx! {
        section {
            class: "hero hero-tabs",
            div {
                class: "hero-header",
                h1 { "{config.title}" }
                p { "{config.description}" }
            }
            if !config.tabs.is_empty() {
                div {
                    class: "tab-group",
                    div {
                        class: "tab-list",
                        role: "tablist",
                        onkeydown: move |evt: KeyboardEvent| {
                            let mut state = hero.write();
                            let Some(tabbed) = state.as_mut() else {
                                return;
                            };
                            match evt.key() {
                                Key::ArrowRight => {
                                    tabbed.select_next();
                                }
                                Key::ArrowLeft => {
                                    tabbed.select_previous();
                                }
                                _ => {}
                            }
                        },
                        for (index, tab) in config.tabs.iter().enumerate() {
                            button {
                                key: "{index}",
                                class: if active == Some(index) { "tab selected" } else { "tab" },
                                r#type: "button",
                                role: "tab",
                                aria_selected: "{active == Some(index)}",
                                onclick: move |_| {
                                    if let Some(tabbed) = hero.write().as_mut() {
                                        tabbed.select(index);
                                    }
                                },
                                "{tab.name}"
                            }
                        }
                    }
                    if let Some(tab) = active.and_then(|index| config.tabs.get(index)) {
                        div {
                            class: "tab-panel",
                            role: "tabpanel",
                            div {
                                h2 { "{tab.content.title}" }
                                p { "{tab.content.description}" }
                                ul {
                                    class: "feature-list",
                                    for (index, feature) in tab.content.features.iter().enumerate() {
                                        li { key: "{index}", "{feature}" }
                                    }
                                }
                            }
                            img { class: "tab-image", src: "{tab.content.image}", alt: "{tab.name}" }
                        }
                    }
                }
            }
            div {
                class: "hero-actions",
                CtaLink { cta: config.cta.clone() }
            }
        }
    }
}

/// Point the tab state at new content, keeping the selection where possible.
///
/// An empty tab list leaves the state alone; there is nothing to select.
fn sync_tabs(mut hero: Signal<Option<TabbedHero>>, config: &TabsHeroConfig) {
    if config.tabs.is_empty() {
        return;
    }
    let stale = match &*hero.peek() {
        Some(current) => current.config() != config,
        None => true,
    };
    if !stale {
        return;
    }

    let mut state = hero.write();
    match state.take() {
        Some(mut current) => {
            if let Err(e) = current.reconfigure(config.clone()) {
                log::warn!("Keeping previous tabs: {e}");
            }
            *state = Some(current);
        }
        None => *state = TabbedHero::new(config.clone()).ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::{NoOpMutations, ScopeId, VirtualDom};
    use dioxus_ssr::render;
    use std::cell::Cell;
    use std::rc::Rc;
    use tailblocks_engine::{HeroTab, TabContent};

    fn render_hero(config: PartialTabsHeroConfig) -> String {
        let mut dom = VirtualDom::new_with_props(HeroHeadlessUiTabs, HeroHeadlessUiTabsProps { config });
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_first_tab_is_selected_initially() {
        let html = render_hero(PartialTabsHeroConfig::default());

        assert!(html.contains("Analytics"));
        assert!(html.contains("Reports"));
        assert!(html.contains("Get actionable data that will help grow your business"));
        assert!(!html.contains("Detailed reporting for all your campaigns"));
        assert_eq!(html.matches(r#"aria-selected="true""#).count(), 1);
        assert_eq!(html.matches(r#"role="tabpanel""#).count(), 1);
    }

    #[test]
    fn test_empty_tab_list_renders_header_only() {
        let html = render_hero(PartialTabsHeroConfig {
            tabs: Some(Vec::new()),
            ..Default::default()
        });

        assert!(html.contains("Everything you need to deploy your app"));
        assert!(!html.contains("tablist"));
        assert!(html.contains("Get started"));
    }

    #[test]
    fn test_single_custom_tab() {
        let html = render_hero(PartialTabsHeroConfig {
            tabs: Some(vec![HeroTab {
                name: "Docs".to_string(),
                content: TabContent {
                    title: "Read the manual".to_string(),
                    description: "All of it".to_string(),
                    features: vec!["Search".to_string()],
                    image: "/docs.png".to_string(),
                },
            }]),
            ..Default::default()
        });

        assert!(html.contains("Read the manual"));
        assert!(!html.contains("Analytics"));
        assert_eq!(html.matches(r#"role="tab""#).count(), 1);
    }

    type HeroSlot = Rc<Cell<Option<Signal<Option<TabbedHero>>>>>;

    #[component]
    fn TabsHost() -> Element {
        let slot = use_context::<HeroSlot>();
        let config = use_context::<Signal<TabsHeroConfig>>()();
        let hero = use_signal(|| TabbedHero::new(config.clone()).ok());
        use_hook(|| slot.set(Some(hero)));
        sync_tabs(hero, &config);

        let state = hero.read();
        let active = state.as_ref().map(|tabbed| tabbed.active_tab().name.clone());
        rsx! {
            h1 { "{config.title}" }
            if let Some(active) = active {
                p { class: "active-tab", "{active}" }
            }
        }
    }

    #[test]
    fn test_selection_survives_new_title() {
        let slot = HeroSlot::default();
        let mut dom = VirtualDom::new(TabsHost).with_root_context(slot.clone());
        let mut config = dom.in_scope(ScopeId::ROOT, || Signal::new(TabsHeroConfig::default()));
        dom.provide_root_context(config);
        dom.rebuild_in_place();
        let mut hero = slot.get().unwrap();

        dom.in_runtime(|| {
            if let Some(tabbed) = hero.write().as_mut() {
                tabbed.select(2);
            }
        });
        dom.render_immediate(&mut NoOpMutations);
        dom.in_runtime(|| {
            config.write().title = "Ship faster".to_string();
        });
        dom.render_immediate(&mut NoOpMutations);
        let html = render(&dom);

        assert!(html.contains("<h1>Ship faster</h1>"));
        assert!(html.contains(r#"<p class="active-tab">Integrations</p>"#));
    }
}
