use dioxus::prelude::*;
use tailblocks_engine::{PartialCtaHeroConfig, Resolve};

use super::shared::CtaLink;

#[component]
pub fn HeroPrelineCta(#[props(default)] config: PartialCtaHeroConfig) -> Element {
    let config = config.resolve_defaults();

    rsx! {
        section {
            class: "hero hero-cta",
            h1 { "{config.title}" }
            p { class: "hero-subtitle", "{config.subtitle}" }
            ul {
                class: "feature-list",
                for (index, feature) in config.features.iter().enumerate() {
                    li { key: "{index}", span { class: "check", "✓" } "{feature}" }
                }
            }
            div {
                class: "hero-actions",
                CtaLink { cta: config.primary_cta.clone() }
                CtaLink { cta: config.secondary_cta.clone(), secondary: true }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    fn render_hero(config: PartialCtaHeroConfig) -> String {
        let mut dom = VirtualDom::new_with_props(HeroPrelineCta, HeroPrelineCtaProps { config });
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_cta_hero_lists_default_features() {
        let html = render_hero(PartialCtaHeroConfig::default());

        assert_eq!(html.matches("<li").count(), 4);
        assert!(html.contains("24/7 customer support"));
        assert!(html.contains(r#"href="/trial""#));
    }

    #[test]
    fn test_features_replaced_wholesale() {
        let html = render_hero(PartialCtaHeroConfig {
            features: Some(vec!["Only this".to_string()]),
            ..Default::default()
        });

        assert_eq!(html.matches("<li").count(), 1);
        assert!(html.contains("Only this"));
        assert!(!html.contains("24/7 customer support"));
    }
}
