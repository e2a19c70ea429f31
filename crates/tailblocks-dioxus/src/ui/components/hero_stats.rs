use dioxus::prelude::*;
use tailblocks_engine::{PartialStatsHeroConfig, Resolve};

use super::shared::CtaLink;

#[component]
pub fn HeroTailwindStats(#[props(default)] config: PartialStatsHeroConfig) -> Element {
    let config = config.resolve_defaults();

    rsx! {
        section {
            class: "hero hero-stats",
            h1 { "{config.title}" }
            p { "{config.description}" }
            dl {
                class: "stats",
                for (index, stat) in config.stats.iter().enumerate() {
                    div {
                        key: "{index}",
                        class: "stat",
                        dt { "{stat.label}" }
                        dd { "{stat.value}" }
                    }
                }
            }
            CtaLink { cta: config.cta.clone() }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use tailblocks_engine::Stat;

    fn render_hero(config: PartialStatsHeroConfig) -> String {
        let mut dom = VirtualDom::new_with_props(HeroTailwindStats, HeroTailwindStatsProps { config });
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_default_stats() {
        let html = render_hero(PartialStatsHeroConfig::default());

        assert_eq!(html.matches("<dt>").count(), 4);
        assert!(html.contains("<dd>8,000+</dd>"));
        assert!(html.contains("<dt>Latency</dt>"));
    }

    #[test]
    fn test_custom_stats() {
        let html = render_hero(PartialStatsHeroConfig {
            stats: Some(vec![Stat::new("1", "Crate")]),
            ..Default::default()
        });

        assert_eq!(html.matches("<dt>").count(), 1);
        assert!(html.contains("<dd>1</dd>"));
        assert!(html.contains("Deploy to the cloud with confidence"));
    }
}
