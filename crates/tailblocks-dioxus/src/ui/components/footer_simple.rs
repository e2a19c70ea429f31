use dioxus::prelude::*;
use tailblocks_engine::{PartialSimpleFooterConfig, Resolve};

use super::shared::{Copyright, LinkRow};

#[component]
pub fn FooterTailwindSimple(#[props(default)] config: PartialSimpleFooterConfig) -> Element {
    let config = config.resolve_defaults();

    rsx! {
        footer {
            class: "footer footer-simple",
            nav {
                aria_label: "Footer",
                LinkRow { links: config.links.clone() }
            }
            Copyright { holder: "{config.company_name}, Inc" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use tailblocks_engine::LinkItem;

    fn render_footer(config: PartialSimpleFooterConfig) -> String {
        let mut dom = VirtualDom::new_with_props(FooterTailwindSimple, FooterTailwindSimpleProps { config });
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_simple_footer_defaults() {
        let html = render_footer(PartialSimpleFooterConfig::default());

        assert_eq!(html.matches("<li").count(), 6);
        assert!(html.contains("Accessibility"));
    }

    #[test]
    fn test_simple_footer_override() {
        let html = render_footer(PartialSimpleFooterConfig {
            company_name: Some("Globex".to_string()),
            links: Some(vec![LinkItem::new("Home", "/")]),
        });

        assert_eq!(html.matches("<li").count(), 1);
        assert!(html.contains("Globex, Inc. All rights reserved."));
    }
}
