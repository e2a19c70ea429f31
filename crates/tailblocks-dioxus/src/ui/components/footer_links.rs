use dioxus::prelude::*;
use tailblocks_engine::{PartialLinksFooterConfig, Resolve};

use super::shared::{Copyright, LinkColumn, SocialLinks};

#[component]
pub fn FooterPrelineLinks(#[props(default)] config: PartialLinksFooterConfig) -> Element {
    let config = config.resolve_defaults();

    rsx! {
        footer {
            class: "footer footer-links",
            div {
                class: "footer-grid",
                div {
                    class: "brand-column",
                    a { class: "brand-name", href: "/", "{config.brand_name}" }
                    p { "{config.brand_description}" }
                }
                for (index, section) in config.sections.iter().enumerate() {
                    LinkColumn { key: "{index}", section: section.clone() }
                }
            }
            div {
                class: "footer-bottom",
                Copyright { holder: config.brand_name.clone() }
                SocialLinks { links: config.social_links.clone() }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use tailblocks_engine::SocialLink;

    fn render_footer(config: PartialLinksFooterConfig) -> String {
        let mut dom = VirtualDom::new_with_props(FooterPrelineLinks, FooterPrelineLinksProps { config });
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_links_footer_defaults() {
        let html = render_footer(PartialLinksFooterConfig::default());

        assert!(html.contains("<h3>Product</h3>"));
        assert!(html.contains("<h3>Resources</h3>"));
        assert!(!html.contains("social-links"));
    }

    #[test]
    fn test_social_links_override() {
        let html = render_footer(PartialLinksFooterConfig {
            social_links: Some(vec![SocialLink::new("X", "https://x.com/preline", "x")]),
            ..Default::default()
        });

        assert!(html.contains("social-links"));
        assert!(html.contains(r#"title="X""#));
        assert!(html.contains("<h3>Company</h3>"));
    }
}
