use dioxus::prelude::*;
use tailblocks_engine::{PartialGridFooterConfig, Resolve};

use super::shared::SocialLinks;

#[component]
pub fn FooterDaisyUiGrid(#[props(default)] config: PartialGridFooterConfig) -> Element {
    let config = config.resolve_defaults();

    rsx! {
        footer {
            class: "footer footer-grid",
            nav {
                h6 { class: "footer-title", "{config.company_name}" }
                SocialLinks { links: config.social_links.clone() }
            }
            for (index, section) in config.sections.iter().enumerate() {
                nav {
                    key: "{index}",
                    h6 { class: "footer-title", "{section.title}" }
                    for (link_index, link) in section.links.iter().enumerate() {
                        a { key: "{link_index}", class: "link link-hover", href: "{link.href}", "{link.name}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use pretty_assertions::assert_eq;
    use tailblocks_engine::{LinkItem, LinkSection, SocialLink};

    fn render_footer(config: PartialGridFooterConfig) -> String {
        let mut dom = VirtualDom::new_with_props(FooterDaisyUiGrid, FooterDaisyUiGridProps { config });
        dom.rebuild_in_place();
        render(&dom)
    }

    fn section_titles(html: &str) -> Vec<&str> {
        html.split(r#"<h6 class="footer-title">"#)
            .skip(1)
            .filter_map(|rest| rest.split("</h6>").next())
            .collect()
    }

    #[test]
    fn test_no_config_shows_default_sections() {
        let html = render_footer(PartialGridFooterConfig::default());

        assert_eq!(
            section_titles(&html),
            vec!["ACME Ltd", "Services", "Company", "Legal"]
        );
        assert!(html.contains(r#"href="/press""#));
    }

    #[test]
    fn test_sections_and_social_override() {
        let html = render_footer(PartialGridFooterConfig {
            company_name: Some("Initech".to_string()),
            sections: Some(vec![LinkSection::new(
                "Docs",
                [LinkItem::new("API", "/api")],
            )]),
            social_links: Some(vec![SocialLink::new("GitHub", "https://github.com", "gh")]),
        });

        assert_eq!(section_titles(&html), vec!["Initech", "Docs"]);
        assert!(html.contains("social-links"));
        assert!(html.contains(r#"href="https://github.com""#));
    }
}
