use dioxus::prelude::*;
use tailblocks_engine::{DisclosureFooter, PartialDisclosureFooterConfig, Resolve};

use super::shared::{Copyright, LinkRow};
use crate::ui::live::use_live_block;

/// Footer whose sections are independent disclosures, all closed at first
#[component]
pub fn FooterHeadlessUiDisclosure(
    #[props(default)] config: PartialDisclosureFooterConfig,
) -> Element {
    let mut footer = use_live_block::<DisclosureFooter>(config.resolve_defaults());
    let state = footer.read();
    let config = state.config();

    rsx! {
        footer {
            class: "footer footer-disclosure",
            div {
                class: "disclosure-sections",
                for (index, section) in config.sections.iter().enumerate() {
                    div {
                        key: "{index}",
                        class: "disclosure",
                        button {
                            class: if state.is_section_open(index) { "disclosure-button open" } else { "disclosure-button" },
                            r#type: "button",
                            aria_expanded: "{state.is_section_open(index)}",
                            onclick: move |_| {
                                footer.write().toggle_section(index);
                            },
                            h3 { "{section.title}" }
                        }
                        if state.is_section_open(index) {
                            ul {
                                class: "disclosure-panel",
                                role: "list",
                                for (link_index, link) in section.links.iter().enumerate() {
                                    li {
                                        key: "{link_index}",
                                        a {
                                            href: "{link.href}",
                                            div { class: "link-name", "{link.name}" }
                                            if let Some(ref description) = link.description {
                                                div { class: "link-description", "{description}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            div {
                class: "company",
                h3 { "{config.company_name}" }
                p { "{config.description}" }
            }
            div {
                class: "footer-bottom",
                Copyright { holder: "{config.company_name}, Inc" }
                LinkRow { links: config.legal_links.clone(), class: "legal-links" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    #[test]
    fn test_sections_start_closed() {
        let mut dom = VirtualDom::new_with_props(
            FooterHeadlessUiDisclosure,
            FooterHeadlessUiDisclosureProps {
                config: PartialDisclosureFooterConfig::default(),
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("<h3>Solutions</h3>"));
        assert!(html.contains("<h3>Support</h3>"));
        assert!(!html.contains("disclosure-panel"));
        assert!(!html.contains("Grow your customer base"));
        assert_eq!(html.matches(r#"aria-expanded="false""#).count(), 2);
        assert!(html.contains("Your Company, Inc. All rights reserved."));
    }
}
