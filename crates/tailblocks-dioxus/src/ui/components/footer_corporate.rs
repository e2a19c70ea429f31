use dioxus::prelude::*;
use tailblocks_engine::{PartialCorporateFooterConfig, Resolve};

use super::shared::{Copyright, LinkColumn, SocialLinks};

#[component]
pub fn FooterTailwindCorporate(#[props(default)] config: PartialCorporateFooterConfig) -> Element {
    let config = config.resolve_defaults();
    let company = &config.company;

    rsx! {
        footer {
            class: "footer footer-corporate",
            div {
                class: "footer-grid",
                div {
                    class: "company",
                    img { class: "company-logo", src: "{company.logo_src}", alt: "{company.name}" }
                    p { "{company.description}" }
                    SocialLinks { links: config.social_links.clone() }
                }
                div {
                    class: "link-columns",
                    for (index, section) in config.sections.iter().enumerate() {
                        LinkColumn { key: "{index}", section: section.clone() }
                    }
                }
            }
            div {
                class: "footer-bottom",
                Copyright { holder: "{company.name}, Inc" }
            }
        }
    }
}
