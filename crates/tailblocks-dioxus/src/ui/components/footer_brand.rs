use dioxus::prelude::*;
use tailblocks_engine::{PartialBrandFooterConfig, Resolve};

use super::shared::{Copyright, LinkRow, SocialLinks};

/// Logo, a row of links and the copyright line
#[component]
pub fn FooterFlowbiteSimple(#[props(default)] config: PartialBrandFooterConfig) -> Element {
    let config = config.resolve_defaults();

    rsx! {
        footer {
            class: "footer footer-brand",
            div {
                class: "footer-top",
                a {
                    class: "brand",
                    href: "{config.brand_href}",
                    img { class: "brand-logo", src: "{config.logo_src}", alt: "{config.brand_name} Logo" }
                    span { class: "brand-name", "{config.brand_name}" }
                }
                LinkRow { links: config.links.clone() }
            }
            hr {}
            div {
                class: "footer-bottom",
                Copyright { holder: config.brand_name.clone() }
                SocialLinks { links: config.social_links.clone() }
            }
        }
    }
}
