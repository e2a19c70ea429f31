use dioxus::prelude::*;
use tailblocks_engine::{PartialSplitHeroConfig, Resolve};

use super::shared::CtaLink;

/// Copy and calls to action beside a product image
#[component]
pub fn HeroFlowbiteSplit(#[props(default)] config: PartialSplitHeroConfig) -> Element {
    let config = config.resolve_defaults();

    rsx! {
        section {
            class: "hero hero-split",
            div {
                class: "hero-copy",
                h1 { "{config.title}" }
                p { "{config.description}" }
                div {
                    class: "hero-actions",
                    CtaLink { cta: config.primary_cta.clone() }
                    CtaLink { cta: config.secondary_cta.clone(), secondary: true }
                }
            }
            div {
                class: "hero-image",
                img { src: "{config.image_src}", alt: "mockup" }
            }
        }
    }
}
