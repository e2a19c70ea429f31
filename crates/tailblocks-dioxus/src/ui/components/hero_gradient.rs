use dioxus::prelude::*;
use tailblocks_engine::{PartialGradientHeroConfig, Resolve};

use super::shared::CtaLink;

#[component]
pub fn HeroDaisyUiGradient(#[props(default)] config: PartialGradientHeroConfig) -> Element {
    let config = config.resolve_defaults();

    rsx! {
        div {
            class: "hero hero-gradient",
            div {
                class: "hero-content",
                h1 { "{config.title}" }
                p { "{config.subtitle}" }
                CtaLink { cta: config.button.clone() }
            }
        }
    }
}
