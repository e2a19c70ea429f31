use dioxus::prelude::*;
use serde::de::DeserializeOwned;
use tailblocks_config::GalleryConfig;
use tailblocks_engine::BlockKind;
use tailblocks_engine::models::*;

use super::components::*;

pub const GALLERY_CSS: &str = include_str!("../assets/gallery.css");

/// Desktop window root: stylesheet plus the gallery
#[component]
pub fn App(config: GalleryConfig) -> Element {
    rsx! {
        style { {GALLERY_CSS} }
        Gallery { config }
    }
}

/// Every configured block, in order, each under its own anchor
#[component]
pub fn Gallery(config: GalleryConfig) -> Element {
    let blocks = config.blocks();

    rsx! {
        div {
            class: "gallery",
            header {
                class: "gallery-header",
                h1 { "{config.title()}" }
                nav {
                    class: "gallery-index",
                    for (index, kind) in blocks.iter().enumerate() {
                        a { key: "{index}", href: "#{kind.id()}", "{kind.display_name()}" }
                    }
                }
            }
            main {
                for (index, kind) in blocks.iter().copied().enumerate() {
                    section {
                        key: "{index}",
                        id: "{kind.id()}",
                        class: "gallery-block",
                        div {
                            class: "gallery-block-header",
                            h2 { "{kind.display_name()}" }
                            span { class: "gallery-category", "{kind.category()}" }
                            if kind.is_interactive() {
                                span { class: "gallery-badge", "interactive" }
                            }
                        }
                        {block_view(&config, kind)}
                    }
                }
            }
        }
    }
}

fn block_view(gallery: &GalleryConfig, kind: BlockKind) -> Element {
    match kind {
        BlockKind::NavFlowbiteBasic => with_partial(gallery, kind, |config: PartialBasicNavConfig| {
            rsx! { NavFlowbiteBasic { config } }
        }),
        BlockKind::NavFlowbiteDropdown => {
            with_partial(gallery, kind, |config: PartialDropdownNavConfig| {
                rsx! { NavFlowbiteDropdown { config } }
            })
        }
        BlockKind::NavPrelineMega => with_partial(gallery, kind, |config: PartialMegaMenuNavConfig| {
            rsx! { NavPrelineMega { config } }
        }),
        BlockKind::NavDaisyUiSearch => with_partial(gallery, kind, |config: PartialSearchNavConfig| {
            rsx! { NavDaisyUiSearch { config } }
        }),
        BlockKind::HeroDaisyUiGradient => {
            with_partial(gallery, kind, |config: PartialGradientHeroConfig| {
                rsx! { HeroDaisyUiGradient { config } }
            })
        }
        BlockKind::HeroFlowbiteSplit => with_partial(gallery, kind, |config: PartialSplitHeroConfig| {
            rsx! { HeroFlowbiteSplit { config } }
        }),
        BlockKind::HeroHeadlessUiTabs => with_partial(gallery, kind, |config: PartialTabsHeroConfig| {
            rsx! { HeroHeadlessUiTabs { config } }
        }),
        BlockKind::HeroPrelineCta => with_partial(gallery, kind, |config: PartialCtaHeroConfig| {
            rsx! { HeroPrelineCta { config } }
        }),
        BlockKind::HeroTailwindStats => with_partial(gallery, kind, |config: PartialStatsHeroConfig| {
            rsx! { HeroTailwindStats { config } }
        }),
        BlockKind::FooterDaisyUiGrid => with_partial(gallery, kind, |config: PartialGridFooterConfig| {
            rsx! { FooterDaisyUiGrid { config } }
        }),
        BlockKind::FooterFlowbiteNewsletter => {
            with_partial(gallery, kind, |config: PartialNewsletterFooterConfig| {
                rsx! { FooterFlowbiteNewsletter { config } }
            })
        }
        BlockKind::FooterFlowbiteSimple => {
            with_partial(gallery, kind, |config: PartialBrandFooterConfig| {
                rsx! { FooterFlowbiteSimple { config } }
            })
        }
        BlockKind::FooterHeadlessUiDisclosure => {
            with_partial(gallery, kind, |config: PartialDisclosureFooterConfig| {
                rsx! { FooterHeadlessUiDisclosure { config } }
            })
        }
        BlockKind::FooterPrelineLinks => with_partial(gallery, kind, |config: PartialLinksFooterConfig| {
            rsx! { FooterPrelineLinks { config } }
        }),
        BlockKind::FooterTailwindCorporate => {
            with_partial(gallery, kind, |config: PartialCorporateFooterConfig| {
                rsx! { FooterTailwindCorporate { config } }
            })
        }
        BlockKind::FooterTailwindSimple => {
            with_partial(gallery, kind, |config: PartialSimpleFooterConfig| {
                rsx! { FooterTailwindSimple { config } }
            })
        }
    }
}

/// Render `view` with the block's override, or an error panel if the
/// override does not fit the block.
fn with_partial<P>(gallery: &GalleryConfig, kind: BlockKind, view: impl FnOnce(P) -> Element) -> Element
where
    P: DeserializeOwned + Default,
{
    match gallery.partial::<P>(kind) {
        Ok(partial) => view(partial),
        Err(e) => {
            log::warn!("Rendering {kind} with an error panel: {e}");
            rsx! {
                ErrorPanel {
                    title: "Invalid block override",
                    message: "This block's override could not be applied.",
                    details: Some(e.to_string()),
                }
            }
        }
    }
}
