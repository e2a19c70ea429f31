use dioxus::prelude::*;
use tailblocks_engine::{NewsletterFooter, PartialNewsletterFooterConfig, Resolve, Submission};

use super::shared::{Copyright, LinkColumn, submit_with};
use crate::ui::live::use_live_block;

/// Link columns above an email signup form
#[component]
pub fn FooterFlowbiteNewsletter(
    #[props(default)] config: PartialNewsletterFooterConfig,
    on_subscribe: Option<EventHandler<Submission>>,
) -> Element {
    let mut footer = use_live_block::<NewsletterFooter>(config.resolve_defaults());
    let state = footer.read();
    let config = state.config();
    let email = state.email();

    rsx! {
        footer {
            class: "footer footer-newsletter",
            div {
                class: "footer-top",
                a {
                    class: "brand",
                    href: "/",
                    img { class: "brand-logo", src: "/favicon.svg", alt: "{config.brand_name} Logo" }
                    span { class: "brand-name", "{config.brand_name}" }
                }
                div {
                    class: "link-columns",
                    for (index, section) in config.sections.iter().enumerate() {
                        LinkColumn { key: "{index}", section: section.clone() }
                    }
                }
            }
            div {
                class: "newsletter",
                div {
                    h3 { "{config.newsletter_title}" }
                    p { "{config.newsletter_description}" }
                }
                form {
                    class: "newsletter-form",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        footer.read().subscribe(&mut submit_with(on_subscribe));
                    },
                    input {
                        r#type: "email",
                        placeholder: "Enter your email",
                        required: true,
                        value: "{email}",
                        oninput: move |evt: FormEvent| {
                            footer.write().set_email(evt.value());
                        },
                    }
                    button { r#type: "submit", "Subscribe" }
                }
            }
            hr {}
            Copyright {
                holder: "{config.brand_name}™",
                href: "/",
                notice: "All Rights Reserved.",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    fn render_footer(config: PartialNewsletterFooterConfig) -> String {
        let mut dom = VirtualDom::new_with_props(
            FooterFlowbiteNewsletter,
            FooterFlowbiteNewsletterProps {
                config,
                on_subscribe: None,
            },
        );
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_newsletter_defaults() {
        let html = render_footer(PartialNewsletterFooterConfig::default());

        assert!(html.contains("Subscribe to our newsletter"));
        assert!(html.contains(r#"type="email""#));
        assert!(html.contains("Help center"));
        assert!(html.contains(r#"<a href="/">Flowbite™</a>"#));
        assert!(html.contains(". All Rights Reserved."));
        assert!(!html.contains("All rights reserved."));
    }

    #[test]
    fn test_newsletter_title_override() {
        let html = render_footer(PartialNewsletterFooterConfig {
            newsletter_title: Some("Weekly digest".to_string()),
            ..Default::default()
        });

        assert!(html.contains("Weekly digest"));
        assert!(html.contains("Stay up to date with our latest news and products."));
    }
}
