use chrono::Datelike;
use dioxus::prelude::*;
use tailblocks_engine::{Cta, IconHandle, LinkItem, LinkSection, SocialLink, Submission};

/// Opaque icon handle shown as-is
#[component]
pub fn Icon(handle: IconHandle) -> Element {
    rsx! {
        span { class: "icon", aria_hidden: "true", "{handle}" }
    }
}

#[component]
pub fn CtaLink(cta: Cta, #[props(default)] secondary: bool) -> Element {
    let class = if secondary { "cta cta-secondary" } else { "cta cta-primary" };
    rsx! {
        a { class: "{class}", href: "{cta.href}", "{cta.text}" }
    }
}

/// Inline list of links; the active one is marked for styling
#[component]
pub fn LinkRow(links: Vec<LinkItem>, #[props(default)] class: String) -> Element {
    rsx! {
        ul {
            class: "link-row {class}",
            for (index, link) in links.iter().enumerate() {
                li {
                    key: "{index}",
                    a {
                        class: if link.active { "link active" } else { "link" },
                        href: "{link.href}",
                        aria_current: if link.active { "page" },
                        "{link.name}"
                    }
                    if let Some(ref badge) = link.badge {
                        span { class: "badge", "{badge}" }
                    }
                }
            }
        }
    }
}

/// Footer column: a heading and its links
#[component]
pub fn LinkColumn(section: LinkSection) -> Element {
    rsx! {
        div {
            class: "link-column",
            h3 { "{section.title}" }
            ul {
                for (index, link) in section.links.iter().enumerate() {
                    li {
                        key: "{index}",
                        a { href: "{link.href}", "{link.name}" }
                        if let Some(ref description) = link.description {
                            p { class: "link-description", "{description}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn SocialLinks(links: Vec<SocialLink>) -> Element {
    if links.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "social-links",
            for (index, link) in links.iter().enumerate() {
                a {
                    key: "{index}",
                    href: "{link.href}",
                    title: "{link.name}",
                    Icon { handle: link.icon.clone() }
                    span { class: "sr-only", "{link.name}" }
                }
            }
        }
    }
}

/// "© <year> <holder>. All rights reserved." with the current year.
///
/// With `href` the holder is a link; `notice` replaces the trailing sentence.
#[component]
pub fn Copyright(
    holder: String,
    href: Option<String>,
    #[props(default = "All rights reserved.".to_string())] notice: String,
) -> Element {
    let year = chrono::Local::now().year();
    rsx! {
        p {
            class: "copyright",
            "© {year} "
            if let Some(href) = href {
                a { href: "{href}", "{holder}" }
            } else {
                "{holder}"
            }
            ". {notice}"
        }
    }
}

/// Route a navigation request to `handler`, or log it when nobody listens.
pub fn navigate_with(handler: Option<EventHandler<String>>) -> impl FnMut(&str) {
    move |href: &str| match handler {
        Some(handler) => handler.call(href.to_string()),
        None => log::info!("Navigation to {href} requested"),
    }
}

/// Route a form submission to `handler`, or log it when nobody listens.
pub fn submit_with(handler: Option<EventHandler<Submission>>) -> impl FnMut(Submission) {
    move |submission: Submission| match handler {
        Some(handler) => handler.call(submission),
        None => log::info!(
            "Unhandled {} submission: {:?}",
            submission.intent,
            submission.value
        ),
    }
}
