use serde::{Deserialize, Serialize};
use std::fmt;

use super::resolve::partial_config;

/// Opaque handle to an icon or image asset.
///
/// The engine never looks inside; an icon renderer decides whether it is an
/// emoji, a sprite id or an asset name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconHandle(String);

impl IconHandle {
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for IconHandle {
    fn from(handle: &str) -> Self {
        Self::new(handle)
    }
}

impl fmt::Display for IconHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single navigable link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkItem {
    #[serde(alias = "label")]
    pub name: String,
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

impl LinkItem {
    pub fn new(name: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
            description: None,
            active: false,
            badge: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    /// Mark the link as the current page.
    pub fn active(mut self) -> Self {
        self.active = true;
        self
    }
}

/// A titled group of links, e.g. one footer column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkSection {
    pub title: String,
    pub links: Vec<LinkItem>,
}

impl LinkSection {
    pub fn new(title: impl Into<String>, links: impl IntoIterator<Item = LinkItem>) -> Self {
        Self {
            title: title.into(),
            links: links.into_iter().collect(),
        }
    }
}

partial_config! {
    /// Call-to-action button target
    Cta / PartialCta {
        text: String => String,
        href: String => String,
    }
}

impl Cta {
    pub fn new(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            href: href.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

impl Stat {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// One entry in a mega-menu panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MegaMenuItem {
    pub title: String,
    #[serde(alias = "desc")]
    pub description: String,
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconHandle>,
}

impl MegaMenuItem {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        href: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            href: href.into(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<IconHandle>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// A top-level mega-menu entry and the items its panel previews
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MegaMenuCategory {
    pub name: String,
    pub items: Vec<MegaMenuItem>,
}

impl MegaMenuCategory {
    pub fn new(name: impl Into<String>, items: impl IntoIterator<Item = MegaMenuItem>) -> Self {
        Self {
            name: name.into(),
            items: items.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub href: String,
    pub icon: IconHandle,
}

impl SocialLink {
    pub fn new(
        name: impl Into<String>,
        href: impl Into<String>,
        icon: impl Into<IconHandle>,
    ) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
            icon: icon.into(),
        }
    }
}

/// Panel body shown while a hero tab is selected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabContent {
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroTab {
    pub name: String,
    pub content: TabContent,
}

partial_config! {
    /// Company identity block used by corporate footers
    CompanyInfo / PartialCompanyInfo {
        name: String => String,
        description: String => String,
        logo_src: String => String,
    }
}

/// Build a plain link list from `(name, href)` pairs.
pub(crate) fn link_list(pairs: &[(&str, &str)]) -> Vec<LinkItem> {
    pairs
        .iter()
        .map(|(name, href)| LinkItem::new(*name, *href))
        .collect()
}
