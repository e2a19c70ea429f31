use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Unknown block: {0}")]
    UnknownBlock(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockCategory {
    Navigation,
    Hero,
    Footer,
}

impl fmt::Display for BlockCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BlockCategory::Navigation => "Navigation",
            BlockCategory::Hero => "Hero",
            BlockCategory::Footer => "Footer",
        };
        f.write_str(name)
    }
}

/// Every block in the gallery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum BlockKind {
    NavFlowbiteBasic,
    NavFlowbiteDropdown,
    NavPrelineMega,
    NavDaisyUiSearch,
    HeroDaisyUiGradient,
    HeroFlowbiteSplit,
    HeroHeadlessUiTabs,
    HeroPrelineCta,
    HeroTailwindStats,
    FooterDaisyUiGrid,
    FooterFlowbiteNewsletter,
    FooterFlowbiteSimple,
    FooterHeadlessUiDisclosure,
    FooterPrelineLinks,
    FooterTailwindCorporate,
    FooterTailwindSimple,
}

impl BlockKind {
    /// Gallery order: navigation, then heroes, then footers.
    pub const ALL: [BlockKind; 16] = [
        BlockKind::NavFlowbiteBasic,
        BlockKind::NavFlowbiteDropdown,
        BlockKind::NavPrelineMega,
        BlockKind::NavDaisyUiSearch,
        BlockKind::HeroDaisyUiGradient,
        BlockKind::HeroFlowbiteSplit,
        BlockKind::HeroHeadlessUiTabs,
        BlockKind::HeroPrelineCta,
        BlockKind::HeroTailwindStats,
        BlockKind::FooterDaisyUiGrid,
        BlockKind::FooterFlowbiteNewsletter,
        BlockKind::FooterFlowbiteSimple,
        BlockKind::FooterHeadlessUiDisclosure,
        BlockKind::FooterPrelineLinks,
        BlockKind::FooterTailwindCorporate,
        BlockKind::FooterTailwindSimple,
    ];

    /// Stable identifier used in config files and element ids
    pub fn id(self) -> &'static str {
        match self {
            BlockKind::NavFlowbiteBasic => "nav-flowbite-basic",
            BlockKind::NavFlowbiteDropdown => "nav-flowbite-dropdown",
            BlockKind::NavPrelineMega => "nav-preline-mega",
            BlockKind::NavDaisyUiSearch => "nav-daisyui-search",
            BlockKind::HeroDaisyUiGradient => "hero-daisyui-gradient",
            BlockKind::HeroFlowbiteSplit => "hero-flowbite-split",
            BlockKind::HeroHeadlessUiTabs => "hero-headlessui-tabs",
            BlockKind::HeroPrelineCta => "hero-preline-cta",
            BlockKind::HeroTailwindStats => "hero-tailwind-stats",
            BlockKind::FooterDaisyUiGrid => "footer-daisyui-grid",
            BlockKind::FooterFlowbiteNewsletter => "footer-flowbite-newsletter",
            BlockKind::FooterFlowbiteSimple => "footer-flowbite-simple",
            BlockKind::FooterHeadlessUiDisclosure => "footer-headlessui-disclosure",
            BlockKind::FooterPrelineLinks => "footer-preline-links",
            BlockKind::FooterTailwindCorporate => "footer-tailwind-corporate",
            BlockKind::FooterTailwindSimple => "footer-tailwind-simple",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            BlockKind::NavFlowbiteBasic => "Basic navbar",
            BlockKind::NavFlowbiteDropdown => "Navbar with user dropdown",
            BlockKind::NavPrelineMega => "Mega-menu header",
            BlockKind::NavDaisyUiSearch => "Navbar with search",
            BlockKind::HeroDaisyUiGradient => "Gradient hero",
            BlockKind::HeroFlowbiteSplit => "Split hero",
            BlockKind::HeroHeadlessUiTabs => "Tabbed hero",
            BlockKind::HeroPrelineCta => "Call-to-action hero",
            BlockKind::HeroTailwindStats => "Hero with stats",
            BlockKind::FooterDaisyUiGrid => "Grid footer",
            BlockKind::FooterFlowbiteNewsletter => "Newsletter footer",
            BlockKind::FooterFlowbiteSimple => "Brand footer",
            BlockKind::FooterHeadlessUiDisclosure => "Collapsible footer",
            BlockKind::FooterPrelineLinks => "Link columns footer",
            BlockKind::FooterTailwindCorporate => "Corporate footer",
            BlockKind::FooterTailwindSimple => "Simple footer",
        }
    }

    pub fn category(self) -> BlockCategory {
        match self {
            BlockKind::NavFlowbiteBasic
            | BlockKind::NavFlowbiteDropdown
            | BlockKind::NavPrelineMega
            | BlockKind::NavDaisyUiSearch => BlockCategory::Navigation,
            BlockKind::HeroDaisyUiGradient
            | BlockKind::HeroFlowbiteSplit
            | BlockKind::HeroHeadlessUiTabs
            | BlockKind::HeroPrelineCta
            | BlockKind::HeroTailwindStats => BlockCategory::Hero,
            _ => BlockCategory::Footer,
        }
    }

    /// Whether the block carries local interaction state
    pub fn is_interactive(self) -> bool {
        matches!(
            self,
            BlockKind::NavFlowbiteBasic
                | BlockKind::NavFlowbiteDropdown
                | BlockKind::NavPrelineMega
                | BlockKind::NavDaisyUiSearch
                | BlockKind::HeroHeadlessUiTabs
                | BlockKind::FooterFlowbiteNewsletter
                | BlockKind::FooterHeadlessUiDisclosure
        )
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for BlockKind {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlockKind::ALL
            .into_iter()
            .find(|kind| kind.id() == s)
            .ok_or_else(|| CatalogError::UnknownBlock(s.to_string()))
    }
}

impl TryFrom<String> for BlockKind {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BlockKind> for String {
    fn from(kind: BlockKind) -> Self {
        kind.id().to_string()
    }
}
