pub mod error_panel;
pub mod footer_brand;
pub mod footer_corporate;
pub mod footer_disclosure;
pub mod footer_grid;
pub mod footer_links;
pub mod footer_newsletter;
pub mod footer_simple;
pub mod hero_cta;
pub mod hero_gradient;
pub mod hero_split;
pub mod hero_stats;
pub mod hero_tabs;
pub mod nav_basic;
pub mod nav_dropdown;
pub mod nav_mega;
pub mod nav_search;
pub mod shared;

pub use error_panel::ErrorPanel;
pub use footer_brand::FooterFlowbiteSimple;
pub use footer_corporate::FooterTailwindCorporate;
pub use footer_disclosure::FooterHeadlessUiDisclosure;
pub use footer_grid::FooterDaisyUiGrid;
pub use footer_links::FooterPrelineLinks;
pub use footer_newsletter::FooterFlowbiteNewsletter;
pub use footer_simple::FooterTailwindSimple;
pub use hero_cta::HeroPrelineCta;
pub use hero_gradient::HeroDaisyUiGradient;
pub use hero_split::HeroFlowbiteSplit;
pub use hero_stats::HeroTailwindStats;
pub use hero_tabs::HeroHeadlessUiTabs;
pub use nav_basic::NavFlowbiteBasic;
pub use nav_dropdown::NavFlowbiteDropdown;
pub use nav_mega::NavPrelineMega;
pub use nav_search::NavDaisyUiSearch;
