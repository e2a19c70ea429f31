//! Blocks that pair their resolved configuration with interaction state.

pub mod account_nav;
pub mod catalog;
pub mod collapsible_footer;
pub mod mega_menu;
pub mod newsletter;
pub mod tabbed_hero;

pub use account_nav::{DropdownNav, SearchNav, USER_MENU};
pub use catalog::{BlockCategory, BlockKind, CatalogError};
pub use collapsible_footer::DisclosureFooter;
pub use mega_menu::MegaMenuNav;
pub use newsletter::NewsletterFooter;
pub use tabbed_hero::TabbedHero;
