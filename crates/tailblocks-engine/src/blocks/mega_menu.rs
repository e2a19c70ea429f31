use std::collections::HashSet;

use crate::interop::Navigator;
use crate::models::{MegaMenuCategory, MegaMenuItem, MegaMenuNavConfig};
use crate::state::{Disclosure, DropdownMenu};

/// Mega-menu header: one dropdown group over the category names plus the
/// mobile collapse toggle.
///
/// The collapse and the category group are independent; opening a category
/// does not expand the mobile menu and collapsing it leaves the open
/// category alone.
#[derive(Debug, Clone, PartialEq)]
pub struct MegaMenuNav {
    config: MegaMenuNavConfig,
    menu: DropdownMenu<String>,
    collapse: Disclosure,
}

impl MegaMenuNav {
    pub fn new(config: MegaMenuNavConfig) -> Self {
        Self {
            config: distinct_categories(config),
            menu: DropdownMenu::new(),
            collapse: Disclosure::new(),
        }
    }

    pub fn config(&self) -> &MegaMenuNavConfig {
        &self.config
    }

    pub fn menu(&self) -> &DropdownMenu<String> {
        &self.menu
    }

    pub fn is_category_open(&self, name: &str) -> bool {
        self.menu.is_open(name)
    }

    /// Open the named category, closing any other. Names that are not in the
    /// configuration are ignored.
    pub fn open_category(&mut self, name: &str) -> bool {
        if self.config.category(name).is_none() {
            log::debug!("Ignoring unknown mega-menu category {name:?}");
            return false;
        }
        self.menu.open(name);
        true
    }

    pub fn close_category(&mut self, name: &str) -> bool {
        self.menu.close(name)
    }

    /// Returns whether the category is open afterwards.
    pub fn toggle_category(&mut self, name: &str) -> bool {
        if self.menu.is_open(name) {
            self.menu.close(name);
            false
        } else {
            self.open_category(name)
        }
    }

    pub fn close_all(&mut self) {
        self.menu.close_all();
    }

    pub fn open_category_entry(&self) -> Option<&MegaMenuCategory> {
        self.menu
            .open_key()
            .and_then(|name| self.config.category(name))
    }

    /// Items of the open category; empty while every category is closed.
    pub fn visible_items(&self) -> &[MegaMenuItem] {
        self.open_category_entry()
            .map(|category| category.items.as_slice())
            .unwrap_or_default()
    }

    pub fn is_collapse_open(&self) -> bool {
        self.collapse.is_open()
    }

    pub fn toggle_collapse(&mut self) -> bool {
        self.collapse.toggle()
    }

    /// Close every menu and hand the item's href to the navigator.
    pub fn follow(&mut self, item: &MegaMenuItem, navigator: &mut impl Navigator) {
        self.menu.close_all();
        self.collapse.close();
        navigator.navigate(&item.href);
    }

    /// Swap in new content. The open category stays open if it still exists.
    pub fn reconfigure(&mut self, config: MegaMenuNavConfig) {
        self.config = distinct_categories(config);
        let config = &self.config;
        self.menu.retain(|name| config.category(name).is_some());
    }
}

/// Category names key the dropdown group, so only the first category with a
/// given name is kept.
fn distinct_categories(mut config: MegaMenuNavConfig) -> MegaMenuNavConfig {
    let mut seen = HashSet::new();
    config.categories.retain(|category| {
        let first = seen.insert(category.name.clone());
        if !first {
            log::warn!("Dropping duplicate mega-menu category {:?}", category.name);
        }
        first
    });
    config
}
