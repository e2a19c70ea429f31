use crate::interop::{FormSubmitter, Navigator, SubmissionIntent};
use crate::models::{DropdownNavConfig, LinkItem, SearchNavConfig};
use crate::state::{ControlledField, Disclosure, DropdownMenu};

/// Key of the avatar menu within its own dropdown group
pub const USER_MENU: &str = "user";

/// Navbar with an avatar dropdown and a mobile collapse toggle.
///
/// The avatar menu and the collapse are separate groups.
#[derive(Debug, Clone, PartialEq)]
pub struct DropdownNav {
    config: DropdownNavConfig,
    user_menu: DropdownMenu<&'static str>,
    collapse: Disclosure,
}

impl DropdownNav {
    pub fn new(config: DropdownNavConfig) -> Self {
        Self {
            config,
            user_menu: DropdownMenu::new(),
            collapse: Disclosure::new(),
        }
    }

    pub fn config(&self) -> &DropdownNavConfig {
        &self.config
    }

    pub fn is_user_menu_open(&self) -> bool {
        self.user_menu.is_open(USER_MENU)
    }

    pub fn toggle_user_menu(&mut self) -> bool {
        self.user_menu.toggle(USER_MENU)
    }

    pub fn close_user_menu(&mut self) -> bool {
        self.user_menu.close(USER_MENU)
    }

    pub fn is_collapse_open(&self) -> bool {
        self.collapse.is_open()
    }

    pub fn toggle_collapse(&mut self) -> bool {
        self.collapse.toggle()
    }

    /// Close the menus and navigate to `link`.
    pub fn follow(&mut self, link: &LinkItem, navigator: &mut impl Navigator) {
        self.user_menu.close_all();
        self.collapse.close();
        navigator.navigate(&link.href);
    }

    /// Swap in new content; menu and collapse state are kept.
    pub fn reconfigure(&mut self, config: DropdownNavConfig) {
        self.config = config;
    }
}

/// Navbar with a controlled search box and an avatar menu
#[derive(Debug, Clone, PartialEq)]
pub struct SearchNav {
    config: SearchNavConfig,
    avatar_menu: DropdownMenu<&'static str>,
    search: ControlledField,
}

impl SearchNav {
    pub fn new(config: SearchNavConfig) -> Self {
        Self {
            config,
            avatar_menu: DropdownMenu::new(),
            search: ControlledField::new(),
        }
    }

    pub fn config(&self) -> &SearchNavConfig {
        &self.config
    }

    pub fn query(&self) -> &str {
        self.search.value()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.search.set_value(query);
    }

    /// Hand the query to the search collaborator.
    pub fn search(&self, submitter: &mut impl FormSubmitter) {
        self.search.submit(submitter, SubmissionIntent::Search);
    }

    pub fn is_avatar_menu_open(&self) -> bool {
        self.avatar_menu.is_open(USER_MENU)
    }

    pub fn toggle_avatar_menu(&mut self) -> bool {
        self.avatar_menu.toggle(USER_MENU)
    }

    pub fn follow(&mut self, link: &LinkItem, navigator: &mut impl Navigator) {
        self.avatar_menu.close_all();
        navigator.navigate(&link.href);
    }

    /// Swap in new content; the typed query survives.
    pub fn reconfigure(&mut self, config: SearchNavConfig) {
        self.config = config;
    }
}
