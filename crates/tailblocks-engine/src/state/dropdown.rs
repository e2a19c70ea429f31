use std::borrow::Borrow;
use std::fmt;

/// A group of submenus addressed by key, at most one open at a time.
///
/// Opening a key implicitly closes whichever key was open before. Separate
/// groups (a mega-menu bar and an avatar menu, say) need separate instances.
#[derive(Clone, PartialEq, Eq)]
pub struct DropdownMenu<K> {
    open_key: Option<K>,
}

impl<K> Default for DropdownMenu<K> {
    fn default() -> Self {
        Self { open_key: None }
    }
}

impl<K: fmt::Debug> fmt::Debug for DropdownMenu<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DropdownMenu")
            .field("open_key", &self.open_key)
            .finish()
    }
}

impl<K: PartialEq> DropdownMenu<K> {
    /// A group with nothing open
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_key(&self) -> Option<&K> {
        self.open_key.as_ref()
    }

    pub fn is_any_open(&self) -> bool {
        self.open_key.is_some()
    }

    pub fn is_open<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.open_key
            .as_ref()
            .is_some_and(|open| open.borrow() == key)
    }

    /// Open `key`, closing any other key in this group.
    pub fn open(&mut self, key: impl Into<K>) {
        self.open_key = Some(key.into());
    }

    /// Close `key` if it is the open one. Returns whether anything closed.
    pub fn close<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        if self.is_open(key) {
            self.open_key = None;
            true
        } else {
            log::trace!("Ignoring close of a submenu that is not open");
            false
        }
    }

    /// Close `key` if open, otherwise open it. Returns whether it is now open.
    pub fn toggle(&mut self, key: impl Into<K>) -> bool {
        let key = key.into();
        if self.open_key.as_ref() == Some(&key) {
            self.open_key = None;
            false
        } else {
            self.open_key = Some(key);
            true
        }
    }

    /// Close whatever is open (escape key, click outside).
    pub fn close_all(&mut self) {
        self.open_key = None;
    }

    /// Close the open key if it no longer passes `keep`, e.g. after the
    /// category it named was removed from the configuration.
    pub fn retain(&mut self, keep: impl FnOnce(&K) -> bool) {
        if self.open_key.as_ref().is_some_and(|open| !keep(open)) {
            self.open_key = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn group() -> DropdownMenu<String> {
        DropdownMenu::new()
    }

    #[test]
    fn test_starts_with_nothing_open() {
        let menu = group();
        assert_eq!(menu.open_key(), None);
        assert!(!menu.is_any_open());
    }

    #[test]
    fn test_open_sets_key() {
        let mut menu = group();
        menu.open("A");
        assert_eq!(menu.open_key().map(String::as_str), Some("A"));
        assert!(menu.is_open("A"));
    }

    #[test]
    fn test_opening_another_key_closes_the_first() {
        let mut menu = group();
        menu.open("A");
        menu.open("B");

        assert!(menu.is_open("B"));
        assert!(!menu.is_open("A"));
    }

    #[test]
    fn test_closing_a_key_that_is_not_open_is_a_no_op() {
        let mut menu = group();
        menu.open("B");

        assert!(!menu.close("A"));
        assert_eq!(menu.open_key().map(String::as_str), Some("B"));
    }

    #[test]
    fn test_close_open_key() {
        let mut menu = group();
        menu.open("A");

        assert!(menu.close("A"));
        assert!(!menu.is_any_open());
        assert!(!menu.close("A"));
    }

    #[test]
    fn test_toggle() {
        let mut menu = group();

        assert!(menu.toggle("A"));
        assert!(menu.toggle("B"));
        assert!(!menu.is_open("A"));
        assert!(!menu.toggle("B"));
        assert!(!menu.is_any_open());
    }

    #[test]
    fn test_close_all() {
        let mut menu = group();
        menu.open("A");
        menu.close_all();
        assert!(!menu.is_any_open());
    }

    #[test]
    fn test_retain_closes_removed_key() {
        let mut menu = group();
        menu.open("Company");

        menu.retain(|key| key == "Company");
        assert!(menu.is_open("Company"));

        menu.retain(|key| key == "Products");
        assert!(!menu.is_any_open());
    }

    #[test]
    fn test_independent_groups() {
        let mut categories = group();
        let mut account: DropdownMenu<&'static str> = DropdownMenu::new();

        categories.open("Products");
        account.open("user");
        account.close_all();

        assert!(categories.is_open("Products"));
        assert!(!account.is_any_open());
    }
}
