use crate::models::{HeroTab, TabsHeroConfig};
use crate::state::{StateError, TabSelector};

/// Hero section with one visible tab panel at a time
#[derive(Debug, Clone, PartialEq)]
pub struct TabbedHero {
    config: TabsHeroConfig,
    tabs: TabSelector,
}

impl TabbedHero {
    /// Fails when the configuration has no tabs.
    pub fn new(config: TabsHeroConfig) -> Result<Self, StateError> {
        let tabs = TabSelector::new(config.tabs.len())?;
        Ok(Self { config, tabs })
    }

    pub fn config(&self) -> &TabsHeroConfig {
        &self.config
    }

    pub fn tabs(&self) -> &TabSelector {
        &self.tabs
    }

    pub fn select<I: TryInto<usize>>(&mut self, index: I) -> bool {
        self.tabs.select(index)
    }

    pub fn select_next(&mut self) -> usize {
        self.tabs.select_next()
    }

    pub fn select_previous(&mut self) -> usize {
        self.tabs.select_previous()
    }

    pub fn active_tab(&self) -> &HeroTab {
        &self.config.tabs[self.tabs.current()]
    }

    /// Swap in new content while keeping the selected tab (clamped if the
    /// list shrank). An empty tab list is rejected and nothing changes.
    pub fn reconfigure(&mut self, config: TabsHeroConfig) -> Result<(), StateError> {
        self.tabs.resize(config.tabs.len())?;
        self.config = config;
        Ok(())
    }
}
