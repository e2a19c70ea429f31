use crate::models::{DisclosureFooterConfig, LinkSection};
use crate::state::Accordion;

/// Footer with one disclosure per link section
#[derive(Debug, Clone, PartialEq)]
pub struct DisclosureFooter {
    config: DisclosureFooterConfig,
    sections: Accordion,
}

impl DisclosureFooter {
    pub fn new(config: DisclosureFooterConfig) -> Self {
        let sections = Accordion::new(config.sections.len());
        Self { config, sections }
    }

    pub fn config(&self) -> &DisclosureFooterConfig {
        &self.config
    }

    pub fn toggle_section(&mut self, index: usize) -> Option<bool> {
        self.sections.toggle(index)
    }

    pub fn is_section_open(&self, index: usize) -> bool {
        self.sections.is_open(index)
    }

    /// Sections whose panels are expanded, in display order
    pub fn open_sections(&self) -> impl Iterator<Item = &LinkSection> + '_ {
        self.sections
            .open_sections()
            .filter_map(|index| self.config.sections.get(index))
    }

    /// Swap in new content, keeping the state of sections that survive.
    pub fn reconfigure(&mut self, config: DisclosureFooterConfig) {
        self.sections.resize(config.sections.len());
        self.config = config;
    }
}
