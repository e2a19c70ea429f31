/// Open/closed toggle for one collapsible content subtree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Disclosure {
    is_open: bool,
}

impl Disclosure {
    /// A closed disclosure
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened() -> Self {
        Self { is_open: true }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Flip the state, returning the new value.
    pub fn toggle(&mut self) -> bool {
        self.is_open = !self.is_open;
        self.is_open
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }
}

/// One independent [`Disclosure`] per section.
///
/// Toggling a section never touches its siblings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accordion {
    sections: Vec<Disclosure>,
}

impl Accordion {
    pub fn new(section_count: usize) -> Self {
        Self {
            sections: vec![Disclosure::new(); section_count],
        }
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Toggle section `index`. Returns the new state, or `None` when there is
    /// no such section.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        match self.sections.get_mut(index) {
            Some(section) => Some(section.toggle()),
            None => {
                log::trace!(
                    "Ignoring toggle of section {index}, accordion has {}",
                    self.sections.len()
                );
                None
            }
        }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.sections.get(index).is_some_and(Disclosure::is_open)
    }

    /// Indices of the sections currently open
    pub fn open_sections(&self) -> impl Iterator<Item = usize> + '_ {
        self.sections
            .iter()
            .enumerate()
            .filter(|(_, section)| section.is_open())
            .map(|(index, _)| index)
    }

    /// Match a new section count, keeping the state of surviving sections.
    pub fn resize(&mut self, section_count: usize) {
        self.sections.resize(section_count, Disclosure::new());
    }
}
