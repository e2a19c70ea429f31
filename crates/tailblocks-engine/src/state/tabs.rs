use super::StateError;

/// Single selected index among `item_count` tabs.
///
/// Invariant: `selected < item_count` and `item_count >= 1`. Switching is
/// synchronous; there is no intermediate transition state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSelector {
    selected: usize,
    item_count: usize,
}

impl TabSelector {
    /// Create a selector with the first tab active.
    pub fn new(item_count: usize) -> Result<Self, StateError> {
        if item_count == 0 {
            return Err(StateError::NoTabs);
        }
        Ok(Self {
            selected: 0,
            item_count,
        })
    }

    pub fn current(&self) -> usize {
        self.selected
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Whether the panel at `index` is the visible one
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == index
    }

    /// Select the tab at `index`.
    ///
    /// Negative or out-of-range indices are ignored and `false` is returned;
    /// the current selection is left as it was.
    pub fn select<I: TryInto<usize>>(&mut self, index: I) -> bool {
        match index.try_into() {
            Ok(index) if index < self.item_count => {
                self.selected = index;
                true
            }
            _ => {
                log::trace!(
                    "Ignoring out-of-range tab selection, {} tabs available",
                    self.item_count
                );
                false
            }
        }
    }

    /// Move to the next tab, wrapping to the first.
    pub fn select_next(&mut self) -> usize {
        self.selected = (self.selected + 1) % self.item_count;
        self.selected
    }

    /// Move to the previous tab, wrapping to the last.
    pub fn select_previous(&mut self) -> usize {
        self.selected = (self.selected + self.item_count - 1) % self.item_count;
        self.selected
    }

    /// Adopt a new tab count after the content changed.
    ///
    /// The selection survives unless the list shrank below it, in which case
    /// it clamps to the last tab. A count of zero is rejected and leaves the
    /// selector untouched.
    pub fn resize(&mut self, item_count: usize) -> Result<(), StateError> {
        if item_count == 0 {
            return Err(StateError::NoTabs);
        }
        self.item_count = item_count;
        if self.selected >= item_count {
            log::debug!("Tab list shrank to {item_count}, clamping selection");
            self.selected = item_count - 1;
        }
        Ok(())
    }
}
