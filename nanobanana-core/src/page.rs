//! Small pieces of page state outside the upload widget

use crate::content::FAQS;

/// Mobile navigation menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// FAQ accordion: at most one entry expanded at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqAccordion {
    open: Option<u32>,
}

impl Default for FaqAccordion {
    /// The first question starts expanded
    fn default() -> Self {
        Self {
            open: FAQS.first().map(|faq| faq.id),
        }
    }
}

impl FaqAccordion {
    pub fn collapsed() -> Self {
        Self { open: None }
    }

    pub fn open_entry(&self) -> Option<u32> {
        self.open
    }

    pub fn is_open(&self, id: u32) -> bool {
        self.open == Some(id)
    }

    /// Expand `id`, or collapse it if it is the expanded entry
    pub fn toggle(&mut self, id: u32) {
        self.open = if self.is_open(id) { None } else { Some(id) };
    }
}
