//! Collapsible navbar menu.

/// Open/closed state of the navbar's link list on narrow screens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Following a link collapses the menu.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn links_class(&self) -> &'static str {
        if self.open {
            "nav-links open"
        } else {
            "nav-links"
        }
    }

    pub fn toggle_class(&self) -> &'static str {
        if self.open {
            "menu-toggle active"
        } else {
            "menu-toggle"
        }
    }
}
