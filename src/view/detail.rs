use crate::models::ItemId;

/// What closed the detail panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// Explicit close control
    CloseButton,
    /// Click on the overlay outside the panel content
    OutsideClick,
    /// Cancellation key
    Escape,
}

/// Detail overlay: closed, or showing exactly one item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailPanel {
    #[default]
    Closed,
    Open(ItemId),
}

impl DetailPanel {
    /// Show an item; replaces whatever was open
    pub fn open(&mut self, id: ItemId) {
        *self = DetailPanel::Open(id);
    }

    /// Close the panel; returns false if it was already closed
    pub fn close(&mut self, reason: CloseReason) -> bool {
        let was_open = self.is_open();
        if was_open {
            log::trace!("Closing detail panel ({:?})", reason);
        }
        *self = DetailPanel::Closed;
        was_open
    }

    pub fn is_open(&self) -> bool {
        matches!(self, DetailPanel::Open(_))
    }

    pub fn current(&self) -> Option<ItemId> {
        match self {
            DetailPanel::Open(id) => Some(*id),
            DetailPanel::Closed => None,
        }
    }
}
