use crate::keyboard::{Key, KeyListener, KeyboardScope};

// ---------------------------------------------------------------------------
// ModalState
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    Open(usize),
}

/// Where a click inside the overlay landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed area around the content. Dismisses.
    Backdrop,
    /// The image, caption or controls. Never dismisses.
    Content,
}

/// What a key press did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Closed,
    Moved(usize),
    Ignored,
}

// ---------------------------------------------------------------------------
// ModalGallery
// ---------------------------------------------------------------------------

/// Enlarged-image overlay over an image collection.
///
/// Indexes the same images as the inline carousel but keeps its own index:
/// navigating here never moves the carousel and vice versa. Navigation is
/// always circular. A key listener is attached to the view's
/// [`KeyboardScope`] for exactly as long as the modal is open.
#[derive(Debug)]
pub struct ModalGallery {
    state: ModalState,
    total: usize,
    keyboard: KeyboardScope,
    listener: Option<KeyListener>,
}

impl ModalGallery {
    pub fn new(total: usize, keyboard: KeyboardScope) -> Self {
        Self {
            state: ModalState::Closed,
            total,
            keyboard,
            listener: None,
        }
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open(_))
    }

    pub fn index(&self) -> Option<usize> {
        match self.state {
            ModalState::Open(i) => Some(i),
            ModalState::Closed => None,
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Whether prev/next controls are shown at all.
    pub fn has_multiple(&self) -> bool {
        self.total > 1
    }

    /// Open at `start`. Rejected when `start` is out of range or the
    /// collection is empty.
    pub fn open(&mut self, start: usize) -> bool {
        if start >= self.total {
            return false;
        }
        self.state = ModalState::Open(start);
        if self.listener.is_none() {
            self.listener = Some(self.keyboard.attach());
        }
        true
    }

    pub fn close(&mut self) {
        self.state = ModalState::Closed;
        self.listener = None;
    }

    pub fn previous(&mut self) {
        if let ModalState::Open(i) = self.state {
            self.state = ModalState::Open((i + self.total - 1) % self.total);
        }
    }

    pub fn next(&mut self) {
        if let ModalState::Open(i) = self.state {
            self.state = ModalState::Open((i + 1) % self.total);
        }
    }

    pub fn peek_previous(&self) -> Option<usize> {
        self.index().map(|i| (i + self.total - 1) % self.total)
    }

    pub fn peek_next(&self) -> Option<usize> {
        self.index().map(|i| (i + 1) % self.total)
    }

    /// Backdrop clicks dismiss; clicks on the content do not propagate.
    pub fn click(&mut self, target: ClickTarget) {
        if target == ClickTarget::Backdrop && self.is_open() {
            self.close();
        }
    }

    /// Dispatch a key press. Without an attached listener nothing happens.
    pub fn handle_key(&mut self, key: Key) -> KeyOutcome {
        if self.listener.is_none() {
            return KeyOutcome::Ignored;
        }
        match key {
            Key::Escape => {
                self.close();
                KeyOutcome::Closed
            }
            Key::ArrowLeft => {
                self.previous();
                self.index().map_or(KeyOutcome::Ignored, KeyOutcome::Moved)
            }
            Key::ArrowRight => {
                self.next();
                self.index().map_or(KeyOutcome::Ignored, KeyOutcome::Moved)
            }
            Key::Other => KeyOutcome::Ignored,
        }
    }

    /// The collection changed under the modal (e.g. a reload). Closes when
    /// the current index falls off the end.
    pub fn set_total(&mut self, total: usize) {
        self.total = total;
        if let ModalState::Open(i) = self.state {
            if i >= total {
                self.close();
            }
        }
    }
}
