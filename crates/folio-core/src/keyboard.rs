use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Keys the overlays react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Self {
        match key {
            "Escape" | "Esc" => Key::Escape,
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            "ArrowRight" | "Right" => Key::ArrowRight,
            _ => Key::Other,
        }
    }
}

/// The window-level key listener table for one view. Overlays attach a
/// listener while they are open; the returned guard detaches it on drop.
#[derive(Debug, Clone, Default)]
pub struct KeyboardScope {
    active: Arc<AtomicUsize>,
}

impl KeyboardScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&self) -> KeyListener {
        self.active.fetch_add(1, Ordering::SeqCst);
        KeyListener {
            active: Arc::clone(&self.active),
        }
    }

    /// Number of listeners currently attached.
    pub fn active_listeners(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }
}

/// Attached listener. Dropping it detaches.
#[derive(Debug)]
pub struct KeyListener {
    active: Arc<AtomicUsize>,
}

impl Drop for KeyListener {
    fn drop(&mut self) {
        self.active.fetch_sub(1, Ordering::SeqCst);
    }
}
