//! Clipboard access
//!
//! The OS clipboard is the source of truth. `ClipboardCache` keeps the last
//! text seen so paste still works when no system clipboard is reachable.

/// Text clipboard backend
pub trait Clipboard {
    /// Current clipboard text, `None` when unavailable or not text
    fn get_text(&mut self) -> Option<String>;

    /// Replace clipboard text. Returns false when the backend refused it.
    fn set_text(&mut self, text: &str) -> bool;
}

/// System clipboard via arboard
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        let inner = match arboard::Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(e) => {
                tracing::warn!("System clipboard unavailable: {}", e);
                None
            }
        };
        Self { inner }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for SystemClipboard {
    fn get_text(&mut self) -> Option<String> {
        self.inner.as_mut()?.get_text().ok()
    }

    fn set_text(&mut self, text: &str) -> bool {
        match self.inner.as_mut() {
            Some(clipboard) => clipboard.set_text(text).is_ok(),
            None => false,
        }
    }
}

/// Process-local clipboard, used headless
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    text: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

impl Clipboard for MemoryClipboard {
    fn get_text(&mut self) -> Option<String> {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) -> bool {
        self.text = Some(text.to_string());
        true
    }
}

/// Clipboard backend plus the editor's own scratch copy
pub struct ClipboardCache {
    backend: Box<dyn Clipboard>,
    scratch: String,
}

impl ClipboardCache {
    pub fn new(backend: Box<dyn Clipboard>) -> Self {
        Self {
            backend,
            scratch: String::new(),
        }
    }

    /// Last text copied, cut, or pasted
    pub fn scratch(&self) -> &str {
        &self.scratch
    }

    /// Copy to both the backend and the scratch slot
    pub fn copy(&mut self, text: &str) {
        self.scratch.clear();
        self.scratch.push_str(text);
        if !self.backend.set_text(text) {
            tracing::debug!("Clipboard backend rejected copy; keeping scratch only");
        }
    }

    /// Text to paste. Reads the backend and refreshes the scratch from it;
    /// falls back to the scratch when the backend has nothing.
    pub fn paste(&mut self) -> &str {
        if let Some(text) = self.backend.get_text() {
            self.scratch = text;
        }
        &self.scratch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Unavailable;

    impl Clipboard for Unavailable {
        fn get_text(&mut self) -> Option<String> {
            None
        }

        fn set_text(&mut self, _text: &str) -> bool {
            false
        }
    }

    #[test]
    fn test_copy_sets_both() {
        let mut cache = ClipboardCache::new(Box::new(MemoryClipboard::new()));
        cache.copy("World");
        assert_eq!(cache.scratch(), "World");
        assert_eq!(cache.paste(), "World");
    }

    #[test]
    fn test_external_copy_invalidates_scratch() {
        let mut cache = ClipboardCache::new(Box::new(MemoryClipboard::with_text("outside")));
        assert_eq!(cache.scratch(), "");
        assert_eq!(cache.paste(), "outside");
        assert_eq!(cache.scratch(), "outside");
    }

    #[test]
    fn test_falls_back_to_scratch() {
        let mut cache = ClipboardCache::new(Box::new(Unavailable));
        assert_eq!(cache.paste(), "");
        cache.copy("kept");
        assert_eq!(cache.paste(), "kept");
    }
}
