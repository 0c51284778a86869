/// Clipboard used by the Edit menu
pub trait Clipboard {
    fn get_text(&mut self) -> Option<String>;
    fn set_text(&mut self, text: &str);

    /// Whether a paste would insert anything
    fn has_text(&mut self) -> bool {
        self.get_text().is_some_and(|text| !text.is_empty())
    }
}

/// System clipboard through arboard, falling back to an in-process buffer
/// when the platform clipboard can't be opened.
pub struct SystemClipboard {
    system: Option<arboard::Clipboard>,
    fallback: Option<String>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        let system = match arboard::Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(e) => {
                log::warn!("[Clipboard] System clipboard unavailable, using in-process buffer: {}", e);
                None
            }
        };
        Self {
            system,
            fallback: None,
        }
    }

    /// Clipboard that never touches the OS
    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self {
            system: None,
            fallback: None,
        }
    }
}

impl Clipboard for SystemClipboard {
    fn get_text(&mut self) -> Option<String> {
        if let Some(system) = self.system.as_mut() {
            match system.get_text() {
                Ok(text) => return Some(text),
                Err(e) => log::debug!("[Clipboard] No text on clipboard: {}", e),
            }
        }
        self.fallback.clone()
    }

    fn set_text(&mut self, text: &str) {
        if let Some(system) = self.system.as_mut() {
            match system.set_text(text.to_owned()) {
                Ok(()) => log::debug!("[Clipboard] Copied {} bytes", text.len()),
                Err(e) => log::error!("[Clipboard] Failed to copy to clipboard: {}", e),
            }
        }
        self.fallback = Some(text.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_round_trip() {
        let mut clipboard = SystemClipboard::in_memory();
        assert_eq!(clipboard.get_text(), None);
        clipboard.set_text("vec4(1.0)");
        assert_eq!(clipboard.get_text().as_deref(), Some("vec4(1.0)"));
    }

    #[test]
    fn test_has_text_ignores_empty() {
        let mut clipboard = SystemClipboard::in_memory();
        assert!(!clipboard.has_text());
        clipboard.set_text("");
        assert!(!clipboard.has_text());
        clipboard.set_text("uv");
        assert!(clipboard.has_text());
    }
}
