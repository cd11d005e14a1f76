//! Narrow host ports injected at session construction.
//!
//! Command handlers reach host-owned capabilities (the active theme, file
//! downloads) only through these traits; there is no ambient global state.

use std::cell::RefCell;
use std::rc::Rc;

use site_content::themes;

/// Access to the host's current theme selection.
pub trait ThemePort {
    /// Identifier of the currently applied theme.
    fn current(&self) -> String;

    /// Requests a switch to the theme with `id`.
    ///
    /// # Errors
    ///
    /// Returns an error when the host cannot apply the theme.
    fn request(&self, id: &str) -> Result<(), String>;
}

/// Access to the host's download capability.
pub trait ExportPort {
    /// Requests a fire-and-forget download of the named resume file.
    ///
    /// # Errors
    ///
    /// Returns an error when the host cannot start the download.
    fn request_download(&self, filename: &str) -> Result<(), String>;
}

/// In-memory theme port holding the selection in a shared cell.
#[derive(Clone)]
pub struct MemoryThemePort {
    current: Rc<RefCell<String>>,
}

impl MemoryThemePort {
    /// Creates a port starting at `initial`.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            current: Rc::new(RefCell::new(initial.into())),
        }
    }
}

impl Default for MemoryThemePort {
    fn default() -> Self {
        Self::new(themes::DEFAULT_THEME)
    }
}

impl ThemePort for MemoryThemePort {
    fn current(&self) -> String {
        self.current.borrow().clone()
    }

    fn request(&self, id: &str) -> Result<(), String> {
        *self.current.borrow_mut() = id.to_string();
        Ok(())
    }
}

/// Export port that accepts every request without doing anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopExportPort;

impl ExportPort for NoopExportPort {
    fn request_download(&self, _filename: &str) -> Result<(), String> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_theme_port_tracks_requests() {
        let port = MemoryThemePort::default();
        assert_eq!(port.current(), themes::DEFAULT_THEME);
        port.request("matrix").expect("switch");
        assert_eq!(port.current(), "matrix");
    }
}
