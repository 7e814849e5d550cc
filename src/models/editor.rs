// ABOUTME: Editor session aggregate tying together buffers, windows, tabs, and settings

use serde::{Deserialize, Serialize};

use crate::models::{Buffer, Tab, Window};

/// Editor input mode. Closed enumeration persisted by integer discriminant;
/// currently only one mode exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Mode {
    Normal = 0,
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Normal
    }
}

impl Mode {
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Decode a persisted discriminant; `None` for values outside the
    /// enumeration.
    pub fn from_u8(value: u8) -> Option<Mode> {
        match value {
            0 => Some(Mode::Normal),
            _ => None,
        }
    }
}

/// Editor-wide settings, persisted verbatim with the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorSettings {
    /// Display width of a tab character; at least 1.
    pub tab_size: usize,
    /// Insert spaces instead of a tab character on the tab key.
    pub insert_spaces: bool,
    pub line_numbers: bool,
    pub syntax_highlighting: bool,
    pub theme: String,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            tab_size: 4,
            insert_spaces: true,
            line_numbers: true,
            syntax_highlighting: true,
            theme: "default".to_string(),
        }
    }
}

/// Root aggregate for one running editor instance.
///
/// Tabs, windows, and buffers are three parallel flat registries, not a tree
/// derived from the tabs. Exactly one `Editor` exists per process; it is
/// constructed at startup (fresh or rehydrated from persisted state) and
/// passed explicitly to whatever layer needs it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Editor {
    pub buffers: Vec<Buffer>,
    pub windows: Vec<Window>,
    pub tabs: Vec<Tab>,
    pub mode: Mode,
    pub settings: EditorSettings,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_round_trips_through_discriminant() {
        assert_eq!(Mode::Normal.as_u8(), 0);
        assert_eq!(Mode::from_u8(0), Some(Mode::Normal));
        assert_eq!(Mode::from_u8(1), None);
    }

    #[test]
    fn test_default_settings() {
        let settings = EditorSettings::default();
        assert_eq!(settings.tab_size, 4);
        assert!(settings.insert_spaces);
        assert!(settings.line_numbers);
        assert!(settings.syntax_highlighting);
        assert_eq!(settings.theme, "default");
    }

    #[test]
    fn test_new_editor_is_empty_and_normal() {
        let editor = Editor::new();
        assert!(editor.buffers.is_empty());
        assert!(editor.windows.is_empty());
        assert!(editor.tabs.is_empty());
        assert_eq!(editor.mode, Mode::Normal);
    }
}
