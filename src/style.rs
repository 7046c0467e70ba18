//! ANSI colouring for terminal output

use crate::commands::LogCategory;
use crate::config::ThemeMode;
use once_cell::sync::Lazy;
use regex::Regex;

static ESCAPE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\x1b\[[0-9;]*[A-Za-z]").expect("escape pattern is valid"));

/// Named colours of the cyber palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Cyan,
    Green,
    Purple,
    Pink,
    Orange,
    Red,
    Muted,
    Plain,
}

impl Tone {
    /// Cycle used for multi-line status blocks
    pub const ROTATION: [Tone; 5] = [Tone::Cyan, Tone::Green, Tone::Purple, Tone::Pink, Tone::Orange];

    /// 24-bit foreground colour for a theme
    fn rgb(&self, theme: ThemeMode) -> Option<(u8, u8, u8)> {
        let dark = theme == ThemeMode::Dark;
        match self {
            Tone::Cyan => Some(if dark { (0, 255, 255) } else { (0, 139, 139) }),
            Tone::Green => Some(if dark { (0, 255, 65) } else { (0, 128, 0) }),
            Tone::Purple => Some(if dark { (157, 0, 255) } else { (102, 0, 170) }),
            Tone::Pink => Some(if dark { (255, 0, 128) } else { (190, 0, 95) }),
            Tone::Orange => Some(if dark { (255, 136, 0) } else { (200, 100, 0) }),
            Tone::Red => Some(if dark { (255, 60, 60) } else { (180, 0, 0) }),
            Tone::Muted => Some(if dark { (128, 128, 128) } else { (96, 96, 96) }),
            Tone::Plain => None,
        }
    }

    /// Tone of a terminal log line
    pub fn for_category(category: LogCategory) -> Tone {
        match category {
            LogCategory::Echo => Tone::Green,
            LogCategory::Info => Tone::Cyan,
            LogCategory::Error => Tone::Red,
            LogCategory::Special => Tone::Pink,
        }
    }

    /// Rotating tone for the `index`th line of a block
    pub fn rotating(index: usize) -> Tone {
        Self::ROTATION[index % Self::ROTATION.len()]
    }
}

/// Wraps text in colour codes when enabled
#[derive(Debug, Clone, Copy)]
pub struct Styler {
    enabled: bool,
    theme: ThemeMode,
}

impl Styler {
    pub fn new(enabled: bool, theme: ThemeMode) -> Self {
        Self { enabled, theme }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn paint(&self, text: &str, tone: Tone) -> String {
        match (self.enabled, tone.rgb(self.theme)) {
            (true, Some((r, g, b))) => format!("\x1b[38;2;{};{};{}m{}\x1b[0m", r, g, b, text),
            _ => text.to_string(),
        }
    }

    pub fn bold(&self, text: &str, tone: Tone) -> String {
        if self.enabled {
            format!("\x1b[1m{}", self.paint(text, tone))
        } else {
            text.to_string()
        }
    }

    /// Escape sequence that wipes the screen, if colour output is on
    pub fn clear_screen(&self) -> &'static str {
        if self.enabled {
            "\x1b[2J\x1b[H"
        } else {
            ""
        }
    }
}

/// Remove ANSI escape sequences from text
pub fn strip_ansi(text: &str) -> String {
    ESCAPE_REGEX.replace_all(text, "").into_owned()
}
