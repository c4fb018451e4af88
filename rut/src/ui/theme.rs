//! Colors used for terminal output.
//!
//! Each logical part of the output maps to one 16-color ANSI foreground color.
//! Color is only applied when the target stream is a terminal.

use owo_colors::{AnsiColors, OwoColorize};

/// The different logical parts of the output that can be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeEntry {
    /// Section titles such as the summary header.
    Header,
    /// General informational messages.
    Info,
    /// Recoverable problems, such as an unknown action name.
    Warn,
    Error,
    /// A value whose check character is correct.
    Valid,
    /// A value whose check character is wrong.
    Invalid,
    /// Labels in the summary block.
    SummaryLabel,
}

impl ThemeEntry {
    /// Foreground color for this entry.
    pub fn color(self) -> AnsiColors {
        match self {
            ThemeEntry::Header => AnsiColors::BrightWhite,
            ThemeEntry::Info => AnsiColors::Cyan,
            ThemeEntry::Warn => AnsiColors::Yellow,
            ThemeEntry::Error => AnsiColors::Red,
            ThemeEntry::Valid => AnsiColors::Green,
            ThemeEntry::Invalid => AnsiColors::BrightRed,
            ThemeEntry::SummaryLabel => AnsiColors::BrightBlack,
        }
    }
}

/// Renders `text` in the color of `entry`, or unchanged without color support.
pub fn paint(entry: ThemeEntry, text: &str, supports_color: bool) -> String {
    if supports_color {
        text.color(entry.color()).to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_without_color_is_identity() {
        assert_eq!(paint(ThemeEntry::Valid, "valid", false), "valid");
    }

    #[test]
    fn test_paint_with_color_wraps_in_escapes() {
        let painted = paint(ThemeEntry::Invalid, "invalid", true);
        assert!(painted.contains("invalid"));
        assert!(painted.starts_with("\u{1b}["));
        assert_ne!(ThemeEntry::Valid.color(), ThemeEntry::Invalid.color());
    }
}
