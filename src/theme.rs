//! Color palette and shared styles for the classpoints TUI.

use ratatui::style::{Color, Modifier, Style};

/// Palette constants.
pub mod colors {
    use super::Color;

    // === Backgrounds ===
    pub const BG_DARK: Color = Color::Rgb(24, 24, 31);
    pub const BG_PANEL: Color = Color::Rgb(33, 33, 43);
    pub const BG_POPUP: Color = Color::Rgb(45, 45, 58);

    // === Foregrounds ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(222, 218, 196);
    pub const TEXT_SECONDARY: Color = Color::Rgb(196, 190, 152);
    pub const TEXT_MUTED: Color = Color::Rgb(118, 116, 108);

    // === Accents ===
    pub const PRIMARY: Color = Color::Rgb(149, 127, 184);
    pub const GREEN: Color = Color::Rgb(152, 187, 108);
    pub const YELLOW: Color = Color::Rgb(230, 195, 132);
    pub const RED: Color = Color::Rgb(255, 93, 98);

    // === Score tiers ===
    pub const TIER_STRONG_POSITIVE: Color = Color::Rgb(16, 185, 129);
    pub const TIER_MILD_POSITIVE: Color = Color::Rgb(52, 211, 153);
    pub const TIER_STRONG_NEGATIVE: Color = Color::Rgb(239, 68, 68);
    pub const TIER_MILD_NEGATIVE: Color = Color::Rgb(248, 113, 113);
    pub const TIER_NEUTRAL: Color = Color::Rgb(156, 163, 175);

    /// Ten stable avatar background colors, one per hash bucket.
    pub const AVATAR_PALETTE: [Color; 10] = [
        Color::Rgb(59, 130, 246),  // blue
        Color::Rgb(34, 197, 94),   // green
        Color::Rgb(168, 85, 247),  // purple
        Color::Rgb(239, 68, 68),   // red
        Color::Rgb(234, 179, 8),   // yellow
        Color::Rgb(99, 102, 241),  // indigo
        Color::Rgb(236, 72, 153),  // pink
        Color::Rgb(20, 184, 166),  // teal
        Color::Rgb(249, 115, 22),  // orange
        Color::Rgb(6, 182, 212),   // cyan
    ];
}

const CELEBRATION_FRAMES: &[&str] = &["✦", "✧", "∗", "·"];

/// Sparkle glyph for the status-bar celebration flash.
#[must_use]
pub fn celebration_frame(tick: usize) -> &'static str {
    CELEBRATION_FRAMES[tick % CELEBRATION_FRAMES.len()]
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Style, colors};

    #[must_use]
    pub fn card_border() -> Style {
        Style::default().fg(colors::TEXT_MUTED)
    }

    #[must_use]
    pub fn card_selected() -> Style {
        Style::default()
            .fg(colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn search_idle() -> Style {
        Style::default().fg(colors::TEXT_MUTED)
    }

    #[must_use]
    pub fn search_active() -> Style {
        Style::default().fg(colors::GREEN)
    }

    #[must_use]
    pub fn key_hint() -> Style {
        Style::default().fg(colors::TEXT_MUTED)
    }

    #[must_use]
    pub fn key_highlight() -> Style {
        Style::default()
            .fg(colors::YELLOW)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn status_info() -> Style {
        Style::default().fg(colors::GREEN)
    }

    #[must_use]
    pub fn status_notice() -> Style {
        Style::default().fg(colors::YELLOW)
    }

    #[must_use]
    pub fn celebration() -> Style {
        Style::default()
            .fg(colors::GREEN)
            .add_modifier(Modifier::BOLD)
    }
}
