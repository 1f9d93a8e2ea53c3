//! Derived display helpers for student cards: initials in place of an
//! avatar image, a deterministic name-to-color mapping, and the score
//! badge tier color. All pure, all stateless.

use ratatui::style::Color;

use crate::theme::colors;

/// First letter of each whitespace-separated name token, upper-cased,
/// truncated to two characters.
#[must_use]
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

/// Stable avatar color for a name: a 32-bit rolling hash
/// (`hash = code + (hash << 5) - hash`) reduced modulo the palette size.
/// Not collision-free, just deterministic.
#[must_use]
pub fn color_from_name(name: &str) -> Color {
    let mut hash: i32 = 0;
    for ch in name.chars() {
        hash = (ch as u32 as i32).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash));
    }
    let palette = colors::AVATAR_PALETTE;
    palette[hash.unsigned_abs() as usize % palette.len()]
}

/// Score badge color by tier: strong/mild positive above zero, strong/mild
/// negative below, neutral at exactly zero.
#[must_use]
pub fn point_color(points: i32) -> Color {
    if points > 5 {
        colors::TIER_STRONG_POSITIVE
    } else if points > 0 {
        colors::TIER_MILD_POSITIVE
    } else if points < -5 {
        colors::TIER_STRONG_NEGATIVE
    } else if points < 0 {
        colors::TIER_MILD_NEGATIVE
    } else {
        colors::TIER_NEUTRAL
    }
}
