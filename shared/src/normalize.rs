//! Platform identifier normalization.
//!
//! Game databases and users spell platforms in many ways ("Atari-ST",
//! "atari_st", "ST"). [`normalize_platform_id`] folds them into the
//! canonical identifiers of [`Platform`].

use crate::Platform;

/// Historical and alternate spellings, keyed by compact key.
///
/// Compact keys are lower-case with every `-` and `_` removed.
const ALIASES: &[(&str, Platform)] = &[
    ("st", Platform::Atari),
    ("atarist", Platform::Atari),
    ("commodorecdtv", Platform::Cdtv),
    ("amigacd32", Platform::Cd32),
    ("amstradcpc", Platform::Cpc),
    ("msdos", Platform::Dos),
    ("gameboy", Platform::Gb),
    ("gameboyadvance", Platform::Gba),
    ("gameboycolor", Platform::Gbc),
    ("gamegear", Platform::GameGear),
    ("nintendo", Platform::Nes),
    ("famicom", Platform::Nes),
    ("supernintendo", Platform::Snes),
    ("supernes", Platform::Snes),
    ("superfamicom", Platform::Snes),
    ("zxspectrum", Platform::Zxs),
    ("mastersystem", Platform::Sms),
    ("megadrive", Platform::Smd),
    ("atari2600", Platform::A2600),
    ("atari5200", Platform::A5200),
    ("atari7800", Platform::A7800),
    // Misspelling found in older databases.
    ("atari78600", Platform::A7800),
    ("turbografx16", Platform::Tg16),
];

/// Reduce a raw name to its compact key: lower-case, no `-` or `_`.
pub fn compact_key(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| !matches!(c, '-' | '_'))
        .collect()
}

/// Look up a compact key in the alias table.
pub fn alias(compact: &str) -> Option<Platform> {
    ALIASES
        .iter()
        .find(|(key, _)| *key == compact)
        .map(|(_, platform)| *platform)
}

/// Normalize a free-form platform name to a canonical identifier.
///
/// Resolution order:
/// 1. The lower-cased input is already canonical → returned as is. This keeps
///    identifiers that contain a hyphen (`game-gear`) reachable.
/// 2. The compact key matches an alias → the alias target.
/// 3. Otherwise the compact key itself, as a best-effort identifier.
///
/// Never fails. The result is stable under repeated normalization.
///
/// # Example
///
/// ```
/// use hearth_shared::normalize_platform_id;
///
/// assert_eq!(normalize_platform_id("Atari_ST"), "atari");
/// assert_eq!(normalize_platform_id("Game-Gear"), "game-gear");
/// assert_eq!(normalize_platform_id("C64"), "c64");
/// ```
pub fn normalize_platform_id(raw: &str) -> String {
    let lower = raw.to_lowercase();
    if let Ok(platform) = lower.parse::<Platform>() {
        return platform.as_str().to_string();
    }

    let compact = compact_key(&lower);
    match alias(&compact) {
        Some(platform) => platform.as_str().to_string(),
        None => compact,
    }
}
