//! Canonical platform identifiers.
//!
//! Every platform the launcher knows about has exactly one canonical
//! identifier. Free-form spellings coming from users or game databases are
//! mapped onto these by [`normalize_platform_id`](crate::normalize_platform_id).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Enum representing every platform known to the launcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Platform {
    Amiga,
    Arcade,
    /// Atari 2600
    A2600,
    /// Atari 5200
    A5200,
    /// Atari 7800
    A7800,
    /// Atari ST
    Atari,
    C64,
    Cd32,
    Cdtv,
    /// Amstrad CPC
    Cpc,
    Dos,
    /// Game Boy
    Gb,
    /// Game Boy Advance
    Gba,
    /// Game Boy Color
    Gbc,
    GameGear,
    Lynx,
    Msx,
    Nes,
    Psx,
    Snes,
    /// Sega Mega Drive
    Smd,
    /// Sega Master System
    Sms,
    /// TurboGrafx-16
    Tg16,
    /// ZX Spectrum
    Zxs,
}

impl Platform {
    /// All platforms, in declaration order.
    pub const ALL: [Platform; 24] = [
        Platform::Amiga,
        Platform::Arcade,
        Platform::A2600,
        Platform::A5200,
        Platform::A7800,
        Platform::Atari,
        Platform::C64,
        Platform::Cd32,
        Platform::Cdtv,
        Platform::Cpc,
        Platform::Dos,
        Platform::Gb,
        Platform::Gba,
        Platform::Gbc,
        Platform::GameGear,
        Platform::Lynx,
        Platform::Msx,
        Platform::Nes,
        Platform::Psx,
        Platform::Snes,
        Platform::Smd,
        Platform::Sms,
        Platform::Tg16,
        Platform::Zxs,
    ];

    /// Get the canonical identifier for this platform.
    ///
    /// This is the key used by the registry and in stored configurations.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Platform::Amiga => "amiga",
            Platform::Arcade => "arcade",
            Platform::A2600 => "a2600",
            Platform::A5200 => "a5200",
            Platform::A7800 => "a7800",
            Platform::Atari => "atari",
            Platform::C64 => "c64",
            Platform::Cd32 => "cd32",
            Platform::Cdtv => "cdtv",
            Platform::Cpc => "cpc",
            Platform::Dos => "dos",
            Platform::Gb => "gb",
            Platform::Gba => "gba",
            Platform::Gbc => "gbc",
            Platform::GameGear => "game-gear",
            Platform::Lynx => "lynx",
            Platform::Msx => "msx",
            Platform::Nes => "nes",
            Platform::Psx => "psx",
            Platform::Snes => "snes",
            Platform::Smd => "smd",
            Platform::Sms => "sms",
            Platform::Tg16 => "tg16",
            Platform::Zxs => "zxs",
        }
    }

    /// Human readable platform name.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Platform::Amiga => "Amiga",
            Platform::Arcade => "Arcade",
            Platform::A2600 => "Atari 2600",
            Platform::A5200 => "Atari 5200",
            Platform::A7800 => "Atari 7800",
            Platform::Atari => "Atari ST",
            Platform::C64 => "Commodore 64",
            Platform::Cd32 => "CD32",
            Platform::Cdtv => "CDTV",
            Platform::Cpc => "Amstrad CPC",
            Platform::Dos => "DOS",
            Platform::Gb => "Game Boy",
            Platform::Gba => "Game Boy Advance",
            Platform::Gbc => "Game Boy Color",
            Platform::GameGear => "Game Gear",
            Platform::Lynx => "Lynx",
            Platform::Msx => "MSX",
            Platform::Nes => "Nintendo",
            Platform::Psx => "PlayStation",
            Platform::Snes => "Super Nintendo",
            Platform::Smd => "Mega Drive",
            Platform::Sms => "Master System",
            Platform::Tg16 => "TurboGrafx-16",
            Platform::Zxs => "ZX Spectrum",
        }
    }

    /// Normalize a free-form name and parse it.
    ///
    /// Returns `None` when the normalized name is not a known platform.
    pub fn resolve(raw: &str) -> Option<Self> {
        crate::normalize_platform_id(raw).parse().ok()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not an exact canonical identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown platform id '{0}'")]
pub struct UnknownPlatformId(pub String);

impl FromStr for Platform {
    type Err = UnknownPlatformId;

    /// Exact, case-sensitive match against the canonical identifiers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownPlatformId(s.to_string()))
    }
}

impl TryFrom<String> for Platform {
    type Error = UnknownPlatformId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Platform> for &'static str {
    fn from(platform: Platform) -> Self {
        platform.as_str()
    }
}
