//! Named color schemes used for widget header bands and decorators.

use std::fmt;
use std::str::FromStr;

/// One of the eight named themes a client can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorKey {
    #[default]
    Red,
    Blue,
    Yellow,
    Green,
    Purple,
    Pink,
    Fuchsia,
    Grey,
}

/// Primary/secondary color pair for a theme.
///
/// `primary` fills the header band, `secondary` fills the decorator dots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    pub primary: &'static str,
    pub secondary: &'static str,
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown color key: {0}")]
pub struct UnknownColor(pub String);

impl ColorKey {
    pub const ALL: [ColorKey; 8] = [
        ColorKey::Red,
        ColorKey::Blue,
        ColorKey::Yellow,
        ColorKey::Green,
        ColorKey::Purple,
        ColorKey::Pink,
        ColorKey::Fuchsia,
        ColorKey::Grey,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorKey::Red => "red",
            ColorKey::Blue => "blue",
            ColorKey::Yellow => "yellow",
            ColorKey::Green => "green",
            ColorKey::Purple => "purple",
            ColorKey::Pink => "pink",
            ColorKey::Fuchsia => "fuchsia",
            ColorKey::Grey => "grey",
        }
    }

    pub fn scheme(&self) -> ColorScheme {
        let (primary, secondary) = match self {
            ColorKey::Red => ("#cf5659", "#f3aab9"),
            ColorKey::Blue => ("#5AA9E6", "#3A79B6"),
            ColorKey::Yellow => ("#DBAD6A", "#AB7D3A"),
            ColorKey::Green => ("#5FBB97", "#2F8867"),
            ColorKey::Purple => ("#E099FF", "#BE66CF"),
            ColorKey::Pink => ("#EA5D97", "#CA3D77"),
            ColorKey::Fuchsia => ("#93627F", "#633241"),
            ColorKey::Grey => ("#565557", "#767577"),
        };
        ColorScheme { primary, secondary }
    }

    /// Resolve a raw `color` parameter. Unknown keys fall back to red.
    pub fn resolve(raw: &str) -> Self {
        raw.parse().unwrap_or_default()
    }
}

impl FromStr for ColorKey {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        ColorKey::ALL
            .into_iter()
            .find(|key| key.as_str() == lower)
            .ok_or_else(|| UnknownColor(s.to_string()))
    }
}

impl fmt::Display for ColorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ColorScheme {
    /// Look up the scheme for a raw color parameter, falling back to red.
    pub fn for_key(raw: &str) -> Self {
        ColorKey::resolve(raw).scheme()
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        ColorKey::Red.scheme()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_keys_round_trip_names() {
        for key in ColorKey::ALL {
            assert_eq!(key.as_str().parse::<ColorKey>().unwrap(), key);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("BLUE".parse::<ColorKey>().unwrap(), ColorKey::Blue);
        assert_eq!("Fuchsia".parse::<ColorKey>().unwrap(), ColorKey::Fuchsia);
    }

    #[test]
    fn test_unknown_key_falls_back_to_red() {
        assert_eq!(ColorKey::resolve("teal"), ColorKey::Red);
        assert_eq!(ColorKey::resolve(""), ColorKey::Red);
        assert_eq!(ColorScheme::for_key("teal"), ColorKey::Red.scheme());
    }

    #[test]
    fn test_unknown_key_error_message() {
        let err = "teal".parse::<ColorKey>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown color key: teal");
    }

    #[test]
    fn test_red_scheme_values() {
        let scheme = ColorKey::Red.scheme();
        assert_eq!(scheme.primary, "#cf5659");
        assert_eq!(scheme.secondary, "#f3aab9");
    }

    #[test]
    fn test_schemes_are_distinct() {
        for (i, a) in ColorKey::ALL.iter().enumerate() {
            for b in &ColorKey::ALL[i + 1..] {
                assert_ne!(a.scheme(), b.scheme(), "{} and {} share a scheme", a, b);
            }
        }
    }
}
