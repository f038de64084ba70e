use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::palettes::{
    gold::gold, grayscale::grayscale, inferno::inferno, ocean::ocean,
};
use serde::{Deserialize, Serialize};

/// The closed set of palette ramps.
///
/// Unknown identifiers, whether parsed from a string or deserialized from a
/// worker message, resolve to [`PaletteKind::Inferno`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaletteKind {
    #[default]
    Inferno,
    Gold,
    Ocean,
    Grayscale,
}

impl PaletteKind {
    pub const ALL: &'static [Self] = &[Self::Inferno, Self::Gold, Self::Ocean, Self::Grayscale];

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Inferno => "inferno",
            Self::Gold => "gold",
            Self::Ocean => "ocean",
            Self::Grayscale => "grayscale",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Inferno => "Inferno",
            Self::Gold => "Gold",
            Self::Ocean => "Ocean",
            Self::Grayscale => "Grayscale",
        }
    }

    /// Resolves a palette identifier, substituting inferno for anything unknown.
    #[must_use]
    pub fn from_id(id: &str) -> Self {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.id() == id)
            .unwrap_or_default()
    }

    #[inline]
    #[must_use]
    pub fn colour(self, t: f64) -> Colour {
        match self {
            Self::Inferno => inferno(t),
            Self::Gold => gold(t),
            Self::Ocean => ocean(t),
            Self::Grayscale => grayscale(t),
        }
    }
}

impl From<&str> for PaletteKind {
    fn from(id: &str) -> Self {
        Self::from_id(id)
    }
}

impl From<String> for PaletteKind {
    fn from(id: String) -> Self {
        Self::from_id(&id)
    }
}

impl From<PaletteKind> for String {
    fn from(kind: PaletteKind) -> Self {
        kind.id().to_string()
    }
}

impl std::fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
