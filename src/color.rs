/// The fixed colour palette and the constrained random draw over it.
use std::fmt;

use rand::RngExt;

/// One of the four colours the picker can land on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Swatch {
    Black,
    Brown,
    Pink,
    Blue,
}

impl Swatch {
    pub const ALL: [Swatch; 4] = [Swatch::Black, Swatch::Brown, Swatch::Pink, Swatch::Blue];

    pub fn name(self) -> &'static str {
        match self {
            Swatch::Black => "Black",
            Swatch::Brown => "Brown",
            Swatch::Pink => "Pink",
            Swatch::Blue => "Blue",
        }
    }

    /// Display colour as `#RRGGBB`.
    pub fn hex(self) -> &'static str {
        match self {
            Swatch::Black => "#000000",
            Swatch::Brown => "#8B4513",
            Swatch::Pink => "#FFC0CB",
            Swatch::Blue => "#0000FF",
        }
    }

    /// Whether text drawn on this swatch should be light.
    ///
    /// Fixed lookup rather than a computed contrast ratio.
    pub fn is_dark(self) -> bool {
        match self {
            Swatch::Black | Swatch::Brown | Swatch::Blue => true,
            Swatch::Pink => false,
        }
    }
}

impl fmt::Display for Swatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Colours eligible for the next draw given a most-recent-first history.
///
/// When the two most recent picks are the same colour, that colour sits
/// out one draw. Nothing else is excluded.
pub fn candidates(history: &[Swatch]) -> Vec<Swatch> {
    let blocked = match history {
        [latest, previous, ..] if latest == previous => Some(*latest),
        _ => None,
    };
    Swatch::ALL
        .into_iter()
        .filter(|swatch| Some(*swatch) != blocked)
        .collect()
}

/// Uniform draw from `candidates`, `None` only when it is empty.
pub fn draw<R: RngExt + ?Sized>(candidates: &[Swatch], rng: &mut R) -> Option<Swatch> {
    if candidates.is_empty() {
        return None;
    }
    Some(candidates[rng.random_range(0..candidates.len())])
}
