//! Piece-set selection.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::PieceKind;
use crate::board::error::VariantError;

/// Which back rank `Board::setup` lays out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Variant {
    /// Rook, knight, bishop, queen, king, bishop, knight, rook.
    #[default]
    Classical,
    /// Edge slider, leaper, stepper, queen, king, stepper, leaper, edge slider.
    Custom,
}

impl Variant {
    /// Back rank from file a to file h.
    #[must_use]
    pub const fn back_rank(self) -> [PieceKind; 8] {
        match self {
            Variant::Classical => [
                PieceKind::Rook,
                PieceKind::Knight,
                PieceKind::Bishop,
                PieceKind::Queen,
                PieceKind::King,
                PieceKind::Bishop,
                PieceKind::Knight,
                PieceKind::Rook,
            ],
            Variant::Custom => [
                PieceKind::EdgeSlider,
                PieceKind::Leaper,
                PieceKind::Stepper,
                PieceKind::Queen,
                PieceKind::King,
                PieceKind::Stepper,
                PieceKind::Leaper,
                PieceKind::EdgeSlider,
            ],
        }
    }

    /// The number a player types to pick this variant.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Variant::Classical => 1,
            Variant::Custom => 2,
        }
    }
}

impl TryFrom<u8> for Variant {
    type Error = VariantError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Variant::Classical),
            2 => Ok(Variant::Custom),
            _ => Err(VariantError::Unknown {
                found: value.to_string(),
            }),
        }
    }
}

impl FromStr for Variant {
    type Err = VariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "classical" => Ok(Variant::Classical),
            "2" | "custom" => Ok(Variant::Custom),
            other => Err(VariantError::Unknown {
                found: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Classical => write!(f, "classical"),
            Variant::Custom => write!(f, "custom"),
        }
    }
}
