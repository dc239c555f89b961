//! Board spaces.

use serde::{Deserialize, Serialize};

use super::property::Property;
use crate::cards::CardCategory;

/// A non-property square.
///
/// The label is for display and for the optional card/tax rules. The
/// engine's jail, free parking and go-to-jail handling keys off the
/// configured positions, not these labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecialSquare {
    Go,
    CommunityChest,
    Chance,
    LuckyDraw,
    IncomeTax,
    Jail,
    FreeParking,
    GoToJail,
}

impl SpecialSquare {
    /// The deck this square draws from, if it is a card square.
    #[must_use]
    pub fn deck(self) -> Option<CardCategory> {
        match self {
            SpecialSquare::Chance => Some(CardCategory::Chance),
            SpecialSquare::LuckyDraw | SpecialSquare::CommunityChest => Some(CardCategory::LuckyDraw),
            _ => None,
        }
    }
}

impl std::fmt::Display for SpecialSquare {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SpecialSquare::Go => "GO",
            SpecialSquare::CommunityChest => "Community Chest",
            SpecialSquare::Chance => "Chance",
            SpecialSquare::LuckyDraw => "Lucky Draw",
            SpecialSquare::IncomeTax => "Income Tax",
            SpecialSquare::Jail => "Jail",
            SpecialSquare::FreeParking => "Free Parking",
            SpecialSquare::GoToJail => "Go To Jail",
        };
        f.write_str(name)
    }
}

/// One slot on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Space {
    Property(Property),
    Special(SpecialSquare),
}

impl Space {
    /// The property on this space, if any.
    #[must_use]
    pub fn as_property(&self) -> Option<&Property> {
        match self {
            Space::Property(property) => Some(property),
            Space::Special(_) => None,
        }
    }

    /// Mutable access to the property on this space, if any.
    pub fn as_property_mut(&mut self) -> Option<&mut Property> {
        match self {
            Space::Property(property) => Some(property),
            Space::Special(_) => None,
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Space::Property(property) => property.name.clone(),
            Space::Special(special) => special.to_string(),
        }
    }
}

impl From<Property> for Space {
    fn from(property: Property) -> Self {
        Space::Property(property)
    }
}

impl From<SpecialSquare> for Space {
    fn from(special: SpecialSquare) -> Self {
        Space::Special(special)
    }
}
