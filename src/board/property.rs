//! Purchasable board spaces.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Kind of property.
///
/// All kinds charge rent the same way today. The tag is kept so that a
/// future rule (group ownership scaling, for example) can tell them apart
/// without changing how rent is asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyKind {
    /// A surf break, sold in colour groups.
    Beach,
    /// An artificial wave pool.
    WavePool,
    /// A surf brand franchise.
    SurfBrand,
}

/// Colour group a property belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorGroup {
    Brown,
    LightBlue,
    Pink,
    Orange,
    Red,
    Yellow,
    Green,
    DarkBlue,
    WavePool,
    SurfBrand,
}

impl std::fmt::Display for ColorGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ColorGroup::Brown => "Brown",
            ColorGroup::LightBlue => "Light Blue",
            ColorGroup::Pink => "Pink",
            ColorGroup::Orange => "Orange",
            ColorGroup::Red => "Red",
            ColorGroup::Yellow => "Yellow",
            ColorGroup::Green => "Green",
            ColorGroup::DarkBlue => "Dark Blue",
            ColorGroup::WavePool => "Wave Pool",
            ColorGroup::SurfBrand => "Surf Brand",
        };
        f.write_str(name)
    }
}

/// A property on the board.
///
/// ## Example
///
/// ```
/// use surfopoly::board::{ColorGroup, Property};
///
/// let pipeline = Property::beach("Pipeline, Hawaii", 60, 2, ColorGroup::Brown);
/// assert!(pipeline.is_unowned());
/// assert_eq!(pipeline.rent(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// Display name.
    pub name: String,
    /// Purchase price.
    pub price: i64,
    /// Flat rent charged to visitors.
    pub base_rent: i64,
    /// Colour group.
    pub color_group: ColorGroup,
    /// Kind tag.
    pub kind: PropertyKind,
    /// Current owner, if sold.
    pub owner: Option<PlayerId>,
}

impl Property {
    /// Create an unowned property.
    pub fn new(
        name: impl Into<String>,
        price: i64,
        rent: i64,
        color_group: ColorGroup,
        kind: PropertyKind,
    ) -> Self {
        debug_assert!(price > 0 && rent > 0, "price and rent must be positive");
        Self {
            name: name.into(),
            price,
            base_rent: rent,
            color_group,
            kind,
            owner: None,
        }
    }

    /// Create a beach.
    pub fn beach(name: impl Into<String>, price: i64, rent: i64, color_group: ColorGroup) -> Self {
        Self::new(name, price, rent, color_group, PropertyKind::Beach)
    }

    /// Create a wave pool.
    pub fn wave_pool(name: impl Into<String>, price: i64, rent: i64) -> Self {
        Self::new(name, price, rent, ColorGroup::WavePool, PropertyKind::WavePool)
    }

    /// Create a surf brand.
    pub fn surf_brand(name: impl Into<String>, price: i64, rent: i64) -> Self {
        Self::new(name, price, rent, ColorGroup::SurfBrand, PropertyKind::SurfBrand)
    }

    /// Rent owed by a visitor.
    ///
    /// Flat for every kind.
    #[must_use]
    pub fn rent(&self) -> i64 {
        self.base_rent
    }

    /// Whether nobody owns this property yet.
    #[must_use]
    pub fn is_unowned(&self) -> bool {
        self.owner.is_none()
    }
}
