//! The board: a fixed ring of spaces.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::property::{ColorGroup, Property};
use super::space::{Space, SpecialSquare};
use crate::core::GameError;

/// Ordered ring of spaces. Index 0 is GO and positions wrap modulo `len()`.
///
/// The layout is fixed once built; only property ownership changes.
///
/// ## Example
///
/// ```
/// use surfopoly::board::{Board, ColorGroup};
///
/// let board = Board::standard();
/// assert_eq!(board.len(), 40);
/// assert_eq!(board.properties_by_color(ColorGroup::Brown).count(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Board {
    spaces: Vec<Space>,
    /// Property positions per colour group, in board order.
    groups: FxHashMap<ColorGroup, SmallVec<[usize; 4]>>,
}

impl Board {
    /// Build a board from an explicit list of spaces.
    pub fn new(spaces: Vec<Space>) -> Result<Self, GameError> {
        if spaces.is_empty() {
            return Err(GameError::EmptyBoard);
        }

        Ok(Self::from_spaces(spaces))
    }

    fn from_spaces(spaces: Vec<Space>) -> Self {
        let mut groups: FxHashMap<ColorGroup, SmallVec<[usize; 4]>> = FxHashMap::default();
        for (position, space) in spaces.iter().enumerate() {
            if let Some(property) = space.as_property() {
                groups.entry(property.color_group).or_default().push(position);
            }
        }

        Self { spaces, groups }
    }

    /// The standard 40-space Surfopoly board.
    #[must_use]
    pub fn standard() -> Self {
        use ColorGroup::*;
        use SpecialSquare::*;

        let spaces: Vec<Space> = vec![
            Go.into(),
            Property::beach("Pipeline, Hawaii", 60, 2, Brown).into(),
            CommunityChest.into(),
            Property::beach("Waimea Bay, Hawaii", 60, 4, Brown).into(),
            IncomeTax.into(),
            Property::wave_pool("North Shore Wave Pool", 200, 25).into(),
            Property::beach("Teahupo'o, Tahiti", 100, 6, LightBlue).into(),
            Chance.into(),
            Property::beach("Cloudbreak, Fiji", 100, 6, LightBlue).into(),
            Property::beach("Uluwatu, Bali", 120, 8, LightBlue).into(),
            // 10
            Jail.into(),
            Property::beach("Jeffreys Bay, South Africa", 140, 10, Pink).into(),
            Property::surf_brand("Swell Surfboards", 150, 10).into(),
            Property::beach("Bells Beach, Australia", 140, 10, Pink).into(),
            Property::beach("Snapper Rocks, Australia", 160, 12, Pink).into(),
            Property::wave_pool("Surf Ranch Wave Pool", 200, 25).into(),
            Property::beach("Trestles, California", 180, 14, Orange).into(),
            CommunityChest.into(),
            Property::beach("Rincon, Puerto Rico", 180, 14, Orange).into(),
            Property::beach("El Porto, California", 200, 16, Orange).into(),
            // 20
            FreeParking.into(),
            Property::beach("Hossegor, France", 220, 18, Red).into(),
            LuckyDraw.into(),
            Property::beach("Mundaka, Spain", 220, 18, Red).into(),
            Property::beach("Nazare, Portugal", 240, 20, Red).into(),
            Property::wave_pool("Urban Surf Wave Pool", 200, 25).into(),
            Property::beach("Supertubos, Portugal", 260, 22, Yellow).into(),
            Property::beach("Thurso East, Scotland", 260, 22, Yellow).into(),
            Property::surf_brand("Wax & Fin Supply", 150, 10).into(),
            Property::beach("Fistral Beach, England", 280, 24, Yellow).into(),
            // 30
            GoToJail.into(),
            Property::beach("Mavericks, California", 300, 26, Green).into(),
            Property::beach("Puerto Escondido, Mexico", 300, 26, Green).into(),
            CommunityChest.into(),
            Property::beach("Chicama, Peru", 320, 28, Green).into(),
            Property::wave_pool("Wavegarden Cove", 200, 25).into(),
            Chance.into(),
            Property::beach("Jaws, Maui", 350, 35, DarkBlue).into(),
            IncomeTax.into(),
            Property::beach("Shipstern Bluff, Tasmania", 400, 50, DarkBlue).into(),
        ];

        Self::from_spaces(spaces)
    }

    /// Number of spaces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    /// Always false: a board has at least one space.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }

    /// Position reached by moving `steps` forward from `from`.
    #[must_use]
    pub fn advance(&self, from: usize, steps: usize) -> usize {
        (from + steps) % self.spaces.len()
    }

    /// The space at `position`.
    pub fn space(&self, position: usize) -> Result<&Space, GameError> {
        self.spaces.get(position).ok_or(GameError::PositionOutOfBounds {
            position,
            len: self.spaces.len(),
        })
    }

    /// The property at `position`, or `None` for a special square.
    pub fn property(&self, position: usize) -> Result<Option<&Property>, GameError> {
        Ok(self.space(position)?.as_property())
    }

    /// Mutable access to the property at `position`.
    pub fn property_mut(&mut self, position: usize) -> Result<Option<&mut Property>, GameError> {
        let len = self.spaces.len();
        self.spaces
            .get_mut(position)
            .map(Space::as_property_mut)
            .ok_or(GameError::PositionOutOfBounds { position, len })
    }

    /// Properties in a colour group, in board order.
    pub fn properties_by_color(&self, group: ColorGroup) -> impl Iterator<Item = &Property> + '_ {
        self.positions_by_color(group)
            .iter()
            .filter_map(move |&position| self.spaces[position].as_property())
    }

    /// Board positions of the properties in a colour group.
    #[must_use]
    pub fn positions_by_color(&self, group: ColorGroup) -> &[usize] {
        self.groups.get(&group).map(|positions| positions.as_slice()).unwrap_or(&[])
    }

    /// Iterate over `(position, space)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Space)> {
        self.spaces.iter().enumerate()
    }

    /// Clear every owner.
    pub fn clear_owners(&mut self) {
        for space in &mut self.spaces {
            if let Some(property) = space.as_property_mut() {
                property.owner = None;
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    #[test]
    fn test_standard_layout_fixed_squares() {
        let board = Board::standard();

        assert_eq!(board.len(), 40);
        assert_eq!(board.space(0).unwrap(), &Space::Special(SpecialSquare::Go));
        assert_eq!(board.space(10).unwrap(), &Space::Special(SpecialSquare::Jail));
        assert_eq!(board.space(20).unwrap(), &Space::Special(SpecialSquare::FreeParking));
        assert_eq!(board.space(30).unwrap(), &Space::Special(SpecialSquare::GoToJail));
    }

    #[test]
    fn test_standard_layout_starts_like_the_classic_board() {
        let board = Board::standard();

        let first = board.property(1).unwrap().unwrap();
        assert_eq!(first.name, "Pipeline, Hawaii");
        assert_eq!(first.price, 60);
        assert_eq!(first.rent(), 2);
        assert_eq!(first.color_group, ColorGroup::Brown);

        assert!(board.property(2).unwrap().is_none());
        assert_eq!(board.property(3).unwrap().unwrap().rent(), 4);
        assert_eq!(board.property(5).unwrap().unwrap().color_group, ColorGroup::WavePool);
    }

    #[test]
    fn test_every_property_is_unowned() {
        let board = Board::standard();
        for (_, space) in board.iter() {
            if let Some(property) = space.as_property() {
                assert!(property.is_unowned());
                assert!(property.price > 0);
                assert!(property.rent() > 0);
            }
        }
    }

    #[test]
    fn test_groups() {
        let board = Board::standard();

        assert_eq!(board.positions_by_color(ColorGroup::Brown), &[1, 3]);
        assert_eq!(board.positions_by_color(ColorGroup::WavePool), &[5, 15, 25, 35]);
        assert_eq!(board.positions_by_color(ColorGroup::SurfBrand), &[12, 28]);
        assert_eq!(board.positions_by_color(ColorGroup::DarkBlue), &[37, 39]);

        let names: Vec<_> = board
            .properties_by_color(ColorGroup::LightBlue)
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Teahupo'o, Tahiti", "Cloudbreak, Fiji", "Uluwatu, Bali"]);
    }

    #[test]
    fn test_missing_group_is_empty() {
        let board = Board::new(vec![SpecialSquare::Go.into()]).unwrap();
        assert!(board.positions_by_color(ColorGroup::Red).is_empty());
        assert_eq!(board.properties_by_color(ColorGroup::Red).count(), 0);
    }

    #[test]
    fn test_advance_wraps() {
        let board = Board::standard();
        assert_eq!(board.advance(5, 7), 12);
        assert_eq!(board.advance(38, 5), 3);
        assert_eq!(board.advance(39, 1), 0);
    }

    #[test]
    fn test_out_of_bounds() {
        let board = Board::standard();
        assert_eq!(
            board.space(40),
            Err(GameError::PositionOutOfBounds { position: 40, len: 40 })
        );
        assert!(board.property(99).is_err());
    }

    #[test]
    fn test_empty_board_rejected() {
        assert!(matches!(Board::new(Vec::new()), Err(GameError::EmptyBoard)));
    }

    #[test]
    fn test_clear_owners() {
        let mut board = Board::standard();
        board.property_mut(1).unwrap().unwrap().owner = Some(PlayerId::new(0));

        board.clear_owners();
        assert!(board.property(1).unwrap().unwrap().is_unowned());
    }
}
