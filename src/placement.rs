use crate::{Coordinate, PlacedTile, Placements};
use derive_more::Display;

/// The [tiles](PlacedTile) one turn puts on the board, not yet merged into any
/// [board](crate::BoardState). Never empty.
///
/// # See Also
///
/// * [validate_placement](crate::validate_placement)
/// * [build_words](crate::build_words)
/// * [score](crate::score)
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MovePlacement {
    placements: Placements,
}

/// Attempting to create a [placement](MovePlacement) without any [tiles](PlacedTile).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Display)]
#[display("a placement requires at least one tile")]
pub struct EmptyPlacement;

impl std::error::Error for EmptyPlacement {}

impl MovePlacement {
    /// # Errors
    ///
    /// * [EmptyPlacement] When `placements` is empty.
    pub fn new(placements: Placements) -> Result<MovePlacement, EmptyPlacement> {
        if placements.is_empty() {
            return Err(EmptyPlacement);
        }
        Ok(MovePlacement { placements })
    }

    /// The placed [tiles](PlacedTile) sorted in reading order.
    #[inline]
    pub fn placements(&self) -> &Placements {
        &self.placements
    }

    /// The number of placed [tiles](PlacedTile), at least `1`.
    #[inline]
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Always `false`; present for symmetry with [MovePlacement::len].
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// The placed [coordinates](Coordinate) in reading order.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + Clone + '_ {
        self.placements.keys().copied()
    }

    /// The first placed [coordinate](Coordinate) in reading order.
    pub fn first_coordinate(&self) -> Coordinate {
        match self.placements.keys().next() {
            Some(&coordinate) => coordinate,
            None => unreachable!("placement should not be empty"),
        }
    }

    /// Whether every placed [coordinate](Coordinate) shares one row.
    pub fn same_row(&self) -> bool {
        let row = self.first_coordinate().row();
        self.coordinates().all(|coordinate| coordinate.row() == row)
    }

    /// Whether every placed [coordinate](Coordinate) shares one column.
    pub fn same_col(&self) -> bool {
        let col = self.first_coordinate().col();
        self.coordinates().all(|coordinate| coordinate.col() == col)
    }

    /// # Returns
    ///
    /// The [placed tile](PlacedTile) at `coordinate`, if this placement puts one there.
    #[inline]
    pub fn get(&self, coordinate: Coordinate) -> Option<&PlacedTile> {
        self.placements.get(&coordinate)
    }
}

impl TryFrom<Placements> for MovePlacement {
    type Error = EmptyPlacement;

    fn try_from(placements: Placements) -> Result<Self, Self::Error> {
        MovePlacement::new(placements)
    }
}
