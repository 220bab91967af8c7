use crate::{Coordinate, Direction, PlacedTile, Placements};
use derive_more::Display;
use std::collections::HashMap;

/// An immutable snapshot of the [tiles](PlacedTile) permanently on the board.
/// New snapshots are produced with [BoardState::with_placed]; a snapshot is never
/// changed in place.
///
/// # See Also
///
/// * [GameState](crate::GameState)
/// * [PendingMove](crate::PendingMove)
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct BoardState {
    tiles: HashMap<Coordinate, PlacedTile>,
}

/// Attempting to put a [tile](PlacedTile) on a square that already holds one.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Display)]
#[display("square {coordinate} is already occupied")]
pub struct SquareOccupied {
    /// The first occupied square found.
    pub coordinate: Coordinate,
}

impl std::error::Error for SquareOccupied {}

impl BoardState {
    /// # Returns
    ///
    /// A board without any [tiles](PlacedTile).
    #[inline]
    pub fn empty() -> BoardState {
        BoardState::default()
    }

    /// Whether no [tile](PlacedTile) has been placed yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The number of occupied squares.
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// # Returns
    ///
    /// The [tile](PlacedTile) at `coordinate`, if any.
    #[inline]
    pub fn tile_at(&self, coordinate: Coordinate) -> Option<&PlacedTile> {
        self.tiles.get(&coordinate)
    }

    /// Whether `coordinate` is occupied.
    #[inline]
    pub fn has_tile(&self, coordinate: Coordinate) -> bool {
        self.tiles.contains_key(&coordinate)
    }

    /// Whether the square `steps` away from `coordinate` along `direction` is on the board
    /// and occupied.
    #[inline]
    pub(crate) fn has_tile_at_offset(
        &self,
        coordinate: Coordinate,
        direction: Direction,
        steps: isize,
    ) -> bool {
        coordinate
            .offset(direction, steps)
            .is_some_and(|other| self.has_tile(other))
    }

    /// An iteration of every occupied square and its [tile](PlacedTile) in arbitrary order.
    pub fn tiles(&self) -> impl Iterator<Item = (Coordinate, &PlacedTile)> + '_ {
        self.tiles.iter().map(|(&coordinate, tile)| (coordinate, tile))
    }

    /// Merges `placements` into a copy of this board.
    ///
    /// Only checks that the target squares are free; direction and contiguity rules
    /// belong to [validate_placement](crate::validate_placement).
    ///
    /// # Errors
    ///
    /// * [SquareOccupied] When any [coordinate](Coordinate) in `placements` is
    /// already occupied.
    ///
    /// # Returns
    ///
    /// The new board.
    pub fn with_placed(&self, placements: &Placements) -> Result<BoardState, SquareOccupied> {
        if let Some(&coordinate) = placements.keys().find(|&&coordinate| self.has_tile(coordinate))
        {
            return Err(SquareOccupied { coordinate });
        }

        let mut tiles = HashMap::with_capacity(self.tiles.len() + placements.len());
        tiles.extend(self.tiles.iter().map(|(&coordinate, &tile)| (coordinate, tile)));
        tiles.extend(placements.iter().map(|(&coordinate, &tile)| (coordinate, tile)));
        Ok(BoardState { tiles })
    }
}
