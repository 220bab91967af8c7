use crate::{MovePlacement, Plays, RackTiles, Tile, TileBag, RACK_CAPACITY};
use derive_more::Display;

/// The ordered [tiles](Tile) held by one player, never more than [RACK_CAPACITY].
///
/// # See Also
///
/// * [Player](crate::Player)
/// * [TileBag]
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Rack {
    tiles: RackTiles,
}

/// Describes the reason why a [rack](Rack) could not be changed. The [rack](Rack) is left
/// as it was whenever one of these is returned.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Display)]
pub enum RackError {
    /// Attempting to hold more than [RACK_CAPACITY] [tiles](Tile).
    #[display("rack cannot hold {requested} tiles, capacity is {capacity}")]
    Full {
        /// The number of [tiles](Tile) the [rack](Rack) would hold.
        requested: usize,
        /// [RACK_CAPACITY].
        capacity: usize,
    },
    /// Attempting to take a [tile](Tile) the [rack](Rack) does not hold.
    #[display("tile {tile:?} is not in the rack")]
    TileNotInRack {
        /// The first missing [tile](Tile).
        tile: Tile,
    },
    /// Attempting to take a [tile](Tile) at an index past the end of the [rack](Rack).
    #[display("index {index} is out of bounds for a rack of {len} tiles")]
    IndexOutOfBounds {
        /// The first rejected index.
        index: usize,
        /// The number of [tiles](Tile) in the [rack](Rack).
        len: usize,
    },
}

impl std::error::Error for RackError {}

impl Rack {
    /// # Returns
    ///
    /// An empty [rack](Rack).
    #[inline]
    pub fn new() -> Rack {
        Rack::default()
    }

    /// The held [tiles](Tile) in order.
    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// The number of held [tiles](Tile).
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether no [tiles](Tile) are held.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The number of [tiles](Tile) that can still be added.
    #[inline]
    pub fn remaining_capacity(&self) -> usize {
        RACK_CAPACITY - self.tiles.len()
    }

    /// The sum of the face values of the held [tiles](Tile).
    pub fn point_sum(&self) -> u32 {
        self.tiles.iter().map(Tile::points).sum()
    }

    /// # Errors
    ///
    /// * [RackError::Full] When the [rack](Rack) already holds [RACK_CAPACITY] [tiles](Tile).
    pub fn add(&mut self, tile: Tile) -> Result<(), RackError> {
        self.add_all([tile])
    }

    /// Adds every [tile](Tile) or none of them.
    ///
    /// # Errors
    ///
    /// * [RackError::Full] When the [tiles](Tile) do not fit.
    pub fn add_all(&mut self, tiles: impl IntoIterator<Item = Tile>) -> Result<(), RackError> {
        let tiles: RackTiles = tiles.into_iter().collect();
        let requested = self.tiles.len() + tiles.len();
        if requested > RACK_CAPACITY {
            return Err(RackError::Full {
                requested,
                capacity: RACK_CAPACITY,
            });
        }
        self.tiles.extend(tiles);
        Ok(())
    }

    /// Puts back [tiles](Tile) taken for a move that was not committed.
    ///
    /// # Errors
    ///
    /// * [RackError::Full] When the [tiles](Tile) do not fit.
    #[inline]
    pub fn restore(&mut self, tiles: impl IntoIterator<Item = Tile>) -> Result<(), RackError> {
        self.add_all(tiles)
    }

    /// Removes the first [tile](Tile) equal to `tile`.
    ///
    /// # Returns
    ///
    /// Whether a [tile](Tile) was removed.
    pub fn remove(&mut self, tile: &Tile) -> bool {
        match self.tiles.iter().position(|held| held == tile) {
            Some(index) => {
                self.tiles.remove(index);
                true
            }
            None => false,
        }
    }

    /// Removes one held [tile](Tile) for each [tile](crate::PlacedTile) of `placement`.
    /// A [blank](Tile::Blank) is matched by any blank, a letter [tile](Tile) by its letter
    /// and face value. Either every [tile](Tile) is removed or none is.
    ///
    /// # Errors
    ///
    /// * [RackError::TileNotInRack] When some placed [tile](Tile) is not held.
    ///
    /// # Returns
    ///
    /// The removed [tiles](Tile) in placement order.
    pub fn take_placed(&mut self, placement: &MovePlacement) -> Result<Vec<Tile>, RackError> {
        let mut remaining = self.tiles.clone();
        let mut taken = Vec::with_capacity(placement.len());
        for placed in placement.placements().values() {
            let tile = placed.tile();
            let Some(index) = remaining.iter().position(|held| *held == tile) else {
                return Err(RackError::TileNotInRack { tile });
            };
            taken.push(remaining.remove(index));
        }
        self.tiles = remaining;
        Ok(taken)
    }

    /// Removes the [tiles](Tile) at the rack indexes of `plays`. Either every
    /// [tile](Tile) is removed or none is.
    ///
    /// # Errors
    ///
    /// * [RackError::IndexOutOfBounds] When some index is not less than [Rack::len].
    ///
    /// # Returns
    ///
    /// The removed [tiles](Tile) in index order.
    pub fn take_plays(&mut self, plays: &Plays) -> Result<Vec<Tile>, RackError> {
        let len = self.tiles.len();
        let indexes: Vec<usize> = plays.left_values().copied().collect();
        if let Some(&index) = indexes.iter().find(|&&index| index >= len) {
            return Err(RackError::IndexOutOfBounds { index, len });
        }

        let mut taken: Vec<Tile> = indexes
            .into_iter()
            .rev()
            .map(|index| self.tiles.remove(index))
            .collect();
        taken.reverse();
        Ok(taken)
    }

    /// Draws from `bag` until the [rack](Rack) is full or the bag is empty.
    ///
    /// # Returns
    ///
    /// The number of [tiles](Tile) drawn.
    pub fn refill_from(&mut self, bag: &mut TileBag) -> usize {
        let drawn = bag.draw(self.remaining_capacity());
        let len = drawn.len();
        self.tiles.extend(drawn);
        len
    }

    /// Removes every [tile](Tile).
    #[inline]
    pub fn clear(&mut self) {
        self.tiles.clear();
    }
}
