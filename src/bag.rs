use crate::{Bag, Tile, BLANKS_LEN, LETTER_TILES, MIN_EXCHANGE_BAG_LEN};
use derive_more::Display;
use rand::seq::SliceRandom;
use rand::Rng;
use std::iter;
use tap::Tap;
use tracing::{debug, instrument};

/// The shared, shuffled pool of [tiles](Tile) that haven't been drawn yet.
///
/// # See Also
///
/// * [Rack::refill_from](crate::Rack::refill_from)
/// * [GameState](crate::GameState)
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct TileBag {
    tiles: Bag,
}

/// Describes the reason why [tiles](Tile) could not be [exchanged](TileBag::exchange).
#[derive(Debug, Clone, Eq, PartialEq, Hash, Display)]
pub enum ExchangeError {
    /// Attempting to exchange no [tiles](Tile).
    #[display("cannot exchange zero tiles")]
    Empty,
    /// Attempting to exchange while the bag holds fewer than [MIN_EXCHANGE_BAG_LEN]
    /// [tiles](Tile) or fewer than requested.
    #[display("cannot exchange {requested} tiles with {bag_len} tiles in the bag")]
    BagTooSmall {
        /// The number of [tiles](Tile) in the bag.
        bag_len: usize,
        /// The number of [tiles](Tile) offered for exchange.
        requested: usize,
    },
}

impl std::error::Error for ExchangeError {}

impl TileBag {
    /// Creates the standard distribution of [LETTER_TILES] plus [BLANKS_LEN] blanks,
    /// `100` [tiles](Tile) in total, shuffled with `rng`.
    pub fn standard<R>(rng: &mut R) -> TileBag
    where
        R: Rng + ?Sized,
    {
        let tiles = LETTER_TILES
            .iter()
            .flat_map(|letter_tile| iter::repeat(letter_tile.to_tile()).take(letter_tile.count))
            .chain(iter::repeat(Tile::Blank).take(BLANKS_LEN))
            .collect::<Bag>()
            .tap_mut(|tiles| tiles.shuffle(rng));

        TileBag { tiles }
    }

    /// Creates a bag holding exactly `tiles`. The last [tile](Tile) is drawn first.
    #[inline]
    pub fn from_tiles(tiles: Bag) -> TileBag {
        TileBag { tiles }
    }

    /// The number of undrawn [tiles](Tile).
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether every [tile](Tile) has been drawn.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The undrawn [tiles](Tile), the next one drawn last.
    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Draws up to `n` [tiles](Tile). Fewer are returned once the bag runs out; drawing
    /// never fails.
    pub fn draw(&mut self, n: usize) -> Vec<Tile> {
        let start = self.tiles.len().saturating_sub(n);
        let mut drawn = self.tiles.split_off(start);
        drawn.reverse();
        drawn
    }

    /// Returns `tiles` to the bag and reshuffles it.
    pub fn add_all<R>(&mut self, tiles: impl IntoIterator<Item = Tile>, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        self.tiles.extend(tiles);
        self.tiles.shuffle(rng);
    }

    /// Swaps `tiles` for the same number of [tiles](Tile) from the bag. The replacements
    /// are drawn before `tiles` go back in, so a [tile](Tile) is never drawn straight back.
    ///
    /// # Errors
    ///
    /// * [ExchangeError::Empty] When `tiles` is empty.
    /// * [ExchangeError::BagTooSmall] When the bag holds fewer than [MIN_EXCHANGE_BAG_LEN]
    /// [tiles](Tile) or fewer than `tiles.len()`.
    ///
    /// # Returns
    ///
    /// The replacement [tiles](Tile).
    #[instrument(skip(self, tiles, rng), fields(requested = tiles.len(), bag_len = self.tiles.len()))]
    pub fn exchange<R>(&mut self, tiles: Vec<Tile>, rng: &mut R) -> Result<Vec<Tile>, ExchangeError>
    where
        R: Rng + ?Sized,
    {
        if tiles.is_empty() {
            return Err(ExchangeError::Empty);
        }
        let bag_len = self.tiles.len();
        if bag_len < MIN_EXCHANGE_BAG_LEN || bag_len < tiles.len() {
            return Err(ExchangeError::BagTooSmall {
                bag_len,
                requested: tiles.len(),
            });
        }

        let drawn = self.draw(tiles.len());
        self.add_all(tiles, rng);
        debug!(drawn = drawn.len(), "exchanged tiles");
        Ok(drawn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{letters, random_letter_tile, LetterTile};
    use itertools::Itertools;
    use std::collections::HashMap;

    #[test]
    fn standard_distribution() {
        let mut rng = rand::thread_rng();
        let bag = TileBag::standard(&mut rng);

        assert_eq!(100, bag.len());
        let counts: HashMap<Tile, usize> = bag.tiles().iter().copied().counts();
        assert_eq!(Some(&BLANKS_LEN), counts.get(&Tile::Blank));
        for letter in letters() {
            let letter_tile = LetterTile::from_letter(letter).unwrap();
            assert_eq!(
                Some(&letter_tile.count),
                counts.get(&letter_tile.to_tile()),
                "{letter}"
            );
        }
    }

    #[test]
    fn draw_from_end() {
        let a = Tile::from_letter('A').unwrap();
        let b = Tile::from_letter('B').unwrap();
        let c = Tile::from_letter('C').unwrap();
        let mut bag = TileBag::from_tiles(vec![a, b, c]);

        assert_eq!(vec![c, b], bag.draw(2));
        assert_eq!(&[a], bag.tiles());
    }

    #[test]
    fn draw_more_than_bag() {
        let mut rng = rand::thread_rng();
        let tiles: Bag = (0..3).map(|_| random_letter_tile(&mut rng)).collect();
        let mut bag = TileBag::from_tiles(tiles);

        assert_eq!(3, bag.draw(7).len());
        assert!(bag.is_empty());
        assert!(bag.draw(1).is_empty());
    }

    #[test]
    fn add_all_keeps_every_tile() {
        let mut rng = rand::thread_rng();
        let mut bag = TileBag::standard(&mut rng);
        let drawn = bag.draw(7);

        bag.add_all(drawn, &mut rng);
        assert_eq!(100, bag.len());
    }

    #[test]
    fn exchange() {
        let mut rng = rand::thread_rng();
        let mut bag = TileBag::standard(&mut rng);
        let offered = bag.draw(3);
        let before = bag.len();

        let drawn = bag.exchange(offered, &mut rng).unwrap();

        assert_eq!(3, drawn.len());
        assert_eq!(before, bag.len());
    }

    #[test]
    fn exchange_empty() {
        let mut rng = rand::thread_rng();
        let mut bag = TileBag::standard(&mut rng);

        assert_eq!(
            ExchangeError::Empty,
            bag.exchange(Vec::new(), &mut rng)
                .expect_err("exchange should return Err")
        );
    }

    #[test]
    fn exchange_bag_too_small() {
        let mut rng = rand::thread_rng();
        let tiles: Bag = (0..MIN_EXCHANGE_BAG_LEN - 1)
            .map(|_| random_letter_tile(&mut rng))
            .collect();
        let mut bag = TileBag::from_tiles(tiles.clone());

        assert_eq!(
            ExchangeError::BagTooSmall {
                bag_len: MIN_EXCHANGE_BAG_LEN - 1,
                requested: 1
            },
            bag.exchange(vec![Tile::Blank], &mut rng)
                .expect_err("exchange should return Err")
        );
        assert_eq!(tiles.as_slice(), bag.tiles());
    }
}
