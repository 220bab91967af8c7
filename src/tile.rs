use derive_more::Display;
use rand::distributions::{Distribution, Standard};
use rand::Rng;

/// The number of distinct letters in [LETTER_TILES]. `32` letters.
pub const LETTERS_LEN: usize = 32;
/// The number of [blank tiles](Tile::Blank) in the standard bag. `2` blanks.
pub const BLANKS_LEN: usize = 2;

/// A row of the static letter table: a letter, its face value and how many copies
/// the standard bag holds.
///
/// # See Also
///
/// * [LETTER_TILES]
/// * [TileBag::standard](crate::TileBag::standard)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct LetterTile {
    /// The letter printed on the [tile](Tile).
    pub letter: char,
    /// The face value of the [tile](Tile).
    pub points: u32,
    /// The number of copies in the standard bag.
    pub count: usize,
}

const fn letter_tile(letter: char, points: u32, count: usize) -> LetterTile {
    LetterTile {
        letter,
        points,
        count,
    }
}

/// The standard distribution of letter [tiles](Tile), `98` tiles over [LETTERS_LEN] letters.
/// Together with [BLANKS_LEN] blanks the bag holds `100` tiles.
pub static LETTER_TILES: [LetterTile; LETTERS_LEN] = [
    letter_tile('A', 1, 9),
    letter_tile('Ą', 5, 1),
    letter_tile('B', 3, 2),
    letter_tile('C', 2, 3),
    letter_tile('Ć', 6, 1),
    letter_tile('D', 2, 3),
    letter_tile('E', 1, 7),
    letter_tile('Ę', 5, 1),
    letter_tile('F', 5, 1),
    letter_tile('G', 3, 2),
    letter_tile('H', 3, 2),
    letter_tile('I', 1, 8),
    letter_tile('J', 3, 2),
    letter_tile('K', 2, 3),
    letter_tile('L', 2, 3),
    letter_tile('Ł', 3, 2),
    letter_tile('M', 2, 3),
    letter_tile('N', 1, 5),
    letter_tile('Ń', 7, 1),
    letter_tile('O', 1, 6),
    letter_tile('Ó', 5, 1),
    letter_tile('P', 2, 3),
    letter_tile('R', 1, 4),
    letter_tile('S', 1, 4),
    letter_tile('Ś', 5, 1),
    letter_tile('T', 2, 3),
    letter_tile('U', 3, 2),
    letter_tile('W', 1, 4),
    letter_tile('Y', 2, 4),
    letter_tile('Z', 1, 5),
    letter_tile('Ź', 9, 1),
    letter_tile('Ż', 5, 1),
];

/// # Returns
///
/// Every letter of [LETTER_TILES] in table order. This is the pool a
/// [blank](Tile::Blank) may stand for.
#[inline]
pub fn letters() -> impl Iterator<Item = char> + Clone {
    LETTER_TILES.iter().map(|letter_tile| letter_tile.letter)
}

impl LetterTile {
    /// # Errors
    ///
    /// * [TileError::UnknownLetter] When `letter` is not in [LETTER_TILES].
    ///
    /// # Returns
    ///
    /// The table row for `letter`.
    pub fn from_letter(letter: char) -> Result<&'static LetterTile, TileError> {
        LETTER_TILES
            .iter()
            .find(|letter_tile| letter_tile.letter == letter)
            .ok_or(TileError::UnknownLetter { letter })
    }

    /// # Returns
    ///
    /// A letter [tile](Tile) with this letter and face value.
    #[inline]
    pub fn to_tile(&self) -> Tile {
        Tile::Letter {
            letter: self.letter,
            points: self.points,
        }
    }
}

/// A tile drawn from the bag. Either a letter with a fixed face value or a blank worth
/// nothing that stands for any letter once placed.
///
/// # See Also
///
/// * [PlacedTile]
/// * [Rack](crate::Rack)
/// * [TileBag](crate::TileBag)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Tile {
    /// A tile with a printed letter.
    Letter {
        /// The printed letter.
        letter: char,
        /// The face value.
        points: u32,
    },
    /// A blank tile, worth `0` points.
    Blank,
}

/// Describes the reason why a [tile](Tile) or [placed tile](PlacedTile) could not be created.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Display)]
pub enum TileError {
    /// Attempting to create a letter [tile](Tile) or assign a [blank](Tile::Blank)
    /// with something that is not a letter.
    #[display("{letter:?} is not a letter")]
    MissingLetter {
        /// The rejected character.
        letter: char,
    },
    /// Attempting to place a [blank](Tile::Blank) without choosing its letter.
    #[display("a blank tile requires an assigned letter")]
    BlankLetterUnassigned,
    /// Attempting to place a letter [tile](Tile) as a different letter.
    #[display("tile {expected} cannot be placed as {actual}")]
    LetterMismatch {
        /// The letter printed on the [tile](Tile).
        expected: char,
        /// The letter requested on the board.
        actual: char,
    },
    /// Attempting to look up a letter outside of [LETTER_TILES].
    #[display("unknown letter {letter}")]
    UnknownLetter {
        /// The rejected letter.
        letter: char,
    },
}

impl std::error::Error for TileError {}

impl Tile {
    /// # Errors
    ///
    /// * [TileError::MissingLetter] When `letter` is not alphabetic.
    ///
    /// # Returns
    ///
    /// A letter [tile](Tile) with any face value, for variants and tests that do not
    /// follow [LETTER_TILES].
    pub fn letter(letter: char, points: u32) -> Result<Tile, TileError> {
        if !letter.is_alphabetic() {
            return Err(TileError::MissingLetter { letter });
        }
        Ok(Tile::Letter { letter, points })
    }

    /// # Errors
    ///
    /// * [TileError::UnknownLetter] When `letter` is not in [LETTER_TILES].
    ///
    /// # Returns
    ///
    /// The standard letter [tile](Tile) for `letter`.
    pub fn from_letter(letter: char) -> Result<Tile, TileError> {
        LetterTile::from_letter(letter).map(LetterTile::to_tile)
    }

    /// The face value, `0` for a [blank](Tile::Blank).
    #[inline]
    pub fn points(&self) -> u32 {
        match self {
            Tile::Letter { points, .. } => *points,
            Tile::Blank => 0,
        }
    }

    /// The printed letter, [None] for a [blank](Tile::Blank).
    #[inline]
    pub fn printed_letter(&self) -> Option<char> {
        match self {
            Tile::Letter { letter, .. } => Some(*letter),
            Tile::Blank => None,
        }
    }

    /// Whether the [tile](Tile) is a [blank](Tile::Blank).
    #[inline]
    pub fn is_blank(&self) -> bool {
        matches!(self, Tile::Blank)
    }
}

impl Distribution<Tile> for Standard {
    /// Samples the standard distribution: each of the `100` [tiles](Tile) of a fresh bag
    /// is equally likely.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Tile {
        let total = LETTER_TILES
            .iter()
            .map(|letter_tile| letter_tile.count)
            .sum::<usize>()
            + BLANKS_LEN;
        let mut index = rng.gen_range(0..total);
        for letter_tile in &LETTER_TILES {
            if index < letter_tile.count {
                return letter_tile.to_tile();
            }
            index -= letter_tile.count;
        }
        Tile::Blank
    }
}

/// A [tile](Tile) bound to the letter it spells on the board. For a letter tile the
/// letter is its printed letter, for a [blank](Tile::Blank) it is chosen by the player.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct PlacedTile {
    tile: Tile,
    letter: char,
}

impl PlacedTile {
    /// # Errors
    ///
    /// * [TileError::MissingLetter] When a [blank](Tile::Blank) is assigned something
    /// that is not a letter.
    /// * [TileError::LetterMismatch] When a letter [tile](Tile) is assigned a different letter.
    pub fn new(tile: Tile, letter: char) -> Result<PlacedTile, TileError> {
        match tile {
            Tile::Blank if !letter.is_alphabetic() => Err(TileError::MissingLetter { letter }),
            Tile::Letter { letter: expected, .. } if expected != letter => {
                Err(TileError::LetterMismatch {
                    expected,
                    actual: letter,
                })
            }
            _ => Ok(PlacedTile { tile, letter }),
        }
    }

    /// Places a letter [tile](Tile) as its printed letter.
    ///
    /// # Errors
    ///
    /// * [TileError::BlankLetterUnassigned] When `tile` is a [blank](Tile::Blank).
    pub fn from_tile(tile: Tile) -> Result<PlacedTile, TileError> {
        match tile.printed_letter() {
            Some(letter) => Ok(PlacedTile { tile, letter }),
            None => Err(TileError::BlankLetterUnassigned),
        }
    }

    /// The [tile](Tile) that was placed.
    #[inline]
    pub fn tile(&self) -> Tile {
        self.tile
    }

    /// The letter spelled on the board.
    #[inline]
    pub fn letter(&self) -> char {
        self.letter
    }

    /// The face value of the placed [tile](Tile).
    #[inline]
    pub fn points(&self) -> u32 {
        self.tile.points()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn letter_tiles_len() {
        assert_eq!(LETTERS_LEN, letters().count());
    }

    #[test]
    fn letter_tiles_no_duplicates() {
        assert_eq!(0, letters().duplicates().count());
    }

    #[test]
    fn letter_tiles_total() {
        let letter_tiles: usize = LETTER_TILES.iter().map(|letter_tile| letter_tile.count).sum();
        assert_eq!(98, letter_tiles);
        assert_eq!(100, letter_tiles + BLANKS_LEN);
    }

    #[test]
    fn from_letter() {
        assert_eq!(
            Tile::Letter {
                letter: 'Ź',
                points: 9
            },
            Tile::from_letter('Ź').unwrap()
        );
        assert_eq!(
            TileError::UnknownLetter { letter: 'Q' },
            Tile::from_letter('Q').expect_err("from_letter should return Err")
        );
    }

    #[test]
    fn letter_requires_letter() {
        assert_eq!(
            TileError::MissingLetter { letter: '\0' },
            Tile::letter('\0', 1).expect_err("letter should return Err")
        );
        assert_eq!(3, Tile::letter('H', 3).unwrap().points());
    }

    #[test]
    fn blank_is_worth_nothing() {
        assert_eq!(0, Tile::Blank.points());
        assert!(Tile::Blank.is_blank());
        assert!(Tile::Blank.printed_letter().is_none());
    }

    #[test]
    fn placed_blank() {
        let placed = PlacedTile::new(Tile::Blank, 'A').unwrap();
        assert_eq!('A', placed.letter());
        assert_eq!(0, placed.points());
        assert_eq!(
            TileError::MissingLetter { letter: '\0' },
            PlacedTile::new(Tile::Blank, '\0').expect_err("new should return Err")
        );
        assert_eq!(
            TileError::BlankLetterUnassigned,
            PlacedTile::from_tile(Tile::Blank).expect_err("from_tile should return Err")
        );
    }

    #[test]
    fn sample_standard() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            match rng.gen::<Tile>() {
                Tile::Letter { letter, points } => {
                    assert_eq!(Ok(points), LetterTile::from_letter(letter).map(|tile| tile.points));
                }
                Tile::Blank => {}
            }
        }
    }

    #[test]
    fn placed_letter_must_match() {
        let tile = Tile::from_letter('B').unwrap();
        assert_eq!('B', PlacedTile::from_tile(tile).unwrap().letter());
        assert_eq!(
            TileError::LetterMismatch {
                expected: 'B',
                actual: 'C'
            },
            PlacedTile::new(tile, 'C').expect_err("new should return Err")
        );
    }
}
