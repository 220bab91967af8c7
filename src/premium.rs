use crate::{Coordinate, BOARD_SIZE};
use map_macro::hash_map;
use std::collections::HashMap;
use std::sync::LazyLock;

/// A premium printed on a square. Premiums only apply to [tiles](crate::Tile) placed
/// on the square during the turn being scored.
///
/// # See Also
///
/// * [Board]
/// * [score](crate::score)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Premium {
    /// Doubles the letter placed on the square.
    DoubleLetter,
    /// Triples the letter placed on the square.
    TripleLetter,
    /// Doubles every word through the square.
    DoubleWord,
    /// Triples every word through the square.
    TripleWord,
}

impl Premium {
    /// The factor applied to the letter on the square.
    #[inline]
    pub fn letter_multiplier(self) -> u32 {
        match self {
            Premium::DoubleLetter => 2,
            Premium::TripleLetter => 3,
            Premium::DoubleWord | Premium::TripleWord => 1,
        }
    }

    /// The factor applied to each word through the square.
    #[inline]
    pub fn word_multiplier(self) -> u32 {
        match self {
            Premium::DoubleWord => 2,
            Premium::TripleWord => 3,
            Premium::DoubleLetter | Premium::TripleLetter => 1,
        }
    }
}

const TRIPLE_WORD: [&str; 8] = ["A1", "A8", "A15", "H1", "H15", "O1", "O8", "O15"];
const DOUBLE_WORD: [&str; 17] = [
    "B2", "B14", "C3", "C13", "D4", "D12", "E5", "E11", "H8", "K5", "K11", "L4", "L12", "M3",
    "M13", "N2", "N14",
];
const TRIPLE_LETTER: [&str; 12] = [
    "B6", "B10", "F2", "F6", "F10", "F14", "J2", "J6", "J10", "J14", "N6", "N10",
];
const DOUBLE_LETTER: [&str; 24] = [
    "A4", "A12", "C7", "C9", "D1", "D8", "D15", "G3", "G7", "G9", "G13", "H4", "H12", "I3", "I7",
    "I9", "I13", "L1", "L8", "L15", "M7", "M9", "O4", "O12",
];

static STANDARD: LazyLock<Board> = LazyLock::new(|| {
    let layout: HashMap<Premium, &[&str]> = hash_map! {
        Premium::TripleWord => &TRIPLE_WORD[..],
        Premium::DoubleWord => &DOUBLE_WORD[..],
        Premium::TripleLetter => &TRIPLE_LETTER[..],
        Premium::DoubleLetter => &DOUBLE_LETTER[..],
    };

    let premiums = layout
        .into_iter()
        .flat_map(|(premium, squares)| squares.iter().map(move |&square| (square, premium)))
        .map(|(square, premium)| {
            let coordinate = Coordinate::parse(square).unwrap_or_else(|error| {
                unreachable!("premium square {square:?} should be on the board: {error}")
            });
            (coordinate, premium)
        })
        .collect();

    Board { premiums }
});

/// The fixed premium layout of the board. Immutable once built.
///
/// # See Also
///
/// * [Premium]
/// * [score](crate::score)
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Board {
    premiums: HashMap<Coordinate, Premium>,
}

impl Board {
    /// # Returns
    ///
    /// The standard layout with `8` triple word, `17` double word, `12` triple letter and
    /// `24` double letter squares, symmetric about both axes and both diagonals.
    #[inline]
    pub fn standard() -> &'static Board {
        &STANDARD
    }

    /// # Returns
    ///
    /// A layout without any premium squares.
    pub fn plain() -> Board {
        Board {
            premiums: HashMap::new(),
        }
    }

    /// # Returns
    ///
    /// The [premium](Premium) printed at `coordinate`, if any.
    #[inline]
    pub fn premium_at(&self, coordinate: Coordinate) -> Option<Premium> {
        self.premiums.get(&coordinate).copied()
    }

    /// Whether `coordinate` names a square of this board. Holds for every
    /// [coordinate](Coordinate) that [Coordinate::new] or [Coordinate::parse] accepts.
    #[inline]
    pub fn is_inside(&self, coordinate: Coordinate) -> bool {
        coordinate.row() < BOARD_SIZE && coordinate.col() < BOARD_SIZE
    }

    /// An iteration of every premium square.
    pub fn premiums(&self) -> impl Iterator<Item = (Coordinate, Premium)> + '_ {
        self.premiums
            .iter()
            .map(|(&coordinate, &premium)| (coordinate, premium))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{random_coordinate, CENTER};

    fn count(premium: Premium) -> usize {
        Board::standard()
            .premiums()
            .filter(|&(_, other)| other == premium)
            .count()
    }

    #[test]
    fn standard_counts() {
        assert_eq!(8, count(Premium::TripleWord));
        assert_eq!(17, count(Premium::DoubleWord));
        assert_eq!(12, count(Premium::TripleLetter));
        assert_eq!(24, count(Premium::DoubleLetter));
        assert_eq!(61, Board::standard().premiums().count());
    }

    #[test]
    fn center_is_double_word() {
        assert_eq!(
            Some(Premium::DoubleWord),
            Board::standard().premium_at(CENTER)
        );
    }

    #[test]
    fn standard_is_symmetric() {
        let board = Board::standard();
        let last = BOARD_SIZE - 1;
        for (coordinate, premium) in board.premiums() {
            let (row, col) = (coordinate.row(), coordinate.col());
            for (mirror_row, mirror_col) in [
                (last - row, col),
                (row, last - col),
                (col, row),
                (last - col, last - row),
            ] {
                let mirror = Coordinate::new(mirror_row, mirror_col).unwrap();
                assert_eq!(Some(premium), board.premium_at(mirror), "{coordinate} vs {mirror}");
            }
        }
    }

    #[test]
    fn plain_has_no_premiums() {
        assert!(Board::plain().premium_at(CENTER).is_none());
    }

    #[test]
    fn is_inside() {
        let mut rng = rand::thread_rng();
        let board = Board::standard();
        for _ in 0..100 {
            assert!(board.is_inside(random_coordinate(&mut rng)));
        }
        assert!(board.is_inside(Coordinate::parse("O15").unwrap()));
        assert!(Board::plain().is_inside(CENTER));
    }

    #[test]
    fn multipliers() {
        assert_eq!(2, Premium::DoubleLetter.letter_multiplier());
        assert_eq!(1, Premium::DoubleLetter.word_multiplier());
        assert_eq!(3, Premium::TripleWord.word_multiplier());
        assert_eq!(1, Premium::TripleWord.letter_multiplier());
    }
}
