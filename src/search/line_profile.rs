use crate::{letters, BoardState, Coordinate, Direction, WordDictionary, BOARD_SIZE};
use std::collections::BTreeSet;

/// One square of a [LineProfile].
#[derive(Debug, Clone, Eq, PartialEq)]
pub(super) enum Square {
    /// An occupied square and the letter on it.
    Fixed(char),
    /// An empty square.
    Open {
        /// Where the square is.
        coordinate: Coordinate,
        /// The letters that keep the perpendicular word through the square in the
        /// dictionary. [None] when the square has no perpendicular neighbours.
        allowed: Option<BTreeSet<char>>,
    },
}

impl Square {
    /// Whether `letter` may be placed here.
    pub(super) fn allows(&self, letter: char) -> bool {
        match self {
            Square::Fixed(_) => false,
            Square::Open { allowed, .. } => allowed
                .as_ref()
                .map_or(true, |allowed| allowed.contains(&letter)),
        }
    }
}

/// The squares of one row or column with the cross-checks of its empty squares
/// computed up front.
#[derive(Debug, Clone, Eq, PartialEq)]
pub(super) struct LineProfile {
    squares: Vec<Square>,
}

impl LineProfile {
    pub(super) fn new<D>(
        board: &BoardState,
        direction: Direction,
        line: usize,
        dictionary: &D,
    ) -> LineProfile
    where
        D: WordDictionary + ?Sized,
    {
        let squares = (0..BOARD_SIZE)
            .filter_map(|index| direction.coordinate_on_line(line, index))
            .map(|coordinate| match board.tile_at(coordinate) {
                Some(tile) => Square::Fixed(tile.letter()),
                None => Square::Open {
                    coordinate,
                    allowed: cross_check(board, coordinate, direction.perpendicular(), dictionary),
                },
            })
            .collect();

        LineProfile { squares }
    }

    #[inline]
    pub(super) fn square(&self, index: usize) -> Option<&Square> {
        self.squares.get(index)
    }

    #[inline]
    pub(super) fn len(&self) -> usize {
        self.squares.len()
    }

    /// The number of empty squares in `start..=end`.
    pub(super) fn open_count(&self, start: usize, end: usize) -> usize {
        self.squares
            .get(start..=end)
            .map_or(0, |squares| {
                squares
                    .iter()
                    .filter(|square| matches!(square, Square::Open { .. }))
                    .count()
            })
    }
}

/// The letters allowed at `coordinate` by the word it would join along `cross`.
fn cross_check<D>(
    board: &BoardState,
    coordinate: Coordinate,
    cross: Direction,
    dictionary: &D,
) -> Option<BTreeSet<char>>
where
    D: WordDictionary + ?Sized,
{
    let prefix: String = {
        let mut before: Vec<char> = read_run(board, coordinate, cross, -1).collect();
        before.reverse();
        before.into_iter().collect()
    };
    let suffix: String = read_run(board, coordinate, cross, 1).collect();
    if prefix.is_empty() && suffix.is_empty() {
        return None;
    }

    let mut word = String::with_capacity(prefix.len() + suffix.len() + 4);
    Some(
        letters()
            .filter(|&letter| {
                word.clear();
                word.push_str(&prefix);
                word.push(letter);
                word.push_str(&suffix);
                dictionary.contains(&word)
            })
            .collect(),
    )
}

/// The letters on the occupied squares next to `origin`, moving away from it by `step`.
fn read_run(
    board: &BoardState,
    origin: Coordinate,
    direction: Direction,
    step: isize,
) -> impl Iterator<Item = char> + '_ {
    (1..)
        .map(move |distance| origin.offset(direction, step * distance))
        .map_while(move |coordinate| Some(board.tile_at(coordinate?)?.letter()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dictionary, MovePlacement, PlacedTile, Placements, Tile};

    fn board(squares: &[(&str, char)]) -> BoardState {
        let placements: Placements = squares
            .iter()
            .map(|&(square, letter)| {
                (
                    Coordinate::parse(square).unwrap(),
                    PlacedTile::from_tile(Tile::from_letter(letter).unwrap()).unwrap(),
                )
            })
            .collect();
        let placement = MovePlacement::new(placements).unwrap();
        BoardState::empty()
            .with_placed(placement.placements())
            .unwrap()
    }

    #[test]
    fn fixed_and_unconstrained() {
        let board = board(&[("H8", 'K'), ("H9", 'O'), ("H10", 'T')]);
        let words = dictionary(["KOT"]);
        let profile = LineProfile::new(&board, Direction::Horizontal, 7, &words);

        assert_eq!(BOARD_SIZE, profile.len());
        assert_eq!(Some(&Square::Fixed('O')), profile.square(8));
        assert!(profile.square(0).unwrap().allows('Ź'));
        assert!(!profile.square(7).unwrap().allows('K'));
        assert_eq!(12, profile.open_count(0, BOARD_SIZE - 1));
        assert_eq!(1, profile.open_count(6, 8));
    }

    #[test]
    fn cross_checks_below_a_word() {
        let board = board(&[("H8", 'K'), ("H9", 'O'), ("H10", 'T')]);
        let words = dictionary(["KA", "OD", "TO", "DOM"]);
        let profile = LineProfile::new(&board, Direction::Horizontal, 8, &words);

        let Some(Square::Open { allowed, .. }) = profile.square(7) else {
            panic!("I8 should be open");
        };
        assert_eq!(Some(BTreeSet::from(['A'])), *allowed);
        assert!(profile.square(8).unwrap().allows('D'));
        assert!(!profile.square(8).unwrap().allows('A'));
        assert!(profile.square(9).unwrap().allows('O'));
        assert!(profile.square(10).unwrap().allows('Y'));
    }

    #[test]
    fn cross_checks_between_letters() {
        let board = board(&[("G8", 'D'), ("I8", 'M')]);
        let words = dictionary(["DOM", "DYM"]);
        let profile = LineProfile::new(&board, Direction::Horizontal, 7, &words);

        let Some(Square::Open { allowed, .. }) = profile.square(7) else {
            panic!("H8 should be open");
        };
        assert_eq!(Some(BTreeSet::from(['O', 'Y'])), *allowed);
    }
}
