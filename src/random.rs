use crate::{
    Coordinate, PlacedTile, Placements, Player, Players, Rack, Tile, BOARD_SIZE, LETTER_TILES,
    PLAYER_CAPACITY, RACK_CAPACITY,
};
use rand::distributions::{Distribution, Uniform};
use rand::seq::SliceRandom;
use rand::Rng;
use std::cmp;
use std::collections::BTreeSet;

/// A [coordinate](Coordinate) anywhere on the board.
pub fn random_coordinate<R: Rng + ?Sized>(rng: &mut R) -> Coordinate {
    let possible_components = Uniform::from(0..BOARD_SIZE);
    let (row, col) = (possible_components.sample(rng), possible_components.sample(rng));
    Coordinate::new(row, col).unwrap_or_else(|_| unreachable!("{row} and {col} are on the board"))
}

/// A letter [tile](Tile) drawn uniformly from the letters of [LETTER_TILES]. Never a
/// [blank](Tile::Blank).
pub fn random_letter_tile<R: Rng + ?Sized>(rng: &mut R) -> Tile {
    LETTER_TILES
        .choose(rng)
        .map(|letter_tile| letter_tile.to_tile())
        .unwrap_or_else(|| unreachable!("LETTER_TILES is not empty"))
}

/// A random, small, non-zero number of letter [tiles](Tile) placed at consecutive
/// [coordinates](Coordinate) of a random row.
///
/// # Returns
///
/// Placements that form a single horizontal run of at most [RACK_CAPACITY] tiles.
pub fn random_placements<R: Rng + ?Sized>(rng: &mut R) -> Placements {
    let len = rng.gen_range(1..=RACK_CAPACITY);
    let row = rng.gen_range(0..BOARD_SIZE);
    let first_col = rng.gen_range(0..=BOARD_SIZE - len);

    (first_col..first_col + len)
        .filter_map(|col| Coordinate::new(row, col).ok())
        .map(|coordinate| {
            let tile = random_letter_tile(rng);
            let placed = PlacedTile::from_tile(tile)
                .unwrap_or_else(|_| unreachable!("{tile:?} is not a blank"));
            (coordinate, placed)
        })
        .collect()
}

/// A [rack](Rack) holding a random, small, non-zero number of letter [tiles](Tile).
/// Every tile is worth some points, so the rack's point sum is never `0`.
pub fn random_rack<R: Rng + ?Sized>(rng: &mut R) -> Rack {
    let rack_len = rng.gen_range(1..=RACK_CAPACITY);
    let mut rack = Rack::new();
    for _ in 0..rack_len {
        if rack.add(random_letter_tile(rng)).is_err() {
            unreachable!("{rack_len} tiles fit into a rack");
        }
    }

    rack
}

/// It pushes a random, small, non-zero number of players with empty racks and `0` points
/// into players.
///
/// # Returns
///
/// The number of additional players.
pub fn random_players<R: Rng + ?Sized>(rng: &mut R, players: &mut Players) -> usize {
    let players_len = rng.gen_range(cmp::min(2, PLAYER_CAPACITY)..=PLAYER_CAPACITY);
    let first = players.len();
    players.extend((first..first + players_len).map(|index| Player::new(format!("gracz {index}"))));

    players_len
}

/// If `players` is not `0`, sets the current player to a random number between `0` inclusive
/// and `players` exclusive. Otherwise, does nothing.
///
/// # Returns
///
/// The index of the player whose turn it is.
pub fn random_current_player<R: Rng + ?Sized>(
    rng: &mut R,
    current_player: &mut usize,
    players: usize,
) -> usize {
    if players > 0 {
        *current_player = rng.gen_range(0..players);
    }

    *current_player
}

/// A sorted word list holding exactly `words`.
pub fn dictionary<'a>(words: impl IntoIterator<Item = &'a str>) -> BTreeSet<String> {
    words.into_iter().map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MovePlacement;
    use itertools::Itertools;

    #[test]
    fn random_coordinate_on_board() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let coordinate = random_coordinate(&mut rng);
            assert!(coordinate.row() < BOARD_SIZE);
            assert!(coordinate.col() < BOARD_SIZE);
        }
    }

    #[test]
    fn random_letter_tile_never_blank() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            assert!(!random_letter_tile(&mut rng).is_blank());
        }
    }

    #[test]
    fn random_placements_consecutive() {
        let placements = random_placements(&mut rand::thread_rng());

        assert!((1..=RACK_CAPACITY).contains(&placements.len()));
        assert!(placements.keys().map(Coordinate::row).all_equal());
        for (left, right) in placements.keys().tuple_windows() {
            assert_eq!(left.col() + 1, right.col());
        }
        assert!(MovePlacement::new(placements).is_ok());
    }

    #[test]
    fn random_rack_scores() {
        let rack = random_rack(&mut rand::thread_rng());

        assert!(!rack.is_empty());
        assert!(rack.len() <= RACK_CAPACITY);
        assert!(rack.point_sum() > 0);
    }

    #[test]
    fn random_players_empty() {
        let mut players = Players::new();

        let players_len = random_players(&mut rand::thread_rng(), &mut players);

        assert_eq!(players_len, players.len());
        for player in &players {
            assert_eq!(0, player.score());
            assert!(player.rack().is_empty());
        }
    }

    #[test]
    fn random_current_player_zero_players() {
        let mut rng = rand::thread_rng();
        let mut current_player = 3;

        assert_eq!(3, random_current_player(&mut rng, &mut current_player, 0));
    }

    #[test]
    fn random_current_player_some_players() {
        let mut current_player = 0;

        let random_current_player = random_current_player(
            &mut rand::thread_rng(),
            &mut current_player,
            PLAYER_CAPACITY,
        );

        assert!((0..PLAYER_CAPACITY).contains(&random_current_player));
        assert_eq!(random_current_player, current_player);
    }

    #[test]
    fn dictionary_sorted() {
        let words = dictionary(["KOT", "AS", "KOT"]);

        assert_eq!(vec!["AS", "KOT"], words.iter().map(String::as_str).collect_vec());
    }
}
