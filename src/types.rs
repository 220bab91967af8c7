use crate::{Coordinate, PlacedTile, Player, Tile, Word, PLAYER_CAPACITY, RACK_CAPACITY};
use bimap::BiBTreeMap;
use smallvec::SmallVec;
use std::collections::BTreeMap;

/// A map of [coordinates](Coordinate) to the [placed tiles](PlacedTile) a single turn puts
/// on the board, sorted in reading order.
///
/// # See Also
///
/// * [MovePlacement](crate::MovePlacement)
/// * [BoardState::with_placed](crate::BoardState::with_placed)
pub type Placements = BTreeMap<Coordinate, PlacedTile>;
/// A bimap of indexes of [tiles](Tile) in a [rack](crate::Rack) to the
/// [coordinates](Coordinate) they are played at.
///
/// # See Also
///
/// * [AiMove](crate::AiMove)
/// * [Rack::take_plays](crate::Rack::take_plays)
pub type Plays = BiBTreeMap<usize, Coordinate>;
/// This is a bag of all the [tiles](Tile) that haven't been drawn yet. Tiles are drawn
/// from the end.
///
/// # See Also
///
/// * [TileBag](crate::TileBag)
pub type Bag = Vec<Tile>;
/// A vector of [tiles](Tile) for one player.
///
/// # See Also
///
/// * [RACK_CAPACITY]
/// * [Rack](crate::Rack)
pub type RackTiles = SmallVec<[Tile; RACK_CAPACITY]>;
/// A vector of [players](Player) in turn order.
///
/// # See Also
///
/// * [PLAYER_CAPACITY]
/// * [GameState](crate::GameState)
pub type Players = SmallVec<[Player; PLAYER_CAPACITY]>;
/// The [words](Word) formed by a single placement, main word first.
///
/// # See Also
///
/// * [build_words](crate::build_words)
/// * [ScoringResult](crate::ScoringResult)
pub type Words = Vec<Word>;
