use crate::{Player, Rack, TileBag, MAX_CONSECUTIVE_PASSES};
use derive_more::Display;
use std::collections::BTreeSet;
use tracing::{debug, instrument};

/// The reason a match ended.
///
/// # See Also
///
/// * [end_condition]
/// * [apply_final_adjustments]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum EndCondition {
    /// The bag is empty and the mover played their last [tile](crate::Tile).
    WentOut,
    /// [MAX_CONSECUTIVE_PASSES] turns in a row placed nothing.
    Passes,
}

/// Attempting to credit a player who is not in the list of players.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Display)]
#[display("player {index} is out of bounds for {len} players")]
pub struct PlayerOutOfBounds {
    /// The rejected index.
    pub index: usize,
    /// The number of players.
    pub len: usize,
}

impl std::error::Error for PlayerOutOfBounds {}

/// # Arguments
///
/// * `bag`: The undrawn [tiles](crate::Tile).
/// * `mover_rack`: The rack of the player who just moved, after refilling.
/// * `consecutive_passes`: The number of turns in a row, including the last one, that
/// placed nothing. Exchanges and rejected moves count as passes.
///
/// # Returns
///
/// Why the match has ended, or [None] when it goes on.
pub fn end_condition(
    bag: &TileBag,
    mover_rack: &Rack,
    consecutive_passes: usize,
) -> Option<EndCondition> {
    if bag.is_empty() && mover_rack.is_empty() {
        Some(EndCondition::WentOut)
    } else if consecutive_passes >= MAX_CONSECUTIVE_PASSES {
        Some(EndCondition::Passes)
    } else {
        None
    }
}

/// Deducts the point sum of every player's rack from their score. When `went_out` names a
/// player, that player is credited with the sum of every deduction, so the total of all
/// scores is unchanged.
///
/// # Errors
///
/// * [PlayerOutOfBounds] When `went_out` is not an index of `players`. No score is changed.
#[instrument(skip(players), fields(players = players.len()))]
pub fn apply_final_adjustments(
    players: &mut [Player],
    went_out: Option<usize>,
) -> Result<(), PlayerOutOfBounds> {
    if let Some(index) = went_out.filter(|&index| index >= players.len()) {
        return Err(PlayerOutOfBounds {
            index,
            len: players.len(),
        });
    }

    let mut deducted = 0;
    for player in players.iter_mut() {
        let penalty = i64::from(player.rack().point_sum());
        player.add_score(-penalty);
        deducted += penalty;
    }

    if let Some(player) = went_out.and_then(|index| players.get_mut(index)) {
        player.add_score(deducted);
    }
    debug!(deducted, "final adjustments applied");
    Ok(())
}

/// # Returns
///
/// An ordered set of indexes of every player holding the highest score. Empty only when
/// `players` is empty.
pub fn leaders(players: &[Player]) -> BTreeSet<usize> {
    let Some(best) = players.iter().map(Player::score).max() else {
        return BTreeSet::new();
    };
    players
        .iter()
        .enumerate()
        .filter(|(_, player)| player.score() == best)
        .map(|(index, _)| index)
        .collect()
}
