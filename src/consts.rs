use konst::primitive::parse_usize;
use konst::{option, result};

/// The number of rows and the number of columns on the square board. `15` squares per side.
///
/// # See Also
///
/// * [Coordinate](crate::Coordinate)
/// * [Board](crate::Board)
pub const BOARD_SIZE: usize = 15;
/// The maximum number of [tiles](crate::Tile) a [rack](crate::Rack) holds. `7` tiles.
///
/// Playing exactly this many [tiles](crate::Tile) in one turn earns the
/// [bingo bonus](BINGO_BONUS).
///
/// # See Also
///
/// * [Rack](crate::Rack)
/// * [score](crate::score)
pub const RACK_CAPACITY: usize = 7;
/// The extra points earned by a placement that uses exactly [RACK_CAPACITY] tiles.
/// `50` additional points.
///
/// # See Also
///
/// * [score](crate::score)
pub const BINGO_BONUS: u32 = 50;
/// The number of consecutive passes (including exchanges and rejected moves) after which
/// the game ends. `4` passes.
///
/// # See Also
///
/// * [end_condition](crate::end_condition)
pub const MAX_CONSECUTIVE_PASSES: usize = 4;
/// The minimum number of [tiles](crate::Tile) the bag must hold before any
/// [exchange](crate::TileBag::exchange) is allowed. `7` tiles.
pub const MIN_EXCHANGE_BAG_LEN: usize = 7;
/// All small, dynamically allocated structs which store player data will be stored on the stack
/// until the number of players becomes greater than `PLAYER_CAPACITY`. When there are more than
/// `PLAYER_CAPACITY` players, player data will be heap allocated. If the environment variable
/// named `PLAYER_CAPACITY` is present at compile time and is able to be parsed into a `usize`,
/// set to the value of the environment variable. Otherwise, it is set to `4`.
///
/// # See Also
///
/// * [Players](crate::Players)
/// * [GameState](crate::GameState)
pub const PLAYER_CAPACITY: usize = option::unwrap_or!(
    option::and_then!(option_env!("PLAYER_CAPACITY"), |str| result::ok!(
        parse_usize(str)
    )),
    4
);
const _: () = assert!(PLAYER_CAPACITY > 0);
/// The number of valid candidates the [move search](crate::AiMoveGenerator) evaluates before
/// it stops and returns the best move found so far. If the environment variable named
/// `DEFAULT_MAX_CANDIDATES` is present at compile time and is able to be parsed into a `usize`,
/// set to the value of the environment variable. Otherwise, it is set to `1500`.
///
/// Lowering the budget is the only way to bound the time spent by a search.
///
/// # See Also
///
/// * [SearchConfig](crate::SearchConfig)
/// * [AiMoveGenerator::best_move](crate::AiMoveGenerator::best_move)
pub const DEFAULT_MAX_CANDIDATES: usize = option::unwrap_or!(
    option::and_then!(option_env!("DEFAULT_MAX_CANDIDATES"), |str| result::ok!(
        parse_usize(str)
    )),
    1500
);
