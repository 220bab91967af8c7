//! Concrete structs to represent and protect the state of a crossword tile game on a
//! `15`x`15` board, with the rules that judge a move and an opponent that searches for one.
//!
//! ## Summary
//!
//! Players draw letter [tiles](Tile) from a [bag](TileBag) into their [racks](Rack) and take
//! turns placing them on the board to spell words. A move is
//! [validated](validate_placement) geometrically, every word it forms is
//! [collected](build_words), and the words are [scored](score) against the
//! [premium squares](Board). Whether the words exist is not judged when the move is made:
//! the move is applied as a [pending move](PendingMove) that the opponents may challenge
//! against a [dictionary](WordDictionary) before it is either committed or rolled back.
//! The match ends when someone empties their rack with the bag exhausted or too many turns
//! in a row place nothing. The player with the most points wins.
//!
//! ## How is a move judged?
//!
//! * [MovePlacement]: The [tiles](PlacedTile) of one move keyed by
//! [coordinate](Coordinate). Never empty.
//! * [validate_placement]: The tiles lie in one line without gaps, connect to the tiles
//! already on the board, and the opening move covers [the center](CENTER).
//! * [build_words]: The word along the main direction plus every perpendicular word
//! through a new tile.
//! * [score]: Letter premiums and word premiums apply only under new tiles. Placing all
//! [RACK_CAPACITY] tiles earns [BINGO_BONUS].
//!
//! ## How is a move applied?
//!
//! [GameState] owns the board, the players, and the bag. A move goes through a challenge
//! protocol:
//!
//! * [GameState::apply_pending_move]: Keeps the board before the move and the board after
//! it side by side.
//! * [GameState::resolve_challenge]: Either keeps the board after the move and credits its
//! points to the mover, or restores the board before it.
//! * [GameState::commit_move]: Makes a pending move permanent without a challenge.
//! * [GameState::advance_turn]: Passes the turn to the next player.
//!
//! ## How does the computer move?
//!
//! [AiMoveGenerator] tries every contiguous stretch of every row and column that touches
//! the tiles already on the board, fills it from the rack, and keeps the highest scoring
//! placement whose words are all in the [dictionary](WordDictionary). The search gives up
//! after a [budget](SearchConfig) of candidates.
//!
//! ## How is the game ended?
//!
//! [end_condition] tells why a match ended and [apply_final_adjustments] deducts every
//! rack left over. [leaders] names the winners.
//!
//! ## How are game states tested when properties are private?
//!
//! The `test` build configuration adds methods to get mutable references to the private
//! properties of [GameState] and helper functions that fill them with random data.

// Document!
#![forbid(
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::bare_urls
)]
// Don't leave a build in a half finished state!
#![deny(
    future_incompatible,
    nonstandard_style,
    rust_2018_compatibility,
    rust_2018_idioms,
    rust_2021_compatibility,
    unreachable_pub,
    missing_debug_implementations,
    unsafe_code
)]

pub use bag::*;
pub use board_state::*;
pub use consts::*;
pub use coordinate::*;
pub use endgame::*;
pub use game_state::*;
pub use placement::*;
pub use player::*;
pub use premium::*;
pub use rack::*;
#[cfg(test)]
pub use random::*;
pub use scorer::*;
pub use search::*;
pub use tile::*;
pub use types::*;
pub use validator::*;
pub use word::*;

mod bag;
mod board_state;
mod consts;
mod coordinate;
mod endgame;
mod game_state;
mod placement;
mod player;
mod premium;
mod rack;
#[cfg(test)]
mod random;
mod scorer;
mod search;
mod tile;
mod types;
mod validator;
mod word;
