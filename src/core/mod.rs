mod card;
mod consts;
mod deck;
mod moves;
mod ranking;
mod table;

pub use card::{card_to_index, index_to_card, suit_colours_equal, Card, ParseCardError, Suit};
pub use consts::*;
pub use deck::{deck_to_string, load_deck, ordered_deck, parse_deck, random_deck, Deck, DeckError};
pub use moves::{
    apply_move, generate_moves, generate_moves_with, movable_run_len, try_apply_move, validate_move, Move,
    MoveError, MoveRules,
};
pub use ranking::{rank_moves, DefaultRanker, FirstMoveRanker, MoveRanker};
pub use table::{PartitionError, Pile, PileIter, Table};
