use std::fmt;
use thiserror::Error;
use crate::core::card::{Card, Suit};
use crate::core::consts::TABLEAU_COLUMNS;
use crate::core::table::{Pile, Table};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    /// Draws one card, or turns the waste over when the stock is empty.
    StockToWaste,
    WasteToFoundation,
    WasteToTableau { to_col: usize },
    TableauToFoundation { from_col: usize },
    TableauToTableau { from_col: usize, to_col: usize, n_cards: usize },
    FoundationToTableau { from_suit: Suit, to_col: usize },
}

impl Move {
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Move::StockToWaste => "SW",
            Move::WasteToFoundation => "WF",
            Move::WasteToTableau { .. } => "WT",
            Move::TableauToFoundation { .. } => "TF",
            Move::TableauToTableau { .. } => "TT",
            Move::FoundationToTableau { .. } => "FT",
        }
    }

    /// True when applying `other` straight after `self` undoes it.
    pub fn is_opposite(&self, other: &Move) -> bool {
        match (*self, *other) {
            (Move::TableauToFoundation { from_col }, Move::FoundationToTableau { to_col, .. })
            | (Move::FoundationToTableau { to_col, .. }, Move::TableauToFoundation { from_col }) => {
                from_col == to_col
            }
            (
                Move::TableauToTableau { from_col: a_from, to_col: a_to, n_cards: a_n },
                Move::TableauToTableau { from_col: b_from, to_col: b_to, n_cards: b_n },
            ) => a_from == b_to && a_to == b_from && a_n == b_n,
            _ => false,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::StockToWaste => write!(f, "stock -> waste"),
            Move::WasteToFoundation => write!(f, "waste -> foundation"),
            Move::WasteToTableau { to_col } => write!(f, "waste -> column {}", to_col),
            Move::TableauToFoundation { from_col } => {
                write!(f, "column {} -> foundation", from_col)
            }
            Move::TableauToTableau { from_col, to_col, n_cards } => {
                write!(f, "{} from column {} -> column {}", n_cards, from_col, to_col)
            }
            Move::FoundationToTableau { from_suit, to_col } => {
                write!(f, "{} foundation -> column {}", from_suit.glyph(), to_col)
            }
        }
    }
}

/// Which optional moves the generator produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveRules {
    pub foundation_to_tableau: bool,
}

impl MoveRules {
    /// Foundation cards are one-way. Used for exhaustive graph generation.
    pub fn exhaustive() -> Self {
        MoveRules { foundation_to_tableau: false }
    }

    /// Full rule set for single-path play, where the opposite-move filter
    /// keeps cards from bouncing between a column and its foundation.
    pub fn linear_play() -> Self {
        MoveRules { foundation_to_tableau: true }
    }
}

impl Default for MoveRules {
    fn default() -> Self {
        MoveRules::exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("column {0} does not exist")]
    ColumnOutOfRange(usize),
    #[error("stock and waste are both empty")]
    NothingToDraw,
    #[error("{0:?} is empty")]
    EmptyPile(Pile),
    #[error("{card} cannot be placed on the {suit:?} foundation")]
    NotPlaceableOnFoundation { card: Card, suit: Suit },
    #[error("{card} cannot be placed on column {col}")]
    NotPlaceableOnTableau { card: Card, col: usize },
    #[error("cannot move cards from column {0} onto itself")]
    SameColumn(usize),
    #[error("column {col} has {available} visible cards, {requested} requested")]
    RunTooLong { col: usize, requested: usize, available: usize },
    #[error("the top {n_cards} cards of column {col} are not a movable run")]
    NotARun { col: usize, n_cards: usize },
}

fn check_column(col: usize) -> Result<(), MoveError> {
    if col < TABLEAU_COLUMNS {
        Ok(())
    } else {
        Err(MoveError::ColumnOutOfRange(col))
    }
}

fn top_of(table: &Table, pile: Pile) -> Result<Card, MoveError> {
    table.top(pile).ok_or(MoveError::EmptyPile(pile))
}

fn check_foundation(table: &Table, card: Card) -> Result<(), MoveError> {
    if table.can_place_on_foundation(card) {
        Ok(())
    } else {
        Err(MoveError::NotPlaceableOnFoundation { card, suit: card.suit() })
    }
}

fn check_tableau(table: &Table, col: usize, card: Card) -> Result<(), MoveError> {
    if table.can_place_on_tableau(col, card) {
        Ok(())
    } else {
        Err(MoveError::NotPlaceableOnTableau { card, col })
    }
}

/// Length of the descending alternating-colour run on top of `col`.
pub fn movable_run_len(table: &Table, col: usize) -> usize {
    let mut cards = table.iter_pile(Pile::Visible(col));
    let Some(mut upper) = cards.next() else {
        return 0;
    };
    let mut len = 1;
    for lower in cards {
        if !upper.stacks_on(lower) {
            break;
        }
        len += 1;
        upper = lower;
    }
    len
}

/// Checks every precondition of `mv` against `table` without changing it.
pub fn validate_move(table: &Table, mv: Move) -> Result<(), MoveError> {
    match mv {
        Move::StockToWaste => {
            if table.is_empty(Pile::Stock) && table.is_empty(Pile::Waste) {
                return Err(MoveError::NothingToDraw);
            }
        }
        Move::WasteToFoundation => {
            let card = top_of(table, Pile::Waste)?;
            check_foundation(table, card)?;
        }
        Move::WasteToTableau { to_col } => {
            check_column(to_col)?;
            let card = top_of(table, Pile::Waste)?;
            check_tableau(table, to_col, card)?;
        }
        Move::TableauToFoundation { from_col } => {
            check_column(from_col)?;
            let card = top_of(table, Pile::Visible(from_col))?;
            check_foundation(table, card)?;
        }
        Move::TableauToTableau { from_col, to_col, n_cards } => {
            check_column(from_col)?;
            check_column(to_col)?;
            if from_col == to_col {
                return Err(MoveError::SameColumn(from_col));
            }
            let available = table.n_cards_in_column_visible(from_col);
            if n_cards == 0 || n_cards > available {
                return Err(MoveError::RunTooLong { col: from_col, requested: n_cards, available });
            }
            if n_cards > movable_run_len(table, from_col) {
                return Err(MoveError::NotARun { col: from_col, n_cards });
            }
            if let Some(base) = table.visible_run_base(from_col, n_cards) {
                check_tableau(table, to_col, base)?;
            }
        }
        Move::FoundationToTableau { from_suit, to_col } => {
            check_column(to_col)?;
            let card = top_of(table, Pile::Foundation(from_suit))?;
            check_tableau(table, to_col, card)?;
        }
    }
    Ok(())
}

fn reveal_if_exhausted(table: &mut Table, col: usize) {
    if table.is_empty(Pile::Visible(col)) && !table.is_empty(Pile::Hidden(col)) {
        table.reveal_hidden(col);
    }
}

/// Applies `mv` in place. A move whose preconditions do not hold is a bug in
/// the caller and panics; use [`try_apply_move`] for untrusted moves.
pub fn apply_move(table: &mut Table, mv: Move) -> &mut Table {
    if let Err(err) = validate_move(table, mv) {
        panic!("illegal move {:?}: {}", mv, err);
    }
    apply_unchecked(table, mv)
}

/// Checked entry point for moves coming from outside the generator.
pub fn try_apply_move(table: &mut Table, mv: Move) -> Result<&mut Table, MoveError> {
    validate_move(table, mv)?;
    Ok(apply_unchecked(table, mv))
}

fn apply_unchecked(table: &mut Table, mv: Move) -> &mut Table {
    match mv {
        Move::StockToWaste => {
            if table.is_empty(Pile::Stock) {
                table.recycle_waste_to_stock();
            } else {
                table.draw_stock_to_waste();
            }
        }
        Move::WasteToFoundation => {
            let card = table.pop(Pile::Waste);
            table.push(Pile::Foundation(card.suit()), card);
        }
        Move::WasteToTableau { to_col } => {
            let card = table.pop(Pile::Waste);
            table.push_visible(to_col, card);
        }
        Move::TableauToFoundation { from_col } => {
            let card = table.pop(Pile::Visible(from_col));
            table.push(Pile::Foundation(card.suit()), card);
            reveal_if_exhausted(table, from_col);
        }
        Move::TableauToTableau { from_col, to_col, n_cards } => {
            table.move_visible_run(from_col, to_col, n_cards);
            reveal_if_exhausted(table, from_col);
        }
        Move::FoundationToTableau { from_suit, to_col } => {
            let card = table.pop(Pile::Foundation(from_suit));
            table.push_visible(to_col, card);
        }
    }
    table
}

impl Table {
    pub fn apply(&mut self, mv: Move) -> &mut Self {
        apply_move(self, mv)
    }

    /// Copy of this table with `mv` applied.
    pub fn with_move(&self, mv: Move) -> Table {
        let mut next = *self;
        apply_move(&mut next, mv);
        next
    }
}

/// Legal moves under the exhaustive rule set, in generation order.
pub fn generate_moves(table: &Table, prev_move: Option<Move>) -> Vec<Move> {
    generate_moves_with(table, prev_move, &MoveRules::exhaustive())
}

pub fn generate_moves_with(table: &Table, prev_move: Option<Move>, rules: &MoveRules) -> Vec<Move> {
    let mut moves = Vec::new();

    if !table.is_empty(Pile::Stock) || !table.is_empty(Pile::Waste) {
        moves.push(Move::StockToWaste);
    }

    if let Some(waste) = table.waste_top() {
        if table.can_place_on_foundation(waste) {
            moves.push(Move::WasteToFoundation);
        }
        for to_col in 0..TABLEAU_COLUMNS {
            if table.can_place_on_tableau(to_col, waste) {
                moves.push(Move::WasteToTableau { to_col });
            }
        }
    }

    for from_col in 0..TABLEAU_COLUMNS {
        if table.visible_top(from_col).is_some_and(|top| table.can_place_on_foundation(top)) {
            moves.push(Move::TableauToFoundation { from_col });
        }
    }

    for from_col in 0..TABLEAU_COLUMNS {
        push_tableau_to_tableau(table, from_col, &mut moves);
    }

    if rules.foundation_to_tableau {
        for from_suit in Suit::ALL {
            let Some(card) = table.foundation_top(from_suit) else {
                continue;
            };
            for to_col in 0..TABLEAU_COLUMNS {
                if table.can_place_on_tableau(to_col, card) {
                    moves.push(Move::FoundationToTableau { from_suit, to_col });
                }
            }
        }
    }

    if let Some(prev) = prev_move {
        moves.retain(|mv| !prev.is_opposite(mv));
    }
    moves
}

fn push_tableau_to_tableau(table: &Table, from_col: usize, moves: &mut Vec<Move>) {
    let whole_column = table.is_empty(Pile::Hidden(from_col));
    let visible = table.n_cards_in_column_visible(from_col);
    let run_len = movable_run_len(table, from_col);
    for (n, base) in table.iter_pile(Pile::Visible(from_col)).take(run_len).enumerate() {
        let n_cards = n + 1;
        if base.is_ace() {
            continue;
        }
        // a king that already owns its column gains nothing from an empty one
        let pointless_king = base.is_king() && whole_column && n_cards == visible;
        for to_col in 0..TABLEAU_COLUMNS {
            if to_col == from_col || !table.can_place_on_tableau(to_col, base) {
                continue;
            }
            if pointless_king && table.is_column_empty(to_col) {
                continue;
            }
            moves.push(Move::TableauToTableau { from_col, to_col, n_cards });
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    #[test]
    fn opposites() {
        let tf = Move::TableauToFoundation { from_col: 2 };
        assert!(tf.is_opposite(&Move::FoundationToTableau { from_suit: Suit::Hearts, to_col: 2 }));
        assert!(!tf.is_opposite(&Move::FoundationToTableau { from_suit: Suit::Hearts, to_col: 3 }));

        let tt = Move::TableauToTableau { from_col: 1, to_col: 4, n_cards: 2 };
        assert!(tt.is_opposite(&Move::TableauToTableau { from_col: 4, to_col: 1, n_cards: 2 }));
        assert!(!tt.is_opposite(&Move::TableauToTableau { from_col: 4, to_col: 1, n_cards: 1 }));
        assert!(!tt.is_opposite(&tt));
        assert!(!Move::StockToWaste.is_opposite(&Move::StockToWaste));
    }

    #[test]
    fn run_length_stops_at_first_break() {
        let mut table = Table::new();
        for c in ["3♠", "10♠", "9♥", "8♣"] {
            table.push_visible(0, card(c));
        }
        assert_eq!(movable_run_len(&table, 0), 3);
        assert_eq!(movable_run_len(&table, 1), 0);
    }

    #[test]
    fn checked_apply_reports_errors() {
        let mut table = Table::new();
        assert_eq!(try_apply_move(&mut table, Move::StockToWaste).err(), Some(MoveError::NothingToDraw));
        assert_eq!(
            try_apply_move(&mut table, Move::WasteToTableau { to_col: 9 }).err(),
            Some(MoveError::ColumnOutOfRange(9))
        );
        table.push_visible(0, card("5♥"));
        assert_eq!(
            try_apply_move(&mut table, Move::TableauToFoundation { from_col: 0 }).err(),
            Some(MoveError::NotPlaceableOnFoundation { card: card("5♥"), suit: Suit::Hearts })
        );
        assert_eq!(
            try_apply_move(&mut table, Move::TableauToTableau { from_col: 0, to_col: 1, n_cards: 2 }).err(),
            Some(MoveError::RunTooLong { col: 0, requested: 2, available: 1 })
        );
        // failed moves leave the table alone
        assert_eq!(table.visible_top(0), Some(card("5♥")));
    }

    #[test]
    fn run_moves_are_validated() {
        let mut table = Table::new();
        for c in ["3♠", "10♠", "9♥"] {
            table.push_visible(0, card(c));
        }
        table.push_visible(1, card("J♦"));
        assert_eq!(
            validate_move(&table, Move::TableauToTableau { from_col: 0, to_col: 0, n_cards: 1 }),
            Err(MoveError::SameColumn(0))
        );
        assert_eq!(
            try_apply_move(&mut table, Move::TableauToTableau { from_col: 0, to_col: 1, n_cards: 3 }).err(),
            Some(MoveError::NotARun { col: 0, n_cards: 3 })
        );
        assert_eq!(
            validate_move(&table, Move::TableauToTableau { from_col: 0, to_col: 1, n_cards: 2 }),
            Ok(())
        );
        assert_eq!(table.n_cards_in_column_visible(0), 3);
    }

    #[test]
    fn foundation_to_tableau_is_validated() {
        let mut table = Table::new();
        assert_eq!(
            validate_move(&table, Move::FoundationToTableau { from_suit: Suit::Hearts, to_col: 0 }),
            Err(MoveError::EmptyPile(Pile::Foundation(Suit::Hearts)))
        );

        table.push(Pile::Foundation(Suit::Spades), card("A♠"));
        table.push(Pile::Foundation(Suit::Spades), card("2♠"));
        table.push_visible(0, card("3♣"));
        table.push_visible(1, card("3♥"));
        assert_eq!(
            try_apply_move(&mut table, Move::FoundationToTableau { from_suit: Suit::Spades, to_col: 0 }).err(),
            Some(MoveError::NotPlaceableOnTableau { card: card("2♠"), col: 0 })
        );
        assert_eq!(
            try_apply_move(&mut table, Move::FoundationToTableau { from_suit: Suit::Spades, to_col: 7 }).err(),
            Some(MoveError::ColumnOutOfRange(7))
        );
        try_apply_move(&mut table, Move::FoundationToTableau { from_suit: Suit::Spades, to_col: 1 })
            .expect("2♠ fits on 3♥");
        assert_eq!(table.visible_top(1), Some(card("2♠")));
        assert_eq!(table.foundation_top(Suit::Spades), Some(card("A♠")));
    }

    #[test]
    #[should_panic(expected = "illegal move")]
    fn unchecked_apply_panics_on_contract_violation() {
        let mut table = Table::new();
        apply_move(&mut table, Move::WasteToFoundation);
    }

    #[test]
    fn apply_chains() {
        let mut table = Table::new();
        table.push(Pile::Stock, card("A♣"));
        table.push(Pile::Stock, card("K♦"));
        table
            .apply(Move::StockToWaste)
            .apply(Move::WasteToTableau { to_col: 3 })
            .apply(Move::StockToWaste)
            .apply(Move::WasteToFoundation);
        assert_eq!(table.visible_top(3), Some(card("K♦")));
        assert_eq!(table.foundation_top(Suit::Clubs), Some(card("A♣")));
        assert!(table.is_empty(Pile::Stock));
        assert!(table.is_empty(Pile::Waste));
    }
}
