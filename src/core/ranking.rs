use crate::core::card::Card;
use crate::core::consts::*;
use crate::core::moves::Move;
use crate::core::table::{Pile, Table};

/// Orders candidate moves for depth-first generation. Higher scores are tried first.
pub trait MoveRanker {
    fn score(&self, table: &Table, mv: &Move) -> i32;
}

/// Prefers foundation progress, then uncovering hidden cards, then opening columns.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultRanker;

/// Scores every move the same, leaving generation order to decide.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstMoveRanker;

fn foundation_rank_bonus(card: Card) -> i32 {
    if card.rank() <= HIGH_FOUNDATION_MAX_RANK {
        HIGH_FOUNDATION_BONUS
    } else if card.rank() <= MIDDLE_FOUNDATION_MAX_RANK {
        MIDDLE_FOUNDATION_BONUS
    } else {
        LOW_FOUNDATION_BONUS
    }
}

/// Bonus for taking the last `n_cards` visible cards off `col`.
fn emptied_column_bonus(table: &Table, col: usize, n_cards: usize, base: Card) -> i32 {
    if n_cards != table.n_cards_in_column_visible(col) {
        0
    } else if !table.is_empty(Pile::Hidden(col)) {
        REVEAL_BONUS
    } else if !base.is_king() {
        OPEN_COLUMN_BONUS
    } else {
        0
    }
}

impl MoveRanker for DefaultRanker {
    fn score(&self, table: &Table, mv: &Move) -> i32 {
        match *mv {
            Move::StockToWaste => {
                // turning over a waste of one card just shuffles nothing
                if table.is_empty(Pile::Stock) && table.pile_len(Pile::Waste) <= 1 {
                    0
                } else {
                    DRAW_VALUE
                }
            }
            Move::WasteToFoundation => table.waste_top().map_or(0, foundation_rank_bonus),
            Move::WasteToTableau { .. } => WASTE_TO_TABLEAU_VALUE,
            Move::TableauToFoundation { from_col } => match table.visible_top(from_col) {
                Some(top) => foundation_rank_bonus(top) + emptied_column_bonus(table, from_col, 1, top),
                None => 0,
            },
            Move::TableauToTableau { from_col, n_cards, .. } => {
                match table.visible_run_base(from_col, n_cards) {
                    Some(base) => emptied_column_bonus(table, from_col, n_cards, base),
                    None => 0,
                }
            }
            Move::FoundationToTableau { .. } => 0,
        }
    }
}

impl MoveRanker for FirstMoveRanker {
    fn score(&self, _table: &Table, _mv: &Move) -> i32 {
        0
    }
}

/// Moves sorted by descending score; equal scores keep their generation order.
pub fn rank_moves<R: MoveRanker + ?Sized>(ranker: &R, table: &Table, moves: &[Move]) -> Vec<Move> {
    let mut ranked: Vec<(i32, Move)> = moves.iter().map(|mv| (ranker.score(table, mv), *mv)).collect();
    ranked.sort_by(|a, b| b.0.cmp(&a.0));
    ranked.into_iter().map(|(_, mv)| mv).collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::card::Suit;

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    #[test]
    fn low_foundation_cards_score_highest() {
        let mut table = Table::new();
        table.push_hidden(0, card("9♠"));
        table.push_visible(0, card("A♥"));
        table.push_visible(1, card("8♣"));
        table.push_visible(1, card("7♦"));
        for rank in 0..6 {
            table.push(Pile::Foundation(Suit::Diamonds), Card::new(Suit::Diamonds, rank));
        }
        let ranker = DefaultRanker;
        assert_eq!(
            ranker.score(&table, &Move::TableauToFoundation { from_col: 0 }),
            HIGH_FOUNDATION_BONUS + REVEAL_BONUS
        );
        assert_eq!(ranker.score(&table, &Move::TableauToFoundation { from_col: 1 }), LOW_FOUNDATION_BONUS);
    }

    #[test]
    fn emptying_columns() {
        let mut table = Table::new();
        table.push_visible(0, card("Q♥"));
        table.push_visible(1, card("K♠"));
        table.push_hidden(2, card("3♦"));
        table.push_visible(2, card("J♠"));
        let ranker = DefaultRanker;
        let open = Move::TableauToTableau { from_col: 0, to_col: 1, n_cards: 1 };
        let reveal = Move::TableauToTableau { from_col: 2, to_col: 0, n_cards: 1 };
        assert_eq!(ranker.score(&table, &open), OPEN_COLUMN_BONUS);
        assert_eq!(ranker.score(&table, &reveal), REVEAL_BONUS);

        let ranked = rank_moves(&ranker, &table, &[Move::StockToWaste, open, reveal]);
        assert_eq!(ranked, vec![reveal, open, Move::StockToWaste]);
    }

    #[test]
    fn ties_keep_generation_order() {
        let table = Table::new();
        let moves = [Move::WasteToTableau { to_col: 4 }, Move::WasteToTableau { to_col: 1 }];
        assert_eq!(rank_moves(&FirstMoveRanker, &table, &moves), moves.to_vec());
    }
}
