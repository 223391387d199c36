use std::fmt;
use crate::core::{Card, Pile, Suit, Table, HIDDEN_INDEX, NULL_INDEX, TABLEAU_COLUMNS};

const NO_CARD: &str = " ";
const HIDDEN_CARD: &str = "?";
const EMPTY_CELL: &str = "     ";

fn card_or_blank(card: Option<Card>) -> String {
    card.map_or_else(|| NO_CARD.to_string(), |c| c.to_string())
}

/// `Stock: ?  Waste: 6♠ Foundations: 3♦  9♥      10♣ ` followed by a newline.
pub fn render_header_to_string(table: &Table) -> String {
    let stock = if table.is_empty(Pile::Stock) { NO_CARD } else { HIDDEN_CARD };
    let mut result = format!(
        "Stock: {:<3}Waste: {:<3}Foundations: ",
        stock,
        card_or_blank(table.waste_top())
    );
    for suit in Suit::ALL {
        result.push_str(&format!("{:<4}", card_or_blank(table.foundation_top(suit))));
    }
    result.push('\n');
    result
}

/// Rows of slots from the top of the tableau down. A slot is a card index,
/// `HIDDEN_INDEX` for a face-down card, or `NULL_INDEX` below a short column.
fn tableau_grid(table: &Table) -> Vec<[u8; TABLEAU_COLUMNS]> {
    let height = table.max_cards_in_tableau_column();
    let mut grid = vec![[NULL_INDEX; TABLEAU_COLUMNS]; height];
    for col in 0..TABLEAU_COLUMNS {
        let hidden = table.n_cards_in_column_hidden(col);
        let visible = table.n_cards_in_column_visible(col);
        for row in grid.iter_mut().take(hidden) {
            row[col] = HIDDEN_INDEX;
        }
        // piles iterate from the top down, rows are drawn from the bottom card up
        for (i, card) in table.iter_pile(Pile::Visible(col)).enumerate() {
            grid[hidden + visible - i - 1][col] = card.index();
        }
    }
    grid
}

fn render_slot(slot: u8) -> String {
    match slot {
        NULL_INDEX => EMPTY_CELL.to_string(),
        HIDDEN_INDEX => format!("{:^5}", HIDDEN_CARD),
        index => format!("{:^5}", Card::from_index(index)),
    }
}

pub fn render_tableau_to_string(table: &Table) -> String {
    let mut result = String::new();
    for row in tableau_grid(table) {
        for slot in row {
            result.push_str(&render_slot(slot));
        }
        result.push('\n');
    }
    result
}

pub fn render_table_to_string(table: &Table) -> String {
    format!("{}{}", render_header_to_string(table), render_tableau_to_string(table))
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_table_to_string(self))
    }
}
