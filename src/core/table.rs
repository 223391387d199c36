use thiserror::Error;
use crate::core::card::{Card, Suit};
use crate::core::consts::{NULL_INDEX, NUM_CARDS, NUM_SUITS, TABLEAU_COLUMNS, TABLEAU_DEAL_SIZE};
use crate::core::deck::Deck;

/// One of the 20 chains a card can live on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pile {
    Stock,
    Waste,
    Foundation(Suit),
    Visible(usize),
    Hidden(usize),
}

impl Pile {
    pub fn all() -> impl Iterator<Item = Pile> {
        [Pile::Stock, Pile::Waste]
            .into_iter()
            .chain(Suit::ALL.into_iter().map(Pile::Foundation))
            .chain((0..TABLEAU_COLUMNS).map(Pile::Visible))
            .chain((0..TABLEAU_COLUMNS).map(Pile::Hidden))
    }
}

/// Complete game state. Every pile is a singly linked list threaded through
/// `successor`: a pile stores the index of its top card, and `successor[c]`
/// is the card directly beneath `c`, or `NULL_INDEX` at the bottom.
///
/// Cards that are not on any pile keep a `NULL_INDEX` successor, so the
/// derived `Eq` and `Hash` compare positions only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Table {
    stock: u8,
    waste: u8,
    foundations: [u8; NUM_SUITS],
    visible: [u8; TABLEAU_COLUMNS],
    hidden: [u8; TABLEAU_COLUMNS],
    successor: [u8; NUM_CARDS],
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PartitionError {
    #[error("card {card} reached twice (second time on {pile:?})")]
    DuplicateCard { card: Card, pile: Pile },
    #[error("card {0} is on no pile but still has a successor")]
    StraySuccessor(Card),
    #[error("column {0} has hidden cards but no visible card")]
    HiddenUnderEmptyColumn(usize),
    #[error("foundation {suit:?} holds {card} out of sequence")]
    FoundationOutOfSequence { suit: Suit, card: Card },
    #[error("visible run in column {0} is not a descending alternating run")]
    BrokenRun(usize),
}

fn to_option(index: u8) -> Option<Card> {
    if index == NULL_INDEX {
        None
    } else {
        Some(Card::from_index(index))
    }
}

fn assert_column(col: usize) {
    assert!(col < TABLEAU_COLUMNS, "column {} out of range", col);
}

impl Default for Table {
    fn default() -> Self {
        Table::new()
    }
}

impl Table {
    pub fn new() -> Table {
        Table {
            stock: NULL_INDEX,
            waste: NULL_INDEX,
            foundations: [NULL_INDEX; NUM_SUITS],
            visible: [NULL_INDEX; TABLEAU_COLUMNS],
            hidden: [NULL_INDEX; TABLEAU_COLUMNS],
            successor: [NULL_INDEX; NUM_CARDS],
        }
    }

    /// Standard Klondike deal: column `i` gets `i` face-down cards and then one
    /// face-up card, taken from the front of the deck. The remaining cards form
    /// the stock with `deck[28]` on top.
    pub fn from_deck(deck: &Deck) -> Table {
        let mut table = Table::new();
        let mut dealt = 0;
        for col in 0..TABLEAU_COLUMNS {
            for _ in 0..col {
                table.push_hidden(col, deck[dealt]);
                dealt += 1;
            }
            table.push_visible(col, deck[dealt]);
            dealt += 1;
        }
        for &card in deck[TABLEAU_DEAL_SIZE..].iter().rev() {
            table.push(Pile::Stock, card);
        }
        table
    }

    fn head_index(&self, pile: Pile) -> u8 {
        match pile {
            Pile::Stock => self.stock,
            Pile::Waste => self.waste,
            Pile::Foundation(suit) => self.foundations[suit.index()],
            Pile::Visible(col) => {
                assert_column(col);
                self.visible[col]
            }
            Pile::Hidden(col) => {
                assert_column(col);
                self.hidden[col]
            }
        }
    }

    fn set_head(&mut self, pile: Pile, index: u8) {
        match pile {
            Pile::Stock => self.stock = index,
            Pile::Waste => self.waste = index,
            Pile::Foundation(suit) => self.foundations[suit.index()] = index,
            Pile::Visible(col) => {
                assert_column(col);
                self.visible[col] = index
            }
            Pile::Hidden(col) => {
                assert_column(col);
                self.hidden[col] = index
            }
        }
    }

    pub fn top(&self, pile: Pile) -> Option<Card> {
        to_option(self.head_index(pile))
    }

    pub fn stock_top(&self) -> Option<Card> {
        self.top(Pile::Stock)
    }

    pub fn waste_top(&self) -> Option<Card> {
        self.top(Pile::Waste)
    }

    pub fn foundation_top(&self, suit: Suit) -> Option<Card> {
        self.top(Pile::Foundation(suit))
    }

    pub fn visible_top(&self, col: usize) -> Option<Card> {
        self.top(Pile::Visible(col))
    }

    pub fn hidden_top(&self, col: usize) -> Option<Card> {
        self.top(Pile::Hidden(col))
    }

    /// The card directly beneath `card` on whichever pile holds it.
    pub fn successor(&self, card: Card) -> Option<Card> {
        to_option(self.successor[card.index() as usize])
    }

    pub fn is_empty(&self, pile: Pile) -> bool {
        self.head_index(pile) == NULL_INDEX
    }

    /// Cards of `pile` from the top down.
    pub fn iter_pile(&self, pile: Pile) -> PileIter<'_> {
        PileIter {
            table: self,
            next: self.head_index(pile),
        }
    }

    pub fn pile_len(&self, pile: Pile) -> usize {
        self.iter_pile(pile).count()
    }

    pub fn n_cards_in_column_visible(&self, col: usize) -> usize {
        self.pile_len(Pile::Visible(col))
    }

    pub fn n_cards_in_column_hidden(&self, col: usize) -> usize {
        self.pile_len(Pile::Hidden(col))
    }

    pub fn n_cards_in_column_total(&self, col: usize) -> usize {
        self.n_cards_in_column_visible(col) + self.n_cards_in_column_hidden(col)
    }

    pub fn max_cards_in_tableau_column(&self) -> usize {
        (0..TABLEAU_COLUMNS)
            .map(|col| self.n_cards_in_column_total(col))
            .max()
            .unwrap_or(0)
    }

    pub fn is_column_empty(&self, col: usize) -> bool {
        self.is_empty(Pile::Visible(col)) && self.is_empty(Pile::Hidden(col))
    }

    fn contains(&self, card: Card) -> bool {
        let index = card.index();
        Pile::all().any(|pile| self.head_index(pile) == index)
            || self.successor.iter().any(|&s| s == index)
    }

    pub fn can_place_on_foundation(&self, card: Card) -> bool {
        match self.foundation_top(card.suit()) {
            None => card.is_ace(),
            Some(top) => top.rank() + 1 == card.rank(),
        }
    }

    pub fn can_place_on_tableau(&self, to_col: usize, card: Card) -> bool {
        assert_column(to_col);
        match self.visible_top(to_col) {
            None => self.is_empty(Pile::Hidden(to_col)) && card.is_king(),
            Some(top) => card.stacks_on(top),
        }
    }

    /// Stock, waste and tableau are empty and every foundation is topped by a King.
    pub fn is_won(&self) -> bool {
        self.is_empty(Pile::Stock)
            && self.is_empty(Pile::Waste)
            && (0..TABLEAU_COLUMNS).all(|col| self.is_column_empty(col))
            && Suit::ALL
                .iter()
                .all(|&suit| self.foundation_top(suit).is_some_and(|top| top.is_king()))
    }

    /// Places `card` on top of `pile`. The card must not already be on the table.
    pub fn push(&mut self, pile: Pile, card: Card) {
        debug_assert!(!self.contains(card), "card {} is already on the table", card);
        let head = self.head_index(pile);
        self.successor[card.index() as usize] = head;
        self.set_head(pile, card.index());
    }

    /// Removes and returns the top card of `pile`, which must not be empty.
    pub fn pop(&mut self, pile: Pile) -> Card {
        let head = self.head_index(pile);
        assert_ne!(head, NULL_INDEX, "cannot pop from empty {:?}", pile);
        let below = self.successor[head as usize];
        self.successor[head as usize] = NULL_INDEX;
        self.set_head(pile, below);
        Card::from_index(head)
    }

    pub fn push_visible(&mut self, col: usize, card: Card) {
        self.push(Pile::Visible(col), card);
    }

    pub fn push_hidden(&mut self, col: usize, card: Card) {
        self.push(Pile::Hidden(col), card);
    }

    /// Turns the top hidden card of `col` face up. Only valid once the visible
    /// run of the column has been exhausted.
    pub fn reveal_hidden(&mut self, col: usize) {
        assert!(
            self.is_empty(Pile::Visible(col)),
            "column {} still has visible cards",
            col
        );
        let card = self.pop(Pile::Hidden(col));
        self.push(Pile::Visible(col), card);
    }

    pub fn draw_stock_to_waste(&mut self) {
        let card = self.pop(Pile::Stock);
        self.push(Pile::Waste, card);
    }

    /// Turns the waste back over onto the empty stock. Popping from the waste
    /// and pushing onto the stock reverses it, so the next pass draws the
    /// cards in the same order as the last one.
    pub fn recycle_waste_to_stock(&mut self) {
        assert!(self.is_empty(Pile::Stock), "stock must be empty to recycle the waste");
        assert!(!self.is_empty(Pile::Waste), "nothing to recycle");
        while !self.is_empty(Pile::Waste) {
            let card = self.pop(Pile::Waste);
            self.push(Pile::Stock, card);
        }
    }

    /// The card `n_cards - 1` places below the visible top of `col`, i.e. the
    /// card a run of `n_cards` would be placed by.
    pub fn visible_run_base(&self, col: usize, n_cards: usize) -> Option<Card> {
        if n_cards == 0 {
            return None;
        }
        self.iter_pile(Pile::Visible(col)).nth(n_cards - 1)
    }

    /// Moves the top `n_cards` visible cards of `from_col` onto `to_col`
    /// keeping their order. Relinks a single successor slot.
    pub fn move_visible_run(&mut self, from_col: usize, to_col: usize, n_cards: usize) {
        assert_ne!(from_col, to_col, "run must move to a different column");
        assert!(n_cards > 0, "run must hold at least one card");
        let top = self.head_index(Pile::Visible(from_col));
        let base = self
            .visible_run_base(from_col, n_cards)
            .unwrap_or_else(|| panic!("column {} has fewer than {} visible cards", from_col, n_cards));
        let base = base.index() as usize;
        let remaining = self.successor[base];
        self.successor[base] = self.head_index(Pile::Visible(to_col));
        self.set_head(Pile::Visible(to_col), top);
        self.set_head(Pile::Visible(from_col), remaining);
    }

    /// Verifies the chain invariants and returns the number of cards on the table.
    pub fn check_partition(&self) -> Result<usize, PartitionError> {
        let mut seen = [false; NUM_CARDS];
        let mut count = 0;
        for pile in Pile::all() {
            let mut next = self.head_index(pile);
            while next != NULL_INDEX {
                let slot = &mut seen[next as usize];
                if *slot {
                    return Err(PartitionError::DuplicateCard {
                        card: Card::from_index(next),
                        pile,
                    });
                }
                *slot = true;
                count += 1;
                next = self.successor[next as usize];
            }
        }

        for card in Card::all() {
            if !seen[card.index() as usize] && self.successor(card).is_some() {
                return Err(PartitionError::StraySuccessor(card));
            }
        }

        for suit in Suit::ALL {
            let cards: Vec<Card> = self.iter_pile(Pile::Foundation(suit)).collect();
            let height = cards.len();
            for (depth, &card) in cards.iter().enumerate() {
                if card.suit() != suit || card.rank() as usize != height - 1 - depth {
                    return Err(PartitionError::FoundationOutOfSequence { suit, card });
                }
            }
        }

        for col in 0..TABLEAU_COLUMNS {
            if self.is_empty(Pile::Visible(col)) && !self.is_empty(Pile::Hidden(col)) {
                return Err(PartitionError::HiddenUnderEmptyColumn(col));
            }
            let run: Vec<Card> = self.iter_pile(Pile::Visible(col)).collect();
            if run.windows(2).any(|pair| !pair[0].stacks_on(pair[1])) {
                return Err(PartitionError::BrokenRun(col));
            }
        }

        Ok(count)
    }
}

pub struct PileIter<'a> {
    table: &'a Table,
    next: u8,
}

impl Iterator for PileIter<'_> {
    type Item = Card;

    fn next(&mut self) -> Option<Card> {
        let card = to_option(self.next)?;
        self.next = self.table.successor[card.index() as usize];
        Some(card)
    }
}
