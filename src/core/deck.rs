use std::path::Path;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use thiserror::Error;
use crate::core::card::{Card, ParseCardError};
use crate::core::consts::NUM_CARDS;

/// A permutation of all 52 cards, in dealing order.
pub type Deck = [Card; NUM_CARDS];

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("card {position}: {source}")]
    UnknownCard {
        position: usize,
        #[source]
        source: ParseCardError,
    },
    #[error("deck has {0} cards, expected 52")]
    WrongSize(usize),
    #[error("card {0} appears more than once")]
    Duplicate(Card),
    #[error("could not read deck file: {0}")]
    Io(#[from] std::io::Error),
}

pub fn ordered_deck() -> Deck {
    std::array::from_fn(|i| Card::from_index(i as u8))
}

/// Shuffled deck. The same seed always produces the same deck.
pub fn random_deck(seed: Option<u64>) -> Deck {
    let mut deck = ordered_deck();
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    deck.shuffle(&mut rng);
    deck
}

/// Parses 52 card tokens separated by whitespace or commas.
pub fn parse_deck(text: &str) -> Result<Deck, DeckError> {
    let tokens: Vec<&str> = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .collect();

    let mut cards = Vec::with_capacity(NUM_CARDS);
    let mut seen = [false; NUM_CARDS];
    for (position, token) in tokens.iter().enumerate() {
        let card: Card = token
            .parse()
            .map_err(|source| DeckError::UnknownCard { position, source })?;
        if std::mem::replace(&mut seen[card.index() as usize], true) {
            return Err(DeckError::Duplicate(card));
        }
        cards.push(card);
    }

    cards
        .try_into()
        .map_err(|cards: Vec<Card>| DeckError::WrongSize(cards.len()))
}

pub fn load_deck(path: &Path) -> Result<Deck, DeckError> {
    let text = std::fs::read_to_string(path)?;
    parse_deck(&text)
}

pub fn deck_to_string(deck: &Deck) -> String {
    deck.iter()
        .map(|card| card.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
