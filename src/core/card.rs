use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use crate::core::consts::{ACE_RANK, KING_RANK, NUM_CARDS, NUM_RANKS, NUM_SUITS};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Spades = 0,
    Hearts = 1,
    Diamonds = 2,
    Clubs = 3,
}

impl Suit {
    pub const ALL: [Suit; NUM_SUITS] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    pub fn from_index(index: usize) -> Suit {
        assert!(index < NUM_SUITS, "suit index {} out of range", index);
        Suit::ALL[index]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_red(self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Suit::Spades => "♠",
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
        }
    }

    fn from_glyph(glyph: char) -> Option<Suit> {
        match glyph {
            '♠' => Some(Suit::Spades),
            '♥' => Some(Suit::Hearts),
            '♦' => Some(Suit::Diamonds),
            '♣' => Some(Suit::Clubs),
            _ => None,
        }
    }
}

pub fn suit_colours_equal(a: Suit, b: Suit) -> bool {
    a.is_red() == b.is_red()
}

const RANK_STRINGS: [&str; NUM_RANKS] = [
    "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
];

pub fn card_to_index(suit: Suit, rank: u8) -> u8 {
    assert!((rank as usize) < NUM_RANKS, "rank {} out of range", rank);
    rank * NUM_SUITS as u8 + suit as u8
}

pub fn index_to_card(index: u8) -> (Suit, u8) {
    assert!((index as usize) < NUM_CARDS, "card index {} out of range", index);
    (Suit::from_index(index as usize % NUM_SUITS), index / NUM_SUITS as u8)
}

/// A single card, stored as its dense index `rank * 4 + suit`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    pub fn new(suit: Suit, rank: u8) -> Card {
        Card(card_to_index(suit, rank))
    }

    pub fn from_index(index: u8) -> Card {
        assert!((index as usize) < NUM_CARDS, "card index {} out of range", index);
        Card(index)
    }

    pub fn index(self) -> u8 {
        self.0
    }

    pub fn suit(self) -> Suit {
        Suit::from_index(self.0 as usize % NUM_SUITS)
    }

    pub fn rank(self) -> u8 {
        self.0 / NUM_SUITS as u8
    }

    pub fn is_red(self) -> bool {
        self.suit().is_red()
    }

    pub fn is_ace(self) -> bool {
        self.rank() == ACE_RANK
    }

    pub fn is_king(self) -> bool {
        self.rank() == KING_RANK
    }

    /// True when `self` may sit directly on top of `below` in a tableau run.
    pub fn stacks_on(self, below: Card) -> bool {
        self.rank() + 1 == below.rank() && !suit_colours_equal(self.suit(), below.suit())
    }

    pub fn all() -> impl Iterator<Item = Card> {
        (0..NUM_CARDS as u8).map(Card)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = format!("{}{}", RANK_STRINGS[self.rank() as usize], self.suit().glyph());
        f.pad(&text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown card token `{0}`")]
pub struct ParseCardError(pub String);

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let mut chars = token.chars();
        let suit = chars
            .next_back()
            .and_then(Suit::from_glyph)
            .ok_or_else(|| ParseCardError(token.to_string()))?;
        let rank_text = chars.as_str();
        let rank = RANK_STRINGS
            .iter()
            .position(|&r| r == rank_text)
            .ok_or_else(|| ParseCardError(token.to_string()))?;
        Ok(Card::new(suit, rank as u8))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn index_roundtrips_for_every_card() {
        for suit in Suit::ALL {
            for rank in 0..NUM_RANKS as u8 {
                let index = card_to_index(suit, rank);
                assert!((index as usize) < NUM_CARDS);
                assert_eq!(index_to_card(index), (suit, rank));
            }
        }
    }

    #[test]
    fn index_layout_interleaves_suits() {
        assert_eq!(card_to_index(Suit::Spades, 0), 0);
        assert_eq!(card_to_index(Suit::Clubs, 0), 3);
        assert_eq!(card_to_index(Suit::Spades, 1), 4);
        assert_eq!(card_to_index(Suit::Clubs, KING_RANK), 51);
    }

    #[test]
    fn colours() {
        assert!(suit_colours_equal(Suit::Spades, Suit::Clubs));
        assert!(suit_colours_equal(Suit::Hearts, Suit::Diamonds));
        assert!(!suit_colours_equal(Suit::Spades, Suit::Hearts));
        assert!(!suit_colours_equal(Suit::Diamonds, Suit::Clubs));
    }

    #[test]
    fn parses_and_displays_tokens() {
        let ten_clubs: Card = "10♣".parse().unwrap();
        assert_eq!(ten_clubs, Card::new(Suit::Clubs, 9));
        assert_eq!(ten_clubs.to_string(), "10♣");

        let ace: Card = " A♠ ".parse().unwrap();
        assert_eq!(ace.index(), 0);
        assert_eq!(format!("{:^5}", ace), " A♠  ");

        assert_eq!("K♥".parse::<Card>().unwrap(), Card::new(Suit::Hearts, KING_RANK));
    }

    #[test]
    fn rejects_bad_tokens() {
        assert_eq!("1♠".parse::<Card>(), Err(ParseCardError("1♠".into())));
        assert!("A".parse::<Card>().is_err());
        assert!("AS".parse::<Card>().is_err());
        assert!("".parse::<Card>().is_err());
    }

    #[test]
    fn stacking_needs_alternating_colour_and_one_rank_lower() {
        let red_six = Card::new(Suit::Hearts, 5);
        let black_seven = Card::new(Suit::Spades, 6);
        let red_seven = Card::new(Suit::Diamonds, 6);
        assert!(red_six.stacks_on(black_seven));
        assert!(!red_six.stacks_on(red_seven));
        assert!(!black_seven.stacks_on(red_six));
    }
}
