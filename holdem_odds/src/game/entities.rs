use rand::{Rng, seq::SliceRandom};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::constants::{DECK_SIZE, HOLE_CARDS, MAX_VALUE, MIN_VALUE};

/// Card suits in their fixed iteration order. Detectors walk suits in
/// exactly this order, so anything reporting "the first suit" is
/// deterministic.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Suit {
    Spade,
    Club,
    Heart,
    Diamond,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spade, Suit::Club, Suit::Heart, Suit::Diamond];

    /// Position of the suit within [`Suit::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::Spade => "♠",
            Self::Club => "♣",
            Self::Heart => "♥",
            Self::Diamond => "♦",
        };
        write!(f, "{repr}")
    }
}

/// Card rank from 2 (deuce) through 14 (ace).
pub type Value = u8;

const FACE_CARD_LABELS: [&str; 4] = ["J", "Q", "K", "A"];

/// Rank label for a card value. 2 through 10 are their numerals and
/// 11 through 14 index the face labels with `value % 11`. That trick only
/// holds for 11..=14, so anything outside 2..=14 gets a placeholder.
#[must_use]
pub fn value_label(value: Value) -> String {
    match value {
        MIN_VALUE..=10 => value.to_string(),
        11..=MAX_VALUE => FACE_CARD_LABELS[usize::from(value % 11)].to_string(),
        _ => "?".to_string(),
    }
}

/// A card is a tuple of a uInt8 value (two=2u8 ... ace=14u8) and a suit.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Card(pub Value, pub Suit);

impl Card {
    #[must_use]
    pub fn label(&self) -> String {
        value_label(self.0)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.label(), self.1)
    }
}

/// A fixed 52-card deck dealt from the front through a cursor. Cards
/// before `deck_idx` have been handed out; cards from `deck_idx` onwards
/// are still in the deck.
#[derive(Clone, Debug)]
pub struct Deck {
    cards: [Card; DECK_SIZE],
    deck_idx: usize,
}

impl Deck {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts every card back and applies a uniform Fisher-Yates permutation
    /// drawn from `rng`.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        self.deck_idx = 0;
    }

    /// Takes the next card off the front of the deck, or `None` once all
    /// 52 have been dealt.
    pub fn deal_card(&mut self) -> Option<Card> {
        let card = self.cards.get(self.deck_idx).copied()?;
        self.deck_idx += 1;
        Some(card)
    }

    /// Cards still in the deck, front first.
    #[must_use]
    pub fn remaining(&self) -> &[Card] {
        &self.cards[self.deck_idx..]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        DECK_SIZE - self.deck_idx
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Deck {
    fn default() -> Self {
        let mut cards = [Card(MIN_VALUE, Suit::Spade); DECK_SIZE];
        for (i, value) in (MIN_VALUE..=MAX_VALUE).enumerate() {
            for (j, suit) in Suit::ALL.into_iter().enumerate() {
                cards[Suit::ALL.len() * i + j] = Card(value, suit);
            }
        }
        Self { cards, deck_idx: 0 }
    }
}

/// Remaining cards laid out four to a row.
impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let remaining = self.remaining();
        if remaining.is_empty() {
            return write!(f, "{{}}");
        }
        for (i, row) in remaining.chunks(4).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let repr = row
                .iter()
                .map(Card::to_string)
                .collect::<Vec<_>>()
                .join("  ");
            write!(f, "{repr}")?;
        }
        Ok(())
    }
}

/// A seat at the table. Holds no cards until dealt, then exactly two.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Player {
    pub name: String,
    pub cards: Vec<Card>,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cards: Vec::with_capacity(HOLE_CARDS),
        }
    }

    /// Player named after their seat, e.g. `Player #0`.
    pub fn seated(seat_idx: usize) -> Self {
        Self::new(format!("Player #{seat_idx}"))
    }

    pub fn reset(&mut self) {
        self.cards.clear();
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cards.as_slice() {
            [first, second] => write!(f, "{}, Cards: {first}  {second}", self.name),
            _ => write!(f, "{}", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};
    use std::collections::{BTreeSet, HashMap};

    // === Card Tests ===

    #[test]
    fn test_card_creation() {
        let card = Card(14, Suit::Spade);
        assert_eq!(card.0, 14);
        assert_eq!(card.1, Suit::Spade);
    }

    #[test]
    fn test_card_equality_is_value_and_suit() {
        assert_eq!(Card(9, Suit::Heart), Card(9, Suit::Heart));
        assert_ne!(Card(9, Suit::Heart), Card(9, Suit::Club));
        assert_ne!(Card(9, Suit::Heart), Card(10, Suit::Heart));
    }

    #[test]
    fn test_value_labels() {
        for value in 2..=10 {
            assert_eq!(value_label(value), value.to_string());
        }
        assert_eq!(value_label(11), "J");
        assert_eq!(value_label(12), "Q");
        assert_eq!(value_label(13), "K");
        assert_eq!(value_label(14), "A");
    }

    #[test]
    fn test_value_label_out_of_range() {
        assert_eq!(value_label(0), "?");
        assert_eq!(value_label(1), "?");
        assert_eq!(value_label(15), "?");
    }

    #[test]
    fn test_card_display() {
        assert_eq!(Card(14, Suit::Spade).to_string(), "A♠");
        assert_eq!(Card(10, Suit::Heart).to_string(), "10♥");
        assert_eq!(Card(2, Suit::Club).to_string(), "2♣");
        assert_eq!(Card(12, Suit::Diamond).to_string(), "Q♦");
    }

    #[test]
    fn test_suit_display_all_variants() {
        assert_eq!(format!("{}", Suit::Spade), "♠");
        assert_eq!(format!("{}", Suit::Club), "♣");
        assert_eq!(format!("{}", Suit::Heart), "♥");
        assert_eq!(format!("{}", Suit::Diamond), "♦");
    }

    #[test]
    fn test_suit_index_matches_order() {
        for (i, suit) in Suit::ALL.into_iter().enumerate() {
            assert_eq!(suit.index(), i);
        }
    }

    #[test]
    fn test_card_serialization_roundtrip() {
        let card = Card(11, Suit::Diamond);
        let serialized = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&serialized).unwrap();
        assert_eq!(card, deserialized);
    }

    // === Deck Tests ===

    #[test]
    fn test_deck_initialization() {
        let deck = Deck::default();
        assert_eq!(deck.len(), 52);
        let unique: BTreeSet<_> = deck.remaining().iter().collect();
        assert_eq!(unique.len(), 52);
    }

    #[test]
    fn test_deck_value_and_suit_counts() {
        let deck = Deck::new();
        let mut values: HashMap<Value, usize> = HashMap::new();
        let mut suits: HashMap<Suit, usize> = HashMap::new();
        for card in deck.remaining() {
            assert!((2..=14).contains(&card.0));
            *values.entry(card.0).or_default() += 1;
            *suits.entry(card.1).or_default() += 1;
        }
        assert_eq!(values.len(), 13);
        assert!(values.values().all(|&n| n == 4));
        assert_eq!(suits.len(), 4);
        assert!(suits.values().all(|&n| n == 13));
    }

    #[test]
    fn test_deck_order_is_value_major() {
        let deck = Deck::new();
        let cards = deck.remaining();
        assert_eq!(cards[0], Card(2, Suit::Spade));
        assert_eq!(cards[1], Card(2, Suit::Club));
        assert_eq!(cards[3], Card(2, Suit::Diamond));
        assert_eq!(cards[4], Card(3, Suit::Spade));
        assert_eq!(cards[51], Card(14, Suit::Diamond));
    }

    #[test]
    fn test_deck_shuffle_is_permutation() {
        let mut deck = Deck::default();
        let before: BTreeSet<_> = deck.remaining().iter().copied().collect();
        deck.shuffle(&mut StdRng::seed_from_u64(7));
        let after: BTreeSet<_> = deck.remaining().iter().copied().collect();
        assert_eq!(deck.len(), 52);
        assert_eq!(before, after);
    }

    #[test]
    fn test_deck_shuffle_changes_order() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut deck = Deck::default();
        deck.shuffle(&mut rng);
        let first = deck.remaining().to_vec();
        deck.shuffle(&mut rng);
        assert_ne!(first, deck.remaining().to_vec());
        assert_ne!(first, Deck::default().remaining().to_vec());
    }

    #[test]
    fn test_deck_shuffle_resets_cursor() {
        let mut deck = Deck::default();
        deck.deal_card();
        deck.deal_card();
        deck.shuffle(&mut StdRng::seed_from_u64(1));
        assert_eq!(deck.len(), 52);
    }

    #[test]
    fn test_deck_deal_card() {
        let mut deck = Deck::default();
        let card = deck.deal_card();
        assert_eq!(card, Some(Card(2, Suit::Spade)));
        assert_eq!(deck.len(), 51);
        assert_eq!(deck.remaining()[0], Card(2, Suit::Club));
    }

    #[test]
    fn test_deck_deals_all_52_cards() {
        let mut deck = Deck::default();
        let mut dealt_cards = Vec::new();
        while let Some(card) = deck.deal_card() {
            dealt_cards.push(card);
        }
        assert_eq!(dealt_cards.len(), 52);
        assert!(deck.is_empty());
        assert_eq!(deck.deal_card(), None);
    }

    #[test]
    fn test_deck_display_rows_of_four() {
        let deck = Deck::default();
        let repr = deck.to_string();
        let rows: Vec<_> = repr.lines().collect();
        assert_eq!(rows.len(), 13);
        assert_eq!(rows[0], "2♠  2♣  2♥  2♦");
        assert_eq!(rows[12], "A♠  A♣  A♥  A♦");
    }

    #[test]
    fn test_deck_display_partial_row() {
        let mut deck = Deck::default();
        for _ in 0..50 {
            deck.deal_card();
        }
        assert_eq!(deck.to_string(), "A♥  A♦");
    }

    #[test]
    fn test_empty_deck_display() {
        let mut deck = Deck::default();
        while deck.deal_card().is_some() {}
        assert_eq!(deck.to_string(), "{}");
    }

    // === Player Tests ===

    #[test]
    fn test_seated_player_name() {
        let player = Player::seated(3);
        assert_eq!(player.name, "Player #3");
        assert!(player.cards.is_empty());
    }

    #[test]
    fn test_player_display_without_cards() {
        let player = Player::new("alice");
        assert_eq!(player.to_string(), "alice");
    }

    #[test]
    fn test_player_display_with_cards() {
        let mut player = Player::new("alice");
        player.cards = vec![Card(14, Suit::Spade), Card(13, Suit::Heart)];
        assert_eq!(player.to_string(), "alice, Cards: A♠  K♥");
    }

    #[test]
    fn test_player_reset() {
        let mut player = Player::seated(0);
        player.cards.push(Card(5, Suit::Club));
        player.reset();
        assert!(player.cards.is_empty());
    }
}
