//! Dealing engine.
//!
//! A [`PokerTable`] is the aggregate root of one dealt hand. Dealing consumes
//! a shuffled [`Deck`] from the front in a fixed order: hole cards
//! round-robin, then burn/flop, burn/turn, burn/river.

use log::trace;
use rand::Rng;
use std::{collections::HashSet, fmt};
use thiserror::Error;

use super::constants::{
    DECK_SIZE, FLOP_SIZE, HOLE_CARDS, MAX_PLAYERS, NUM_BURNS, NUM_COMMUNITY_CARDS, cards_required,
};
use super::entities::{Card, Deck, Player};

/// Errors that can occur while dealing or validating a table
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DealError {
    #[error("need 1+ players")]
    NoPlayers,
    #[error("insufficient cards: {players} players need {required} cards, deck holds {available}")]
    TooManyPlayers {
        players: usize,
        required: usize,
        available: usize,
    },
    #[error("invalid table state: deck exhausted mid-deal")]
    DeckExhausted,
    #[error("deck holds {remaining} of 52 cards, deals need a full deck")]
    IncompleteDeck { remaining: usize },
    #[error("invalid table state: {0} dealt more than once")]
    DuplicateCard(Card),
    #[error("invalid table state: {player} holds {count} hole cards")]
    WrongHoleCardCount { player: String, count: usize },
    #[error("invalid table state: {0} community cards")]
    WrongCommunityCardCount(usize),
    #[error("invalid table state: {0} burned cards")]
    WrongBurnedCardCount(usize),
    #[error("invalid table state: accounted for {actual} of {expected} cards")]
    CardCountMismatch { expected: usize, actual: usize },
}

/// Result type for dealing operations
pub type Result<T> = std::result::Result<T, DealError>;

/// Rejects player counts a single deck can't serve.
pub fn validate_player_count(num_players: usize) -> Result<()> {
    if num_players == 0 {
        return Err(DealError::NoPlayers);
    }
    if num_players > MAX_PLAYERS {
        return Err(DealError::TooManyPlayers {
            players: num_players,
            required: cards_required(num_players),
            available: DECK_SIZE,
        });
    }
    Ok(())
}

#[derive(Clone, Debug, Default)]
pub struct PokerTable {
    pub players: Vec<Player>,
    /// Flop, turn, then river.
    pub community_cards: Vec<Card>,
    /// Burns in the order they were taken.
    pub burned_cards: Vec<Card>,
    deck: Deck,
}

impl PokerTable {
    /// Shuffles a fresh deck with `rng` and deals a table of `num_players`.
    pub fn new<R: Rng + ?Sized>(num_players: usize, rng: &mut R) -> Result<Self> {
        let mut table = Self::default();
        table.deal(num_players, rng)?;
        Ok(table)
    }

    /// Deals a table from a full deck that's already been shuffled. A deck
    /// with cards already dealt off it is rejected.
    pub fn deal_from(deck: Deck, num_players: usize) -> Result<Self> {
        if deck.len() != DECK_SIZE {
            return Err(DealError::IncompleteDeck {
                remaining: deck.len(),
            });
        }
        let mut table = Self {
            deck,
            ..Self::default()
        };
        table.deal_from_deck(num_players)?;
        Ok(table)
    }

    /// Re-initializes the table: everything from the previous deal is
    /// discarded, the deck is rebuilt and shuffled exactly once, and a new
    /// hand is dealt.
    pub fn deal<R: Rng + ?Sized>(&mut self, num_players: usize, rng: &mut R) -> Result<()> {
        validate_player_count(num_players)?;
        self.deck = Deck::default();
        self.deck.shuffle(rng);
        self.deal_from_deck(num_players)
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    fn deal_from_deck(&mut self, num_players: usize) -> Result<()> {
        validate_player_count(num_players)?;

        self.reset(num_players);
        self.deal_hole_cards()?;
        self.burn()?;
        self.deal_community(FLOP_SIZE)?;
        self.burn()?;
        self.deal_community(1)?;
        self.burn()?;
        self.deal_community(1)?;

        trace!(
            "dealt {} players, board {:?}, {} cards left",
            num_players,
            self.community_cards,
            self.deck.len()
        );
        debug_assert!(
            self.check_invariants().is_ok(),
            "{:?}",
            self.check_invariants()
        );
        Ok(())
    }

    fn reset(&mut self, num_players: usize) {
        self.players = (0..num_players).map(Player::seated).collect();
        self.community_cards = Vec::with_capacity(NUM_COMMUNITY_CARDS);
        self.burned_cards = Vec::with_capacity(NUM_BURNS);
    }

    fn next_card(&mut self) -> Result<Card> {
        self.deck.deal_card().ok_or(DealError::DeckExhausted)
    }

    /// Everyone gets their first card before anyone gets their second.
    fn deal_hole_cards(&mut self) -> Result<()> {
        let num_players = self.players.len();
        for i in 0..HOLE_CARDS * num_players {
            let card = self.next_card()?;
            self.players[i % num_players].cards.push(card);
        }
        Ok(())
    }

    fn burn(&mut self) -> Result<()> {
        let card = self.next_card()?;
        self.burned_cards.push(card);
        Ok(())
    }

    fn deal_community(&mut self, n: usize) -> Result<()> {
        for _ in 0..n {
            let card = self.next_card()?;
            self.community_cards.push(card);
        }
        Ok(())
    }

    /// Checks a dealt table: two hole cards per player, five community
    /// cards, three burns, and every one of the 52 cards in exactly one
    /// place.
    pub fn check_invariants(&self) -> Result<()> {
        for player in &self.players {
            if player.cards.len() != HOLE_CARDS {
                return Err(DealError::WrongHoleCardCount {
                    player: player.name.clone(),
                    count: player.cards.len(),
                });
            }
        }
        if self.community_cards.len() != NUM_COMMUNITY_CARDS {
            return Err(DealError::WrongCommunityCardCount(
                self.community_cards.len(),
            ));
        }
        if self.burned_cards.len() != NUM_BURNS {
            return Err(DealError::WrongBurnedCardCount(self.burned_cards.len()));
        }

        let mut seen = HashSet::with_capacity(DECK_SIZE);
        let all_cards = self
            .players
            .iter()
            .flat_map(|p| p.cards.iter())
            .chain(&self.community_cards)
            .chain(&self.burned_cards)
            .chain(self.deck.remaining());
        for card in all_cards {
            if !seen.insert(*card) {
                return Err(DealError::DuplicateCard(*card));
            }
        }
        if seen.len() != DECK_SIZE {
            return Err(DealError::CardCountMismatch {
                expected: DECK_SIZE,
                actual: seen.len(),
            });
        }
        Ok(())
    }
}

fn write_cards(f: &mut fmt::Formatter<'_>, cards: &[Card]) -> fmt::Result {
    let repr = cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join("  ");
    write!(f, "{repr}")
}

impl fmt::Display for PokerTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for player in &self.players {
            writeln!(f, "{player}")?;
        }
        write!(f, "\nCommunity Cards: ")?;
        write_cards(f, &self.community_cards)?;
        write!(f, "\n\nBurned Cards: ")?;
        write_cards(f, &self.burned_cards)?;
        write!(f, "\n\nDeck:\n{}", self.deck)
    }
}
