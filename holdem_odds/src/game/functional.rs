//! Hand pattern detectors.
//!
//! Both detectors look at one player's hole cards together with the
//! community cards. Neither ranks a full poker hand.

use super::constants::{FLUSH_SIZE, MAX_VALUE};
use super::entities::{Card, Player, Suit, Value, value_label};

/// A player's hole cards followed by the community cards.
pub fn hand_cards<'a>(
    player: &'a Player,
    community_cards: &'a [Card],
) -> impl Iterator<Item = &'a Card> + 'a {
    player.cards.iter().chain(community_cards)
}

/// First suit, in [`Suit::ALL`] order, held by five or more of the
/// player's cards.
pub fn find_flush(player: &Player, community_cards: &[Card]) -> Option<Suit> {
    let mut counts = [0usize; Suit::ALL.len()];
    for card in hand_cards(player, community_cards) {
        counts[card.1.index()] += 1;
    }
    Suit::ALL
        .into_iter()
        .find(|suit| counts[suit.index()] >= FLUSH_SIZE)
}

pub fn has_flush(player: &Player, community_cards: &[Card]) -> bool {
    find_flush(player, community_cards).is_some()
}

/// Label of the lowest value that appears exactly twice. Trips and quads
/// don't count.
pub fn find_pair(player: &Player, community_cards: &[Card]) -> Option<String> {
    let mut counts = [0usize; MAX_VALUE as usize + 1];
    for card in hand_cards(player, community_cards) {
        if let Some(count) = counts.get_mut(usize::from(card.0)) {
            *count += 1;
        }
    }
    counts
        .iter()
        .position(|&count| count == 2)
        .map(|value| value_label(value as Value))
}

pub fn has_pair(player: &Player, community_cards: &[Card]) -> bool {
    find_pair(player, community_cards).is_some()
}
