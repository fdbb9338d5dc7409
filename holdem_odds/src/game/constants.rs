/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// Lowest and highest card values. Aces are always high (14).
pub const MIN_VALUE: u8 = 2;
pub const MAX_VALUE: u8 = 14;

pub const HOLE_CARDS: usize = 2;
pub const FLOP_SIZE: usize = 3;
pub const NUM_COMMUNITY_CARDS: usize = 5;
/// One burn before each of the flop, turn, and river.
pub const NUM_BURNS: usize = 3;

/// Cards consumed by a deal regardless of the number of players.
pub const SHARED_CARDS: usize = NUM_BURNS + NUM_COMMUNITY_CARDS;

/// Largest table a single deck can serve: 2 * 22 + 8 == 52. A 22-player
/// deal uses every card, so 22 is accepted rather than capped at 21.
pub const MAX_PLAYERS: usize = (DECK_SIZE - SHARED_CARDS) / HOLE_CARDS;

/// Minimum number of suited cards that makes a flush.
pub const FLUSH_SIZE: usize = 5;

/// Number of cards dealt for a table of `num_players`.
#[must_use]
pub const fn cards_required(num_players: usize) -> usize {
    HOLE_CARDS * num_players + SHARED_CARDS
}
