use crate::cards::Card;
use crate::deck::Deck;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Fatal setup errors: the match cannot start.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("too few players: need at least 2, got {got}")]
    TooFewPlayers { got: usize },
    #[error("player count must be even to split into two teams, got {got}")]
    OddPlayerCount { got: usize },
    #[error("deck of {deck} cards does not split evenly among {players} players")]
    UnevenDeal { deck: usize, players: usize },
    #[error("hand sizes must be equal: expected {expected}, got {got}")]
    HandSizeMismatch { expected: usize, got: usize },
    #[error("card {0} appears in more than one hand")]
    DuplicateCard(Card),
    #[error("card {0} is not part of the Literature deck")]
    ForeignCard(Card),
}

pub(crate) fn check_player_count(deck_size: usize, player_count: usize) -> Result<(), ConfigError> {
    if player_count < 2 {
        return Err(ConfigError::TooFewPlayers { got: player_count });
    }
    if player_count % 2 != 0 {
        return Err(ConfigError::OddPlayerCount { got: player_count });
    }
    if deck_size % player_count != 0 {
        return Err(ConfigError::UnevenDeal { deck: deck_size, players: player_count });
    }
    Ok(())
}

/// Shuffle a copy of `deck` with a seeded RNG and split it into
/// `player_count` equal contiguous hands.
///
/// The seed is an explicit input so deals are reproducible; the caller owns
/// assigning the returned hands to players.
///
/// ```
/// use literature_rs::deck::Deck;
/// use literature_rs::dealer::deal;
///
/// let hands = deal(&Deck::literature(), 6, 42).unwrap();
/// assert_eq!(hands.len(), 6);
/// assert!(hands.iter().all(|h| h.len() == 8));
/// ```
pub fn deal(deck: &Deck, player_count: usize, seed: u64) -> Result<Vec<Vec<Card>>, ConfigError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    deal_with(deck, player_count, &mut rng)
}

/// Like [`deal`], but with a caller-managed RNG.
pub fn deal_with<R: Rng + ?Sized>(
    deck: &Deck,
    player_count: usize,
    rng: &mut R,
) -> Result<Vec<Vec<Card>>, ConfigError> {
    check_player_count(deck.len(), player_count)?;
    let mut shuffled = deck.clone();
    shuffled.shuffle_with(rng);
    let hand_size = shuffled.len() / player_count;
    Ok(shuffled.cards().chunks(hand_size).map(|h| h.to_vec()).collect())
}
