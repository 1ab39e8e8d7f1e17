use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Number of cards in the Literature deck: 52 minus the four Eights.
pub const DECK_SIZE: usize = 48;

/// The 48-card Literature deck: 8 half-suits of 6 cards each.
///
/// ```
/// use literature_rs::deck::{Deck, DECK_SIZE};
///
/// let deck = Deck::literature();
/// assert_eq!(deck.len(), DECK_SIZE);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build the deck in a fixed, deterministic order (suits in `Suit::ALL`
    /// order, ranks ascending, Eights skipped).
    pub fn literature() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for &s in &Suit::ALL {
            for &r in &Rank::ALL {
                if r == Rank::Eight {
                    continue;
                }
                cards.push(Card::new(r, s));
            }
        }
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }
}
