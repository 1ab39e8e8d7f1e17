use literature_rs::cards::Card;
use literature_rs::dealer::{deal, ConfigError};
use literature_rs::deck::{Deck, DECK_SIZE};
use std::collections::HashSet;

#[test]
fn deal_covers_the_deck_exactly_once() {
    let deck = Deck::literature();
    for players in [2usize, 4, 6, 8, 12, 24] {
        let hands = deal(&deck, players, 42).unwrap();
        assert_eq!(hands.len(), players);

        let expected = DECK_SIZE / players;
        assert!(hands.iter().all(|h| h.len() == expected));

        let union: HashSet<Card> = hands.iter().flatten().copied().collect();
        assert_eq!(union.len(), DECK_SIZE, "hands must be disjoint for {players} players");
        let full: HashSet<Card> = deck.cards().iter().copied().collect();
        assert_eq!(union, full, "union of hands must equal the deck");
    }
}

#[test]
fn same_seed_reproduces_the_deal() {
    let deck = Deck::literature();
    let a = deal(&deck, 6, 7).unwrap();
    let b = deal(&deck, 6, 7).unwrap();
    assert_eq!(a, b);

    let c = deal(&deck, 6, 8).unwrap();
    assert_ne!(a, c);
}

#[test]
fn invalid_player_counts_are_fatal() {
    let deck = Deck::literature();
    assert!(matches!(deal(&deck, 0, 1), Err(ConfigError::TooFewPlayers { .. })));
    assert!(matches!(deal(&deck, 3, 1), Err(ConfigError::OddPlayerCount { got: 3 })));
    assert!(matches!(deal(&deck, 14, 1), Err(ConfigError::UnevenDeal { deck: 48, players: 14 })));
}

#[test]
fn six_player_deal_gives_eight_cards_each() {
    let hands = deal(&Deck::literature(), 6, 123).unwrap();
    assert!(hands.iter().all(|h| h.len() == 8));
}
