use crate::cards::{Card, HalfSuit};
use crate::dealer::{self, ConfigError};
use crate::deck::{Deck, DECK_SIZE};
use rand::Rng;
use std::collections::HashMap;
use std::fmt;

/// The two teams. Seats alternate A, B, A, B, ... around the table, so any
/// even player count splits exactly in half.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Team {
    A,
    B,
}

impl Team {
    pub const fn for_seat(seat: usize) -> Team {
        if seat % 2 == 0 {
            Team::A
        } else {
            Team::B
        }
    }

    pub const fn opponent(self) -> Team {
        match self {
            Team::A => Team::B,
            Team::B => Team::A,
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Team::A => 0,
            Team::B => 1,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::A => write!(f, "A"),
            Team::B => write!(f, "B"),
        }
    }
}

/// Match phase. Declarations are not a phase of their own: any seat may
/// declare at any point while the round is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Phase {
    AwaitingAsk,
    RoundOver,
}

/// Configuration for a match. `rng_seed: None` draws a seed from the system
/// RNG once at start; the effective seed is recorded either way so the deal
/// stays reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub player_count: usize,
    pub rng_seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { player_count: 6, rng_seed: None }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AskError {
    #[error("the round is over")]
    RoundOver,
    #[error("unknown seat: {0}")]
    UnknownSeat(usize),
    #[error("it is seat {current}'s turn, not seat {asker}'s")]
    OutOfTurn { asker: usize, current: usize },
    #[error("seat {target} is on the asker's own team")]
    SameTeamTarget { target: usize },
    #[error("seat {target} has no cards left to ask for")]
    TargetHandEmpty { target: usize },
    #[error("card {0} is not part of any half-suit in play")]
    CardNotInPlay(Card),
    #[error("half-suit '{0}' has already been claimed")]
    HalfSuitClaimed(HalfSuit),
    #[error("asker already holds {0}")]
    AlreadyHoldsCard(Card),
    #[error("asker holds no card of '{0}'")]
    NoCardInHalfSuit(HalfSuit),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeclareError {
    #[error("the round is over")]
    RoundOver,
    #[error("unknown seat: {0}")]
    UnknownSeat(usize),
    #[error("half-suit '{0}' has already been claimed")]
    AlreadyClaimed(HalfSuit),
    #[error("declarer's team holds no card of '{0}'")]
    TeamHoldsNone(HalfSuit),
    #[error("assignment is missing {0}")]
    MissingAssignment(Card),
    #[error("assigned card {0} does not belong to the declared half-suit")]
    ForeignAssignment(Card),
    #[error("assignment names unknown seat {0}")]
    UnknownAssignedSeat(usize),
}

/// Result of a legal ask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AskOutcome {
    /// The target held the card; it moved to the asker, who keeps the turn.
    Taken,
    /// The target did not hold the card; the turn passes to the target.
    Miss,
}

impl fmt::Display for AskOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AskOutcome::Taken => write!(f, "taken"),
            AskOutcome::Miss => write!(f, "miss"),
        }
    }
}

/// Result of a resolved declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct DeclareOutcome {
    /// The team awarded the half-suit.
    pub winner: Team,
    /// Whether every asserted holder matched the true holder.
    pub correct: bool,
}

/// One seat at the table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Player {
    pub(crate) name: String,
    pub(crate) team: Team,
    pub(crate) hand: Vec<Card>,
}

impl Player {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn team(&self) -> Team {
        self.team
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    fn holds(&self, card: Card) -> bool {
        self.hand.contains(&card)
    }

    fn holds_any_of(&self, hs: HalfSuit) -> bool {
        self.hand.iter().any(|c| c.half_suit() == Some(hs))
    }
}

/// The authoritative state machine for one round of Literature.
///
/// `Game` is the single owner of the match state; every transition is a
/// synchronous computation that either applies fully or rejects without
/// touching anything. Consumers read state through the accessors here or
/// through [`crate::engine::Match`] snapshots.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Game {
    pub(crate) players: Vec<Player>,
    /// Claim table indexed by [`HalfSuit::index`]; `None` while open.
    pub(crate) claims: [Option<Team>; HalfSuit::COUNT],
    pub(crate) current: usize,
    pub(crate) phase: Phase,
    /// Seed the deal was shuffled with; `None` for predetermined hands.
    pub(crate) seed: Option<u64>,
}

impl Game {
    /// Shuffle and deal a fresh match per `config`.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        let deck = Deck::literature();
        let seed = config.rng_seed.unwrap_or_else(|| rand::rng().random());
        let hands = dealer::deal(&deck, config.player_count, seed)?;
        Ok(Self::from_hands(hands, Some(seed)))
    }

    /// Start from a predetermined deal, e.g. a host restoring a match or a
    /// test pinning exact hands. The hands must be equal-sized, disjoint,
    /// and together cover the 48-card deck exactly.
    pub fn with_hands(hands: Vec<Vec<Card>>) -> Result<Self, ConfigError> {
        dealer::check_player_count(DECK_SIZE, hands.len())?;
        let expected = DECK_SIZE / hands.len();
        let mut seen = std::collections::HashSet::with_capacity(DECK_SIZE);
        for hand in &hands {
            if hand.len() != expected {
                return Err(ConfigError::HandSizeMismatch { expected, got: hand.len() });
            }
            for &card in hand {
                if card.half_suit().is_none() {
                    return Err(ConfigError::ForeignCard(card));
                }
                if !seen.insert(card) {
                    return Err(ConfigError::DuplicateCard(card));
                }
            }
        }
        // n * (48 / n) cards, no duplicates, none foreign: exactly the deck.
        Ok(Self::from_hands(hands, None))
    }

    fn from_hands(hands: Vec<Vec<Card>>, seed: Option<u64>) -> Self {
        let players = hands
            .into_iter()
            .enumerate()
            .map(|(i, hand)| Player {
                name: format!("Player {}", i + 1),
                team: Team::for_seat(i),
                hand,
            })
            .collect();
        Self {
            players,
            claims: [None; HalfSuit::COUNT],
            current: 0,
            phase: Phase::AwaitingAsk,
            seed,
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Seat whose turn it is to ask.
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// The team holding a claimed half-suit, or `None` while it is open.
    pub fn claim(&self, hs: HalfSuit) -> Option<Team> {
        self.claims[hs.index()]
    }

    pub fn open_half_suits(&self) -> Vec<HalfSuit> {
        HalfSuit::ALL.iter().copied().filter(|hs| self.claim(*hs).is_none()).collect()
    }

    pub fn claimed_count(&self) -> usize {
        self.claims.iter().filter(|c| c.is_some()).count()
    }

    /// Half-suits claimed so far by `team`.
    pub fn score(&self, team: Team) -> usize {
        self.claims.iter().filter(|c| **c == Some(team)).count()
    }

    /// Total cards still held in hands.
    pub fn cards_in_hands(&self) -> usize {
        self.players.iter().map(|p| p.hand.len()).sum()
    }

    /// The winning team once the round is over: strictly higher score.
    /// `None` while the round is live, or on a tie.
    pub fn winner(&self) -> Option<Team> {
        if !matches!(self.phase, Phase::RoundOver) {
            return None;
        }
        let a = self.score(Team::A);
        let b = self.score(Team::B);
        match a.cmp(&b) {
            std::cmp::Ordering::Greater => Some(Team::A),
            std::cmp::Ordering::Less => Some(Team::B),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// The current player asks an opposing seat for a specific card.
    ///
    /// All preconditions are checked before any mutation; a rejection leaves
    /// the state untouched and names the violated precondition. On success,
    /// a held card moves to the asker (who keeps the turn); a miss passes
    /// the turn to the asked target.
    pub fn ask(&mut self, asker: usize, target: usize, card: Card) -> Result<AskOutcome, AskError> {
        if matches!(self.phase, Phase::RoundOver) {
            return Err(AskError::RoundOver);
        }
        if asker >= self.players.len() {
            return Err(AskError::UnknownSeat(asker));
        }
        if target >= self.players.len() {
            return Err(AskError::UnknownSeat(target));
        }
        if asker != self.current {
            return Err(AskError::OutOfTurn { asker, current: self.current });
        }
        if self.players[target].team == self.players[asker].team {
            return Err(AskError::SameTeamTarget { target });
        }
        if self.players[target].hand.is_empty() {
            return Err(AskError::TargetHandEmpty { target });
        }
        let hs = card.half_suit().ok_or(AskError::CardNotInPlay(card))?;
        if self.claims[hs.index()].is_some() {
            return Err(AskError::HalfSuitClaimed(hs));
        }
        if self.players[asker].holds(card) {
            return Err(AskError::AlreadyHoldsCard(card));
        }
        if !self.players[asker].holds_any_of(hs) {
            return Err(AskError::NoCardInHalfSuit(hs));
        }

        match self.players[target].hand.iter().position(|&c| c == card) {
            Some(pos) => {
                let taken = self.players[target].hand.remove(pos);
                self.players[asker].hand.push(taken);
                Ok(AskOutcome::Taken)
            }
            None => {
                self.current = target;
                Ok(AskOutcome::Miss)
            }
        }
    }

    /// Blind declaration of a half-suit: the declarer asserts who holds each
    /// of the six cards, without inspecting hands.
    ///
    /// All-or-nothing: every asserted holder correct awards the half-suit to
    /// the declarer's team; a single mistake awards it to the opponents.
    /// Either way the six cards leave every hand permanently. Any seat may
    /// declare regardless of whose turn it is; no turn is consumed.
    pub fn declare(
        &mut self,
        declarer: usize,
        half_suit: HalfSuit,
        assignment: &HashMap<Card, usize>,
    ) -> Result<DeclareOutcome, DeclareError> {
        if matches!(self.phase, Phase::RoundOver) {
            return Err(DeclareError::RoundOver);
        }
        if declarer >= self.players.len() {
            return Err(DeclareError::UnknownSeat(declarer));
        }
        if self.claims[half_suit.index()].is_some() {
            return Err(DeclareError::AlreadyClaimed(half_suit));
        }
        let team = self.players[declarer].team;
        if !self
            .players
            .iter()
            .any(|p| p.team == team && p.holds_any_of(half_suit))
        {
            return Err(DeclareError::TeamHoldsNone(half_suit));
        }
        for (&card, &seat) in assignment {
            if card.half_suit() != Some(half_suit) {
                return Err(DeclareError::ForeignAssignment(card));
            }
            if seat >= self.players.len() {
                return Err(DeclareError::UnknownAssignedSeat(seat));
            }
        }
        let members = half_suit.cards();
        for &card in &members {
            if !assignment.contains_key(&card) {
                return Err(DeclareError::MissingAssignment(card));
            }
        }

        // Every open half-suit card sits in exactly one hand, so asserted
        // holder == true holder iff that seat holds the card.
        let correct =
            members.iter().all(|card| self.players[assignment[card]].holds(*card));
        let winner = if correct { team } else { team.opponent() };

        for p in &mut self.players {
            p.hand.retain(|c| c.half_suit() != Some(half_suit));
        }
        self.claims[half_suit.index()] = Some(winner);

        if self.claims.iter().all(|c| c.is_some()) {
            self.phase = Phase::RoundOver;
        } else if self.players[self.current].hand.is_empty() {
            self.advance_past_empty_hands();
        }
        Ok(DeclareOutcome { winner, correct })
    }

    /// Move the turn to the next seat still holding cards. While any
    /// half-suit is open its six cards sit in hands, so some seat qualifies.
    fn advance_past_empty_hands(&mut self) {
        let n = self.players.len();
        let mut i = self.current;
        for _ in 0..n {
            i = (i + 1) % n;
            if !self.players[i].hand.is_empty() {
                self.current = i;
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Half, Rank, Suit};

    /// Unshuffled deal: deck order chunked into 8-card hands. Seat 0 holds
    /// all of low clubs plus 9c/10c; seat 1 holds Jc..Ac and 2d..5d; etc.
    fn ordered_hands() -> Vec<Vec<Card>> {
        Deck::literature().cards().chunks(8).map(|h| h.to_vec()).collect()
    }

    fn mk_game() -> Game {
        Game::with_hands(ordered_hands()).unwrap()
    }

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    fn conservation_holds(g: &Game) -> bool {
        g.cards_in_hands() + HalfSuit::SIZE * g.claimed_count() == DECK_SIZE
    }

    #[test]
    fn with_hands_rejects_duplicates_and_foreign_cards() {
        let mut hands = ordered_hands();
        hands[0][0] = hands[1][0];
        assert!(matches!(Game::with_hands(hands), Err(ConfigError::DuplicateCard(_))));

        let mut hands = ordered_hands();
        hands[0][0] = Card::new(Rank::Eight, Suit::Clubs);
        assert!(matches!(Game::with_hands(hands), Err(ConfigError::ForeignCard(_))));

        let mut hands = ordered_hands();
        hands[0].pop();
        assert!(matches!(
            Game::with_hands(hands),
            Err(ConfigError::HandSizeMismatch { expected: 8, got: 7 })
        ));
    }

    #[test]
    fn teams_alternate_by_seat() {
        let g = mk_game();
        for (i, p) in g.players().iter().enumerate() {
            assert_eq!(p.team(), Team::for_seat(i));
        }
        assert_eq!(g.players()[0].team(), Team::A);
        assert_eq!(g.players()[1].team(), Team::B);
    }

    #[test]
    fn successful_ask_transfers_card_and_keeps_turn() {
        let mut g = mk_game();
        // Seat 0 holds 9c/10c, so it may ask for high clubs; seat 1 holds Jc.
        let out = g.ask(0, 1, card("Jc")).unwrap();
        assert_eq!(out, AskOutcome::Taken);
        assert_eq!(g.current(), 0);
        assert!(g.players()[0].hand().contains(&card("Jc")));
        assert!(!g.players()[1].hand().contains(&card("Jc")));
        assert!(conservation_holds(&g));
    }

    #[test]
    fn missed_ask_passes_turn_to_the_target() {
        let mut g = mk_game();
        // Seat 3 is opposing and does not hold Kc (seat 1 does).
        let out = g.ask(0, 3, card("Kc")).unwrap();
        assert_eq!(out, AskOutcome::Miss);
        assert_eq!(g.current(), 3);
        assert!(conservation_holds(&g));
    }

    #[test]
    fn ask_preconditions_each_reject_with_their_own_error() {
        let mut g = mk_game();

        assert_eq!(
            g.ask(2, 1, card("Jc")).unwrap_err(),
            AskError::OutOfTurn { asker: 2, current: 0 }
        );
        assert_eq!(g.ask(0, 9, card("Jc")).unwrap_err(), AskError::UnknownSeat(9));
        // Seat 2 is on team A, like seat 0.
        assert_eq!(g.ask(0, 2, card("Jc")).unwrap_err(), AskError::SameTeamTarget { target: 2 });
        // Eights sit outside every half-suit.
        assert_eq!(
            g.ask(0, 1, Card::new(Rank::Eight, Suit::Clubs)).unwrap_err(),
            AskError::CardNotInPlay(Card::new(Rank::Eight, Suit::Clubs))
        );
        // Seat 0 already holds 9c.
        assert_eq!(g.ask(0, 1, card("9c")).unwrap_err(), AskError::AlreadyHoldsCard(card("9c")));
        // Seat 0 holds nothing in low diamonds.
        assert_eq!(
            g.ask(0, 1, card("2d")).unwrap_err(),
            AskError::NoCardInHalfSuit(HalfSuit::new(Suit::Diamonds, Half::Low))
        );
    }

    #[test]
    fn rejected_ask_leaves_state_untouched() {
        let mut g = mk_game();
        let before = g.clone();
        let _ = g.ask(0, 2, card("Jc")).unwrap_err();
        let _ = g.ask(4, 1, card("Jc")).unwrap_err();
        assert_eq!(g.players(), before.players());
        assert_eq!(g.current(), before.current());
        assert_eq!(g.phase(), before.phase());
    }

    #[test]
    fn correct_declaration_scores_for_the_declarer_team() {
        let mut g = mk_game();
        let hs = HalfSuit::new(Suit::Clubs, Half::Low);
        // Seat 0 holds the entire half-suit.
        let assignment: HashMap<Card, usize> = hs.cards().iter().map(|&c| (c, 0)).collect();
        let out = g.declare(0, hs, &assignment).unwrap();
        assert_eq!(out.winner, Team::A);
        assert!(out.correct);
        assert_eq!(g.claim(hs), Some(Team::A));
        assert_eq!(g.score(Team::A), 1);
        assert_eq!(g.score(Team::B), 0);
        assert_eq!(g.players()[0].hand_size(), 2);
        assert!(conservation_holds(&g));
    }

    #[test]
    fn one_wrong_assignment_awards_the_opponents() {
        let mut g = mk_game();
        let hs = HalfSuit::new(Suit::Clubs, Half::Low);
        let mut assignment: HashMap<Card, usize> =
            hs.cards().iter().map(|&c| (c, 0)).collect();
        // Five of six correct: 7c really sits with seat 0.
        assignment.insert(card("7c"), 3);
        let out = g.declare(0, hs, &assignment).unwrap();
        assert_eq!(out.winner, Team::B);
        assert!(!out.correct);
        assert_eq!(g.claim(hs), Some(Team::B));
        assert_eq!(g.score(Team::B), 1);
        // The cards are gone from circulation regardless.
        assert_eq!(g.players()[0].hand_size(), 2);
        assert!(conservation_holds(&g));
    }

    #[test]
    fn declaration_may_assign_cards_to_either_team() {
        let mut g = mk_game();
        let hs = HalfSuit::new(Suit::Diamonds, Half::Low);
        // 2d..5d with seat 1, 6d/7d with seat 2: a fully correct assignment
        // naming seats on both teams, declared by seat 1 (team B).
        let mut assignment = HashMap::new();
        for c in ["2d", "3d", "4d", "5d"] {
            assignment.insert(card(c), 1);
        }
        for c in ["6d", "7d"] {
            assignment.insert(card(c), 2);
        }
        let out = g.declare(1, hs, &assignment).unwrap();
        assert_eq!(out.winner, Team::B);
        assert!(out.correct);
    }

    #[test]
    fn declare_preconditions_each_reject_with_their_own_error() {
        let mut g = mk_game();
        let hs = HalfSuit::new(Suit::Clubs, Half::Low);
        let assignment: HashMap<Card, usize> = hs.cards().iter().map(|&c| (c, 0)).collect();

        assert_eq!(g.declare(9, hs, &assignment).unwrap_err(), DeclareError::UnknownSeat(9));

        // Claim it, then a second declaration must be rejected.
        g.declare(0, hs, &assignment).unwrap();
        assert_eq!(g.declare(0, hs, &assignment).unwrap_err(), DeclareError::AlreadyClaimed(hs));

        // High diamonds sits entirely with seat 2 (team A), so team B
        // holds none of it.
        let hd = HalfSuit::new(Suit::Diamonds, Half::High);
        let hd_assignment: HashMap<Card, usize> =
            hd.cards().iter().map(|&c| (c, 2)).collect();
        assert_eq!(
            g.declare(1, hd, &hd_assignment).unwrap_err(),
            DeclareError::TeamHoldsNone(hd)
        );

        // Incomplete and foreign assignments.
        let hh = HalfSuit::new(Suit::Hearts, Half::Low);
        let mut partial: HashMap<Card, usize> = HashMap::new();
        partial.insert(card("2h"), 3);
        assert!(matches!(
            g.declare(3, hh, &partial).unwrap_err(),
            DeclareError::MissingAssignment(_)
        ));

        let mut foreign: HashMap<Card, usize> =
            hh.cards().iter().map(|&c| (c, 3)).collect();
        foreign.insert(card("As"), 3);
        assert_eq!(
            g.declare(3, hh, &foreign).unwrap_err(),
            DeclareError::ForeignAssignment(card("As"))
        );

        let mut bad_seat: HashMap<Card, usize> =
            hh.cards().iter().map(|&c| (c, 3)).collect();
        bad_seat.insert(card("2h"), 42);
        assert_eq!(
            g.declare(3, hh, &bad_seat).unwrap_err(),
            DeclareError::UnknownAssignedSeat(42)
        );
    }

    #[test]
    fn round_ends_when_every_half_suit_is_claimed() {
        let mut g = mk_game();
        // Resolve all eight half-suits by (mostly wrong) blind declarations;
        // the round must terminate regardless of who wins each.
        for hs in HalfSuit::ALL {
            let assignment: HashMap<Card, usize> =
                hs.cards().iter().map(|&c| (c, 0)).collect();
            // Find any seat whose team still holds a card of the half-suit.
            let declarer = (0..g.player_count())
                .find(|&s| {
                    let team = g.players()[s].team();
                    g.players().iter().any(|p| {
                        p.team() == team && p.hand().iter().any(|c| c.half_suit() == Some(hs))
                    })
                })
                .expect("open half-suit cards sit in hands");
            g.declare(declarer, hs, &assignment).unwrap();
            assert!(conservation_holds(&g));
        }
        assert_eq!(g.phase(), Phase::RoundOver);
        assert_eq!(g.claimed_count(), HalfSuit::COUNT);
        assert_eq!(g.cards_in_hands(), 0);
        assert_eq!(g.score(Team::A) + g.score(Team::B), HalfSuit::COUNT);

        // Terminal: nothing further is legal.
        assert_eq!(g.ask(0, 1, card("Jc")).unwrap_err(), AskError::RoundOver);
        let hs = HalfSuit::new(Suit::Clubs, Half::Low);
        let assignment: HashMap<Card, usize> = hs.cards().iter().map(|&c| (c, 0)).collect();
        assert_eq!(g.declare(0, hs, &assignment).unwrap_err(), DeclareError::RoundOver);
    }

    #[test]
    fn winner_is_strictly_higher_score_or_none_on_tie() {
        let mut g = mk_game();
        assert_eq!(g.winner(), None, "no winner while the round is live");
        g.phase = Phase::RoundOver;
        g.claims = [
            Some(Team::A),
            Some(Team::A),
            Some(Team::A),
            Some(Team::A),
            Some(Team::A),
            Some(Team::B),
            Some(Team::B),
            Some(Team::B),
        ];
        assert_eq!(g.winner(), Some(Team::A));
        g.claims = [
            Some(Team::A),
            Some(Team::A),
            Some(Team::A),
            Some(Team::A),
            Some(Team::B),
            Some(Team::B),
            Some(Team::B),
            Some(Team::B),
        ];
        assert_eq!(g.winner(), None, "tie is a valid terminal outcome");
    }

    #[test]
    fn emptied_current_seat_passes_the_turn_on() {
        let mut g = mk_game();
        // Strip seat 0 down to exactly low clubs, parking 9c/10c with seat 2.
        let nine = card("9c");
        let ten = card("10c");
        g.players[0].hand.retain(|&c| c != nine && c != ten);
        g.players[2].hand.push(nine);
        g.players[2].hand.push(ten);

        let hs = HalfSuit::new(Suit::Clubs, Half::Low);
        let assignment: HashMap<Card, usize> = hs.cards().iter().map(|&c| (c, 0)).collect();
        g.declare(0, hs, &assignment).unwrap();
        assert!(g.players()[0].hand().is_empty());
        assert_eq!(g.current(), 1, "turn moved past the emptied seat");
    }

    #[test]
    fn seeded_games_are_reproducible() {
        let config = GameConfig { player_count: 6, rng_seed: Some(99) };
        let g1 = Game::new(&config).unwrap();
        let g2 = Game::new(&config).unwrap();
        assert_eq!(g1.players(), g2.players());
        assert_eq!(g1.seed(), Some(99));
    }

    #[test]
    fn unseeded_games_record_their_effective_seed() {
        let g = Game::new(&GameConfig::default()).unwrap();
        assert!(g.seed().is_some());
        assert_eq!(g.cards_in_hands(), DECK_SIZE);
    }
}
