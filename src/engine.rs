// Match controller and intent/result boundary. Frontends and transports
// drive a match exclusively through `Match`: they submit intents and read
// immutable snapshots, never the engine internals. `Match` holds no rule
// logic of its own.

use crate::cards::{Card, HalfSuit};
use crate::dealer::ConfigError;
use crate::game::{
    AskError, AskOutcome, DeclareError, DeclareOutcome, Game, GameConfig, Phase, Team,
};
use std::collections::HashMap;
use std::fmt;

/// A player's requested transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Ask { asker: usize, target: usize, card: Card },
    Declare { declarer: usize, half_suit: HalfSuit, assignment: HashMap<Card, usize> },
}

/// Why a submitted intent was rejected. Rejections never mutate the match.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EngineError {
    #[error("illegal ask: {0}")]
    Ask(#[from] AskError),
    #[error("illegal declaration: {0}")]
    Declare(#[from] DeclareError),
}

/// What an accepted intent did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Asked { asker: usize, target: usize, card: Card, outcome: AskOutcome },
    Declared { declarer: usize, half_suit: HalfSuit, outcome: DeclareOutcome },
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Asked { asker, target, card, outcome } => {
                write!(f, "seat {asker} asks seat {target} for {card}: {outcome}")
            }
            Event::Declared { declarer, half_suit, outcome } => {
                let verdict = if outcome.correct { "correct" } else { "wrong" };
                write!(
                    f,
                    "seat {declarer} declares '{half_suit}': {verdict}, claimed by team {}",
                    outcome.winner
                )
            }
        }
    }
}

/// An accepted transition: the event, any score movement, and the phase the
/// match is in afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Transition {
    pub event: Event,
    pub score_delta: Option<(Team, usize)>,
    pub phase: Phase,
}

/// Public facts about one seat. Hand contents stay private to their owner.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct SeatInfo {
    pub name: String,
    pub team: Team,
    pub hand_size: usize,
}

/// Immutable read model of the match, taken atomically between transitions.
///
/// A snapshot carries the viewer's own full hand and only hand *sizes* for
/// everyone else; spectator snapshots carry no hand at all.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Snapshot {
    pub phase: Phase,
    /// Seat whose turn it is to ask.
    pub current: usize,
    /// The observing seat, or `None` for a spectator.
    pub viewer: Option<usize>,
    /// The viewer's own hand; empty for spectators.
    pub hand: Vec<Card>,
    pub seats: Vec<SeatInfo>,
    /// Claim status per half-suit, in [`HalfSuit::ALL`] order.
    pub claims: Vec<(HalfSuit, Option<Team>)>,
    pub scores: [usize; 2],
    /// Seed the deal was shuffled with; `None` for predetermined hands.
    pub seed: Option<u64>,
}

impl Snapshot {
    pub fn score(&self, team: Team) -> usize {
        match team {
            Team::A => self.scores[0],
            Team::B => self.scores[1],
        }
    }

    /// Conservation check over public facts: cards in hands plus claimed
    /// half-suit cards always account for the whole deck.
    pub fn cards_accounted(&self) -> usize {
        let in_hands: usize = self.seats.iter().map(|s| s.hand_size).sum();
        let claimed = self.claims.iter().filter(|(_, c)| c.is_some()).count();
        in_hands + claimed * HalfSuit::SIZE
    }
}

/// One full deal-to-resolution match.
///
/// Intents are processed strictly sequentially through `&mut self`; every
/// transition either applies fully or is rejected untouched, and snapshots
/// are owned copies, so no reader ever observes a half-applied transition.
///
/// ```
/// use literature_rs::engine::{Intent, Match};
/// use literature_rs::game::GameConfig;
///
/// let config = GameConfig { player_count: 6, rng_seed: Some(7) };
/// let m = Match::start(&config).unwrap();
/// let view = m.snapshot_for(0).unwrap();
/// assert_eq!(view.hand.len(), 8);
/// assert_eq!(view.seats.len(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct Match {
    game: Game,
}

impl Match {
    /// Deal and start a match per `config`.
    pub fn start(config: &GameConfig) -> Result<Self, ConfigError> {
        Ok(Self { game: Game::new(config)? })
    }

    /// Start from a predetermined deal (see [`Game::with_hands`]).
    pub fn with_hands(hands: Vec<Vec<Card>>) -> Result<Self, ConfigError> {
        Ok(Self { game: Game::with_hands(hands)? })
    }

    /// Apply one intent. The only mutation path into the match.
    pub fn submit(&mut self, intent: Intent) -> Result<Transition, EngineError> {
        match intent {
            Intent::Ask { asker, target, card } => {
                let outcome = self.game.ask(asker, target, card)?;
                Ok(Transition {
                    event: Event::Asked { asker, target, card, outcome },
                    score_delta: None,
                    phase: self.game.phase(),
                })
            }
            Intent::Declare { declarer, half_suit, assignment } => {
                let outcome = self.game.declare(declarer, half_suit, &assignment)?;
                Ok(Transition {
                    event: Event::Declared { declarer, half_suit, outcome },
                    score_delta: Some((outcome.winner, 1)),
                    phase: self.game.phase(),
                })
            }
        }
    }

    /// Snapshot as seen by `viewer`, or `None` for an unknown seat.
    pub fn snapshot_for(&self, viewer: usize) -> Option<Snapshot> {
        if viewer >= self.game.player_count() {
            return None;
        }
        Some(self.snapshot(Some(viewer)))
    }

    /// Snapshot with no private hand, e.g. for broadcasting to spectators.
    pub fn spectator_snapshot(&self) -> Snapshot {
        self.snapshot(None)
    }

    /// Seat whose turn it is to ask.
    pub fn current(&self) -> usize {
        self.game.current()
    }

    pub fn phase(&self) -> Phase {
        self.game.phase()
    }

    /// See [`Game::winner`].
    pub fn winner(&self) -> Option<Team> {
        self.game.winner()
    }

    fn snapshot(&self, viewer: Option<usize>) -> Snapshot {
        let hand = viewer
            .map(|v| self.game.players()[v].hand().to_vec())
            .unwrap_or_default();
        Snapshot {
            phase: self.game.phase(),
            current: self.game.current(),
            viewer,
            hand,
            seats: self
                .game
                .players()
                .iter()
                .map(|p| SeatInfo {
                    name: p.name().to_string(),
                    team: p.team(),
                    hand_size: p.hand_size(),
                })
                .collect(),
            claims: HalfSuit::ALL.iter().map(|&hs| (hs, self.game.claim(hs))).collect(),
            scores: [self.game.score(Team::A), self.game.score(Team::B)],
            seed: self.game.seed(),
        }
    }
}
