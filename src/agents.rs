//! Agents: pluggable seat controllers (bots, or frontends queueing intents).
//!
//! An agent sees only its own [`Snapshot`] — its hand, everyone's hand
//! sizes, the claim table — and emits [`Intent`]s, the same boundary any
//! other consumer of the engine gets. `AgentTable` coordinates which agent
//! controls which seat so driver loops stay thin.

use crate::cards::{Card, HalfSuit};
use crate::engine::{EngineError, Intent, Match, Snapshot, Transition};
use crate::game::Phase;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::{HashMap, VecDeque};

/// A seat controller that can act when polled.
pub trait PlayerAgent {
    /// Called with the agent's own view of the match. Returning `None`
    /// means the agent has nothing to do right now.
    fn choose(&mut self, view: &Snapshot) -> Option<Intent>;
}

/// Buffers intents handed in by a frontend and plays them when polled.
#[derive(Debug, Default)]
pub struct QueuedAgent {
    pending: VecDeque<Intent>,
}

impl QueuedAgent {
    pub fn new() -> Self {
        Self { pending: VecDeque::new() }
    }

    pub fn push(&mut self, intent: Intent) {
        self.pending.push_back(intent);
    }
}

impl PlayerAgent for QueuedAgent {
    fn choose(&mut self, _view: &Snapshot) -> Option<Intent> {
        self.pending.pop_front()
    }
}

/// A bot that plays uniformly random legal moves.
///
/// It declares a half-suit it holds outright, asks a random opposing seat
/// for a random missing card of a half-suit it holds into, and when no ask
/// is possible (every opponent is out of cards) blind-declares within its
/// own team rather than stall the round.
#[derive(Debug)]
pub struct RandomBot {
    rng: ChaCha8Rng,
}

impl RandomBot {
    pub fn new() -> Self {
        Self::seeded(rand::rng().random())
    }

    /// Deterministic decisions for reproducible playouts.
    pub fn seeded(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }
}

impl Default for RandomBot {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerAgent for RandomBot {
    fn choose(&mut self, view: &Snapshot) -> Option<Intent> {
        if matches!(view.phase, Phase::RoundOver) {
            return None;
        }
        let me = view.viewer?;

        // A half-suit held outright is a guaranteed point.
        for (hs, claim) in &view.claims {
            if claim.is_none() && hs.cards().iter().all(|c| view.hand.contains(c)) {
                let assignment: HashMap<Card, usize> =
                    hs.cards().iter().map(|&c| (c, me)).collect();
                return Some(Intent::Declare { declarer: me, half_suit: *hs, assignment });
            }
        }

        if view.current != me {
            return None;
        }
        let my_team = view.seats[me].team;

        // Cards I may legally ask for: members of half-suits I hold into,
        // minus what I already hold. Held cards always sit in open
        // half-suits, so no claim filtering is needed on the hand side.
        let mut wanted: Vec<Card> = Vec::new();
        for (hs, claim) in &view.claims {
            if claim.is_some() {
                continue;
            }
            if !view.hand.iter().any(|c| c.half_suit() == Some(*hs)) {
                continue;
            }
            wanted.extend(hs.cards().iter().copied().filter(|c| !view.hand.contains(c)));
        }
        let targets: Vec<usize> = view
            .seats
            .iter()
            .enumerate()
            .filter(|(_, s)| s.team != my_team && s.hand_size > 0)
            .map(|(i, _)| i)
            .collect();

        if !wanted.is_empty() && !targets.is_empty() {
            let card = wanted[self.rng.random_range(0..wanted.len())];
            let target = targets[self.rng.random_range(0..targets.len())];
            return Some(Intent::Ask { asker: me, target, card });
        }

        // No legal ask left: blind-declare an open half-suit my hand
        // reaches, guessing the missing cards among my teammates.
        let reachable: Vec<HalfSuit> = view
            .claims
            .iter()
            .filter(|(hs, claim)| {
                claim.is_none() && view.hand.iter().any(|c| c.half_suit() == Some(*hs))
            })
            .map(|(hs, _)| *hs)
            .collect();
        if reachable.is_empty() {
            return None;
        }
        let hs = reachable[self.rng.random_range(0..reachable.len())];
        let teammates: Vec<usize> = view
            .seats
            .iter()
            .enumerate()
            .filter(|(_, s)| s.team == my_team)
            .map(|(i, _)| i)
            .collect();
        let assignment: HashMap<Card, usize> = hs
            .cards()
            .iter()
            .map(|&c| {
                if view.hand.contains(&c) {
                    (c, me)
                } else {
                    (c, teammates[self.rng.random_range(0..teammates.len())])
                }
            })
            .collect();
        Some(Intent::Declare { declarer: me, half_suit: hs, assignment })
    }
}

/// Manages a set of optional agents, one per seat, and polls the agent at
/// the seat holding the turn.
#[derive(Default)]
pub struct AgentTable {
    seats: Vec<Option<Box<dyn PlayerAgent>>>,
}

impl AgentTable {
    /// Create a table with `n` seats, all empty.
    pub fn for_seats(n: usize) -> Self {
        let mut seats = Vec::with_capacity(n);
        for _ in 0..n {
            seats.push(None);
        }
        Self { seats }
    }

    /// Assign an agent to a seat (or remove when `None`).
    pub fn set_agent(&mut self, seat: usize, agent: Option<Box<dyn PlayerAgent>>) {
        if seat >= self.seats.len() {
            self.seats.resize_with(seat + 1, || None);
        }
        self.seats[seat] = agent;
    }

    pub fn has_agent(&self, seat: usize) -> bool {
        self.seats.get(seat).map(|a| a.is_some()).unwrap_or(false)
    }

    pub fn any_agents(&self) -> bool {
        self.seats.iter().any(|a| a.is_some())
    }

    /// Poll the agent at the seat holding the turn, submitting whatever it
    /// chooses. `Ok(None)` means no agent acted this step.
    pub fn step(&mut self, m: &mut Match) -> Result<Option<Transition>, EngineError> {
        if matches!(m.phase(), Phase::RoundOver) {
            return Ok(None);
        }
        let seat = m.current();
        if let Some(Some(agent)) = self.seats.get_mut(seat) {
            if let Some(view) = m.snapshot_for(seat) {
                if let Some(intent) = agent.choose(&view) {
                    return m.submit(intent).map(Some);
                }
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Half, Suit};
    use crate::deck::Deck;
    use crate::game::AskOutcome;

    fn mk_match() -> Match {
        let hands = Deck::literature().cards().chunks(8).map(|h| h.to_vec()).collect();
        Match::with_hands(hands).unwrap()
    }

    #[test]
    fn bot_declares_a_half_suit_it_holds_outright() {
        let m = mk_match();
        // Seat 0's hand covers all of low clubs in the ordered deal.
        let view = m.snapshot_for(0).unwrap();
        let mut bot = RandomBot::seeded(1);
        let intent = bot.choose(&view).unwrap();
        match intent {
            Intent::Declare { declarer, half_suit, assignment } => {
                assert_eq!(declarer, 0);
                assert_eq!(half_suit, HalfSuit::new(Suit::Clubs, Half::Low));
                assert!(assignment.values().all(|&s| s == 0));
            }
            other => panic!("expected a declaration, got {other:?}"),
        }
    }

    #[test]
    fn bot_stays_quiet_off_turn_with_nothing_to_declare() {
        let m = mk_match();
        // Seat 1 holds no complete half-suit and it is seat 0's turn.
        let view = m.snapshot_for(1).unwrap();
        let mut bot = RandomBot::seeded(1);
        assert!(bot.choose(&view).is_none());
    }

    #[test]
    fn bot_playout_produces_only_legal_intents() {
        let config = crate::game::GameConfig { player_count: 6, rng_seed: Some(11) };
        let mut m = Match::start(&config).unwrap();
        let mut table = AgentTable::for_seats(6);
        for seat in 0..6 {
            table.set_agent(seat, Some(Box::new(RandomBot::seeded(100 + seat as u64))));
        }
        for _ in 0..500 {
            let stepped = table.step(&mut m).expect("bots only submit legal intents");
            if stepped.is_none() {
                break;
            }
            assert_eq!(m.spectator_snapshot().cards_accounted(), 48);
        }
    }

    #[test]
    fn queued_agent_plays_pushed_intents_in_order() {
        let mut m = mk_match();
        let mut table = AgentTable::for_seats(6);
        let mut seat0 = QueuedAgent::new();
        seat0.push(Intent::Ask { asker: 0, target: 1, card: "Jc".parse().unwrap() });
        table.set_agent(0, Some(Box::new(seat0)));

        let t = table.step(&mut m).unwrap().expect("queued intent plays");
        match t.event {
            crate::engine::Event::Asked { outcome, .. } => assert_eq!(outcome, AskOutcome::Taken),
            other => panic!("expected an ask event, got {other:?}"),
        }
        // Queue drained: next poll is a no-op.
        assert!(table.step(&mut m).unwrap().is_none());
    }

    #[test]
    fn table_reports_agent_occupancy() {
        let mut table = AgentTable::for_seats(2);
        assert!(!table.any_agents());
        table.set_agent(1, Some(Box::new(RandomBot::seeded(5))));
        assert!(table.has_agent(1));
        assert!(!table.has_agent(0));
        assert!(table.any_agents());
    }
}
