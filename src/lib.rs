//! literature-rs: rules engine for the Literature card game
//!
//! Goals:
//! - Authoritative, transport- and UI-agnostic state machine for the
//!   six-player, 48-card variant (8 half-suits of 6 cards)
//! - Deterministic seeded deals for reproducible matches
//! - No panics for invalid input; rejected intents use `Result` and never
//!   mutate the match
//!
//! ## Quick start: run a match through the intent boundary
//! ```
//! use literature_rs::engine::{Intent, Match};
//! use literature_rs::game::{GameConfig, Phase};
//!
//! let config = GameConfig { player_count: 6, rng_seed: Some(7) };
//! let mut m = Match::start(&config).unwrap();
//!
//! let view = m.snapshot_for(0).unwrap();
//! assert_eq!(view.hand.len(), 8);
//! assert_eq!(view.phase, Phase::AwaitingAsk);
//!
//! // Seat 0 asks for a missing card of a half-suit it holds into.
//! let card = view
//!     .hand
//!     .iter()
//!     .filter_map(|c| c.half_suit())
//!     .flat_map(|hs| hs.cards())
//!     .find(|c| !view.hand.contains(c))
//!     .unwrap();
//! let target = (1..6).find(|&s| view.seats[s].team != view.seats[0].team).unwrap();
//! let transition = m.submit(Intent::Ask { asker: 0, target, card }).unwrap();
//! println!("{}", transition.event);
//! ```
//!
//! ## Dev driver
//! Run a seeded bot-vs-bot playout with:
//! ```sh
//! cargo run --bin literature -- 42
//! ```

pub mod agents;
pub mod cards;
pub mod dealer;
pub mod deck;
pub mod engine;
pub mod game;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
