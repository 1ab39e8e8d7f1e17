use literature_rs::agents::{AgentTable, RandomBot};
use literature_rs::engine::Match;
use literature_rs::game::{GameConfig, Phase, Team};

// Random play is not guaranteed to resolve every half-suit quickly; cap the
// playout so an unlucky run still terminates.
const MAX_INTENTS: usize = 10_000;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let seed: u64 = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 42,
    };

    let config = GameConfig { player_count: 6, rng_seed: Some(seed) };
    let mut m = Match::start(&config)?;
    let mut table = AgentTable::for_seats(config.player_count);
    for seat in 0..config.player_count {
        table.set_agent(seat, Some(Box::new(RandomBot::seeded(seed ^ (seat as u64 + 1)))));
    }

    println!("literature-rs {} -- seed {seed}", literature_rs::VERSION);
    let mut intents = 0;
    while intents < MAX_INTENTS {
        match table.step(&mut m)? {
            Some(transition) => {
                intents += 1;
                println!("[{intents:>4}] {}", transition.event);
                if matches!(transition.phase, Phase::RoundOver) {
                    break;
                }
            }
            None => break,
        }
    }

    let end = m.spectator_snapshot();
    println!(
        "after {intents} intents: team A {} -- team B {} ({:?})",
        end.score(Team::A),
        end.score(Team::B),
        end.phase
    );
    match m.winner() {
        Some(team) => println!("team {team} wins"),
        None if matches!(end.phase, Phase::RoundOver) => println!("tied round"),
        None => println!("round unfinished at the intent cap"),
    }
    Ok(())
}
