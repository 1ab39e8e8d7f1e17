use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use literature_rs::agents::{AgentTable, RandomBot};
use literature_rs::dealer::deal;
use literature_rs::deck::Deck;
use literature_rs::engine::Match;
use literature_rs::game::GameConfig;

fn bench_deal(c: &mut Criterion) {
    let deck = Deck::literature();
    let mut g = c.benchmark_group("deal");
    for players in [2usize, 6, 12] {
        g.bench_with_input(BenchmarkId::from_parameter(players), &players, |b, &n| {
            b.iter(|| deal(black_box(&deck), n, black_box(42)).unwrap())
        });
    }
    g.finish();
}

fn bench_bot_playout(c: &mut Criterion) {
    c.bench_function("bot_playout_200_intents", |b| {
        b.iter(|| {
            let config = GameConfig { player_count: 6, rng_seed: Some(7) };
            let mut m = Match::start(&config).unwrap();
            let mut table = AgentTable::for_seats(6);
            for seat in 0..6 {
                table.set_agent(seat, Some(Box::new(RandomBot::seeded(seat as u64))));
            }
            for _ in 0..200 {
                if table.step(&mut m).unwrap().is_none() {
                    break;
                }
            }
            black_box(m.spectator_snapshot())
        })
    });
}

criterion_group!(benches, bench_deal, bench_bot_playout);
criterion_main!(benches);
