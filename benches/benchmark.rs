use criterion::{black_box, criterion_group, criterion_main, Criterion};
use playoff_core::constants::DEFAULT_TRIALS;
use playoff_core::engine::{run_simulations, run_simulations_parallel};
use playoff_core::fixture::Fixture;
use playoff_core::league::LeagueState;
use playoff_core::query::{rank_distribution, rank_probability};
use playoff_core::team::Team;

/// Ten fresh teams with a full single round-robin still to play
/// (45 remaining fixtures).
fn create_10_team_league() -> LeagueState {
    let teams: Vec<Team> = (0..10)
        .map(|i| Team::new(format!("t{}", i), format!("Team {}", i), format!("T{}", i)))
        .collect();

    let mut fixtures = Vec::new();
    let mut number = 0;
    for i in 0..10 {
        for j in (i + 1)..10 {
            number += 1;
            fixtures.push(Fixture::upcoming(number, format!("t{}", i), format!("t{}", j)));
        }
    }

    LeagueState::new(teams, Vec::new(), fixtures).unwrap()
}

fn bench_simulation(c: &mut Criterion) {
    let league = create_10_team_league();

    c.bench_function("run_simulations_1000", |b| {
        b.iter(|| run_simulations(black_box(&league), 1000, Some(42)))
    });

    c.bench_function("run_simulations_parallel_1000", |b| {
        b.iter(|| run_simulations_parallel(black_box(&league), 1000, Some(42)))
    });
}

fn bench_queries(c: &mut Criterion) {
    let league = create_10_team_league();
    let scenarios = run_simulations(&league, DEFAULT_TRIALS, Some(42)).unwrap();

    c.bench_function("rank_probability_10k_scenarios", |b| {
        b.iter(|| rank_probability(black_box(&scenarios), "t0", 4))
    });

    c.bench_function("rank_distribution_10k_scenarios", |b| {
        b.iter(|| rank_distribution(black_box(&scenarios), "t0"))
    });
}

criterion_group!(benches, bench_simulation, bench_queries);
criterion_main!(benches);
