//! End-to-end checks over the full simulate-then-query pipeline.

use std::sync::atomic::{AtomicBool, Ordering};

use playoff_core::{
    best_achievable_rank, rank_distribution, rank_probability, run_simulations,
    run_simulations_parallel, run_simulations_with, sample_scenarios, Fixture, FixtureResult,
    LeagueState, SimError, Standing, Team, PLAYOFF_CUTOFF, SEASON_MATCHES,
};

fn standing(team_id: &str, wins: u32, losses: u32) -> Standing {
    let mut row = Standing::zeroed(team_id);
    row.wins = wins;
    row.losses = losses;
    row.matches = wins + losses;
    row.points = 2 * wins;
    row
}

/// Two fresh teams with a single fixture left between them.
fn two_team_league() -> LeagueState {
    let teams = vec![
        Team::new("a", "Team A", "A"),
        Team::new("b", "Team B", "B"),
    ];
    let fixtures = vec![Fixture::upcoming(1, "a", "b")];
    LeagueState::new(teams, Vec::new(), fixtures).unwrap()
}

fn mid_season_league() -> LeagueState {
    let teams = vec![
        Team::new("csk", "Chennai Super Kings", "CSK"),
        Team::new("mi", "Mumbai Indians", "MI"),
        Team::new("rcb", "Royal Challengers Bengaluru", "RCB"),
        Team::new("kkr", "Kolkata Knight Riders", "KKR"),
    ];
    let standings = vec![
        standing("csk", 7, 3),
        standing("mi", 6, 4),
        standing("rcb", 4, 6),
        standing("kkr", 3, 7),
    ];
    let fixtures = vec![
        Fixture::upcoming(41, "csk", "mi"),
        Fixture::upcoming(42, "rcb", "kkr"),
        Fixture::upcoming(43, "csk", "rcb"),
        Fixture::upcoming(44, "mi", "kkr"),
        Fixture::upcoming(45, "csk", "kkr"),
        Fixture::upcoming(46, "mi", "rcb"),
    ];
    LeagueState::new(teams, standings, fixtures).unwrap()
}

#[test]
fn two_team_coin_flip_produces_the_two_expected_tables() {
    let league = two_team_league();
    let scenarios = run_simulations(&league, 1000, Some(2025)).unwrap();
    assert_eq!(scenarios.len(), 1000);

    let mut a_wins = 0;
    let mut b_wins = 0;
    for scenario in &scenarios {
        let a = scenario.standings.iter().find(|s| s.team_id == "a").unwrap();
        let b = scenario.standings.iter().find(|s| s.team_id == "b").unwrap();

        // Backfill closes both records at the season length.
        assert_eq!(a.matches, SEASON_MATCHES);
        assert_eq!(b.matches, SEASON_MATCHES);

        match scenario.fixtures[0].result.as_ref().unwrap() {
            FixtureResult::Winner(id) if id == "a" => {
                assert_eq!((a.wins, a.points), (1, 2));
                assert_eq!((b.wins, b.points), (0, 0));
                assert_eq!(b.losses, SEASON_MATCHES);
                a_wins += 1;
            }
            FixtureResult::Winner(id) if id == "b" => {
                assert_eq!((b.wins, b.points), (1, 2));
                assert_eq!((a.wins, a.points), (0, 0));
                assert_eq!(a.losses, SEASON_MATCHES);
                b_wins += 1;
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    assert_eq!(a_wins + b_wins, 1000);
    // 50/50 within sampling noise at 1000 trials.
    assert!((450..=550).contains(&a_wins), "a won {} of 1000", a_wins);
}

#[test]
fn seeded_runs_are_reproducible_across_both_paths() {
    let league = mid_season_league();

    let first = run_simulations(&league, 500, Some(42)).unwrap();
    let second = run_simulations(&league, 500, Some(42)).unwrap();
    let parallel = run_simulations_parallel(&league, 500, Some(42)).unwrap();

    assert_eq!(first, second);
    assert_eq!(first, parallel);
}

#[test]
fn rank_distribution_covers_every_scenario_once() {
    let league = mid_season_league();
    let scenarios = run_simulations(&league, 2000, Some(7)).unwrap();

    for team_id in ["csk", "mi", "rcb", "kkr"] {
        let dist = rank_distribution(&scenarios, team_id);
        let total: f64 = dist.iter().sum();
        assert!(
            (total - 1.0).abs() < 1e-9,
            "{} distribution sums to {}",
            team_id,
            total
        );

        // Per-rank probabilities agree with the pointwise query.
        for (idx, &p) in dist.iter().enumerate() {
            assert_eq!(p, rank_probability(&scenarios, team_id, idx + 1).unwrap());
        }
    }
}

#[test]
fn sample_scenarios_agree_with_the_probability_query() {
    let league = mid_season_league();
    let scenarios = run_simulations(&league, 2000, Some(11)).unwrap();

    let p = rank_probability(&scenarios, "rcb", 1).unwrap();
    let samples = sample_scenarios(&scenarios, "rcb", 1, 3).unwrap();

    if p > 0.0 {
        assert!(!samples.is_empty());
        assert!(samples.len() <= 3);
    } else {
        assert!(samples.is_empty());
    }
}

#[test]
fn playoff_qualification_mass_sums_to_the_cutoff() {
    // Six fresh teams, full single round-robin: every scenario seats
    // exactly PLAYOFF_CUTOFF teams inside the cutoff, so those
    // probabilities must account for exactly that many seats in total.
    let ids = ["a", "b", "c", "d", "e", "f"];
    let teams: Vec<Team> = ids
        .iter()
        .map(|id| Team::new(*id, format!("Team {}", id.to_uppercase()), id.to_uppercase()))
        .collect();
    let mut fixtures = Vec::new();
    let mut number = 0;
    for i in 0..ids.len() {
        for j in (i + 1)..ids.len() {
            number += 1;
            fixtures.push(Fixture::upcoming(number, ids[i], ids[j]));
        }
    }
    let league = LeagueState::new(teams, Vec::new(), fixtures).unwrap();
    let scenarios = run_simulations(&league, 2000, Some(19)).unwrap();

    let mut seats = 0.0;
    for team_id in ids {
        let dist = rank_distribution(&scenarios, team_id);
        let qualify: f64 = dist.iter().take(PLAYOFF_CUTOFF).sum();
        assert!((0.0..=1.0 + 1e-9).contains(&qualify));
        seats += qualify;
    }
    assert!((seats - PLAYOFF_CUTOFF as f64).abs() < 1e-9);
}

#[test]
fn clinched_leader_always_best_rank_one() {
    // csk has 20 points; nobody else can exceed 8 even winning out.
    let teams = vec![
        Team::new("csk", "Chennai Super Kings", "CSK"),
        Team::new("mi", "Mumbai Indians", "MI"),
        Team::new("rcb", "Royal Challengers Bengaluru", "RCB"),
    ];
    let standings = vec![
        standing("csk", 10, 0),
        standing("mi", 3, 7),
        standing("rcb", 2, 8),
    ];
    let fixtures = vec![Fixture::upcoming(31, "mi", "rcb")];
    let league = LeagueState::new(teams, standings, fixtures).unwrap();

    let leader_points = league.standing("csk").unwrap().points;
    for other in ["mi", "rcb"] {
        assert!(league.max_possible_points(other).unwrap() < leader_points);
    }

    let scenarios = run_simulations(&league, 500, Some(77)).unwrap();
    assert_eq!(best_achievable_rank(&scenarios, "csk"), Some(1));
    assert_eq!(rank_probability(&scenarios, "csk", 1).unwrap(), 1.0);
}

#[test]
fn invalid_trial_count_is_an_error_not_an_empty_set() {
    let league = two_team_league();
    assert!(matches!(
        run_simulations(&league, 0, Some(1)),
        Err(SimError::InvalidParameter { name: "n_trials", .. })
    ));
}

#[test]
fn cancellation_returns_partial_results() {
    let league = mid_season_league();

    let cancel = AtomicBool::new(false);
    let full = run_simulations_with(&league, 100, Some(5), false, Some(&cancel)).unwrap();
    assert_eq!(full.len(), 100);

    cancel.store(true, Ordering::Relaxed);
    let stopped = run_simulations_with(&league, 100, Some(5), false, Some(&cancel)).unwrap();
    assert!(stopped.is_empty());
}

#[test]
fn preflagged_no_result_survives_simulation() {
    let teams = vec![
        Team::new("a", "Team A", "A"),
        Team::new("b", "Team B", "B"),
        Team::new("c", "Team C", "C"),
    ];
    let mut washed_out = Fixture::upcoming(1, "a", "b");
    washed_out.result = Some(FixtureResult::NoResult);
    let fixtures = vec![washed_out, Fixture::upcoming(2, "a", "c")];
    let league = LeagueState::new(teams, Vec::new(), fixtures).unwrap();

    let scenarios = run_simulations(&league, 100, Some(13)).unwrap();
    for scenario in &scenarios {
        assert_eq!(scenario.fixtures[0].result, Some(FixtureResult::NoResult));
        let b = scenario.standings.iter().find(|s| s.team_id == "b").unwrap();
        assert_eq!(b.no_results, 1);
        assert_eq!(b.points, 1);
        assert_eq!(b.wins, 0);
    }
}
