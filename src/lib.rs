//! Playoff Core - Monte Carlo scenario simulation for round-robin league
//! standings.
//!
//! Given a partially played season (team roster, current points table,
//! fixture list), the engine repeatedly samples outcomes for the remaining
//! fixtures, recomputes the final table for each trial, and aggregates the
//! resulting scenario set into rank probabilities and example scenarios.
//!
//! Inputs are validated once into a read-only [`LeagueState`]; every trial
//! works on its own copy of the standings, so trials are independent and
//! can run in parallel. All randomness flows through seedable generators
//! for reproducible runs.

pub mod constants;
pub mod engine;
pub mod error;
pub mod fixture;
pub mod league;
pub mod query;
pub mod sampler;
pub mod standings;
pub mod team;

pub use constants::{
    DEFAULT_SAMPLE_LIMIT, DEFAULT_TRIALS, NO_RESULT_POINTS, PLAYOFF_CUTOFF, SEASON_MATCHES,
    WIN_POINTS,
};
pub use engine::{run_simulations, run_simulations_parallel, run_simulations_with, Scenario};
pub use error::SimError;
pub use fixture::{Fixture, FixtureResult};
pub use league::LeagueState;
pub use query::{
    best_achievable_rank, default_sample_scenarios, rank_distribution, rank_probability,
    ranked_standings, sample_scenarios,
};
pub use sampler::sample_outcome;
pub use standings::{apply_outcome, backfill_to_season_length, sorted_by_points_and_nrr, Standing};
pub use team::Team;
