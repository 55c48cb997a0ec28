use std::sync::atomic::{AtomicBool, Ordering};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use crate::error::SimError;
use crate::fixture::Fixture;
use crate::league::LeagueState;
use crate::sampler::sample_outcome;
use crate::standings::{apply_outcome, backfill_to_season_length, Standing};

/// One complete simulated realization of the rest of the season: every
/// remaining fixture resolved, plus the resulting final table.
///
/// Immutable once produced; trials never share one.
#[derive(Clone, Debug, PartialEq)]
pub struct Scenario {
    /// The remaining fixtures with their sampled outcomes, in sequence order.
    pub fixtures: Vec<Fixture>,

    /// Final standings after backfill, in roster order (unranked).
    pub standings: Vec<Standing>,
}

/// Run `n_trials` independent Monte Carlo trials sequentially.
///
/// Each trial starts from a fresh copy of the authoritative standings,
/// resolves the remaining fixtures in ascending sequence order, backfills
/// every record to the season length, and packages the result as one
/// [`Scenario`]. With a fixed `seed` the output is reproducible; `None`
/// seeds from entropy.
pub fn run_simulations(
    league: &LeagueState,
    n_trials: usize,
    seed: Option<u64>,
) -> Result<Vec<Scenario>, SimError> {
    run_simulations_with(league, n_trials, seed, false, None)
}

/// Same contract as [`run_simulations`], with trials spread across the
/// rayon thread pool. Output order is by trial index, not completion
/// order, so a fixed seed yields the same scenario set as the sequential
/// path.
pub fn run_simulations_parallel(
    league: &LeagueState,
    n_trials: usize,
    seed: Option<u64>,
) -> Result<Vec<Scenario>, SimError> {
    run_simulations_with(league, n_trials, seed, true, None)
}

/// Full-control entry point: choose the execution path and optionally pass
/// a cancellation flag. Trials picked up after the flag is set are skipped
/// and the scenarios completed so far are returned.
///
/// A trial that fails mid-flight (a standings snapshot missing a
/// participant, unreachable for validated inputs) is logged and dropped;
/// the batch continues and the returned set holds only completed trials.
pub fn run_simulations_with(
    league: &LeagueState,
    n_trials: usize,
    seed: Option<u64>,
    parallel: bool,
    cancel: Option<&AtomicBool>,
) -> Result<Vec<Scenario>, SimError> {
    let seeds = trial_seeds(n_trials, seed)?;
    let cancelled = || cancel.map_or(false, |flag| flag.load(Ordering::Relaxed));

    let scenarios: Vec<Scenario> = if parallel {
        seeds
            .par_iter()
            .filter(|_| !cancelled())
            .filter_map(|&trial_seed| run_trial_logged(league, trial_seed))
            .collect()
    } else {
        seeds
            .iter()
            .take_while(|_| !cancelled())
            .filter_map(|&trial_seed| run_trial_logged(league, trial_seed))
            .collect()
    };

    tracing::debug!(
        requested = n_trials,
        completed = scenarios.len(),
        "simulation batch finished"
    );
    Ok(scenarios)
}

/// Draw one sub-seed per trial from a master stream so trials are
/// independent and both execution paths see identical streams.
fn trial_seeds(n_trials: usize, seed: Option<u64>) -> Result<Vec<u64>, SimError> {
    if n_trials == 0 {
        return Err(SimError::InvalidParameter {
            name: "n_trials",
            value: 0,
        });
    }

    let mut master = match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    };
    Ok((0..n_trials).map(|_| master.gen::<u64>()).collect())
}

fn run_trial_logged(league: &LeagueState, trial_seed: u64) -> Option<Scenario> {
    match run_trial(league, trial_seed) {
        Ok(scenario) => Some(scenario),
        Err(err) => {
            tracing::error!(%err, trial_seed, "trial aborted");
            None
        }
    }
}

fn run_trial(league: &LeagueState, trial_seed: u64) -> Result<Scenario, SimError> {
    let mut rng = ChaCha8Rng::seed_from_u64(trial_seed);
    let mut table = league.standings().to_vec();
    let mut resolved = Vec::new();

    for fixture in league.remaining_fixtures() {
        let result = sample_outcome(fixture, &mut rng);
        table = apply_outcome(&table, fixture, &result)?;
        resolved.push(fixture.resolved(result));
    }

    backfill_to_season_length(&mut table);

    Ok(Scenario {
        fixtures: resolved,
        standings: table,
    })
}
