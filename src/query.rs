use crate::constants::DEFAULT_SAMPLE_LIMIT;
use crate::engine::Scenario;
use crate::error::SimError;
use crate::standings::Standing;

/// A scenario's standings ranked for the simulation/query path: points
/// descending, stable, so equal-points teams keep roster order.
///
/// Net run rate deliberately plays no part here. It is frozen at its
/// pre-simulation value, so breaking simulated-points ties with it would
/// rank hypothetical futures by stale form; the display ordering that does
/// use it is [`crate::standings::sorted_by_points_and_nrr`].
pub fn ranked_standings(scenario: &Scenario) -> Vec<&Standing> {
    let mut rows: Vec<&Standing> = scenario.standings.iter().collect();
    rows.sort_by(|a, b| b.points.cmp(&a.points));
    rows
}

/// Reject ranks outside `1..=team_count`. An empty scenario set only pins
/// the lower bound; the team count is unknowable without a scenario.
fn check_rank(scenarios: &[Scenario], target_rank: usize) -> Result<(), SimError> {
    if target_rank == 0 {
        return Err(SimError::InvalidParameter {
            name: "target_rank",
            value: 0,
        });
    }
    if let Some(first) = scenarios.first() {
        if target_rank > first.standings.len() {
            return Err(SimError::InvalidParameter {
                name: "target_rank",
                value: target_rank as i64,
            });
        }
    }
    Ok(())
}

/// 1-indexed final rank of a team within one scenario.
fn rank_of(scenario: &Scenario, team_id: &str) -> Option<usize> {
    ranked_standings(scenario)
        .iter()
        .position(|row| row.team_id == team_id)
        .map(|idx| idx + 1)
}

/// Probability that `team_id` finishes exactly at `target_rank`, estimated
/// as the fraction of scenarios where it does.
///
/// An out-of-range rank is a caller error; a team absent from the scenario
/// set is reported as probability zero rather than an error, as is an
/// empty (but valid) scenario set.
pub fn rank_probability(
    scenarios: &[Scenario],
    team_id: &str,
    target_rank: usize,
) -> Result<f64, SimError> {
    check_rank(scenarios, target_rank)?;
    if scenarios.is_empty() {
        return Ok(0.0);
    }

    let hits = scenarios
        .iter()
        .filter(|scenario| rank_of(scenario, team_id) == Some(target_rank))
        .count();
    Ok(hits as f64 / scenarios.len() as f64)
}

/// Up to `limit` scenarios where `team_id` finishes exactly at
/// `target_rank`, in generation order. First-found, no reshuffling, so a
/// fixed seed always surfaces the same examples.
///
/// Rank bounds are checked like [`rank_probability`]'s, so an empty `Ok`
/// always means "no scenario matches", never a malformed query.
pub fn sample_scenarios<'a>(
    scenarios: &'a [Scenario],
    team_id: &str,
    target_rank: usize,
    limit: usize,
) -> Result<Vec<&'a Scenario>, SimError> {
    check_rank(scenarios, target_rank)?;
    Ok(scenarios
        .iter()
        .filter(|scenario| rank_of(scenario, team_id) == Some(target_rank))
        .take(limit)
        .collect())
}

/// [`sample_scenarios`] with the default example count.
pub fn default_sample_scenarios<'a>(
    scenarios: &'a [Scenario],
    team_id: &str,
    target_rank: usize,
) -> Result<Vec<&'a Scenario>, SimError> {
    sample_scenarios(scenarios, team_id, target_rank, DEFAULT_SAMPLE_LIMIT)
}

/// Best (minimum) rank `team_id` achieves anywhere in the scenario set.
///
/// Lets a caller report that a requested rank is ever achievable even when
/// its estimated probability came out zero at the sampled trial count.
/// `None` when the team appears in no scenario.
pub fn best_achievable_rank(scenarios: &[Scenario], team_id: &str) -> Option<usize> {
    scenarios
        .iter()
        .filter_map(|scenario| rank_of(scenario, team_id))
        .min()
}

/// Probability of each rank `1..=team_count` for one team, in a single
/// pass over the scenario set. For a rostered team the entries sum to 1.
pub fn rank_distribution(scenarios: &[Scenario], team_id: &str) -> Vec<f64> {
    let team_count = scenarios
        .first()
        .map(|s| s.standings.len())
        .unwrap_or_default();
    let mut counts = vec![0usize; team_count];

    for scenario in scenarios {
        if let Some(rank) = rank_of(scenario, team_id) {
            counts[rank - 1] += 1;
        }
    }

    counts
        .into_iter()
        .map(|c| c as f64 / scenarios.len().max(1) as f64)
        .collect()
}
