use rand::Rng;

use crate::fixture::{Fixture, FixtureResult};

/// Sample an outcome for an unplayed fixture.
///
/// Pure coin flip: either side wins with equal probability, independently
/// of every other fixture. No skill model, home advantage, or correlation
/// between matches. A fixture pre-flagged as no-result keeps that outcome
/// instead of being flipped.
///
/// The random source is caller-supplied so a seeded generator makes whole
/// simulation runs reproducible.
pub fn sample_outcome<R: Rng>(fixture: &Fixture, rng: &mut R) -> FixtureResult {
    if matches!(fixture.result, Some(FixtureResult::NoResult)) {
        return FixtureResult::NoResult;
    }

    if rng.gen::<f64>() < 0.5 {
        FixtureResult::Winner(fixture.team1.clone())
    } else {
        FixtureResult::Winner(fixture.team2.clone())
    }
}
