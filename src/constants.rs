/// Matches each team plays in a full season.
///
/// Baked into the end-of-season backfill: any team short of this count has
/// the shortfall recorded as losses. A future league format change would
/// want this (and the backfill policy) parameterized per league.
pub const SEASON_MATCHES: u32 = 14;

/// Points awarded for a win.
pub const WIN_POINTS: u32 = 2;

/// Points awarded to each side of a no-result.
pub const NO_RESULT_POINTS: u32 = 1;

/// Trial count used by callers that do not choose one.
pub const DEFAULT_TRIALS: usize = 10_000;

/// Number of example scenarios returned for a query by default.
pub const DEFAULT_SAMPLE_LIMIT: usize = 3;

/// Lowest rank that still qualifies for the playoffs.
pub const PLAYOFF_CUTOFF: usize = 4;
