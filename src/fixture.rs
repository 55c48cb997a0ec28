/// Resolved outcome of a fixture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FixtureResult {
    /// The named team won the match.
    Winner(String),

    /// No winner was determined (abandoned match); both sides receive a
    /// share of the points.
    NoResult,
}

/// A scheduled match between two teams.
///
/// Completed fixtures are fixed inputs whose outcomes are already reflected
/// in the authoritative standings. Uncompleted fixtures are the population
/// the simulator samples over. An uncompleted fixture may carry a
/// [`FixtureResult::NoResult`] pre-flag (e.g. an abandoned match not yet
/// folded into the table); the sampler honors the flag instead of flipping
/// a coin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fixture {
    /// Sequence number; trials resolve remaining fixtures in ascending order.
    pub number: u32,

    /// Team id of the first side.
    pub team1: String,

    /// Team id of the second side.
    pub team2: String,

    /// Whether the match has been played.
    pub completed: bool,

    /// Outcome, when known.
    pub result: Option<FixtureResult>,
}

impl Fixture {
    /// An unplayed fixture with no outcome.
    pub fn upcoming(number: u32, team1: impl Into<String>, team2: impl Into<String>) -> Self {
        Fixture {
            number,
            team1: team1.into(),
            team2: team2.into(),
            completed: false,
            result: None,
        }
    }

    /// A played fixture with its outcome.
    pub fn played(
        number: u32,
        team1: impl Into<String>,
        team2: impl Into<String>,
        result: FixtureResult,
    ) -> Self {
        Fixture {
            number,
            team1: team1.into(),
            team2: team2.into(),
            completed: true,
            result: Some(result),
        }
    }

    /// Whether the given team plays in this fixture.
    pub fn involves(&self, team_id: &str) -> bool {
        self.team1 == team_id || self.team2 == team_id
    }

    /// Copy of this fixture marked completed with the given outcome.
    pub fn resolved(&self, result: FixtureResult) -> Fixture {
        Fixture {
            completed: true,
            result: Some(result),
            ..self.clone()
        }
    }
}
