/// Simulation and validation errors.
///
/// Data-integrity variants are raised by [`crate::league::LeagueState::new`]
/// and are fatal: the engine refuses to simulate from inconsistent inputs.
/// `MissingTeam` should be unreachable after validation; when it does occur
/// mid-trial, the engine aborts only that trial.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimError {
    #[error("fixture {fixture} references unknown team {team_id}")]
    UnknownTeam { fixture: u32, team_id: String },

    #[error("fixture {fixture} pairs a team against itself")]
    SelfPairing { fixture: u32 },

    #[error("fixture {fixture} records winner {team_id} who is not a participant")]
    InvalidWinner { fixture: u32, team_id: String },

    #[error("fixture {fixture} is not completed but records winner {team_id}")]
    WinnerOnUnplayed { fixture: u32, team_id: String },

    #[error("duplicate team id {team_id} in roster")]
    DuplicateTeam { team_id: String },

    #[error("duplicate standing row for team {team_id}")]
    DuplicateStanding { team_id: String },

    #[error("standing for team {team_id} is inconsistent: {reason}")]
    InconsistentStanding { team_id: String, reason: String },

    #[error("invalid parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: i64 },

    #[error("team {team_id} missing from standings snapshot")]
    MissingTeam { team_id: String },
}
