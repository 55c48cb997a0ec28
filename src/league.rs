use std::collections::HashSet;

use crate::constants::WIN_POINTS;
use crate::error::SimError;
use crate::fixture::{Fixture, FixtureResult};
use crate::standings::Standing;
use crate::team::Team;

/// Validated, read-only snapshot of the league: roster, authoritative
/// standings, and the full fixture list.
///
/// Built once from static configuration and shared by every trial. Teams
/// missing a standings row get a zero record (a side that has not played
/// yet). Construction fails on any data-integrity problem: unknown team
/// ids, self-pairings, winners who are not participants, duplicate rows,
/// or standings whose arithmetic does not match the scoring rules.
#[derive(Clone, Debug)]
pub struct LeagueState {
    teams: Vec<Team>,
    standings: Vec<Standing>,
    fixtures: Vec<Fixture>,
}

impl LeagueState {
    pub fn new(
        teams: Vec<Team>,
        standings: Vec<Standing>,
        fixtures: Vec<Fixture>,
    ) -> Result<Self, SimError> {
        let mut roster: HashSet<&str> = HashSet::with_capacity(teams.len());
        for team in &teams {
            if !roster.insert(team.id.as_str()) {
                return Err(SimError::DuplicateTeam {
                    team_id: team.id.clone(),
                });
            }
        }

        let mut seen: HashSet<&str> = HashSet::with_capacity(standings.len());
        for row in &standings {
            if !roster.contains(row.team_id.as_str()) {
                return Err(SimError::InconsistentStanding {
                    team_id: row.team_id.clone(),
                    reason: "team not in roster".to_string(),
                });
            }
            if !seen.insert(row.team_id.as_str()) {
                return Err(SimError::DuplicateStanding {
                    team_id: row.team_id.clone(),
                });
            }
            row.check()?;
        }

        for fixture in &fixtures {
            if fixture.team1 == fixture.team2 {
                return Err(SimError::SelfPairing {
                    fixture: fixture.number,
                });
            }
            for side in [&fixture.team1, &fixture.team2] {
                if !roster.contains(side.as_str()) {
                    return Err(SimError::UnknownTeam {
                        fixture: fixture.number,
                        team_id: side.clone(),
                    });
                }
            }
            if let Some(FixtureResult::Winner(winner_id)) = &fixture.result {
                if !fixture.involves(winner_id) {
                    return Err(SimError::InvalidWinner {
                        fixture: fixture.number,
                        team_id: winner_id.clone(),
                    });
                }
                // A winner on an unplayed fixture would be silently thrown
                // away by the sampler's coin flip; refuse the configuration
                // instead. No-result pre-flags remain legal on unplayed
                // fixtures (abandoned matches awaiting the points table).
                if !fixture.completed {
                    return Err(SimError::WinnerOnUnplayed {
                        fixture: fixture.number,
                        team_id: winner_id.clone(),
                    });
                }
            }
        }

        // Roster-ordered table with zero rows for teams yet to appear, and
        // fixtures in ascending sequence order so trial processing is
        // deterministic.
        let table: Vec<Standing> = teams
            .iter()
            .map(|team| {
                standings
                    .iter()
                    .find(|row| row.team_id == team.id)
                    .cloned()
                    .unwrap_or_else(|| Standing::zeroed(team.id.as_str()))
            })
            .collect();

        let mut fixtures = fixtures;
        fixtures.sort_by_key(|f| f.number);

        Ok(LeagueState {
            teams,
            standings: table,
            fixtures,
        })
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    /// The authoritative points table, in roster order.
    pub fn standings(&self) -> &[Standing] {
        &self.standings
    }

    pub fn fixtures(&self) -> &[Fixture] {
        &self.fixtures
    }

    pub fn team(&self, team_id: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == team_id)
    }

    pub fn standing(&self, team_id: &str) -> Option<&Standing> {
        self.standings.iter().find(|s| s.team_id == team_id)
    }

    /// Fixtures still to be played, in ascending sequence order.
    pub fn remaining_fixtures(&self) -> impl Iterator<Item = &Fixture> {
        self.fixtures.iter().filter(|f| !f.completed)
    }

    pub fn completed_fixtures(&self) -> impl Iterator<Item = &Fixture> {
        self.fixtures.iter().filter(|f| f.completed)
    }

    /// How many pending fixtures involve the given team.
    pub fn remaining_count(&self, team_id: &str) -> usize {
        self.remaining_fixtures()
            .filter(|f| f.involves(team_id))
            .count()
    }

    /// Best final points total the team can still reach: current points
    /// plus a win in every pending fixture. `None` for an unknown team.
    pub fn max_possible_points(&self, team_id: &str) -> Option<u32> {
        let current = self.standing(team_id)?.points;
        Some(current + WIN_POINTS * self.remaining_count(team_id) as u32)
    }
}
