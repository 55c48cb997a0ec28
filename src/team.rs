/// A team in the league.
///
/// Pure identity: loaded once from static configuration and never mutated.
/// All per-season state lives in [`crate::standings::Standing`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Team {
    /// Stable identifier used by fixtures and standings.
    pub id: String,

    /// Full display name.
    pub name: String,

    /// Abbreviated name for compact rendering.
    pub short_name: String,
}

impl Team {
    pub fn new(id: impl Into<String>, name: impl Into<String>, short_name: impl Into<String>) -> Self {
        Team {
            id: id.into(),
            name: name.into(),
            short_name: short_name.into(),
        }
    }
}
