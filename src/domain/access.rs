// src/domain/access.rs

use crate::domain::models::Property;

/// The company a Company Director is scoped to. Placeholder policy: the
/// filter compares against this constant, not the requester's own
/// affiliation.
pub const DIRECTOR_COMPANY: &str = "Ekadi Trisakti Mas";

/// The cluster an Estate Manager is scoped to. Same placeholder policy.
pub const MANAGER_CLUSTER: &str = "Permata Riverview";

/// Administrative access levels that scope the property view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessLevel {
    GroupDirector,
    CompanyDirector,
    EstateManager,
    Administrator,
}

impl AccessLevel {
    pub const ALL: [AccessLevel; 4] = [
        AccessLevel::GroupDirector,
        AccessLevel::CompanyDirector,
        AccessLevel::EstateManager,
        AccessLevel::Administrator,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccessLevel::GroupDirector => "Group Director",
            AccessLevel::CompanyDirector => "Company Director",
            AccessLevel::EstateManager => "Estate Manager",
            AccessLevel::Administrator => "Administrator",
        }
    }

    /// A role string that is not one of the four known tags parses to `None`.
    /// Callers treat that as "no visibility" rather than falling open.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|l| l.as_str() == s)
    }
}

impl std::fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Computes the subset of `properties` the given access level may see.
///
/// `None` (an unrecognized role) denies everything. The Administrator arm
/// also yields the empty set for this view.
pub fn visible_properties<'a>(
    properties: &'a [Property],
    access_level: Option<AccessLevel>,
) -> Vec<&'a Property> {
    match access_level {
        Some(AccessLevel::GroupDirector) => properties.iter().collect(),
        Some(AccessLevel::CompanyDirector) => properties
            .iter()
            .filter(|p| p.company == DIRECTOR_COMPANY)
            .collect(),
        Some(AccessLevel::EstateManager) => properties
            .iter()
            .filter(|p| p.cluster == MANAGER_CLUSTER)
            .collect(),
        Some(AccessLevel::Administrator) => Vec::new(),
        None => Vec::new(),
    }
}
