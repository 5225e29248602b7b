//! Feature gating.
//!
//! Declarative access requirements evaluated as a conjunction of
//! independent clauses. Any failing clause denies; a requirement with no
//! restrictions allows everyone, including anonymous visitors.

use serde::{Deserialize, Serialize};

use crate::context::AccessContext;
use crate::permission::CapsulePermissions;
use crate::tier::Tier;

/// Declarative access requirement for a feature or navigation entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeatureRequirement {
    /// Acceptable tiers. Empty means no tier restriction. A user passes
    /// when their rank meets or exceeds the lowest listed tier; the list
    /// names an "at or above" range, not exact membership.
    pub tiers: Vec<Tier>,

    /// Restrict to administrators.
    pub admin_only: bool,

    /// Restrict to DAO members.
    pub dao_only: bool,

    /// Restrict to validators.
    pub validator_only: bool,

    /// Required permission tokens. Empty means no permission restriction.
    #[serde(with = "crate::permission::token_list")]
    pub permissions: CapsulePermissions,
}

impl FeatureRequirement {
    /// Requirement with no restrictions at all, the anonymous baseline.
    #[must_use]
    pub fn unrestricted() -> Self {
        Self::default()
    }

    /// Whether this requirement restricts nothing.
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.tiers.is_empty()
            && !self.admin_only
            && !self.dao_only
            && !self.validator_only
            && self.permissions.is_empty()
    }

    /// First rank gap in the listed tier set, if any.
    ///
    /// The "lowest listed tier, by rank" gate semantics is only sound
    /// when the listed set is contiguous. A set like
    /// `[SEEKER, SOVEREIGN]` skips CREATOR yet still admits it through
    /// rank comparison; catalog validation uses this to reject such sets
    /// at load time. Returns the two listed tiers surrounding the gap.
    #[must_use]
    pub fn tier_gap(&self) -> Option<(Tier, Tier)> {
        let mut listed: Vec<Tier> = self.tiers.clone();
        listed.sort_unstable();
        listed.dedup();

        listed
            .windows(2)
            .find(|pair| pair[1].rank() - pair[0].rank() > 1)
            .map(|pair| (pair[0], pair[1]))
    }
}

/// Evaluate a requirement against an optional access context.
///
/// Clauses, each independently necessary (fail closed):
/// 1. `admin_only` requires the admin overlay
/// 2. `dao_only` requires the DAO overlay
/// 3. `validator_only` requires the validator overlay
/// 4. a non-empty tier set requires rank at or above some listed tier
/// 5. required permissions must all be held (the full set satisfies any)
///
/// With no context (anonymous), only unrestricted requirements pass.
#[must_use]
pub fn allow(context: Option<&AccessContext>, requirement: &FeatureRequirement) -> bool {
    let Some(context) = context else {
        return requirement.is_unrestricted();
    };

    if requirement.admin_only && !context.roles.is_admin {
        return false;
    }

    if requirement.dao_only && !context.roles.is_dao_member {
        return false;
    }

    if requirement.validator_only && !context.roles.is_validator {
        return false;
    }

    if !requirement.tiers.is_empty()
        && !requirement.tiers.iter().any(|t| context.tier.at_least(*t))
    {
        return false;
    }

    if !requirement.permissions.is_empty()
        && !context.permissions.contains(requirement.permissions)
    {
        return false;
    }

    true
}
