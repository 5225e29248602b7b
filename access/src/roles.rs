//! Role flag resolution.
//!
//! Derives the administrator, DAO member, and validator overlays from a
//! user record. The three flags are independent axes layered on top of
//! the tier; a flag never upgrades the tier itself.

use serde::{Deserialize, Serialize};

use crate::record::UserRecord;
use crate::settings::AccessSettings;
use crate::tier::Tier;

/// Role overlays resolved from a user record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleFlags {
    /// Allow-listed identity or Admin tier.
    pub is_admin: bool,
    /// Creator tier and above, admins, or members over the staked-balance
    /// threshold when one is configured.
    pub is_dao_member: bool,
    /// Explicit validator grant, Sovereign tier, or admins.
    pub is_validator: bool,
}

/// Resolve role flags for a user record.
///
/// Resolution rules, each an independent OR (any true wins):
/// 1. `is_admin`: identity on the administrator allow-list, or Admin tier
/// 2. `is_dao_member`: Creator tier or above, or admin, or staked balance
///    at/above the configured threshold
/// 3. `is_validator`: explicit flag on the record, or Sovereign tier, or
///    admin
///
/// Absent record fields count as their most restrictive value, so a
/// partially populated record can only lose flags, never gain them.
#[must_use]
pub fn resolve_role_flags(record: &UserRecord, settings: &AccessSettings) -> RoleFlags {
    let tier = record.resolved_tier();

    let is_admin =
        settings.is_admin_identity(record.identity.as_deref()) || tier == Tier::Admin;

    let over_dao_threshold = settings
        .dao_balance_threshold
        .is_some_and(|threshold| record.balance >= threshold);
    let is_dao_member = tier.at_least(Tier::Creator) || is_admin || over_dao_threshold;

    let is_validator = record.is_validator_flag || tier == Tier::Sovereign || is_admin;

    RoleFlags {
        is_admin,
        is_dao_member,
        is_validator,
    }
}

impl RoleFlags {
    /// Flags implied by a tier alone, with no allow-list membership, no
    /// explicit validator grant, and no balance.
    #[must_use]
    pub fn from_tier(tier: Tier) -> Self {
        let is_admin = tier == Tier::Admin;
        Self {
            is_admin,
            is_dao_member: tier.at_least(Tier::Creator) || is_admin,
            is_validator: tier == Tier::Sovereign || is_admin,
        }
    }
}
