//! Access context.
//!
//! Pre-computed access snapshot for one user record. Contains everything
//! the gate needs to perform permission checks without touching the
//! record again.

use serde::Serialize;

use crate::permission::CapsulePermissions;
use crate::record::UserRecord;
use crate::roles::{resolve_role_flags, RoleFlags};
use crate::settings::AccessSettings;
use crate::tier::Tier;

/// Immutable access snapshot for one user record.
///
/// Built once per record, never mutated. When the underlying record
/// changes (login, tier upgrade, stake change) the consumer must build a
/// fresh context; caching a stale one across an identity change is a
/// security bug, not a performance optimization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessContext {
    /// Resolved membership tier.
    pub tier: Tier,

    /// Role overlays resolved from the record.
    #[serde(flatten)]
    pub roles: RoleFlags,

    /// Permissions granted by the resolved tier.
    ///
    /// Flag overlays do not widen this set: an allow-listed admin at a
    /// low tier passes admin gates but still holds only the tier's
    /// permissions.
    #[serde(with = "crate::permission::token_list")]
    pub permissions: CapsulePermissions,
}

impl AccessContext {
    /// Build the access context for a user record.
    ///
    /// A pure transform: tier from the raw label (failing closed to
    /// Explorer), role flags from the resolver, permissions from the
    /// resolved tier. No I/O and no shared state.
    #[must_use]
    #[tracing::instrument(level = "debug", skip(settings))]
    pub fn build(record: &UserRecord, settings: &AccessSettings) -> Self {
        let tier = record.resolved_tier();
        let roles = resolve_role_flags(record, settings);
        let permissions = CapsulePermissions::for_tier(tier);

        tracing::debug!(%tier, ?roles, "resolved access context");

        Self {
            tier,
            roles,
            permissions,
        }
    }

    /// Context implied by a tier alone.
    ///
    /// Used by consumers that already hold a resolved tier and by tests;
    /// equivalent to building from a record carrying only that tier.
    #[must_use]
    pub fn for_tier(tier: Tier) -> Self {
        Self {
            tier,
            roles: RoleFlags::from_tier(tier),
            permissions: CapsulePermissions::for_tier(tier),
        }
    }

    /// Whether the context holds the given permission(s).
    #[must_use]
    pub const fn has_permission(&self, permission: CapsulePermissions) -> bool {
        self.permissions.contains(permission)
    }

    /// Administrator overlay.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.roles.is_admin
    }

    /// DAO member overlay.
    #[must_use]
    pub const fn is_dao_member(&self) -> bool {
        self.roles.is_dao_member
    }

    /// Validator overlay.
    #[must_use]
    pub const fn is_validator(&self) -> bool {
        self.roles.is_validator
    }
}
