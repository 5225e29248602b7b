//! Capsule permissions using bitflags.
//!
//! Permissions are organized into categories:
//! - Viewing (bits 0-2): Read access to capsules and profiles
//! - Authoring (bits 3-6): Creating and managing own capsules
//! - Creator tools (bits 7-11): Minting, sealing, and analytics
//! - Validation & governance (bits 12-14): Network validation duties
//!
//! Each tier's permission set is the previous tier's set plus that tier's
//! own additions, so the inclusion chain
//! `Explorer ⊆ Seeker ⊆ Creator ⊆ Sovereign ⊆ Admin` holds by
//! construction rather than by maintenance discipline.

use bitflags::bitflags;

use crate::tier::Tier;

/// Wildcard token granting every permission.
pub const WILDCARD_TOKEN: &str = "*";

bitflags! {
    /// Capsule permissions represented as a 32-bit bitfield.
    ///
    /// At the configuration boundary each flag is a snake_case string
    /// token (`view_capsules`, `mint_capsule_nft`, ...); see
    /// [`CapsulePermissions::from_token`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
    #[serde(transparent)]
    pub struct CapsulePermissions: u32 {
        // === Viewing (bits 0-2) ===
        /// Permission to browse and read public capsules
        const VIEW_CAPSULES         = 1 << 0;
        /// Permission to view member profiles
        const VIEW_PROFILES         = 1 << 1;
        /// Permission to react to capsules
        const REACT_CAPSULES        = 1 << 2;

        // === Authoring (bits 3-6) ===
        /// Permission to create new capsules
        const CREATE_CAPSULES       = 1 << 3;
        /// Permission to edit one's own capsules
        const EDIT_OWN_CAPSULES     = 1 << 4;
        /// Permission to unlock time-sealed capsules
        const UNLOCK_CAPSULES       = 1 << 5;
        /// Permission to claim accrued capsule yield
        const CLAIM_YIELD           = 1 << 6;

        // === Creator tools (bits 7-11) ===
        /// Permission to mint a capsule as an NFT
        const MINT_CAPSULE_NFT      = 1 << 7;
        /// Permission to create eternal preservation contracts
        const CREATE_ETERNAL_CONTRACT = 1 << 8;
        /// Permission to apply a verification seal to a capsule
        const SEAL_CAPSULES         = 1 << 9;
        /// Permission to post truth bounties
        const SUBMIT_TRUTH_BOUNTY   = 1 << 10;
        /// Permission to view capsule analytics dashboards
        const VIEW_ANALYTICS        = 1 << 11;

        // === Validation & governance (bits 12-14) ===
        /// Permission to validate capsules submitted by other members
        const VALIDATE_CAPSULES     = 1 << 12;
        /// Permission to vote on governance proposals
        const VOTE_GOVERNANCE       = 1 << 13;
        /// Permission to arbitrate disputed capsule verdicts
        const ARBITRATE_DISPUTES    = 1 << 14;
    }
}

impl CapsulePermissions {
    // === Per-Tier Cumulative Sets ===

    /// Permissions held by every Explorer.
    pub const EXPLORER_SET: Self = Self::VIEW_CAPSULES
        .union(Self::VIEW_PROFILES)
        .union(Self::REACT_CAPSULES);

    /// Seeker permissions: everything an Explorer has plus authoring.
    pub const SEEKER_SET: Self = Self::EXPLORER_SET
        .union(Self::CREATE_CAPSULES)
        .union(Self::EDIT_OWN_CAPSULES)
        .union(Self::UNLOCK_CAPSULES)
        .union(Self::CLAIM_YIELD);

    /// Creator permissions: everything a Seeker has plus creator tools.
    pub const CREATOR_SET: Self = Self::SEEKER_SET
        .union(Self::MINT_CAPSULE_NFT)
        .union(Self::CREATE_ETERNAL_CONTRACT)
        .union(Self::SEAL_CAPSULES)
        .union(Self::SUBMIT_TRUTH_BOUNTY)
        .union(Self::VIEW_ANALYTICS);

    /// Sovereign permissions: everything a Creator has plus validation
    /// and governance.
    pub const SOVEREIGN_SET: Self = Self::CREATOR_SET
        .union(Self::VALIDATE_CAPSULES)
        .union(Self::VOTE_GOVERNANCE)
        .union(Self::ARBITRATE_DISPUTES);

    /// Resolve the permission set for a tier.
    ///
    /// `Admin` maps to the full bitset, the wildcard that satisfies any
    /// membership check.
    #[must_use]
    pub const fn for_tier(tier: Tier) -> Self {
        match tier {
            Tier::Explorer => Self::EXPLORER_SET,
            Tier::Seeker => Self::SEEKER_SET,
            Tier::Creator => Self::CREATOR_SET,
            Tier::Sovereign => Self::SOVEREIGN_SET,
            Tier::Admin => Self::all(),
        }
    }

    // === Permission Checking ===

    /// Check if this permission set includes the specified permission(s).
    #[must_use]
    pub const fn has(self, permission: Self) -> bool {
        self.contains(permission)
    }

    // === Token Conversion ===

    /// Parse a single permission token.
    ///
    /// Tokens are snake_case flag names (`"seal_capsules"`), matched
    /// case-insensitively. The wildcard token `"*"` yields the full set.
    /// Returns `None` for unknown tokens so that configuration loaders can
    /// reject them instead of silently granting or ignoring.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        let token = token.trim();
        if token == WILDCARD_TOKEN {
            return Some(Self::all());
        }
        Self::from_name(&token.to_ascii_uppercase())
    }

    /// Render the set as its boundary tokens.
    ///
    /// The full set renders as the single wildcard token.
    #[must_use]
    pub fn tokens(self) -> Vec<String> {
        if self == Self::all() {
            return vec![WILDCARD_TOKEN.to_string()];
        }
        self.iter_names()
            .map(|(name, _)| name.to_ascii_lowercase())
            .collect()
    }
}

impl Default for CapsulePermissions {
    fn default() -> Self {
        Self::empty()
    }
}

/// Serde adapter for permission fields carried as token lists.
///
/// Configuration and boundary JSON lists permissions as snake_case string
/// tokens (`["view_capsules", "seal_capsules"]` or `["*"]`); internally
/// they are a [`CapsulePermissions`] bitset. Unknown tokens fail
/// deserialization, which surfaces as a load-time catalog error.
pub mod token_list {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::CapsulePermissions;

    pub fn serialize<S: Serializer>(
        permissions: &CapsulePermissions,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(permissions.tokens())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<CapsulePermissions, D::Error> {
        let tokens = Vec::<String>::deserialize(deserializer)?;
        let mut set = CapsulePermissions::empty();
        for token in &tokens {
            set |= CapsulePermissions::from_token(token)
                .ok_or_else(|| D::Error::custom(format!("unknown permission token `{token}`")))?;
        }
        Ok(set)
    }
}
