//! Membership tiers.
//!
//! Tiers form a fixed total order. Every access decision compares ordinal
//! rank, never label equality, so adding a tier above an existing gate
//! cannot lock out the new tier.

use serde::{Deserialize, Serialize};

/// Membership tier of a platform user.
///
/// Ordering is total and fixed:
/// `Explorer < Seeker < Creator < Sovereign < Admin`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Tier {
    /// Free tier with read-mostly access.
    #[default]
    Explorer,
    /// Entry member tier; unlocks capsule authoring.
    Seeker,
    /// Professional tier; unlocks minting and sealing tools.
    Creator,
    /// Highest member tier; unlocks validation and governance.
    Sovereign,
    /// Platform administrators.
    Admin,
}

impl Tier {
    /// Ordinal rank within the fixed tier order (`Explorer` = 0).
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Whether this tier meets or exceeds `required`.
    #[must_use]
    pub const fn at_least(self, required: Self) -> bool {
        self.rank() >= required.rank()
    }

    /// Parse a tier label, case-insensitively.
    ///
    /// Unknown or empty labels resolve to [`Tier::Explorer`]: a malformed
    /// record can only ever reduce access, never block evaluation.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_uppercase().as_str() {
            "SEEKER" => Self::Seeker,
            "CREATOR" => Self::Creator,
            "SOVEREIGN" => Self::Sovereign,
            "ADMIN" => Self::Admin,
            _ => Self::Explorer,
        }
    }

    /// Canonical uppercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Explorer => "EXPLORER",
            Self::Seeker => "SEEKER",
            Self::Creator => "CREATOR",
            Self::Sovereign => "SOVEREIGN",
            Self::Admin => "ADMIN",
        }
    }

    /// All tiers in ascending rank order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Explorer,
            Self::Seeker,
            Self::Creator,
            Self::Sovereign,
            Self::Admin,
        ]
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
