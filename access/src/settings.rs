//! Engine Settings
//!
//! Static configuration consumed, not computed, by the engine: the
//! administrator identity allow-list and the optional DAO balance
//! threshold. Loaded once at application start, from the environment or
//! constructed directly by the embedding application.

use std::env;

/// Access engine settings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccessSettings {
    /// Identities that are administrators regardless of tier.
    /// Stored lowercase; matching is case-insensitive.
    pub admin_identities: Vec<String>,

    /// Staked balance at or above this value grants DAO membership.
    /// `None` disables the balance rule entirely.
    pub dao_balance_threshold: Option<f64>,
}

impl AccessSettings {
    /// Build settings from explicit values, normalizing identities.
    #[must_use]
    pub fn new<I, S>(admin_identities: I, dao_balance_threshold: Option<f64>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            admin_identities: admin_identities
                .into_iter()
                .map(|id| id.as_ref().trim().to_ascii_lowercase())
                .filter(|id| !id.is_empty())
                .collect(),
            dao_balance_threshold,
        }
    }

    /// Load settings from environment variables.
    ///
    /// - `ADMIN_IDENTITIES`: comma-separated allow-list (default: empty)
    /// - `DAO_BALANCE_THRESHOLD`: number (default: rule disabled)
    #[must_use]
    pub fn from_env() -> Self {
        let admin_identities = env::var("ADMIN_IDENTITIES")
            .map(|s| {
                s.split(',')
                    .map(|id| id.trim().to_ascii_lowercase())
                    .filter(|id| !id.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let dao_balance_threshold = env::var("DAO_BALANCE_THRESHOLD")
            .ok()
            .and_then(|v| v.parse().ok());

        Self {
            admin_identities,
            dao_balance_threshold,
        }
    }

    /// Whether an identity is on the administrator allow-list.
    ///
    /// `None` (no identity on the record) never matches.
    #[must_use]
    pub fn is_admin_identity(&self, identity: Option<&str>) -> bool {
        identity.is_some_and(|id| {
            let id = id.trim().to_ascii_lowercase();
            self.admin_identities.iter().any(|admin| *admin == id)
        })
    }
}
