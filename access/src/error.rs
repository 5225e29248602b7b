//! Configuration Error Types

use thiserror::Error;

use crate::tier::Tier;

/// Errors raised while loading static configuration.
///
/// Runtime evaluation never errors; malformed user input degrades to a
/// denial. These variants cover the configuration boundary only, where a
/// mistake should fail the load instead of silently widening or
/// narrowing access.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog JSON failed to parse. Unknown tier labels and permission
    /// tokens surface here.
    #[error("invalid navigation catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two catalog entries share an id.
    #[error("duplicate navigation entry id `{id}`")]
    DuplicateEntryId {
        /// The repeated id.
        id: String,
    },

    /// An entry lists a tier set with rank gaps. The gate treats a tier
    /// list as an "at or above" range, so a gapped list admits the
    /// skipped tiers anyway; the catalog rejects it instead of guessing.
    #[error("navigation entry `{id}` lists tiers {lower} and {upper} but skips the tiers between them")]
    NonContiguousTiers {
        /// The offending entry.
        id: String,
        /// Listed tier below the gap.
        lower: Tier,
        /// Listed tier above the gap.
        upper: Tier,
    },
}
