//! Navigation catalog.
//!
//! Static catalog of navigation entries, each carrying its own access
//! requirement. The catalog is parsed and validated once at application
//! start; per-user visibility is a pure filter over it.

use serde::{Deserialize, Serialize};

use crate::context::AccessContext;
use crate::error::CatalogError;
use crate::gate::{allow, FeatureRequirement};

/// One entry of the navigation catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationEntry {
    /// Stable entry id, unique within the catalog.
    pub id: String,

    /// Human-facing label.
    pub label: String,

    /// Client route the entry points at.
    pub route: String,

    /// Access requirement. Entries without requirement fields are
    /// visible to everyone, including anonymous visitors.
    #[serde(flatten)]
    pub requirement: FeatureRequirement,
}

/// Validated, ordered navigation catalog.
///
/// Construction validates the configuration so that evaluation never has
/// to: duplicate ids and gapped tier sets are configuration bugs and
/// fail the load instead of surfacing as runtime surprises.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NavigationCatalog {
    entries: Vec<NavigationEntry>,
}

impl NavigationCatalog {
    /// Build a catalog from entries, validating them.
    pub fn new(entries: Vec<NavigationEntry>) -> Result<Self, CatalogError> {
        let mut seen = std::collections::HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.id.as_str()) {
                return Err(CatalogError::DuplicateEntryId {
                    id: entry.id.clone(),
                });
            }
            if let Some((lower, upper)) = entry.requirement.tier_gap() {
                return Err(CatalogError::NonContiguousTiers {
                    id: entry.id.clone(),
                    lower,
                    upper,
                });
            }
        }

        Ok(Self { entries })
    }

    /// Parse and validate a catalog from JSON.
    ///
    /// Unknown tier labels and permission tokens fail the parse: the
    /// configuration boundary is strict, unlike the user-record boundary
    /// which folds bad input to the most restrictive value.
    #[tracing::instrument(skip(json))]
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<NavigationEntry> = serde_json::from_str(json)?;
        let catalog = Self::new(entries)?;
        tracing::debug!(entries = catalog.len(), "loaded navigation catalog");
        Ok(catalog)
    }

    /// All entries in catalog order.
    #[must_use]
    pub fn entries(&self) -> &[NavigationEntry] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries visible to the given context, in catalog order.
    ///
    /// A pure selection: entries are never mutated or reordered, and the
    /// same inputs always yield the same sequence. `None` is the
    /// anonymous visitor and sees only unrestricted entries.
    #[must_use]
    pub fn visible_entries(&self, context: Option<&AccessContext>) -> Vec<&NavigationEntry> {
        self.entries
            .iter()
            .filter(|entry| allow(context, &entry.requirement))
            .collect()
    }
}
