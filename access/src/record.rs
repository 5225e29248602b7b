//! User record types.
//!
//! The raw record handed over by the identity/session layer. The engine
//! never fetches this itself; one record is supplied per request or
//! session and a fresh [`crate::AccessContext`] is built from it.

use serde::{Deserialize, Serialize};

use crate::tier::Tier;

/// Raw user record supplied by the identity/session collaborator.
///
/// Every field may be absent. Absent fields resolve to the most
/// restrictive value during context building: no identity means no
/// allow-list match, a missing tier label means Explorer, a missing
/// validator flag means false, and a missing balance means zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserRecord {
    /// Identity string, an email address or opaque account id.
    pub identity: Option<String>,
    /// Raw membership tier label as stored by the identity layer.
    pub tier: Option<String>,
    /// Explicit validator grant carried on the record.
    pub is_validator_flag: bool,
    /// Staked token balance used by threshold rules.
    pub balance: f64,
}

impl UserRecord {
    /// Resolve the record's raw tier label, failing closed to Explorer.
    #[must_use]
    pub fn resolved_tier(&self) -> Tier {
        self.tier.as_deref().map_or(Tier::Explorer, Tier::from_label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_is_fully_restricted() {
        let record = UserRecord::default();
        assert_eq!(record.identity, None);
        assert_eq!(record.resolved_tier(), Tier::Explorer);
        assert!(!record.is_validator_flag);
        assert_eq!(record.balance, 0.0);
    }

    #[test]
    fn test_resolved_tier_parses_label() {
        let record = UserRecord {
            tier: Some("sovereign".to_string()),
            ..UserRecord::default()
        };
        assert_eq!(record.resolved_tier(), Tier::Sovereign);
    }

    #[test]
    fn test_resolved_tier_unknown_label_is_explorer() {
        let record = UserRecord {
            tier: Some("platinum".to_string()),
            ..UserRecord::default()
        };
        assert_eq!(record.resolved_tier(), Tier::Explorer);
    }

    #[test]
    fn test_deserializes_partial_camel_case_payload() {
        let record: UserRecord =
            serde_json::from_str(r#"{"identity": "user@example.com", "isValidatorFlag": true}"#)
                .unwrap();
        assert_eq!(record.identity.as_deref(), Some("user@example.com"));
        assert!(record.is_validator_flag);
        assert_eq!(record.tier, None);
        assert_eq!(record.balance, 0.0);
    }

    #[test]
    fn test_deserializes_empty_payload() {
        let record: UserRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record, UserRecord::default());
    }
}
