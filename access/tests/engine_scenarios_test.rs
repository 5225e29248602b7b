//! End-to-end scenarios for the access engine.
//!
//! Exercises the public crate API the way a consuming route guard would:
//! raw record in, visibility decisions out.
//!
//! Run with: `cargo test --test engine_scenarios_test`

use tc_access::{
    allow, AccessContext, AccessSettings, CapsulePermissions, FeatureRequirement,
    NavigationCatalog, Tier, UserRecord,
};

fn record_with_tier(label: &str) -> UserRecord {
    UserRecord {
        identity: Some("member@example.com".to_string()),
        tier: Some(label.to_string()),
        ..UserRecord::default()
    }
}

fn context_with_tier(label: &str) -> AccessContext {
    AccessContext::build(&record_with_tier(label), &AccessSettings::default())
}

// === Gate Scenarios ===

#[test]
fn test_explorer_passes_unrestricted_requirement() {
    let context = context_with_tier("EXPLORER");
    assert!(allow(Some(&context), &FeatureRequirement::unrestricted()));
}

#[test]
fn test_seeker_denied_creator_gated_feature() {
    let context = context_with_tier("SEEKER");
    let requirement = FeatureRequirement {
        tiers: vec![Tier::Creator, Tier::Sovereign],
        ..FeatureRequirement::default()
    };
    assert!(!allow(Some(&context), &requirement));
}

#[test]
fn test_sovereign_passes_seeker_gated_feature() {
    let context = context_with_tier("SOVEREIGN");
    let requirement = FeatureRequirement {
        tiers: vec![Tier::Seeker],
        ..FeatureRequirement::default()
    };
    assert!(allow(Some(&context), &requirement));
}

#[test]
fn test_allow_listed_explorer_passes_admin_gate() {
    let record = UserRecord {
        identity: Some("ops@example.com".to_string()),
        tier: Some("EXPLORER".to_string()),
        ..UserRecord::default()
    };
    let settings = AccessSettings::new(["ops@example.com"], None);
    let context = AccessContext::build(&record, &settings);

    let requirement = FeatureRequirement {
        admin_only: true,
        ..FeatureRequirement::default()
    };
    assert!(allow(Some(&context), &requirement));
}

#[test]
fn test_non_validator_loses_only_the_validator_entry() {
    let catalog = NavigationCatalog::from_json(
        r#"[
            {"id": "dashboard", "label": "Dashboard", "route": "/dashboard"},
            {
                "id": "validator-queue",
                "label": "Validation Queue",
                "route": "/validate",
                "validatorOnly": true
            },
            {"id": "profile", "label": "Profile", "route": "/profile"}
        ]"#,
    )
    .unwrap();

    let context = context_with_tier("CREATOR");
    let ids: Vec<&str> = catalog
        .visible_entries(Some(&context))
        .iter()
        .map(|e| e.id.as_str())
        .collect();

    assert_eq!(ids, vec!["dashboard", "profile"]);
}

// === Permission Monotonicity ===

#[test]
fn test_higher_tiers_never_lose_permissions() {
    let tiers = Tier::all();
    for (i, lower) in tiers.iter().enumerate() {
        for higher in &tiers[i..] {
            let lower_set = CapsulePermissions::for_tier(*lower);
            let higher_set = CapsulePermissions::for_tier(*higher);
            assert!(
                higher_set.contains(lower_set),
                "{higher} must hold every {lower} permission"
            );
        }
    }
}

// === Fail-Closed Behavior ===

#[test]
fn test_unknown_tier_context_decides_like_explorer() {
    let unknown = context_with_tier("not-a-tier");
    let explorer = context_with_tier("EXPLORER");

    let requirements = [
        FeatureRequirement::unrestricted(),
        FeatureRequirement {
            tiers: vec![Tier::Seeker],
            ..FeatureRequirement::default()
        },
        FeatureRequirement {
            validator_only: true,
            ..FeatureRequirement::default()
        },
        FeatureRequirement {
            permissions: CapsulePermissions::CREATE_CAPSULES,
            ..FeatureRequirement::default()
        },
    ];

    for requirement in &requirements {
        assert_eq!(
            allow(Some(&unknown), requirement),
            allow(Some(&explorer), requirement),
        );
    }
}

#[test]
fn test_unknown_tier_never_grants_restricted_feature() {
    let context = context_with_tier("SUPREME_OVERLORD");
    let requirement = FeatureRequirement {
        tiers: vec![Tier::Seeker],
        ..FeatureRequirement::default()
    };
    assert!(!allow(Some(&context), &requirement));
}

// === Idempotence ===

#[test]
fn test_rebuilding_context_from_unchanged_record_is_equal() {
    let record = UserRecord {
        identity: Some("member@example.com".to_string()),
        tier: Some("CREATOR".to_string()),
        is_validator_flag: true,
        balance: 42.0,
    };
    let settings = AccessSettings::new(["ops@example.com"], Some(1000.0));

    assert_eq!(
        AccessContext::build(&record, &settings),
        AccessContext::build(&record, &settings),
    );
}

// === Role Independence ===

#[test]
fn test_plain_seeker_has_no_role_overlays() {
    let context = context_with_tier("SEEKER");
    assert!(!context.is_admin());
    assert!(!context.is_dao_member());
    assert!(!context.is_validator());
}

#[test]
fn test_dao_threshold_does_not_leak_into_admin() {
    let settings = AccessSettings::new(["ops@example.com"], Some(1000.0));
    let record = UserRecord {
        identity: Some("whale@example.com".to_string()),
        tier: Some("SEEKER".to_string()),
        balance: 50_000.0,
        ..UserRecord::default()
    };
    let context = AccessContext::build(&record, &settings);

    assert!(context.is_dao_member());
    assert!(!context.is_admin());
    assert!(!context.is_validator());
}

// === Gate Conjunction ===

#[test]
fn test_dao_clause_and_permission_clause_both_required() {
    let requirement = FeatureRequirement {
        dao_only: true,
        permissions: CapsulePermissions::VALIDATE_CAPSULES,
        ..FeatureRequirement::default()
    };

    // Creator: DAO member, lacks the permission.
    assert!(!allow(Some(&context_with_tier("CREATOR")), &requirement));

    // Allow-listed Explorer admin: passes the DAO clause through the
    // admin overlay, but permissions come from the tier and the
    // Explorer set has neither the token nor a wildcard.
    let record = UserRecord {
        identity: Some("ops@example.com".to_string()),
        tier: Some("EXPLORER".to_string()),
        ..UserRecord::default()
    };
    let settings = AccessSettings::new(["ops@example.com"], None);
    let flag_admin = AccessContext::build(&record, &settings);
    assert!(!allow(Some(&flag_admin), &requirement));

    // Sovereign: DAO member and holds the permission.
    assert!(allow(Some(&context_with_tier("SOVEREIGN")), &requirement));
}

// === Inbound Record Contract ===

#[test]
fn test_builds_from_identity_layer_payload() {
    let record: UserRecord = serde_json::from_str(
        r#"{
            "identity": "member@example.com",
            "tier": "sovereign",
            "isValidatorFlag": false,
            "balance": 12.5
        }"#,
    )
    .unwrap();
    let context = AccessContext::build(&record, &AccessSettings::default());

    assert_eq!(context.tier, Tier::Sovereign);
    assert!(context.is_validator());
    assert!(context.has_permission(CapsulePermissions::VALIDATE_CAPSULES));
}
