//! TruthCapsule Access Engine
//!
//! Pure, synchronous access-control decisions for the TruthCapsule
//! platform: ordered membership tiers, role overlays (administrator, DAO
//! member, validator), tier-cumulative permission sets, and declarative
//! feature gates applied over a static navigation catalog.
//!
//! The engine holds no state and performs no I/O. Every function is a
//! pure transform over its explicit inputs, so concurrent callers need
//! no coordination; a fresh [`AccessContext`] must be built whenever the
//! underlying [`UserRecord`] changes.

pub mod context;
pub mod error;
pub mod gate;
pub mod navigation;
pub mod permission;
pub mod record;
pub mod roles;
pub mod settings;
pub mod tier;

pub use context::AccessContext;
pub use error::CatalogError;
pub use gate::{allow, FeatureRequirement};
pub use navigation::{NavigationCatalog, NavigationEntry};
pub use permission::{CapsulePermissions, WILDCARD_TOKEN};
pub use record::UserRecord;
pub use roles::{resolve_role_flags, RoleFlags};
pub use settings::AccessSettings;
pub use tier::Tier;
