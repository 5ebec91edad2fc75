//! Wire-shaped resource types.
//!
//! Metadata, status, references, SKUs, and the per-resource spec/record
//! types. All types derive Serialize/Deserialize; field names follow the
//! provider's camelCase wire shape.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// References and SKUs
// ============================================================================

/// Reference to another configuration object by resource path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    /// Resource path, e.g. "skus/standard".
    pub resource: String,
}

/// A storage SKU from the provider catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sku {
    pub name: String,
    pub tier: String,
}

// ============================================================================
// Metadata
// ============================================================================

/// Resource metadata computed by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// API schema version
    pub api_version: String,

    /// Resource kind (e.g. "workspace", "block-storage")
    pub kind: String,

    /// Resource name within its scope
    pub name: String,

    /// Provider identifier (e.g. "seca.storage")
    pub provider: String,

    /// Full resource path, e.g. "tenants/t1/workspaces/ws"
    pub resource: String,

    /// Monotonic version, bumped on every update
    pub resource_version: i64,

    /// Owning tenant
    pub tenant: String,

    /// Owning workspace, absent for workspace-level resources
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace: Option<String>,

    /// Last verb applied to the resource
    pub verb: String,

    /// Creation timestamp (ISO 8601)
    pub created_at: String,

    /// Last modification timestamp (ISO 8601)
    pub last_modified_at: String,
}

// ============================================================================
// Status
// ============================================================================

/// Lifecycle state of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceState {
    Pending,
    Creating,
    Updating,
    Active,
}

impl fmt::Display for ResourceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Creating => write!(f, "creating"),
            Self::Updating => write!(f, "updating"),
            Self::Active => write!(f, "active"),
        }
    }
}

/// One recorded state transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCondition {
    pub last_transition_at: String,
    pub message: String,
    pub reason: String,
    pub state: ResourceState,
}

/// Observed status: current state plus the transition trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub state: ResourceState,
    pub conditions: Vec<StatusCondition>,
}

// ============================================================================
// Specs and records
// ============================================================================

/// Desired block storage configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockStorageSpec {
    /// Size in gigabytes; must be positive (enforced by the provider)
    #[serde(rename = "sizeGB")]
    pub size_gb: u64,

    /// SKU backing this volume
    pub sku_ref: Reference,
}

/// Materialized workspace as returned by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceRecord {
    pub metadata: Metadata,
    pub spec: serde_json::Value,
    pub status: Status,
}

/// Materialized block storage as returned by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockStorageRecord {
    pub metadata: Metadata,
    pub spec: BlockStorageSpec,
    pub status: Status,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_storage_spec_wire_shape() {
        let spec = BlockStorageSpec {
            size_gb: 32,
            sku_ref: Reference {
                resource: "skus/standard".to_string(),
            },
        };
        let json = serde_json::to_string(&spec).unwrap();
        assert!(json.contains("\"sizeGB\":32"));
        assert!(json.contains("\"skuRef\""));
        assert!(json.contains("\"resource\":\"skus/standard\""));

        let back: BlockStorageSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, spec);
    }

    #[test]
    fn test_metadata_camel_case() {
        let meta = Metadata {
            api_version: "v1".to_string(),
            kind: "workspace".to_string(),
            name: "myWorkspace".to_string(),
            provider: "seca.workspace".to_string(),
            resource: "tenants/default/workspaces/myWorkspace".to_string(),
            resource_version: 1,
            tenant: "default".to_string(),
            workspace: None,
            verb: "put".to_string(),
            created_at: "2026-01-01T00:00:00Z".to_string(),
            last_modified_at: "2026-01-01T00:00:00Z".to_string(),
        };
        let json = serde_json::to_string(&meta).unwrap();
        assert!(json.contains("\"apiVersion\":\"v1\""));
        assert!(json.contains("\"resourceVersion\":1"));
        assert!(json.contains("\"createdAt\""));
        // workspace is absent for workspace-level resources
        assert!(!json.contains("\"workspace\""));
    }

    #[test]
    fn test_resource_state_display() {
        assert_eq!(ResourceState::Pending.to_string(), "pending");
        assert_eq!(ResourceState::Active.to_string(), "active");
    }

    #[test]
    fn test_resource_state_serde_snake_case() {
        let json = serde_json::to_string(&ResourceState::Creating).unwrap();
        assert_eq!(json, "\"creating\"");
        let back: ResourceState = serde_json::from_str("\"updating\"").unwrap();
        assert_eq!(back, ResourceState::Updating);
    }

    #[test]
    fn test_status_roundtrip() {
        let status = Status {
            state: ResourceState::Active,
            conditions: vec![StatusCondition {
                last_transition_at: "2026-01-01T00:00:00Z".to_string(),
                message: "resource is now in active state".to_string(),
                reason: "stateChange".to_string(),
                state: ResourceState::Active,
            }],
        };
        let json = serde_json::to_string(&status).unwrap();
        assert!(json.contains("\"lastTransitionAt\""));
        let back: Status = serde_json::from_str(&json).unwrap();
        assert_eq!(back, status);
    }
}
