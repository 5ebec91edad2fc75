//! In-memory provider for tests and local runs.
//!
//! Mirrors a hosted control plane closely enough to exercise the declaration
//! flow: computed metadata with full resource paths, create-or-update with
//! version bumps, and a pending → creating → active condition trail. State
//! transitions are synchronous; there are no timers to wait on.

use super::Provider;
use crate::core::time::now_iso8601;
use crate::core::types::{
    BlockStorageRecord, BlockStorageSpec, Metadata, ResourceState, Sku, Status, StatusCondition,
    WorkspaceRecord,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

const API_VERSION: &str = "v1";
const WORKSPACE_PROVIDER: &str = "seca.workspace";
const STORAGE_PROVIDER: &str = "seca.storage";

/// Provider keeping all state in process memory.
pub struct InMemoryProvider {
    workspaces: Mutex<HashMap<String, WorkspaceRecord>>,
    storages: Mutex<HashMap<String, BlockStorageRecord>>,
    skus: HashMap<String, Sku>,
}

impl InMemoryProvider {
    /// Create an empty provider with the built-in SKU catalog.
    pub fn new() -> Self {
        let mut skus = HashMap::new();
        for tier in ["standard", "premium"] {
            skus.insert(
                format!("skus/{}", tier),
                Sku {
                    name: tier.to_string(),
                    tier: tier.to_string(),
                },
            );
        }
        Self {
            workspaces: Mutex::new(HashMap::new()),
            storages: Mutex::new(HashMap::new()),
            skus,
        }
    }
}

impl Default for InMemoryProvider {
    fn default() -> Self {
        Self::new()
    }
}

fn storage_key(tenant: &str, workspace: &str, name: &str) -> String {
    format!("{}-{}-{}", tenant, workspace, name)
}

fn workspace_key(tenant: &str, name: &str) -> String {
    format!("{}-{}", tenant, name)
}

/// Record a state transition on a status, mirroring how a control plane
/// appends conditions. Repeated transitions to the current state are no-ops.
fn push_state(status: &mut Status, state: ResourceState) {
    if !status.conditions.is_empty() && status.state == state {
        return;
    }
    status.state = state;
    status.conditions.push(StatusCondition {
        last_transition_at: now_iso8601(),
        message: format!("resource is now in {} state", state),
        reason: "stateChange".to_string(),
        state,
    });
}

/// Status for a freshly created resource: pending → creating → active.
fn created_status() -> Status {
    let mut status = Status {
        state: ResourceState::Pending,
        conditions: Vec::new(),
    };
    push_state(&mut status, ResourceState::Pending);
    push_state(&mut status, ResourceState::Creating);
    push_state(&mut status, ResourceState::Active);
    status
}

fn check_name(kind: &str, name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err(format!("{} name must not be empty", kind));
    }
    Ok(())
}

#[async_trait]
impl Provider for InMemoryProvider {
    async fn create_workspace(
        &self,
        tenant: &str,
        name: &str,
        spec: serde_json::Value,
    ) -> Result<WorkspaceRecord, String> {
        check_name("workspace", name)?;
        check_name("tenant", tenant)?;

        let now = now_iso8601();
        let mut workspaces = self
            .workspaces
            .lock()
            .map_err(|_| "provider state poisoned".to_string())?;

        if let Some(existing) = workspaces.get_mut(&workspace_key(tenant, name)) {
            existing.spec = spec;
            existing.metadata.resource_version += 1;
            existing.metadata.last_modified_at = now;
            push_state(&mut existing.status, ResourceState::Updating);
            push_state(&mut existing.status, ResourceState::Active);
            tracing::debug!(
                tenant,
                name,
                version = existing.metadata.resource_version,
                "updated workspace"
            );
            return Ok(existing.clone());
        }

        let record = WorkspaceRecord {
            metadata: Metadata {
                api_version: API_VERSION.to_string(),
                kind: "workspace".to_string(),
                name: name.to_string(),
                provider: WORKSPACE_PROVIDER.to_string(),
                resource: format!("tenants/{}/workspaces/{}", tenant, name),
                resource_version: 1,
                tenant: tenant.to_string(),
                workspace: None,
                verb: "put".to_string(),
                created_at: now.clone(),
                last_modified_at: now,
            },
            spec,
            status: created_status(),
        };
        workspaces.insert(workspace_key(tenant, name), record.clone());
        tracing::debug!(tenant, name, "created workspace");
        Ok(record)
    }

    async fn create_block_storage(
        &self,
        tenant: &str,
        workspace: &str,
        name: &str,
        spec: BlockStorageSpec,
    ) -> Result<BlockStorageRecord, String> {
        check_name("block storage", name)?;

        {
            let workspaces = self
                .workspaces
                .lock()
                .map_err(|_| "provider state poisoned".to_string())?;
            if !workspaces.contains_key(&workspace_key(tenant, workspace)) {
                return Err(format!("unknown workspace: {}", workspace));
            }
        }
        if spec.size_gb == 0 {
            return Err("sizeGB must be positive".to_string());
        }
        self.get_sku(tenant, &spec.sku_ref.resource).await?;

        let now = now_iso8601();
        let mut storages = self
            .storages
            .lock()
            .map_err(|_| "provider state poisoned".to_string())?;

        if let Some(existing) = storages.get_mut(&storage_key(tenant, workspace, name)) {
            existing.spec = spec;
            existing.metadata.resource_version += 1;
            existing.metadata.last_modified_at = now;
            push_state(&mut existing.status, ResourceState::Updating);
            push_state(&mut existing.status, ResourceState::Active);
            tracing::debug!(
                tenant,
                workspace,
                name,
                version = existing.metadata.resource_version,
                "updated block storage"
            );
            return Ok(existing.clone());
        }

        let record = BlockStorageRecord {
            metadata: Metadata {
                api_version: API_VERSION.to_string(),
                kind: "block-storage".to_string(),
                name: name.to_string(),
                provider: STORAGE_PROVIDER.to_string(),
                resource: format!(
                    "tenants/{}/workspaces/{}/block-storages/{}",
                    tenant, workspace, name
                ),
                resource_version: 1,
                tenant: tenant.to_string(),
                workspace: Some(workspace.to_string()),
                verb: "put".to_string(),
                created_at: now.clone(),
                last_modified_at: now,
            },
            spec,
            status: created_status(),
        };
        storages.insert(storage_key(tenant, workspace, name), record.clone());
        tracing::debug!(tenant, workspace, name, "created block storage");
        Ok(record)
    }

    async fn get_sku(&self, _tenant: &str, reference: &str) -> Result<Sku, String> {
        self.skus
            .get(reference)
            .cloned()
            .ok_or_else(|| format!("unknown SKU: {}", reference))
    }
}
