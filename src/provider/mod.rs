//! Provider seam — the backend that materializes declared resources.

pub mod mock;

use crate::core::types::{BlockStorageRecord, BlockStorageSpec, Sku, WorkspaceRecord};
use async_trait::async_trait;

/// Backend that materializes declared resources and computes their metadata.
///
/// Validation lives here, not in the declaration glue: dangling workspace
/// references, non-positive sizes, and unknown SKUs are provider errors.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Create (or update) a workspace; returns the materialized record.
    async fn create_workspace(
        &self,
        tenant: &str,
        name: &str,
        spec: serde_json::Value,
    ) -> Result<WorkspaceRecord, String>;

    /// Create (or update) a block storage inside a workspace.
    async fn create_block_storage(
        &self,
        tenant: &str,
        workspace: &str,
        name: &str,
        spec: BlockStorageSpec,
    ) -> Result<BlockStorageRecord, String>;

    /// Look up a SKU by reference path, e.g. "skus/standard".
    async fn get_sku(&self, tenant: &str, reference: &str) -> Result<Sku, String>;
}
