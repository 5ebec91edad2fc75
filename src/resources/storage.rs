//! Block storage resource declaration.

use crate::core::context::Context;
use crate::core::output::Output;
use crate::core::types::{BlockStorageRecord, BlockStorageSpec, Metadata, Status};

/// Arguments for declaring a block storage.
pub struct BlockStorageArgs {
    /// Desired configuration (size, SKU).
    pub spec: BlockStorageSpec,

    /// Name of the owning workspace, usually derived from a declared
    /// workspace's metadata output.
    pub workspace: Output<String>,
}

/// A declared block storage.
///
/// The record future awaits the `workspace` output before calling the
/// provider, so it cannot resolve before the upstream workspace does.
pub struct BlockStorage {
    name: String,
    workspace: Output<String>,
    record: Output<BlockStorageRecord>,
}

impl BlockStorage {
    /// Declare a block storage in the given context.
    pub fn new(ctx: &Context, name: &str, args: BlockStorageArgs) -> Result<Self, String> {
        let provider = ctx.provider();
        let tenant = ctx.tenant().to_string();
        let logical = name.to_string();
        let workspace = args.workspace.clone();
        let upstream = args.workspace;
        let spec = args.spec;
        let record = Output::from_future(async move {
            let ws = upstream.resolve().await?;
            provider
                .create_block_storage(&tenant, &ws, &logical, spec)
                .await
        });
        ctx.register(name, "block-storage", record.map(|_| ()))?;
        Ok(Self {
            name: name.to_string(),
            workspace,
            record,
        })
    }

    /// Logical name used at declaration time.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The owning workspace name; resolves when the upstream workspace does.
    pub fn workspace(&self) -> Output<String> {
        self.workspace.clone()
    }

    /// Deferred provider-computed metadata.
    pub fn metadata(&self) -> Output<Metadata> {
        self.record.map(|r| r.metadata)
    }

    /// Deferred resolved spec, as echoed back by the provider.
    pub fn spec(&self) -> Output<BlockStorageSpec> {
        self.record.map(|r| r.spec)
    }

    /// Deferred status.
    pub fn status(&self) -> Output<Status> {
        self.record.map(|r| r.status)
    }

    /// Deferred full record.
    pub fn record(&self) -> Output<BlockStorageRecord> {
        self.record.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Reference;
    use crate::provider::mock::InMemoryProvider;
    use crate::resources::workspace::{Workspace, WorkspaceArgs};
    use std::sync::Arc;

    fn standard_spec() -> BlockStorageSpec {
        BlockStorageSpec {
            size_gb: 32,
            sku_ref: Reference {
                resource: "skus/standard".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_workspace_field_defers_then_resolves() {
        let ctx = Context::new(Arc::new(InMemoryProvider::new()));
        let ws = Workspace::new(&ctx, "myWorkspace", WorkspaceArgs::default()).unwrap();
        let bs = BlockStorage::new(
            &ctx,
            "myStorage",
            BlockStorageArgs {
                spec: standard_spec(),
                workspace: ws.metadata().map(|m| m.name),
            },
        )
        .unwrap();

        // Not resolvable until the workspace's metadata resolves.
        assert!(bs.workspace().peek().is_none());

        let summary = ctx.run().await.unwrap();
        assert_eq!(summary.resolved, vec!["myWorkspace", "myStorage"]);
        assert_eq!(bs.workspace().resolve().await.unwrap(), "myWorkspace");
    }

    #[tokio::test]
    async fn test_resolved_spec_echoes_declaration() {
        let ctx = Context::new(Arc::new(InMemoryProvider::new()));
        let ws = Workspace::new(&ctx, "myWorkspace", WorkspaceArgs::default()).unwrap();
        let bs = BlockStorage::new(
            &ctx,
            "myStorage",
            BlockStorageArgs {
                spec: standard_spec(),
                workspace: ws.metadata().map(|m| m.name),
            },
        )
        .unwrap();
        ctx.run().await.unwrap();

        let spec = bs.spec().resolve().await.unwrap();
        assert_eq!(spec.size_gb, 32);
        assert_eq!(spec.sku_ref.resource, "skus/standard");

        let meta = bs.metadata().resolve().await.unwrap();
        assert_eq!(meta.workspace.as_deref(), Some("myWorkspace"));
        assert_eq!(
            meta.resource,
            "tenants/default/workspaces/myWorkspace/block-storages/myStorage"
        );
    }

    #[tokio::test]
    async fn test_dangling_workspace_reference_fails_run() {
        let ctx = Context::new(Arc::new(InMemoryProvider::new()));
        BlockStorage::new(
            &ctx,
            "orphan",
            BlockStorageArgs {
                spec: standard_spec(),
                workspace: Output::ready("ghost".to_string()),
            },
        )
        .unwrap();

        let err = ctx.run().await.unwrap_err();
        assert_eq!(err, "block-storage 'orphan': unknown workspace: ghost");
    }

    #[tokio::test]
    async fn test_upstream_failure_propagates() {
        let ctx = Context::new(Arc::new(InMemoryProvider::new()));
        let bs = BlockStorage::new(
            &ctx,
            "vol",
            BlockStorageArgs {
                spec: standard_spec(),
                workspace: Output::fail("workspace never materialized"),
            },
        )
        .unwrap();

        let err = ctx.run().await.unwrap_err();
        assert!(err.contains("workspace never materialized"));
        assert_eq!(
            bs.record().resolve().await.unwrap_err(),
            "workspace never materialized"
        );
    }

    #[tokio::test]
    async fn test_zero_size_rejected_at_run() {
        let ctx = Context::new(Arc::new(InMemoryProvider::new()));
        let ws = Workspace::new(&ctx, "ws", WorkspaceArgs::default()).unwrap();
        BlockStorage::new(
            &ctx,
            "vol",
            BlockStorageArgs {
                spec: BlockStorageSpec {
                    size_gb: 0,
                    sku_ref: Reference {
                        resource: "skus/standard".to_string(),
                    },
                },
                workspace: ws.metadata().map(|m| m.name),
            },
        )
        .unwrap();

        let err = ctx.run().await.unwrap_err();
        assert_eq!(err, "block-storage 'vol': sizeGB must be positive");
    }
}
