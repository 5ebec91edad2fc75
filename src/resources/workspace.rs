//! Workspace resource declaration.

use crate::core::context::Context;
use crate::core::output::Output;
use crate::core::types::{Metadata, Status, WorkspaceRecord};

/// Arguments for declaring a workspace.
#[derive(Debug, Clone)]
pub struct WorkspaceArgs {
    /// Opaque workspace configuration, passed through to the provider.
    pub spec: serde_json::Value,
}

impl Default for WorkspaceArgs {
    fn default() -> Self {
        Self {
            spec: serde_json::Value::Object(serde_json::Map::new()),
        }
    }
}

/// A declared workspace.
///
/// Its record is a deferred output that resolves once the provider has
/// materialized the resource; downstream declarations typically consume
/// `metadata().map(|m| m.name)`.
#[derive(Debug)]
pub struct Workspace {
    name: String,
    record: Output<WorkspaceRecord>,
}

impl Workspace {
    /// Declare a workspace in the given context.
    pub fn new(ctx: &Context, name: &str, args: WorkspaceArgs) -> Result<Self, String> {
        let provider = ctx.provider();
        let tenant = ctx.tenant().to_string();
        let logical = name.to_string();
        let record = Output::from_future(async move {
            provider.create_workspace(&tenant, &logical, args.spec).await
        });
        ctx.register(name, "workspace", record.map(|_| ()))?;
        Ok(Self {
            name: name.to_string(),
            record,
        })
    }

    /// Logical name used at declaration time.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Deferred provider-computed metadata.
    pub fn metadata(&self) -> Output<Metadata> {
        self.record.map(|r| r.metadata)
    }

    /// Deferred status.
    pub fn status(&self) -> Output<Status> {
        self.record.map(|r| r.status)
    }

    /// Deferred full record.
    pub fn record(&self) -> Output<WorkspaceRecord> {
        self.record.clone()
    }
}
