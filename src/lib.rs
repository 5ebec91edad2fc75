//! Tramar — declarative resource graphs with deferred output propagation.
//!
//! Declare resources against a provider; each declaration yields deferred
//! outputs that resolve once the provider has materialized the resource.
//! Downstream declarations consume upstream outputs through [`Output::map`],
//! so dependency order falls out of the data flow.
//!
//! ```
//! use std::sync::Arc;
//! use tramar::core::types::{BlockStorageSpec, Reference};
//! use tramar::provider::mock::InMemoryProvider;
//! use tramar::resources::storage::{BlockStorage, BlockStorageArgs};
//! use tramar::resources::workspace::{Workspace, WorkspaceArgs};
//! use tramar::Context;
//!
//! # fn main() -> Result<(), String> {
//! let rt = tokio::runtime::Builder::new_current_thread()
//!     .build()
//!     .map_err(|e| e.to_string())?;
//! rt.block_on(async {
//!     let ctx = Context::new(Arc::new(InMemoryProvider::new()));
//!     let ws = Workspace::new(&ctx, "myWorkspace", WorkspaceArgs::default())?;
//!     let bs = BlockStorage::new(
//!         &ctx,
//!         "myStorage",
//!         BlockStorageArgs {
//!             spec: BlockStorageSpec {
//!                 size_gb: 32,
//!                 sku_ref: Reference {
//!                     resource: "skus/standard".to_string(),
//!                 },
//!             },
//!             workspace: ws.metadata().map(|m| m.name),
//!         },
//!     )?;
//!     ctx.run().await?;
//!     assert_eq!(bs.workspace().resolve().await?, "myWorkspace");
//!     Ok(())
//! })
//! # }
//! ```

pub mod core;
pub mod provider;
pub mod resources;

pub use crate::core::context::{Context, RunSummary};
pub use crate::core::output::Output;
