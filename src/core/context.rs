//! Declaration context — registers resources and drives their resolution.
//!
//! Declarations register synchronously in program order; `run` then awaits
//! each one's output in that order, stopping at the first failure. The
//! dependency edge between resources is carried by the outputs themselves
//! (a downstream record future awaits its upstream output first), so no
//! explicit graph is needed for this pattern.

use crate::core::output::Output;
use crate::provider::Provider;
use indexmap::IndexMap;
use std::sync::{Arc, Mutex};

const DEFAULT_TENANT: &str = "default";

/// Registration entry for a declared resource.
struct Registration {
    kind: &'static str,
    done: Output<()>,
}

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Logical names in the order they resolved.
    pub resolved: Vec<String>,
}

/// Declaration context: resources register here, [`Context::run`] resolves
/// them against the provider.
pub struct Context {
    provider: Arc<dyn Provider>,
    tenant: String,
    registry: Mutex<IndexMap<String, Registration>>,
}

impl Context {
    /// Create a context over a provider with the default tenant.
    pub fn new(provider: Arc<dyn Provider>) -> Self {
        Self::with_tenant(provider, DEFAULT_TENANT)
    }

    /// Create a context scoped to a tenant.
    pub fn with_tenant(provider: Arc<dyn Provider>, tenant: &str) -> Self {
        Self {
            provider,
            tenant: tenant.to_string(),
            registry: Mutex::new(IndexMap::new()),
        }
    }

    /// Tenant every declaration in this context belongs to.
    pub fn tenant(&self) -> &str {
        &self.tenant
    }

    pub(crate) fn provider(&self) -> Arc<dyn Provider> {
        Arc::clone(&self.provider)
    }

    /// Register a declared resource under its logical name.
    /// Logical names are unique within a context.
    pub(crate) fn register(
        &self,
        name: &str,
        kind: &'static str,
        done: Output<()>,
    ) -> Result<(), String> {
        let mut registry = self
            .registry
            .lock()
            .map_err(|_| "registry poisoned".to_string())?;
        if registry.contains_key(name) {
            return Err(format!("duplicate resource name: {}", name));
        }
        tracing::debug!(name, kind, "registered resource");
        registry.insert(name.to_string(), Registration { kind, done });
        Ok(())
    }

    /// Resolve every registered resource in declaration order.
    /// Stops at the first failure; later resources stay unresolved.
    pub async fn run(&self) -> Result<RunSummary, String> {
        let entries: Vec<(String, &'static str, Output<()>)> = {
            let registry = self
                .registry
                .lock()
                .map_err(|_| "registry poisoned".to_string())?;
            registry
                .iter()
                .map(|(name, reg)| (name.clone(), reg.kind, reg.done.clone()))
                .collect()
        };

        let mut resolved = Vec::with_capacity(entries.len());
        for (name, kind, done) in entries {
            done.resolve()
                .await
                .map_err(|e| format!("{} '{}': {}", kind, name, e))?;
            tracing::debug!(name = %name, kind, "resource resolved");
            resolved.push(name);
        }

        Ok(RunSummary { resolved })
    }
}
