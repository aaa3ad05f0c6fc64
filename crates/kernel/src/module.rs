use async_trait::async_trait;
use axum::Router;

/// Context provided to modules during initialization
pub struct InitCtx<'a> {
    pub settings: &'a crate::settings::Settings,
}

/// Core module trait that every courses-service module implements
#[async_trait]
pub trait Module: Sync + Send {
    /// Unique name for this module
    fn name(&self) -> &'static str;

    /// Initialize the module with the provided context
    /// Called during application startup before the HTTP server binds
    async fn init(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        Ok(())
    }

    /// Return the Axum router for this module's routes
    fn routes(&self) -> Router {
        Router::new()
    }

    /// Path the module's router is mounted under.
    ///
    /// Defaults to `/api/{module_name}`. A module returning `/` has its
    /// routes merged into the server root.
    fn mount_path(&self) -> String {
        format!("/api/{}", self.name())
    }

    /// Return OpenAPI specification fragment for this module as JSON
    /// Paths are relative to [`Module::mount_path`]
    fn openapi(&self) -> Option<serde_json::Value> {
        None
    }

    /// Start background work for this module
    /// Called after every module has been initialized
    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        Ok(())
    }

    /// Stop the module and clean up resources
    /// Called during application shutdown
    async fn stop(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Plain;

    #[async_trait]
    impl Module for Plain {
        fn name(&self) -> &'static str {
            "plain"
        }
    }

    #[test]
    fn default_mount_path_is_namespaced_under_api() {
        assert_eq!(Plain.mount_path(), "/api/plain");
        assert!(Plain.openapi().is_none());
    }
}
