//! Composition root: builds the registry, runs module lifecycles and serves HTTP.

use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use courses_kernel::{settings::Settings, InitCtx, ModuleRegistry};

use crate::modules::{self, courses::store::CourseStore};

/// Registry with every module registered, plus the shared course store.
pub fn build_registry(settings: &Settings) -> (ModuleRegistry, Arc<CourseStore>) {
    let mut registry = ModuleRegistry::new();
    let store = modules::register_all(&mut registry, settings);
    (registry, store)
}

/// Fully layered application router, without binding a listener.
pub fn build_app(settings: &Settings) -> (Router, Arc<CourseStore>) {
    let (registry, store) = build_registry(settings);
    (courses_http::build_router(&registry, settings), store)
}

/// Bring modules up, serve until a shutdown signal, then stop modules.
pub async fn run(settings: Settings) -> anyhow::Result<()> {
    let (registry, _store) = build_registry(&settings);
    let ctx = InitCtx {
        settings: &settings,
    };

    registry
        .init_all(&ctx)
        .await
        .context("module initialization failed")?;
    registry
        .start_all(&ctx)
        .await
        .context("module start failed")?;

    let served = courses_http::start_server(&registry, &settings, shutdown_signal()).await;
    let stopped = registry.stop_all().await;

    served?;
    stopped?;
    tracing::info!("courses service shut down cleanly");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_contains_courses_without_db_by_default() {
        let (registry, _store) = build_registry(&Settings::default());
        assert!(registry.get_module("courses").is_some());
        assert!(registry.get_module("db").is_none());
        assert_eq!(registry.core_module_count(), 0);
    }

    #[test]
    fn enabling_database_registers_core_db_module() {
        let mut settings = Settings::default();
        settings.database.enabled = true;
        let (registry, _store) = build_registry(&settings);
        assert!(registry.get_module("db").is_some());
        assert_eq!(registry.core_module_count(), 1);
    }

    #[tokio::test]
    async fn store_is_seeded_unless_disabled() {
        let (_registry, seeded) = build_registry(&Settings::default());
        assert_eq!(seeded.len().await, 2);

        let mut settings = Settings::default();
        settings.courses.seed_demo_data = false;
        let (_registry, empty) = build_registry(&settings);
        assert!(empty.is_empty().await);
    }

    #[tokio::test]
    async fn enabled_database_without_uri_fails_init() {
        if std::env::var(courses_db::URI_ENV_VAR).is_ok() {
            return;
        }
        let mut settings = Settings::default();
        settings.database.enabled = true;
        let (registry, _store) = build_registry(&settings);
        let ctx = InitCtx {
            settings: &settings,
        };

        let err = registry.init_all(&ctx).await.unwrap_err();
        assert!(format!("{:#}", err).contains("MONGO_URI"));
    }
}
