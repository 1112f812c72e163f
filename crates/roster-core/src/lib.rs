//! roster-core
//!
//! Core building blocks for the Student Registry.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ids, course, student, errors）
//! - **ports**: 抽象化レイヤー（StudentStore, Clock, IdGenerator, CallerIdentity）
//! - **impls**: ports の実装（InMemoryStudentStore, JsonFileStudentStore）
//! - **app**: アプリケーションロジック（StudentRegistry, RegistryBuilder, ranking）
//! - **config** / **logging**: プロセス設定と tracing の初期化

pub mod app;
pub mod config;
pub mod domain;
pub mod impls;
pub mod logging;
pub mod ports;

use std::sync::Arc;

use thiserror::Error;

pub use app::{RegistryBuilder, StudentRegistry};
pub use config::RegistryConfig;
pub use domain::{ErrorKind, RegistryError, Student, StudentId};

use crate::app::BuildError;
use crate::config::StoreBackend;
use crate::impls::{InMemoryStudentStore, JsonFileStudentStore};
use crate::ports::{StaticIdentity, StoreError, StudentStore};

#[derive(Debug, Error)]
pub enum OpenError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Build(#[from] BuildError),
}

/// Wire a registry from configuration (store backend + static identity).
pub async fn open_registry(config: &RegistryConfig) -> Result<StudentRegistry, OpenError> {
    let store: Arc<dyn StudentStore> = match config.store.backend {
        StoreBackend::Memory => Arc::new(InMemoryStudentStore::new()),
        StoreBackend::File => Arc::new(JsonFileStudentStore::open(&config.store.path).await?),
    };
    tracing::debug!(backend = ?config.store.backend, "opening registry");

    let registry = RegistryBuilder::new()
        .store(store)
        .identity(Arc::new(StaticIdentity::new(
            config.identity.principal.clone(),
        )))
        .build()?;
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CreateStudentPayload;

    #[tokio::test]
    async fn open_registry_with_file_backend_persists() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = RegistryConfig::default();
        config.store.path = dir.path().join("roster.json");
        config.identity.principal = "lecturer-5".to_string();

        let created = {
            let registry = open_registry(&config).await.unwrap();
            registry
                .create_student(CreateStudentPayload {
                    name: "Jo".to_string(),
                    course: "Accounting".to_string(),
                    level: 3,
                    cgpa: 6,
                })
                .await
                .unwrap()
        };

        let reopened = open_registry(&config).await.unwrap();
        let found = reopened.get_student_by_id(&created.id).await.unwrap();
        assert_eq!(found, created);
        assert_eq!(found.lecturer_id.as_str(), "lecturer-5");
    }

    #[tokio::test]
    async fn open_registry_with_memory_backend_starts_empty() {
        let mut config = RegistryConfig::default();
        config.store.backend = StoreBackend::Memory;

        let registry = open_registry(&config).await.unwrap();
        let err = registry.get_all_students().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UserDoesNotExist);
    }
}
