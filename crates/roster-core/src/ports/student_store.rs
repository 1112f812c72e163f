//! StudentStore port - 永続化された順序付きマップ（正本）
//!
//! StudentStore は `StudentId -> Student` を管理します。
//! registry だけがこの trait を通してアクセスします。
//!
//! # 実装
//! - `impls::InMemoryStudentStore`（テスト・開発用）
//! - `impls::JsonFileStudentStore`（再起動をまたいで永続）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Student, StudentId};

/// StoreError は永続化層の失敗
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A data file exists but holds zero bytes (e.g. a write lost on power failure).
    #[error("store file {} is empty", .0.display())]
    EmptyFile(std::path::PathBuf),
}

/// Ordered, durable map from id to Student.
///
/// # 設計原則
/// - 各 point operation（get / insert / remove）は単体で atomic
/// - 複数レコードにまたがるトランザクションは提供しない
/// - `values()` はキーの昇順で返す（top-N の安定ソートを再現可能にするため）
#[async_trait]
pub trait StudentStore: Send + Sync {
    async fn get(&self, id: &StudentId) -> Result<Option<Student>, StoreError>;

    /// Insert or overwrite the record under `student.id`. Returns the previous value.
    async fn insert(&self, student: Student) -> Result<Option<Student>, StoreError>;

    /// Remove the record under `id`. Returns the removed value, if any.
    async fn remove(&self, id: &StudentId) -> Result<Option<Student>, StoreError>;

    /// Every stored record, ascending by key.
    async fn values(&self) -> Result<Vec<Student>, StoreError>;
}
