//! RegistryBuilder - StudentRegistry の構築とワイヤリング
//!
//! # 学習ポイント
//! - Builder パターンの実装
//! - 起動時検証（Fail-fast 設計）

use std::sync::Arc;

use crate::app::registry::StudentRegistry;
use crate::ports::{
    CallerIdentity, Clock, IdGenerator, StudentStore, SystemClock, UlidGenerator,
};

/// RegistryBuilder は StudentRegistry を構築
///
/// # 使用例
/// ```ignore
/// let registry = RegistryBuilder::new()
///     .store(Arc::new(InMemoryStudentStore::new()))
///     .identity(Arc::new(StaticIdentity::new("lecturer-1")))
///     .build()?;
/// ```
///
/// # デフォルト
/// - clock: SystemClock
/// - id_generator: 設定された clock を使う UlidGenerator
///
/// store と identity は必須。無ければ build() が BuildError を返す。
#[derive(Default)]
pub struct RegistryBuilder {
    store: Option<Arc<dyn StudentStore>>,
    clock: Option<Arc<dyn Clock>>,
    ids: Option<Arc<dyn IdGenerator>>,
    identity: Option<Arc<dyn CallerIdentity>>,
}

/// BuildError は構築時のエラー
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Missing collaborator: {0}. It must be configured before build().")]
    Missing(&'static str),
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(mut self, store: Arc<dyn StudentStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = Some(ids);
        self
    }

    pub fn identity(mut self, identity: Arc<dyn CallerIdentity>) -> Self {
        self.identity = Some(identity);
        self
    }

    pub fn build(self) -> Result<StudentRegistry, BuildError> {
        let store = self.store.ok_or(BuildError::Missing("store"))?;
        let identity = self.identity.ok_or(BuildError::Missing("identity"))?;
        let clock = self
            .clock
            .unwrap_or_else(|| Arc::new(SystemClock) as Arc<dyn Clock>);
        let ids = self
            .ids
            .unwrap_or_else(|| Arc::new(UlidGenerator::new(clock.clone())) as Arc<dyn IdGenerator>);

        Ok(StudentRegistry::new(store, clock, ids, identity))
    }
}
