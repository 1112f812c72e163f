//! App - アプリケーション層
//!
//! このモジュールは、ports を組み合わせて registry のロジックを実装します。
//!
//! # 主要コンポーネント
//! - **StudentRegistry**: create / read / update / delete / top-N
//! - **RegistryBuilder**: 構築とワイヤリング
//! - **ranking**: top-N 選択（純粋関数）

pub mod builder;
pub mod ranking;
pub mod registry;

// 主要な型を再エクスポート
pub use self::builder::{BuildError, RegistryBuilder};
pub use self::registry::StudentRegistry;
