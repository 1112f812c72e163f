//! Ports - 抽象化レイヤー
//!
//! このモジュールは Hexagonal Architecture の「ポート」を定義します。
//! registry が依存する外部の能力（時刻・ID 生成・呼び出し元・ストア）を
//! trait として切り出し、実装の詳細を隠蔽します。

pub mod clock;
pub mod id_generator;
pub mod identity;
pub mod student_store;

// 主要な trait を再エクスポート
pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::id_generator::{IdGenerator, UlidGenerator};
pub use self::identity::{CallerIdentity, StaticIdentity};
pub use self::student_store::{StoreError, StudentStore};
