//! Impls - ports の実装
//!
//! # 含まれる実装
//! - **InMemoryStudentStore**: 開発・テスト用
//! - **JsonFileStudentStore**: ファイルに永続化する StudentStore

pub mod file_store;
pub mod inmem_store;

pub use self::file_store::JsonFileStudentStore;
pub use self::inmem_store::InMemoryStudentStore;
