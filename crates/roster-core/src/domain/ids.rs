//! Domain identifiers (StudentId, Principal).
//!
//! # StudentId
//! 生成は `IdGenerator` に任せ、ここでは「不透明な文字列キー」として扱います。
//! - 表示形式: `student-<ULID>`（`UlidGenerator` が生成する場合）
//! - 外部（CLI / RPC）から渡された任意の文字列もそのままキーとして使える
//!
//! 文字列として保持するので、存在しない id の問い合わせはパースエラーではなく
//! `UserDoesNotExist` として扱えます。

use serde::{Deserialize, Serialize};
use std::fmt;
use ulid::Ulid;

/// Display prefix used for generated ids.
pub const STUDENT_ID_PREFIX: &str = "student-";

/// Identifier of a Student record (primary key of the store).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(String);

impl StudentId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// ULID から StudentId を作成（`student-` プレフィックス付き）
    pub fn from_ulid(ulid: Ulid) -> Self {
        Self(format!("{STUDENT_ID_PREFIX}{ulid}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Ulid> for StudentId {
    fn from(ulid: Ulid) -> Self {
        Self::from_ulid(ulid)
    }
}

impl From<&str> for StudentId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for StudentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Opaque caller identity recorded as a record's `lecturerId`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Principal(String);

impl Principal {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
