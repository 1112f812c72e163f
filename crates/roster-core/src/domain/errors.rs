//! Errors - エラー型と分類
//!
//! 呼び出し側に返すのはドメインの 2 種類（UserDoesNotExist / CourseDoesNotExist）と、
//! 永続化層の失敗（Storage）のみです。すべて Result として返し、panic しません。

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ports::StoreError;

/// ErrorKind は transport 向けの安定した分類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    UserDoesNotExist,
    CourseDoesNotExist,
    Storage,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::UserDoesNotExist => "UserDoesNotExist",
            ErrorKind::CourseDoesNotExist => "CourseDoesNotExist",
            ErrorKind::Storage => "Storage",
        }
    }
}

/// RegistryError is returned by every registry operation.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A lookup/removal target is missing, or a list query came back empty.
    #[error("{0}")]
    UserDoesNotExist(String),

    /// A supplied course is not in the fixed course set.
    #[error("{0}")]
    CourseDoesNotExist(String),

    #[error("store failure: {0}")]
    Store(#[from] StoreError),
}

impl RegistryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RegistryError::UserDoesNotExist(_) => ErrorKind::UserDoesNotExist,
            RegistryError::CourseDoesNotExist(_) => ErrorKind::CourseDoesNotExist,
            RegistryError::Store(_) => ErrorKind::Storage,
        }
    }

    /// The message a transport should surface verbatim.
    pub fn message(&self) -> String {
        match self {
            RegistryError::UserDoesNotExist(msg) | RegistryError::CourseDoesNotExist(msg) => {
                msg.clone()
            }
            RegistryError::Store(err) => err.to_string(),
        }
    }
}
