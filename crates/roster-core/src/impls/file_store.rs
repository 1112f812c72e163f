//! JsonFileStudentStore - 再起動をまたいで永続するストア
//!
//! # ファイル形式
//! `{ "<id>": <Student>, ... }` の JSON オブジェクト（キー昇順）。
//!
//! # 書き込み
//! 変更のたびに全体を `<path>.tmp` に書き出し、`sync_all` してから rename します。
//! 途中でプロセスが落ちても、ファイルは変更前か変更後のどちらかです。
//!
//! 既存の 0 byte ファイルは空ストアとして扱わず `StoreError::EmptyFile` にします
//! （黙って上書きすると全件消えるため）。

use std::collections::BTreeMap;
use std::io::ErrorKind as IoErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::domain::{Student, StudentId};
use crate::ports::{StoreError, StudentStore};

/// Durable store persisted as a single JSON document.
#[derive(Debug)]
pub struct JsonFileStudentStore {
    path: PathBuf,
    records: Mutex<BTreeMap<StudentId, Student>>,
}

impl JsonFileStudentStore {
    /// Open the store at `path`. A missing file is an empty store; an
    /// existing zero-length file is an error.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let records = match tokio::fs::read(&path).await {
            Ok(bytes) if bytes.is_empty() => {
                warn!(path = %path.display(), "student store file is empty; refusing to open");
                return Err(StoreError::EmptyFile(path));
            }
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == IoErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        debug!(path = %path.display(), records = records.len(), "opened student store");

        Ok(Self {
            path,
            records: Mutex::new(records),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, records: &BTreeMap<StudentId, Student>) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(records)?;
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(&bytes).await?;
        file.sync_all().await?;
        drop(file);

        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl StudentStore for JsonFileStudentStore {
    async fn get(&self, id: &StudentId) -> Result<Option<Student>, StoreError> {
        Ok(self.records.lock().await.get(id).cloned())
    }

    async fn insert(&self, student: Student) -> Result<Option<Student>, StoreError> {
        let mut records = self.records.lock().await;
        let id = student.id.clone();
        let previous = records.insert(id.clone(), student);

        // Roll back the in-memory view if the file could not be written.
        if let Err(e) = self.persist(&records).await {
            match previous {
                Some(prev) => records.insert(id, prev),
                None => records.remove(&id),
            };
            return Err(e);
        }
        Ok(previous)
    }

    async fn remove(&self, id: &StudentId) -> Result<Option<Student>, StoreError> {
        let mut records = self.records.lock().await;
        let Some(removed) = records.remove(id) else {
            return Ok(None);
        };

        if let Err(e) = self.persist(&records).await {
            records.insert(id.clone(), removed);
            return Err(e);
        }
        Ok(Some(removed))
    }

    async fn values(&self) -> Result<Vec<Student>, StoreError> {
        Ok(self.records.lock().await.values().cloned().collect())
    }
}
