//! InMemoryStudentStore - 開発・テスト用のストア
//!
//! # 実装詳細
//! - BTreeMap<StudentId, Student> でキー順を保持
//! - tokio::sync::Mutex で排他制御（ロックを跨いで await しない）

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{Student, StudentId};
use crate::ports::{StoreError, StudentStore};

/// Non-durable store backed by an ordered map.
#[derive(Debug, Default)]
pub struct InMemoryStudentStore {
    records: Mutex<BTreeMap<StudentId, Student>>,
}

impl InMemoryStudentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.lock().await.is_empty()
    }
}

#[async_trait]
impl StudentStore for InMemoryStudentStore {
    async fn get(&self, id: &StudentId) -> Result<Option<Student>, StoreError> {
        Ok(self.records.lock().await.get(id).cloned())
    }

    async fn insert(&self, student: Student) -> Result<Option<Student>, StoreError> {
        let mut records = self.records.lock().await;
        Ok(records.insert(student.id.clone(), student))
    }

    async fn remove(&self, id: &StudentId) -> Result<Option<Student>, StoreError> {
        Ok(self.records.lock().await.remove(id))
    }

    async fn values(&self) -> Result<Vec<Student>, StoreError> {
        Ok(self.records.lock().await.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CreateStudentPayload, Principal};

    fn student(id: &str, cgpa: u64) -> Student {
        Student::new(
            StudentId::new(id),
            CreateStudentPayload {
                name: format!("name-{id}"),
                course: "farming".to_string(),
                level: 1,
                cgpa,
            },
            10,
            Principal::new("lecturer"),
        )
    }

    #[tokio::test]
    async fn insert_get_remove_roundtrip() {
        let store = InMemoryStudentStore::new();
        let s = student("a", 3);

        assert_eq!(store.insert(s.clone()).await.unwrap(), None);
        assert_eq!(store.get(&s.id).await.unwrap(), Some(s.clone()));
        assert_eq!(store.len().await, 1);

        assert_eq!(store.remove(&s.id).await.unwrap(), Some(s.clone()));
        assert_eq!(store.get(&s.id).await.unwrap(), None);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn insert_overwrites_and_returns_previous() {
        let store = InMemoryStudentStore::new();
        let first = student("a", 3);
        let mut second = first.clone();
        second.cgpa = 8;

        store.insert(first.clone()).await.unwrap();
        let previous = store.insert(second.clone()).await.unwrap();

        assert_eq!(previous, Some(first));
        assert_eq!(store.get(&second.id).await.unwrap(), Some(second));
    }

    #[tokio::test]
    async fn values_are_in_key_order() {
        let store = InMemoryStudentStore::new();
        for id in ["c", "a", "b"] {
            store.insert(student(id, 1)).await.unwrap();
        }

        let ids: Vec<String> = store
            .values()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.id.to_string())
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn remove_missing_is_none() {
        let store = InMemoryStudentStore::new();
        assert_eq!(store.remove(&StudentId::new("ghost")).await.unwrap(), None);
    }
}
