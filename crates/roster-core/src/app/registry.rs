//! StudentRegistry - Student レコードの検証・更新・問い合わせ
//!
//! # 設計原則
//! - ストアへのアクセスはすべてこの型を経由する
//! - 各操作は 1 回の point operation（または values の列挙）で完結する
//! - 失敗はすべて `RegistryError` として返す（panic しない）
//! - ロックは持たない。ストアの各 point operation が atomic であることに依存する

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::ranking::top_by_cgpa;
use crate::domain::{
    CourseType, CreateStudentPayload, RegistryError, Student, StudentId, UpdateGradePayload,
    UpdateStudentPayload,
};
use crate::ports::{CallerIdentity, Clock, IdGenerator, StudentStore};

pub const NO_STUDENTS_FOUND: &str = "No students found";
pub const NO_TOP_STUDENTS_FOUND: &str = "No top-performing students found";

/// The registry owns the store and the injected collaborators.
pub struct StudentRegistry {
    store: Arc<dyn StudentStore>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
    identity: Arc<dyn CallerIdentity>,
}

impl StudentRegistry {
    pub fn new(
        store: Arc<dyn StudentStore>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
        identity: Arc<dyn CallerIdentity>,
    ) -> Self {
        Self {
            store,
            clock,
            ids,
            identity,
        }
    }

    /// Validate the course, then insert a new record under a fresh id.
    pub async fn create_student(
        &self,
        payload: CreateStudentPayload,
    ) -> Result<Student, RegistryError> {
        ensure_course(&payload.course)?;

        let id = self.ids.generate_student_id();
        let student = Student::new(
            id,
            payload,
            self.clock.now_millis(),
            self.identity.caller(),
        );
        self.store.insert(student.clone()).await?;

        info!(
            student_id = %student.id,
            lecturer_id = %student.lecturer_id,
            "student created"
        );
        Ok(student)
    }

    /// Every stored record. An empty store is `UserDoesNotExist`.
    pub async fn get_all_students(&self) -> Result<Vec<Student>, RegistryError> {
        let students = self.store.values().await?;
        debug!(count = students.len(), "listed students");
        if students.is_empty() {
            return Err(RegistryError::UserDoesNotExist(
                NO_STUDENTS_FOUND.to_string(),
            ));
        }
        Ok(students)
    }

    pub async fn get_student_by_id(&self, id: &StudentId) -> Result<Student, RegistryError> {
        debug!(student_id = %id, "get student");
        self.find(id).await
    }

    /// Full-record update; see [`Student::apply_update`] for the field policy.
    pub async fn update_student(
        &self,
        id: &StudentId,
        payload: UpdateStudentPayload,
    ) -> Result<Student, RegistryError> {
        let mut student = self.find(id).await?;
        if !payload.course.is_empty() {
            ensure_course(&payload.course)?;
        }

        student.apply_update(payload, self.clock.now_millis());
        self.store.insert(student.clone()).await?;

        info!(student_id = %id, "student updated");
        Ok(student)
    }

    pub async fn update_grade(
        &self,
        id: &StudentId,
        payload: UpdateGradePayload,
    ) -> Result<Student, RegistryError> {
        let mut student = self.find(id).await?;

        student.apply_grade(payload, self.clock.now_millis());
        self.store.insert(student.clone()).await?;

        info!(student_id = %id, cgpa = student.cgpa, "grade updated");
        Ok(student)
    }

    /// Remove the record and return its last state.
    pub async fn delete_student_record(&self, id: &StudentId) -> Result<Student, RegistryError> {
        match self.store.remove(id).await? {
            Some(removed) => {
                info!(student_id = %id, "student deleted");
                Ok(removed)
            }
            None => {
                warn!(student_id = %id, "delete of unknown student");
                Err(RegistryError::UserDoesNotExist(id.to_string()))
            }
        }
    }

    /// The `count` records with the highest `cgpa`, highest first.
    ///
    /// An empty result (empty store or `count == 0`) is `UserDoesNotExist`.
    pub async fn get_top_students(&self, count: u64) -> Result<Vec<Student>, RegistryError> {
        let students = self.store.values().await?;
        let count = usize::try_from(count).unwrap_or(usize::MAX);

        let top = top_by_cgpa(students, count);
        debug!(requested = count, returned = top.len(), "ranked students");
        if top.is_empty() {
            return Err(RegistryError::UserDoesNotExist(
                NO_TOP_STUDENTS_FOUND.to_string(),
            ));
        }
        Ok(top)
    }

    async fn find(&self, id: &StudentId) -> Result<Student, RegistryError> {
        match self.store.get(id).await? {
            Some(student) => Ok(student),
            None => {
                warn!(student_id = %id, "unknown student");
                Err(RegistryError::UserDoesNotExist(id.to_string()))
            }
        }
    }
}

fn ensure_course(course: &str) -> Result<CourseType, RegistryError> {
    CourseType::match_name(course).ok_or_else(|| {
        warn!(course, "rejected course");
        RegistryError::CourseDoesNotExist(format!(
            "course '{course}' does not exist; valid courses are: {}",
            CourseType::listing()
        ))
    })
}
