//! Student record and the payloads that create or mutate it.

use serde::{Deserialize, Serialize};

use super::ids::{Principal, StudentId};

/// Milliseconds since the Unix epoch.
pub type Timestamp = u64;

/// A single Student record stored under its id.
///
/// Design:
/// - `id`, `created_at` and `lecturer_id` are assigned once by the registry and
///   never touched afterwards.
/// - `updated_at` is `None` until the first update, so "never updated" stays
///   distinguishable from any real timestamp (including 0).
/// - All mutations go through `apply_update` / `apply_grade`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: StudentId,
    /// Expected non-empty; the registry stores whatever the caller sends.
    pub name: String,

    /// Stored exactly as supplied (not normalized); validated case-insensitively.
    pub course: String,

    pub level: u64,

    /// Integer grade value. Fractional grade points are not representable.
    pub cgpa: u64,

    pub created_at: Timestamp,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,

    pub lecturer_id: Principal,
}

impl Student {
    /// Build a freshly created record (no `updated_at`).
    pub fn new(
        id: StudentId,
        payload: CreateStudentPayload,
        created_at: Timestamp,
        lecturer_id: Principal,
    ) -> Self {
        Self {
            id,
            name: payload.name,
            course: payload.course,
            level: payload.level,
            cgpa: payload.cgpa,
            created_at,
            updated_at: None,
            lecturer_id,
        }
    }

    /// Merge a full update payload into this record.
    ///
    /// Field policy:
    /// - `name`, `level`, `cgpa`: always replaced.
    /// - `course`: replaced only when the payload course is non-empty. The
    ///   caller validates a non-empty course before calling this.
    /// - `id`, `created_at`, `lecturer_id`: never replaced.
    /// - `updated_at`: stamped via [`Student::touch`].
    pub fn apply_update(&mut self, payload: UpdateStudentPayload, now: Timestamp) {
        let UpdateStudentPayload {
            name,
            course,
            level,
            cgpa,
        } = payload;

        self.name = name;
        if !course.is_empty() {
            self.course = course;
        }
        self.level = level;
        self.cgpa = cgpa;
        self.touch(now);
    }

    /// Replace only `cgpa` and stamp `updated_at`.
    pub fn apply_grade(&mut self, payload: UpdateGradePayload, now: Timestamp) {
        self.cgpa = payload.cgpa;
        self.touch(now);
    }

    /// Stamp `updated_at`, never going below the last known timestamp.
    ///
    /// Keeps `created_at <= updated_at` even if the clock steps backwards.
    fn touch(&mut self, now: Timestamp) {
        let floor = self.updated_at.unwrap_or(self.created_at);
        self.updated_at = Some(now.max(floor));
    }
}

/// Input of `createStudent`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateStudentPayload {
    pub name: String,
    pub course: String,
    pub level: u64,
    pub cgpa: u64,
}

/// Input of `updateStudent` (full-replacement payload).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateStudentPayload {
    pub name: String,

    /// Empty string means "keep the current course".
    #[serde(default)]
    pub course: String,

    pub level: u64,
    pub cgpa: u64,
}

/// Input of `updateGrade`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateGradePayload {
    pub cgpa: u64,
}
