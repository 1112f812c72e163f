//! Domain model (ids, course set, student record, errors).

pub mod course;
pub mod errors;
pub mod ids;
pub mod student;

pub use course::CourseType;
pub use errors::{ErrorKind, RegistryError};
pub use ids::{Principal, StudentId};
pub use student::{
    CreateStudentPayload, Student, Timestamp, UpdateGradePayload, UpdateStudentPayload,
};
