//! CourseType - 受け付ける course の固定集合
//!
//! レコードには入力された文字列をそのまま保存します（正規化しない）。
//! 検証だけが大文字小文字を無視して集合と照合します。

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of valid course names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseType {
    Accounting,
    #[serde(rename = "information tech")]
    InformationTech,
    Medicine,
    Engineer,
    Farming,
}

impl CourseType {
    /// All members, in the order they are listed in error messages.
    pub const ALL: [CourseType; 5] = [
        CourseType::Accounting,
        CourseType::InformationTech,
        CourseType::Medicine,
        CourseType::Engineer,
        CourseType::Farming,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CourseType::Accounting => "accounting",
            CourseType::InformationTech => "information tech",
            CourseType::Medicine => "medicine",
            CourseType::Engineer => "engineer",
            CourseType::Farming => "farming",
        }
    }

    /// Case-insensitive lookup against the fixed set.
    ///
    /// No trimming is applied: `" medicine"` is not a member.
    pub fn match_name(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|course| course.as_str().eq_ignore_ascii_case(value))
    }

    pub fn is_valid(value: &str) -> bool {
        Self::match_name(value).is_some()
    }

    /// Comma separated list of every member, e.g. for error messages.
    pub fn listing() -> String {
        Self::ALL
            .iter()
            .map(|course| course.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for CourseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
