//! Ranking - top-N の選択
//!
//! 純粋関数として実装します（ストアには触れない）。

use crate::domain::Student;

/// Order by `cgpa` descending and keep the first `count`.
///
/// The sort is stable: records with equal `cgpa` keep their input (store
/// enumeration) order, so a fixed snapshot always ranks the same way.
pub fn top_by_cgpa(mut students: Vec<Student>, count: usize) -> Vec<Student> {
    students.sort_by(|a, b| b.cgpa.cmp(&a.cgpa));
    students.truncate(count);
    students
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CreateStudentPayload, Principal, StudentId};
    use rstest::rstest;

    fn student(id: &str, cgpa: u64) -> Student {
        Student::new(
            StudentId::new(id),
            CreateStudentPayload {
                name: id.to_string(),
                course: "engineer".to_string(),
                level: 1,
                cgpa,
            },
            0,
            Principal::new("lecturer"),
        )
    }

    fn ids(students: &[Student]) -> Vec<&str> {
        students.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn picks_highest_first() {
        let population = vec![student("A", 3), student("B", 9), student("C", 5)];
        let top = top_by_cgpa(population, 2);
        assert_eq!(ids(&top), vec!["B", "C"]);
    }

    #[test]
    fn ties_keep_enumeration_order() {
        let population = vec![
            student("a", 5),
            student("b", 7),
            student("c", 5),
            student("d", 7),
        ];
        let top = top_by_cgpa(population, 4);
        assert_eq!(ids(&top), vec!["b", "d", "a", "c"]);
    }

    #[rstest]
    #[case::zero(0, 0)]
    #[case::fewer(2, 2)]
    #[case::exact(3, 3)]
    #[case::more(10, 3)]
    fn length_is_min_of_count_and_population(#[case] count: usize, #[case] expected: usize) {
        let population = vec![student("x", 1), student("y", 2), student("z", 3)];
        assert_eq!(top_by_cgpa(population, count).len(), expected);
    }

    #[test]
    fn every_returned_cgpa_dominates_the_rest() {
        let population: Vec<Student> = [4, 8, 1, 8, 6, 2, 9, 3]
            .iter()
            .enumerate()
            .map(|(i, cgpa)| student(&format!("s{i}"), *cgpa))
            .collect();

        let top = top_by_cgpa(population.clone(), 3);
        let min_returned = top.iter().map(|s| s.cgpa).min().unwrap();
        let rest_max = population
            .iter()
            .filter(|s| !top.iter().any(|t| t.id == s.id))
            .map(|s| s.cgpa)
            .max()
            .unwrap();

        assert!(min_returned >= rest_max);
        assert!(top.windows(2).all(|w| w[0].cgpa >= w[1].cgpa));
    }
}
