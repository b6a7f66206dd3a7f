//! Course catalog: grade points, curriculum course lists and valid grades
//!
//! The catalog is loaded once and only read during an audit. Course codes in
//! every list are normalized (trimmed, uppercased) when the catalog is built;
//! grade tokens are kept exactly as written.

use crate::core::error::AuditError;
use crate::core::models::{normalize_code, CurriculumPath};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

/// Catalog list names, in the order diagnostics report them
pub const PATH1_LIST: &str = "Path 1 Courses";
/// Compulsory courses for Path 1
pub const COMPULSORY_PATH1_LIST: &str = "Compulsory Path 1";
/// Compulsory courses for Path 2
pub const COMPULSORY_PATH2_LIST: &str = "Compulsory Path 2";
/// Courses excluded from GPA
pub const GPA_INELIGIBLE_LIST: &str = "GPA Ineligible Courses";

/// Grading and curriculum tables for one degree programme
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Grade token to grade point
    #[serde(default)]
    grade_points: BTreeMap<String, f64>,

    /// Grade tokens accepted as valid
    #[serde(default)]
    valid_grades: BTreeSet<String>,

    /// Courses whose presence places a student on Path 1
    #[serde(default)]
    path1_courses: Vec<String>,

    /// Compulsory courses for Path 1 students
    #[serde(default)]
    compulsory_path1: Vec<String>,

    /// Compulsory courses for Path 2 students
    #[serde(default)]
    compulsory_path2: Vec<String>,

    /// Courses that never count toward GPA (e.g., pass/fail)
    #[serde(default)]
    gpa_ineligible: Vec<String>,
}

impl Catalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a catalog from a TOML string
    ///
    /// ```toml
    /// valid_grades = ["A", "B", "C"]
    /// path1_courses = ["ELEC 11012"]
    ///
    /// [grade_points]
    /// A = 4.0
    /// "B+" = 3.3
    /// ```
    ///
    /// # Errors
    /// Returns an error if the TOML cannot be parsed or doesn't match the catalog schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut catalog: Self = toml::from_str(toml_str)?;
        catalog.normalize_lists();
        Ok(catalog)
    }

    /// Load a catalog from a TOML file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, AuditError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| AuditError::io(path, e))?;
        Self::from_toml(&content).map_err(|source| AuditError::Catalog {
            path: path.to_path_buf(),
            source,
        })
    }

    fn normalize_lists(&mut self) {
        for list in [
            &mut self.path1_courses,
            &mut self.compulsory_path1,
            &mut self.compulsory_path2,
            &mut self.gpa_ineligible,
        ] {
            for code in list.iter_mut() {
                *code = normalize_code(code);
            }
        }
    }

    /// Add or replace a grade point mapping
    #[must_use]
    pub fn with_grade_point(mut self, grade: &str, point: f64) -> Self {
        self.grade_points.insert(grade.to_string(), point);
        self
    }

    /// Add grade tokens to the valid-grade set
    #[must_use]
    pub fn with_valid_grades<'a>(mut self, grades: impl IntoIterator<Item = &'a str>) -> Self {
        self.valid_grades
            .extend(grades.into_iter().map(str::to_string));
        self
    }

    /// Append course codes to the Path 1 course list
    #[must_use]
    pub fn with_path1_courses<'a>(mut self, codes: impl IntoIterator<Item = &'a str>) -> Self {
        self.path1_courses
            .extend(codes.into_iter().map(normalize_code));
        self
    }

    /// Append course codes to the compulsory list of `path`
    #[must_use]
    pub fn with_compulsory<'a>(
        mut self,
        path: CurriculumPath,
        codes: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let list = match path {
            CurriculumPath::Path1 => &mut self.compulsory_path1,
            CurriculumPath::Path2 => &mut self.compulsory_path2,
        };
        list.extend(codes.into_iter().map(normalize_code));
        self
    }

    /// Append course codes to the GPA-ineligible list
    #[must_use]
    pub fn with_gpa_ineligible<'a>(mut self, codes: impl IntoIterator<Item = &'a str>) -> Self {
        self.gpa_ineligible
            .extend(codes.into_iter().map(normalize_code));
        self
    }

    /// Grade point for a grade token, `None` when the grade is unmapped
    #[must_use]
    pub fn grade_point(&self, grade: &str) -> Option<f64> {
        self.grade_points.get(grade).copied()
    }

    /// Whether `grade` is in the valid-grade set
    #[must_use]
    pub fn is_valid_grade(&self, grade: &str) -> bool {
        self.valid_grades.contains(grade)
    }

    /// Whether a normalized course code is excluded from GPA
    #[must_use]
    pub fn is_gpa_ineligible(&self, code: &str) -> bool {
        self.gpa_ineligible.iter().any(|c| c == code)
    }

    /// Courses that place a student on Path 1
    #[must_use]
    pub fn path1_courses(&self) -> &[String] {
        &self.path1_courses
    }

    /// Compulsory course list for a curriculum path
    #[must_use]
    pub fn compulsory_for(&self, path: CurriculumPath) -> &[String] {
        match path {
            CurriculumPath::Path1 => &self.compulsory_path1,
            CurriculumPath::Path2 => &self.compulsory_path2,
        }
    }

    /// Every configured course list with its display name
    #[must_use]
    pub fn course_lists(&self) -> [(&'static str, &[String]); 4] {
        [
            (PATH1_LIST, self.path1_courses.as_slice()),
            (COMPULSORY_PATH1_LIST, self.compulsory_path1.as_slice()),
            (COMPULSORY_PATH2_LIST, self.compulsory_path2.as_slice()),
            (GPA_INELIGIBLE_LIST, self.gpa_ineligible.as_slice()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG_TOML: &str = r#"
valid_grades = ["A", "B", "C", "Withheld"]
path1_courses = [" elec 11012 "]
compulsory_path1 = ["ELEC 11012", "phys 11012"]
compulsory_path2 = ["PHYS 11012"]
gpa_ineligible = ["aclt 11012"]

[grade_points]
A = 4.0
"B+" = 3.3
B = 3.0
"#;

    #[test]
    fn test_from_toml_normalizes_course_lists() {
        let catalog = Catalog::from_toml(CATALOG_TOML).expect("parse catalog");

        assert_eq!(catalog.path1_courses(), ["ELEC 11012"]);
        assert_eq!(
            catalog.compulsory_for(CurriculumPath::Path1),
            ["ELEC 11012", "PHYS 11012"]
        );
        assert!(catalog.is_gpa_ineligible("ACLT 11012"));
        assert!(!catalog.is_gpa_ineligible("aclt 11012"));
    }

    #[test]
    fn test_grade_tokens_are_verbatim() {
        let catalog = Catalog::from_toml(CATALOG_TOML).expect("parse catalog");

        assert_eq!(catalog.grade_point("B+"), Some(3.3));
        assert_eq!(catalog.grade_point("b+"), None);
        assert!(catalog.is_valid_grade("Withheld"));
        assert!(!catalog.is_valid_grade("withheld"));
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let catalog = Catalog::from_toml("").expect("parse empty catalog");
        assert_eq!(catalog, Catalog::new());
        assert!(catalog.grade_point("A").is_none());
    }

    #[test]
    fn test_builder_matches_toml() {
        let built = Catalog::new()
            .with_grade_point("A", 4.0)
            .with_valid_grades(["A"])
            .with_path1_courses(["elec 11012"])
            .with_compulsory(CurriculumPath::Path2, ["phys 11012"])
            .with_gpa_ineligible(["aclt 11012 "]);

        let parsed = Catalog::from_toml(
            r#"
valid_grades = ["A"]
path1_courses = ["ELEC 11012"]
compulsory_path2 = ["PHYS 11012"]
gpa_ineligible = ["ACLT 11012"]

[grade_points]
A = 4.0
"#,
        )
        .expect("parse catalog");

        assert_eq!(built, parsed);
    }

    #[test]
    fn test_course_lists_order() {
        let names: Vec<&str> = Catalog::new()
            .course_lists()
            .iter()
            .map(|(name, _)| *name)
            .collect();
        assert_eq!(
            names,
            vec![
                PATH1_LIST,
                COMPULSORY_PATH1_LIST,
                COMPULSORY_PATH2_LIST,
                GPA_INELIGIBLE_LIST
            ]
        );
    }

    #[test]
    fn test_invalid_toml_is_error() {
        assert!(Catalog::from_toml("grade_points = 3").is_err());
    }
}
