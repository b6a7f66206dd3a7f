//! Course code format check for catalog lists

use crate::core::catalog::Catalog;
use crate::core::models::InvalidCodeList;

/// Expected length of a course code (e.g., "ELEC 21012")
pub const COURSE_CODE_LENGTH: usize = 10;

/// Codes from `codes` whose length is not [`COURSE_CODE_LENGTH`], in list order
#[must_use]
pub fn invalid_codes(codes: &[String]) -> Vec<String> {
    codes
        .iter()
        .filter(|code| code.chars().count() != COURSE_CODE_LENGTH)
        .cloned()
        .collect()
}

/// Check every catalog course list. One entry per list, possibly empty.
#[must_use]
pub fn validate_catalog(catalog: &Catalog) -> Vec<InvalidCodeList> {
    catalog
        .course_lists()
        .into_iter()
        .map(|(list_name, codes)| InvalidCodeList {
            list_name: list_name.to_string(),
            codes: invalid_codes(codes),
        })
        .collect()
}
