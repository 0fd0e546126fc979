use crate::catalog::domain::Scholarship;

/// Pre-filter applied before scoring: keeps scholarships whose required level
/// equals the user's declared level after trimming surrounding whitespace and
/// folding case. Input order (the repository's deadline order) is preserved.
///
/// Looser than the scorer's education gate; a candidate that passes here can
/// still be zeroed by the exact comparison when levels differ in case or
/// padding.
pub fn eligible_candidates<'a>(
    catalog: &'a [Scholarship],
    education_level: &str,
) -> Vec<&'a Scholarship> {
    let wanted = education_level.trim();
    catalog
        .iter()
        .filter(|scholarship| scholarship.education_level.trim().eq_ignore_ascii_case(wanted))
        .collect()
}
