use crate::catalog::domain::Category;

pub const FULL_MATCH: u8 = 100;
pub(crate) const EDUCATION_WEIGHT: u8 = 40;
const CGPA_WEIGHT: u8 = 20;
const CGPA_PARTIAL: u8 = 10;
const INCOME_WEIGHT: u8 = 20;
const CATEGORY_WEIGHT: u8 = 20;

const CGPA_FULL_THRESHOLD: f64 = 7.5;
const CGPA_PARTIAL_THRESHOLD: f64 = 6.0;

/// Tiered academic dimension. A missing CGPA lands in the lowest tier on
/// purpose: the rubric treats "no academic record" like a failing one,
/// unlike the income and category dimensions which skip when data is absent.
pub(crate) fn cgpa_points(cgpa: Option<f64>) -> (u8, Option<String>) {
    let value = cgpa.unwrap_or(0.0);
    if value >= CGPA_FULL_THRESHOLD {
        (CGPA_WEIGHT, None)
    } else if value >= CGPA_PARTIAL_THRESHOLD {
        (
            CGPA_PARTIAL,
            Some("CGPA is below 7.5 (Partial match points awarded)".to_string()),
        )
    } else {
        (
            0,
            Some("CGPA is below 6.0 (No academic match points awarded)".to_string()),
        )
    }
}

/// Evaluated only when both sides declare a non-zero figure; otherwise the
/// dimension is skipped entirely and its 20 points are unavailable.
pub(crate) fn income_points(
    family_income: Option<u64>,
    ceiling: Option<u64>,
) -> Option<(u8, Option<String>)> {
    let income = family_income.filter(|value| *value > 0)?;
    let ceiling = ceiling.filter(|value| *value > 0)?;

    if income <= ceiling {
        Some((INCOME_WEIGHT, None))
    } else {
        Some((0, Some(format!("Family income exceeds {ceiling} limit"))))
    }
}

/// Evaluated only when both sides carry a category. A scholarship tagged
/// `GEN` is open to everyone.
pub(crate) fn category_points(
    user: Option<Category>,
    scholarship: Option<Category>,
) -> Option<(u8, Option<String>)> {
    let user = user?;
    let scholarship = scholarship?;

    if scholarship == user || scholarship == Category::Gen {
        Some((CATEGORY_WEIGHT, None))
    } else {
        Some((
            0,
            Some(format!(
                "Scholarship is reserved for {} category",
                scholarship.label()
            )),
        ))
    }
}
