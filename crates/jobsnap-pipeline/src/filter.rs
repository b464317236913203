//! Title-based exclusion filter.

/// Returns true when the title contains any exclusion term,
/// case-insensitively.
///
/// Terms match as plain substrings, so `"recruiter"` drops
/// `"Senior Recruiter - HR Data"` but leaves `"HR Data Analyst"` alone.
/// A posting with no title cannot match and is never excluded here.
#[must_use]
pub fn title_is_excluded(title: &str, exclude_terms: &[String]) -> bool {
    let lowered = title.to_lowercase();
    exclude_terms
        .iter()
        .any(|term| lowered.contains(&term.to_lowercase()))
}
