use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Values the `JSearch` API accepts for its `date_posted` parameter.
pub const DATE_POSTED_VALUES: [&str; 5] = ["all", "today", "3days", "week", "month"];

/// A named cluster of interchangeable search phrases.
///
/// All phrases of a group are OR-ed into a single upstream query, so close
/// synonyms belong together and distinct roles belong in separate groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordGroup {
    pub label: String,
    pub phrases: Vec<String>,
}

/// The full search plan: what to ask the API and which results to drop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPlan {
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default = "default_date_posted")]
    pub date_posted: String,
    #[serde(default = "default_employment_types")]
    pub employment_types: String,
    pub groups: Vec<KeywordGroup>,
    #[serde(default = "default_exclude_titles")]
    pub exclude_titles: Vec<String>,
}

/// One rendered query string, tagged with the group it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub group: String,
    pub query: String,
}

fn default_location() -> String {
    "USA".to_string()
}

fn default_date_posted() -> String {
    "3days".to_string()
}

fn default_employment_types() -> String {
    "FULLTIME".to_string()
}

fn default_groups() -> Vec<KeywordGroup> {
    vec![
        KeywordGroup {
            label: "hr-data".to_string(),
            phrases: vec![
                "HR Data Analyst".to_string(),
                "People Analytics".to_string(),
                "HR Reporting Analyst".to_string(),
            ],
        },
        KeywordGroup {
            label: "hr-tech".to_string(),
            phrases: vec![
                "HR Technology".to_string(),
                "HRIS Analyst".to_string(),
                "People Systems Analyst".to_string(),
            ],
        },
    ]
}

fn default_exclude_titles() -> Vec<String> {
    [
        "recruiter",
        "recruiting",
        "talent acquisition",
        "sourcer",
        "staffing",
        "payroll",
        "receptionist",
    ]
    .map(str::to_string)
    .to_vec()
}

impl Default for SearchPlan {
    fn default() -> Self {
        SearchPlan {
            location: default_location(),
            date_posted: default_date_posted(),
            employment_types: default_employment_types(),
            groups: default_groups(),
            exclude_titles: default_exclude_titles(),
        }
    }
}

impl SearchPlan {
    /// Render one query string per keyword group.
    ///
    /// Each phrase is double-quoted so multi-word phrases survive the API's
    /// query parser, the phrases are OR-ed, and the location is appended:
    /// `("HR Data Analyst" OR "People Analytics") in USA`.
    #[must_use]
    pub fn queries(&self) -> Vec<SearchQuery> {
        self.groups
            .iter()
            .map(|group| {
                let joined = group
                    .phrases
                    .iter()
                    .map(|phrase| format!("\"{phrase}\""))
                    .collect::<Vec<_>>()
                    .join(" OR ");
                SearchQuery {
                    group: group.label.clone(),
                    query: format!("({joined}) in {}", self.location),
                }
            })
            .collect()
    }
}

/// Load and validate a search plan from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails
/// validation.
pub fn load_search_plan(path: &Path) -> Result<SearchPlan, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::SearchFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let plan: SearchPlan = serde_yaml::from_str(&content).map_err(ConfigError::SearchFileParse)?;

    validate_plan(&plan)?;

    Ok(plan)
}

fn validate_plan(plan: &SearchPlan) -> Result<(), ConfigError> {
    if plan.location.trim().is_empty() {
        return Err(ConfigError::Validation(
            "location must be non-empty".to_string(),
        ));
    }

    if !DATE_POSTED_VALUES.contains(&plan.date_posted.as_str()) {
        return Err(ConfigError::Validation(format!(
            "date_posted '{}' is not one of {DATE_POSTED_VALUES:?}",
            plan.date_posted
        )));
    }

    if plan.employment_types.trim().is_empty() {
        return Err(ConfigError::Validation(
            "employment_types must be non-empty".to_string(),
        ));
    }

    if plan.groups.is_empty() {
        return Err(ConfigError::Validation(
            "search plan must define at least one keyword group".to_string(),
        ));
    }

    let mut seen_labels = HashSet::new();
    for group in &plan.groups {
        if group.label.trim().is_empty() {
            return Err(ConfigError::Validation(
                "keyword group label must be non-empty".to_string(),
            ));
        }

        if group.phrases.is_empty() {
            return Err(ConfigError::Validation(format!(
                "keyword group '{}' must define at least one phrase",
                group.label
            )));
        }

        if group.phrases.iter().any(|phrase| phrase.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "keyword group '{}' contains an empty phrase",
                group.label
            )));
        }

        if !seen_labels.insert(group.label.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate keyword group label: '{}'",
                group.label
            )));
        }
    }

    if plan.exclude_titles.iter().any(|term| term.trim().is_empty()) {
        return Err(ConfigError::Validation(
            "exclusion terms must be non-empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
#[path = "search_test.rs"]
mod tests;
