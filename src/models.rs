//! Page Models
//!
//! Data structures read from (or driven onto) the server-rendered page.

/// Problem card attributes, read once from the card's data attributes.
/// Missing attributes are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProblemCard {
    pub title: String,
    pub description: String,
    /// Category A ("branch")
    pub branch: String,
    /// Category B ("skill")
    pub skill: String,
}

/// One category dimension of the filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Keyword selectors use for "no restriction"
    pub const ALL: &'static str = "all";

    /// Build from a selector value. Absent, empty and "all" mean no restriction.
    pub fn from_value(value: Option<&str>) -> Self {
        match value {
            None | Some("") | Some(Self::ALL) => CategoryFilter::All,
            Some(token) => CategoryFilter::Only(token.to_string()),
        }
    }

    pub fn accepts(&self, tag: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(token) => token == tag,
        }
    }
}

/// Live filter inputs, rebuilt on every evaluation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Lowercased free-text query ("" matches everything)
    query: String,
    pub branch: CategoryFilter,
    pub skill: CategoryFilter,
}

impl FilterState {
    pub fn new(query: Option<&str>, branch: Option<&str>, skill: Option<&str>) -> Self {
        Self {
            query: query.unwrap_or_default().to_lowercase(),
            branch: CategoryFilter::from_value(branch),
            skill: CategoryFilter::from_value(skill),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}

/// Flash notification lifecycle. Phases only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NotificationPhase {
    Shown,
    Fading,
    Removed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_filter_from_value() {
        assert_eq!(CategoryFilter::from_value(None), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_value(Some("")), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_value(Some("all")), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_value(Some("CSE")),
            CategoryFilter::Only("CSE".to_string())
        );
    }

    #[test]
    fn test_category_match_is_exact() {
        let filter = CategoryFilter::from_value(Some("CSE"));
        assert!(filter.accepts("CSE"));
        assert!(!filter.accepts("cse"));
        assert!(!filter.accepts(""));
        assert!(CategoryFilter::All.accepts(""));
    }

    #[test]
    fn test_filter_state_lowercases_query() {
        let state = FilterState::new(Some("Binary"), None, Some("all"));
        assert_eq!(state.query(), "binary");
        assert_eq!(state.branch, CategoryFilter::All);
        assert_eq!(state.skill, CategoryFilter::All);
    }

    #[test]
    fn test_missing_query_is_empty() {
        assert_eq!(FilterState::new(None, None, None), FilterState::default());
    }

    #[test]
    fn test_notification_phases_are_ordered() {
        assert!(NotificationPhase::Shown < NotificationPhase::Fading);
        assert!(NotificationPhase::Fading < NotificationPhase::Removed);
    }
}
