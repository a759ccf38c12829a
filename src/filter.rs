//! Problem Card Filter
//!
//! Search box plus branch/skill selectors over the fixed list of problem cards.
//! Visibility is recomputed from the live inputs on every `input`/`change` event.

use std::rc::Rc;

use web_sys::Element;

use crate::config::FilterConfig;
use crate::models::{FilterState, ProblemCard};

/// Case-insensitive substring match of an already-lowercased query
fn contains_query(text: &str, query_lower: &str) -> bool {
    text.to_lowercase().contains(query_lower)
}

/// Whether `card` passes every filter dimension in `state`
pub fn is_visible(card: &ProblemCard, state: &FilterState) -> bool {
    let query = state.query();
    let matches_search = query.is_empty()
        || contains_query(&card.title, query)
        || contains_query(&card.description, query);

    matches_search && state.branch.accepts(&card.branch) && state.skill.accepts(&card.skill)
}

/// Visibility of every card, in order
pub fn visibility(cards: &[ProblemCard], state: &FilterState) -> Vec<bool> {
    cards.iter().map(|card| is_visible(card, state)).collect()
}

/// `display` style for a card
fn display_value(visible: bool, shown_display: &str) -> &str {
    if visible {
        shown_display
    } else {
        "none"
    }
}

/// Filter controls and the card snapshot taken at page-ready
pub struct CardFilter {
    search: Option<Element>,
    branch: Option<Element>,
    skill: Option<Element>,
    elements: Vec<Element>,
    cards: Vec<ProblemCard>,
    shown_display: String,
}

impl CardFilter {
    /// Look up controls and snapshot the cards. Missing controls are fine.
    pub fn from_page(config: &FilterConfig) -> Self {
        let search = page_dom::element_by_id(&config.search_input_id);
        let branch = page_dom::element_by_id(&config.branch_select_id);
        let skill = page_dom::element_by_id(&config.skill_select_id);

        let elements = page_dom::query_all(&config.card_selector);
        let cards = elements
            .iter()
            .map(|el| ProblemCard {
                title: page_dom::attr_or_empty(el, &config.title_attr),
                description: page_dom::attr_or_empty(el, &config.description_attr),
                branch: page_dom::attr_or_empty(el, &config.branch_attr),
                skill: page_dom::attr_or_empty(el, &config.skill_attr),
            })
            .collect::<Vec<_>>();

        log::debug!(
            "{} cards; search={} branch={} skill={}",
            cards.len(),
            search.is_some(),
            branch.is_some(),
            skill.is_some()
        );

        Self {
            search,
            branch,
            skill,
            elements,
            cards,
            shown_display: config.shown_display.clone(),
        }
    }

    /// Current values of whichever controls exist
    fn read_state(&self) -> FilterState {
        let value = |control: &Option<Element>| control.as_ref().and_then(page_dom::control_value);
        let (query, branch, skill) = (value(&self.search), value(&self.branch), value(&self.skill));
        FilterState::new(query.as_deref(), branch.as_deref(), skill.as_deref())
    }

    /// Recompute and apply visibility. Returns the number of visible cards.
    pub fn apply(&self) -> usize {
        let state = self.read_state();
        let visible = visibility(&self.cards, &state);
        for (el, &show) in self.elements.iter().zip(&visible) {
            page_dom::set_style(el, "display", display_value(show, &self.shown_display));
        }
        let shown = visible.iter().filter(|&&show| show).count();
        log::debug!("{}/{} cards visible", shown, self.cards.len());
        shown
    }

    /// Recompute on text input and selector changes
    pub fn attach(self: &Rc<Self>) {
        let bindings = [
            (&self.search, "input"),
            (&self.branch, "change"),
            (&self.skill, "change"),
        ];
        for (control, event) in bindings {
            if let Some(el) = control {
                let filter = Rc::clone(self);
                page_dom::on_event(el, event, move |_| {
                    filter.apply();
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryFilter;

    fn make_card(title: &str, description: &str, branch: &str, skill: &str) -> ProblemCard {
        ProblemCard {
            title: title.to_string(),
            description: description.to_string(),
            branch: branch.to_string(),
            skill: skill.to_string(),
        }
    }

    fn sample_cards() -> Vec<ProblemCard> {
        vec![
            make_card("Binary Search", "array", "algorithms", "easy"),
            make_card("DFS", "graph", "graphs", "hard"),
        ]
    }

    #[test]
    fn test_default_state_shows_everything() {
        let mut cards = sample_cards();
        cards.push(ProblemCard::default());
        let state = FilterState::new(Some(""), Some("all"), Some("all"));
        assert_eq!(visibility(&cards, &state), vec![true, true, true]);
    }

    #[test]
    fn test_search_matches_title_or_description() {
        let cards = sample_cards();
        let state = FilterState::new(Some("search"), Some("all"), Some("all"));
        assert_eq!(visibility(&cards, &state), vec![true, false]);

        let state = FilterState::new(Some("GRAPH"), None, None);
        assert_eq!(visibility(&cards, &state), vec![false, true]);
    }

    #[test]
    fn test_branch_only() {
        let cards = sample_cards();
        let state = FilterState::new(Some(""), Some("graphs"), Some("all"));
        assert_eq!(visibility(&cards, &state), vec![false, true]);
    }

    #[test]
    fn test_no_match_hides_everything() {
        let cards = sample_cards();
        let state = FilterState::new(Some("zzz"), None, None);
        assert_eq!(visibility(&cards, &state), vec![false, false]);
    }

    #[test]
    fn test_unmatched_query_hides_regardless_of_categories() {
        let card = make_card("Binary Search", "array", "algorithms", "easy");
        for (branch, skill) in [("all", "all"), ("algorithms", "all"), ("algorithms", "easy")] {
            let state = FilterState::new(Some("tree"), Some(branch), Some(skill));
            assert!(!is_visible(&card, &state));
        }
    }

    #[test]
    fn test_all_dimensions_combine() {
        let cards = vec![
            make_card("Two Sum", "hash map", "CSE", "easy"),
            make_card("Two Pointers", "array", "CSE", "medium"),
            make_card("Two Phase Commit", "distributed", "IT", "easy"),
        ];
        let state = FilterState::new(Some("two"), Some("CSE"), Some("easy"));
        assert_eq!(visibility(&cards, &state), vec![true, false, false]);
    }

    #[test]
    fn test_missing_attributes_are_empty() {
        let card = ProblemCard::default();
        assert!(is_visible(&card, &FilterState::default()));
        assert!(!is_visible(&card, &FilterState::new(Some("x"), None, None)));
        assert!(!is_visible(&card, &FilterState::new(None, Some("CSE"), None)));
    }

    #[test]
    fn test_missing_search_input_acts_as_empty_query() {
        let cards = sample_cards();
        let state = FilterState::new(None, Some("algorithms"), None);
        assert_eq!(state.query(), "");
        assert_eq!(state.branch, CategoryFilter::Only("algorithms".to_string()));
        assert_eq!(visibility(&cards, &state), vec![true, false]);
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let cards = sample_cards();
        let state = FilterState::new(Some("s"), Some("all"), Some("easy"));
        let once = visibility(&cards, &state);
        let twice = visibility(&cards, &state);
        assert_eq!(once, twice);
        assert_eq!(once, vec![true, false]);
    }

    #[test]
    fn test_display_values() {
        let cards = sample_cards();
        let state = FilterState::new(Some("dfs"), None, None);
        let displays: Vec<_> = visibility(&cards, &state)
            .into_iter()
            .map(|show| display_value(show, "block"))
            .collect();
        assert_eq!(displays, vec!["none", "block"]);
        assert_eq!(display_value(true, "flex"), "flex");
    }

    #[test]
    fn test_category_comparison_is_case_sensitive() {
        let cards = sample_cards();
        let state = FilterState::new(None, Some("Graphs"), None);
        assert_eq!(visibility(&cards, &state), vec![false, false]);
    }
}
