//! Gallery filter engine.
//!
//! A [`FilterCriteria`] combines three independent predicates with AND:
//!
//! - **text**: case-insensitive substring of the title or the description
//! - **categories**: the item's category label is any of the selected ones
//! - **benefit**: the item lists the selected benefit among its focuses
//!
//! An empty predicate matches everything, so the default criteria select the
//! whole catalog. Filtering never mutates the base collection and keeps its
//! relative order.

use serde::{Deserialize, Serialize};

use crate::automation::AutomationItem;

/// Active filters of the gallery.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    query: String,
    /// Selected category labels, in selection order, without duplicates.
    categories: Vec<String>,
    benefit: String,
}

impl FilterCriteria {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.set_query(query);
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        if !self.has_category(&category) {
            self.categories.push(category);
        }
        self
    }

    #[must_use]
    pub fn with_benefit(mut self, benefit: impl Into<String>) -> Self {
        self.benefit = benefit.into();
        self
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    #[must_use]
    pub fn benefit(&self) -> &str {
        &self.benefit
    }

    #[must_use]
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    /// Whether any predicate is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || !self.categories.is_empty() || !self.benefit.is_empty()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Select `category` if it is not selected, deselect it otherwise.
    pub fn toggle_category(&mut self, category: &str) {
        if self.has_category(category) {
            self.categories.retain(|c| c != category);
        } else {
            self.categories.push(category.to_string());
        }
    }

    /// Select `benefit`, or clear the selection if it is already selected.
    pub fn toggle_benefit(&mut self, benefit: &str) {
        if self.benefit == benefit {
            self.benefit.clear();
        } else {
            self.benefit = benefit.to_string();
        }
    }

    pub fn clear_benefit(&mut self) {
        self.benefit.clear();
    }

    /// Remove every predicate.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn matches_text(&self, item: &AutomationItem) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        item.title.to_lowercase().contains(&needle)
            || item.description.to_lowercase().contains(&needle)
    }

    fn matches_category(&self, item: &AutomationItem) -> bool {
        self.categories.is_empty() || self.has_category(item.category.label())
    }

    fn matches_benefit(&self, item: &AutomationItem) -> bool {
        self.benefit.is_empty() || item.has_benefit(&self.benefit)
    }

    /// Whether `item` passes every active predicate.
    #[must_use]
    pub fn matches(&self, item: &AutomationItem) -> bool {
        self.matches_text(item) && self.matches_category(item) && self.matches_benefit(item)
    }

    /// Compute the visible subset of `base`, in base order.
    #[must_use]
    pub fn apply<'a>(&self, base: &'a [AutomationItem]) -> Vec<&'a AutomationItem> {
        base.iter().filter(|item| self.matches(item)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, tags: &[&str]) -> AutomationItem {
        tags.iter()
            .fold(AutomationItem::builder().title(title), |b, tag| b.tag(*tag))
            .build()
    }

    /// A: "CRM Bot" (Sales & CRM), B: "Invoice Sync" (Finance),
    /// C: "Sales Report" (Sales & CRM + Finance, resolves to Sales & CRM).
    fn scenario() -> Vec<AutomationItem> {
        vec![
            AutomationItem::builder()
                .title("CRM Bot")
                .description("Keeps sales leads warm")
                .tag("Sales & CRM")
                .build(),
            item("Invoice Sync", &["Finance"]),
            item("Sales Report", &["Sales & CRM", "Finance"]),
        ]
    }

    fn titles(items: &[&AutomationItem]) -> Vec<String> {
        items.iter().map(|i| i.title.clone()).collect()
    }

    #[test]
    fn should_return_whole_base_in_order_when_no_filter_is_active() {
        let base = scenario();
        let visible = FilterCriteria::new().apply(&base);
        assert_eq!(visible.len(), base.len());
        assert!(visible.iter().zip(&base).all(|(a, b)| std::ptr::eq(*a, b)));
    }

    #[test]
    fn should_match_query_case_insensitively() {
        let base = scenario();
        let visible = FilterCriteria::new().with_query("SALES").apply(&base);
        assert_eq!(titles(&visible), vec!["CRM Bot", "Sales Report"]);
    }

    #[test]
    fn should_match_query_against_description() {
        let base = vec![
            AutomationItem::builder()
                .title("CRM Bot")
                .description("Routes every new SALES lead")
                .build(),
            AutomationItem::builder().title("Invoice Sync").build(),
        ];
        let visible = FilterCriteria::new().with_query("sales").apply(&base);
        assert_eq!(titles(&visible), vec!["CRM Bot"]);
    }

    #[test]
    fn should_not_trim_query() {
        let base = vec![item("Invoice Sync", &[]), item("Invoicing", &[])];
        let visible = FilterCriteria::new().with_query("invoice ").apply(&base);
        assert_eq!(titles(&visible), vec!["Invoice Sync"]);
    }

    #[test]
    fn should_keep_items_of_any_selected_category() {
        let base = vec![
            item("Ticket Triage", &["IT"]),
            item("Payroll", &["HR"]),
            item("Budget", &["Finance"]),
        ];
        let visible = FilterCriteria::new()
            .with_category("IT")
            .with_category("Finance")
            .apply(&base);
        assert_eq!(titles(&visible), vec!["Ticket Triage", "Budget"]);
    }

    #[test]
    fn should_filter_by_display_label_not_tag_key() {
        let base = vec![item("Newsletter", &["Marketing"])];
        assert!(FilterCriteria::new().with_category("Marketing").apply(&base).is_empty());
        let visible = FilterCriteria::new()
            .with_category("Marketing & Content Creation")
            .apply(&base);
        assert_eq!(titles(&visible), vec!["Newsletter"]);
    }

    #[test]
    fn should_keep_items_listing_selected_benefit_anywhere() {
        let base = vec![
            AutomationItem::builder()
                .title("Lead Scoring")
                .benefit("Sales")
                .benefit("Productivity")
                .build(),
            AutomationItem::builder().title("Invoice Sync").benefit("Cost Savings").build(),
        ];
        let visible = FilterCriteria::new().with_benefit("Productivity").apply(&base);
        assert_eq!(titles(&visible), vec!["Lead Scoring"]);
    }

    #[test]
    fn should_yield_nothing_when_query_and_category_disagree() {
        let base = scenario();
        let visible = FilterCriteria::new()
            .with_query("sales")
            .with_category("Finance")
            .apply(&base);
        assert!(visible.is_empty());
    }

    #[test]
    fn should_combine_query_and_category_with_and() {
        let base = scenario();
        let visible = FilterCriteria::new()
            .with_query("sync")
            .with_category("Finance")
            .apply(&base);
        assert_eq!(titles(&visible), vec!["Invoice Sync"]);
    }

    #[test]
    fn should_agree_with_matches_for_every_item() {
        let base = scenario();
        let criteria = FilterCriteria::new().with_query("s").with_category("Sales & CRM");
        let visible = criteria.apply(&base);
        let expected: Vec<&AutomationItem> = base.iter().filter(|i| criteria.matches(i)).collect();
        assert_eq!(visible, expected);
    }

    #[test]
    fn should_toggle_category_on_and_off() {
        let mut criteria = FilterCriteria::new();
        criteria.toggle_category("IT");
        criteria.toggle_category("HR");
        assert_eq!(criteria.categories(), ["IT", "HR"]);
        criteria.toggle_category("IT");
        assert_eq!(criteria.categories(), ["HR"]);
    }

    #[test]
    fn should_toggle_benefit_exclusively() {
        let mut criteria = FilterCriteria::new();
        criteria.toggle_benefit("Sales");
        assert_eq!(criteria.benefit(), "Sales");
        criteria.toggle_benefit("Productivity");
        assert_eq!(criteria.benefit(), "Productivity");
        criteria.toggle_benefit("Productivity");
        assert_eq!(criteria.benefit(), "");
    }

    #[test]
    fn should_ignore_duplicate_category_in_builder() {
        let criteria = FilterCriteria::new().with_category("IT").with_category("IT");
        assert_eq!(criteria.categories(), ["IT"]);
    }

    #[test]
    fn should_clear_every_predicate_on_reset() {
        let mut criteria = FilterCriteria::new()
            .with_query("bot")
            .with_category("IT")
            .with_benefit("Sales");
        assert!(criteria.is_active());
        criteria.reset();
        assert!(!criteria.is_active());
        assert_eq!(criteria, FilterCriteria::default());
    }

    #[test]
    fn should_report_inactive_after_clearing_benefit_only_filter() {
        let mut criteria = FilterCriteria::new().with_benefit("Sales");
        criteria.clear_benefit();
        assert!(!criteria.is_active());
    }
}
