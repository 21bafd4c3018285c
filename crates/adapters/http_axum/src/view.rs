//! View models shared by the HTML pages.

use showcase_domain::automation::{AutomationItem, KNOWN_BENEFITS, KnownCategory};
use showcase_domain::filter::FilterCriteria;

use crate::query::GalleryQuery;

/// Colour family used for a category badge, button or chip.
#[must_use]
pub fn category_tone(label: &str) -> &'static str {
    match KnownCategory::from_label(label) {
        Some(KnownCategory::SalesCrm) => "blue",
        Some(KnownCategory::Marketing) => "purple",
        Some(KnownCategory::Operations) => "green",
        Some(KnownCategory::Data) => "yellow",
        Some(KnownCategory::It) => "red",
        Some(KnownCategory::Hr) => "indigo",
        Some(KnownCategory::Finance) => "emerald",
        Some(KnownCategory::ECommerce) => "pink",
        None => "gray",
    }
}

/// Colour family used for a benefit badge, button or chip.
#[must_use]
pub fn benefit_tone(benefit: &str) -> &'static str {
    match benefit {
        "Productivity" => "green",
        "Sales" => "blue",
        "Cost Savings" => "yellow",
        _ => "gray",
    }
}

/// One automation rendered as a gallery card.
pub struct Card {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub category_tone: &'static str,
    pub primary_benefit: String,
    pub benefit_tone: &'static str,
}

impl From<&AutomationItem> for Card {
    fn from(item: &AutomationItem) -> Self {
        let category = item.category.label().to_string();
        Self {
            id: item.id.to_string(),
            title: item.title.clone(),
            description: item.description.clone(),
            category_tone: category_tone(&category),
            category,
            benefit_tone: benefit_tone(&item.primary_benefit),
            primary_benefit: item.primary_benefit.clone(),
        }
    }
}

/// A filter control: submitting it navigates to `target`.
pub struct FilterControl {
    pub label: String,
    pub active: bool,
    pub tone: &'static str,
    pub target: GalleryQuery,
}

/// Category toggle buttons, in scan order.
#[must_use]
pub fn category_buttons(criteria: &FilterCriteria) -> Vec<FilterControl> {
    KnownCategory::ALL
        .into_iter()
        .map(|category| {
            let mut next = criteria.clone();
            next.toggle_category(category.label());
            FilterControl {
                label: category.key().to_string(),
                active: criteria.has_category(category.label()),
                tone: category_tone(category.label()),
                target: GalleryQuery::from(&next),
            }
        })
        .collect()
}

/// Exclusive benefit toggle buttons.
#[must_use]
pub fn benefit_buttons(criteria: &FilterCriteria) -> Vec<FilterControl> {
    KNOWN_BENEFITS
        .into_iter()
        .map(|benefit| {
            let mut next = criteria.clone();
            next.toggle_benefit(benefit);
            FilterControl {
                label: benefit.to_string(),
                active: criteria.benefit() == benefit,
                tone: benefit_tone(benefit),
                target: GalleryQuery::from(&next),
            }
        })
        .collect()
}

/// Active-filter chips; submitting one removes that filter.
#[must_use]
pub fn active_chips(criteria: &FilterCriteria) -> Vec<FilterControl> {
    let categories = criteria.categories().iter().map(|label| {
        let mut next = criteria.clone();
        next.toggle_category(label);
        FilterControl {
            label: label.clone(),
            active: true,
            tone: category_tone(label),
            target: GalleryQuery::from(&next),
        }
    });
    let benefit = (!criteria.benefit().is_empty()).then(|| {
        let mut next = criteria.clone();
        next.clear_benefit();
        FilterControl {
            label: criteria.benefit().to_string(),
            active: true,
            tone: benefit_tone(criteria.benefit()),
            target: GalleryQuery::from(&next),
        }
    });
    categories.chain(benefit).collect()
}
